pub use vec1::vec1;

/// Integer type used for constants, face counts, die counts and totals.
pub type Int = i32;

pub type NonEmpty<T> = vec1::Vec1<T>;

/// Display name carried by expression and result nodes.
#[enum_dispatch::enum_dispatch]
pub trait Named {
    fn name(&self) -> Option<&str>;

    fn set_name(&mut self, name: String);
}

macro_rules! impl_named {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl crate::common::Named for $ty {
                fn name(&self) -> Option<&str> {
                    self.name.as_deref()
                }

                fn set_name(&mut self, name: String) {
                    self.name = Some(name);
                }
            }
        )+
    };
}

pub(crate) use impl_named;
