use super::tree::*;

pub trait ExprVisitor {
    type Output;

    fn visit<T: ?Sized>(&mut self, node: &T) -> Self::Output
    where
        T: Accept<Self>,
    {
        node.accept(self)
    }

    fn visit_constant(&mut self, x: &Constant) -> Self::Output;

    fn visit_die_roll(&mut self, x: &DieRoll) -> Self::Output;

    fn visit_multi_die_roll(&mut self, x: &MultiDieRoll) -> Self::Output;

    fn visit_sum(&mut self, x: &Sum) -> Self::Output;
}

pub trait Accept<V: ExprVisitor + ?Sized> {
    fn accept(&self, v: &mut V) -> V::Output;
}

impl<V: ExprVisitor + ?Sized> Accept<V> for Expression {
    fn accept(&self, v: &mut V) -> V::Output {
        match self {
            Self::Constant(x) => v.visit_constant(x),
            Self::DieRoll(x) => v.visit_die_roll(x),
            Self::MultiDieRoll(x) => v.visit_multi_die_roll(x),
            Self::Sum(x) => v.visit_sum(x),
        }
    }
}
