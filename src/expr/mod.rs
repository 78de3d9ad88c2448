mod summary;
mod tree;
pub mod visit;

pub use summary::{labelled_summary, summarize};
pub use tree::*;
