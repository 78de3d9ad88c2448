mod ctx;
mod roller;
mod stringify;
mod tree;
pub mod visit;

use crate::expr::Expression;

pub use ctx::{DefaultRoller, RollContext};
pub use roller::{Roller, Rolls, SequenceRoller};
pub use stringify::{label, MarkdownStringifier, PlainStringifier, Stringify, ARROW};
pub use tree::*;

/// Rolls `expr` once with the thread-local generator.
pub fn evaluate(expr: &Expression) -> RollResult {
    RollContext::default().eval(expr)
}

/// Rolls `expr` once with the given roller.
pub fn evaluate_with<R: Roller>(expr: &Expression, roller: R) -> RollResult {
    RollContext::new(roller).eval(expr)
}
