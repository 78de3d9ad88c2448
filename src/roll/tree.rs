use super::visit::AcceptRoll;
use crate::common::*;
use serde::{Deserialize, Serialize};

#[enum_dispatch::enum_dispatch]
pub trait Eval {
    /// Total of this node.
    ///
    /// Totals saturate at [`Int::MIN`] and [`Int::MAX`] instead of
    /// overflowing, so evaluating any expression never panics.
    fn value(&self) -> Int;
}

/// Saturating sum of `values`.
pub(crate) fn total(values: impl IntoIterator<Item = Int>) -> Int {
    values.into_iter().fold(0, Int::saturating_add)
}

/// One rolled sample of an [`Expression`](crate::expr::Expression).
///
/// The tree mirrors the expression it came from node for node, with every
/// sum's children kept in their original order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[enum_dispatch::enum_dispatch(Eval, Named, AcceptRoll)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RollResult {
    Constant(ConstantResult),
    DieRoll(DieRollResult),
    MultiDieRoll(MultiDieRollResult),
    Sum(SumResult),
}

impl RollResult {
    /// Direct children; empty for everything but sums.
    pub fn children(&self) -> &[RollResult] {
        match self {
            Self::Sum(x) => &x.children,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConstantResult {
    pub value: Int,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Eval for ConstantResult {
    fn value(&self) -> Int {
        self.value
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DieRollResult {
    pub value: Int,
    pub die: Int,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl DieRollResult {
    /// Rolled the highest face.
    pub fn is_max(&self) -> bool {
        self.value == self.die
    }

    /// Rolled a one.
    pub fn is_min(&self) -> bool {
        self.value == 1
    }
}

impl Eval for DieRollResult {
    fn value(&self) -> Int {
        self.value
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MultiDieRollResult {
    pub value: Int,
    pub die: Int,
    pub die_results: Vec<Int>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl MultiDieRollResult {
    pub(crate) fn new(die: Int, die_results: Vec<Int>, name: Option<String>) -> Self {
        Self {
            value: total(die_results.iter().copied()),
            die,
            die_results,
            name,
        }
    }
}

impl Eval for MultiDieRollResult {
    fn value(&self) -> Int {
        self.value
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SumResult {
    pub value: Int,
    pub children: Vec<RollResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl SumResult {
    pub(crate) fn new(children: Vec<RollResult>, name: Option<String>) -> Self {
        Self {
            value: total(children.iter().map(Eval::value)),
            children,
            name,
        }
    }
}

impl Eval for SumResult {
    fn value(&self) -> Int {
        self.value
    }
}

impl_named!(ConstantResult, DieRollResult, MultiDieRollResult, SumResult);
