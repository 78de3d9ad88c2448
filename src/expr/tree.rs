use crate::common::*;
use serde::{Deserialize, Serialize};

/// A dice formula that has not been rolled yet.
///
/// Expressions are plain immutable data: build one from game data, then hand
/// it to [`summarize`](super::summarize) or [`evaluate`](crate::evaluate) as
/// many times as needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[enum_dispatch::enum_dispatch(Named)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expression {
    Constant(Constant),
    DieRoll(DieRoll),
    MultiDieRoll(MultiDieRoll),
    Sum(Sum),
}

impl Expression {
    /// Attaches a display name to this node.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.set_name(name.into());
        self
    }

    /// Number of dice an evaluation rolls. Negative repeat counts add none.
    pub fn dice_count(&self) -> usize {
        match self {
            Self::Constant(_) => 0,
            Self::DieRoll(_) => 1,
            Self::MultiDieRoll(x) => usize::try_from(x.num_die).unwrap_or(0),
            Self::Sum(x) => x
                .children
                .iter()
                .map(Self::dice_count)
                .fold(0, usize::saturating_add),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Constant {
    pub value: Int,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Constant {
    pub fn new(value: Int) -> Self {
        Self { value, name: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DieRoll {
    pub die: Int,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl DieRoll {
    pub fn new(die: Int) -> Self {
        Self { die, name: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MultiDieRoll {
    pub die: Int,
    pub num_die: Int,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl MultiDieRoll {
    pub fn new(die: Int, num_die: Int) -> Self {
        Self {
            die,
            num_die,
            name: None,
        }
    }
}

/// Ordered sum of sub-expressions. May be empty and may nest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sum {
    #[serde(default)]
    pub children: Vec<Expression>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Sum {
    pub fn new(children: Vec<Expression>) -> Self {
        Self {
            children,
            name: None,
        }
    }
}

impl_named!(Constant, DieRoll, MultiDieRoll, Sum);

pub fn constant(value: Int) -> Expression {
    Constant::new(value).into()
}

/// A single die with `die` faces.
///
/// Face counts below one are not rejected here; see [`Roller`](crate::roll::Roller)
/// for how they roll.
pub fn die_roll(die: Int) -> Expression {
    DieRoll::new(die).into()
}

pub fn d4() -> Expression {
    die_roll(4)
}

pub fn d6() -> Expression {
    die_roll(6)
}

pub fn d8() -> Expression {
    die_roll(8)
}

pub fn d10() -> Expression {
    die_roll(10)
}

pub fn d12() -> Expression {
    die_roll(12)
}

pub fn d20() -> Expression {
    die_roll(20)
}

/// `num_die` dice with `die` faces each, e.g. `multi_die_roll(6, 2)` is 2d6.
pub fn multi_die_roll(die: Int, num_die: Int) -> Expression {
    MultiDieRoll::new(die, num_die).into()
}

pub fn sum(children: impl IntoIterator<Item = Expression>) -> Expression {
    Sum::new(children.into_iter().collect()).into()
}
