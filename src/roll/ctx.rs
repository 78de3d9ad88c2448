use super::{roller::Roller, tree::*};
use crate::common::*;
use crate::expr::{
    summarize,
    visit::{Accept, ExprVisitor},
    Constant, DieRoll, Expression, MultiDieRoll, Sum,
};

pub type DefaultRoller = rand::prelude::ThreadRng;

/// Evaluates expressions against a [`Roller`], keeping count of the dice it
/// has thrown.
pub struct RollContext<R = DefaultRoller> {
    rolls: usize,
    roller: R,
}

impl<R: Roller> RollContext<R> {
    pub fn new(roller: R) -> Self {
        Self { rolls: 0, roller }
    }

    /// Number of dice rolled so far by this context.
    pub fn rolls(&self) -> usize {
        self.rolls
    }

    pub fn into_roller(self) -> R {
        self.roller
    }

    fn roll_one(&mut self, sides: Int) -> Int {
        self.rolls = self.rolls.saturating_add(1);
        let value = self.roller.roll(sides);
        log::trace!("rolled d{} -> {}", sides, value);
        value
    }

    /// Rolls `num` dice in order. A negative count rolls nothing.
    fn roll(&mut self, num: Int, sides: Int) -> Vec<Int> {
        let num = usize::try_from(num).unwrap_or(0);
        self.rolls = self.rolls.saturating_add(num);
        let values: Vec<_> = self.roller.roll_iter(num, sides).collect();
        log::trace!("rolled {}d{} -> {:?}", num, sides, values);
        values
    }

    pub fn eval(&mut self, expr: &Expression) -> RollResult {
        let before = self.rolls;
        let ret = expr.accept(self);
        log::debug!(
            "evaluated {:?} ({}) = {} using {} dice",
            expr.name().unwrap_or_default(),
            summarize(expr),
            ret.value(),
            self.rolls - before,
        );
        ret
    }
}

impl Default for RollContext {
    fn default() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Roller> ExprVisitor for RollContext<R> {
    type Output = RollResult;

    fn visit_constant(&mut self, x: &Constant) -> Self::Output {
        ConstantResult {
            value: x.value,
            name: x.name.clone(),
        }
        .into()
    }

    fn visit_die_roll(&mut self, x: &DieRoll) -> Self::Output {
        DieRollResult {
            value: self.roll_one(x.die),
            die: x.die,
            name: x.name.clone(),
        }
        .into()
    }

    fn visit_multi_die_roll(&mut self, x: &MultiDieRoll) -> Self::Output {
        let values = self.roll(x.num_die, x.die);
        MultiDieRollResult::new(x.die, values, x.name.clone()).into()
    }

    fn visit_sum(&mut self, x: &Sum) -> Self::Output {
        let children = x.children.iter().map(|child| self.visit(child)).collect();
        SumResult::new(children, x.name.clone()).into()
    }
}
