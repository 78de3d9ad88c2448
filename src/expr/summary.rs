use super::tree::*;
use super::visit::ExprVisitor;
use crate::common::*;
use std::collections::BTreeMap;
use std::fmt::{self, Write};

/// Renders `expr` as a compact formula such as `"d20 + 2d6 + 7"`.
///
/// Leaves render as themselves. Sums are flattened through any depth of
/// nesting, dice are grouped by face count (largest first) and constants are
/// folded into a single trailing term. No dice are rolled.
pub fn summarize(expr: &Expression) -> String {
    Summarizer.visit(expr)
}

/// Like [`summarize`], prefixed with `"<name> = "` when the expression is named.
pub fn labelled_summary(expr: &Expression) -> String {
    let formula = summarize(expr);
    match expr.name() {
        Some(name) => format!("{} = {}", name, formula),
        None => formula,
    }
}

struct Summarizer;

impl ExprVisitor for Summarizer {
    type Output = String;

    fn visit_constant(&mut self, x: &Constant) -> Self::Output {
        x.value.to_string()
    }

    fn visit_die_roll(&mut self, x: &DieRoll) -> Self::Output {
        format!("d{}", x.die)
    }

    fn visit_multi_die_roll(&mut self, x: &MultiDieRoll) -> Self::Output {
        format!("{}d{}", x.num_die, x.die)
    }

    fn visit_sum(&mut self, x: &Sum) -> Self::Output {
        let mut terms = Terms::default();
        terms.visit_sum(x);
        terms.to_string()
    }
}

/// Accumulated like terms of a flattened sum. Counts and the constant
/// saturate at the bounds of [`Int`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct Terms {
    /// Face count to signed multiplicity.
    dice: BTreeMap<Int, Int>,
    constant: Int,
}

impl Terms {
    fn add_dice(&mut self, die: Int, num: Int) {
        let mult = self.dice.entry(die).or_default();
        *mult = mult.saturating_add(num);
    }
}

impl ExprVisitor for Terms {
    type Output = ();

    fn visit_constant(&mut self, x: &Constant) {
        self.constant = self.constant.saturating_add(x.value);
    }

    fn visit_die_roll(&mut self, x: &DieRoll) {
        self.add_dice(x.die, 1);
    }

    fn visit_multi_die_roll(&mut self, x: &MultiDieRoll) {
        self.add_dice(x.die, x.num_die);
    }

    fn visit_sum(&mut self, x: &Sum) {
        for child in &x.children {
            self.visit(child);
        }
    }
}

impl fmt::Display for Terms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dice = self.dice.iter().rev().map(|(&die, &mult)| {
            let text = match mult.unsigned_abs() {
                1 => format!("d{}", die),
                n => format!("{}d{}", n, die),
            };
            (mult < 0, text)
        });
        let constant = (self.constant != 0)
            .then(|| (self.constant < 0, self.constant.unsigned_abs().to_string()));

        for (i, (negative, text)) in dice.chain(constant).enumerate() {
            match (i, negative) {
                (0, false) => {}
                (0, true) => f.write_char('-')?,
                (_, false) => f.write_str(" + ")?,
                (_, true) => f.write_str(" - ")?,
            }
            f.write_str(&text)?;
        }
        Ok(())
    }
}
