use super::tree::*;
use super::visit::{AcceptRoll, VisitRoll};
use crate::common::*;

pub const ARROW: char = '\u{2192}';

const INDENT: &str = "  ";

/// `"<name> = <rhs>"`, or just `rhs` for unnamed nodes.
pub fn label(name: Option<&str>, rhs: &str) -> String {
    match name {
        Some(name) => format!("{} = {}", name, rhs),
        None => rhs.to_owned(),
    }
}

fn indent(s: &str) -> String {
    s.lines()
        .map(|line| format!("{}{}", INDENT, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders a [`RollResult`] as one line per node.
///
/// A sum lists its children first, one level deeper, then its own line
/// adding their values together.
pub trait Stringify {
    fn stringify<A: AcceptRoll>(&mut self, a: &A) -> String {
        a.accept(self)
    }

    fn str_constant(&mut self, x: &ConstantResult) -> String {
        label(x.name(), &x.value.to_string())
    }

    fn str_die_roll(&mut self, x: &DieRollResult) -> String {
        let face = self.str_face(x.value, x.die);
        label(x.name(), &format!("Roll d{} {} {}", x.die, ARROW, face))
    }

    fn str_multi_die_roll(&mut self, x: &MultiDieRollResult) -> String {
        let faces = x
            .die_results
            .iter()
            .map(|&v| self.str_face(v, x.die))
            .collect::<Vec<_>>()
            .join(" + ");
        let total = self.str_total(x.value);
        let rhs = if faces.is_empty() {
            format!("Roll {}d{} {} {}", x.die_results.len(), x.die, ARROW, total)
        } else {
            format!("Roll {}d{} {} {} = {}", x.die_results.len(), x.die, ARROW, faces, total)
        };
        label(x.name(), &rhs)
    }

    fn str_sum(&mut self, x: &SumResult) -> String {
        let mut lines: Vec<_> = x
            .children
            .iter()
            .map(|child| indent(&self.stringify(child)))
            .collect();

        let parts = x
            .children
            .iter()
            .map(|child| child.value().to_string())
            .collect::<Vec<_>>()
            .join(" + ");
        let total = self.str_total(x.value);
        let rhs = if parts.is_empty() {
            total
        } else {
            format!("{} = {}", parts, total)
        };
        lines.push(label(x.name(), &rhs));
        lines.join("\n")
    }

    fn str_face(&mut self, value: Int, _die: Int) -> String {
        value.to_string()
    }

    fn str_total(&mut self, value: Int) -> String {
        value.to_string()
    }
}

#[derive(Default)]
pub struct PlainStringifier;

impl PlainStringifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stringify<A: AcceptRoll>(&mut self, roll: &A) -> String {
        Stringify::stringify(self, roll)
    }
}

impl Stringify for PlainStringifier {}

/// Bolds natural maxima and ones, and puts totals in code spans.
#[derive(Default)]
pub struct MarkdownStringifier;

impl MarkdownStringifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stringify<A: AcceptRoll>(&mut self, roll: &A) -> String {
        Stringify::stringify(self, roll)
    }
}

impl Stringify for MarkdownStringifier {
    fn str_face(&mut self, value: Int, die: Int) -> String {
        if value == 1 || value == die {
            format!("**{}**", value)
        } else {
            value.to_string()
        }
    }

    fn str_total(&mut self, value: Int) -> String {
        format!("`{}`", value)
    }
}

impl<S: ?Sized> VisitRoll for S
where
    S: Stringify,
{
    type Output = String;

    fn visit_constant(&mut self, x: &ConstantResult) -> Self::Output {
        self.str_constant(x)
    }

    fn visit_die_roll(&mut self, x: &DieRollResult) -> Self::Output {
        self.str_die_roll(x)
    }

    fn visit_multi_die_roll(&mut self, x: &MultiDieRollResult) -> Self::Output {
        self.str_multi_die_roll(x)
    }

    fn visit_sum(&mut self, x: &SumResult) -> Self::Output {
        self.str_sum(x)
    }
}
