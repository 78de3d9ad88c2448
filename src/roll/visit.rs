use super::tree::*;

pub trait VisitRoll {
    type Output;

    fn visit<A: AcceptRoll>(&mut self, a: &A) -> Self::Output {
        a.accept(self)
    }

    fn visit_constant(&mut self, x: &ConstantResult) -> Self::Output;

    fn visit_die_roll(&mut self, x: &DieRollResult) -> Self::Output;

    fn visit_multi_die_roll(&mut self, x: &MultiDieRollResult) -> Self::Output;

    fn visit_sum(&mut self, x: &SumResult) -> Self::Output;
}

#[enum_dispatch::enum_dispatch]
pub trait AcceptRoll: Sized + Eval {
    fn accept<V: VisitRoll + ?Sized>(&self, v: &mut V) -> V::Output;
}

impl AcceptRoll for ConstantResult {
    fn accept<V: VisitRoll + ?Sized>(&self, v: &mut V) -> V::Output {
        v.visit_constant(self)
    }
}

impl AcceptRoll for DieRollResult {
    fn accept<V: VisitRoll + ?Sized>(&self, v: &mut V) -> V::Output {
        v.visit_die_roll(self)
    }
}

impl AcceptRoll for MultiDieRollResult {
    fn accept<V: VisitRoll + ?Sized>(&self, v: &mut V) -> V::Output {
        v.visit_multi_die_roll(self)
    }
}

impl AcceptRoll for SumResult {
    fn accept<V: VisitRoll + ?Sized>(&self, v: &mut V) -> V::Output {
        v.visit_sum(self)
    }
}
