use crate::common::*;
use rand::{
    distributions::{DistIter, Distribution, Uniform},
    Rng,
};

/// Source of die faces.
///
/// Every roll lands in `[1, sides]`. A face count below one is rolled as a
/// one-faced die, so it always produces `1`.
pub trait Roller {
    type RollIter<'a>: Iterator<Item = Int> + 'a
    where
        Self: 'a;

    fn roll(&mut self, sides: Int) -> Int;

    fn roll_iter(&mut self, num: usize, sides: Int) -> Self::RollIter<'_>;
}

impl<R: Rng> Roller for R {
    type RollIter<'a> = std::iter::Take<DistIter<Uniform<Int>, &'a mut Self, Int>>
    where
        Self: 'a;

    fn roll(&mut self, sides: Int) -> Int {
        self.gen_range(1..=sides.max(1))
    }

    fn roll_iter(&mut self, num: usize, sides: Int) -> Self::RollIter<'_> {
        Uniform::new_inclusive(1, sides.max(1))
            .sample_iter(self)
            .take(num)
    }
}

/// Maps any `face` onto `[1, sides]`, counting round from one.
fn wrap_face(face: Int, sides: Int) -> Int {
    face.wrapping_sub(1).rem_euclid(sides.max(1)) + 1
}

/// Rolls `num` dice one at a time through [`Roller::roll`].
pub struct Rolls<'a, R: ?Sized> {
    roller: &'a mut R,
    num: usize,
    sides: Int,
}

impl<'a, R: Roller + ?Sized> Rolls<'a, R> {
    pub fn new(roller: &'a mut R, num: usize, sides: Int) -> Self {
        Self { roller, num, sides }
    }
}

impl<R: Roller + ?Sized> Iterator for Rolls<'_, R> {
    type Item = Int;

    fn next(&mut self) -> Option<Self::Item> {
        if self.num == 0 {
            None
        } else {
            self.num -= 1;
            Some(self.roller.roll(self.sides))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.num, Some(self.num))
    }
}

/// Replays a fixed list of faces, wrapping around when it runs out.
///
/// A face larger than the die is wrapped into range, so `7` on a d6 reads
/// as `1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRoller {
    faces: NonEmpty<Int>,
    next: usize,
}

impl SequenceRoller {
    pub fn new(faces: NonEmpty<Int>) -> Self {
        Self { faces, next: 0 }
    }
}

impl Roller for SequenceRoller {
    type RollIter<'a> = Rolls<'a, Self>;

    fn roll(&mut self, sides: Int) -> Int {
        let face = self.faces[self.next % self.faces.len()];
        self.next = self.next.wrapping_add(1);
        wrap_face(face, sides)
    }

    fn roll_iter(&mut self, num: usize, sides: Int) -> Self::RollIter<'_> {
        Rolls::new(self, num, sides)
    }
}

/// Counts upwards from `initial` by `step`, wrapped into each die's range.
#[cfg(test)]
pub(crate) struct StepRoller {
    current: Int,
    step: Int,
}

#[cfg(test)]
impl StepRoller {
    pub fn new(initial: Int, step: Int) -> Self {
        Self {
            current: initial,
            step,
        }
    }
}

#[cfg(test)]
impl Roller for StepRoller {
    type RollIter<'a> = Rolls<'a, Self>;

    fn roll(&mut self, sides: Int) -> Int {
        let ret = wrap_face(self.current, sides);
        self.current = self.current.wrapping_add(self.step);
        ret
    }

    fn roll_iter(&mut self, num: usize, sides: Int) -> Self::RollIter<'_> {
        Rolls::new(self, num, sides)
    }
}
