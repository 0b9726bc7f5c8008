use core::{iter::FusedIterator, ops::RangeInclusive};
use fastrand::Rng;

/// An endless stream of array lengths, each drawn uniformly and independently
/// from an inclusive range.
///
/// An inverted range collapses to its start.
#[derive(Clone, Debug)]
pub struct Counts {
    start: usize,
    end: usize,
    random: Rng,
}

impl Counts {
    pub fn new(range: RangeInclusive<usize>, seed: u64) -> Self {
        let (start, end) = range.into_inner();
        Self {
            start,
            end: end.max(start),
            random: Rng::with_seed(seed),
        }
    }

    #[inline]
    pub const fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub const fn end(&self) -> usize {
        self.end
    }
}

impl Iterator for Counts {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.random.usize(self.start..=self.end))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for Counts {}

pub(crate) fn seed() -> u64 {
    fastrand::u64(..)
}
