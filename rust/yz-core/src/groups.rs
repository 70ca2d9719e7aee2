//! Dice grouping: face frequency table and face-descending groups.
//!
//! Grouping is a derived, read-only view of a `Hand`; nothing here is cached on the hand.

use crate::hand::{Hand, MAX_FACE, MIN_FACE};

/// Count of dice per face, indexed by `face - 1`. Counts always sum to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u8; MAX_FACE as usize],
}

/// All dice sharing one face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    pub face: u8,
    pub count: u8,
}

impl Group {
    /// Score of exactly `size` dice from this group (surplus dice are ignored).
    #[inline]
    pub fn sum_of(&self, size: u8) -> i32 {
        self.face as i32 * size as i32
    }

    /// Sum of every die in the group.
    #[inline]
    pub fn total(&self) -> i32 {
        self.sum_of(self.count)
    }
}

impl FrequencyTable {
    pub fn of(hand: &Hand) -> Self {
        let mut counts = [0u8; MAX_FACE as usize];
        for d in hand.iter() {
            counts[(d - MIN_FACE) as usize] += 1;
        }
        Self { counts }
    }

    /// Number of dice showing `face` (0 for faces outside 1..=6).
    pub fn count(&self, face: u8) -> u8 {
        match face {
            MIN_FACE..=MAX_FACE => self.counts[(face - MIN_FACE) as usize],
            _ => 0,
        }
    }

    /// Number of distinct faces present.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// One group per face present, highest face first.
    ///
    /// The face-descending order is the tie-break for every grouping category.
    pub fn groups(&self) -> Vec<Group> {
        let mut groups: Vec<Group> = (MIN_FACE..=MAX_FACE)
            .map(|face| Group {
                face,
                count: self.count(face),
            })
            .filter(|g| g.count > 0)
            .collect();
        groups.sort_unstable_by(|a, b| b.face.cmp(&a.face));
        groups
    }
}

/// Scores of the groups holding at least `size` dice, each counting exactly `size` dice,
/// in the order of `groups`.
pub fn group_sums(groups: &[Group], size: u8) -> impl Iterator<Item = i32> + '_ {
    groups
        .iter()
        .filter(move |g| g.count >= size)
        .map(move |g| g.sum_of(size))
}
