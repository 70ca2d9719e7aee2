//! Per-category scoring over a validated `Hand`.
//!
//! Every function is total and pure: a hand that does not qualify scores 0.

use crate::category::{Category, NUM_CATS};
use crate::groups::{group_sums, FrequencyTable};
use crate::hand::Hand;

pub const YATZY_SCORE: i32 = 50;

/// Sum of the dice showing `face`.
pub fn upper(hand: &Hand, face: u8) -> i32 {
    hand.iter()
        .filter(|&d| d == face)
        .map(i32::from)
        .sum()
}

pub fn ones(hand: &Hand) -> i32 {
    upper(hand, 1)
}

pub fn twos(hand: &Hand) -> i32 {
    upper(hand, 2)
}

pub fn threes(hand: &Hand) -> i32 {
    upper(hand, 3)
}

pub fn fours(hand: &Hand) -> i32 {
    upper(hand, 4)
}

pub fn fives(hand: &Hand) -> i32 {
    upper(hand, 5)
}

pub fn sixes(hand: &Hand) -> i32 {
    upper(hand, 6)
}

pub fn chance(hand: &Hand) -> i32 {
    hand.sum()
}

pub fn yatzy(hand: &Hand) -> i32 {
    if FrequencyTable::of(hand).distinct() == 1 {
        YATZY_SCORE
    } else {
        0
    }
}

/// Best single pair: highest face with at least two dice.
pub fn pair(hand: &Hand) -> i32 {
    best_of_a_kind(hand, 2)
}

/// Two highest pairs, scored only when exactly two faces hold a pair.
///
/// Four (or five) of a kind is a single group and does not make two pairs.
pub fn two_pairs(hand: &Hand) -> i32 {
    let groups = FrequencyTable::of(hand).groups();
    let pairs: Vec<i32> = group_sums(&groups, 2).take(2).collect();
    match pairs.as_slice() {
        [hi, lo] => hi + lo,
        _ => 0,
    }
}

/// Three dice of the highest face holding at least three.
pub fn three_of_a_kind(hand: &Hand) -> i32 {
    best_of_a_kind(hand, 3)
}

/// Four dice of the highest face holding at least four.
pub fn four_of_a_kind(hand: &Hand) -> i32 {
    best_of_a_kind(hand, 4)
}

/// Sum of all dice when the first four are strictly increasing in input order.
///
/// The check is positional: dice are not sorted first, so `[2, 3, 4, 5, 1]`
/// qualifies while `[5, 4, 3, 2, 1]` does not.
pub fn small_straight(hand: &Hand) -> i32 {
    sum_if_strictly_increasing(hand, 4)
}

/// Sum of all dice when all five are strictly increasing in input order.
///
/// Positional like `small_straight`: `[6, 2, 3, 4, 5]` is a straight as a set
/// but scores 0 here.
pub fn large_straight(hand: &Hand) -> i32 {
    sum_if_strictly_increasing(hand, 5)
}

/// Sum of all dice when they split into exactly two faces, three and two.
///
/// A 4+1 split is two faces as well but is not a full house: `[4, 4, 4, 4, 1]` scores 0.
pub fn full_house(hand: &Hand) -> i32 {
    let groups = FrequencyTable::of(hand).groups();
    match groups.as_slice() {
        [a, b] if matches!((a.count, b.count), (3, 2) | (2, 3)) => a.total() + b.total(),
        _ => 0,
    }
}

/// Score `hand` in `cat`.
pub fn score(hand: &Hand, cat: Category) -> i32 {
    (cat.scorer())(hand)
}

/// Score `hand` in every category, indexed by `Category::index`.
pub fn scores_for_hand(hand: &Hand) -> [i32; NUM_CATS] {
    Category::ALL.map(|cat| score(hand, cat))
}

fn best_of_a_kind(hand: &Hand, size: u8) -> i32 {
    let groups = FrequencyTable::of(hand).groups();
    let best = group_sums(&groups, size).next().unwrap_or(0);
    best
}

fn sum_if_strictly_increasing(hand: &Hand, len: usize) -> i32 {
    if hand.as_slice()[..len].windows(2).all(|w| w[1] > w[0]) {
        hand.sum()
    } else {
        0
    }
}
