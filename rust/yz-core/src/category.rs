//! Scoring categories and their index order.
//!
//! Index order follows the Scandinavian scorecard:
//! - idx 0..=5   : Ones..Sixes (upper section)
//! - idx 6..=12  : Pair, TwoPairs, ThreeOfAKind, FourOfAKind, SmallStraight, LargeStraight, FullHouse
//! - idx 13      : Chance
//! - idx 14      : Yatzy

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::hand::Hand;
use crate::scoring;

pub const NUM_CATS: usize = 15;

/// Signature shared by every per-category scoring function.
pub type Scorer = fn(&Hand) -> i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    Pair,
    TwoPairs,
    ThreeOfAKind,
    FourOfAKind,
    SmallStraight,
    LargeStraight,
    FullHouse,
    Chance,
    Yatzy,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0:?}")]
pub struct ParseCategoryError(pub String);

impl Category {
    /// All categories in index order.
    pub const ALL: [Category; NUM_CATS] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::Pair,
        Category::TwoPairs,
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::FullHouse,
        Category::Chance,
        Category::Yatzy,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(idx: usize) -> Option<Category> {
        Self::ALL.get(idx).copied()
    }

    /// Stable snake_case name (matches the serde representation).
    pub fn name(self) -> &'static str {
        match self {
            Category::Ones => "ones",
            Category::Twos => "twos",
            Category::Threes => "threes",
            Category::Fours => "fours",
            Category::Fives => "fives",
            Category::Sixes => "sixes",
            Category::Pair => "pair",
            Category::TwoPairs => "two_pairs",
            Category::ThreeOfAKind => "three_of_a_kind",
            Category::FourOfAKind => "four_of_a_kind",
            Category::SmallStraight => "small_straight",
            Category::LargeStraight => "large_straight",
            Category::FullHouse => "full_house",
            Category::Chance => "chance",
            Category::Yatzy => "yatzy",
        }
    }

    /// Face counted by an upper-section category.
    pub fn upper_face(self) -> Option<u8> {
        match self {
            Category::Ones => Some(1),
            Category::Twos => Some(2),
            Category::Threes => Some(3),
            Category::Fours => Some(4),
            Category::Fives => Some(5),
            Category::Sixes => Some(6),
            _ => None,
        }
    }

    /// The scoring function for this category.
    pub fn scorer(self) -> Scorer {
        match self {
            Category::Ones => scoring::ones,
            Category::Twos => scoring::twos,
            Category::Threes => scoring::threes,
            Category::Fours => scoring::fours,
            Category::Fives => scoring::fives,
            Category::Sixes => scoring::sixes,
            Category::Pair => scoring::pair,
            Category::TwoPairs => scoring::two_pairs,
            Category::ThreeOfAKind => scoring::three_of_a_kind,
            Category::FourOfAKind => scoring::four_of_a_kind,
            Category::SmallStraight => scoring::small_straight,
            Category::LargeStraight => scoring::large_straight,
            Category::FullHouse => scoring::full_house,
            Category::Chance => scoring::chance,
            Category::Yatzy => scoring::yatzy,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    /// Case-insensitive; `-` and `_` are interchangeable. Also accepts the short
    /// scorecard names `three_kind`, `four_kind` and `house`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase().replace('-', "_");
        let alias = match norm.as_str() {
            "three_kind" => Some(Category::ThreeOfAKind),
            "four_kind" => Some(Category::FourOfAKind),
            "house" => Some(Category::FullHouse),
            _ => None,
        };
        alias
            .or_else(|| Self::ALL.into_iter().find(|c| c.name() == norm))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}
