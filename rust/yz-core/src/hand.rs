//! Validated five-dice hand.
//!
//! A `Hand` is built once from raw input and is valid for its whole lifetime.
//! Dice are kept in the order they were given: straight detection depends on it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of dice in a hand.
pub const NUM_DICE: usize = 5;

/// Lowest and highest die face.
pub const MIN_FACE: u8 = 1;
pub const MAX_FACE: u8 = 6;

/// Hand construction errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandError {
    /// Input does not contain exactly five dice (absent or empty input included).
    #[error("Required a dice roll of size 5, got {len} dice")]
    InvalidArity { len: usize },
    /// A die at `index` is outside 1..=6.
    #[error("Dice rolls must be between 1 and 6, got {value} at position {index}")]
    InvalidFace { index: usize, value: i32 },
}

/// Errors from parsing a hand out of text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseHandError {
    #[error("not an integer die value: {token:?}")]
    NotAnInteger { token: String },
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// Five dice, each in 1..=6, in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i32>", into = "Vec<i32>")]
pub struct Hand {
    dice: [u8; NUM_DICE],
}

impl Hand {
    /// Validate `values` and build a hand.
    ///
    /// Arity is checked before face range; the first out-of-range die is reported.
    pub fn new(values: &[i32]) -> Result<Self, HandError> {
        if values.len() != NUM_DICE {
            return Err(HandError::InvalidArity { len: values.len() });
        }
        let mut dice = [0u8; NUM_DICE];
        for (index, (slot, &value)) in dice.iter_mut().zip(values).enumerate() {
            if !(MIN_FACE as i32..=MAX_FACE as i32).contains(&value) {
                return Err(HandError::InvalidFace { index, value });
            }
            *slot = value as u8;
        }
        Ok(Self { dice })
    }

    /// Like [`Hand::new`], treating absent input as a zero-length roll.
    pub fn from_optional(values: Option<&[i32]>) -> Result<Self, HandError> {
        Self::new(values.unwrap_or_default())
    }

    /// Parse dice separated by whitespace and/or commas, e.g. `"1 2 3 4 5"` or `"1,2,3,4,5"`.
    pub fn parse(s: &str) -> Result<Self, ParseHandError> {
        let values = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(|t| {
                t.parse::<i32>().map_err(|_| ParseHandError::NotAnInteger {
                    token: t.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(&values)?)
    }

    /// Dice in input order.
    #[inline]
    pub fn dice(&self) -> [u8; NUM_DICE] {
        self.dice
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.dice
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.dice.iter().copied()
    }

    /// Sum of all five dice.
    pub fn sum(&self) -> i32 {
        self.iter().map(i32::from).sum()
    }
}

impl TryFrom<&[i32]> for Hand {
    type Error = HandError;

    fn try_from(values: &[i32]) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl TryFrom<Vec<i32>> for Hand {
    type Error = HandError;

    fn try_from(values: Vec<i32>) -> Result<Self, Self::Error> {
        Self::new(&values)
    }
}

impl TryFrom<[u8; NUM_DICE]> for Hand {
    type Error = HandError;

    fn try_from(dice: [u8; NUM_DICE]) -> Result<Self, Self::Error> {
        Self::new(&dice.map(i32::from))
    }
}

impl From<Hand> for Vec<i32> {
    fn from(hand: Hand) -> Self {
        hand.iter().map(i32::from).collect()
    }
}

impl FromStr for Hand {
    type Err = ParseHandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e] = self.dice;
        write!(f, "{a} {b} {c} {d} {e}")
    }
}
