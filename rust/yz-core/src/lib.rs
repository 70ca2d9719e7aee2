//! yz-core: Yatzy hand validation and category scoring.
//!
//! Build a [`Hand`] once (the only fallible step), then score it in any
//! [`Category`] with the free functions in [`scoring`] or via [`score`].

pub mod category;
pub mod groups;
pub mod hand;
pub mod scoring;

pub use category::{Category, ParseCategoryError, Scorer, NUM_CATS};
pub use groups::{group_sums, FrequencyTable, Group};
pub use hand::{Hand, HandError, ParseHandError, MAX_FACE, MIN_FACE, NUM_DICE};
pub use scoring::{score, scores_for_hand, YATZY_SCORE};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");


#[cfg(test)]
mod properties_tests;
