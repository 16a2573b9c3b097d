//! Per-letter visibility tracking for word guessing games.
//!
//! A [`LetterPool`] holds one flag for each letter from `A` to `Z` telling
//! whether the letter is revealed to the player.

pub mod error;
pub mod pool;

pub use error::{PoolError, Result};
pub use pool::letter::Letter;
pub use pool::LetterPool;
