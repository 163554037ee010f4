//! Core engine types: digits, validated numbers, RNG.
//!
//! This module contains the building blocks the rest of the engine is made
//! of. Nothing here knows about turns or scoring.

pub mod digit;
pub mod rng;

pub use digit::{is_valid, Digit, SecretNumber, DIGIT_COUNT, NUMBER_LEN};
pub use rng::{GameRng, GameRngState};
