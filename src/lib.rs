//! # bulls-cows
//!
//! The engine of a two-player four-digit Bulls-and-Cows variant: a human
//! and an automated opponent each commit a 4-distinct-digit number (nonzero
//! lead) and take turns guessing the other's.
//!
//! ## Design Principles
//!
//! 1. **Engine Only**: No I/O, no rendering, no input handling. A UI shell
//!    drives a [`Session`] and renders the returned feedback.
//!
//! 2. **Injectable Randomness**: All random draws flow through [`GameRng`],
//!    a seedable ChaCha8 wrapper. Equal seeds replay identically.
//!
//! 3. **Owned Sessions**: No process-wide state. The caller owns each
//!    [`Session`] value and serializes access to it.
//!
//! ## Modules
//!
//! - `core`: digits, validated numbers, RNG
//! - `scoring`: per-position Correct / WrongPosition / Incorrect feedback
//! - `opponent`: the automated player's knowledge state and guess generation
//! - `session`: turn orchestration, histories, win detection
//!
//! ## Example
//!
//! ```
//! use bulls_cows::{Session, SessionState};
//!
//! let mut session = Session::new(42);
//! session.start_human_secret("1234").unwrap();
//!
//! let outcome = session.submit_human_guess("5678").unwrap();
//! if !outcome.won {
//!     let turn = session.step_opponent_turn().unwrap();
//!     assert!(turn.won || session.state() == SessionState::AwaitingHumanGuess);
//! }
//! ```

pub mod core;
pub mod opponent;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use crate::core::{is_valid, Digit, GameRng, GameRngState, SecretNumber, NUMBER_LEN};

pub use crate::scoring::{score, DigitScore, DigitStatus, GuessResult};

pub use crate::opponent::{KnowledgeState, OpponentStrategy};

pub use crate::session::{
    GuessOutcome, OpponentTurn, Session, SessionError, SessionState,
};
