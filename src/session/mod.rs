//! Game session: turn orchestration and the round-by-round API.
//!
//! One [`Session`] serves one game at a time. The UI shell drives it:
//!
//! 1. [`Session::start_human_secret`] — commit the human's number; the
//!    opponent's secret is generated here.
//! 2. [`Session::submit_human_guess`] — score a human guess against the
//!    opponent's secret.
//! 3. [`Session::step_opponent_turn`] — let the opponent guess against the
//!    human's secret.
//! 4. Repeat 2-3 until one side wins; [`Session::reset`] at any point.
//!
//! The session performs no I/O and never blocks; "thinking" delays and
//! popups belong to the shell. Callers serialize access per session.
//!
//! ```
//! use bulls_cows::session::Session;
//!
//! let mut session = Session::new(42);
//! session.start_human_secret("1234").unwrap();
//!
//! let outcome = session.submit_human_guess("5678").unwrap();
//! if !outcome.won {
//!     let turn = session.step_opponent_turn().unwrap();
//!     println!("opponent guessed {}", turn.guess);
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{GameRng, SecretNumber};
use crate::opponent::OpponentStrategy;
use crate::scoring::{score, GuessResult};

/// Where a session is in its lifecycle.
///
/// `HumanWon` and `OpponentWon` are terminal; only [`Session::reset`]
/// leaves them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Reset and waiting for a new game.
    NotStarted,
    /// Waiting for the human to commit a secret.
    AwaitingHumanSecret,
    /// Waiting for the human's next guess.
    AwaitingHumanGuess,
    /// Waiting for the opponent's turn to be stepped.
    AwaitingOpponentGuess,
    /// The human found the opponent's number.
    HumanWon,
    /// The opponent found the human's number.
    OpponentWon,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SessionState::NotStarted => "NotStarted",
            SessionState::AwaitingHumanSecret => "AwaitingHumanSecret",
            SessionState::AwaitingHumanGuess => "AwaitingHumanGuess",
            SessionState::AwaitingOpponentGuess => "AwaitingOpponentGuess",
            SessionState::HumanWon => "HumanWon",
            SessionState::OpponentWon => "OpponentWon",
        };
        f.write_str(name)
    }
}

/// Recoverable session errors. Callers re-prompt and retry.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The submitted secret is not 4 distinct digits with a nonzero lead.
    #[error("invalid secret: need 4 distinct digits with a nonzero leading digit")]
    InvalidSecret,
    /// The submitted guess is not 4 distinct digits with a nonzero lead.
    #[error("invalid guess: need 4 distinct digits with a nonzero leading digit")]
    InvalidGuess,
    /// The operation is not allowed in the session's current state.
    #[error("operation requires state {required}, session is in {actual}")]
    InvalidState {
        /// State(s) the operation requires.
        required: &'static str,
        /// State the session was actually in.
        actual: SessionState,
    },
}

/// What a human guess produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessOutcome {
    /// Per-position feedback for the guess.
    pub result: GuessResult,
    /// True if the guess hit the opponent's secret exactly.
    pub won: bool,
}

/// What an opponent turn produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentTurn {
    /// The number the opponent guessed. On a win this is the human's
    /// secret, ready for the shell's banner.
    pub guess: SecretNumber,
    /// Per-position feedback for the guess.
    pub result: GuessResult,
    /// True if the opponent found the human's secret.
    pub won: bool,
}

/// One game of four-digit Bulls and Cows, human versus automated opponent.
///
/// Owns both secrets, both guess histories, the opponent's strategy state,
/// and the RNG. Single-threaded and synchronous throughout.
#[derive(Debug)]
pub struct Session {
    state: SessionState,
    human_secret: Option<SecretNumber>,
    opponent_secret: Option<SecretNumber>,
    human_history: Vec<GuessResult>,
    opponent_history: Vec<GuessResult>,
    strategy: OpponentStrategy,
    rng: GameRng,
}

impl Session {
    /// Create a session with a deterministic seed.
    ///
    /// Equal seeds and equal call sequences replay identically.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// Create a session seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }

    /// Create a session around an existing RNG.
    #[must_use]
    pub fn with_rng(rng: GameRng) -> Self {
        Self {
            state: SessionState::AwaitingHumanSecret,
            human_secret: None,
            opponent_secret: None,
            human_history: Vec::new(),
            opponent_history: Vec::new(),
            strategy: OpponentStrategy::new(),
            rng,
        }
    }

    /// Commit the human's secret and start the game.
    ///
    /// Allowed in `NotStarted` or `AwaitingHumanSecret`. On success the
    /// opponent's secret is generated and the session moves to
    /// `AwaitingHumanGuess`.
    pub fn start_human_secret(&mut self, candidate: &str) -> Result<(), SessionError> {
        match self.state {
            SessionState::NotStarted | SessionState::AwaitingHumanSecret => {}
            actual => {
                return Err(SessionError::InvalidState {
                    required: "NotStarted or AwaitingHumanSecret",
                    actual,
                })
            }
        }
        let secret = SecretNumber::parse(candidate).ok_or(SessionError::InvalidSecret)?;

        self.human_secret = Some(secret);
        self.opponent_secret = Some(SecretNumber::random(&mut self.rng));
        self.state = SessionState::AwaitingHumanGuess;
        Ok(())
    }

    /// Score a human guess against the opponent's secret.
    ///
    /// On an exact hit the session moves to the terminal `HumanWon` state;
    /// otherwise the opponent is up next.
    pub fn submit_human_guess(&mut self, candidate: &str) -> Result<GuessOutcome, SessionError> {
        let target = self.require(SessionState::AwaitingHumanGuess, "AwaitingHumanGuess")?;
        let guess = SecretNumber::parse(candidate).ok_or(SessionError::InvalidGuess)?;

        let result = score(guess, target);
        self.human_history.push(result);

        let won = result.is_win();
        self.state = if won {
            SessionState::HumanWon
        } else {
            SessionState::AwaitingOpponentGuess
        };
        Ok(GuessOutcome { result, won })
    }

    /// Let the opponent take its turn against the human's secret.
    ///
    /// Draws the strategy's next guess, scores it, and feeds the feedback
    /// back into the strategy. On an exact hit the session moves to the
    /// terminal `OpponentWon` state and the returned turn carries the
    /// winning number; otherwise the human is up next.
    pub fn step_opponent_turn(&mut self) -> Result<OpponentTurn, SessionError> {
        let target = self.require(SessionState::AwaitingOpponentGuess, "AwaitingOpponentGuess")?;

        let guess = self.strategy.next_guess(&mut self.rng);
        let result = score(guess, target);
        self.strategy.observe(&result);
        self.opponent_history.push(result);

        let won = result.is_win();
        self.state = if won {
            SessionState::OpponentWon
        } else {
            SessionState::AwaitingHumanGuess
        };
        Ok(OpponentTurn { guess, result, won })
    }

    /// Clear secrets, histories, and opponent knowledge; state becomes
    /// `NotStarted`. Valid from any state. The RNG stream continues, so a
    /// seeded session reproduces a whole multi-game sequence.
    pub fn reset(&mut self) {
        self.state = SessionState::NotStarted;
        self.human_secret = None;
        self.opponent_secret = None;
        self.human_history.clear();
        self.opponent_history.clear();
        self.strategy.reset();
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// The human's guesses so far, chronological.
    #[must_use]
    pub fn human_guess_history(&self) -> &[GuessResult] {
        &self.human_history
    }

    /// The opponent's guesses so far, chronological.
    #[must_use]
    pub fn opponent_guess_history(&self) -> &[GuessResult] {
        &self.opponent_history
    }

    /// The human's secret, once committed. Shells show this in a header.
    #[must_use]
    pub const fn human_secret(&self) -> Option<SecretNumber> {
        self.human_secret
    }

    /// The opponent's secret, once generated.
    ///
    /// Revealing it mid-game spoils the game; shells use this after a loss
    /// or for debugging.
    #[must_use]
    pub const fn opponent_secret(&self) -> Option<SecretNumber> {
        self.opponent_secret
    }

    /// Snapshot of the RNG position, for reproducing the session.
    #[must_use]
    pub fn rng_state(&self) -> crate::core::GameRngState {
        self.rng.state()
    }

    /// Check the state and fetch the secret the next guess targets.
    fn require(
        &self,
        required: SessionState,
        name: &'static str,
    ) -> Result<SecretNumber, SessionError> {
        if self.state != required {
            return Err(SessionError::InvalidState {
                required: name,
                actual: self.state,
            });
        }
        let secret = match required {
            SessionState::AwaitingHumanGuess => self.opponent_secret,
            SessionState::AwaitingOpponentGuess => self.human_secret,
            _ => None,
        };
        match secret {
            Some(secret) => Ok(secret),
            // Both secrets are set on the transition out of the secret
            // states, so this cannot be reached through the public API.
            None => unreachable!("session in {required} without secrets"),
        }
    }
}
