//! The automated opponent: knowledge tracking and guess generation.
//!
//! ## How the opponent narrows its search
//!
//! Every scored guess sorts its digits into three mutually exclusive
//! categories, held in [`KnowledgeState`]:
//!
//! - **confirmed**: digit proven correct at a specific position
//! - **misplaced**: digit proven present, position still unknown
//! - **excluded**: digit proven absent from the target
//!
//! The next guess locks confirmed positions, scatters misplaced digits over
//! the open positions, and fills what remains from the digits not yet ruled
//! out. Candidates equal to an earlier guess are discarded and rebuilt, so
//! the opponent never repeats itself within a session.
//!
//! Knowledge only grows; it is cleared solely by [`OpponentStrategy::reset`].

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Digit, GameRng, SecretNumber, DIGIT_COUNT, NUMBER_LEN};
use crate::scoring::{DigitStatus, GuessResult};

/// Cap on candidate construction attempts per guess.
///
/// The space of valid numbers (4536) dwarfs the length of any playable
/// game, so hitting this cap means the knowledge state is inconsistent.
const MAX_BUILD_ATTEMPTS: usize = 10_000;

/// Accumulated knowledge about the target number.
///
/// Invariants: the three categories are mutually exclusive per digit, and a
/// confirmed position is never overwritten within a session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeState {
    confirmed: [Option<Digit>; NUMBER_LEN],
    misplaced: FxHashSet<Digit>,
    excluded: FxHashSet<Digit>,
}

impl KnowledgeState {
    /// Create an empty knowledge state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored guess into the knowledge state.
    ///
    /// Correct digits are pinned to their position and leave the misplaced
    /// set; wrong-position digits join the misplaced set unless already
    /// pinned; incorrect digits are excluded outright.
    pub fn absorb(&mut self, result: &GuessResult) {
        for (position, score) in result.iter().enumerate() {
            match score.status {
                DigitStatus::Correct => {
                    if self.confirmed[position].is_none() {
                        self.confirmed[position] = Some(score.digit);
                    }
                    self.misplaced.remove(&score.digit);
                }
                DigitStatus::WrongPosition => {
                    if !self.is_confirmed(score.digit) {
                        self.misplaced.insert(score.digit);
                    }
                }
                DigitStatus::Incorrect => {
                    self.excluded.insert(score.digit);
                }
            }
        }
    }

    /// Get the digit confirmed at a position, if any.
    #[must_use]
    pub const fn confirmed_at(&self, position: usize) -> Option<Digit> {
        self.confirmed[position]
    }

    /// Check whether a digit is pinned to some position.
    #[must_use]
    pub fn is_confirmed(&self, digit: Digit) -> bool {
        self.confirmed.iter().flatten().any(|d| *d == digit)
    }

    /// Check whether a digit is known present but unplaced.
    #[must_use]
    pub fn is_misplaced(&self, digit: Digit) -> bool {
        self.misplaced.contains(&digit)
    }

    /// Check whether a digit is known absent from the target.
    #[must_use]
    pub fn is_excluded(&self, digit: Digit) -> bool {
        self.excluded.contains(&digit)
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.confirmed = [None; NUMBER_LEN];
        self.misplaced.clear();
        self.excluded.clear();
    }
}

/// The automated player's guess generator.
///
/// Stateful: owns the knowledge state and the log of guesses it has issued
/// this session. Randomness is injected per call, so a seeded session
/// replays identically.
#[derive(Clone, Debug, Default)]
pub struct OpponentStrategy {
    knowledge: KnowledgeState,
    issued: Vec<SecretNumber>,
    seen: FxHashSet<SecretNumber>,
}

impl OpponentStrategy {
    /// Create a strategy with no accumulated knowledge.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold the feedback for this strategy's most recent guess into its
    /// knowledge state.
    pub fn observe(&mut self, result: &GuessResult) {
        self.knowledge.absorb(result);
    }

    /// Produce the next guess.
    ///
    /// The first guess is uniform random; later guesses are built from the
    /// knowledge state. The returned guess is always novel for this session
    /// and is recorded in the issued log before returning.
    ///
    /// # Panics
    ///
    /// Panics if no novel candidate can be built within the attempts cap,
    /// which indicates a corrupted knowledge state.
    pub fn next_guess(&mut self, rng: &mut GameRng) -> SecretNumber {
        if self.issued.is_empty() {
            let guess = SecretNumber::random(rng);
            self.record(guess);
            return guess;
        }

        for _ in 0..MAX_BUILD_ATTEMPTS {
            let Some(candidate) = self.build_candidate(rng) else {
                continue;
            };
            if !self.seen.contains(&candidate) {
                self.record(candidate);
                return candidate;
            }
        }
        panic!("no novel opponent guess after {MAX_BUILD_ATTEMPTS} attempts; knowledge state is inconsistent");
    }

    /// Guesses issued so far this session, in order.
    #[must_use]
    pub fn issued(&self) -> &[SecretNumber] {
        &self.issued
    }

    /// The accumulated knowledge about the target.
    #[must_use]
    pub const fn knowledge(&self) -> &KnowledgeState {
        &self.knowledge
    }

    /// Drop all knowledge and the issued log.
    pub fn reset(&mut self) {
        self.knowledge.clear();
        self.issued.clear();
        self.seen.clear();
    }

    fn record(&mut self, guess: SecretNumber) {
        self.issued.push(guess);
        self.seen.insert(guess);
    }

    /// Build one candidate guess from the current knowledge.
    ///
    /// Returns `None` when a random placement of the misplaced digits
    /// leaves some position with an empty fill pool; the caller retries
    /// with a fresh placement.
    fn build_candidate(&self, rng: &mut GameRng) -> Option<SecretNumber> {
        let mut slots: [Option<Digit>; NUMBER_LEN] = [None; NUMBER_LEN];
        for (position, confirmed) in slots.iter_mut().enumerate() {
            *confirmed = self.knowledge.confirmed_at(position);
        }

        // Scatter the unplaced in-target digits over the open positions.
        // A misplaced zero must not land on the lead.
        let mut loose: SmallVec<[Digit; DIGIT_COUNT]> = Digit::all()
            .filter(|d| self.knowledge.is_misplaced(*d) && !slots.contains(&Some(*d)))
            .collect();
        for position in 0..NUMBER_LEN {
            if slots[position].is_some() {
                continue;
            }
            let usable: SmallVec<[Digit; DIGIT_COUNT]> = loose
                .iter()
                .copied()
                .filter(|d| position != 0 || !d.is_zero())
                .collect();
            if let Some(&digit) = rng.choose(&usable) {
                slots[position] = Some(digit);
                loose.retain(|d| *d != digit);
            }
        }

        // Fill what remains from the digits not yet ruled out.
        for position in 0..NUMBER_LEN {
            if slots[position].is_some() {
                continue;
            }
            let pool: SmallVec<[Digit; DIGIT_COUNT]> = Digit::all()
                .filter(|d| {
                    !slots.contains(&Some(*d))
                        && !self.knowledge.is_excluded(*d)
                        && (position != 0 || !d.is_zero())
                })
                .collect();
            let digit = *rng.choose(&pool)?;
            slots[position] = Some(digit);
        }

        SecretNumber::from_digits([slots[0]?, slots[1]?, slots[2]?, slots[3]?])
    }
}
