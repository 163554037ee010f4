//! Feedback scoring: compare a guess against a target number.
//!
//! Each position gets one of three statuses:
//!
//! - [`DigitStatus::Correct`]: the digit matches the target at that position
//! - [`DigitStatus::WrongPosition`]: the digit occurs elsewhere in the target
//! - [`DigitStatus::Incorrect`]: the digit is absent from the target
//!
//! Both sides of the comparison have all-distinct digits, so there is no
//! double-counting ambiguity and no consumed-digit bookkeeping as in
//! classic Mastermind scoring with repeated symbols.

use serde::{Deserialize, Serialize};

use crate::core::{Digit, SecretNumber, NUMBER_LEN};

/// Feedback status for one guessed digit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DigitStatus {
    /// Digit matches the target at the same position.
    Correct,
    /// Digit exists in the target at a different position.
    WrongPosition,
    /// Digit does not exist anywhere in the target.
    Incorrect,
}

/// One guessed digit together with its feedback status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitScore {
    /// The digit that was guessed at this position.
    pub digit: Digit,
    /// How the digit scored against the target.
    pub status: DigitStatus,
}

/// Position-aligned feedback for one guess.
///
/// Immutable once produced. Iteration order is position order, which is
/// what a shell renders as four colored cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessResult {
    scores: [DigitScore; NUMBER_LEN],
}

impl GuessResult {
    /// Get the per-position scores.
    #[must_use]
    pub const fn scores(&self) -> &[DigitScore; NUMBER_LEN] {
        &self.scores
    }

    /// Iterate over the per-position scores.
    pub fn iter(&self) -> impl Iterator<Item = &DigitScore> {
        self.scores.iter()
    }

    /// Check whether this result is a winning one (every position Correct).
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.scores.iter().all(|s| s.status == DigitStatus::Correct)
    }

    /// Reconstruct the guess that produced this result.
    #[must_use]
    pub fn guess(&self) -> SecretNumber {
        let digits = self.scores.map(|s| s.digit);
        // Scored guesses were validated on the way in.
        match SecretNumber::from_digits(digits) {
            Some(n) => n,
            None => unreachable!("scored guess lost its validity"),
        }
    }
}

/// Score a guess against a target, one status per position.
#[must_use]
pub fn score(guess: SecretNumber, target: SecretNumber) -> GuessResult {
    let mut scores = [DigitScore {
        digit: guess.digit(0),
        status: DigitStatus::Incorrect,
    }; NUMBER_LEN];

    for (i, slot) in scores.iter_mut().enumerate() {
        let digit = guess.digit(i);
        let status = if digit == target.digit(i) {
            DigitStatus::Correct
        } else if target.contains(digit) {
            DigitStatus::WrongPosition
        } else {
            DigitStatus::Incorrect
        };
        *slot = DigitScore { digit, status };
    }

    GuessResult { scores }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(s: &str) -> SecretNumber {
        SecretNumber::parse(s).unwrap()
    }

    fn statuses(result: &GuessResult) -> Vec<DigitStatus> {
        result.iter().map(|s| s.status).collect()
    }

    #[test]
    fn test_exact_match_is_all_correct() {
        let result = score(n("1234"), n("1234"));
        assert_eq!(statuses(&result), vec![DigitStatus::Correct; 4]);
        assert!(result.is_win());
    }

    #[test]
    fn test_disjoint_digits_are_all_incorrect() {
        let result = score(n("5678"), n("1234"));
        assert_eq!(statuses(&result), vec![DigitStatus::Incorrect; 4]);
        assert!(!result.is_win());
    }

    #[test]
    fn test_swapped_pair_scores_wrong_position() {
        let result = score(n("1243"), n("1234"));
        assert_eq!(
            statuses(&result),
            vec![
                DigitStatus::Correct,
                DigitStatus::Correct,
                DigitStatus::WrongPosition,
                DigitStatus::WrongPosition,
            ]
        );
        assert!(!result.is_win());
    }

    #[test]
    fn test_mixed_feedback() {
        // 1 correct, 4 elsewhere, 5 and 6 absent
        let result = score(n("1456"), n("1234"));
        assert_eq!(
            statuses(&result),
            vec![
                DigitStatus::Correct,
                DigitStatus::WrongPosition,
                DigitStatus::Incorrect,
                DigitStatus::Incorrect,
            ]
        );
    }

    #[test]
    fn test_result_is_position_aligned() {
        let guess = n("9021");
        let result = score(guess, n("1234"));
        for (i, s) in result.iter().enumerate() {
            assert_eq!(s.digit, guess.digit(i));
        }
        assert_eq!(result.guess(), guess);
    }

    #[test]
    fn test_result_serde() {
        let result = score(n("1243"), n("1234"));
        let json = serde_json::to_string(&result).unwrap();
        let back: GuessResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}
