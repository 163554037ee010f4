//! Digits and validated four-digit numbers.
//!
//! A playable number has exactly [`NUMBER_LEN`] digits, all distinct, with a
//! nonzero leading digit. Both secrets and guesses share this shape, so the
//! same type covers both.
//!
//! ## Construction
//!
//! [`SecretNumber`] can only be obtained through paths that uphold the
//! invariants:
//! - [`SecretNumber::parse`] for caller-supplied text
//! - [`SecretNumber::from_digits`] for digit arrays built in code
//! - [`SecretNumber::random`] for uniform generation
//!
//! ```
//! use bulls_cows::core::SecretNumber;
//!
//! let n = SecretNumber::parse("1234").unwrap();
//! assert_eq!(n.to_string(), "1234");
//!
//! assert!(SecretNumber::parse("0123").is_none()); // leading zero
//! assert!(SecretNumber::parse("1123").is_none()); // repeated digit
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::rng::GameRng;

/// Number of digits in every secret and guess.
pub const NUMBER_LEN: usize = 4;

/// Number of decimal digit symbols.
pub const DIGIT_COUNT: usize = 10;

/// A single decimal digit, 0-9.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Digit(u8);

impl Digit {
    /// Create a digit from its numeric value.
    ///
    /// Returns `None` for values above 9.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Create a digit from a character, `'0'` through `'9'`.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    /// Get the numeric value, 0-9.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Get the character form, `'0'` through `'9'`.
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }

    /// Check if this is the zero digit.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Iterate over all ten digits in ascending order.
    pub fn all() -> impl Iterator<Item = Digit> {
        (0..DIGIT_COUNT as u8).map(Digit)
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A four-digit number with all-distinct digits and a nonzero lead.
///
/// Immutable once constructed; every constructor enforces the invariants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SecretNumber {
    digits: [Digit; NUMBER_LEN],
}

impl SecretNumber {
    /// Parse from text.
    ///
    /// Accepts exactly [`NUMBER_LEN`] ASCII decimal digits, all distinct,
    /// first digit nonzero. Returns `None` otherwise.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut digits = [Digit(0); NUMBER_LEN];
        let mut chars = s.chars();
        for slot in &mut digits {
            *slot = Digit::from_char(chars.next()?)?;
        }
        if chars.next().is_some() {
            return None;
        }
        Self::from_digits(digits)
    }

    /// Build from a digit array, validating the invariants.
    ///
    /// Returns `None` on a zero lead or a repeated digit.
    #[must_use]
    pub fn from_digits(digits: [Digit; NUMBER_LEN]) -> Option<Self> {
        if digits[0].is_zero() {
            return None;
        }
        for i in 1..NUMBER_LEN {
            if digits[..i].contains(&digits[i]) {
                return None;
            }
        }
        Some(Self { digits })
    }

    /// Generate a uniform random number.
    ///
    /// The first digit is drawn from 1-9, the remaining three without
    /// replacement from the nine unused symbols.
    #[must_use]
    pub fn random(rng: &mut GameRng) -> Self {
        let nonzero: SmallVec<[Digit; DIGIT_COUNT]> = Digit::all().filter(|d| !d.is_zero()).collect();
        let first = nonzero[rng.gen_range_usize(0..nonzero.len())];

        let mut pool: SmallVec<[Digit; DIGIT_COUNT]> =
            Digit::all().filter(|d| *d != first).collect();
        let mut digits = [first; NUMBER_LEN];
        for slot in digits.iter_mut().skip(1) {
            let idx = rng.gen_range_usize(0..pool.len());
            *slot = pool.remove(idx);
        }

        Self { digits }
    }

    /// Get the digits in position order.
    #[must_use]
    pub const fn digits(&self) -> [Digit; NUMBER_LEN] {
        self.digits
    }

    /// Get the digit at a position, 0-3.
    #[must_use]
    pub const fn digit(&self, position: usize) -> Digit {
        self.digits[position]
    }

    /// Check whether a digit occurs anywhere in this number.
    #[must_use]
    pub fn contains(&self, digit: Digit) -> bool {
        self.digits.contains(&digit)
    }
}

impl std::fmt::Display for SecretNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for d in &self.digits {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

/// Check whether text has the shape of a playable number.
///
/// Exactly four ASCII decimal digits, all distinct, first digit nonzero.
/// Shells should validate input with this before (and the session will
/// re-validate after) submitting.
#[must_use]
pub fn is_valid(s: &str) -> bool {
    SecretNumber::parse(s).is_some()
}
