//! Opponent strategy integration tests.
//!
//! These tests verify the spec-level guarantees of the automated player
//! over whole games: novelty of every guess and monotonic consistency
//! with the feedback it has received.

use std::collections::{HashMap, HashSet};

use bulls_cows::{
    score, DigitStatus, GameRng, OpponentStrategy, SecretNumber, Session,
};

fn n(s: &str) -> SecretNumber {
    SecretNumber::parse(s).unwrap()
}

// =============================================================================
// Novelty
// =============================================================================

/// Test that a full game never contains a repeated opponent guess, across
/// many seeds and targets.
#[test]
fn test_no_repeats_across_many_games() {
    for seed in 0..20u64 {
        let mut rng = GameRng::new(seed);
        let target = SecretNumber::random(&mut rng);
        let mut strategy = OpponentStrategy::new();

        let mut seen = HashSet::new();
        for _ in 0..500 {
            let guess = strategy.next_guess(&mut rng);
            assert!(seen.insert(guess), "seed {seed}: repeated guess {guess}");
            let result = score(guess, target);
            if result.is_win() {
                break;
            }
            strategy.observe(&result);
        }
    }
}

// =============================================================================
// Consistency With Feedback
// =============================================================================

/// Test that the opponent's play stays consistent with everything it has
/// learned: absent digits never reappear, confirmed positions never change.
#[test]
fn test_knowledge_is_honored_for_the_whole_game() {
    for seed in 0..20u64 {
        let mut rng = GameRng::new(seed);
        let target = SecretNumber::random(&mut rng);
        let mut strategy = OpponentStrategy::new();

        let mut absent = HashSet::new();
        let mut pinned: HashMap<usize, _> = HashMap::new();

        for _ in 0..500 {
            let guess = strategy.next_guess(&mut rng);

            for (position, digit) in guess.digits().into_iter().enumerate() {
                assert!(
                    !absent.contains(&digit),
                    "seed {seed}: {guess} reuses absent digit {digit}"
                );
                if let Some(expected) = pinned.get(&position) {
                    assert_eq!(
                        digit, *expected,
                        "seed {seed}: {guess} moved a pinned digit"
                    );
                }
            }

            let result = score(guess, target);
            if result.is_win() {
                break;
            }
            for (position, ds) in result.iter().enumerate() {
                match ds.status {
                    DigitStatus::Incorrect => {
                        absent.insert(ds.digit);
                    }
                    DigitStatus::Correct => {
                        pinned.entry(position).or_insert(ds.digit);
                    }
                    DigitStatus::WrongPosition => {}
                }
            }
            strategy.observe(&result);
        }
    }
}

/// Test that the same guarantees hold when the strategy is driven through
/// the session API rather than directly.
#[test]
fn test_session_driven_opponent_is_consistent() {
    let mut session = Session::new(99);
    session.start_human_secret("6150").unwrap();

    let mut absent = HashSet::new();
    let mut issued = HashSet::new();

    for _ in 0..500 {
        let opponent_secret = session.opponent_secret().unwrap().to_string();
        let miss = if opponent_secret == "1234" { "5678" } else { "1234" };
        session.submit_human_guess(miss).unwrap();

        let turn = session.step_opponent_turn().unwrap();
        assert!(issued.insert(turn.guess), "repeated {}", turn.guess);
        for digit in turn.guess.digits() {
            assert!(!absent.contains(&digit));
        }
        if turn.won {
            assert_eq!(turn.guess, n("6150"));
            return;
        }
        for ds in turn.result.iter() {
            if ds.status == DigitStatus::Incorrect {
                absent.insert(ds.digit);
            }
        }
    }
    panic!("opponent never converged");
}

/// Test that targets containing a zero are reachable: the zero is placed
/// in trailing positions, never the lead.
#[test]
fn test_zero_bearing_targets_are_found() {
    for (seed, target) in [(1u64, "5021"), (2, "9087"), (3, "1203")] {
        let target = n(target);
        let mut rng = GameRng::new(seed);
        let mut strategy = OpponentStrategy::new();

        let mut won = false;
        for _ in 0..500 {
            let guess = strategy.next_guess(&mut rng);
            assert!(!guess.digit(0).is_zero());
            let result = score(guess, target);
            if result.is_win() {
                won = true;
                break;
            }
            strategy.observe(&result);
        }
        assert!(won, "seed {seed}: never found {target}");
    }
}
