//! Property tests over randomized generation and sequencing.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use time::macros::datetime;

use crate::domain::phrases::PhrasePool;
use crate::domain::scorecard::{self, FREE_SPACE, PHRASES_PER_CARD};
use crate::domain::sequencer::CallSequencer;
use crate::domain::session::{GameSession, GameStatus};

fn pool(size: usize) -> PhrasePool {
    PhrasePool::new((0..size).map(|i| format!("phrase {i:02}"))).unwrap()
}

proptest! {
    #[test]
    fn generated_cards_hold_24_distinct_pool_phrases(seed in any::<u64>(), extra in 0usize..40) {
        let source = pool(PHRASES_PER_CARD + extra);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let card = scorecard::generate(&source, &mut rng).unwrap();

        let mut seen = HashSet::new();
        for row in 0..card.size() {
            for col in 0..card.size() {
                let value = card.value(row, col);
                if row == 2 && col == 2 {
                    prop_assert_eq!(value, FREE_SPACE);
                } else {
                    prop_assert!(source.contains(value));
                    prop_assert!(seen.insert(value.to_string()));
                }
            }
        }
        prop_assert_eq!(seen.len(), PHRASES_PER_CARD);
    }

    #[test]
    fn sequencer_is_a_permutation_of_the_pool(seed in any::<u64>(), size in 24usize..60) {
        let source = pool(size);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut sequencer = CallSequencer::reseed(&source, &mut rng);

        let mut drawn = Vec::new();
        while let Some(call) = sequencer.next_call() {
            drawn.push(call);
        }
        prop_assert_eq!(drawn.len(), size);
        let distinct: HashSet<&String> = drawn.iter().collect();
        prop_assert_eq!(distinct.len(), size);
        prop_assert!(drawn.iter().all(|call| source.contains(call)));
    }

    #[test]
    fn a_full_round_never_repeats_a_call(seed in any::<u64>()) {
        let source = pool(30);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut session = GameSession::new(source);
        session.start(&mut rng, datetime!(2026-08-01 0:00 UTC)).unwrap();

        let mut calls = Vec::new();
        while let Some(call) = session.draw().unwrap() {
            prop_assert!(calls.len() < 30);
            calls.push(call);
        }
        let distinct: HashSet<&String> = calls.iter().collect();
        prop_assert_eq!(distinct.len(), calls.len());
        prop_assert_eq!(session.status(), GameStatus::Complete);
    }
}
