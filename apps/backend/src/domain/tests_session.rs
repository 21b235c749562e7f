//! State-machine walks over the whole session.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use time::macros::datetime;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::claims::{ClaimType, ColumnTarget, FullCardRank};
use crate::domain::phrases::PhrasePool;
use crate::domain::scorecard::FREE_SPACE;
use crate::domain::session::{GameSession, GameStatus, SCORECARD_POOL_TARGET};
use crate::errors::domain::DomainError;

const POOL_SIZE: usize = 30;

fn pool() -> PhrasePool {
    PhrasePool::new((0..POOL_SIZE).map(|i| format!("phrase {i:02}"))).unwrap()
}

fn session() -> GameSession {
    GameSession::new(pool())
}

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

fn now() -> OffsetDateTime {
    datetime!(2026-08-01 18:30 UTC)
}

fn register(session: &mut GameSession, name: &str) -> Uuid {
    let id = Uuid::new_v4();
    session.register_player(id, Some(name), now()).unwrap();
    id
}

/// Register a player and lock a card onto them.
fn register_with_card(session: &mut GameSession, name: &str, rng: &mut ChaCha8Rng) -> Uuid {
    let id = register(session, name);
    let card = session.preview_scorecards(1, rng).unwrap().remove(0);
    session.assign_scorecard(id, card.id()).unwrap();
    id
}

fn drain_calls(session: &mut GameSession) -> Vec<String> {
    let mut calls = Vec::new();
    while let Some(call) = session.draw().unwrap() {
        calls.push(call);
    }
    calls
}

#[test]
fn start_is_rejected_unless_waiting_for_host() {
    let mut session = session();
    let mut rng = rng();
    session.start(&mut rng, now()).unwrap();
    assert!(matches!(
        session.start(&mut rng, now()),
        Err(DomainError::InvalidTransition(_))
    ));

    drain_calls(&mut session);
    assert_eq!(session.status(), GameStatus::Complete);
    assert!(matches!(
        session.start(&mut rng, now()),
        Err(DomainError::InvalidTransition(_))
    ));
}

#[test]
fn draw_before_start_is_rejected() {
    let mut session = session();
    assert!(matches!(
        session.draw(),
        Err(DomainError::InvalidTransition(_))
    ));
}

#[test]
fn draw_produces_each_phrase_exactly_once_then_completes() {
    let mut session = session();
    let mut rng = rng();
    session.start(&mut rng, now()).unwrap();

    let calls = drain_calls(&mut session);
    assert_eq!(calls.len(), POOL_SIZE);
    let distinct: HashSet<&String> = calls.iter().collect();
    assert_eq!(distinct.len(), POOL_SIZE);

    let snapshot = session.snapshot();
    assert_eq!(snapshot.status, GameStatus::Complete);
    assert_eq!(snapshot.called_phrases, calls);
    assert_eq!(snapshot.remaining_calls, 0);
}

#[test]
fn draw_after_completion_is_an_idempotent_no_op() {
    let mut session = session();
    let mut rng = rng();
    session.start(&mut rng, now()).unwrap();
    drain_calls(&mut session);

    let version = session.version();
    let current = session.snapshot().current_call;
    for _ in 0..3 {
        assert_eq!(session.draw().unwrap(), None);
    }
    assert_eq!(session.status(), GameStatus::Complete);
    assert_eq!(session.version(), version);
    assert_eq!(session.snapshot().current_call, current);
}

#[test]
fn snapshot_tracks_the_remaining_pool() {
    let mut session = session();
    assert_eq!(session.snapshot().remaining_calls, POOL_SIZE);

    let mut rng = rng();
    session.start(&mut rng, now()).unwrap();
    assert_eq!(session.snapshot().remaining_calls, POOL_SIZE);

    for _ in 0..5 {
        session.draw().unwrap();
    }
    let snapshot = session.snapshot();
    assert_eq!(snapshot.remaining_calls, POOL_SIZE - 5);
    assert_eq!(snapshot.called_phrases.len(), 5);
    assert_eq!(
        snapshot.current_call.as_deref(),
        snapshot.called_phrases.last().map(String::as_str)
    );
}

#[test]
fn preview_offers_distinct_cards_with_free_centers() {
    let mut session = session();
    let mut rng = rng();
    let cards = session.preview_scorecards(6, &mut rng).unwrap();
    assert_eq!(cards.len(), 6);

    let fingerprints: HashSet<String> = cards.iter().map(|c| c.fingerprint()).collect();
    assert_eq!(fingerprints.len(), 6);
    for card in &cards {
        assert_eq!(card.value(2, 2), FREE_SPACE);
    }
}

#[test]
fn assigned_cards_are_never_offered_again() {
    let mut session = session();
    let mut rng = rng();
    let player = register(&mut session, "Avery");

    let card = session
        .preview_scorecards(SCORECARD_POOL_TARGET, &mut rng)
        .unwrap()
        .remove(0);
    session.assign_scorecard(player, card.id()).unwrap();

    let offered = session
        .preview_scorecards(SCORECARD_POOL_TARGET, &mut rng)
        .unwrap();
    assert_eq!(offered.len(), SCORECARD_POOL_TARGET);
    assert!(offered.iter().all(|c| c.id() != card.id()));
    assert!(offered.iter().all(|c| c.fingerprint() != card.fingerprint()));
}

#[test]
fn a_taken_card_cannot_be_taken_twice() {
    let mut session = session();
    let mut rng = rng();
    let first = register(&mut session, "Avery");
    let second = register(&mut session, "Blake");

    let card = session.preview_scorecards(2, &mut rng).unwrap().remove(0);
    session.assign_scorecard(first, card.id()).unwrap();

    assert_eq!(
        session.assign_scorecard(second, card.id()).unwrap_err(),
        DomainError::ScorecardNotFound(card.id())
    );
}

#[test]
fn players_lock_at_most_one_card() {
    let mut session = session();
    let mut rng = rng();
    let player = register(&mut session, "Avery");

    let cards = session.preview_scorecards(2, &mut rng).unwrap();
    session.assign_scorecard(player, cards[0].id()).unwrap();
    assert_eq!(
        session.assign_scorecard(player, cards[1].id()).unwrap_err(),
        DomainError::AlreadyAssigned
    );
}

#[test]
fn card_selection_is_locked_while_in_progress() {
    let mut session = session();
    let mut rng = rng();
    let player = register(&mut session, "Avery");
    let card = session.preview_scorecards(1, &mut rng).unwrap().remove(0);

    session.start(&mut rng, now()).unwrap();
    assert_eq!(
        session.assign_scorecard(player, card.id()).unwrap_err(),
        DomainError::LockedRound
    );
}

#[test]
fn assignment_requires_a_registered_player() {
    let mut session = session();
    let mut rng = rng();
    let card = session.preview_scorecards(1, &mut rng).unwrap().remove(0);
    let ghost = Uuid::new_v4();
    assert_eq!(
        session.assign_scorecard(ghost, card.id()).unwrap_err(),
        DomainError::PlayerNotFound(ghost)
    );
}

#[test]
fn reset_without_dropping_keeps_players_and_their_cards() {
    let mut session = session();
    let mut rng = rng();
    let player = register_with_card(&mut session, "Avery", &mut rng);

    session.start(&mut rng, now()).unwrap();
    session.draw().unwrap();
    session.reset(false);

    let snapshot = session.snapshot();
    assert_eq!(snapshot.status, GameStatus::WaitingForHost);
    assert!(snapshot.called_phrases.is_empty());
    assert!(snapshot.current_call.is_none());
    assert!(snapshot.winners.is_empty());
    assert!(snapshot.started_at.is_none());
    assert_eq!(snapshot.player_count, 1);
    assert!(session.player(player).unwrap().scorecard.is_some());

    // The surviving card is still locked out of the offer pool.
    let fingerprint = session
        .player(player)
        .unwrap()
        .scorecard
        .as_ref()
        .unwrap()
        .fingerprint();
    let offered = session.preview_scorecards(6, &mut rng).unwrap();
    assert!(offered.iter().all(|c| c.fingerprint() != fingerprint));
}

#[test]
fn reset_dropping_players_clears_the_roster() {
    let mut session = session();
    let mut rng = rng();
    register_with_card(&mut session, "Avery", &mut rng);

    session.reset(true);
    let snapshot = session.snapshot();
    assert_eq!(snapshot.status, GameStatus::WaitingForHost);
    assert_eq!(snapshot.player_count, 0);
}

#[test]
fn restart_after_reset_runs_a_full_fresh_round() {
    let mut session = session();
    let mut rng = rng();
    session.start(&mut rng, now()).unwrap();
    drain_calls(&mut session);
    session.reset(false);

    session.start(&mut rng, now()).unwrap();
    let calls = drain_calls(&mut session);
    assert_eq!(calls.len(), POOL_SIZE);
    assert_eq!(session.status(), GameStatus::Complete);
}

#[test]
fn claim_with_nothing_called_is_incomplete() {
    let mut session = session();
    let mut rng = rng();
    let player = register_with_card(&mut session, "Avery", &mut rng);
    session.start(&mut rng, now()).unwrap();

    let evaluation = session.claim(player, ClaimType::Row, now()).unwrap();
    assert!(!evaluation.accepted);
    assert!(evaluation.winners.is_empty());
}

#[test]
fn claim_for_an_unknown_player_is_an_error() {
    let mut session = session();
    let ghost = Uuid::new_v4();
    assert_eq!(
        session.claim(ghost, ClaimType::Row, now()).unwrap_err(),
        DomainError::PlayerNotFound(ghost)
    );
}

#[test]
fn claim_without_a_card_is_rejected_not_an_error() {
    let mut session = session();
    let player = register(&mut session, "Avery");
    let evaluation = session.claim(player, ClaimType::Row, now()).unwrap();
    assert!(!evaluation.accepted);
    assert_eq!(evaluation.message, "Select a scorecard before claiming");
}

#[test]
fn full_card_ranks_are_awarded_in_order() {
    let mut session = session();
    let mut rng = rng();
    let avery = register_with_card(&mut session, "Avery", &mut rng);
    let blake = register_with_card(&mut session, "Blake", &mut rng);
    session.start(&mut rng, now()).unwrap();
    drain_calls(&mut session);

    // Every phrase has been called, so every card is complete; only the
    // rank bookkeeping decides acceptance.
    let second = ClaimType::FullCard(FullCardRank::Second);
    let premature = session.claim(avery, second, now()).unwrap();
    assert!(!premature.accepted);

    let first = ClaimType::FullCard(FullCardRank::First);
    assert!(session.claim(avery, first, now()).unwrap().accepted);
    assert!(session.claim(blake, second, now()).unwrap().accepted);

    // Third full-card winner (unranked) completes the round and hits the cap.
    let unranked = ClaimType::FullCard(FullCardRank::Unranked);
    let third = session.claim(avery, unranked, now()).unwrap();
    assert!(third.accepted);
    assert_eq!(session.status(), GameStatus::Complete);

    let capped = session.claim(blake, unranked, now()).unwrap();
    assert!(!capped.accepted);

    let winners = session.snapshot().winners;
    assert_eq!(winners.len(), 3);
    assert_eq!(winners[0].claim, first);
    assert_eq!(winners[1].claim, second);
    assert_eq!(winners[2].claim, unranked);
    assert_eq!(winners[0].display_name, "Avery");
    assert_eq!(winners[1].display_name, "Blake");
}

#[test]
fn the_same_claim_is_recorded_once_per_player() {
    let mut session = session();
    let mut rng = rng();
    let player = register_with_card(&mut session, "Avery", &mut rng);
    session.start(&mut rng, now()).unwrap();
    drain_calls(&mut session);

    assert!(session.claim(player, ClaimType::Row, now()).unwrap().accepted);
    let repeat = session.claim(player, ClaimType::Row, now()).unwrap();
    assert!(!repeat.accepted);
    assert_eq!(repeat.message, "Claim already recorded");
    assert_eq!(session.snapshot().winners.len(), 1);

    // A different pattern is a fresh claim.
    let column = session
        .claim(player, ClaimType::Column(ColumnTarget::Any), now())
        .unwrap();
    assert!(column.accepted);
}

#[test]
fn winners_are_ordered_by_acceptance_time() {
    let mut session = session();
    let mut rng = rng();
    let avery = register_with_card(&mut session, "Avery", &mut rng);
    let blake = register_with_card(&mut session, "Blake", &mut rng);
    session.start(&mut rng, now()).unwrap();
    drain_calls(&mut session);

    let t1 = datetime!(2026-08-01 19:00 UTC);
    let t2 = datetime!(2026-08-01 19:05 UTC);
    session.claim(blake, ClaimType::Row, t1).unwrap();
    session.claim(avery, ClaimType::Diagonal, t2).unwrap();

    let winners = session.snapshot().winners;
    assert_eq!(winners[0].display_name, "Blake");
    assert_eq!(winners[0].timestamp, t1);
    assert_eq!(winners[1].display_name, "Avery");
    assert_eq!(winners[1].timestamp, t2);
}

#[test]
fn directory_reports_card_possession() {
    let mut session = session();
    let mut rng = rng();
    let avery = register_with_card(&mut session, "Avery", &mut rng);
    let blake = register(&mut session, "Blake");

    let directory = session.directory();
    assert_eq!(directory.len(), 2);

    let avery_entry = directory.iter().find(|e| e.player_id == avery).unwrap();
    assert!(avery_entry.joined);
    assert!(avery_entry.has_scorecard);

    let blake_entry = directory.iter().find(|e| e.player_id == blake).unwrap();
    assert!(blake_entry.joined);
    assert!(!blake_entry.has_scorecard);
}

#[test]
fn version_bumps_on_mutations_only() {
    let mut session = session();
    let mut rng = rng();
    let v0 = session.version();

    session.snapshot();
    session.directory();
    assert_eq!(session.version(), v0);

    register(&mut session, "Avery");
    assert!(session.version() > v0);

    let v1 = session.version();
    session.start(&mut rng, now()).unwrap();
    session.draw().unwrap();
    session.reset(false);
    assert!(session.version() > v1);
}
