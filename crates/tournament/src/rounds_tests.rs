use super::*;
use crate::memory_store::MemoryStore;
use rand::rngs::StdRng;
use rand::SeedableRng;
use swiss_core::PlayerId;

fn store_with(n: usize) -> (MemoryStore, TournamentId, Vec<PlayerId>) {
    let mut store = MemoryStore::new();
    let t = store.create_tournament("Club night");
    let ids = (0..n)
        .map(|i| store.register_player(t, &format!("Player {}", i + 1)).unwrap())
        .collect();
    (store, t, ids)
}

#[test]
fn test_even_round_records_nothing() {
    let (mut store, t, ids) = store_with(4);
    let mut rng = StdRng::seed_from_u64(0);

    let plan = RoundPlanner::default()
        .next_round_pairings(&mut store, t, &mut rng)
        .unwrap();

    assert!(plan.bye.is_none());
    let pairs: Vec<(PlayerId, PlayerId)> = plan.pairings.iter().map(|r| (r.id_a, r.id_b)).collect();
    assert_eq!(pairs, vec![(ids[0], ids[1]), (ids[2], ids[3])]);
    assert_eq!(plan.pairings[0].name_a, "Player 1");
    assert!(store.standings(t).unwrap().iter().all(|s| !s.had_bye));
}

#[test]
fn test_odd_round_persists_bye() {
    let (mut store, t, _) = store_with(5);
    let mut rng = StdRng::seed_from_u64(9);

    let plan = RoundPlanner::default()
        .next_round_pairings(&mut store, t, &mut rng)
        .unwrap();

    let bye = plan.bye.unwrap();
    assert_eq!(plan.pairings.len(), 2);
    let standings = store.standings(t).unwrap();
    let recipient = standings.iter().find(|s| s.id == bye.id).unwrap();
    assert!(recipient.had_bye);
    assert_eq!(recipient.wins, 1);
}

#[test]
fn test_recorded_results_prevent_rematches() {
    let (mut store, t, ids) = store_with(4);
    store.record_match(t, ids[0], ids[1]).unwrap();
    store.record_match(t, ids[2], ids[3]).unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    let plan = RoundPlanner::default()
        .next_round_pairings(&mut store, t, &mut rng)
        .unwrap();

    let pairs: Vec<(PlayerId, PlayerId)> = plan.pairings.iter().map(|r| (r.id_a, r.id_b)).collect();
    assert_eq!(pairs, vec![(ids[0], ids[2]), (ids[1], ids[3])]);
}

fn exhausted_store() -> (MemoryStore, TournamentId, Vec<PlayerId>) {
    // Everyone on one win; the bottom two already had their byes.
    let (mut store, t, ids) = store_with(3);
    store.record_match(t, ids[0], ids[1]).unwrap();
    store.record_bye(t, ids[1]).unwrap();
    store.record_bye(t, ids[2]).unwrap();
    (store, t, ids)
}

#[test]
fn test_exhausted_bye_pool_is_reported() {
    let (mut store, t, _) = exhausted_store();
    let mut rng = StdRng::seed_from_u64(0);

    let err = RoundPlanner::default()
        .next_round_pairings(&mut store, t, &mut rng)
        .unwrap_err();
    assert!(matches!(
        err,
        RoundError::Pairing(PairingError::NoEligibleByeCandidate { .. })
    ));
}

#[test]
fn test_widening_gives_bye_to_top_half() {
    let (mut store, t, ids) = exhausted_store();
    let mut rng = StdRng::seed_from_u64(0);

    let plan = RoundPlanner::new(Pairer::default(), true)
        .next_round_pairings(&mut store, t, &mut rng)
        .unwrap();
    assert_eq!(plan.bye.map(|b| b.id), Some(ids[0]));
    assert_eq!(plan.pairings.len(), 1);
}

#[test]
fn test_deadlock_writes_nothing() {
    let (mut store, t, ids) = store_with(3);
    store.record_match(t, ids[0], ids[1]).unwrap();
    store.record_match(t, ids[2], ids[0]).unwrap();
    let before = store.standings(t).unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    let err = RoundPlanner::default()
        .next_round_pairings(&mut store, t, &mut rng)
        .unwrap_err();

    assert!(matches!(
        err,
        RoundError::Pairing(PairingError::PairingDeadlock { .. })
    ));
    assert_eq!(store.standings(t).unwrap(), before);
}

#[test]
fn test_store_errors_pass_through() {
    let mut store = MemoryStore::new();
    let mut rng = StdRng::seed_from_u64(0);

    let err = RoundPlanner::default()
        .next_round_pairings(&mut store, TournamentId(3), &mut rng)
        .unwrap_err();
    assert!(matches!(
        err,
        RoundError::Store(StoreError::UnknownTournament(TournamentId(3)))
    ));
}

#[test]
fn test_next_round_number_counts_games_and_byes() {
    let (mut store, t, ids) = store_with(3);
    assert_eq!(next_round_number(&store.standings(t).unwrap()), 1);

    store.record_match(t, ids[0], ids[1]).unwrap();
    store.record_bye(t, ids[2]).unwrap();
    assert_eq!(next_round_number(&store.standings(t).unwrap()), 2);
}

#[test]
fn test_lone_player_tournament_records_the_bye() {
    let (mut store, t, ids) = store_with(1);
    let mut rng = StdRng::seed_from_u64(4);

    let plan = RoundPlanner::default()
        .next_round_pairings(&mut store, t, &mut rng)
        .unwrap();

    assert!(plan.pairings.is_empty());
    assert_eq!(plan.bye.map(|b| b.id), Some(ids[0]));
    let standings = store.standings(t).unwrap();
    assert!(standings[0].had_bye);
    assert_eq!(standings[0].wins, 1);
}
