//! Mission integration tests.
//!
//! These tests play through the flows a table goes through:
//! - Picking players and dealing tasks
//! - Rearranging and reassigning tasks
//! - Running the deck dry
//! - Resetting between games

use rustc_hash::FxHashSet;

use crew_tasks::cards::{Suit, DECK_SIZE};
use crew_tasks::core::{MissionConfig, MissionError, PlayerId, Seat};
use crew_tasks::mission::Mission;
use crew_tasks::players::PlayerRegistry;
use crew_tasks::tasks::TaskId;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn seeded(seed: u64) -> Mission {
    init_tracing();
    Mission::new(MissionConfig::new().with_seed(seed))
}

fn registry() -> PlayerRegistry {
    PlayerRegistry::from_names(&MissionConfig::new(), ["ana", "ben", "cyd", "dee"]).unwrap()
}

/// Test dealing a single, a double and a special task.
#[test]
fn test_single_double_special() {
    let mut mission = seeded(42);

    mission.add_task(1).unwrap();
    mission.add_task(2).unwrap();
    mission.add_special_task();

    let lengths: Vec<_> = mission.tasks().iter().map(|t| t.cards().len()).collect();
    assert_eq!(lengths, vec![1, 2, 1]);

    let last = mission.tasks().last().unwrap();
    assert_eq!(last.cards()[0].suit, Suit::Special);
    assert!(last.is_special());

    assert_eq!(mission.deck().len(), DECK_SIZE - 3);
}

/// Test that tasks dealt from a fresh deck never repeat a card.
#[test]
fn test_no_repeated_cards() {
    let mut mission = seeded(7);
    for _ in 0..12 {
        mission.add_task(3).unwrap();
    }

    let dealt: FxHashSet<_> = mission
        .tasks()
        .iter()
        .flat_map(|t| t.cards().iter().map(|c| (c.rank, c.suit)))
        .collect();
    assert_eq!(dealt.len(), DECK_SIZE);
    assert!(mission.deck().is_empty());
}

/// Test that an exhausted deck deals special cards and stays empty.
#[test]
fn test_exhausted_deck() {
    let mut mission = seeded(3);
    mission.add_task(1).unwrap();
    mission.add_task(2).unwrap();
    for _ in 0..33 {
        mission.add_task(1).unwrap();
    }
    assert!(mission.deck().is_empty());

    mission.add_task(1).unwrap();
    let task = mission.tasks().last().unwrap();
    assert_eq!(task.cards()[0].suit, Suit::Special);
    assert!(mission.deck().is_empty());
}

/// Test that a draw running past the end fills up with special cards.
#[test]
fn test_partial_exhaustion_within_one_task() {
    let mut mission = seeded(3);
    for _ in 0..DECK_SIZE - 1 {
        mission.add_task(1).unwrap();
    }

    let id = mission.add_task(3).unwrap();
    let task = mission.task(id).unwrap();

    let specials = task.cards().iter().filter(|c| c.is_special()).count();
    assert_eq!(specials, 2);
    assert!(!task.cards()[0].is_special());
}

/// Test that swapping exchanges positions and is an involution.
#[test]
fn test_swap_involution() {
    let registry = registry();
    let mut mission = seeded(11);
    mission.select_player(&registry, PlayerId::new(0)).unwrap();
    mission.select_player(&registry, PlayerId::new(1)).unwrap();

    let before = mission.add_task(1).unwrap();
    let t1 = mission.add_task(1).unwrap();
    let middle = mission.add_task(2).unwrap();
    let t2 = mission.add_task(1).unwrap();
    let after = mission.add_special_task();

    mission.task_mut(t1).unwrap().assignee = Some(Seat::new(0));
    mission.task_mut(t2).unwrap().assignee = Some(Seat::new(1));

    let order = |m: &Mission| m.tasks().iter().map(|t| t.id()).collect::<Vec<TaskId>>();
    let original = order(&mission);

    mission.swap_tasks(t1, t2).unwrap();
    assert_eq!(order(&mission), vec![before, t2, middle, t1, after]);

    mission.swap_tasks(t1, t2).unwrap();
    assert_eq!(order(&mission), original);
}

/// Test that tasks with identical values are still swapped by handle.
#[test]
fn test_swap_equal_valued_tasks() {
    let mut mission = seeded(5);
    let a = mission.add_special_task();
    let b = mission.add_special_task();
    assert_eq!(mission.task(a), mission.task(b));

    mission.swap_tasks(a, b).unwrap();
    assert_eq!(mission.position(a), Some(1));
    assert_eq!(mission.position(b), Some(0));
}

/// Test that swapping with a task from another mission fails loudly.
#[test]
fn test_swap_foreign_task() {
    let mut mission = seeded(5);
    let mut other = seeded(5);
    let mine = mission.add_task(1).unwrap();
    other.add_task(1).unwrap();
    let foreign = other.add_task(1).unwrap();

    let err = mission.swap_tasks(mine, foreign).unwrap_err();
    assert!(matches!(err, MissionError::TaskNotFound(id) if id == foreign));
}

/// Test that a session is replayed from its recorded seed.
#[test]
fn test_replay_from_seed() {
    init_tracing();
    let mut live = Mission::new(MissionConfig::new());
    let mut replay = Mission::new(MissionConfig::new().with_seed(live.seed()));
    assert_eq!(replay.seed(), live.seed());

    let deal = |m: &mut Mission| {
        m.reset();
        (0..6)
            .map(|_| {
                let id = m.add_task(2).unwrap();
                m.task(id).unwrap().to_string()
            })
            .collect::<Vec<_>>()
    };

    // Each reset reshuffles, and the replay follows along
    for _ in 0..3 {
        assert_eq!(deal(&mut live), deal(&mut replay));
    }
}

/// Test that reset refills the deck, clears tasks and keeps the roster.
#[test]
fn test_reset_keeps_roster() {
    let registry = registry();
    let mut mission = seeded(9);
    mission.select_player(&registry, PlayerId::new(2)).unwrap();
    mission.select_player(&registry, PlayerId::new(0)).unwrap();
    let roster_before = mission.roster().clone();

    for _ in 0..5 {
        mission.add_task(2).unwrap();
    }
    mission.reset();

    assert!(mission.tasks().is_empty());
    assert_eq!(mission.roster(), &roster_before);
    assert_eq!(mission.deck().len(), DECK_SIZE);

    for _ in 0..DECK_SIZE {
        mission.add_task(1).unwrap();
    }
    let dealt: FxHashSet<_> = mission
        .tasks()
        .iter()
        .map(|t| (t.cards()[0].rank, t.cards()[0].suit))
        .collect();
    assert_eq!(dealt.len(), DECK_SIZE);
    assert!(dealt.iter().all(|(_, suit)| *suit != Suit::Special));
}

/// Test that seats follow selection order and stay a permutation.
#[test]
fn test_seats_are_permutation() {
    let registry = registry();
    let mut mission = seeded(1);

    for id in [3, 1, 0, 2] {
        mission.select_player(&registry, PlayerId::new(id)).unwrap();
    }
    mission.deselect_player(PlayerId::new(1)).unwrap();
    mission.toggle_player(&registry, PlayerId::new(1)).unwrap();

    let seats: Vec<_> = mission.roster().seats().map(|(seat, _)| seat).collect();
    assert_eq!(seats, Seat::all(4).collect::<Vec<_>>());

    let players: Vec<_> = mission.roster().players().to_vec();
    assert_eq!(
        players,
        vec![PlayerId::new(3), PlayerId::new(0), PlayerId::new(2), PlayerId::new(1)]
    );
}

/// Test a whole game: deal, assign, sort, complete.
#[test]
fn test_full_game() {
    let registry = registry();
    let mut mission = seeded(2);
    mission.select_player(&registry, PlayerId::new(0)).unwrap();
    mission.select_player(&registry, PlayerId::new(1)).unwrap();
    mission.select_player(&registry, PlayerId::new(2)).unwrap();

    let tasks: Vec<_> = (0..3).map(|_| mission.add_task(1).unwrap()).collect();
    let special = mission.add_special_task();

    // Deal tasks out in reverse seat order
    for (i, &id) in tasks.iter().enumerate() {
        for _ in 0..(3 - i) {
            mission.cycle_assignee(id).unwrap();
        }
    }
    assert_eq!(mission.task(tasks[0]).unwrap().assignee, Some(Seat::new(2)));
    assert_eq!(mission.task(tasks[2]).unwrap().assignee, Some(Seat::new(0)));

    mission.sort_tasks();
    let order: Vec<_> = mission.tasks().iter().map(|t| t.id()).collect();
    assert_eq!(order, vec![tasks[2], tasks[1], tasks[0], special]);

    for id in order {
        assert!(!mission.is_complete());
        mission.toggle_card_done(id, 0).unwrap();
    }
    assert!(mission.is_complete());

    let who = mission.assignee_player(tasks[0]).unwrap();
    assert_eq!(who, Some(PlayerId::new(2)));
    assert_eq!(registry.get(who.unwrap()).unwrap().name, "cyd");
}
