//! Property tests: grid invariants under arbitrary play.

use proptest::prelude::*;

use liftoff::core::{Die, GameOutcome, GameRng, GameSession, Phase, PlayerSetup, ScriptedDice};
use liftoff::grid::{are_adjacent, Position};
use liftoff::{EngineConfig, LaunchOutcome, TurnEngine};

/// Check the invariants that hold after every command, launches included.
fn assert_invariants(session: &GameSession, fire_limit: u8) {
    let grid = &session.grid;
    let booster_rows: Vec<_> = grid.boosters().map(|p| p.row()).collect();
    assert!(
        booster_rows.windows(2).all(|w| w[0] == w[1]),
        "boosters in rows {booster_rows:?}"
    );

    for (pos, die) in grid.dice() {
        if die.is_body() {
            assert_eq!(pos.col(), die.value, "body die {} off its column at {pos}", die.value);
            if let Some(&booster_row) = booster_rows.first() {
                assert!(pos.row() < booster_row, "body die at {pos} below boosters in row {booster_row}");
            }
        } else {
            assert!(pos.row() > 1, "booster in row 1");
        }
    }

    for row in 1..=6 {
        assert!(
            !(grid.row_has_booster(row) && grid.row_has_body(row)),
            "row {row} mixes boosters and body dice"
        );
    }

    assert_eq!(session.rocket_height, grid.body_bottom_row());

    if session.fire_pile >= fire_limit {
        assert_eq!(session.phase, Phase::GameOver(GameOutcome::Explosion));
    }
}

/// Launch when the rocket is ready and `choice` says so.
fn maybe_launch(engine: &mut TurnEngine, choice: u8, fire_limit: u8) {
    if choice % 5 != 0 || !engine.can_launch() {
        return;
    }
    let outcome = engine.attempt_launch().unwrap();
    assert_ne!(outcome, LaunchOutcome::NotReady);
    assert_invariants(engine.session(), fire_limit);
}

/// Play a seeded game, picking targets and launches from `choices`, checking
/// invariants after every command.
fn play(seed: u64, roster: &[u32], choices: &[u8]) {
    let config = EngineConfig::default().with_seed(seed);
    let fire_limit = config.fire_limit;
    let mut engine = TurnEngine::seeded(config);
    let roster = roster
        .iter()
        .enumerate()
        .map(|(i, &dice)| PlayerSetup::new(format!("P{}", i + 1), dice))
        .collect();
    engine.start_game(roster).unwrap();

    let mut step = 0usize;
    while step < 400 && !engine.session().is_over() {
        let choice = choices[step % choices.len()];
        step += 1;

        match engine.phase() {
            Phase::LaunchPending => {
                assert!(engine.can_launch());
                assert_ne!(engine.attempt_launch().unwrap(), LaunchOutcome::NotReady);
                assert_invariants(engine.session(), fire_limit);
                continue;
            }
            Phase::AwaitingRoll => {
                maybe_launch(&mut engine, choice, fire_limit);
                if engine.session().is_over() {
                    break;
                }
                engine.start_turn().unwrap();
            }
            _ => {}
        }

        let hand: Vec<Die> = engine.hand().iter().filter(|d| !d.placed).cloned().collect();
        for die in hand {
            if engine.session().is_over() {
                break;
            }

            let choice = choices[step % choices.len()];
            step += 1;
            let targets = engine.valid_positions(die.value);

            if targets.is_empty() || choice % 7 == 0 {
                engine.discard_to_fire(die.id).unwrap();
            } else {
                let pos = targets[choice as usize % targets.len()];
                let before = engine.session().grid.clone();
                assert!(engine.place_die(die.id, pos).unwrap());

                if before.is_empty() {
                    assert_eq!(pos, Position::new(1, 1));
                } else {
                    assert!(
                        before.dice().any(|(other, _)| are_adjacent(pos, other)),
                        "{pos} placed without a neighbour"
                    );
                }
            }
            assert_invariants(engine.session(), fire_limit);

            if !engine.session().is_over() {
                maybe_launch(&mut engine, choice, fire_limit);
            }
        }

        if engine.session().is_over() {
            break;
        }
        let outcome = engine.end_turn().unwrap();
        assert!(outcome.ended(), "turn not ended: {outcome:?}");
        assert_invariants(engine.session(), fire_limit);
    }
}

/// Solo engine holding `hand`, with a fire pile too deep to fill.
fn solo(hand: Vec<u8>) -> TurnEngine<ScriptedDice> {
    let dice = hand.len() as u32;
    let config = EngineConfig::default().with_fire_limit(u8::MAX);
    let mut engine = TurnEngine::new(config, ScriptedDice::new(hand).then(GameRng::new(1)));
    engine.start_game(vec![PlayerSetup::new("Solo", dice)]).unwrap();
    engine.start_turn().unwrap();
    engine
}

proptest! {
    #[test]
    fn prop_body_dice_match_their_column(
        value in 1u8..=5,
        choices in prop::collection::vec(any::<u8>(), 6),
    ) {
        // Build some rocket first, then probe every valid target.
        let mut engine = solo(vec![1, 1, 2, 1, 2, 3, value]);
        for choice in choices {
            let Some(die) = engine.hand().iter().find(|d| !d.placed).cloned() else {
                break;
            };
            let targets = engine.valid_positions(die.value);
            if targets.is_empty() {
                engine.discard_to_fire(die.id).unwrap();
            } else {
                let pos = targets[choice as usize % targets.len()];
                prop_assert!(engine.place_die(die.id, pos).unwrap());
            }
        }

        for pos in engine.valid_positions(value) {
            prop_assert_eq!(pos.col(), value);
        }
    }

    #[test]
    fn prop_invariants_hold_under_play(
        seed in any::<u64>(),
        roster in prop::collection::vec(1u32..=6, 1..=4),
        choices in prop::collection::vec(any::<u8>(), 1..64),
    ) {
        play(seed, &roster, &choices);
    }

    #[test]
    fn prop_undo_is_exact_inverse(
        hand in prop::collection::vec(1u8..=6, 1..=12),
        ops in prop::collection::vec(any::<u8>(), 1..12),
    ) {
        let mut engine = solo(hand);
        let before = engine.session().clone();

        let mut committed = 0;
        for op in ops {
            let Some(die) = engine.hand().iter().find(|d| !d.placed).cloned() else {
                break;
            };
            let targets = engine.valid_positions(die.value);
            if op % 3 == 0 || targets.is_empty() {
                engine.discard_to_fire(die.id).unwrap();
            } else {
                let pos = targets[op as usize % targets.len()];
                prop_assert!(engine.place_die(die.id, pos).unwrap());
            }
            committed += 1;
        }

        for _ in 0..committed {
            prop_assert!(engine.undo_last().unwrap());
        }
        prop_assert!(!engine.undo_last().unwrap());

        let after = engine.session();
        prop_assert_eq!(&after.grid, &before.grid);
        prop_assert_eq!(after.rocket_height, before.rocket_height);
        prop_assert_eq!(after.booster_row_locked, before.booster_row_locked);
        prop_assert_eq!(after.fire_pile, before.fire_pile);
        prop_assert_eq!(&after.hand, &before.hand);
    }

    #[test]
    fn prop_fire_limit_ends_game_on_the_spot(
        limit in 1u8..=8,
        extra in 0u32..4,
    ) {
        let config = EngineConfig::default().with_fire_limit(limit);
        let mut engine = TurnEngine::new(config, ScriptedDice::new(vec![4]));
        engine.start_game(vec![PlayerSetup::new("Solo", u32::from(limit) + extra)]).unwrap();
        engine.start_turn().unwrap();

        let ids: Vec<_> = engine.hand().iter().map(|d| d.id).collect();
        for (n, id) in ids.into_iter().enumerate().take(limit as usize) {
            let pile = engine.discard_to_fire(id).unwrap();
            prop_assert_eq!(pile as usize, n + 1);
            prop_assert_eq!(engine.session().is_over(), pile == limit);
        }
        prop_assert_eq!(engine.phase(), &Phase::GameOver(GameOutcome::Explosion));
    }

    #[test]
    fn prop_failed_launch_sacrifices_one_booster(
        boosters in 1usize..=3,
        rolls in prop::collection::vec(1u8..=5, 3),
    ) {
        let mut hand = vec![1, 1, 2];
        hand.extend(std::iter::repeat(6).take(boosters));
        let mut script = hand.clone();
        script.extend_from_slice(&rolls[..boosters]);

        let mut engine = TurnEngine::new(EngineConfig::default(), ScriptedDice::new(script));
        engine.start_game(vec![PlayerSetup::new("Solo", hand.len() as u32)]).unwrap();
        engine.start_turn().unwrap();

        let ids: Vec<_> = engine.hand().iter().map(|d| d.id).collect();
        let mut targets = vec![Position::new(1, 1), Position::new(2, 1), Position::new(2, 2)];
        targets.extend((1..=boosters as u8).map(|col| Position::new(3, col)));
        for (id, pos) in ids.into_iter().zip(targets) {
            prop_assert!(engine.place_die(id, pos).unwrap());
        }

        let before = engine.session().clone();
        let outcome = engine.attempt_launch().unwrap();
        let after = engine.session();

        let is_failure = matches!(outcome, LaunchOutcome::Failure { .. });
        prop_assert!(is_failure);
        prop_assert_eq!(after.grid.booster_count(), before.grid.booster_count() - 1);
        prop_assert_eq!(after.grid.len(), before.grid.len() - 1);
        prop_assert_eq!(after.fire_pile, before.fire_pile + 1);
        prop_assert!(!after.booster_row_locked);
    }
}
