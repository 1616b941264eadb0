//! Pattern recall integration tests.
//!
//! The reveal sequence is driven with `ManualTimers`, which fires the
//! engine's show/gap callbacks in order without simulating real delays.

use quest_engine::core::{ChallengeConfig, EngineError, InputRejection, Outcome, Phase};
use quest_engine::engine::{ChallengeEngine, Input};
use quest_engine::ManualTimers;

fn start_pattern(seed: u64) -> (ChallengeEngine, ManualTimers) {
    let engine = ChallengeEngine::start(ChallengeConfig::pattern(), Some(seed)).unwrap();
    (engine, ManualTimers::new())
}

/// Drive the reveal to completion so the round accepts input.
fn finish_reveal(engine: &mut ChallengeEngine, timers: &mut ManualTimers) {
    timers.run(engine);
    assert_eq!(engine.state().phase, Phase::AwaitingInput);
}

fn target(engine: &ChallengeEngine, round: usize) -> Vec<usize> {
    engine.content().target(round).expect("pattern content").to_vec()
}

#[test]
fn test_reveal_walks_the_target_sequence() {
    let (mut engine, mut timers) = start_pattern(42);
    let target = target(&engine, 0);
    assert_eq!(target.len(), 4);

    // Round 0 opens mid-reveal with the first cell lit.
    assert_eq!(engine.state().phase, Phase::Presenting);
    assert_eq!(engine.state().highlighted_cell(), Some(target[0]));

    // Input is rejected while presenting.
    let err = engine.submit(Input::Cell(target[0])).unwrap_err();
    assert!(matches!(err, EngineError::InvalidPhase { op: "submit", .. }));

    // show -> gap -> show ... : every odd step is dark, every even step
    // lights the next target cell.
    let mut lit = vec![target[0]];
    while engine.state().phase == Phase::Presenting {
        timers.fire_next(&mut engine);
        if let Some(cell) = engine.state().highlighted_cell() {
            lit.push(cell);
        }
    }
    assert_eq!(lit, target);
    assert_eq!(engine.state().highlighted_cell(), None);
}

#[test]
fn test_exact_sequence_is_correct() {
    let (mut engine, mut timers) = start_pattern(42);
    finish_reveal(&mut engine, &mut timers);

    let target = target(&engine, 0);
    for (i, &cell) in target.iter().enumerate() {
        engine.submit(Input::Cell(cell)).unwrap();
        if i + 1 < target.len() {
            assert_eq!(engine.state().phase, Phase::AwaitingInput);
            assert_eq!(engine.state().picked_cells(), &target[..i + 1]);
        }
    }

    let state = engine.state();
    assert_eq!(state.phase, Phase::Evaluated);
    assert_eq!(state.last_round_correct, Some(true));
    assert_eq!(state.correct_count, 1);

    // Acknowledge re-enters Presenting for round 1.
    engine.acknowledge().unwrap();
    assert_eq!(engine.state().round_index, 1);
    assert_eq!(engine.state().phase, Phase::Presenting);
    assert!(engine.state().picked_cells().is_empty());
}

#[test]
fn test_same_cells_wrong_order_is_incorrect() {
    let (mut engine, mut timers) = start_pattern(42);
    finish_reveal(&mut engine, &mut timers);

    let mut picks = target(&engine, 0);
    picks.swap(0, 1);
    for cell in picks {
        engine.submit(Input::Cell(cell)).unwrap();
    }

    let state = engine.state();
    assert_eq!(state.phase, Phase::Evaluated);
    assert_eq!(state.last_round_correct, Some(false));
    assert_eq!(state.correct_count, 0);
}

#[test]
fn test_duplicate_and_out_of_range_rejected() {
    let (mut engine, mut timers) = start_pattern(42);
    finish_reveal(&mut engine, &mut timers);

    let first = target(&engine, 0)[0];
    engine.submit(Input::Cell(first)).unwrap();
    assert_eq!(
        engine.submit(Input::Cell(first)).unwrap_err(),
        EngineError::InvalidInput(InputRejection::DuplicateCell)
    );
    assert_eq!(
        engine.submit(Input::Cell(16)).unwrap_err(),
        EngineError::InvalidInput(InputRejection::OutOfRange)
    );
    // Rejections leave the partial pick intact.
    assert_eq!(engine.state().picked_cells(), &[first]);
}

#[test]
fn test_clear_input_resets_picks() {
    let (mut engine, mut timers) = start_pattern(42);
    finish_reveal(&mut engine, &mut timers);

    let target = target(&engine, 0);
    engine.submit(Input::Cell(target[0])).unwrap();
    engine.submit(Input::Cell(target[2])).unwrap();

    engine.clear_input().unwrap();
    assert!(engine.state().picked_cells().is_empty());

    // A clean retry still scores.
    for &cell in &target {
        engine.submit(Input::Cell(cell)).unwrap();
    }
    assert_eq!(engine.state().last_round_correct, Some(true));
}

#[test]
fn test_sequence_lengths_grow_and_cap() {
    let (engine, _) = start_pattern(42);

    let expected = [4, 5, 6, 7, 8];
    for (round, &len) in expected.iter().enumerate() {
        let target = target(&engine, round);
        assert_eq!(target.len(), len);
        // Targets never repeat a cell within a round.
        let mut sorted = target.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), len);
        assert!(target.iter().all(|&c| c < 16));
    }
}

#[test]
fn test_three_of_five_rounds_passes() {
    let (mut engine, mut timers) = start_pattern(42);

    for round in 0..5 {
        finish_reveal(&mut engine, &mut timers);
        let target = target(&engine, round);
        if round < 3 {
            for &cell in &target {
                engine.submit(Input::Cell(cell)).unwrap();
            }
        } else {
            // Deliberately reversed: counts as a miss.
            for &cell in target.iter().rev() {
                engine.submit(Input::Cell(cell)).unwrap();
            }
        }
        engine.acknowledge().unwrap();
    }

    let state = engine.state();
    assert_eq!(state.phase, Phase::Finished);
    assert_eq!(state.correct_count, 3);
    assert_eq!(state.outcome, Some(Outcome::Pass));

    let report = engine.outcome_report().unwrap();
    assert_eq!(report.total_rounds, 5);
    assert_eq!(report.outcome, Outcome::Pass);
}

#[test]
fn test_clear_input_rejected_while_presenting() {
    let (mut engine, _) = start_pattern(42);
    assert!(matches!(
        engine.clear_input().unwrap_err(),
        EngineError::InvalidPhase { op: "clear_input", .. }
    ));
}
