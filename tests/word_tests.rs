//! Word unscramble integration tests.

use quest_engine::core::{ChallengeConfig, EngineError, InputRejection, Outcome, Phase};
use quest_engine::engine::{ChallengeEngine, Input};

fn start_word(seed: u64) -> ChallengeEngine {
    ChallengeEngine::start(ChallengeConfig::word(), Some(seed)).unwrap()
}

fn answer(engine: &ChallengeEngine, round: usize) -> String {
    engine.content().puzzle(round).expect("word content").answer.clone()
}

#[test]
fn test_draw_shape() {
    let engine = start_word(42);

    for round in 0..5 {
        let puzzle = engine.content().puzzle(round).unwrap();
        // The scrambled form is a permutation of the answer.
        let mut a: Vec<char> = puzzle.answer.chars().collect();
        let mut s: Vec<char> = puzzle.scrambled.chars().collect();
        a.sort_unstable();
        s.sort_unstable();
        assert_eq!(a, s);
    }
    assert!(engine.content().puzzle(5).is_none());
    assert_eq!(engine.state().remaining_seconds, Some(90));
    assert_eq!(engine.state().hints_left(), 3);
}

#[test]
fn test_correct_answer_is_case_and_whitespace_insensitive() {
    let mut engine = start_word(42);
    let answer = answer(&engine, 0);

    let typed = format!("  {}  ", answer.to_lowercase());
    engine.submit(Input::Word(typed)).unwrap();

    let state = engine.state();
    assert_eq!(state.phase, Phase::Evaluated);
    assert_eq!(state.last_round_correct, Some(true));
    assert_eq!(state.correct_count, 1);
    assert_eq!(state.word_display(), answer);
}

#[test]
fn test_empty_answer_rejected() {
    let mut engine = start_word(42);

    assert_eq!(
        engine.submit(Input::Word("   ".into())).unwrap_err(),
        EngineError::InvalidInput(InputRejection::EmptyAnswer)
    );
    assert_eq!(engine.state().phase, Phase::AwaitingInput);
}

#[test]
fn test_reveal_fills_leftmost_letters() {
    let mut engine = start_word(42);
    let answer = answer(&engine, 0);

    engine.reveal_letter().unwrap();
    engine.reveal_letter().unwrap();
    engine.reveal_letter().unwrap();

    let display = engine.state().word_display();
    assert_eq!(&display[..3], &answer[..3]);
    assert!(display[3..].chars().all(|c| c == '_'));
    assert_eq!(engine.state().hints_left(), 0);

    assert_eq!(
        engine.reveal_letter().unwrap_err(),
        EngineError::InvalidInput(InputRejection::HintBudgetExhausted)
    );
}

#[test]
fn test_hint_budget_shared_across_rounds() {
    let mut engine = start_word(42);

    engine.reveal_letter().unwrap();
    engine.reveal_letter().unwrap();
    assert_eq!(engine.state().hints_left(), 1);

    let first = answer(&engine, 0);
    engine.submit(Input::Word(first)).unwrap();
    engine.acknowledge().unwrap();

    // The budget carries over, not resets.
    assert_eq!(engine.state().round_index, 1);
    assert_eq!(engine.state().hints_left(), 1);

    engine.reveal_letter().unwrap();
    assert_eq!(
        engine.reveal_letter().unwrap_err(),
        EngineError::InvalidInput(InputRejection::HintBudgetExhausted)
    );
}

#[test]
fn test_revealed_letters_count_toward_submission() {
    let mut engine = start_word(42);
    let answer = answer(&engine, 0);

    engine.reveal_letter().unwrap();
    // Typing the full answer over the revealed prefix still scores.
    engine.submit(Input::Word(answer)).unwrap();
    assert_eq!(engine.state().last_round_correct, Some(true));
}

#[test]
fn test_three_of_five_passes() {
    let mut engine = start_word(42);

    for round in 0..5 {
        let guess = if round < 3 {
            answer(&engine, round)
        } else {
            "WRONG".to_string()
        };
        engine.submit(Input::Word(guess)).unwrap();
        engine.acknowledge().unwrap();
    }

    let state = engine.state();
    assert_eq!(state.phase, Phase::Finished);
    assert_eq!(state.correct_count, 3);
    assert_eq!(state.outcome, Some(Outcome::Pass));
}

#[test]
fn test_timeout_fails_below_threshold() {
    let mut engine = start_word(42);
    engine.submit(Input::Word(answer(&engine, 0))).unwrap();
    engine.acknowledge().unwrap();

    for _ in 0..90 {
        engine.tick();
    }

    let state = engine.state();
    assert_eq!(state.phase, Phase::Finished);
    assert_eq!(state.remaining_seconds, Some(0));
    assert_eq!(state.correct_count, 1);
    assert_eq!(state.outcome, Some(Outcome::Fail));
}

#[test]
fn test_reveal_rejected_for_other_kinds() {
    let mut engine =
        ChallengeEngine::start(ChallengeConfig::quiz(quest_engine::Difficulty::Easy), Some(42))
            .unwrap();
    assert_eq!(
        engine.reveal_letter().unwrap_err(),
        EngineError::InvalidInput(InputRejection::KindMismatch)
    );
}
