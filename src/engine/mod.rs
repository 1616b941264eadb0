//! The challenge engine: a parametrized round-based state machine.
//!
//! One engine instance runs one challenge: it presents round content,
//! accepts a bounded sequence of inputs, scores each round, and emits
//! pass/fail at completion, optionally under a wall-clock deadline.
//!
//! ## Event model
//!
//! All transitions are synchronous and atomic: external events (input,
//! deadline tick, timer fire, restart) serialize through `&mut self`, so
//! exactly one round is ever active. The engine is side-effect-free except
//! for timer scheduling, which happens indirectly through emitted
//! [`TimerRequest`]s (see [`timer`]).
//!
//! ## Collaborators
//!
//! The engine never touches persistence. It reports a terminal
//! [`OutcomeReport`] to its caller, who credits points through
//! [`crate::rewards`].

pub mod timer;

use serde::{Deserialize, Serialize};

use crate::content::ChallengeContent;
use crate::core::state::InputBuffer;
use crate::core::{
    ChallengeConfig, ChallengeKind, ChallengeRng, ConfigError, EngineError, InputRejection,
    Outcome, Phase, RoundState,
};

use timer::{TimerAction, TimerRequest, TimerToken};

/// One user input event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input {
    /// Quiz: option index.
    Answer(usize),
    /// Memory and pattern: cell index.
    Cell(usize),
    /// Word: the typed answer (case-insensitive).
    Word(String),
}

/// Terminal report for the pass/fail sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeReport {
    pub outcome: Outcome,
    /// Correct units accumulated (pairs, for memory).
    pub correct_count: usize,
    /// Total units in the challenge.
    pub total_rounds: usize,
}

/// A running challenge instance.
///
/// ```
/// use quest_engine::core::{ChallengeConfig, Difficulty, Phase};
/// use quest_engine::engine::{ChallengeEngine, Input};
///
/// let mut engine = ChallengeEngine::start(
///     ChallengeConfig::quiz(Difficulty::Easy),
///     Some(42),
/// ).unwrap();
///
/// assert_eq!(engine.state().phase, Phase::AwaitingInput);
///
/// let correct = engine.content().question(0).unwrap().correct;
/// engine.submit(Input::Answer(correct)).unwrap();
/// assert_eq!(engine.state().phase, Phase::Evaluated);
/// assert_eq!(engine.state().correct_count, 1);
/// ```
#[derive(Debug)]
pub struct ChallengeEngine {
    config: ChallengeConfig,
    content: ChallengeContent,
    state: RoundState,
    rng: ChallengeRng,
    /// Instance generation; bumped on restart so outstanding timers go stale.
    instance: u32,
    next_timer_seq: u32,
    /// Timers scheduled and not yet fired or invalidated.
    live_timers: Vec<(u32, TimerAction)>,
    /// Requests emitted but not yet drained by the host.
    outbox: Vec<TimerRequest>,
}

impl ChallengeEngine {
    /// Validate the config, generate content and enter round 0.
    ///
    /// `seed` makes the content deterministic; `None` draws OS entropy.
    /// The deadline clock, when configured, runs from this call.
    pub fn start(config: ChallengeConfig, seed: Option<u64>) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = match seed {
            Some(seed) => ChallengeRng::new(seed),
            None => ChallengeRng::from_entropy(),
        };
        let content = ChallengeContent::generate(&config, &mut rng);
        let state = RoundState::new(InputBuffer::quiz(), config.time_limit_seconds);

        let mut engine = Self {
            config,
            content,
            state,
            rng,
            instance: 0,
            next_timer_seq: 0,
            live_timers: Vec::new(),
            outbox: Vec::new(),
        };
        engine.enter_round(0);
        Ok(engine)
    }

    /// Discard the running instance and reissue a fresh `RoundState` from
    /// the same config.
    ///
    /// Outstanding timer tokens go stale: the instance generation is
    /// bumped, so a callback scheduled before the restart can never mutate
    /// the new state.
    pub fn restart(&mut self, seed: Option<u64>) -> &RoundState {
        self.instance += 1;
        self.next_timer_seq = 0;
        self.live_timers.clear();
        self.outbox.clear();

        self.rng = match seed {
            Some(seed) => ChallengeRng::new(seed),
            None => ChallengeRng::from_entropy(),
        };
        self.content = ChallengeContent::generate(&self.config, &mut self.rng);
        self.state = RoundState::new(InputBuffer::quiz(), self.config.time_limit_seconds);
        self.enter_round(0);
        &self.state
    }

    // === Read surface ===

    /// Current round state.
    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// The config this instance runs.
    #[must_use]
    pub fn config(&self) -> &ChallengeConfig {
        &self.config
    }

    /// Round payloads for presentation.
    #[must_use]
    pub fn content(&self) -> &ChallengeContent {
        &self.content
    }

    /// Terminal report, once finished.
    #[must_use]
    pub fn outcome_report(&self) -> Option<OutcomeReport> {
        self.state.outcome.map(|outcome| OutcomeReport {
            outcome,
            correct_count: self.state.correct_count,
            total_rounds: self.config.total_rounds,
        })
    }

    // === Timers ===

    /// Take the timer requests emitted since the last drain.
    ///
    /// The host schedules each request and calls [`timer_fired`] with its
    /// token when the delay elapses.
    ///
    /// [`timer_fired`]: ChallengeEngine::timer_fired
    pub fn drain_timer_requests(&mut self) -> Vec<TimerRequest> {
        std::mem::take(&mut self.outbox)
    }

    /// Deliver an elapsed timer. Stale tokens (from before a restart or an
    /// already-finished challenge) are ignored.
    pub fn timer_fired(&mut self, token: TimerToken) -> &RoundState {
        if token.instance != self.instance {
            return &self.state;
        }
        let Some(pos) = self.live_timers.iter().position(|(seq, _)| *seq == token.seq) else {
            return &self.state;
        };
        let (_, action) = self.live_timers.remove(pos);

        match action {
            TimerAction::RevealAdvance => self.advance_reveal(),
            TimerAction::HideMismatch => self.hide_mismatch(),
        }
        &self.state
    }

    fn schedule(&mut self, action: TimerAction, delay_ms: u64) {
        let seq = self.next_timer_seq;
        self.next_timer_seq += 1;
        self.live_timers.push((seq, action));
        self.outbox.push(TimerRequest {
            token: TimerToken { instance: self.instance, seq },
            delay_ms,
        });
    }

    // === Operations ===

    /// Submit user input for the active round.
    ///
    /// Single-shot kinds (quiz, word) evaluate immediately. Multi-unit
    /// kinds buffer partial input and stay in `AwaitingInput` until the
    /// buffer is full (pattern) or two cells are face up (memory).
    pub fn submit(&mut self, input: Input) -> Result<&RoundState, EngineError> {
        if self.state.phase != Phase::AwaitingInput {
            return Err(EngineError::invalid_phase("submit", self.state.phase));
        }

        match (self.config.kind, input) {
            (ChallengeKind::Quiz, Input::Answer(option)) => self.submit_quiz(option)?,
            (ChallengeKind::Memory, Input::Cell(cell)) => self.submit_memory(cell)?,
            (ChallengeKind::Pattern, Input::Cell(cell)) => self.submit_pattern(cell)?,
            (ChallengeKind::Word, Input::Word(answer)) => self.submit_word(&answer)?,
            _ => return Err(InputRejection::KindMismatch.into()),
        }
        Ok(&self.state)
    }

    /// Dismiss the correctness feedback and advance.
    ///
    /// Valid only in `Evaluated`. Advances to the next round, or computes
    /// the final outcome when the last round was just scored. Memory
    /// challenges never use acknowledge: matched pairs advance inline and
    /// mismatches return via the re-hide timer.
    pub fn acknowledge(&mut self) -> Result<&RoundState, EngineError> {
        if self.state.phase != Phase::Evaluated || self.config.kind == ChallengeKind::Memory {
            return Err(EngineError::invalid_phase("acknowledge", self.state.phase));
        }

        let next = self.state.round_index + 1;
        if next < self.config.total_rounds {
            self.enter_round(next);
        } else {
            self.finish();
        }
        Ok(&self.state)
    }

    /// Advance the deadline clock by one second.
    ///
    /// No-op when the challenge is untimed or already finished. Reaching
    /// zero forces `Finished` with the outcome computed from the count
    /// accumulated strictly before the timeout - a round in progress is
    /// not retroactively credited.
    pub fn tick(&mut self) -> &RoundState {
        if self.state.is_finished() {
            return &self.state;
        }
        let Some(remaining) = self.state.remaining_seconds else {
            return &self.state;
        };

        let remaining = remaining.saturating_sub(1);
        self.state.remaining_seconds = Some(remaining);
        if remaining == 0 {
            self.finish();
        }
        &self.state
    }

    /// Reveal the leftmost not-yet-correct letter of the current word
    /// puzzle.
    ///
    /// Bounded by the shared hint budget; revealed letters still count
    /// toward the eventual submission and carry no scoring penalty.
    pub fn reveal_letter(&mut self) -> Result<&RoundState, EngineError> {
        if self.config.kind != ChallengeKind::Word {
            return Err(InputRejection::KindMismatch.into());
        }
        if self.state.phase != Phase::AwaitingInput {
            return Err(EngineError::invalid_phase("reveal_letter", self.state.phase));
        }

        let answer: Vec<char> = self
            .content
            .puzzle(self.state.round_index)
            .map(|p| p.answer.chars().collect())
            .unwrap_or_default();

        if let InputBuffer::Word { letters, hints_left } = &mut self.state.buffer {
            if *hints_left == 0 {
                return Err(InputRejection::HintBudgetExhausted.into());
            }
            // Leftmost slot that does not already hold the right letter.
            for (slot, &wanted) in letters.iter_mut().zip(answer.iter()) {
                if *slot != Some(wanted) {
                    *slot = Some(wanted);
                    *hints_left -= 1;
                    break;
                }
            }
        }
        Ok(&self.state)
    }

    /// Clear the picked cells of the current pattern round.
    pub fn clear_input(&mut self) -> Result<&RoundState, EngineError> {
        if self.config.kind != ChallengeKind::Pattern {
            return Err(InputRejection::KindMismatch.into());
        }
        if self.state.phase != Phase::AwaitingInput {
            return Err(EngineError::invalid_phase("clear_input", self.state.phase));
        }

        if let InputBuffer::Pattern { picks, .. } = &mut self.state.buffer {
            picks.clear();
        }
        Ok(&self.state)
    }

    // === Kind-specific submission ===

    fn submit_quiz(&mut self, option: usize) -> Result<(), EngineError> {
        let question = self.content.question(self.state.round_index);
        let (option_count, correct_option) = match question {
            Some(q) => (q.options.len(), q.correct),
            None => (0, 0),
        };
        if option >= option_count {
            return Err(InputRejection::OutOfRange.into());
        }

        if let InputBuffer::Quiz { selected } = &mut self.state.buffer {
            *selected = Some(option);
        }
        self.evaluate_round(option == correct_option);
        Ok(())
    }

    fn submit_word(&mut self, answer: &str) -> Result<(), EngineError> {
        if answer.trim().is_empty() {
            return Err(InputRejection::EmptyAnswer.into());
        }
        let wanted: Vec<char> = self
            .content
            .puzzle(self.state.round_index)
            .map(|p| p.answer.chars().collect())
            .unwrap_or_default();

        let typed: Vec<char> = answer.trim().to_uppercase().chars().collect();
        if let InputBuffer::Word { letters, .. } = &mut self.state.buffer {
            for (i, slot) in letters.iter_mut().enumerate() {
                *slot = typed.get(i).copied();
            }
        }
        self.evaluate_round(typed == wanted);
        Ok(())
    }

    fn submit_pattern(&mut self, cell: usize) -> Result<(), EngineError> {
        let cell_count = self
            .config
            .pattern_rules()
            .map_or(0, |rules| rules.cell_count());
        if cell >= cell_count {
            return Err(InputRejection::OutOfRange.into());
        }

        let target: Vec<usize> = self
            .content
            .target(self.state.round_index)
            .map(<[usize]>::to_vec)
            .unwrap_or_default();

        let full = if let InputBuffer::Pattern { picks, .. } = &mut self.state.buffer {
            if picks.contains(&cell) {
                return Err(InputRejection::DuplicateCell.into());
            }
            picks.push(cell);
            picks.len() == target.len()
        } else {
            false
        };

        if full {
            // Positional exact match: same set, different order is wrong.
            let correct = matches!(
                &self.state.buffer,
                InputBuffer::Pattern { picks, .. } if picks.as_slice() == target.as_slice()
            );
            self.evaluate_round(correct);
        }
        Ok(())
    }

    fn submit_memory(&mut self, cell: usize) -> Result<(), EngineError> {
        let board = match self.content.board() {
            Some(board) => board,
            None => return Err(InputRejection::OutOfRange.into()),
        };
        if cell >= board.cell_count() {
            return Err(InputRejection::OutOfRange.into());
        }
        let symbol = board.symbol_at(cell);

        let mut turn_result = None;
        if let InputBuffer::Memory { matched, face_up, pending_hide, moves } =
            &mut self.state.buffer
        {
            if matched[cell] {
                return Err(InputRejection::CellAlreadyMatched.into());
            }
            if face_up.contains(&cell) {
                return Err(InputRejection::CellFaceUp.into());
            }

            face_up.push(cell);
            if face_up.len() == 2 {
                *moves += 1;
                let first = face_up[0];
                let second = face_up[1];
                if self.content.board().and_then(|b| b.symbol_at(first)) == symbol {
                    matched[first] = true;
                    matched[second] = true;
                    face_up.clear();
                    turn_result = Some(true);
                } else {
                    *pending_hide = Some([first, second]);
                    turn_result = Some(false);
                }
            }
        }

        match turn_result {
            Some(true) => {
                self.state.correct_count += 1;
                self.state.last_round_correct = Some(true);
                // All pairs matched ends the challenge immediately, without
                // waiting out the time budget.
                if self.state.correct_count == self.config.total_rounds {
                    self.finish();
                }
            }
            Some(false) => {
                self.state.last_round_correct = Some(false);
                self.state.phase = Phase::Evaluated;
                let hide_ms = self
                    .config
                    .memory_rules()
                    .map_or(1000, |rules| rules.mismatch_hide_ms);
                self.schedule(TimerAction::HideMismatch, hide_ms);
            }
            None => {}
        }
        Ok(())
    }

    // === Transitions ===

    fn evaluate_round(&mut self, correct: bool) {
        self.state.last_round_correct = Some(correct);
        if correct {
            self.state.correct_count += 1;
        }
        self.state.phase = Phase::Evaluated;
    }

    fn finish(&mut self) {
        let outcome = if self.state.correct_count >= self.config.pass_threshold {
            Outcome::Pass
        } else {
            Outcome::Fail
        };
        self.state.outcome = Some(outcome);
        self.state.phase = Phase::Finished;
        // Terminal: no timer may fire into a finished instance.
        self.live_timers.clear();
        self.outbox.clear();
    }

    fn enter_round(&mut self, round: usize) {
        self.state.round_index = round;
        self.state.last_round_correct = None;

        match self.config.kind {
            ChallengeKind::Quiz => {
                self.state.buffer = InputBuffer::quiz();
                self.state.phase = Phase::AwaitingInput;
            }
            ChallengeKind::Memory => {
                let cells = self.content.board().map_or(0, |b| b.cell_count());
                self.state.buffer = InputBuffer::memory(cells);
                self.state.phase = Phase::AwaitingInput;
            }
            ChallengeKind::Word => {
                // The hint budget is shared across puzzles.
                let hints_left = if round == 0 {
                    self.config.word_rules().map_or(0, |rules| rules.hint_budget)
                } else {
                    self.state.hints_left()
                };
                let answer_len = self
                    .content
                    .puzzle(round)
                    .map_or(0, |p| p.answer.chars().count());
                self.state.buffer = InputBuffer::word(answer_len, hints_left);
                self.state.phase = Phase::AwaitingInput;
            }
            ChallengeKind::Pattern => {
                self.state.buffer = InputBuffer::pattern();
                self.state.phase = Phase::Presenting;
                self.begin_reveal(round);
            }
        }
    }

    /// Light the first target cell and schedule the reveal sequence.
    fn begin_reveal(&mut self, round: usize) {
        let first = self.content.target(round).and_then(|t| t.first().copied());
        let show_ms = self.config.pattern_rules().map_or(600, |rules| rules.show_ms);

        match first {
            Some(cell) => {
                if let InputBuffer::Pattern { reveal_pos, highlighted, .. } =
                    &mut self.state.buffer
                {
                    *reveal_pos = 0;
                    *highlighted = Some(cell);
                }
                self.schedule(TimerAction::RevealAdvance, show_ms);
            }
            None => {
                self.state.phase = Phase::AwaitingInput;
            }
        }
    }

    /// One reveal sub-step: clear the lit cell and pause, or light the
    /// next cell, or open the round for input after the final gap.
    fn advance_reveal(&mut self) {
        if self.state.phase != Phase::Presenting {
            return;
        }
        let target: Vec<usize> = self
            .content
            .target(self.state.round_index)
            .map(<[usize]>::to_vec)
            .unwrap_or_default();
        let (show_ms, gap_ms) = self
            .config
            .pattern_rules()
            .map_or((600, 200), |rules| (rules.show_ms, rules.gap_ms));

        let mut next_delay = None;
        let mut reveal_done = false;

        if let InputBuffer::Pattern { reveal_pos, highlighted, .. } = &mut self.state.buffer {
            if highlighted.is_some() {
                *highlighted = None;
                next_delay = Some(gap_ms);
            } else if *reveal_pos + 1 < target.len() {
                *reveal_pos += 1;
                *highlighted = Some(target[*reveal_pos]);
                next_delay = Some(show_ms);
            } else {
                reveal_done = true;
            }
        }

        if let Some(delay) = next_delay {
            self.schedule(TimerAction::RevealAdvance, delay);
        }
        if reveal_done {
            self.state.phase = Phase::AwaitingInput;
        }
    }

    /// Re-hide a mismatched memory pair and reopen input.
    fn hide_mismatch(&mut self) {
        if let InputBuffer::Memory { face_up, pending_hide, .. } = &mut self.state.buffer {
            face_up.clear();
            *pending_hide = None;
        }
        if self.state.phase == Phase::Evaluated {
            self.state.phase = Phase::AwaitingInput;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;

    #[test]
    fn test_start_rejects_bad_config() {
        let config = ChallengeConfig::pattern().with_threshold(99);
        assert!(matches!(
            ChallengeEngine::start(config, Some(1)),
            Err(ConfigError::ThresholdExceedsRounds { .. })
        ));
    }

    #[test]
    fn test_seeded_start_is_deterministic() {
        let a = ChallengeEngine::start(ChallengeConfig::word(), Some(42)).unwrap();
        let b = ChallengeEngine::start(ChallengeConfig::word(), Some(42)).unwrap();
        assert_eq!(a.content(), b.content());
    }

    #[test]
    fn test_submit_kind_mismatch() {
        let mut engine =
            ChallengeEngine::start(ChallengeConfig::quiz(Difficulty::Easy), Some(1)).unwrap();
        let err = engine.submit(Input::Cell(0)).unwrap_err();
        assert_eq!(err, EngineError::InvalidInput(InputRejection::KindMismatch));
        // Rejection leaves the state unchanged.
        assert_eq!(engine.state().phase, Phase::AwaitingInput);
        assert_eq!(engine.state().correct_count, 0);
    }

    #[test]
    fn test_outcome_report_only_when_finished() {
        let engine =
            ChallengeEngine::start(ChallengeConfig::quiz(Difficulty::Easy), Some(1)).unwrap();
        assert!(engine.outcome_report().is_none());
    }
}
