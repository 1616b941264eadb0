//! Round state: everything a presentation layer needs to render a
//! running challenge.
//!
//! ## RoundState
//!
//! Mutable state owned by exactly one `ChallengeEngine` instance:
//! - Round cursor, phase, score, deadline countdown
//! - The kind-specific answer buffer for the active round
//!
//! The state is only ever mutated by the engine's transition functions.
//! Once `phase == Finished` the instance is terminal: no further input is
//! accepted and `restart` reissues a fresh `RoundState` from the same
//! config.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Engine phase for the active round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Content is being shown; no input accepted (pattern reveal).
    Presenting,
    /// Input accepted.
    #[default]
    AwaitingInput,
    /// Round scored; correctness feedback visible, awaiting acknowledge
    /// (or, for memory mismatches, the re-hide timer).
    Evaluated,
    /// Terminal. Carries `Pass` or `Fail` in `RoundState::outcome`.
    Finished,
}

/// Terminal result of a challenge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Pass,
    Fail,
}

/// Kind-specific answer buffer, cleared at each round boundary.
///
/// The word hint budget is the one exception: it is shared across the
/// whole challenge and survives round advancement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum InputBuffer {
    Quiz {
        /// Option submitted this round, for feedback display.
        selected: Option<usize>,
    },
    Memory {
        /// Per-cell permanently-matched flags.
        matched: Vec<bool>,
        /// Cells face up in the current turn (at most two).
        face_up: SmallVec<[usize; 2]>,
        /// Mismatched pair waiting for the re-hide timer.
        pending_hide: Option<[usize; 2]>,
        /// Completed two-card turns.
        moves: u32,
    },
    Pattern {
        /// Cells picked this round, in click order.
        picks: SmallVec<[usize; 8]>,
        /// Position in the reveal sequence during `Presenting`.
        reveal_pos: usize,
        /// Cell currently lit, if any.
        highlighted: Option<usize>,
    },
    Word {
        /// Letter buffer, one slot per answer letter.
        letters: Vec<Option<char>>,
        /// Letter reveals remaining (shared across puzzles).
        hints_left: usize,
    },
}

impl InputBuffer {
    pub(crate) fn quiz() -> Self {
        InputBuffer::Quiz { selected: None }
    }

    pub(crate) fn memory(cell_count: usize) -> Self {
        InputBuffer::Memory {
            matched: vec![false; cell_count],
            face_up: SmallVec::new(),
            pending_hide: None,
            moves: 0,
        }
    }

    pub(crate) fn pattern() -> Self {
        InputBuffer::Pattern {
            picks: SmallVec::new(),
            reveal_pos: 0,
            highlighted: None,
        }
    }

    pub(crate) fn word(answer_len: usize, hints_left: usize) -> Self {
        InputBuffer::Word {
            letters: vec![None; answer_len],
            hints_left,
        }
    }
}

/// Mutable state of one running challenge instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    /// 0-based round cursor, `0 <= round_index <= total_rounds`.
    pub round_index: usize,

    /// Current phase.
    pub phase: Phase,

    /// Correct units so far. Monotonically non-decreasing; +1 per round
    /// for quiz/pattern/word, +1 per matched pair for memory.
    pub correct_count: usize,

    /// Countdown, present only for timed challenges. Strictly decreasing
    /// while the challenge runs; reaching 0 forces early termination.
    pub remaining_seconds: Option<u32>,

    /// Unset until `Finished`.
    pub outcome: Option<Outcome>,

    /// Whether the last evaluated round was correct (feedback during
    /// `Evaluated`).
    pub last_round_correct: Option<bool>,

    /// Kind-specific answer buffer.
    pub(crate) buffer: InputBuffer,
}

impl RoundState {
    pub(crate) fn new(buffer: InputBuffer, time_limit_seconds: Option<u32>) -> Self {
        Self {
            round_index: 0,
            phase: Phase::AwaitingInput,
            correct_count: 0,
            remaining_seconds: time_limit_seconds,
            outcome: None,
            last_round_correct: None,
            buffer,
        }
    }

    /// True once the challenge is terminal.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    // === Quiz ===

    /// Option submitted this quiz round, if any.
    #[must_use]
    pub fn selected_option(&self) -> Option<usize> {
        match &self.buffer {
            InputBuffer::Quiz { selected } => *selected,
            _ => None,
        }
    }

    // === Memory ===

    /// Matched pairs so far (memory challenges).
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        match &self.buffer {
            InputBuffer::Memory { .. } => self.correct_count,
            _ => 0,
        }
    }

    /// Completed two-card turns (memory challenges).
    #[must_use]
    pub fn moves(&self) -> u32 {
        match &self.buffer {
            InputBuffer::Memory { moves, .. } => *moves,
            _ => 0,
        }
    }

    /// Whether a memory cell is permanently matched.
    #[must_use]
    pub fn cell_matched(&self, cell: usize) -> bool {
        match &self.buffer {
            InputBuffer::Memory { matched, .. } => matched.get(cell).copied().unwrap_or(false),
            _ => false,
        }
    }

    /// Cells face up in the current memory turn, including a mismatched
    /// pair waiting to be re-hidden.
    #[must_use]
    pub fn face_up_cells(&self) -> &[usize] {
        match &self.buffer {
            InputBuffer::Memory { face_up, .. } => face_up,
            _ => &[],
        }
    }

    // === Pattern ===

    /// Cells picked so far this pattern round, in click order.
    #[must_use]
    pub fn picked_cells(&self) -> &[usize] {
        match &self.buffer {
            InputBuffer::Pattern { picks, .. } => picks,
            _ => &[],
        }
    }

    /// Cell currently lit during the reveal sequence.
    #[must_use]
    pub fn highlighted_cell(&self) -> Option<usize> {
        match &self.buffer {
            InputBuffer::Pattern { highlighted, .. } => *highlighted,
            _ => None,
        }
    }

    // === Word ===

    /// Current letter buffer rendered with `_` placeholders.
    #[must_use]
    pub fn word_display(&self) -> String {
        match &self.buffer {
            InputBuffer::Word { letters, .. } => {
                letters.iter().map(|slot| slot.unwrap_or('_')).collect()
            }
            _ => String::new(),
        }
    }

    /// Letter reveals remaining (word challenges).
    #[must_use]
    pub fn hints_left(&self) -> usize {
        match &self.buffer {
            InputBuffer::Word { hints_left, .. } => *hints_left,
            _ => 0,
        }
    }
}
