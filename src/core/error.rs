//! Engine error types.
//!
//! Every error is local and recoverable: a rejected event leaves the
//! `RoundState` untouched and the caller may simply try again. Deadline
//! expiry is not an error - it is a normal terminal transition.

use thiserror::Error;

use super::state::Phase;

/// Malformed `ChallengeConfig`, detected when a challenge starts.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A challenge must contain at least one round.
    #[error("challenge has no rounds")]
    NoRounds,

    /// The pass threshold can never be reached.
    #[error("pass threshold {threshold} exceeds total rounds {rounds}")]
    ThresholdExceedsRounds { threshold: usize, rounds: usize },

    /// A time limit, when present, must be positive.
    #[error("time limit must be positive")]
    ZeroTimeLimit,

    /// Pattern sequences are sets of unique cells, so they cannot be
    /// longer than the grid.
    #[error("pattern length {length} exceeds grid capacity {cells}")]
    PatternExceedsGrid { length: usize, cells: usize },

    /// Memory boards need a distinct symbol per pair.
    #[error("requested {pairs} pairs but only {symbols} symbols exist")]
    NotEnoughSymbols { pairs: usize, symbols: usize },

    /// Quiz and word rounds draw from fixed banks without repeats.
    #[error("requested {rounds} rounds but the bank holds {bank}")]
    NotEnoughWords { rounds: usize, bank: usize },

    /// The kind-specific rules block does not match the challenge kind.
    #[error("rules block does not match challenge kind")]
    RulesMismatch,
}

/// Why a well-formed input event was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InputRejection {
    /// Cell or option index outside the board / option list.
    #[error("index out of range")]
    OutOfRange,

    /// The same pattern cell cannot be picked twice in one round.
    #[error("cell already picked this round")]
    DuplicateCell,

    /// Matched memory cells are permanently revealed and excluded.
    #[error("cell already matched")]
    CellAlreadyMatched,

    /// A face-up memory cell cannot be selected again this turn.
    #[error("cell already face up")]
    CellFaceUp,

    /// Empty or whitespace-only word answers are not evaluated.
    #[error("empty answer")]
    EmptyAnswer,

    /// The input variant does not belong to this challenge kind.
    #[error("input does not match challenge kind")]
    KindMismatch,

    /// The shared letter-reveal budget is spent.
    #[error("hint budget exhausted")]
    HintBudgetExhausted,
}

/// Errors reported by the challenge engine operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The event is not permitted in the current phase
    /// (e.g. `submit` while the pattern is still being revealed).
    #[error("{op} is not valid in the {phase:?} phase")]
    InvalidPhase { op: &'static str, phase: Phase },

    /// The event was well-formed but semantically rejected.
    #[error("input rejected: {0}")]
    InvalidInput(#[from] InputRejection),

    /// The configuration failed validation at `start`.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl EngineError {
    /// Shorthand for phase violations.
    #[must_use]
    pub(crate) fn invalid_phase(op: &'static str, phase: Phase) -> Self {
        Self::InvalidPhase { op, phase }
    }
}
