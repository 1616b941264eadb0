//! # quest-engine
//!
//! A round-based challenge engine for daily-task reward games.
//!
//! Four mini-games - a multiple-choice quiz, a memory pair-match, a
//! pattern recall grid and a word unscramble - share one state machine:
//! present a round, accept a bounded sequence of inputs, score the round,
//! advance, and emit pass/fail at completion, optionally under a
//! wall-clock deadline.
//!
//! ## Design Principles
//!
//! 1. **One machine, four configurations**: kind-specific behavior
//!    (two-card turns, timed reveal sequences, hint budgets) is expressed
//!    through `ChallengeConfig`, not through four engines.
//!
//! 2. **Deterministic given a seed**: content generation runs on a seeded
//!    ChaCha8 RNG, so a seeded instance replays identically.
//!
//! 3. **No hidden clock**: the engine emits cancelable timer requests and
//!    the host drives elapsed time back in. Stale timers from a restarted
//!    instance are ignored by identity.
//!
//! 4. **Engine stays out of persistence**: pass/fail goes to the caller;
//!    the rewards ledger talks to a key-value store the engine never sees.
//!
//! ## Modules
//!
//! - `core`: configuration, round state, errors, RNG
//! - `content`: per-kind content generators and static banks
//! - `engine`: the challenge state machine and timer contract
//! - `rewards`: persistence contract, daily task pool, points ledger

pub mod content;
pub mod core;
pub mod engine;
pub mod rewards;

// Re-export commonly used types
pub use crate::core::{
    ChallengeConfig, ChallengeKind, ChallengeRng, ChallengeRngState, ConfigError, Difficulty,
    EngineError, InputRejection, KindRules, MemoryRules, Outcome, PatternRules, Phase, RoundState,
    WordRules,
};

pub use crate::content::{ChallengeContent, MemoryBoard, QuizQuestion, WordPuzzle};

pub use crate::engine::timer::{ManualTimers, TimerRequest, TimerToken};
pub use crate::engine::{ChallengeEngine, Input, OutcomeReport};

pub use crate::rewards::{
    task_for_date, task_pool, DailyTask, MemoryStore, PointsStore, RewardError, RewardLedger,
    TOKENS_PER_POINT,
};
