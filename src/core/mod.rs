//! Core types: configuration, round state, errors, RNG.

pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use config::{
    ChallengeConfig, ChallengeKind, Difficulty, KindRules, MemoryRules, PatternRules, WordRules,
};
pub use error::{ConfigError, EngineError, InputRejection};
pub use rng::{ChallengeRng, ChallengeRngState};
pub use state::{Outcome, Phase, RoundState};
