//! Challenge configuration types.
//!
//! A `ChallengeConfig` is the immutable description of one challenge type:
//! how many rounds it has, how many correct units pass it, whether it runs
//! against a wall-clock deadline, and the kind-specific timing constants.
//!
//! The engine never hardcodes a game - the four canonical constructors
//! (`quiz`, `memory`, `pattern`, `word`) reproduce the daily-task games,
//! and every knob can be overridden before `start`.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::content;

/// The four challenge kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChallengeKind {
    /// Multiple-choice questions, one answer per round.
    Quiz,
    /// Pair-matching on a face-down board, under a deadline.
    Memory,
    /// Timed reveal of a cell sequence, recalled positionally.
    Pattern,
    /// Unscramble a word, with a shared letter-reveal budget.
    Word,
}

impl std::fmt::Display for ChallengeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ChallengeKind::Quiz => "quiz",
            ChallengeKind::Memory => "memory",
            ChallengeKind::Pattern => "pattern",
            ChallengeKind::Word => "word",
        };
        f.write_str(label)
    }
}

/// Difficulty tier, which drives the point reward and the quiz bank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Points credited for passing a challenge of this tier.
    #[must_use]
    pub const fn points_reward(self) -> u64 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 25,
            Difficulty::Hard => 50,
        }
    }
}

/// Timing constants for the pattern reveal sequence.
///
/// Each target cell is highlighted for `show_ms`, then the board goes dark
/// for `gap_ms` before the next cell lights up. Both are configuration
/// constants, not per-round randomness.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRules {
    /// Board is `grid_size x grid_size`.
    pub grid_size: usize,
    /// Sequence length in round 0.
    pub base_length: usize,
    /// Sequence length cap for later rounds.
    pub max_length: usize,
    /// Highlight duration per cell, in milliseconds.
    pub show_ms: u64,
    /// Dark gap between cells, in milliseconds.
    pub gap_ms: u64,
}

impl Default for PatternRules {
    fn default() -> Self {
        Self {
            grid_size: 4,
            base_length: 4,
            max_length: 8,
            show_ms: 600,
            gap_ms: 200,
        }
    }
}

impl PatternRules {
    /// Total cells on the board.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.grid_size * self.grid_size
    }

    /// Target sequence length for a 0-based round index.
    #[must_use]
    pub fn sequence_length(&self, round_index: usize) -> usize {
        (self.base_length + round_index).min(self.max_length)
    }
}

/// Timing constants for the memory board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryRules {
    /// How long a mismatched pair stays face up before re-hiding,
    /// in milliseconds.
    pub mismatch_hide_ms: u64,
}

impl Default for MemoryRules {
    fn default() -> Self {
        Self { mismatch_hide_ms: 1000 }
    }
}

/// Hint policy for the word puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRules {
    /// Letter reveals available across the whole challenge, not per puzzle.
    pub hint_budget: usize,
}

impl Default for WordRules {
    fn default() -> Self {
        Self { hint_budget: 3 }
    }
}

/// Kind-specific rules block. Must match the challenge kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KindRules {
    Quiz,
    Memory(MemoryRules),
    Pattern(PatternRules),
    Word(WordRules),
}

/// Immutable description of a challenge type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChallengeConfig {
    /// Which game this is.
    pub kind: ChallengeKind,

    /// Difficulty tier (drives the reward, and the quiz bank).
    pub difficulty: Difficulty,

    /// Kind-dependent unit count: quiz questions, memory pairs,
    /// pattern rounds, word puzzles.
    pub total_rounds: usize,

    /// Minimum correct units for an overall `Pass`.
    pub pass_threshold: usize,

    /// Wall-clock budget for the whole challenge. `None` means untimed.
    pub time_limit_seconds: Option<u32>,

    /// Kind-specific constants.
    pub rules: KindRules,
}

impl ChallengeConfig {
    /// Quiz challenge for a difficulty tier: 3/4/5 questions with pass
    /// thresholds 2/3/4, untimed.
    #[must_use]
    pub fn quiz(difficulty: Difficulty) -> Self {
        let total_rounds = content::quiz::bank(difficulty).len();
        let pass_threshold = match difficulty {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        };
        Self {
            kind: ChallengeKind::Quiz,
            difficulty,
            total_rounds,
            pass_threshold,
            time_limit_seconds: None,
            rules: KindRules::Quiz,
        }
    }

    /// Memory match: 8 pairs, all pairs required, 60 second deadline.
    #[must_use]
    pub fn memory() -> Self {
        let pairs = content::memory::SYMBOLS.len();
        Self {
            kind: ChallengeKind::Memory,
            difficulty: Difficulty::Medium,
            total_rounds: pairs,
            pass_threshold: pairs,
            time_limit_seconds: Some(60),
            rules: KindRules::Memory(MemoryRules::default()),
        }
    }

    /// Pattern recall: 5 rounds, 3 to pass, untimed.
    #[must_use]
    pub fn pattern() -> Self {
        Self {
            kind: ChallengeKind::Pattern,
            difficulty: Difficulty::Hard,
            total_rounds: 5,
            pass_threshold: 3,
            time_limit_seconds: None,
            rules: KindRules::Pattern(PatternRules::default()),
        }
    }

    /// Word unscramble: 5 puzzles, 3 to pass, 90 second deadline.
    #[must_use]
    pub fn word() -> Self {
        Self {
            kind: ChallengeKind::Word,
            difficulty: Difficulty::Medium,
            total_rounds: 5,
            pass_threshold: 3,
            time_limit_seconds: Some(90),
            rules: KindRules::Word(WordRules::default()),
        }
    }

    /// Override the unit count.
    #[must_use]
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.total_rounds = rounds;
        self
    }

    /// Override the pass threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.pass_threshold = threshold;
        self
    }

    /// Override or remove the deadline.
    #[must_use]
    pub fn with_time_limit(mut self, seconds: Option<u32>) -> Self {
        self.time_limit_seconds = seconds;
        self
    }

    /// Pattern rules for this config, if it is a pattern challenge.
    #[must_use]
    pub fn pattern_rules(&self) -> Option<&PatternRules> {
        match &self.rules {
            KindRules::Pattern(rules) => Some(rules),
            _ => None,
        }
    }

    /// Memory rules for this config, if it is a memory challenge.
    #[must_use]
    pub fn memory_rules(&self) -> Option<&MemoryRules> {
        match &self.rules {
            KindRules::Memory(rules) => Some(rules),
            _ => None,
        }
    }

    /// Word rules for this config, if it is a word challenge.
    #[must_use]
    pub fn word_rules(&self) -> Option<&WordRules> {
        match &self.rules {
            KindRules::Word(rules) => Some(rules),
            _ => None,
        }
    }

    /// Check the config for contradictions.
    ///
    /// Called by `ChallengeEngine::start`; content generation is infallible
    /// once this passes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        if self.pass_threshold > self.total_rounds {
            return Err(ConfigError::ThresholdExceedsRounds {
                threshold: self.pass_threshold,
                rounds: self.total_rounds,
            });
        }
        if self.time_limit_seconds == Some(0) {
            return Err(ConfigError::ZeroTimeLimit);
        }

        match (&self.kind, &self.rules) {
            (ChallengeKind::Quiz, KindRules::Quiz) => {
                let bank = content::quiz::bank(self.difficulty).len();
                if self.total_rounds > bank {
                    return Err(ConfigError::NotEnoughWords {
                        rounds: self.total_rounds,
                        bank,
                    });
                }
            }
            (ChallengeKind::Memory, KindRules::Memory(_)) => {
                let symbols = content::memory::SYMBOLS.len();
                if self.total_rounds > symbols {
                    return Err(ConfigError::NotEnoughSymbols {
                        pairs: self.total_rounds,
                        symbols,
                    });
                }
            }
            (ChallengeKind::Pattern, KindRules::Pattern(rules)) => {
                let longest = rules.sequence_length(self.total_rounds - 1);
                if longest > rules.cell_count() || rules.base_length == 0 {
                    return Err(ConfigError::PatternExceedsGrid {
                        length: longest,
                        cells: rules.cell_count(),
                    });
                }
            }
            (ChallengeKind::Word, KindRules::Word(_)) => {
                let bank = content::word::BANK.len();
                if self.total_rounds > bank {
                    return Err(ConfigError::NotEnoughWords {
                        rounds: self.total_rounds,
                        bank,
                    });
                }
            }
            _ => return Err(ConfigError::RulesMismatch),
        }

        Ok(())
    }
}
