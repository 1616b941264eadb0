//! Content generators, one per challenge kind.
//!
//! Generators are pure given a seed: the engine calls `generate` once at
//! `start` (and again on `restart`) and the resulting `ChallengeContent`
//! holds every round payload up front. After `ChallengeConfig::validate`
//! passes, generation cannot fail.

pub mod memory;
pub mod pattern;
pub mod quiz;
pub mod word;

use serde::{Deserialize, Serialize};

use crate::core::{ChallengeConfig, ChallengeKind, ChallengeRng};

pub use memory::MemoryBoard;
pub use quiz::QuizQuestion;
pub use word::WordPuzzle;

/// All round payloads for one challenge instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ChallengeContent {
    /// Ordered questions for the difficulty tier.
    Quiz(Vec<QuizQuestion>),
    /// The dealt board.
    Memory(MemoryBoard),
    /// Per-round target sequences.
    Pattern(Vec<Vec<usize>>),
    /// Drawn puzzles.
    Word(Vec<WordPuzzle>),
}

impl ChallengeContent {
    /// Generate content for a validated config.
    #[must_use]
    pub fn generate(config: &ChallengeConfig, rng: &mut ChallengeRng) -> Self {
        match config.kind {
            ChallengeKind::Quiz => {
                ChallengeContent::Quiz(quiz::questions(config.difficulty, config.total_rounds))
            }
            ChallengeKind::Memory => {
                ChallengeContent::Memory(MemoryBoard::deal(config.total_rounds, rng))
            }
            ChallengeKind::Pattern => {
                let rules = config.pattern_rules().copied().unwrap_or_default();
                ChallengeContent::Pattern(pattern::round_targets(
                    &rules,
                    config.total_rounds,
                    rng,
                ))
            }
            ChallengeKind::Word => {
                ChallengeContent::Word(word::draw(config.total_rounds, rng))
            }
        }
    }

    /// Question for a quiz round.
    #[must_use]
    pub fn question(&self, round: usize) -> Option<&QuizQuestion> {
        match self {
            ChallengeContent::Quiz(questions) => questions.get(round),
            _ => None,
        }
    }

    /// The memory board.
    #[must_use]
    pub fn board(&self) -> Option<&MemoryBoard> {
        match self {
            ChallengeContent::Memory(board) => Some(board),
            _ => None,
        }
    }

    /// Target sequence for a pattern round.
    #[must_use]
    pub fn target(&self, round: usize) -> Option<&[usize]> {
        match self {
            ChallengeContent::Pattern(targets) => targets.get(round).map(Vec::as_slice),
            _ => None,
        }
    }

    /// Puzzle for a word round.
    #[must_use]
    pub fn puzzle(&self, round: usize) -> Option<&WordPuzzle> {
        match self {
            ChallengeContent::Word(puzzles) => puzzles.get(round),
            _ => None,
        }
    }
}
