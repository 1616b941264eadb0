//! The daily task pool.
//!
//! Six tasks rotate by day of week: three quiz tiers, the memory board,
//! the pattern grid and the word puzzle, each with the point reward of its
//! difficulty tier.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::{ChallengeConfig, ChallengeKind, Difficulty};

/// One entry of the daily rotation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTask {
    pub kind: ChallengeKind,
    pub title: String,
    pub difficulty: Difficulty,
    pub points_reward: u64,
}

impl DailyTask {
    fn new(kind: ChallengeKind, title: &str, difficulty: Difficulty) -> Self {
        Self {
            kind,
            title: title.to_string(),
            difficulty,
            points_reward: difficulty.points_reward(),
        }
    }

    /// The engine config that plays this task.
    #[must_use]
    pub fn config(&self) -> ChallengeConfig {
        match self.kind {
            ChallengeKind::Quiz => ChallengeConfig::quiz(self.difficulty),
            ChallengeKind::Memory => ChallengeConfig::memory(),
            ChallengeKind::Pattern => ChallengeConfig::pattern(),
            ChallengeKind::Word => ChallengeConfig::word(),
        }
    }
}

/// The rotation, in weekday order starting from Sunday's slot.
#[must_use]
pub fn task_pool() -> Vec<DailyTask> {
    vec![
        DailyTask::new(ChallengeKind::Quiz, "Crypto Basics Quiz", Difficulty::Easy),
        DailyTask::new(ChallengeKind::Quiz, "DeFi Knowledge Test", Difficulty::Medium),
        DailyTask::new(ChallengeKind::Quiz, "Advanced Blockchain Quiz", Difficulty::Hard),
        DailyTask::new(ChallengeKind::Memory, "Crypto Symbol Memory", Difficulty::Medium),
        DailyTask::new(ChallengeKind::Pattern, "Blockchain Pattern Recognition", Difficulty::Hard),
        DailyTask::new(ChallengeKind::Word, "Crypto Word Challenge", Difficulty::Medium),
    ]
}

/// Select the task for a calendar date: day-of-week index modulo pool size.
#[must_use]
pub fn task_for_date(date: NaiveDate) -> DailyTask {
    let mut pool = task_pool();
    let index = date.weekday().num_days_from_sunday() as usize % pool.len();
    pool.swap_remove(index)
}
