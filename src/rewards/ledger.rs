//! Points ledger over a key-value store.
//!
//! Balances are keyed by wallet address, completion flags by address and
//! calendar date, so a new day needs no explicit reset and two users on
//! the same store never collide.

use chrono::NaiveDate;
use thiserror::Error;

use super::store::PointsStore;
use super::tasks::DailyTask;
use crate::core::Outcome;
use crate::engine::OutcomeReport;

/// Simulated exchange rate: points to $TASK tokens.
pub const TOKENS_PER_POINT: f64 = 0.001;

/// Reward bookkeeping failures.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RewardError {
    /// Only a passing outcome earns points.
    #[error("challenge was not passed")]
    ChallengeFailed,

    /// One reward per task per day.
    #[error("today's task is already completed")]
    AlreadyCompleted,

    /// Zero-point redemptions are rejected.
    #[error("redemption amount must be positive")]
    ZeroPoints,

    /// Balance too low for the requested redemption.
    #[error("insufficient points: have {available}, requested {requested}")]
    InsufficientPoints { available: u64, requested: u64 },
}

/// Points balance and completion tracking for one store.
#[derive(Clone, Debug)]
pub struct RewardLedger<S: PointsStore> {
    store: S,
}

impl<S: PointsStore> RewardLedger<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Consume the ledger and return the underlying store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    fn points_key(address: &str) -> String {
        format!("points_{address}")
    }

    fn completed_key(address: &str, date: NaiveDate) -> String {
        format!("completed_{address}_{date}")
    }

    /// Current balance for a wallet. Unparseable or absent values read
    /// as zero.
    #[must_use]
    pub fn points(&self, address: &str) -> u64 {
        self.store
            .get(&Self::points_key(address))
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(0)
    }

    /// Whether the wallet already completed a task on this date.
    #[must_use]
    pub fn is_completed(&self, address: &str, date: NaiveDate) -> bool {
        self.store
            .get(&Self::completed_key(address, date))
            .as_deref()
            == Some("true")
    }

    /// Credit a passed challenge: bump the balance and set the completion
    /// flag. Returns the new balance.
    pub fn award(
        &mut self,
        address: &str,
        date: NaiveDate,
        task: &DailyTask,
        report: &OutcomeReport,
    ) -> Result<u64, RewardError> {
        if report.outcome != Outcome::Pass {
            return Err(RewardError::ChallengeFailed);
        }
        if self.is_completed(address, date) {
            return Err(RewardError::AlreadyCompleted);
        }

        let balance = self.points(address) + task.points_reward;
        self.store.set(&Self::points_key(address), balance.to_string());
        self.store
            .set(&Self::completed_key(address, date), "true".to_string());
        Ok(balance)
    }

    /// Exchange points for simulated tokens. Returns the token amount.
    pub fn redeem(&mut self, address: &str, points: u64) -> Result<f64, RewardError> {
        if points == 0 {
            return Err(RewardError::ZeroPoints);
        }
        let available = self.points(address);
        if points > available {
            return Err(RewardError::InsufficientPoints {
                available,
                requested: points,
            });
        }

        let balance = available - points;
        self.store.set(&Self::points_key(address), balance.to_string());
        Ok(points as f64 * TOKENS_PER_POINT)
    }
}
