//! Reward collaborators: persistence contract, daily task pool, points
//! ledger.
//!
//! The engine never reads or writes persistence - it reports a terminal
//! [`OutcomeReport`](crate::engine::OutcomeReport) and the ledger does the
//! bookkeeping.

pub mod ledger;
pub mod store;
pub mod tasks;

pub use ledger::{RewardError, RewardLedger, TOKENS_PER_POINT};
pub use store::{MemoryStore, PointsStore};
pub use tasks::{task_for_date, task_pool, DailyTask};
