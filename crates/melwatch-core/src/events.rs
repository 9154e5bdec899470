use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::deadline::Category;

/// Emitted by the monitor on each refresh. The presentation layer renders
/// from snapshots and reacts to these.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A scheduled or input-driven refresh completed.
    Refreshed {
        expired_count: usize,
        at: DateTime<Utc>,
    },
    /// A category's deadline passed since the previous refresh (or was
    /// already past on the first one).
    DeadlineExpired {
        category: Category,
        deadline: DateTime<Utc>,
        at: DateTime<Utc>,
    },
}
