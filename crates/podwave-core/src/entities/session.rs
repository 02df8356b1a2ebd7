//! Session entity - one continuous app-usage interval

use chrono::{DateTime, Utc};

use crate::value_objects::RecordId;

/// Session entity
///
/// `ended_at` stays `None` while the session is active. The counters are
/// written once, when the session ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: RecordId,
    pub user_id: RecordId,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub screens_visited: i64,
    pub plays_count: i64,
    pub favorites_count: i64,
}

impl Session {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.ended_at.is_none()
    }
}

/// Final counters reported by the client when a session ends
///
/// Values overwrite whatever the row held; they are not accumulated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub screens_visited: i64,
    pub plays_count: i64,
    pub favorites_count: i64,
}

impl SessionSummary {
    pub fn new(screens_visited: i64, plays_count: i64, favorites_count: i64) -> Self {
        Self {
            screens_visited,
            plays_count,
            favorites_count,
        }
    }
}
