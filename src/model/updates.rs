//! Counters behind the dashboard's polling notifications.
//!
//! The server exposes three monotonic-ish counters. The client polls them on a fixed
//! interval and feeds each snapshot to an [`UpdateTracker`], which reports which
//! counters grew since the previous snapshot.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// How often the client polls `/api/updates`, in milliseconds.
pub const UPDATE_POLL_INTERVAL_MS: u32 = 5_000;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateCountsDto {
    /// Total number of action log entries.
    pub logs_count: u64,
    /// Appeals waiting for review.
    pub appeals_count: u64,
    /// LOA requests waiting for review.
    pub loa_requests_count: u64,
}

/// Which counters increased between two polls, and by how much.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct UpdateDiff {
    pub new_logs: u64,
    pub new_appeals: u64,
    pub new_loa_requests: u64,
}

impl UpdateDiff {
    pub fn is_empty(&self) -> bool {
        self.new_logs == 0 && self.new_appeals == 0 && self.new_loa_requests == 0
    }
}

/// Remembers the last observed counters.
///
/// The first snapshot only primes the tracker so opening the dashboard never
/// produces a burst of toasts. A counter that went down (an appeal was reviewed,
/// for example) re-bases silently.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UpdateTracker {
    last: Option<UpdateCountsDto>,
}

impl UpdateTracker {
    pub fn new() -> Self {
        Self { last: None }
    }

    pub fn last(&self) -> Option<UpdateCountsDto> {
        self.last
    }

    /// Records `current` and returns the increases relative to the previous snapshot.
    pub fn observe(&mut self, current: UpdateCountsDto) -> UpdateDiff {
        let diff = match self.last {
            None => UpdateDiff::default(),
            Some(previous) => UpdateDiff {
                new_logs: current.logs_count.saturating_sub(previous.logs_count),
                new_appeals: current.appeals_count.saturating_sub(previous.appeals_count),
                new_loa_requests: current
                    .loa_requests_count
                    .saturating_sub(previous.loa_requests_count),
            },
        };

        self.last = Some(current);
        diff
    }
}
