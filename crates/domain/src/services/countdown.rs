//! Maintenance countdown engine.
//!
//! Derives the remaining time and progress of a maintenance window. The
//! computation is pure: the same `(start, end, now)` always yields the same
//! snapshot, so callers may re-evaluate it on any cadence they like.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const MS_PER_DAY: i64 = 86_400_000;
const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_SECOND: i64 = 1_000;

/// Remaining time and progress of a maintenance window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountdownSnapshot {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    /// 0-100, how much of the window has passed.
    pub progress: f64,
    /// True once `now` has reached the end of the window.
    pub elapsed: bool,
}

impl CountdownSnapshot {
    /// Computes the countdown for a window at a given instant.
    ///
    /// Once the window has elapsed the countdown is all zeros and progress is
    /// pinned at 100. A zero-length window reports 100 immediately.
    pub fn compute(start: DateTime<Utc>, end: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let remaining_ms = (end - now).num_milliseconds();

        if remaining_ms <= 0 {
            return Self {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 0,
                progress: 100.0,
                elapsed: true,
            };
        }

        let days = remaining_ms / MS_PER_DAY;
        let hours = (remaining_ms % MS_PER_DAY) / MS_PER_HOUR;
        let minutes = (remaining_ms % MS_PER_HOUR) / MS_PER_MINUTE;
        let seconds = (remaining_ms % MS_PER_MINUTE) / MS_PER_SECOND;

        let total_ms = (end - start).num_milliseconds();
        let progress = if total_ms <= 0 {
            100.0
        } else {
            let done = (total_ms - remaining_ms) as f64 / total_ms as f64 * 100.0;
            done.clamp(0.0, 100.0)
        };

        Self {
            days,
            hours,
            minutes,
            seconds,
            progress,
            elapsed: false,
        }
    }
}
