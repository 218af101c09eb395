//! Process start anchor for uptime and timestamp queries.
//!
//! The wall clock is read once at start-up. Every later timestamp is the start
//! time plus monotonic elapsed time, so reported timestamps never go backwards
//! and are never earlier than the start, even if the system clock is stepped.

use std::time::{Duration, Instant};

use chrono::{DateTime, SecondsFormat, Utc};

/// Clock anchored at process start.
#[derive(Debug, Clone, Copy)]
pub struct ProcessClock {
    started: Instant,
    started_wall: DateTime<Utc>,
}

impl ProcessClock {
    /// Anchor a clock at the current instant.
    pub fn start() -> Self {
        Self::starting_at(Instant::now(), Utc::now())
    }

    /// Anchor a clock at an explicit monotonic/wall-clock pair.
    pub fn starting_at(started: Instant, started_wall: DateTime<Utc>) -> Self {
        Self {
            started,
            started_wall,
        }
    }

    /// Wall-clock instant the clock was anchored at.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_wall
    }

    /// Monotonic time elapsed since start.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Seconds elapsed since start, with sub-second precision.
    pub fn uptime_secs(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }

    /// Current instant in UTC.
    pub fn now(&self) -> DateTime<Utc> {
        self.started_wall + self.elapsed()
    }

    /// Current instant as ISO-8601, e.g. `2024-05-01T12:00:00.123Z`.
    pub fn timestamp(&self) -> String {
        format_timestamp(self.now())
    }
}

impl Default for ProcessClock {
    fn default() -> Self {
        Self::start()
    }
}

/// Format an instant as RFC 3339 UTC with millisecond precision and a `Z` suffix.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
