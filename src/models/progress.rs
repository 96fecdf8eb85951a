//! Progress: elapsed time from registration to the latest marker event.

use chrono::Duration;
use serde::{Serialize, Serializer};
use std::fmt;

const MICROS_PER_SECOND: i64 = 1_000_000;
const SECONDS_PER_DAY: i64 = 86_400;

/// Signed elapsed time. Rendered as `[-][d.]hh:mm:ss[.fffffff]`, the format the
/// front-end already parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Progress(Duration);

impl Progress {
    pub fn zero() -> Self {
        Self(Duration::zero())
    }
}

impl From<Duration> for Progress {
    fn from(d: Duration) -> Self {
        Self(d)
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Saturates past ~292k years.
        let micros = self.0.num_microseconds().unwrap_or(if self.0 < Duration::zero() {
            i64::MIN
        } else {
            i64::MAX
        });
        if micros < 0 {
            f.write_str("-")?;
        }
        let micros = micros.unsigned_abs();
        let secs = micros / MICROS_PER_SECOND as u64;
        let frac = micros % MICROS_PER_SECOND as u64;

        let days = secs / SECONDS_PER_DAY as u64;
        let rem = secs % SECONDS_PER_DAY as u64;
        if days > 0 {
            write!(f, "{}.", days)?;
        }
        write!(f, "{:02}:{:02}:{:02}", rem / 3600, (rem % 3600) / 60, rem % 60)?;
        if frac > 0 {
            // 100ns ticks, seven digits
            write!(f, ".{:07}", frac * 10)?;
        }
        Ok(())
    }
}

impl Serialize for Progress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
