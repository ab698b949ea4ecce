use std::time::{SystemTime, UNIX_EPOCH};

/// A millisecond-resolution wall-clock source.
///
/// The generator compares successive readings to detect backwards jumps, so
/// implementations must report *wall-clock* time (Unix milliseconds), not a
/// monotonicized view of it. A cached or monotonic clock would mask exactly
/// the regressions the generator is required to surface.
///
/// Implement this for tests or embedders with their own notion of time and
/// pass it to [`SnowflakeGenerator::with_clock`].
///
/// [`SnowflakeGenerator::with_clock`]: crate::SnowflakeGenerator::with_clock
pub trait Clock {
    /// Returns the current time in milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}

/// A [`Clock`] that reads [`SystemTime`] on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct WallClock;

impl Clock for WallClock {
    fn now_millis(&self) -> i64 {
        // A clock before 1970 reports 0 and surfaces downstream as a
        // regression rather than panicking here.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_millis() as i64)
    }
}
