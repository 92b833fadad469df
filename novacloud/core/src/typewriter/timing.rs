//! Typewriter Timing
//!
//! Per-character tick intervals and the post-typing dwell. All three are
//! independent of phrase length.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::TypewriterError;

/// Tick and dwell durations for one effect
///
/// (De)serialises as whole milliseconds: `typing_interval_ms`,
/// `deleting_interval_ms`, `pause_ms`. Zero values are rejected on load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TimingMillis", into = "TimingMillis")]
pub struct TypewriterTiming {
    /// Delay between typed characters
    pub typing_interval: Duration,
    /// Delay between deleted characters
    pub deleting_interval: Duration,
    /// One-shot dwell after a phrase is fully typed
    pub pause: Duration,
}

/// Wire form of [`TypewriterTiming`]
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct TimingMillis {
    typing_interval_ms: u64,
    deleting_interval_ms: u64,
    pause_ms: u64,
}

fn whole_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl TryFrom<TimingMillis> for TypewriterTiming {
    type Error = TypewriterError;

    fn try_from(wire: TimingMillis) -> Result<Self, Self::Error> {
        Self::from_millis(wire.typing_interval_ms, wire.deleting_interval_ms, wire.pause_ms)
    }
}

impl From<TypewriterTiming> for TimingMillis {
    fn from(timing: TypewriterTiming) -> Self {
        Self {
            typing_interval_ms: whole_millis(timing.typing_interval),
            deleting_interval_ms: whole_millis(timing.deleting_interval),
            pause_ms: whole_millis(timing.pause),
        }
    }
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self::hero()
    }
}

impl TypewriterTiming {
    /// Create timing from durations
    ///
    /// # Errors
    ///
    /// Returns [`TypewriterError::InvalidConfiguration`] if any duration is zero.
    pub fn new(
        typing_interval: Duration,
        deleting_interval: Duration,
        pause: Duration,
    ) -> Result<Self, TypewriterError> {
        let timing = Self {
            typing_interval,
            deleting_interval,
            pause,
        };
        timing.validate()?;
        Ok(timing)
    }

    /// Create timing from millisecond constants
    ///
    /// # Errors
    ///
    /// Returns [`TypewriterError::InvalidConfiguration`] if any value is zero.
    pub fn from_millis(
        typing_interval_ms: u64,
        deleting_interval_ms: u64,
        pause_ms: u64,
    ) -> Result<Self, TypewriterError> {
        Self::new(
            Duration::from_millis(typing_interval_ms),
            Duration::from_millis(deleting_interval_ms),
            Duration::from_millis(pause_ms),
        )
    }

    /// Hero heading: 80ms per typed char, 40ms per deleted char, 2s dwell
    #[must_use]
    pub const fn hero() -> Self {
        Self {
            typing_interval: Duration::from_millis(80),
            deleting_interval: Duration::from_millis(40),
            pause: Duration::from_millis(2000),
        }
    }

    /// Testimonials heading: 70ms / 35ms / 2.2s
    #[must_use]
    pub const fn testimonials() -> Self {
        Self {
            typing_interval: Duration::from_millis(70),
            deleting_interval: Duration::from_millis(35),
            pause: Duration::from_millis(2200),
        }
    }

    /// Check that every duration is strictly positive
    ///
    /// # Errors
    ///
    /// Returns [`TypewriterError::InvalidConfiguration`] naming the first zero field.
    pub fn validate(&self) -> Result<(), TypewriterError> {
        let fields = [
            ("typing_interval", self.typing_interval),
            ("deleting_interval", self.deleting_interval),
            ("pause", self.pause),
        ];

        for (name, value) in fields {
            if value.is_zero() {
                return Err(TypewriterError::InvalidConfiguration(format!(
                    "{name} must be greater than zero"
                )));
            }
        }
        Ok(())
    }

    /// Set the typing interval
    #[must_use]
    pub fn with_typing_interval(mut self, interval: Duration) -> Self {
        self.typing_interval = interval;
        self
    }

    /// Set the deleting interval
    #[must_use]
    pub fn with_deleting_interval(mut self, interval: Duration) -> Self {
        self.deleting_interval = interval;
        self
    }

    /// Set the dwell
    #[must_use]
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }
}
