//! Rotating Typewriter Effect
//!
//! Types a phrase in one character at a time, dwells, deletes it one
//! character at a time, then moves on to the next phrase, forever.
//!
//! The effect is split in two layers:
//!
//! - [`TypewriterMachine`]: a pure, synchronous state machine. Each call to
//!   [`TypewriterMachine::step`] performs exactly one tick (or the one-shot
//!   dwell transition) and [`TypewriterMachine::next_delay`] says how long to
//!   wait before the next call. Any event loop can drive it.
//! - [`TypewriterEffect`]: the owned runtime handle. It drives a machine on a
//!   tokio task, fans text changes out to subscribers and cancels the pending
//!   timer on [`TypewriterEffect::stop`] or drop.
//!
//! # State Machine
//!
//! ```text
//!            type one char            last char typed
//!          ┌───────────────┐        ┌──────────────────┐
//!          ▼               │        │                  ▼
//!     ┌─────────┐──────────┘        │        ┌───────────────────┐
//!  ──►│ Typing  │───────────────────┘        │ PausedAfterTyping │
//!     └─────────┘                            └─────────┬─────────┘
//!          ▲                                           │ dwell elapsed
//!          │ text empty: index = (index + 1) % N       ▼
//!          │                                     ┌──────────┐
//!          └─────────────────────────────────────│ Deleting │◄─┐
//!                                                └──────────┘  │
//!                                                      └───────┘
//!                                                 delete one char
//! ```

mod effect;
mod machine;
mod phrases;
mod timing;

pub use effect::TypewriterEffect;
pub use machine::{EffectState, Phase, StepOutcome, TypewriterMachine};
pub use phrases::PhraseList;
pub use timing::TypewriterTiming;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when building or starting a typewriter effect
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypewriterError {
    /// The phrases or timing constants cannot drive the machine
    #[error("Invalid typewriter configuration: {0}")]
    InvalidConfiguration(String),

    /// The host environment could not schedule the effect's timer
    #[error("Failed to start typewriter effect: {0}")]
    StartFailure(String),
}

/// Everything needed to construct one effect instance
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypewriterConfig {
    /// Label used in logs (e.g. "hero", "testimonials")
    pub name: String,
    /// Phrases in cycling order
    pub phrases: PhraseList,
    /// Tick and dwell durations, inlined as `*_ms` keys
    #[serde(flatten)]
    pub timing: TypewriterTiming,
}

impl TypewriterConfig {
    /// Create a config from phrases and timing
    #[must_use]
    pub fn new(phrases: PhraseList, timing: TypewriterTiming) -> Self {
        Self {
            name: "typewriter".to_string(),
            phrases,
            timing,
        }
    }

    /// Build a config from raw phrases and millisecond constants
    ///
    /// # Errors
    ///
    /// Returns [`TypewriterError::InvalidConfiguration`] if the phrase list is
    /// empty, contains an empty phrase, or any duration is zero.
    pub fn from_parts<I, S>(
        phrases: I,
        typing_interval_ms: u64,
        deleting_interval_ms: u64,
        pause_ms: u64,
    ) -> Result<Self, TypewriterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases = PhraseList::new(phrases)?;
        let timing =
            TypewriterTiming::from_millis(typing_interval_ms, deleting_interval_ms, pause_ms)?;
        Ok(Self::new(phrases, timing))
    }

    /// The hero heading: "Deploy Your ..."
    #[must_use]
    pub fn hero() -> Self {
        Self {
            name: "hero".to_string(),
            phrases: PhraseList::hero(),
            timing: TypewriterTiming::hero(),
        }
    }

    /// The testimonials heading: "Trusted by ..."
    #[must_use]
    pub fn testimonials() -> Self {
        Self {
            name: "testimonials".to_string(),
            phrases: PhraseList::testimonials(),
            timing: TypewriterTiming::testimonials(),
        }
    }

    /// Set the log label
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Re-check the timing constants
    ///
    /// Phrase lists are validated on construction and deserialization, but
    /// timing can be assembled field by field.
    ///
    /// # Errors
    ///
    /// Returns [`TypewriterError::InvalidConfiguration`] for a zero duration.
    pub fn validate(&self) -> Result<(), TypewriterError> {
        self.timing.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_from_parts_valid() {
        let config = TypewriterConfig::from_parts(["Go", "Run"], 80, 40, 2000).unwrap();
        assert_eq!(config.phrases.len(), 2);
        assert_eq!(config.timing.typing_interval, Duration::from_millis(80));
        assert_eq!(config.name, "typewriter");
    }

    #[test]
    fn test_from_parts_rejects_empty_list() {
        let err = TypewriterConfig::from_parts(Vec::<String>::new(), 80, 40, 2000).unwrap_err();
        assert!(matches!(err, TypewriterError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_from_parts_rejects_zero_timing() {
        for (typing, deleting, pause) in [(0, 40, 2000), (80, 0, 2000), (80, 40, 0)] {
            let err = TypewriterConfig::from_parts(["Go"], typing, deleting, pause).unwrap_err();
            assert!(matches!(err, TypewriterError::InvalidConfiguration(_)));
        }
    }

    #[test]
    fn test_presets() {
        let hero = TypewriterConfig::hero();
        assert_eq!(hero.name, "hero");
        assert_eq!(hero.phrases.get(0), Some("Cloud in Seconds"));
        assert!(hero.validate().is_ok());

        let testimonials = TypewriterConfig::testimonials();
        assert_eq!(testimonials.name, "testimonials");
        assert_eq!(testimonials.phrases.get(3), Some("startups & enterprises"));
        assert_eq!(testimonials.timing.pause, Duration::from_millis(2200));
    }

    #[test]
    fn test_error_display() {
        let err = TypewriterError::InvalidConfiguration("phrase list is empty".into());
        assert_eq!(
            err.to_string(),
            "Invalid typewriter configuration: phrase list is empty"
        );
    }

    #[test]
    fn test_config_document_uses_millis() {
        let config: TypewriterConfig = toml::from_str(
            r#"
name = "hero"
phrases = ["Go", "Run"]
typing_interval_ms = 80
deleting_interval_ms = 40
pause_ms = 2000
"#,
        )
        .unwrap();
        assert_eq!(config, TypewriterConfig::from_parts(["Go", "Run"], 80, 40, 2000).unwrap().with_name("hero"));

        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("pause_ms = 2000"), "{text}");
        let back: TypewriterConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
