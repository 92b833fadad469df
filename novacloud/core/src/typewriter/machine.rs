//! Typewriter State Machine
//!
//! Pure, clock-free stepping. The caller owns time: call
//! [`TypewriterMachine::next_delay`], wait that long, call
//! [`TypewriterMachine::step`], repeat.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{PhraseList, TypewriterConfig, TypewriterTiming};

/// Which part of the cycle the machine is in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Phase {
    /// Appending one character per tick
    #[default]
    Typing,
    /// Full phrase shown; waiting out the dwell
    PausedAfterTyping,
    /// Removing one character per tick
    Deleting,
}

impl Phase {
    /// Short label for logs and status lines
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Typing => "typing",
            Self::PausedAfterTyping => "paused",
            Self::Deleting => "deleting",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Mutable state of one running effect
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EffectState {
    /// Index of the active phrase
    pub current_index: usize,
    /// Rendered prefix of the active phrase
    pub display_text: String,
    /// Current phase
    pub phase: Phase,
}

/// What a single [`TypewriterMachine::step`] did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Appended a character; more remain
    Typed,
    /// Appended the last character; the dwell starts
    PhraseCompleted,
    /// Dwell finished; deletion starts on the next step
    DwellElapsed,
    /// Removed a character; more remain
    Deleted,
    /// Removed the last character and advanced to `next_index`
    PhraseCleared {
        /// Index of the phrase that will be typed next
        next_index: usize,
    },
}

impl StepOutcome {
    /// Whether `display_text` changed on this step
    #[must_use]
    pub fn changes_text(self) -> bool {
        !matches!(self, Self::DwellElapsed)
    }
}

/// Deterministic typewriter state machine
#[derive(Clone, Debug)]
pub struct TypewriterMachine {
    phrases: PhraseList,
    timing: TypewriterTiming,
    state: EffectState,
}

impl TypewriterMachine {
    /// Create a machine at the mount state: index 0, empty text, typing
    #[must_use]
    pub fn new(phrases: PhraseList, timing: TypewriterTiming) -> Self {
        Self {
            phrases,
            timing,
            state: EffectState::default(),
        }
    }

    /// Create a machine from a full config
    #[must_use]
    pub fn from_config(config: &TypewriterConfig) -> Self {
        Self::new(config.phrases.clone(), config.timing)
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> &EffectState {
        &self.state
    }

    /// Text currently displayed
    #[must_use]
    pub fn display_text(&self) -> &str {
        &self.state.display_text
    }

    /// Current phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Index of the active phrase
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    /// The active phrase
    #[must_use]
    pub fn current_phrase(&self) -> &str {
        self.phrases
            .get(self.state.current_index)
            .unwrap_or_default()
    }

    /// Phrases this machine cycles through
    #[must_use]
    pub fn phrases(&self) -> &PhraseList {
        &self.phrases
    }

    /// Timing constants
    #[must_use]
    pub fn timing(&self) -> TypewriterTiming {
        self.timing
    }

    /// How long to wait before the next [`step`](Self::step)
    #[must_use]
    pub fn next_delay(&self) -> Duration {
        match self.state.phase {
            Phase::Typing => self.timing.typing_interval,
            Phase::PausedAfterTyping => self.timing.pause,
            Phase::Deleting => self.timing.deleting_interval,
        }
    }

    /// Advance by exactly one tick (or the dwell transition)
    pub fn step(&mut self) -> StepOutcome {
        match self.state.phase {
            Phase::Typing => self.type_next_char(),
            Phase::PausedAfterTyping => {
                self.state.phase = Phase::Deleting;
                StepOutcome::DwellElapsed
            }
            Phase::Deleting => self.delete_last_char(),
        }
    }

    fn type_next_char(&mut self) -> StepOutcome {
        let phrase = self
            .phrases
            .get(self.state.current_index)
            .unwrap_or_default();

        // display_text is a prefix of phrase, so its byte length is a char boundary
        let typed = self.state.display_text.len();
        if let Some(next) = phrase.get(typed..).and_then(|rest| rest.chars().next()) {
            self.state.display_text.push(next);
        }

        if self.state.display_text.len() >= phrase.len() {
            self.state.phase = Phase::PausedAfterTyping;
            StepOutcome::PhraseCompleted
        } else {
            StepOutcome::Typed
        }
    }

    fn delete_last_char(&mut self) -> StepOutcome {
        self.state.display_text.pop();

        if self.state.display_text.is_empty() {
            let next_index = (self.state.current_index + 1) % self.phrases.len();
            self.state.current_index = next_index;
            self.state.phase = Phase::Typing;
            StepOutcome::PhraseCleared { next_index }
        } else {
            StepOutcome::Deleted
        }
    }
}
