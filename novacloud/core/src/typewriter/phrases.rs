//! Phrase List
//!
//! The ordered, non-empty rotation of phrases a typewriter cycles through.

use serde::{Deserialize, Serialize};

use super::TypewriterError;

/// Hero heading rotation
const HERO_PHRASES: &[&str] = &[
    "Cloud in Seconds",
    "Apps with Ease",
    "Scale Instantly",
    "Infrastructure Fast",
];

/// Testimonials heading rotation
const TESTIMONIAL_PHRASES: &[&str] = &[
    "engineers worldwide",
    "developers everywhere",
    "DevOps teams globally",
    "startups & enterprises",
];

/// Ordered, non-empty sequence of non-empty phrases
///
/// Fixed at construction; insertion order is the cycling order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct PhraseList {
    phrases: Vec<String>,
}

impl PhraseList {
    /// Build a phrase list
    ///
    /// # Errors
    ///
    /// Returns [`TypewriterError::InvalidConfiguration`] if there are no
    /// phrases, or if any phrase is the empty string.
    pub fn new<I, S>(phrases: I) -> Result<Self, TypewriterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();

        if phrases.is_empty() {
            return Err(TypewriterError::InvalidConfiguration(
                "phrase list is empty".to_string(),
            ));
        }
        if let Some(position) = phrases.iter().position(String::is_empty) {
            return Err(TypewriterError::InvalidConfiguration(format!(
                "phrase {position} is empty"
            )));
        }

        Ok(Self { phrases })
    }

    /// Phrases rotated by the hero heading
    #[must_use]
    pub fn hero() -> Self {
        Self::from_static(HERO_PHRASES)
    }

    /// Phrases rotated by the testimonials heading
    #[must_use]
    pub fn testimonials() -> Self {
        Self::from_static(TESTIMONIAL_PHRASES)
    }

    fn from_static(phrases: &[&str]) -> Self {
        Self {
            phrases: phrases.iter().map(|p| (*p).to_string()).collect(),
        }
    }

    /// Number of phrases (always at least one)
    #[must_use]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Phrase at `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.phrases.get(index).map(String::as_str)
    }

    /// Iterate phrases in cycling order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }
}

impl TryFrom<Vec<String>> for PhraseList {
    type Error = TypewriterError;

    fn try_from(phrases: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(phrases)
    }
}

impl From<PhraseList> for Vec<String> {
    fn from(list: PhraseList) -> Self {
        list.phrases
    }
}
