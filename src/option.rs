use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single privacy lock timeout option
///
/// Holds the label shown to the user, a longer explanation, and the timeout
/// in whole hours. Values are stored exactly as given: empty strings, zero
/// and negative hours are all legal. Range policy, if any, belongs to
/// whoever builds the list of options (see [`crate::catalog`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct PrivacyLockOption {
    title: String,
    detail: String,
    hours: i32,
}

impl PrivacyLockOption {
    /// Create a new option from its three fields
    pub fn new(title: impl Into<String>, detail: impl Into<String>, hours: i32) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
            hours,
        }
    }

    /// Short user-facing label, e.g. "1 Hour"
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Longer explanatory text for the option
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// Timeout in whole hours
    pub fn hours(&self) -> i32 {
        self.hours
    }

    /// Return this option with a different title
    pub fn with_title(self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self
        }
    }

    /// Return this option with a different detail
    pub fn with_detail(self, detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
            ..self
        }
    }

    /// Return this option with a different hour count
    pub fn with_hours(self, hours: i32) -> Self {
        Self { hours, ..self }
    }

    /// Split the option back into `(title, detail, hours)`
    pub fn into_parts(self) -> (String, String, i32) {
        (self.title, self.detail, self.hours)
    }

    /// The hour count as a duration.
    ///
    /// Straight unit conversion: zero and negative hour counts come out as
    /// zero and negative durations.
    pub fn lock_duration(&self) -> Duration {
        Duration::hours(i64::from(self.hours))
    }
}

impl fmt::Display for PrivacyLockOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.detail.is_empty() {
            write!(f, "{}", self.title)
        } else {
            write!(f, "{}: {}", self.title, self.detail)
        }
    }
}
