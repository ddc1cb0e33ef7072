//! Asker prompt model
//!
//! The optional dialog shown before the platform review request. The gate
//! only supplies the texts; rendering belongs to the caller.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Texts for the "would you rate us?" question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskerPrompt {
    /// Dialog title
    pub title: String,
    /// Question shown to the user
    pub message: String,
    /// Label of the accepting button
    pub confirm_text: String,
    /// Label of the declining button
    pub dismiss_text: String,
}

impl AskerPrompt {
    /// Create a new prompt
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        confirm_text: impl Into<String>,
        dismiss_text: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            confirm_text: confirm_text.into(),
            dismiss_text: dismiss_text.into(),
        }
    }
}

/// What the user answered to an [`AskerPrompt`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptOutcome {
    /// The user agreed; the platform review request follows
    Accepted,
    /// The user declined; no review request is made
    Declined,
}

impl PromptOutcome {
    /// `true` for [`PromptOutcome::Accepted`]
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl From<bool> for PromptOutcome {
    fn from(accepted: bool) -> Self {
        if accepted { Self::Accepted } else { Self::Declined }
    }
}

impl fmt::Display for PromptOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => write!(f, "accepted"),
            Self::Declined => write!(f, "declined"),
        }
    }
}

impl std::str::FromStr for PromptOutcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "accept" | "accepted" | "yes" | "y" => Ok(Self::Accepted),
            "decline" | "declined" | "dismiss" | "no" | "n" => Ok(Self::Declined),
            _ => Err(format!("Invalid outcome: {s}. Use 'accept' or 'decline'")),
        }
    }
}
