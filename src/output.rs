//! Output formatting for human and JSON modes
//!
//! Every command result renders either as human-readable text or as
//! machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::RatingState;
use crate::core::services::{Eligibility, EligibilityPolicy};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a status query
#[derive(Debug, Serialize)]
pub struct StatusResult {
    /// Version token of the running build
    pub current_version: String,
    /// Stored fields
    pub state: RatingState,
    /// Thresholds in force
    pub policy: EligibilityPolicy,
    /// Decision with its reason
    pub eligibility: Eligibility,
    /// Shorthand for `eligibility.is_eligible()`
    pub eligible: bool,
}

/// Result of an eligibility check
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DecisionResult {
    /// Whether the prompt may be shown
    pub eligible: bool,
    /// Decision with its reason
    pub eligibility: Eligibility,
}

/// Result of adding points
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PointsResult {
    /// Points added (negative when removed)
    pub added: i64,
    /// New total
    pub total: u64,
    /// Points needed before asking
    pub needed: u64,
}

/// Result of an ask or answer operation
#[derive(Debug, Serialize)]
pub struct PromptResult {
    /// Whether anything was shown
    pub shown: bool,
    /// "accepted", "declined" or "requested" when shown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
    /// Why nothing was shown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<Eligibility>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn decision_line(eligibility: Eligibility) -> String {
    let text = eligibility.to_string();
    if eligibility.is_eligible() {
        text.green().to_string()
    } else {
        text.yellow().to_string()
    }
}

impl StatusResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("Version:       {}", self.current_version);
        println!("Points:        {} / {}", self.state.points, self.policy.minimum_points);
        if self.state.ever_prompted() {
            println!("Last prompt:   {}", self.state.last_checked.to_rfc3339());
            println!("Last version:  {}", self.state.last_tested_version);
        } else {
            println!("Last prompt:   never");
        }
        println!("Cooldown:      more than {} month(s)", self.policy.minimum_months);
        println!("Remote flag:   {}", if self.state.remote_should_show { "on" } else { "off" });
        if self.policy.test_mode {
            println!("{}", "Test mode is ON: every check passes".red().bold());
        }
        println!();
        println!("{}", decision_line(self.eligibility));
    }
}

impl DecisionResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", decision_line(self.eligibility)),
            OutputMode::Json => print_json(self),
        }
    }
}

impl PointsResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Added {} point(s). Total: {} / {}", self.added, self.total, self.needed);
            },
            OutputMode::Json => print_json(self),
        }
    }
}

impl PromptResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => match (&self.outcome, &self.skipped) {
                (Some(outcome), _) => println!("Prompt {outcome}. State reset."),
                (None, Some(reason)) => println!("Nothing shown: {reason}"),
                (None, None) => println!("Nothing shown."),
            },
            OutputMode::Json => print_json(self),
        }
    }
}

impl OperationResult {
    /// Create a successful result
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
