//! Terminal presentation
//!
//! A command-line host has no platform review sheet, so the review request
//! prints where to leave the review, and the asker prompt is a y/n question
//! on stdin.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use log::{debug, warn};

use crate::core::models::{AskerPrompt, PromptOutcome};
use crate::core::ports::{PromptPresenter, ReviewPrompter};

/// Prints the review request to stdout
#[derive(Debug, Clone, Default)]
pub struct ConsoleReviewPrompter {
    review_url: Option<String>,
}

impl ConsoleReviewPrompter {
    /// Point users at `review_url` when set
    #[must_use]
    pub const fn new(review_url: Option<String>) -> Self {
        Self { review_url }
    }
}

impl ReviewPrompter for ConsoleReviewPrompter {
    fn request_review(&self) {
        debug!("Review requested");
        match &self.review_url {
            Some(url) => println!("{} {url}", "Leave a review:".bold()),
            None => println!("{}", "Review requested.".bold()),
        }
    }
}

/// Asks the prompt on stdin/stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolePresenter;

impl ConsolePresenter {
    /// Interpret one line of user input
    ///
    /// `y`, `yes` or the confirm label accept; anything else declines.
    #[must_use]
    pub fn parse_answer(line: &str, prompt: &AskerPrompt) -> PromptOutcome {
        let answer = line.trim();
        let accepted = answer.eq_ignore_ascii_case("y")
            || answer.eq_ignore_ascii_case("yes")
            || answer.eq_ignore_ascii_case(prompt.confirm_text.trim());
        PromptOutcome::from(accepted)
    }
}

impl PromptPresenter for ConsolePresenter {
    fn present(&self, prompt: &AskerPrompt) -> PromptOutcome {
        println!("{}", prompt.title.bold());
        println!("{}", prompt.message);
        print!("[y] {}  [n] {} > ", prompt.confirm_text, prompt.dismiss_text);
        if let Err(e) = io::stdout().flush() {
            warn!("Cannot flush prompt: {e}");
        }

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(_) => Self::parse_answer(&line, prompt),
            Err(e) => {
                warn!("Cannot read answer, treating as declined: {e}");
                PromptOutcome::Declined
            },
        }
    }
}
