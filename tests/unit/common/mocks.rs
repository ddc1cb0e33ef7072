//! Mock implementations of port traits for testing
//!
//! These mocks provide configurable behavior and record calls so tests can
//! assert on side effects without real I/O.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use rategate::core::ports::{AppContext, KeyValueStore, PromptPresenter, ReviewPrompter};
use rategate::{AppVersion, AskerPrompt, PromptOutcome};

/// App context with a settable clock and version
pub struct MockContext {
    version: RefCell<AppVersion>,
    now: Cell<DateTime<Utc>>,
}

impl MockContext {
    pub fn new(version: &str, now: DateTime<Utc>) -> Self {
        Self {
            version: RefCell::new(AppVersion::from(version)),
            now: Cell::new(now),
        }
    }

    pub fn set_now(&self, now: DateTime<Utc>) {
        self.now.set(now);
    }

    pub fn set_version(&self, version: &str) {
        *self.version.borrow_mut() = AppVersion::from(version);
    }
}

impl AppContext for MockContext {
    fn current_version(&self) -> AppVersion {
        self.version.borrow().clone()
    }

    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

/// Review prompter that counts requests
#[derive(Default)]
pub struct RecordingReviewer {
    requests: Cell<usize>,
}

impl RecordingReviewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> usize {
        self.requests.get()
    }
}

impl ReviewPrompter for RecordingReviewer {
    fn request_review(&self) {
        self.requests.set(self.requests.get() + 1);
    }
}

/// Presenter that replays scripted answers and records the prompts it saw
pub struct ScriptedPresenter {
    answers: RefCell<VecDeque<PromptOutcome>>,
    shown: RefCell<Vec<AskerPrompt>>,
}

impl ScriptedPresenter {
    pub fn answering(answers: &[PromptOutcome]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().copied().collect()),
            shown: RefCell::new(Vec::new()),
        }
    }

    pub fn shown(&self) -> Vec<AskerPrompt> {
        self.shown.borrow().clone()
    }
}

impl PromptPresenter for ScriptedPresenter {
    fn present(&self, prompt: &AskerPrompt) -> PromptOutcome {
        self.shown.borrow_mut().push(prompt.clone());
        self.answers
            .borrow_mut()
            .pop_front()
            .expect("presenter asked more often than scripted")
    }
}

/// Store whose writes always fail, for error propagation tests
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get_string(&self, _key: &str) -> Option<String> {
        None
    }

    fn set_string(&self, key: &str, _value: &str) -> anyhow::Result<()> {
        anyhow::bail!("disk full writing {key}")
    }

    fn get_int(&self, _key: &str) -> Option<i64> {
        None
    }

    fn set_int(&self, key: &str, _value: i64) -> anyhow::Result<()> {
        anyhow::bail!("disk full writing {key}")
    }

    fn get_bool(&self, _key: &str) -> Option<bool> {
        None
    }

    fn set_bool(&self, key: &str, _value: bool) -> anyhow::Result<()> {
        anyhow::bail!("disk full writing {key}")
    }

    fn get_timestamp(&self, _key: &str) -> Option<DateTime<Utc>> {
        None
    }

    fn set_timestamp(&self, key: &str, _value: DateTime<Utc>) -> anyhow::Result<()> {
        anyhow::bail!("disk full writing {key}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_mock_context_updates() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let ctx = MockContext::new("1.0.0.1", start);
        ctx.set_version("1.0.0.2");
        assert_eq!(ctx.current_version().as_str(), "1.0.0.2");
        assert_eq!(ctx.now(), start);
    }

    #[test]
    fn test_scripted_presenter_replays_in_order() {
        let presenter =
            ScriptedPresenter::answering(&[PromptOutcome::Declined, PromptOutcome::Accepted]);
        let prompt = AskerPrompt::new("t", "m", "y", "n");
        assert_eq!(presenter.present(&prompt), PromptOutcome::Declined);
        assert_eq!(presenter.present(&prompt), PromptOutcome::Accepted);
        assert_eq!(presenter.shown().len(), 2);
    }
}
