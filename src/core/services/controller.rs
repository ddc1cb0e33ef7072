//! Gating controller - orchestrates the ask / respond / reset cycle
//!
//! ```text
//! IDLE --add_points--> IDLE --should_show--> ELIGIBLE | INELIGIBLE
//! ELIGIBLE --present--> ACCEPTED | DECLINED --reset--> IDLE
//! INELIGIBLE --> IDLE (no state change)
//! ```
//!
//! Nothing marks a prompt as "in flight": if the app dies while the prompt is
//! on screen, the next launch simply re-evaluates the unchanged state.

use log::{debug, info};

use super::eligibility::{Eligibility, EligibilityPolicy};
use super::persisted_state::PersistedState;
use crate::core::models::{AskerPrompt, PromptOutcome, RatingState};
use crate::core::ports::{AppContext, KeyValueStore, PromptPresenter, ReviewPrompter};

/// What [`GatingController::present_if_eligible`] ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Not eligible; nothing was shown and nothing changed
    Skipped(Eligibility),
    /// No asker prompt was given; the review was requested directly
    ReviewRequested,
    /// The asker prompt was shown and answered
    Answered(PromptOutcome),
}

/// Ties the policy to live state, version and time
#[derive(Debug)]
pub struct GatingController<S, C> {
    state: PersistedState<S>,
    context: C,
    policy: EligibilityPolicy,
}

impl<S: KeyValueStore, C: AppContext> GatingController<S, C> {
    /// Create a controller over a store handle and an app context
    pub const fn new(store: S, context: C, policy: EligibilityPolicy) -> Self {
        Self {
            state: PersistedState::new(store),
            context,
            policy,
        }
    }

    /// The thresholds in force
    pub const fn policy(&self) -> &EligibilityPolicy {
        &self.policy
    }

    /// The app context in use
    pub const fn context(&self) -> &C {
        &self.context
    }

    /// Snapshot of the stored fields
    pub fn state(&self) -> RatingState {
        self.state.snapshot()
    }

    /// Evaluate eligibility against the live state, version and time
    pub fn evaluate(&self) -> Eligibility {
        let snapshot = self.state.snapshot();
        let version = self.context.current_version();
        let decision = self.policy.evaluate(&snapshot, &version, self.context.now());
        debug!("Eligibility for {version} with {} point(s): {decision}", snapshot.points);
        decision
    }

    /// Whether the prompt may be shown right now
    pub fn should_show(&self) -> bool {
        self.evaluate().is_eligible()
    }

    /// Show the prompt if eligible and record the result
    ///
    /// Without an asker prompt the review is requested straight away. With
    /// one, the presenter decides: accepting requests the review, declining
    /// does not. Either way the state is reset.
    pub fn present_if_eligible<P, R>(
        &self,
        prompt: Option<&AskerPrompt>,
        presenter: &P,
        reviewer: &R,
    ) -> anyhow::Result<Presentation>
    where
        P: PromptPresenter + ?Sized,
        R: ReviewPrompter + ?Sized,
    {
        let decision = self.evaluate();
        if !decision.is_eligible() {
            return Ok(Presentation::Skipped(decision));
        }

        let Some(prompt) = prompt else {
            reviewer.request_review();
            self.reset_state()?;
            return Ok(Presentation::ReviewRequested);
        };

        let outcome = presenter.present(prompt);
        self.apply_outcome(outcome, reviewer)?;
        Ok(Presentation::Answered(outcome))
    }

    /// Apply an answer to an asker prompt rendered by the caller
    ///
    /// The answer only counts while eligible; otherwise nothing is requested,
    /// nothing changes and the reason comes back as [`Presentation::Skipped`].
    /// Declining resets exactly like accepting: the user has to earn the
    /// points and wait out the cooldown again.
    pub fn record_outcome<R>(
        &self,
        outcome: PromptOutcome,
        reviewer: &R,
    ) -> anyhow::Result<Presentation>
    where
        R: ReviewPrompter + ?Sized,
    {
        let decision = self.evaluate();
        if !decision.is_eligible() {
            info!("Ignoring {outcome} answer: {decision}");
            return Ok(Presentation::Skipped(decision));
        }

        self.apply_outcome(outcome, reviewer)?;
        Ok(Presentation::Answered(outcome))
    }

    fn apply_outcome<R>(&self, outcome: PromptOutcome, reviewer: &R) -> anyhow::Result<()>
    where
        R: ReviewPrompter + ?Sized,
    {
        info!("Prompt {outcome}");
        if outcome.is_accepted() {
            reviewer.request_review();
        }
        self.reset_state()
    }

    /// Stamp the state as "just prompted"
    ///
    /// Sets the date to now, the version to the running build and the points
    /// to zero. Each field is written on its own.
    pub fn reset_state(&self) -> anyhow::Result<()> {
        let now = self.context.now();
        let version = self.context.current_version();
        self.state.set_last_checked(now)?;
        self.state.set_last_tested_version(&version)?;
        self.state.set_points(0)?;
        info!("Reset rating state at {} for {version}", now.to_rfc3339());
        Ok(())
    }

    /// Add (or, with a negative delta, remove) points
    ///
    /// The counter saturates at zero and never goes negative. Returns the new
    /// total.
    pub fn add_points(&self, delta: i64) -> anyhow::Result<u64> {
        let total = self.state.points().saturating_add_signed(delta);
        self.state.set_points(total)?;
        debug!("Added {delta} point(s), total {total}");
        Ok(total)
    }

    /// Set the out-of-band flag
    pub fn set_remote_should_show(&self, flag: bool) -> anyhow::Result<()> {
        self.state.set_remote_should_show(flag)
    }

    /// Read the out-of-band flag
    pub fn remote_should_show(&self) -> bool {
        self.state.remote_should_show()
    }
}
