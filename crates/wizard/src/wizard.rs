use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use mercato_core::CollaboratorError;

use crate::draft::{DraftPatch, ProductDraft};

/// Number of steps in the creation flow.
pub const TOTAL_STEPS: u8 = 5;

/// Caller-supplied completion collaborator.
///
/// Invoked exactly once per successful [`ProductWizard::finish`] with the full
/// accumulated draft. Persistence, navigation and everything downstream of
/// creation live behind this trait.
#[async_trait]
pub trait CompletionHandler: Send + Sync {
    async fn complete(&self, draft: &ProductDraft) -> Result<(), CollaboratorError>;
}

/// Steps of the creation flow, in order.
///
/// Using an enum keeps the current step inside `[1, 5]` by construction, so
/// direct jumps (deep links, tests) cannot produce an out-of-range state.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    BasicInfo,
    DescriptionCategory,
    Images,
    Marketing,
    Review,
}

impl WizardStep {
    /// 1-based position in the flow.
    pub fn index(self) -> u8 {
        match self {
            WizardStep::BasicInfo => 1,
            WizardStep::DescriptionCategory => 2,
            WizardStep::Images => 3,
            WizardStep::Marketing => 4,
            WizardStep::Review => 5,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(WizardStep::BasicInfo),
            2 => Some(WizardStep::DescriptionCategory),
            3 => Some(WizardStep::Images),
            4 => Some(WizardStep::Marketing),
            5 => Some(WizardStep::Review),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "Basic Info",
            WizardStep::DescriptionCategory => "Description & Category",
            WizardStep::Images => "Images",
            WizardStep::Marketing => "Marketing Content",
            WizardStep::Review => "Review",
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }
}

/// Outcome of [`ProductWizard::finish`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FinishOutcome {
    /// The completion handler was invoked and resolved.
    Completed,
    /// The current step's validation gate failed; the handler was not invoked.
    Blocked,
}

/// Finite-step form state machine for creating a product.
///
/// Accumulates a [`ProductDraft`] across five steps, enforces step-level
/// completeness before forward navigation, and invokes the completion handler
/// only when the terminal step validates. Every operation except `finish` is
/// a pure state transition.
#[derive(Debug)]
pub struct ProductWizard<H> {
    step: WizardStep,
    draft: ProductDraft,
    submitting: bool,
    handler: H,
}

impl<H: CompletionHandler> ProductWizard<H> {
    pub fn new(handler: H) -> Self {
        Self {
            step: WizardStep::BasicInfo,
            draft: ProductDraft::default(),
            submitting: false,
            handler,
        }
    }

    pub fn current_step(&self) -> WizardStep {
        self.step
    }

    pub fn total_steps(&self) -> u8 {
        TOTAL_STEPS
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    /// True only while the completion handler is being awaited.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Shallow-merge a partial field set into the draft. Does not affect the
    /// current step.
    pub fn update_draft(&mut self, patch: DraftPatch) {
        self.draft.merge(patch);
    }

    /// Direct jump (deep-linking, tests). The step type already guarantees
    /// the `[1, 5]` range; no validation gate applies.
    pub fn set_current_step(&mut self, step: WizardStep) {
        self.step = step;
    }

    /// Completion gate for the CURRENT step, evaluated against the current
    /// draft. Gates both `next_step` and `finish`.
    pub fn can_proceed(&self) -> bool {
        Self::validate_step(self.step, &self.draft)
    }

    /// Advance one step if the current step validates. Silent no-op at the
    /// terminal step or when validation fails.
    pub fn next_step(&mut self) {
        if !self.can_proceed() {
            return;
        }
        if let Some(next) = self.step.next() {
            tracing::debug!(from = self.step.index(), to = next.index(), "wizard step forward");
            self.step = next;
        }
    }

    /// Go back one step. No validation required; silent no-op at step 1.
    pub fn previous_step(&mut self) {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
    }

    /// Linear progress percentage: step 1 = 0%, step 5 = 100%.
    pub fn progress(&self) -> f64 {
        f64::from(self.step.index() - 1) / f64::from(TOTAL_STEPS - 1) * 100.0
    }

    /// Invoke the completion handler with the full current draft.
    ///
    /// No-op (handler not invoked) when the current step's gate fails. The
    /// submitting flag is cleared whether the handler resolves or rejects;
    /// on rejection the draft and step survive untouched so the caller can
    /// retry.
    pub async fn finish(&mut self) -> Result<FinishOutcome, CollaboratorError> {
        if !self.can_proceed() {
            return Ok(FinishOutcome::Blocked);
        }

        self.submitting = true;
        let result = self.handler.complete(&self.draft).await;
        self.submitting = false;

        match result {
            Ok(()) => {
                tracing::info!(name = %self.draft.name, "product draft completed");
                Ok(FinishOutcome::Completed)
            }
            Err(err) => {
                tracing::warn!(error = %err, "product completion handler failed");
                Err(err)
            }
        }
    }

    /// Step validation rule table.
    ///
    /// Steps 3-5 add no required fields on top of step 2: images and
    /// marketing content are optional enrichments, review is read-only.
    fn validate_step(step: WizardStep, draft: &ProductDraft) -> bool {
        let basic_info = !draft.name.trim().is_empty() && draft.price > 0.0 && draft.stock >= 0;
        match step {
            WizardStep::BasicInfo => basic_info,
            _ => {
                basic_info
                    && !draft.description.trim().is_empty()
                    && !draft.category.trim().is_empty()
            }
        }
    }
}
