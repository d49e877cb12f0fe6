//! Product creation wizard module.
//!
//! A five-step guided data-entry flow: the wizard accumulates a [`ProductDraft`]
//! across steps, gates forward navigation on per-step completeness, and hands
//! the finished draft to a caller-supplied [`CompletionHandler`]. All state
//! transitions are pure; the completion call is the single external side
//! effect.

pub mod draft;
pub mod wizard;

pub use draft::{DraftPatch, ProductDraft};
pub use wizard::{CompletionHandler, FinishOutcome, ProductWizard, WizardStep, TOTAL_STEPS};
