//! `mercato-ai`
//!
//! **Responsibility:** AI draft-enrichment boundary for the product wizard.
//!
//! This crate is intentionally **not** part of the domain model:
//! - It never mutates the draft directly; suggestions become [`DraftPatch`]es
//!   the caller feeds through the wizard.
//! - It treats the AI client as an opaque remote collaborator.
//! - Each capability (profile, marketing copy, image generation) keeps its own
//!   isolated pending/result/error slot, so one failing or slow call never
//!   blocks the others.
//!
//! [`DraftPatch`]: mercato_wizard::DraftPatch

pub mod client;
pub mod suggestions;

pub use client::{
    AiClient, BuildProfileRequest, ContentResponse, GenerateContentRequest, GenerateImageRequest,
    ImageResponse, ProductProfile, ProductSnapshot, ProfileResponse, SuggestedValue,
    PLACEHOLDER_PRODUCT_ID, PLACEHOLDER_TENANT_ID,
};
pub use suggestions::{ProductSuggestions, RequestTicket, SuggestionField, SuggestionSlot};
