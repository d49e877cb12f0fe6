//! Draft-enrichment adapter: three independent AI capabilities with isolated
//! pending/result/error state.
//!
//! The adapter is split sans-IO so the single-threaded UI loop can keep
//! several requests in flight: `request_*` validates the precondition and
//! builds the client request, `resolve_*` applies a finished call, and the
//! `generate_*` drivers compose the two around an [`AiClient`] call. A
//! resolution from a superseded request is discarded — each slot tags requests
//! with a monotonic sequence number and only the latest ticket may land.

use mercato_core::CollaboratorError;
use mercato_wizard::{DraftPatch, ProductDraft};

use crate::client::{
    AiClient, BuildProfileRequest, ContentResponse, GenerateContentRequest, GenerateImageRequest,
    ImageResponse, ProductSnapshot, ProfileResponse,
};

const PROFILE_PRECONDITION: &str = "Product name and price are required for AI suggestions";
const COPY_PRECONDITION: &str = "Product name and price are required for marketing copy generation";
const IMAGE_PRECONDITION: &str = "Product name is required for image generation";

const PROFILE_FALLBACK: &str = "Failed to generate AI suggestions";
const COPY_FALLBACK: &str = "Failed to generate marketing copy";
const IMAGE_FALLBACK: &str = "Failed to generate product image";

/// Capability-scoped handle for an issued request. A ticket older than the
/// slot's latest issued request no longer resolves.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Isolated state for one enrichment capability.
#[derive(Debug, Clone)]
pub struct SuggestionSlot<T> {
    result: Option<T>,
    error: Option<String>,
    pending: bool,
    issued: u64,
}

impl<T> Default for SuggestionSlot<T> {
    fn default() -> Self {
        Self {
            result: None,
            error: None,
            pending: false,
            issued: 0,
        }
    }
}

impl<T> SuggestionSlot<T> {
    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    fn begin(&mut self) -> RequestTicket {
        self.issued += 1;
        self.pending = true;
        RequestTicket(self.issued)
    }

    /// Precondition violation: store the message, touch nothing else. No
    /// request is issued, so pending and any prior result stay as they were.
    fn fail_precondition(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    fn resolve(&mut self, ticket: RequestTicket, outcome: Result<T, CollaboratorError>, fallback: &str) {
        if ticket.0 != self.issued {
            // Superseded by a newer request for this capability.
            return;
        }
        self.pending = false;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.message_or(fallback).to_string());
                self.result = None;
            }
        }
    }

    fn clear(&mut self) {
        self.result = None;
        self.error = None;
    }
}

/// Profile fields a suggestion can be applied from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SuggestionField {
    Description,
    Category,
}

/// Adapter state for the wizard's three AI enrichment capabilities.
#[derive(Debug, Clone, Default)]
pub struct ProductSuggestions {
    profile: SuggestionSlot<ProfileResponse>,
    content: SuggestionSlot<ContentResponse>,
    image: SuggestionSlot<ImageResponse>,
}

impl ProductSuggestions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile(&self) -> &SuggestionSlot<ProfileResponse> {
        &self.profile
    }

    pub fn marketing_copy(&self) -> &SuggestionSlot<ContentResponse> {
        &self.content
    }

    pub fn image_generation(&self) -> &SuggestionSlot<ImageResponse> {
        &self.image
    }

    /// Start a profile suggestion request. Returns `None` and stores the
    /// precondition message when the draft lacks a name or a positive price —
    /// no client call is issued in that case.
    pub fn request_profile(
        &mut self,
        draft: &ProductDraft,
    ) -> Option<(RequestTicket, BuildProfileRequest)> {
        if !has_name_and_price(draft) {
            self.profile.fail_precondition(PROFILE_PRECONDITION);
            return None;
        }
        let request = BuildProfileRequest {
            product: ProductSnapshot {
                price: Some(draft.price),
                stock: Some(draft.stock),
                sku: Some(draft.sku.clone()),
                description: Some(draft.description.clone()),
                category: Some(draft.category.clone()),
                ..ProductSnapshot::unsaved(draft.name.clone())
            },
            infer_missing: true,
        };
        Some((self.profile.begin(), request))
    }

    pub fn resolve_profile(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<ProfileResponse, CollaboratorError>,
    ) {
        self.profile.resolve(ticket, outcome, PROFILE_FALLBACK);
    }

    /// Start a marketing-copy request; same name/price precondition as the
    /// profile capability, with its own message and state slot.
    pub fn request_marketing_copy(
        &mut self,
        draft: &ProductDraft,
    ) -> Option<(RequestTicket, GenerateContentRequest)> {
        if !has_name_and_price(draft) {
            self.content.fail_precondition(COPY_PRECONDITION);
            return None;
        }
        let request = GenerateContentRequest {
            product: ProductSnapshot {
                price: Some(draft.price),
                ..ProductSnapshot::unsaved(draft.name.clone())
            },
        };
        Some((self.content.begin(), request))
    }

    pub fn resolve_marketing_copy(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<ContentResponse, CollaboratorError>,
    ) {
        self.content.resolve(ticket, outcome, COPY_FALLBACK);
    }

    /// Start an image-generation request; only a name is required.
    pub fn request_image(
        &mut self,
        draft: &ProductDraft,
        prompt: Option<&str>,
    ) -> Option<(RequestTicket, GenerateImageRequest)> {
        if draft.name.is_empty() {
            self.image.fail_precondition(IMAGE_PRECONDITION);
            return None;
        }
        let request = GenerateImageRequest {
            product: ProductSnapshot {
                description: Some(draft.description.clone()),
                category: Some(draft.category.clone()),
                ..ProductSnapshot::unsaved(draft.name.clone())
            },
            prompt: prompt.filter(|p| !p.is_empty()).map(str::to_string),
            count: 1,
        };
        Some((self.image.begin(), request))
    }

    pub fn resolve_image(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<ImageResponse, CollaboratorError>,
    ) {
        self.image.resolve(ticket, outcome, IMAGE_FALLBACK);
    }

    /// Request + client call + resolve for the profile capability.
    pub async fn generate_suggestions(&mut self, client: &dyn AiClient, draft: &ProductDraft) {
        if let Some((ticket, request)) = self.request_profile(draft) {
            let outcome = client.build_profile(request).await;
            if let Err(err) = &outcome {
                tracing::warn!(error = %err, "profile suggestion call failed");
            }
            self.resolve_profile(ticket, outcome);
        }
    }

    /// Request + client call + resolve for the marketing-copy capability.
    pub async fn generate_marketing_copy(&mut self, client: &dyn AiClient, draft: &ProductDraft) {
        if let Some((ticket, request)) = self.request_marketing_copy(draft) {
            let outcome = client.generate_content(request).await;
            if let Err(err) = &outcome {
                tracing::warn!(error = %err, "marketing copy call failed");
            }
            self.resolve_marketing_copy(ticket, outcome);
        }
    }

    /// Request + client call + resolve for the image capability.
    pub async fn generate_product_image(
        &mut self,
        client: &dyn AiClient,
        draft: &ProductDraft,
        prompt: Option<&str>,
    ) {
        if let Some((ticket, request)) = self.request_image(draft, prompt) {
            let outcome = client.generate_image(request).await;
            if let Err(err) = &outcome {
                tracing::warn!(error = %err, "image generation call failed");
            }
            self.resolve_image(ticket, outcome);
        }
    }

    /// Reset all three capabilities' result and error state. Pending markers
    /// and sequence counters are untouched: an in-flight call may still land.
    pub fn clear_suggestions(&mut self) {
        self.profile.clear();
        self.content.clear();
        self.image.clear();
    }

    /// Patch carrying one stored profile suggestion, for the wizard's
    /// `update_draft`. `None` when no suggestion is stored for the field.
    pub fn suggestion_patch(&self, field: SuggestionField) -> Option<DraftPatch> {
        let profile = &self.profile.result()?.profile;
        let suggested = match field {
            SuggestionField::Description => profile.description.as_ref(),
            SuggestionField::Category => profile.category.as_ref(),
        }?;
        Some(match field {
            SuggestionField::Description => DraftPatch::description(suggested.value.clone()),
            SuggestionField::Category => DraftPatch::category(suggested.value.clone()),
        })
    }

    /// Patch merging the generated copy into the draft's marketing-copy
    /// field, when non-empty copy is stored.
    pub fn marketing_copy_patch(&self) -> Option<DraftPatch> {
        let content = self.content.result()?;
        if content.copy.is_empty() {
            return None;
        }
        Some(DraftPatch::marketing_copy(content.copy.clone()))
    }
}

fn has_name_and_price(draft: &ProductDraft) -> bool {
    !draft.name.is_empty() && draft.price > 0.0
}
