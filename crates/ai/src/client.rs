//! AI client collaborator contract: request/response shapes and the opaque
//! async call surface.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use mercato_core::CollaboratorError;

/// Sentinel product id sent while the draft has no persisted identity.
pub const PLACEHOLDER_PRODUCT_ID: &str = "temp-product-id";

/// Sentinel tenant id; the platform substitutes the real tenant server-side.
pub const PLACEHOLDER_TENANT_ID: &str = "temp-tenant-id";

/// Normalized product snapshot sent with enrichment requests.
///
/// Each capability sends a different field subset; absent fields are omitted
/// from the payload entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSnapshot {
    pub id: String,
    pub tenant_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ProductSnapshot {
    /// Snapshot carrying only the placeholder identity and a name.
    pub fn unsaved(name: impl Into<String>) -> Self {
        Self {
            id: PLACEHOLDER_PRODUCT_ID.to_string(),
            tenant_id: PLACEHOLDER_TENANT_ID.to_string(),
            name: name.into(),
            price: None,
            stock: None,
            sku: None,
            description: None,
            category: None,
        }
    }
}

/// Request: infer a product profile (description, category, ...) from the
/// known fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildProfileRequest {
    pub product: ProductSnapshot,
    pub infer_missing: bool,
}

/// Request: generate marketing copy for the product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub product: ProductSnapshot,
}

/// Request: generate product images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageRequest {
    pub product: ProductSnapshot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    pub count: u32,
}

/// A single inferred field with the model's confidence in \[0, 1\].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedValue {
    pub value: String,
    pub confidence: f64,
}

/// Inferred profile fields. Absent fields mean the model offered nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<SuggestedValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<SuggestedValue>,
}

/// Response to [`BuildProfileRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub profile: ProductProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_confidence: Option<f64>,
}

/// Response to [`GenerateContentRequest`]: the copy text plus the assumptions
/// the model made about the product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentResponse {
    pub copy: String,
    #[serde(default)]
    pub assumptions: Vec<String>,
}

/// Response to [`GenerateImageRequest`]: image generation runs as a remote
/// task, so the response is a task handle rather than image data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    pub task_id: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<u64>,
}

/// Opaque AI collaborator.
///
/// The only contract is resolution or rejection with a [`CollaboratorError`];
/// timeouts, retries and transport belong to the implementation.
#[async_trait]
pub trait AiClient: Send + Sync {
    async fn build_profile(
        &self,
        request: BuildProfileRequest,
    ) -> Result<ProfileResponse, CollaboratorError>;

    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<ContentResponse, CollaboratorError>;

    async fn generate_image(
        &self,
        request: GenerateImageRequest,
    ) -> Result<ImageResponse, CollaboratorError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_omits_absent_fields_from_payload() {
        let snapshot = ProductSnapshot::unsaved("Widget");
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["id"], "temp-product-id");
        assert_eq!(json["tenantId"], "temp-tenant-id");
        assert!(json.get("price").is_none());
        assert!(json.get("description").is_none());
    }

    #[test]
    fn content_response_defaults_assumptions_to_empty() {
        let response: ContentResponse = serde_json::from_str(r#"{"copy":"Buy it!"}"#).unwrap();
        assert!(response.assumptions.is_empty());
    }

    #[test]
    fn image_response_uses_camel_case_wire_names() {
        let json = r#"{"taskId":"t-1","status":"queued","estimatedTime":30}"#;
        let response: ImageResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.task_id, "t-1");
        assert_eq!(response.estimated_time, Some(30));
    }
}
