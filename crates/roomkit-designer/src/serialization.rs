//! Design and catalog documents.
//!
//! Designs are stored as pretty-printed JSON using the same camelCase field
//! names the REST backend uses, so a file written here can be posted to
//! `/designs` unchanged. The backend wraps every response in an envelope:
//!
//! ```json
//! { "success": true, "count": 2, "data": [ ... ] }
//! { "success": false, "message": ["Width must be positive"] }
//! ```

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

use roomkit_core::{Design, FurnitureTemplate, PersistenceError};

/// Response envelope used by the furniture and design endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<ApiMessage>,
}

/// Error text in an envelope: a single message or a list of validation
/// messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiMessage {
    Text(String),
    List(Vec<String>),
}

impl ApiMessage {
    /// All messages joined with `"; "`.
    pub fn joined(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::List(items) => items.join("; "),
        }
    }
}

impl<T> ApiEnvelope<T> {
    /// Successful envelope around `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            count: None,
            data: Some(data),
            message: None,
        }
    }

    /// Unwraps the payload. `success: false` becomes
    /// [`PersistenceError::Rejected`]; a successful envelope without data
    /// becomes [`PersistenceError::MissingData`].
    pub fn into_result(self) -> Result<T, PersistenceError> {
        if !self.success {
            let message = self
                .message
                .map(|m| m.joined())
                .unwrap_or_else(|| "unknown error".to_string());
            return Err(PersistenceError::Rejected { message });
        }
        self.data.ok_or(PersistenceError::MissingData)
    }
}

/// Parses an envelope from a response body and unwraps its payload.
pub fn parse_envelope<T: DeserializeOwned>(body: &str) -> Result<T, PersistenceError> {
    let envelope: ApiEnvelope<T> = serde_json::from_str(body)?;
    envelope.into_result()
}

/// Save design to file
pub fn save_design_file(design: &Design, path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(design).context("Failed to serialize design")?;

    std::fs::write(path.as_ref(), json).context("Failed to write design file")?;

    Ok(())
}

/// Load design from file. Accepts a bare design or a `{success, data}`
/// envelope as returned by `GET /designs/:id`.
pub fn load_design_file(path: impl AsRef<Path>) -> Result<Design> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read design file {}", path.display()))?;

    let value: serde_json::Value =
        serde_json::from_str(&content).context("Failed to parse design file")?;
    let design = if value.get("success").is_some() {
        serde_json::from_value::<ApiEnvelope<Design>>(value)
            .context("Failed to parse design envelope")?
            .into_result()?
    } else {
        serde_json::from_value(value).context("Failed to parse design file")?
    };

    tracing::debug!(
        "Read design '{}' ({} items) from {}",
        design.name,
        design.item_count(),
        path.display()
    );
    Ok(design)
}

/// Load catalog templates from file. Accepts a bare JSON array or a
/// `{success, data}` envelope as returned by `GET /furniture`.
pub fn load_catalog_file(path: impl AsRef<Path>) -> Result<Vec<FurnitureTemplate>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file {}", path.display()))?;

    let value: serde_json::Value =
        serde_json::from_str(&content).context("Failed to parse catalog file")?;
    let templates = if value.is_array() {
        serde_json::from_value(value).context("Failed to parse catalog entries")?
    } else {
        serde_json::from_value::<ApiEnvelope<Vec<FurnitureTemplate>>>(value)
            .context("Failed to parse catalog envelope")?
            .into_result()?
    };
    Ok(templates)
}
