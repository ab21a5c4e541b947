//! Resource name parsing for platform records.
//!
//! Records are addressed either by bare numeric ID (`"42"`) or by resource
//! name (`"ai-platforms/42"`).

use thiserror::Error;

/// Collection segment of a platform resource name.
pub const RESOURCE_COLLECTION: &str = "ai-platforms";

/// Errors raised while parsing a platform reference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceNameError {
    #[error("invalid resource name '{0}', expected 'ai-platforms/{{id}}'")]
    InvalidFormat(String),

    #[error("invalid platform id '{id}': {reason}")]
    InvalidId { id: String, reason: String },
}

/// Render the resource name for a platform ID.
pub fn platform_resource_name(id: i32) -> String {
    format!("{RESOURCE_COLLECTION}/{id}")
}

/// Resolve a platform reference (bare ID or resource name) to its ID.
pub fn parse_platform_ref(reference: &str) -> Result<i32, ResourceNameError> {
    let reference = reference.trim();
    if !reference.contains('/') {
        // Only an all-digit string counts as a bare ID
        if reference.is_empty() || !reference.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ResourceNameError::InvalidFormat(reference.to_string()));
        }
        return parse_id(reference);
    }

    let parts: Vec<&str> = reference.split('/').collect();
    if parts.len() != 2 || parts[0] != RESOURCE_COLLECTION {
        return Err(ResourceNameError::InvalidFormat(reference.to_string()));
    }
    parse_id(parts[1])
}

fn parse_id(raw: &str) -> Result<i32, ResourceNameError> {
    raw.parse::<i32>()
        .map_err(|e| ResourceNameError::InvalidId {
            id: raw.to_string(),
            reason: e.to_string(),
        })
}
