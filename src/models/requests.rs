use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Longest id Appwrite accepts for a document
const MAX_DOCUMENT_ID_LEN: usize = 36;

/// Request to find matches
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(length(min = 1), custom(function = "validate_document_id"))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
}

/// Appwrite document ids: up to 36 of `a-z A-Z 0-9 . - _`, not starting with a special character
fn validate_document_id(id: &str) -> Result<(), ValidationError> {
    let mut chars = id.chars();
    let starts_alphanumeric = chars.next().map_or(true, |c| c.is_ascii_alphanumeric());
    let rest_allowed = chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'));

    if id.len() > MAX_DOCUMENT_ID_LEN || !starts_alphanumeric || !rest_allowed {
        return Err(ValidationError::new("document_id"));
    }
    Ok(())
}
