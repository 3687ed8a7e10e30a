use serde::{Deserialize, Serialize};

/// Error body returned by every ajax endpoint on a non-2xx response.
///
/// `error` is a machine-readable code such as `duplicate_email`, `description`
/// is the human-readable text shown to the user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorDto {
    #[serde(default)]
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            description: Some(description.into()),
        }
    }
}
