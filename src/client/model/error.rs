use crate::model::api::ErrorDto;

/// Failure of an ajax call.
///
/// Transport failures carry status `0` and no server body. Application
/// failures carry the HTTP status plus whatever `ErrorDto` the server sent.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub status: u64,
    /// Machine-readable code from the error body, e.g. `duplicate_email`
    pub code: Option<String>,
    /// Human-readable description from the error body
    pub description: Option<String>,
    /// Transport-level message
    pub message: String,
}

impl ApiError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: 0,
            code: None,
            description: None,
            message: message.into(),
        }
    }

    pub fn from_response(status: u64, body: Option<ErrorDto>, fallback: String) -> Self {
        let (code, description) = match body {
            Some(dto) => (
                Some(dto.error).filter(|code| !code.is_empty()),
                dto.description.filter(|d| !d.is_empty()),
            ),
            None => (None, None),
        };

        Self {
            status,
            code,
            description,
            message: fallback,
        }
    }

    pub fn has_code(&self, code: &str) -> bool {
        self.code.as_deref() == Some(code)
    }

    /// Best message to show the user: the server description when present,
    /// the transport message otherwise.
    pub fn display_message(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.message)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_message())
    }
}
