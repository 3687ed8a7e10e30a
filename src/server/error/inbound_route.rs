use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{api::ErrorDto, inbound_route::DUPLICATE_EMAIL_ERROR};

#[derive(Error, Debug)]
pub enum InboundRouteError {
    /// Another route already uses this address, compared case-insensitively.
    #[error("The email address {0} already has an inbound route")]
    DuplicateEmail(String),

    #[error("{0:?} is not a valid email address")]
    InvalidEmail(String),

    #[error("Inbound route {0} does not exist")]
    RouteNotFound(i32),

    #[error("Queue {0} does not exist")]
    UnknownQueue(i32),

    /// No campaign with this id, or the campaign is not of type `inbound`.
    #[error("Inbound campaign {0} does not exist")]
    UnknownCampaign(i32),
}

impl InboundRouteError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateEmail(_) => DUPLICATE_EMAIL_ERROR,
            Self::InvalidEmail(_) => "invalid_email",
            Self::RouteNotFound(_) => "route_not_found",
            Self::UnknownQueue(_) => "unknown_queue",
            Self::UnknownCampaign(_) => "unknown_campaign",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::DuplicateEmail(_) => StatusCode::CONFLICT,
            Self::RouteNotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidEmail(_) | Self::UnknownQueue(_) | Self::UnknownCampaign(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

/// Converts route errors into HTTP responses.
///
/// The body carries the machine-readable code in `error` and the display text
/// in `description`, which the dialog shows verbatim.
///
/// # Returns
/// - 400 Bad Request - Invalid email, unknown queue or campaign
/// - 404 Not Found - Route id does not exist
/// - 409 Conflict - Email address already routed
impl IntoResponse for InboundRouteError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorDto::new(self.code(), self.to_string())),
        )
            .into_response()
    }
}
