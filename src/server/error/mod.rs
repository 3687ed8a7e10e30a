//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by every handler. It wraps the
//! domain-specific errors and implements `IntoResponse`, so failures reach the
//! client as an `ErrorDto { error, description }` body.

pub mod config;
pub mod inbound_route;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, inbound_route::InboundRouteError},
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration or seed loading error during startup.
    ///
    /// Always results in 500 Internal Server Error.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Route rule violation.
    ///
    /// Delegates to `InboundRouteError::into_response()` for the status code
    /// and error code.
    #[error(transparent)]
    InboundRouteErr(#[from] InboundRouteError),

    /// The `module`/`cmd` pair does not name an operation for this method.
    ///
    /// Results in 404 Not Found with code `unknown_command`.
    #[error("Unknown command {module}/{cmd}")]
    UnknownCommand { module: String, cmd: String },

    /// Invalid request error, such as a body that does not decode.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message, such as exhausted route ids.
    ///
    /// Results in 500 Internal Server Error. The message is logged but a
    /// generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::InboundRouteErr(err) => err.into_response(),
            Self::UnknownCommand { .. } => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto::new("unknown_command", self.to_string())),
            )
                .into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new("bad_request", msg))).into_response()
            }
            Self::InternalError(msg) => {
                InternalServerError(format!("Internal error: {}", msg)).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 Internal Server Error.
///
/// The full message is logged, the client only sees a generic description.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("internal_error", "Internal server error")),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_email_maps_to_conflict() {
        let response =
            AppError::from(InboundRouteError::DuplicateEmail("a@b.com".to_string())).into_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn unknown_command_maps_to_not_found() {
        let response = AppError::UnknownCommand {
            module: "Nope".to_string(),
            cmd: "nothing".to_string(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn route_errors_carry_their_codes() {
        assert_eq!(
            InboundRouteError::DuplicateEmail(String::new()).code(),
            "duplicate_email"
        );
        assert_eq!(InboundRouteError::RouteNotFound(1).status(), StatusCode::NOT_FOUND);
        assert_eq!(InboundRouteError::UnknownQueue(1).status(), StatusCode::BAD_REQUEST);
    }
}
