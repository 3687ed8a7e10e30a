use reqwasm::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::{
    client::model::error::ApiError,
    model::{
        ajax::{AjaxCommand, AJAX_CONTROLLER_PATH},
        api::ErrorDto,
    },
};

/// Build the URL of an ajax command
pub fn ajax_url(command: AjaxCommand) -> String {
    format!("{}?{}", AJAX_CONTROLLER_PATH, command.query())
}

/// Helper function to parse API responses with consistent error handling
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::transport(format!("Failed to parse response: {}", e)))
    } else {
        Err(parse_error(status, response).await)
    }
}

/// Helper function to parse empty success responses (204 No Content, 201 Created, etc.)
pub async fn parse_empty_response(response: Response) -> Result<(), ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(parse_error(status, response).await)
    }
}

/// Read an error body once and keep whatever `ErrorDto` fields it carries
async fn parse_error(status: u64, response: Response) -> ApiError {
    let body = response
        .text()
        .await
        .ok()
        .and_then(|text| serde_json::from_str::<ErrorDto>(&text).ok());

    ApiError::from_response(
        status,
        body,
        format!("Request failed with status code {}", status),
    )
}

/// Create a GET request with credentials
pub fn get(url: &str) -> Request {
    Request::get(url).credentials(reqwasm::http::RequestCredentials::Include)
}

/// Create a POST request with credentials and JSON content type
pub fn post(url: &str) -> Request {
    Request::post(url)
        .credentials(reqwasm::http::RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

/// Send a request and handle common errors
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request
        .send()
        .await
        .map_err(|e| ApiError::transport(format!("Network Error: {}", e)))
}

/// Serialize a payload to JSON string
pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload)
        .map_err(|e| ApiError::transport(format!("Failed to serialize request: {}", e)))
}
