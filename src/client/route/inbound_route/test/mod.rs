use std::cell::RefCell;

use tokio_util::sync::CancellationToken;

use crate::{
    client::{
        api::InboundRouteApi,
        i18n::{key, Catalog, Translate},
        model::{error::ApiError, notification::ErrorReporter},
    },
    model::{
        api::ErrorDto,
        inbound_route::{
            AssignQueueDto, CreateEmailRouteDto, DestinationDto, DestinationType,
            is_valid_email, InboundRouteDto, QueueAssignmentDto, ReferenceItemDto,
            DUPLICATE_EMAIL_ERROR,
        },
    },
};

use super::{
    form::{FormError, FormErrors, FormField, FormState, Mode},
    loader::{load_campaigns, load_queues, ReferenceList},
    submission::{submit, SubmissionOutcome, SubmissionState, SubmitRequest},
};

mod form;
mod loader;

/// In-memory `InboundRouteApi` that records every write request
struct MockInboundRouteApi {
    campaigns: Result<Vec<ReferenceItemDto>, ApiError>,
    queues: Result<Vec<ReferenceItemDto>, ApiError>,
    response: RefCell<Result<(), ApiError>>,
    requests: RefCell<Vec<SubmitRequest>>,
    /// Cancelled from inside the write call, as if the dialog closed mid-flight
    cancel_on_send: Option<CancellationToken>,
}

impl MockInboundRouteApi {
    fn new() -> Self {
        Self {
            campaigns: Ok(vec![item(7, "Support"), item(9, "Sales")]),
            queues: Ok(vec![item(3, "Tier 1"), item(5, "Tier 2")]),
            response: RefCell::new(Ok(())),
            requests: RefCell::new(Vec::new()),
            cancel_on_send: None,
        }
    }

    fn responding(self, response: Result<(), ApiError>) -> Self {
        *self.response.borrow_mut() = response;
        self
    }

    fn requests(&self) -> Vec<SubmitRequest> {
        self.requests.borrow().clone()
    }

    fn record(&self, request: SubmitRequest) -> Result<(), ApiError> {
        self.requests.borrow_mut().push(request);
        if let Some(token) = &self.cancel_on_send {
            token.cancel();
        }
        self.response.borrow().clone()
    }
}

impl InboundRouteApi for MockInboundRouteApi {
    async fn list_campaigns(&self) -> Result<Vec<ReferenceItemDto>, ApiError> {
        self.campaigns.clone()
    }

    async fn list_queues(&self) -> Result<Vec<ReferenceItemDto>, ApiError> {
        self.queues.clone()
    }

    async fn list_routes(&self) -> Result<Vec<InboundRouteDto>, ApiError> {
        Ok(Vec::new())
    }

    async fn assign_queue(&self, payload: &AssignQueueDto) -> Result<(), ApiError> {
        self.record(SubmitRequest::AssignQueue(payload.clone()))
    }

    async fn create_email(&self, payload: &CreateEmailRouteDto) -> Result<(), ApiError> {
        self.record(SubmitRequest::CreateEmail(payload.clone()))
    }
}

/// Error reporter that keeps every message it was handed
#[derive(Default)]
struct RecordingReporter {
    messages: RefCell<Vec<String>>,
}

impl RecordingReporter {
    fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

fn item(id: i32, name: &str) -> ReferenceItemDto {
    ReferenceItemDto {
        id,
        name: name.to_string(),
    }
}

fn existing_route() -> InboundRouteDto {
    InboundRouteDto {
        route_id: Some(42),
        email: "support@example.com".to_string(),
        campaign_id: Some(7),
        queue_id: Some(3),
    }
}

/// Create-mode form with every field filled in
fn filled_create_form(email: &str, campaign_id: i32, queue_id: i32) -> FormState {
    let mut form = FormState::create();
    form.set_email(email);
    form.select_campaign(&campaign_id.to_string(), None);
    form.select_queue(&queue_id.to_string(), None);
    form
}

fn server_error(status: u64, code: &str, description: &str) -> ApiError {
    ApiError::from_response(
        status,
        Some(ErrorDto::new(code, description)),
        format!("Request failed with status code {}", status),
    )
}
