//! Submission of the editor form.
//!
//! A submission moves through `Idle -> Submitting -> Succeeded | Failed`.
//! `begin_submit` is the only way into `Submitting`, which closes the gate for
//! a second click while a request is in flight. `finish_submit` maps the
//! response onto the form: success closes the dialog, a duplicate email on
//! create becomes an inline error, anything else goes to the error reporter.

use dioxus_logger::tracing;
use tokio_util::sync::CancellationToken;

use crate::{
    client::{
        api::InboundRouteApi,
        i18n::{key, Translate},
        model::{error::ApiError, notification::ErrorReporter},
    },
    model::inbound_route::{
        AssignQueueDto, CreateEmailRouteDto, DestinationDto, DestinationType, QueueAssignmentDto,
        DUPLICATE_EMAIL_ERROR,
    },
};

use super::form::{FormField, FormState, Mode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// The request a submission sends, chosen by the form's mode
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitRequest {
    AssignQueue(AssignQueueDto),
    CreateEmail(CreateEmailRouteDto),
}

impl SubmitRequest {
    pub async fn send<A: InboundRouteApi>(&self, api: &A) -> Result<(), ApiError> {
        match self {
            Self::AssignQueue(payload) => api.assign_queue(payload).await,
            Self::CreateEmail(payload) => api.create_email(payload).await,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Request succeeded; the dialog should close
    Close,
    /// Server rejected the email; the message is shown under the email input
    InlineError,
    /// Failure handed to the error reporter with this message
    Reported(String),
    /// The dialog went away before the response arrived
    Cancelled,
    /// Nothing was sent, or a response arrived with no submission in flight
    Skipped,
}

impl FormState {
    /// Start a submission if the form allows it
    ///
    /// # Returns
    /// - `Some(SubmitRequest)` - The request to send; the form is now `Submitting`
    /// - `None` - The gate is closed or a request is already in flight
    pub fn begin_submit(&mut self) -> Option<SubmitRequest> {
        if !self.can_submit() {
            return None;
        }

        let queue_id = self.selected_queue_id()?;
        let campaign_id = self.selected_campaign_id()?;

        let request = match self.mode() {
            Mode::Edit => SubmitRequest::AssignQueue(AssignQueueDto {
                id: self.route_id()?,
                queue: QueueAssignmentDto {
                    id: queue_id,
                    campaign_id,
                },
            }),
            Mode::Create => SubmitRequest::CreateEmail(CreateEmailRouteDto {
                email: self.email().to_string(),
                destination: DestinationDto {
                    kind: DestinationType::Queue,
                    id: queue_id,
                    campaign_id,
                },
            }),
        };

        self.submission = SubmissionState::Submitting;
        Some(request)
    }

    /// Apply the response of the in-flight submission
    ///
    /// Each `begin_submit` is finished at most once; a response with no
    /// submission in flight is ignored and yields `Skipped`.
    pub fn finish_submit(
        &mut self,
        result: Result<(), ApiError>,
        translate: &dyn Translate,
        reporter: &dyn ErrorReporter,
    ) -> SubmissionOutcome {
        if self.submission != SubmissionState::Submitting {
            return SubmissionOutcome::Skipped;
        }

        match result {
            Ok(()) => {
                self.submission = SubmissionState::Succeeded;
                SubmissionOutcome::Close
            }
            Err(err) if self.mode() == Mode::Create && err.has_code(DUPLICATE_EMAIL_ERROR) => {
                self.submission = SubmissionState::Failed;
                self.errors_mut().set(
                    FormField::Email,
                    translate.translate(key::DUPLICATE_EMAIL_ERROR),
                );
                SubmissionOutcome::InlineError
            }
            Err(err) => {
                tracing::error!("Failed to save inbound route: {}", err);
                self.submission = SubmissionState::Failed;
                let message = err.display_message().to_string();
                reporter.report(&message);
                SubmissionOutcome::Reported(message)
            }
        }
    }
}

/// Run one full submission against `api`
///
/// The response is discarded when `token` is cancelled while the request is in
/// flight; the form then stays `Submitting` and nothing is reported.
pub async fn submit<A: InboundRouteApi>(
    api: &A,
    form: &mut FormState,
    token: &CancellationToken,
    translate: &dyn Translate,
    reporter: &dyn ErrorReporter,
) -> SubmissionOutcome {
    let Some(request) = form.begin_submit() else {
        return SubmissionOutcome::Skipped;
    };

    let result = request.send(api).await;
    if token.is_cancelled() {
        return SubmissionOutcome::Cancelled;
    }

    form.finish_submit(result, translate, reporter)
}
