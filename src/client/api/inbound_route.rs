use crate::{
    client::model::error::ApiError,
    model::inbound_route::{AssignQueueDto, CreateEmailRouteDto, InboundRouteDto, ReferenceItemDto},
};

/// Remote operations the inbound route screens depend on.
///
/// The browser build talks to the ajax controller through
/// [`HttpInboundRouteApi`]; tests substitute an in-memory double.
#[allow(async_fn_in_trait)]
pub trait InboundRouteApi {
    /// Campaigns of type `inbound`, in server order
    async fn list_campaigns(&self) -> Result<Vec<ReferenceItemDto>, ApiError>;

    /// All queues, in server order
    async fn list_queues(&self) -> Result<Vec<ReferenceItemDto>, ApiError>;

    /// Existing inbound email routes
    async fn list_routes(&self) -> Result<Vec<InboundRouteDto>, ApiError>;

    /// Point an existing route at another queue and campaign
    async fn assign_queue(&self, payload: &AssignQueueDto) -> Result<(), ApiError>;

    /// Create a route for a new email address
    async fn create_email(&self, payload: &CreateEmailRouteDto) -> Result<(), ApiError>;
}

#[cfg(feature = "web")]
pub use http::HttpInboundRouteApi;

#[cfg(feature = "web")]
mod http {
    use super::*;
    use crate::{
        client::api::helper::{
            ajax_url, get, parse_empty_response, parse_response, post, send_request,
            serialize_json,
        },
        model::ajax::AjaxCommand,
    };

    /// `InboundRouteApi` backed by `fetch` calls to the ajax controller
    #[derive(Clone, Copy, Debug, Default, PartialEq)]
    pub struct HttpInboundRouteApi;

    impl InboundRouteApi for HttpInboundRouteApi {
        async fn list_campaigns(&self) -> Result<Vec<ReferenceItemDto>, ApiError> {
            let response = send_request(get(&ajax_url(AjaxCommand::ListCampaigns))).await?;
            parse_response(response).await
        }

        async fn list_queues(&self) -> Result<Vec<ReferenceItemDto>, ApiError> {
            let response = send_request(get(&ajax_url(AjaxCommand::ListQueues))).await?;
            parse_response(response).await
        }

        async fn list_routes(&self) -> Result<Vec<InboundRouteDto>, ApiError> {
            let response = send_request(get(&ajax_url(AjaxCommand::ListRoutes))).await?;
            parse_response(response).await
        }

        async fn assign_queue(&self, payload: &AssignQueueDto) -> Result<(), ApiError> {
            let body = serialize_json(payload)?;

            let response =
                send_request(post(&ajax_url(AjaxCommand::AssignQueue)).body(body)).await?;
            parse_empty_response(response).await
        }

        async fn create_email(&self, payload: &CreateEmailRouteDto) -> Result<(), ApiError> {
            let body = serialize_json(payload)?;

            let response =
                send_request(post(&ajax_url(AjaxCommand::CreateEmail)).body(body)).await?;
            parse_empty_response(response).await
        }
    }
}
