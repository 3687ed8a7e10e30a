use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::{
    model::{
        ajax::{AjaxCommand, AjaxQuery},
        inbound_route::{AssignQueueDto, CreateEmailRouteDto, InboundRouteDto, ReferenceItemDto},
    },
    server::{
        error::AppError,
        model::inbound_route::{AssignQueueParams, CreateInboundRouteParams},
        service::inbound_route::InboundRouteService,
        state::AppState,
    },
};

/// Read-only ajax commands.
///
/// # Commands
/// - `CampaignAdmin/listSlim` - Campaigns as `[{id, name}]`, filtered by `type` when given
/// - `OmniQueues/listAll` - Queues as `[{id, name}]`
/// - `InboundRouteOmni/listEmail` - Routes as `[{routeId, email, campaignId, queueId}]`
///
/// # Returns
/// - `200 OK` - The requested list
/// - `404 Not Found` - The pair is not a read command (`unknown_command`)
pub async fn ajax_get(
    State(state): State<AppState>,
    Query(query): Query<AjaxQuery>,
) -> Result<Response, AppError> {
    let service = InboundRouteService::new(&state.store);

    match resolve(&query)? {
        AjaxCommand::ListCampaigns => {
            let campaigns: Vec<ReferenceItemDto> = service
                .list_campaigns(query.kind.as_deref())
                .await
                .into_iter()
                .map(|campaign| campaign.into_dto())
                .collect();

            Ok(Json(campaigns).into_response())
        }
        AjaxCommand::ListQueues => {
            let queues: Vec<ReferenceItemDto> = service
                .list_queues()
                .await
                .into_iter()
                .map(|queue| queue.into_dto())
                .collect();

            Ok(Json(queues).into_response())
        }
        AjaxCommand::ListRoutes => {
            let routes: Vec<InboundRouteDto> = service
                .list_routes()
                .await
                .into_iter()
                .map(|route| route.into_dto())
                .collect();

            Ok(Json(routes).into_response())
        }
        AjaxCommand::AssignQueue | AjaxCommand::CreateEmail => Err(unknown_command(&query)),
    }
}

/// Mutating ajax commands, the body is JSON.
///
/// # Commands
/// - `InboundRouteOmni/assignQueue` - Body `{id, queue: {id, campaign_id}}`
/// - `InboundRouteOmni/createEmail` - Body `{email, destination: {type, id, campaign_id}}`
///
/// # Returns
/// - `200 OK` - Route reassigned, body is the updated route
/// - `201 Created` - Route created, body is the new route
/// - `400 Bad Request` - Undecodable body, invalid email, unknown queue or campaign
/// - `404 Not Found` - Unknown route or command
/// - `409 Conflict` - Email already routed (`duplicate_email`)
pub async fn ajax_post(
    State(state): State<AppState>,
    Query(query): Query<AjaxQuery>,
    body: Bytes,
) -> Result<Response, AppError> {
    let service = InboundRouteService::new(&state.store);

    match resolve(&query)? {
        AjaxCommand::AssignQueue => {
            let payload: AssignQueueDto = decode(&body)?;
            let route = service
                .assign_queue(AssignQueueParams::from_dto(payload))
                .await?;

            Ok(Json(route.into_dto()).into_response())
        }
        AjaxCommand::CreateEmail => {
            let payload: CreateEmailRouteDto = decode(&body)?;
            let route = service
                .create_email(CreateInboundRouteParams::from_dto(payload))
                .await?;

            Ok((StatusCode::CREATED, Json(route.into_dto())).into_response())
        }
        AjaxCommand::ListCampaigns | AjaxCommand::ListQueues | AjaxCommand::ListRoutes => {
            Err(unknown_command(&query))
        }
    }
}

fn resolve(query: &AjaxQuery) -> Result<AjaxCommand, AppError> {
    AjaxCommand::from_parts(&query.module, &query.cmd).ok_or_else(|| unknown_command(query))
}

fn unknown_command(query: &AjaxQuery) -> AppError {
    AppError::UnknownCommand {
        module: query.module.clone(),
        cmd: query.cmd.clone(),
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e)))
}
