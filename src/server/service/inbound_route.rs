use dioxus_logger::tracing;

use crate::{
    model::{ajax::INBOUND_CAMPAIGN_TYPE, inbound_route::is_valid_email},
    server::{
        data::{
            campaign::CampaignRepository,
            inbound_route::{CreateRouteError, InboundRouteRepository},
            queue::QueueRepository,
            store::Store,
        },
        error::{inbound_route::InboundRouteError, AppError},
        model::inbound_route::{
            AssignQueueParams, Campaign, CreateInboundRouteParams, InboundRoute, Queue,
        },
    },
};

pub struct InboundRouteService<'a> {
    store: &'a Store,
}

impl<'a> InboundRouteService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Gets campaigns, limited to one campaign type when given
    pub async fn list_campaigns(&self, kind: Option<&str>) -> Vec<Campaign> {
        CampaignRepository::new(self.store).get_all(kind).await
    }

    pub async fn list_queues(&self) -> Vec<Queue> {
        QueueRepository::new(self.store).get_all().await
    }

    pub async fn list_routes(&self) -> Vec<InboundRoute> {
        InboundRouteRepository::new(self.store).get_all().await
    }

    /// Creates an email route to a queue.
    ///
    /// The address is trimmed and must have the `local@domain.tld` shape. The
    /// queue must exist, the campaign must exist with type `inbound`, and no
    /// other route may use the address.
    ///
    /// # Returns
    /// - `Ok(InboundRoute)` - The created route
    /// - `Err(InvalidEmail)` - Address is empty or malformed
    /// - `Err(UnknownQueue)` / `Err(UnknownCampaign)` - Destination does not exist
    /// - `Err(DuplicateEmail)` - Address already routed
    /// - `Err(InternalError)` - Route ids are exhausted
    pub async fn create_email(
        &self,
        mut params: CreateInboundRouteParams,
    ) -> Result<InboundRoute, AppError> {
        params.email = params.email.trim().to_string();
        if !is_valid_email(&params.email) {
            return Err(InboundRouteError::InvalidEmail(params.email).into());
        }

        self.ensure_destination(params.queue_id, params.campaign_id)
            .await?;

        let email = params.email.clone();
        let route = InboundRouteRepository::new(self.store)
            .create(params)
            .await
            .map_err(|err| match err {
                CreateRouteError::EmailTaken => InboundRouteError::DuplicateEmail(email).into(),
                CreateRouteError::IdsExhausted => {
                    AppError::InternalError("No inbound route ids left".to_string())
                }
            })?;

        tracing::info!(
            "Created inbound route {} for {} to queue {}",
            route.id,
            route.email,
            route.queue_id
        );

        Ok(route)
    }

    /// Moves an existing route to another queue and campaign.
    ///
    /// # Returns
    /// - `Ok(InboundRoute)` - The updated route, email unchanged
    /// - `Err(UnknownQueue)` / `Err(UnknownCampaign)` - Destination does not exist
    /// - `Err(RouteNotFound)` - No route with this id
    pub async fn assign_queue(&self, params: AssignQueueParams) -> Result<InboundRoute, AppError> {
        self.ensure_destination(params.queue_id, params.campaign_id)
            .await?;

        let route_id = params.route_id;
        let route = InboundRouteRepository::new(self.store)
            .assign_queue(params)
            .await
            .ok_or(InboundRouteError::RouteNotFound(route_id))?;

        tracing::info!(
            "Assigned inbound route {} to queue {}",
            route.id,
            route.queue_id
        );

        Ok(route)
    }

    async fn ensure_destination(&self, queue_id: i32, campaign_id: i32) -> Result<(), AppError> {
        if !QueueRepository::new(self.store).exists(queue_id).await {
            return Err(InboundRouteError::UnknownQueue(queue_id).into());
        }
        let campaigns = CampaignRepository::new(self.store);
        if !campaigns.exists(campaign_id, INBOUND_CAMPAIGN_TYPE).await {
            return Err(InboundRouteError::UnknownCampaign(campaign_id).into());
        }

        Ok(())
    }
}
