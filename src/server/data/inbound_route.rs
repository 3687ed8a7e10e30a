use crate::server::{
    data::store::Store,
    model::inbound_route::{AssignQueueParams, CreateInboundRouteParams, InboundRoute},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateRouteError {
    EmailTaken,
    IdsExhausted,
}

pub struct InboundRouteRepository<'a> {
    store: &'a Store,
}

impl<'a> InboundRouteRepository<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Gets all routes ordered by id
    pub async fn get_all(&self) -> Vec<InboundRoute> {
        let data = self.store.data().read().await;

        let mut routes = data.routes.clone();
        routes.sort_by_key(|route| route.id);

        routes
    }

    /// Creates a route unless another route already uses the address.
    ///
    /// Addresses are compared case-insensitively. The check and the insert
    /// happen under one write lock.
    ///
    /// # Returns
    /// - `Ok(InboundRoute)` - The created route with its assigned id
    /// - `Err(CreateRouteError::EmailTaken)` - The address is already routed
    /// - `Err(CreateRouteError::IdsExhausted)` - No id left below `i32::MAX`
    pub async fn create(
        &self,
        params: CreateInboundRouteParams,
    ) -> Result<InboundRoute, CreateRouteError> {
        let mut data = self.store.data().write().await;

        let taken = data
            .routes
            .iter()
            .any(|route| route.email.eq_ignore_ascii_case(&params.email));
        if taken {
            return Err(CreateRouteError::EmailTaken);
        }

        let id = data.next_route_id.ok_or(CreateRouteError::IdsExhausted)?;
        let route = InboundRoute {
            id,
            email: params.email,
            queue_id: params.queue_id,
            campaign_id: params.campaign_id,
        };
        data.next_route_id = id.checked_add(1);
        data.routes.push(route.clone());

        Ok(route)
    }

    /// Points an existing route at a new queue and campaign, keeping its email
    pub async fn assign_queue(&self, params: AssignQueueParams) -> Option<InboundRoute> {
        let mut data = self.store.data().write().await;

        let route = data
            .routes
            .iter_mut()
            .find(|route| route.id == params.route_id)?;
        route.queue_id = params.queue_id;
        route.campaign_id = params.campaign_id;

        Some(route.clone())
    }
}
