use std::sync::Arc;

use tokio::sync::RwLock;

use crate::server::model::inbound_route::{Campaign, InboundRoute, Queue, Seed};

#[derive(Debug)]
pub struct StoreData {
    pub campaigns: Vec<Campaign>,
    pub queues: Vec<Queue>,
    pub routes: Vec<InboundRoute>,
    /// Id for the next created route, `None` once `i32::MAX` has been used
    pub next_route_id: Option<i32>,
}

/// Shared handle to the route store, clones point at the same data.
#[derive(Clone)]
pub struct Store {
    inner: Arc<RwLock<StoreData>>,
}

impl Store {
    pub fn from_seed(seed: Seed) -> Self {
        let next_route_id = seed
            .routes
            .iter()
            .map(|route| route.id)
            .max()
            .unwrap_or(0)
            .checked_add(1);

        Self {
            inner: Arc::new(RwLock::new(StoreData {
                campaigns: seed.campaigns,
                queues: seed.queues,
                routes: seed.routes,
                next_route_id,
            })),
        }
    }

    pub(super) fn data(&self) -> &RwLock<StoreData> {
        &self.inner
    }
}
