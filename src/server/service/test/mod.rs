use crate::server::{
    data::store::Store,
    error::{inbound_route::InboundRouteError, AppError},
    model::inbound_route::{
        AssignQueueParams, Campaign, CreateInboundRouteParams, InboundRoute, Queue, Seed,
    },
    service::inbound_route::InboundRouteService,
};

mod create_email;
mod list;

/// Store with two inbound campaigns, one outbound campaign, two queues and
/// one route (id 1, `support@example.com`, queue 1, campaign 1).
fn test_store() -> Store {
    Store::from_seed(seed())
}

fn seed() -> Seed {
    Seed {
        campaigns: vec![
            Campaign {
                id: 1,
                name: "Support".to_string(),
                kind: "inbound".to_string(),
            },
            Campaign {
                id: 2,
                name: "Sales".to_string(),
                kind: "inbound".to_string(),
            },
            Campaign {
                id: 3,
                name: "Outreach".to_string(),
                kind: "outbound".to_string(),
            },
        ],
        queues: vec![
            Queue {
                id: 1,
                name: "Tier 1".to_string(),
            },
            Queue {
                id: 2,
                name: "Billing".to_string(),
            },
        ],
        routes: vec![InboundRoute {
            id: 1,
            email: "support@example.com".to_string(),
            queue_id: 1,
            campaign_id: 1,
        }],
    }
}

fn create_params(email: &str, queue_id: i32, campaign_id: i32) -> CreateInboundRouteParams {
    CreateInboundRouteParams {
        email: email.to_string(),
        queue_id,
        campaign_id,
    }
}
