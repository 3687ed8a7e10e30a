//! Inbound route domain models, parameters and the store seed format.
//!
//! Controllers convert request DTOs into the parameter types here and domain
//! models back into DTOs, so the service and data layers never see wire types.

use serde::Deserialize;

use crate::model::{
    ajax::INBOUND_CAMPAIGN_TYPE,
    inbound_route::{AssignQueueDto, CreateEmailRouteDto, InboundRouteDto, ReferenceItemDto},
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Campaign {
    pub id: i32,
    pub name: String,
    /// Campaign type, only `inbound` campaigns can receive email routes.
    #[serde(rename = "type", default = "default_campaign_type")]
    pub kind: String,
}

fn default_campaign_type() -> String {
    INBOUND_CAMPAIGN_TYPE.to_string()
}

impl Campaign {
    pub fn into_dto(self) -> ReferenceItemDto {
        ReferenceItemDto {
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Queue {
    pub id: i32,
    pub name: String,
}

impl Queue {
    pub fn into_dto(self) -> ReferenceItemDto {
        ReferenceItemDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// An email address routed to a queue within a campaign.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InboundRoute {
    pub id: i32,
    pub email: String,
    pub queue_id: i32,
    pub campaign_id: i32,
}

impl InboundRoute {
    pub fn into_dto(self) -> InboundRouteDto {
        InboundRouteDto {
            route_id: Some(self.id),
            email: self.email,
            campaign_id: Some(self.campaign_id),
            queue_id: Some(self.queue_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateInboundRouteParams {
    pub email: String,
    pub queue_id: i32,
    pub campaign_id: i32,
}

impl CreateInboundRouteParams {
    pub fn from_dto(dto: CreateEmailRouteDto) -> Self {
        Self {
            email: dto.email,
            queue_id: dto.destination.id,
            campaign_id: dto.destination.campaign_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignQueueParams {
    pub route_id: i32,
    pub queue_id: i32,
    pub campaign_id: i32,
}

impl AssignQueueParams {
    pub fn from_dto(dto: AssignQueueDto) -> Self {
        Self {
            route_id: dto.id,
            queue_id: dto.queue.id,
            campaign_id: dto.queue.campaign_id,
        }
    }
}

/// Initial contents of the route store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub campaigns: Vec<Campaign>,
    #[serde(default)]
    pub queues: Vec<Queue>,
    #[serde(default)]
    pub routes: Vec<InboundRoute>,
}

impl Seed {
    /// Data served when no seed file is configured.
    pub fn demo() -> Self {
        let campaign = |id: i32, name: &str, kind: &str| Campaign {
            id,
            name: name.to_string(),
            kind: kind.to_string(),
        };
        let queue = |id: i32, name: &str| Queue {
            id,
            name: name.to_string(),
        };

        Self {
            campaigns: vec![
                campaign(1, "Customer Support", INBOUND_CAMPAIGN_TYPE),
                campaign(2, "Sales Inbound", INBOUND_CAMPAIGN_TYPE),
                campaign(3, "Renewals Outreach", "outbound"),
            ],
            queues: vec![queue(1, "Tier 1"), queue(2, "Tier 2"), queue(3, "Billing")],
            routes: vec![InboundRoute {
                id: 1,
                email: "support@example.com".to_string(),
                queue_id: 1,
                campaign_id: 1,
            }],
        }
    }
}
