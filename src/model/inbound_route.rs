use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Error code the backend returns when an email address already has a route.
pub const DUPLICATE_EMAIL_ERROR: &str = "duplicate_email";

/// `local@domain.tld` shape: no whitespace, one `@`, at least one dot in the
/// domain and no empty or hyphen-edged labels.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("Invalid email regex pattern")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Entry of the campaign and queue reference lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceItemDto {
    pub id: i32,
    pub name: String,
}

/// Look up the entry matching a selected id, if the id is in the list
pub fn find_reference(options: &[ReferenceItemDto], id: Option<i32>) -> Option<&ReferenceItemDto> {
    let id = id?;
    options.iter().find(|option| option.id == id)
}

/// An existing inbound route as handed to the editor dialog.
///
/// Every field may be absent on the wire; absent fields fall back to an empty
/// email or no selection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundRouteDto {
    #[serde(default)]
    pub route_id: Option<i32>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub campaign_id: Option<i32>,
    #[serde(default)]
    pub queue_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueAssignmentDto {
    pub id: i32,
    pub campaign_id: i32,
}

/// Body of `InboundRouteOmni/assignQueue`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignQueueDto {
    pub id: i32,
    pub queue: QueueAssignmentDto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DestinationType {
    Queue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationDto {
    #[serde(rename = "type")]
    pub kind: DestinationType,
    pub id: i32,
    pub campaign_id: i32,
}

/// Body of `InboundRouteOmni/createEmail`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEmailRouteDto {
    pub email: String,
    pub destination: DestinationDto,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn create_email_body_uses_queue_destination() {
        let payload = CreateEmailRouteDto {
            email: "a@b.com".to_string(),
            destination: DestinationDto {
                kind: DestinationType::Queue,
                id: 3,
                campaign_id: 7,
            },
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "email": "a@b.com",
                "destination": { "type": "queue", "id": 3, "campaign_id": 7 }
            })
        );
    }

    #[test]
    fn assign_queue_body_nests_campaign_under_queue() {
        let payload = AssignQueueDto {
            id: 42,
            queue: QueueAssignmentDto {
                id: 5,
                campaign_id: 9,
            },
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "id": 42, "queue": { "id": 5, "campaign_id": 9 } })
        );
    }

    #[test]
    fn route_with_missing_fields_defaults_to_empty() {
        let route: InboundRouteDto = serde_json::from_value(json!({ "routeId": 4 })).unwrap();

        assert_eq!(route.route_id, Some(4));
        assert_eq!(route.email, "");
        assert_eq!(route.campaign_id, None);
        assert_eq!(route.queue_id, None);
    }
}
