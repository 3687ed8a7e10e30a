use dioxus_logger::tracing;
use tokio_util::sync::CancellationToken;

use crate::{
    client::{
        api::InboundRouteApi,
        model::{cache::Cache, error::ApiError, notification::ErrorReporter},
    },
    model::inbound_route::ReferenceItemDto,
};

/// Load state of the campaign or queue options
pub type ReferenceList = Cache<Vec<ReferenceItemDto>>;

impl ReferenceList {
    /// Options to render; empty until loaded and after a failed load
    pub fn options(&self) -> &[ReferenceItemDto] {
        self.data().map(Vec::as_slice).unwrap_or_default()
    }

    /// The loaded list, used to reject selections of unknown ids
    pub fn loaded(&self) -> Option<&[ReferenceItemDto]> {
        self.data().map(Vec::as_slice)
    }
}

/// Fetch the inbound campaigns
///
/// # Returns
/// - `Some(ReferenceList)` - The settled list, `Cache::Error` on failure
/// - `None` - The dialog was closed before the response arrived
pub async fn load_campaigns<A: InboundRouteApi>(
    api: &A,
    token: &CancellationToken,
    reporter: &dyn ErrorReporter,
) -> Option<ReferenceList> {
    let result = api.list_campaigns().await;
    settle(result, "campaigns", token, reporter)
}

/// Fetch all queues, with the same semantics as `load_campaigns`
pub async fn load_queues<A: InboundRouteApi>(
    api: &A,
    token: &CancellationToken,
    reporter: &dyn ErrorReporter,
) -> Option<ReferenceList> {
    let result = api.list_queues().await;
    settle(result, "queues", token, reporter)
}

fn settle(
    result: Result<Vec<ReferenceItemDto>, ApiError>,
    what: &str,
    token: &CancellationToken,
    reporter: &dyn ErrorReporter,
) -> Option<ReferenceList> {
    if token.is_cancelled() {
        return None;
    }

    if let Err(err) = &result {
        tracing::warn!("Failed to load {}: {}", what, err);
        reporter.report(err.display_message());
    }

    Some(ReferenceList::from(result))
}
