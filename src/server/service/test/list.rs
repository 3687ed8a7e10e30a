use super::*;

/// Tests filtering campaigns by type.
///
/// Expected: only inbound campaigns, ordered by name
#[tokio::test]
async fn lists_inbound_campaigns_by_name() {
    let store = test_store();
    let service = InboundRouteService::new(&store);

    let names: Vec<String> = service
        .list_campaigns(Some("inbound"))
        .await
        .into_iter()
        .map(|campaign| campaign.name)
        .collect();

    assert_eq!(names, vec!["Sales", "Support"]);
    assert_eq!(service.list_campaigns(None).await.len(), 3);
}

/// Tests that queues come back ordered by name.
///
/// Expected: Billing before Tier 1
#[tokio::test]
async fn lists_queues_by_name() {
    let store = test_store();
    let service = InboundRouteService::new(&store);

    let ids: Vec<i32> = service
        .list_queues()
        .await
        .into_iter()
        .map(|queue| queue.id)
        .collect();

    assert_eq!(ids, vec![2, 1]);
}

/// Tests that the listed route converts to the wire shape.
///
/// Expected: every field present on the dto
#[tokio::test]
async fn listed_route_converts_to_dto() {
    let store = test_store();
    let service = InboundRouteService::new(&store);

    let dto = service.list_routes().await.remove(0).into_dto();

    assert_eq!(dto.route_id, Some(1));
    assert_eq!(dto.email, "support@example.com");
    assert_eq!(dto.campaign_id, Some(1));
    assert_eq!(dto.queue_id, Some(1));
}
