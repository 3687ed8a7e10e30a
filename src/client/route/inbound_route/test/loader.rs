use super::*;

#[tokio::test]
async fn loads_both_lists_in_server_order() {
    let api = MockInboundRouteApi::new();
    let reporter = RecordingReporter::default();
    let token = CancellationToken::new();

    let campaigns = load_campaigns(&api, &token, &reporter).await.unwrap();
    let queues = load_queues(&api, &token, &reporter).await.unwrap();

    assert_eq!(campaigns.options(), &[item(7, "Support"), item(9, "Sales")]);
    assert_eq!(queues.options(), &[item(3, "Tier 1"), item(5, "Tier 2")]);
    assert!(reporter.messages().is_empty());
}

/// A failed load leaves no options and is reported; the other list is unaffected.
#[tokio::test]
async fn failed_load_degrades_to_no_options() {
    let mut api = MockInboundRouteApi::new();
    api.queues = Err(ApiError::transport("Network Error"));
    let reporter = RecordingReporter::default();
    let token = CancellationToken::new();

    let queues = load_queues(&api, &token, &reporter).await.unwrap();
    let campaigns = load_campaigns(&api, &token, &reporter).await.unwrap();

    assert!(queues.options().is_empty());
    assert_eq!(queues.loaded(), None);
    assert!(matches!(queues, ReferenceList::Error(_)));
    assert_eq!(campaigns.options().len(), 2);
    assert_eq!(reporter.messages(), vec!["Network Error".to_string()]);
}

#[tokio::test]
async fn load_after_cancellation_is_discarded() {
    let mut api = MockInboundRouteApi::new();
    api.campaigns = Err(server_error(500, "internal", "X"));
    let reporter = RecordingReporter::default();
    let token = CancellationToken::new();
    token.cancel();

    assert_eq!(load_campaigns(&api, &token, &reporter).await, None);
    assert!(reporter.messages().is_empty());
}
