use super::*;

/// Tests creating a route for a new address.
///
/// Expected: Ok with the next free id and the trimmed address
#[tokio::test]
async fn creates_route_with_next_id() -> Result<(), AppError> {
    let store = test_store();
    let service = InboundRouteService::new(&store);

    let route = service
        .create_email(create_params("  sales@example.com ", 2, 2))
        .await?;

    assert_eq!(route.id, 2);
    assert_eq!(route.email, "sales@example.com");
    assert_eq!(route.queue_id, 2);
    assert_eq!(route.campaign_id, 2);
    assert_eq!(service.list_routes().await.len(), 2);

    Ok(())
}

/// Tests that an address already routed is rejected regardless of case.
///
/// Expected: Err(DuplicateEmail) and no new route stored
#[tokio::test]
async fn rejects_duplicate_email_case_insensitively() {
    let store = test_store();
    let service = InboundRouteService::new(&store);

    let result = service
        .create_email(create_params("Support@Example.com", 2, 2))
        .await;

    assert!(matches!(
        result,
        Err(AppError::InboundRouteErr(InboundRouteError::DuplicateEmail(_)))
    ));
    assert_eq!(service.list_routes().await.len(), 1);
}

/// Tests that a second create with the same address fails.
///
/// Expected: first Ok, second Err(DuplicateEmail)
#[tokio::test]
async fn second_create_with_same_address_fails() {
    let store = test_store();
    let service = InboundRouteService::new(&store);

    assert!(service
        .create_email(create_params("new@example.com", 1, 1))
        .await
        .is_ok());

    let result = service
        .create_email(create_params("NEW@example.com", 2, 2))
        .await;

    assert!(matches!(
        result,
        Err(AppError::InboundRouteErr(InboundRouteError::DuplicateEmail(_)))
    ));
}

/// Tests that malformed addresses never reach the store.
///
/// Expected: Err(InvalidEmail) for each input
#[tokio::test]
async fn rejects_malformed_email() {
    let store = test_store();
    let service = InboundRouteService::new(&store);

    for email in ["", "   ", "not-an-email", "a@b", "a b@c.com"] {
        let result = service.create_email(create_params(email, 1, 1)).await;

        assert!(
            matches!(
                result,
                Err(AppError::InboundRouteErr(InboundRouteError::InvalidEmail(_)))
            ),
            "{email:?} should be rejected"
        );
    }
}

/// Tests that the destination queue and campaign must exist.
///
/// Expected: Err(UnknownQueue) then Err(UnknownCampaign)
#[tokio::test]
async fn rejects_unknown_destination() {
    let store = test_store();
    let service = InboundRouteService::new(&store);

    let result = service
        .create_email(create_params("x@example.com", 99, 1))
        .await;
    assert!(matches!(
        result,
        Err(AppError::InboundRouteErr(InboundRouteError::UnknownQueue(99)))
    ));

    let result = service
        .create_email(create_params("x@example.com", 1, 99))
        .await;
    assert!(matches!(
        result,
        Err(AppError::InboundRouteErr(InboundRouteError::UnknownCampaign(99)))
    ));
}

/// Tests that only inbound campaigns can receive an email route.
///
/// Expected: Err(UnknownCampaign) for the outbound campaign and no route stored
#[tokio::test]
async fn rejects_outbound_campaign() {
    let store = test_store();
    let service = InboundRouteService::new(&store);

    let result = service
        .create_email(create_params("x@example.com", 1, 3))
        .await;

    assert!(matches!(
        result,
        Err(AppError::InboundRouteErr(InboundRouteError::UnknownCampaign(3)))
    ));
    assert_eq!(service.list_routes().await.len(), 1);
}

/// Tests creating a route when the seed already used the largest id.
///
/// Expected: Err(InternalError) instead of an overflow, and no route stored
#[tokio::test]
async fn fails_cleanly_when_route_ids_are_exhausted() {
    let store = Store::from_seed(Seed {
        routes: vec![InboundRoute {
            id: i32::MAX,
            email: "last@example.com".to_string(),
            queue_id: 1,
            campaign_id: 1,
        }],
        ..seed()
    });
    let service = InboundRouteService::new(&store);

    let result = service
        .create_email(create_params("next@example.com", 1, 1))
        .await;

    assert!(matches!(result, Err(AppError::InternalError(_))));
    assert_eq!(service.list_routes().await.len(), 1);
}

/// Tests that the route taking the largest id is created and the next fails.
///
/// Expected: Ok with id `i32::MAX`, then Err(InternalError)
#[tokio::test]
async fn last_route_id_is_usable_once() -> Result<(), AppError> {
    let store = Store::from_seed(Seed {
        routes: vec![InboundRoute {
            id: i32::MAX - 1,
            email: "almost@example.com".to_string(),
            queue_id: 1,
            campaign_id: 1,
        }],
        ..seed()
    });
    let service = InboundRouteService::new(&store);

    let route = service
        .create_email(create_params("last@example.com", 1, 1))
        .await?;
    assert_eq!(route.id, i32::MAX);

    let result = service
        .create_email(create_params("after@example.com", 1, 1))
        .await;
    assert!(matches!(result, Err(AppError::InternalError(_))));

    Ok(())
}
