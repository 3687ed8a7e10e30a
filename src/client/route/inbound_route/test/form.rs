use super::*;

#[test]
fn create_form_starts_empty() {
    let form = FormState::create();

    assert_eq!(form.mode(), Mode::Create);
    assert_eq!(form.route_id(), None);
    assert_eq!(form.email(), "");
    assert_eq!(form.selected_campaign_id(), None);
    assert_eq!(form.selected_queue_id(), None);
    assert_eq!(form.submission(), SubmissionState::Idle);
    assert!(!form.errors().has(FormField::Email));
}

#[test]
fn edit_form_is_seeded_from_route() {
    let form = FormState::edit(&existing_route()).unwrap();

    assert_eq!(form.mode(), Mode::Edit);
    assert_eq!(form.route_id(), Some(42));
    assert_eq!(form.email(), "support@example.com");
    assert_eq!(form.selected_campaign_id(), Some(7));
    assert_eq!(form.selected_queue_id(), Some(3));
}

#[test]
fn edit_requires_route_id() {
    let route = InboundRouteDto {
        route_id: None,
        ..existing_route()
    };

    assert_eq!(
        FormState::edit(&route).unwrap_err(),
        FormError::MissingRouteId
    );
    assert!(FormState::from_props(Mode::Edit, None).is_err());
}

#[test]
fn create_from_route_drops_route_id() {
    let form = FormState::from_props(Mode::Create, Some(&existing_route())).unwrap();

    assert_eq!(form.mode(), Mode::Create);
    assert_eq!(form.route_id(), None);
    assert_eq!(form.email(), "support@example.com");
}

/// The email input is read-only in edit mode whatever the user types.
#[test]
fn edit_mode_email_is_read_only() {
    let mut form = FormState::edit(&existing_route()).unwrap();

    assert!(!form.email_editable());
    assert!(!form.set_email("someone@else.com"));
    assert!(!form.set_email(""));
    assert_eq!(form.email(), "support@example.com");
}

#[test]
fn changing_email_clears_email_error() {
    let mut form = FormState::create();
    form.errors_mut().set(FormField::Email, "bad");

    assert!(form.set_email("a@b.com"));
    assert!(!form.errors().has(FormField::Email));
}

#[test]
fn selection_parses_option_value() {
    let mut form = FormState::create();

    assert!(form.select_campaign("9", None));
    assert!(form.select_queue(" 5 ", None));
    assert!(!form.select_queue("five", None));

    assert_eq!(form.selected_campaign_id(), Some(9));
    assert_eq!(form.selected_queue_id(), Some(5));
}

#[test]
fn selection_must_be_in_loaded_list() {
    let queues = vec![item(3, "Tier 1")];
    let mut form = FormState::create();

    assert!(!form.select_queue("4", Some(&queues)));
    assert_eq!(form.selected_queue_id(), None);

    assert!(form.select_queue("3", Some(&queues)));
    assert_eq!(form.selected_queue_id(), Some(3));
}

/// Ids carried in from the parent survive until the lists arrive, then an id
/// the loaded list lacks is dropped and the form can no longer be submitted.
#[test]
fn stale_selection_is_dropped_once_list_loads() {
    let route = InboundRouteDto {
        queue_id: Some(99),
        ..existing_route()
    };
    let mut form = FormState::edit(&route).unwrap();
    assert_eq!(form.selected_queue_id(), Some(99));
    assert!(form.can_submit());

    let queues = vec![item(3, "Tier 1"), item(5, "Tier 2")];
    let campaigns = vec![item(7, "Support")];

    assert!(form.retain_known_queue(&queues));
    assert!(!form.retain_known_campaign(&campaigns));

    assert_eq!(form.selected_queue_id(), None);
    assert_eq!(form.selected_campaign_id(), Some(7));
    assert!(!form.can_submit());
    assert_eq!(form.begin_submit(), None);

    assert!(form.select_queue("5", Some(&queues)));
    assert!(form.can_submit());
}

#[test]
fn known_selection_survives_list_load() {
    let mut form = FormState::edit(&existing_route()).unwrap();

    assert!(!form.retain_known_queue(&[item(3, "Tier 1")]));
    assert!(!form.retain_known_campaign(&[item(7, "Support")]));
    assert_eq!(form.selected_queue_id(), Some(3));
    assert_eq!(form.selected_campaign_id(), Some(7));
}

#[test]
fn reserved_error_keys_are_independent() {
    let mut errors = FormErrors::default();
    errors.set(FormField::Queue, "");

    assert!(!errors.has(FormField::Queue));
    assert!(!errors.has(FormField::Campaign));
    assert_eq!(errors.get(FormField::Email), None);
}
