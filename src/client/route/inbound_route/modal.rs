use dioxus::prelude::*;
use dioxus_logger::tracing;
use tokio_util::sync::CancellationToken;

use crate::{
    client::{
        component::{Modal, ReferenceSelect},
        i18n::{key, I18n, Translate},
    },
    model::inbound_route::InboundRouteDto,
};

use super::{
    form::{FormField, FormState, Mode},
    loader::ReferenceList,
    submission::{SubmissionState, SubmitRequest},
};

#[cfg(feature = "web")]
use crate::client::{api::HttpInboundRouteApi, model::notification::ErrorAlert};

#[cfg(feature = "web")]
use super::{
    loader::{load_campaigns, load_queues},
    submission::SubmissionOutcome,
};

/// Dialog that creates an inbound email route or reassigns an existing one.
///
/// Mount it to open it; `on_close` fires once when it should be dismissed,
/// after a successful save or on cancel. The form is built from `mode` and
/// `route` when the dialog mounts.
#[component]
pub fn InboundRouteEditorModal(
    mode: Mode,
    #[props(default = None)] route: Option<InboundRouteDto>,
    #[props(default = None)] on_close: Option<EventHandler<()>>,
) -> Element {
    match FormState::from_props(mode, route.as_ref()) {
        Ok(initial) => rsx!(EditorDialog { initial, on_close }),
        Err(err) => {
            tracing::error!("Cannot open inbound route editor: {}", err);
            rsx!(InvalidRouteDialog {
                message: err.to_string(),
                on_close
            })
        }
    }
}

#[component]
fn EditorDialog(initial: FormState, on_close: Option<EventHandler<()>>) -> Element {
    let i18n = use_context::<I18n>();
    let mut show = use_signal(|| true);
    let mut form = use_signal(|| initial.clone());
    let mut campaigns = use_signal(ReferenceList::default);
    let mut queues = use_signal(ReferenceList::default);
    let mut pending = use_signal(|| None::<SubmitRequest>);

    // Anything still in flight when the dialog unmounts is discarded
    let token = use_hook(CancellationToken::new);
    use_drop({
        let token = token.clone();
        move || token.cancel()
    });

    #[cfg(feature = "web")]
    let alert = use_context::<ErrorAlert>();

    // Load both reference lists once, independently of each other
    #[cfg(feature = "web")]
    use_hook({
        let token = token.clone();
        move || {
            let campaigns_token = token.clone();
            spawn(async move {
                if let Some(list) =
                    load_campaigns(&HttpInboundRouteApi, &campaigns_token, &alert).await
                {
                    if let Some(options) = list.loaded() {
                        form.write().retain_known_campaign(options);
                    }
                    campaigns.set(list);
                }
            });
            spawn(async move {
                if let Some(list) = load_queues(&HttpInboundRouteApi, &token, &alert).await {
                    if let Some(options) = list.loaded() {
                        form.write().retain_known_queue(options);
                    }
                    queues.set(list);
                }
            });
        }
    });

    let mut close = move || {
        if !*show.peek() {
            return;
        }
        show.set(false);
        if let Some(handler) = on_close {
            handler.call(());
        }
    };

    // Handle form submission with use_resource
    #[cfg(feature = "web")]
    let future = use_resource({
        let token = token.clone();
        move || {
            let token = token.clone();
            async move {
                let request = pending()?;
                let result = request.send(&HttpInboundRouteApi).await;
                (!token.is_cancelled()).then_some(result)
            }
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = future.read_unchecked().as_ref() {
            let outcome = form.write().finish_submit(result.clone(), &i18n, &alert);
            pending.set(None);
            if outcome == SubmissionOutcome::Close {
                close();
            }
        }
    });

    let state = form();
    let is_submitting = state.submission() == SubmissionState::Submitting;
    let email_error = state.errors().get(FormField::Email).map(str::to_string);
    let has_email_error = email_error.is_some();
    let queue_error = state.errors().get(FormField::Queue).map(str::to_string);
    let campaign_error = state.errors().get(FormField::Campaign).map(str::to_string);

    rsx!(
        Modal {
            show,
            title: i18n.translate(key::TITLE),
            on_dismiss: move |_| close(),
            prevent_outside_dismiss: true,
            class: Some("inbound-route-editor-dialog"),
            div {
                class: "flex flex-col gap-4",

                // Route type, fixed to email
                div {
                    class: "form-control w-full flex flex-col gap-2",
                    label {
                        class: "label",
                        span { class: "label-text", {i18n.translate(key::TYPE_LABEL)} }
                    }
                    input {
                        r#type: "text",
                        class: "input input-bordered w-full",
                        value: i18n.translate(key::EMAIL_TYPE),
                        disabled: true,
                    }
                }

                div { class: "divider my-0" }

                // Email field
                div {
                    class: "form-control w-full flex flex-col gap-2",
                    label {
                        class: "label",
                        span { class: "label-text", {i18n.translate(key::EMAIL_TITLE)} }
                        span { class: "label-text-alt text-error", "*" }
                    }
                    input {
                        r#type: "email",
                        class: if has_email_error {
                            "input input-bordered input-error w-full"
                        } else {
                            "input input-bordered w-full"
                        },
                        placeholder: i18n.translate(key::EMAIL_LABEL),
                        value: "{state.email()}",
                        disabled: !state.email_editable() || is_submitting,
                        oninput: move |evt| {
                            form.write().set_email(evt.value());
                        },
                        onblur: move |_| {
                            form.write().validate_email(&i18n);
                        }
                    }
                    if let Some(err) = email_error {
                        label {
                            class: "label",
                            span { class: "label-text-alt text-error", "{err}" }
                        }
                    }
                }

                // Queue field
                div {
                    class: "form-control w-full flex flex-col gap-2",
                    label {
                        class: "label",
                        span { class: "label-text", {i18n.translate(key::QUEUE_TITLE)} }
                        span { class: "label-text-alt text-error", "*" }
                    }
                    ReferenceSelect {
                        placeholder: i18n.translate(key::QUEUE_LABEL),
                        options: queues.read().options().to_vec(),
                        value: state.selected_queue_id(),
                        disabled: is_submitting,
                        empty_message: i18n.translate(key::NO_OPTIONS),
                        not_found_message: i18n.translate(key::NO_MATCHES),
                        on_change: move |value: String| {
                            form.write().select_queue(&value, queues.read().loaded());
                        }
                    }
                    if let Some(err) = queue_error {
                        span { class: "label-text-alt text-error", "{err}" }
                    }
                }

                // Campaign field
                div {
                    class: "form-control w-full flex flex-col gap-2",
                    label {
                        class: "label",
                        span { class: "label-text", {i18n.translate(key::CAMPAIGN_TITLE)} }
                        span { class: "label-text-alt text-error", "*" }
                    }
                    ReferenceSelect {
                        placeholder: i18n.translate(key::CAMPAIGN_LABEL),
                        options: campaigns.read().options().to_vec(),
                        value: state.selected_campaign_id(),
                        disabled: is_submitting,
                        empty_message: i18n.translate(key::NO_OPTIONS),
                        not_found_message: i18n.translate(key::NO_MATCHES),
                        on_change: move |value: String| {
                            form.write().select_campaign(&value, campaigns.read().loaded());
                        }
                    }
                    if let Some(err) = campaign_error {
                        span { class: "label-text-alt text-error", "{err}" }
                    }
                }

                // Modal Actions
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        onclick: move |_| close(),
                        {i18n.translate(key::CANCEL)}
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-primary save",
                        disabled: !state.can_submit(),
                        onclick: move |_| {
                            let request = form.write().begin_submit();
                            if let Some(request) = request {
                                pending.set(Some(request));
                            }
                        },
                        if is_submitting {
                            span { class: "loading loading-spinner loading-sm mr-2" }
                            {i18n.translate(key::SAVING)}
                        } else {
                            {i18n.translate(key::OK)}
                        }
                    }
                }
            }
        }
    )
}

/// Shown instead of the editor when it was opened for a route it cannot edit
#[component]
fn InvalidRouteDialog(message: String, on_close: Option<EventHandler<()>>) -> Element {
    let i18n = use_context::<I18n>();
    let show = use_signal(|| true);
    let close = move || {
        if let Some(handler) = on_close {
            handler.call(());
        }
    };

    rsx!(
        Modal {
            show,
            title: i18n.translate(key::TITLE),
            on_dismiss: move |_| close(),
            prevent_outside_dismiss: true,
            div {
                class: "alert alert-error",
                span { "{message}" }
            }
            div {
                class: "modal-action",
                button {
                    r#type: "button",
                    class: "btn",
                    onclick: move |_| close(),
                    {i18n.translate(key::CANCEL)}
                }
            }
        }
    )
}
