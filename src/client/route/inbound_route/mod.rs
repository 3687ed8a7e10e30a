//! Inbound email routes screen and its editor dialog.
//!
//! The dialog's behavior lives in plain modules so it can be tested without a
//! renderer:
//!
//! - `form` - editable fields, inline errors and mode
//! - `validation` - email format check and the submit gate
//! - `submission` - request building and response mapping
//! - `loader` - campaign and queue option lists
//!
//! `modal` and `table` only render that state.

pub mod form;
pub mod loader;
mod modal;
pub mod submission;
mod table;
pub mod validation;

#[cfg(test)]
mod test;

use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaPlus, Icon};

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Page,
        },
        constant::SITE_NAME,
        i18n::{key, I18n, Translate},
        model::cache::Cache,
    },
    model::inbound_route::InboundRouteDto,
};

pub use form::Mode;
pub use modal::InboundRouteEditorModal;

use loader::ReferenceList;
use table::InboundRoutesTable;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::api::{HttpInboundRouteApi, InboundRouteApi};

/// What the editor dialog was opened for
#[derive(Clone, PartialEq)]
struct EditorTarget {
    mode: Mode,
    route: Option<InboundRouteDto>,
}

#[component]
pub fn InboundRoutes() -> Element {
    let i18n = use_context::<I18n>();
    let mut editor = use_signal(|| None::<EditorTarget>);
    let mut refetch_trigger = use_signal(|| 0u32);
    let mut routes = use_signal(Cache::<Vec<InboundRouteDto>>::default);
    let mut campaigns = use_signal(ReferenceList::default);
    let mut queues = use_signal(ReferenceList::default);

    // Fetch routes - resource re-runs whenever refetch_trigger changes
    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        HttpInboundRouteApi.list_routes().await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch inbound routes: {}", err);
            }
            routes.set(Cache::from(result.clone()));
        }
    });

    // Names for the table columns; a failure only costs the labels
    #[cfg(feature = "web")]
    use_hook(move || {
        spawn(async move {
            campaigns.set(Cache::from(HttpInboundRouteApi.list_campaigns().await));
        });
        spawn(async move {
            queues.set(Cache::from(HttpInboundRouteApi.list_queues().await));
        });
    });

    let title = i18n.translate(key::LIST_TITLE);

    rsx! {
        Title { "{title} | {SITE_NAME}" }
        {match routes() {
            Cache::NotFetched => rsx!(LoadingPage { }),
            Cache::Error(err) => rsx!(ErrorPage { status: err.status, message: err.to_string() }),
            Cache::Fetched(data) => rsx!(
                Page {
                    class: "flex flex-col items-center w-full h-full",
                    div {
                        class: "w-full max-w-6xl card bg-base-200",
                        div {
                            class: "card-body",
                            div {
                                class: "flex justify-between items-center mb-4",
                                h2 { class: "card-title", "{title}" }
                                button {
                                    class: "btn btn-primary",
                                    onclick: move |_| editor.set(Some(EditorTarget {
                                        mode: Mode::Create,
                                        route: None,
                                    })),
                                    Icon { width: 14, height: 14, icon: FaPlus }
                                    {i18n.translate(key::ADD_ROUTE)}
                                }
                            }
                            InboundRoutesTable {
                                routes: data,
                                campaigns: campaigns.read().options().to_vec(),
                                queues: queues.read().options().to_vec(),
                                on_edit: move |route: InboundRouteDto| editor.set(Some(EditorTarget {
                                    mode: Mode::Edit,
                                    route: Some(route),
                                })),
                            }
                        }
                    }
                }
            ),
        }}
        if let Some(target) = editor() {
            InboundRouteEditorModal {
                mode: target.mode,
                route: target.route,
                on_close: move |_| {
                    editor.set(None);
                    refetch_trigger.set(refetch_trigger() + 1);
                }
            }
        }
    }
}
