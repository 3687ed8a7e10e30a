use dioxus::prelude::*;

use crate::client::{
    constant::{DAISYUI_CSS, SITE_NAME, TAILWIND_SCRIPT},
    i18n::{Catalog, I18n},
    model::notification::ErrorAlert,
    router::Route,
};

#[component]
pub fn App() -> Element {
    use_context_provider(|| I18n::new(Catalog::english()));
    use_context_provider(ErrorAlert::new);

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Route inbound email addresses to campaign queues"
        }
        document::Link { rel: "stylesheet", href: DAISYUI_CSS }
        document::Script { src: TAILWIND_SCRIPT }
        Router::<Route> {}
    }
}
