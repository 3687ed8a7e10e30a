use dioxus::prelude::*;

use crate::client::{component::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Page {
            class: "flex flex-col items-center justify-center gap-4",
            h1 { class: "text-4xl font-bold", "404" }
            p { class: "opacity-70", "Nothing lives at /{path}" }
            Link {
                to: Route::InboundRoutes {},
                class: "btn btn-outline",
                "Back to inbound routes"
            }
        }
    )
}
