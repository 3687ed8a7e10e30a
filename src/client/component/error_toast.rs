use dioxus::prelude::*;

use crate::client::{
    i18n::{key, I18n, Translate},
    model::notification::ErrorAlert,
};

/// Renders the app-wide `ErrorAlert` outside any dialog's tree
#[component]
pub fn ErrorToast() -> Element {
    let mut alert = use_context::<ErrorAlert>();
    let i18n = use_context::<I18n>();

    rsx! {
        if let Some(message) = alert.message() {
            div {
                class: "toast toast-top toast-end z-[1000]",
                div {
                    class: "alert alert-error",
                    role: "alert",
                    span { "{message}" }
                    button {
                        r#type: "button",
                        class: "btn btn-sm btn-ghost",
                        onclick: move |_| alert.dismiss(),
                        {i18n.translate(key::DISMISS)}
                    }
                }
            }
        }
    }
}
