use dioxus::prelude::*;

/// Dialog chrome: title bar, content and a backdrop.
///
/// The modal never hides itself. Escape and the close button call
/// `on_dismiss`, so the owner decides what closing means. With
/// `prevent_outside_dismiss` a click on the backdrop does nothing.
#[component]
pub fn Modal(
    show: Signal<bool>,
    title: String,
    on_dismiss: EventHandler<()>,
    #[props(default = false)] prevent_outside_dismiss: bool,
    class: Option<&'static str>,
    children: Element,
) -> Element {
    let class: &str = class.unwrap_or_default();
    // Focus modal when it opens
    #[cfg(feature = "web")]
    use_effect(move || {
        if show() {
            document::eval(r#"document.querySelector('.modal-open')?.focus()"#);
        }
    });

    rsx!(
        div {
            class: if show() { "modal modal-open" } else { "modal" },
            tabindex: "-1",
            role: "dialog",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    on_dismiss.call(());
                }
            },
            div {
                class: "modal-box {class} border border-base-300 w-11/12 max-w-lg",
                div {
                    class: "flex justify-between items-center mb-4",
                    h3 {
                        class: "font-bold text-lg",
                        "{title}"
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-sm btn-circle btn-ghost",
                        onclick: move |_| on_dismiss.call(()),
                        "✕"
                    }
                }
                div {
                    {children}
                }
            }
            div {
                class: "modal-backdrop",
                onclick: move |_| {
                    if !prevent_outside_dismiss {
                        on_dismiss.call(());
                    }
                },
            }
        }
    )
}
