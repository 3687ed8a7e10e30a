use dioxus::prelude::*;

use crate::model::inbound_route::{find_reference, ReferenceItemDto};

/// Options whose name contains `query`, case-insensitively, in list order
pub fn filter_options<'a>(options: &'a [ReferenceItemDto], query: &str) -> Vec<&'a ReferenceItemDto> {
    let query = query.trim().to_lowercase();
    options
        .iter()
        .filter(|option| query.is_empty() || option.name.to_lowercase().contains(&query))
        .collect()
}

/// Searchable single-choice dropdown over a reference list.
///
/// `value` is the selected id. It renders as empty while the id is not in
/// `options`, which covers both a list still loading and a stale id. Picking an
/// entry hands its id to `on_change` as the option value string.
#[component]
pub fn ReferenceSelect(
    /// Placeholder shown while nothing is selected
    placeholder: String,
    options: Vec<ReferenceItemDto>,
    value: Option<i32>,
    #[props(default = false)] disabled: bool,
    /// Shown when the list is empty
    empty_message: String,
    /// Shown when the search matches nothing
    not_found_message: String,
    on_change: EventHandler<String>,
) -> Element {
    let mut search_query = use_signal(String::new);
    let mut show_dropdown = use_signal(|| false);

    let selected_name = find_reference(&options, value).map(|option| option.name.clone());
    let matches: Vec<ReferenceItemDto> = filter_options(&options, &search_query())
        .into_iter()
        .cloned()
        .collect();
    let no_matches = matches.is_empty();

    rsx! {
        div {
            class: "relative",
            input {
                r#type: "text",
                class: "input input-bordered w-full",
                placeholder: "{placeholder}",
                value: if show_dropdown() {
                    "{search_query()}"
                } else if let Some(name) = selected_name {
                    "{name}"
                } else {
                    ""
                },
                onfocus: move |_| {
                    show_dropdown.set(true);
                    search_query.set(String::new());
                },
                oninput: move |evt| {
                    search_query.set(evt.value());
                    show_dropdown.set(true);
                },
                disabled,
            }

            // Click outside to close dropdown
            if show_dropdown() {
                div {
                    class: "fixed inset-0 z-0",
                    onclick: move |_| {
                        show_dropdown.set(false);
                        search_query.set(String::new());
                    }
                }

                div {
                    class: "absolute z-10 w-full mt-1 bg-base-100 border border-base-300 rounded-lg shadow-lg max-h-60 overflow-y-auto",
                    if no_matches {
                        div {
                            class: "px-4 py-2 text-center opacity-50 text-sm",
                            if options.is_empty() {
                                "{empty_message}"
                            } else {
                                "{not_found_message}"
                            }
                        }
                    }
                    for option in matches {
                        div {
                            key: "{option.id}",
                            class: if Some(option.id) == value {
                                "px-4 py-2 cursor-pointer bg-primary text-primary-content hover:bg-primary-focus"
                            } else {
                                "px-4 py-2 cursor-pointer hover:bg-base-200"
                            },
                            onmousedown: move |evt| {
                                evt.prevent_default();
                                on_change.call(option.id.to_string());
                                show_dropdown.set(false);
                                search_query.set(String::new());
                            },
                            "{option.name}"
                        }
                    }
                }
            }
        }
    }
}
