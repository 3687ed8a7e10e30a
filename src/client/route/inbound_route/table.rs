use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaPen, Icon};

use crate::{
    client::i18n::{key, I18n, Translate},
    model::inbound_route::{find_reference, InboundRouteDto, ReferenceItemDto},
};

/// Display name for a referenced id: the list entry's name, `#id` while the id
/// is not in the list, and a dash when nothing is assigned.
pub fn reference_label(options: &[ReferenceItemDto], id: Option<i32>) -> String {
    match (find_reference(options, id), id) {
        (Some(option), _) => option.name.clone(),
        (None, Some(id)) => format!("#{}", id),
        (None, None) => "—".to_string(),
    }
}

#[component]
pub fn InboundRoutesTable(
    routes: Vec<InboundRouteDto>,
    campaigns: Vec<ReferenceItemDto>,
    queues: Vec<ReferenceItemDto>,
    on_edit: EventHandler<InboundRouteDto>,
) -> Element {
    let i18n = use_context::<I18n>();

    if routes.is_empty() {
        return rsx!(
            div {
                class: "text-center py-8 opacity-50",
                {i18n.translate(key::LIST_EMPTY)}
            }
        );
    }

    rsx!(
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-zebra w-full",
                thead {
                    tr {
                        th { {i18n.translate(key::COLUMN_EMAIL)} }
                        th { {i18n.translate(key::COLUMN_QUEUE)} }
                        th { {i18n.translate(key::COLUMN_CAMPAIGN)} }
                        th { class: "text-right" }
                    }
                }
                tbody {
                    for (route, edit_route) in routes.into_iter().map(|route| (route.clone(), route)) {
                        tr {
                            key: "{route.route_id.unwrap_or_default()}-{route.email}",
                            td { "{route.email}" }
                            td { {reference_label(&queues, route.queue_id)} }
                            td { {reference_label(&campaigns, route.campaign_id)} }
                            td {
                                class: "text-right",
                                button {
                                    class: "btn btn-sm btn-ghost",
                                    disabled: route.route_id.is_none(),
                                    onclick: move |_| on_edit.call(edit_route.clone()),
                                    Icon { width: 14, height: 14, icon: FaPen }
                                    {i18n.translate(key::EDIT_ROUTE)}
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_resolve_names_and_fall_back_to_ids() {
        let queues = vec![ReferenceItemDto {
            id: 3,
            name: "Tier 1".to_string(),
        }];

        assert_eq!(reference_label(&queues, Some(3)), "Tier 1");
        assert_eq!(reference_label(&queues, Some(8)), "#8");
        assert_eq!(reference_label(&queues, None), "—");
    }
}
