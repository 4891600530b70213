use dioxus::prelude::*;

use crate::state::SocietyStore;
use crate::widgets::empty_state::EmptyState;
use crate::widgets::loading::Loading;

#[component]
pub fn Society() -> Element {
    let societies = use_context::<SocietyStore>();
    let selected = societies.selected();
    let all = societies.societies();

    if societies.is_loading() && all.is_empty() {
        return rsx! {
            Loading { message: "Loading societies..." }
        };
    }

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                h1 { "Society" }
            }
            match selected {
                Some(society) => rsx! {
                    div { class: "society-card",
                        h2 { "{society.name}" }
                        dl {
                            dt { "City" }
                            dd { "{society.city}" }
                            dt { "Address" }
                            dd { {society.address.clone().unwrap_or_else(|| "—".to_string())} }
                            dt { "Contact" }
                            dd { {society.contact_email.clone().unwrap_or_else(|| "—".to_string())} }
                            dt { "ID" }
                            dd { "{society.society_id}" }
                        }
                    }
                },
                None => rsx! {
                    EmptyState {
                        icon: "🏢",
                        title: "No society selected",
                        description: "You do not have access to any society yet.",
                    }
                },
            }
            if !all.is_empty() {
                h3 { "All societies" }
                table { class: "records-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "City" }
                            th { class: "actions" }
                        }
                    }
                    tbody {
                        for society in all.iter() {
                            tr { key: "{society.society_id}",
                                td { "{society.name}" }
                                td { "{society.city}" }
                                td { class: "actions",
                                    {
                                        let id = society.society_id.clone();
                                        let current = id == societies.selected_society_id();
                                        rsx! {
                                            button {
                                                class: "btn-secondary",
                                                disabled: current,
                                                onclick: move |_| societies.set_selected_society_id(id.clone()),
                                                if current { "Selected" } else { "Select" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
