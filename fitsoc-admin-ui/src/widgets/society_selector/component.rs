use crate::state::SocietyStore;
use dioxus::prelude::*;

/// Picks the society every page is scoped to. Only listed ids are offered.
#[component]
pub fn SocietySelector() -> Element {
    let societies = use_context::<SocietyStore>();
    let selected = societies.selected_society_id();
    let options = societies.societies();

    if societies.is_loading() && options.is_empty() {
        return rsx! {
            div { class: "society-selector loading", "Loading societies..." }
        };
    }

    rsx! {
        div { class: "society-selector",
            label { r#for: "society-select", "Society" }
            select {
                id: "society-select",
                disabled: options.is_empty(),
                onchange: move |e: FormEvent| societies.set_selected_society_id(e.value()),
                if options.is_empty() {
                    option { value: "", "No societies available" }
                }
                for society in options.iter() {
                    option {
                        key: "{society.society_id}",
                        value: "{society.society_id}",
                        selected: society.society_id == selected,
                        "{society.name} ({society.city})"
                    }
                }
            }
        }
    }
}
