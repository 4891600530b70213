use crate::components::button::Button;
use dioxus::prelude::*;

/// Placeholder shown in place of an empty list, with an optional call to action.
#[component]
pub fn EmptyState(
    #[props(into)] icon: String,
    #[props(into)] title: String,
    #[props(into)] description: String,
    action_label: Option<String>,
    on_action: Option<EventHandler<MouseEvent>>,
) -> Element {
    let action = action_label.zip(on_action);

    rsx! {
        div { class: "empty-state",
            div { class: "empty-icon", "{icon}" }
            h3 { class: "empty-title", "{title}" }
            p { class: "empty-description", "{description}" }
            if let Some((label, handler)) = action {
                Button { onclick: move |e| handler.call(e), "{label}" }
            }
        }
    }
}
