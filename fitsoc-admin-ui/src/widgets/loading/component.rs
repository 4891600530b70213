use dioxus::prelude::*;

#[component]
pub fn Loading(#[props(default = "Loading...".to_string(), into)] message: String) -> Element {
    rsx! {
        div { class: "loading",
            span { class: "spinner" }
            span { "{message}" }
        }
    }
}
