use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "page-container not-found",
            h1 { "Page not found" }
            p { "Nothing lives at {path}." }
            Link { to: Route::Dashboard {}, class: "btn", "Back to dashboard" }
        }
    }
}
