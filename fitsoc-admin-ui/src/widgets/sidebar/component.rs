use crate::Route;
use crate::widgets::server_status::ServerStatus;
use crate::widgets::society_selector::SocietySelector;
use dioxus::prelude::*;
use fitsoc::{NAV_ITEMS, ShellState};

#[component]
pub fn Sidebar(overlay: bool) -> Element {
    let mut shell = use_context::<Signal<ShellState>>();
    let route = use_route::<Route>();
    let current_path = route.to_string();

    rsx! {
        aside { class: if overlay { "sidebar overlay" } else { "sidebar" },
            div { class: "sidebar-header",
                h2 { "FitSoc Admin" }
            }
            SocietySelector {}
            nav { class: "sidebar-nav",
                for item in NAV_ITEMS {
                    Link {
                        key: "{item.label}",
                        to: Route::from(item.page),
                        class: if item.is_active(&current_path) { "nav-item active" } else { "nav-item" },
                        onclick: move |_| shell.write().close_sidebar(),
                        span { class: "nav-icon", "{item.icon}" }
                        "{item.label}"
                    }
                }
            }
            div { class: "sidebar-footer",
                ServerStatus {}
            }
        }
    }
}
