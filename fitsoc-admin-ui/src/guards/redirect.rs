use dioxus::prelude::*;

use crate::Route;

/// Navigates to `to` once mounted, replacing the current history entry so
/// back-navigation never returns to the page that was refused.
#[component]
pub fn Redirect(to: Route) -> Element {
    let nav = navigator();

    use_effect(move || {
        info!("Guard redirect to {}", to);
        nav.replace(to.clone());
    });

    rsx! {}
}
