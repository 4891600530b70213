use dioxus::prelude::*;
use fitsoc::{GuardState, public_guard};

use super::Redirect;
use crate::Route;
use crate::state::SessionStore;

/// Layout for pages that are only reachable while signed out.
#[component]
pub fn PublicRoute() -> Element {
    let session = use_context::<SessionStore>();

    match public_guard(&session.snapshot()) {
        GuardState::Checking => rsx! {
            div { class: "auth-placeholder" }
        },
        GuardState::Redirect(redirect) => rsx! {
            Redirect { key: "{redirect.to}", to: Route::from(redirect.to) }
        },
        GuardState::PublicAllowed | GuardState::ProtectedAllowed => rsx! {
            Outlet::<Route> {}
        },
    }
}
