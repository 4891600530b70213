use dioxus::prelude::*;
use fitsoc::{GuardState, protected_guard};

use super::Redirect;
use crate::Route;
use crate::state::SessionStore;
use crate::widgets::loading::Loading;
use crate::widgets::shell::Shell;

/// Layout wrapping every authenticated page in the shell.
#[component]
pub fn ProtectedRoute() -> Element {
    let session = use_context::<SessionStore>();
    let route = use_route::<Route>();

    match protected_guard(&session.snapshot(), route.page()) {
        GuardState::Checking => rsx! {
            Loading { message: "Checking your session..." }
        },
        GuardState::Redirect(redirect) => rsx! {
            Redirect { key: "{redirect.to}", to: Route::from(redirect.to) }
        },
        GuardState::PublicAllowed | GuardState::ProtectedAllowed => rsx! {
            Shell {}
        },
    }
}
