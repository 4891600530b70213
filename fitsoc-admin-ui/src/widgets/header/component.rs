use crate::api::ApiClient;
use crate::state::{DocumentRoot, SessionStore};
use dioxus::prelude::*;
use fitsoc::ShellState;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, EnumIter, Display)]
enum UserAction {
    #[strum(to_string = "Toggle theme")]
    ToggleTheme,
    Logout,
}

#[component]
pub fn Header() -> Element {
    let mut shell = use_context::<Signal<ShellState>>();
    let session = use_context::<SessionStore>();
    let api = use_context::<ApiClient>();
    let state = shell();

    let greeting = match session.user() {
        Some(user) => format!("Welcome, {} {}", user.first_name, user.last_name),
        None => "Welcome".to_string(),
    };
    let role = session.user().map(|u| u.role.label()).unwrap_or_default();

    let run = use_callback(move |action: UserAction| match action {
        UserAction::ToggleTheme => {
            let theme = shell.write().toggle_theme();
            theme.apply(&mut DocumentRoot);
        }
        UserAction::Logout => {
            info!("User logged out");
            session.logout(api.clone());
        }
    });

    let actions = UserAction::iter().map(|action| {
        let label = match action {
            UserAction::ToggleTheme if state.theme.is_dark() => "☀️ Light mode".to_string(),
            UserAction::ToggleTheme => "🌙 Dark mode".to_string(),
            UserAction::Logout => action.to_string(),
        };
        rsx! {
            button {
                key: "{action}",
                class: "header-action",
                disabled: action == UserAction::Logout && session.is_loading(),
                onclick: move |_| run.call(action),
                "{label}"
            }
        }
    });

    rsx! {
        header { class: "app-header",
            if state.is_mobile() {
                button {
                    class: "menu-toggle",
                    aria_label: "Toggle navigation",
                    onclick: move |_| shell.write().toggle_sidebar(),
                    "☰"
                }
            }
            div { class: "header-greeting",
                h1 { class: "header-title", "{greeting}" }
                span { class: "header-role", "{role}" }
            }
            div { class: "header-actions", {actions} }
        }
    }
}
