use std::time::Duration;

use dioxus::prelude::*;
use dioxus_primitives::toast::{ToastOptions, use_toast};
use fitsoc::SocietyResource;

use crate::api::ApiClient;
use crate::components::button::Button;
use crate::records::{columns, fetch_rows};
use crate::state::{SessionStore, SocietyStore};
use crate::widgets::empty_state::EmptyState;
use crate::widgets::loading::Loading;
use crate::widgets::record_form::RecordForm;
use crate::widgets::records_table::RecordsTable;

/// List, create and delete screen shared by every society resource.
#[component]
pub fn ResourcePage(resource: SocietyResource, #[props(into)] description: String) -> Element {
    let api = use_context::<ApiClient>();
    let session = use_context::<SessionStore>();
    let societies = use_context::<SocietyStore>();
    let toaster = use_toast();
    let mut show_form = use_signal(|| false);

    let list_api = api.clone();
    let mut rows = use_resource(move || {
        let path = societies.scoped_path(resource);
        let token = session.token();
        let api = list_api.clone();
        async move {
            let (Some(path), Some(token)) = (path, token) else {
                return Ok(None);
            };
            fetch_rows(&api, &token, resource, &path)
                .await
                .map(Some)
                .map_err(|e| e.to_string())
        }
    });

    let create_api = api.clone();
    let on_create = move |body: serde_json::Value| {
        let api = create_api.clone();
        spawn(async move {
            let (Some(path), Some(token)) = (societies.scoped_path(resource), session.token())
            else {
                return;
            };
            match api.create(&token, &path, &body).await {
                Ok(()) => {
                    toaster.success(
                        format!("{} record created", resource.label()),
                        ToastOptions::new()
                            .duration(Duration::from_secs(2))
                            .permanent(false),
                    );
                    show_form.set(false);
                    rows.restart();
                }
                Err(e) => {
                    warn!("Create {} failed: {}", resource.segment(), e);
                    toaster.error(e.to_string(), ToastOptions::new().permanent(true));
                }
            }
        });
    };

    let on_delete = move |id: String| {
        let api = api.clone();
        spawn(async move {
            let (Some(path), Some(token)) = (societies.scoped_path(resource), session.token())
            else {
                return;
            };
            match api.delete(&token, &format!("{path}/{id}")).await {
                Ok(()) => rows.restart(),
                Err(e) => {
                    warn!("Delete {} {} failed: {}", resource.segment(), id, e);
                    toaster.error(e.to_string(), ToastOptions::new().permanent(true));
                }
            }
        });
    };

    let has_society = societies.selected().is_some();
    let label = resource.label();
    let column_names: Vec<String> = columns(resource).iter().map(|c| c.to_string()).collect();

    let content = match &*rows.read() {
        None => rsx! {
            Loading { message: "Loading {label}..." }
        },
        Some(Err(message)) => rsx! {
            div { class: "inline-error", "Could not load {label}: {message}" }
        },
        Some(Ok(None)) => rsx! {
            EmptyState {
                icon: "🏢",
                title: "No society selected",
                description: "Pick a society in the sidebar to see its records.",
            }
        },
        Some(Ok(Some(list))) if list.is_empty() => rsx! {
            EmptyState {
                icon: "📭",
                title: format!("No {}", label.to_lowercase()),
                description: description.clone(),
                action_label: Some(format!("Add {}", label.to_lowercase())),
                on_action: Some(EventHandler::new(move |_| show_form.set(true))),
            }
        },
        Some(Ok(Some(list))) => rsx! {
            RecordsTable {
                columns: column_names,
                rows: list.clone(),
                on_delete: on_delete,
            }
        },
    };

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                div {
                    h1 { "{label}" }
                    p { class: "page-description", "{description}" }
                }
                if has_society && !show_form() {
                    Button { onclick: move |_| show_form.set(true), "Add" }
                }
            }
            if show_form() {
                RecordForm {
                    key: "{resource.segment()}",
                    resource,
                    on_submit: on_create,
                    on_cancel: move |_| show_form.set(false),
                }
            }
            div { class: "page-content", {content} }
        }
    }
}
