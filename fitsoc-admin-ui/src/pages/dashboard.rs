use dioxus::prelude::*;
use fitsoc::SocietyResource;
use futures::future::join_all;

use crate::Route;
use crate::api::ApiClient;
use crate::state::{SessionStore, SocietyStore};
use crate::widgets::loading::Loading;

#[component]
pub fn Dashboard() -> Element {
    let api = use_context::<ApiClient>();
    let session = use_context::<SessionStore>();
    let societies = use_context::<SocietyStore>();

    // One count per resource for the selected society.
    let counts = use_resource(move || {
        let paths: Vec<_> = SocietyResource::ALL
            .iter()
            .map(|r| (*r, societies.scoped_path(*r)))
            .collect();
        let token = session.token();
        let api = api.clone();
        async move {
            let Some(token) = token else {
                return Vec::new();
            };
            let lookups = paths.into_iter().filter_map(|(resource, path)| {
                let path = path?;
                let api = &api;
                let token = &token;
                Some(async move {
                    let count = api
                        .list::<serde_json::Value>(token, &path)
                        .await
                        .map(|records| records.len())
                        .inspect_err(|e| warn!("Counting {} failed: {}", resource.segment(), e))
                        .ok();
                    (resource, count)
                })
            });
            join_all(lookups).await
        }
    });

    let name = session
        .user()
        .map(|u| u.first_name)
        .unwrap_or_else(|| "there".to_string());
    let society = societies.selected();

    rsx! {
        div { class: "dashboard",
            h1 { "Dashboard" }
            p { "Welcome back, {name}!" }
            match society {
                Some(society) => rsx! {
                    p { class: "dashboard-scope", "Showing {society.name}, {society.city}" }
                },
                None => rsx! {
                    p { class: "dashboard-scope", "Select a society to see its figures." }
                },
            }
            match &*counts.read() {
                None => rsx! { Loading {} },
                Some(stats) => rsx! {
                    div { class: "stat-grid",
                        for (resource, count) in stats.iter().copied() {
                            Link {
                                key: "{resource.segment()}",
                                to: Route::from(resource),
                                class: "stat-card",
                                span { class: "stat-label", "{resource.label()}" }
                                span { class: "stat-value",
                                    {count.map(|c| c.to_string()).unwrap_or_else(|| "—".to_string())}
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
