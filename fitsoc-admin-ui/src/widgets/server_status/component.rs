use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::api::ApiClient;

/// Health of the REST API, re-checked on an interval.
#[component]
pub fn ServerStatus() -> Element {
    let api = use_context::<ApiClient>();
    let poll_ms = api.config().health_poll_ms;
    let mut status = use_signal(|| Option::<String>::None);

    use_future(move || {
        let api = api.clone();
        async move {
            loop {
                let message = api
                    .check_health()
                    .await
                    .map(|health| health.message)
                    .unwrap_or_else(|_| "Down".to_string());
                status.set(Some(message));
                TimeoutFuture::new(poll_ms).await;
            }
        }
    });

    rsx! {
        div { class: "server-status",
            match status() {
                Some(status) => {
                    let is_error = status.eq("Down");
                    let dot_class = if is_error {
                        "status-dot error"
                    } else {
                        "status-dot healthy"
                    };
                    rsx! {
                        span { class: "{dot_class}" }
                        span { "API Status: {status}" }
                    }
                }
                None => rsx! {
                    span { class: "status-dot loading" }
                    span { "API Status: Checking..." }
                },
            }
        }
    }
}
