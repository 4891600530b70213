use crate::Route;
use crate::api::ApiClient;
use crate::widgets::header::Header;
use crate::widgets::sidebar::Sidebar;
use dioxus::prelude::*;
use fitsoc::ShellState;

// Reports the viewport width now and on every resize. The handler is parked
// on `window` so it can be removed again on unmount.
const WATCH_VIEWPORT_JS: &str = r#"
    const report = () => dioxus.send(window.innerWidth);
    window.__fitsocResize = report;
    window.addEventListener('resize', report);
    report();
"#;

const UNWATCH_VIEWPORT_JS: &str = r#"
    if (window.__fitsocResize) {
        window.removeEventListener('resize', window.__fitsocResize);
        delete window.__fitsocResize;
    }
"#;

/// Sidebar, header and the active page.
#[component]
pub fn Shell() -> Element {
    let mut shell = use_context::<Signal<ShellState>>();
    let breakpoint = use_context::<ApiClient>().config().mobile_breakpoint;

    use_future(move || async move {
        let mut viewport = document::eval(WATCH_VIEWPORT_JS);
        while let Ok(width) = viewport.recv::<f64>().await {
            shell.write().resize(width.max(0.0) as u32, breakpoint);
        }
    });

    use_drop(|| {
        let _ = document::eval(UNWATCH_VIEWPORT_JS);
    });

    let state = shell();

    rsx! {
        div { class: if state.is_mobile() { "app-shell mobile" } else { "app-shell" },
            if state.shows_overlay() {
                div {
                    class: "sidebar-backdrop",
                    onclick: move |_| shell.write().close_sidebar(),
                }
            }
            if !state.is_mobile() || state.sidebar_open {
                Sidebar { overlay: state.is_mobile() }
            }
            div { class: "app-main",
                Header {}
                main { class: "app-content", Outlet::<Route> {} }
            }
        }
    }
}
