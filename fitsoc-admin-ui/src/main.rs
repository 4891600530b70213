use dioxus::prelude::*;
use dioxus_primitives::toast::ToastProvider;
use fitsoc::{Page, ShellState, SocietyResource};

mod api;
mod components;
mod config;
mod guards;
mod pages;
mod records;
mod state;
mod widgets;

use guards::{ProtectedRoute, PublicRoute};
use pages::{
    Dashboard, DietPlans, Events, Login, Members, Memberships, NotFound, Society, Trainers,
};
use state::{SessionStore, use_society_scope};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Dashboard {})]
    #[layout(PublicRoute)]
        #[route("/login")]
        Login {},
    #[end_layout]
    #[layout(ProtectedRoute)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/members")]
        Members {},
        #[route("/trainers")]
        Trainers {},
        #[route("/memberships")]
        Memberships {},
        #[route("/events")]
        Events {},
        #[route("/diet-plans")]
        DietPlans {},
        #[route("/society")]
        Society {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    pub fn page(&self) -> Page {
        match self {
            Route::Login {} => Page::Login,
            Route::Dashboard {} => Page::Dashboard,
            Route::Members {} => Page::Members,
            Route::Trainers {} => Page::Trainers,
            Route::Memberships {} => Page::Memberships,
            Route::Events {} => Page::Events,
            Route::DietPlans {} => Page::DietPlans,
            Route::Society {} => Page::Society,
            Route::NotFound { .. } => Page::NotFound,
        }
    }
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Login => Route::Login {},
            Page::Dashboard => Route::Dashboard {},
            Page::Members => Route::Members {},
            Page::Trainers => Route::Trainers {},
            Page::Memberships => Route::Memberships {},
            Page::Events => Route::Events {},
            Page::DietPlans => Route::DietPlans {},
            Page::Society => Route::Society {},
            Page::NotFound => Route::NotFound {
                segments: vec!["404".to_string()],
            },
        }
    }
}

impl From<SocietyResource> for Route {
    fn from(resource: SocietyResource) -> Self {
        match resource {
            SocietyResource::Members => Route::Members {},
            SocietyResource::Trainers => Route::Trainers {},
            SocietyResource::Memberships => Route::Memberships {},
            SocietyResource::Events => Route::Events {},
            SocietyResource::DietPlans => Route::DietPlans {},
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // Load environment variables from .env file (if exists)
    match dotenvy::dotenv() {
        Ok(_) => info!("Loaded environment variables from .env file"),
        Err(_) => info!("No .env file found, using system environment variables"),
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let api_client = use_context_provider(api::ApiClient::new);
    let session = use_context_provider(SessionStore::new);
    use_context_provider(|| Signal::new(ShellState::new()));
    use_society_scope(session, api_client);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ToastProvider { Router::<Route> {} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_and_pages_share_paths() {
        for page in [
            Page::Login,
            Page::Dashboard,
            Page::Members,
            Page::Trainers,
            Page::Memberships,
            Page::Events,
            Page::DietPlans,
            Page::Society,
        ] {
            let route = Route::from(page);
            assert_eq!(route.to_string(), page.path());
            assert_eq!(route.page(), page);
        }
    }

    #[test]
    fn test_unknown_url_is_not_found() {
        let route: Route = "/gym-floor".parse().unwrap();
        assert_eq!(route.page(), Page::NotFound);

        let route: Route = "/members".parse().unwrap();
        assert_eq!(route.page(), Page::Members);
    }

    #[test]
    fn test_resource_routes() {
        for resource in SocietyResource::ALL {
            assert_eq!(
                Route::from(resource).to_string(),
                format!("/{}", resource.segment())
            );
        }
    }
}
