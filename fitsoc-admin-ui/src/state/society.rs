use dioxus::prelude::*;
use fitsoc::{Society, SocietyResource, SocietyScope};

use super::SessionStore;
use crate::api::ApiClient;

/// Application-wide society scope context. Pages read the selected society
/// inside their resources, so changing it re-runs every scoped query.
#[derive(Clone, Copy, PartialEq)]
pub struct SocietyStore {
    scope: Signal<SocietyScope>,
}

impl SocietyStore {
    pub fn new() -> Self {
        Self {
            scope: Signal::new(SocietyScope::new()),
        }
    }

    pub fn societies(&self) -> Vec<Society> {
        self.scope.read().societies().to_vec()
    }

    pub fn selected(&self) -> Option<Society> {
        self.scope.read().selected().cloned()
    }

    pub fn selected_society_id(&self) -> String {
        self.scope.read().selected_society_id().to_string()
    }

    pub fn is_loading(&self) -> bool {
        self.scope.read().is_loading()
    }

    pub fn scoped_path(&self, resource: SocietyResource) -> Option<String> {
        self.scope.read().scoped_path(resource)
    }

    pub fn set_selected_society_id(mut self, id: String) {
        self.scope.write().set_selected_society_id(id);
    }

    async fn refresh(mut self, api: &ApiClient, token: Option<String>) {
        let Some(token) = token else {
            self.scope.write().clear();
            return;
        };

        self.scope.write().begin_refresh();
        match api.list_societies(&token).await {
            Ok(societies) => {
                info!("Loaded {} societies", societies.len());
                self.scope.write().replace_societies(societies);
            }
            Err(e) => {
                warn!("Failed to load societies: {}", e);
                self.scope.write().fail_refresh();
            }
        }
    }
}

/// Provides the [`SocietyStore`] context and keeps its list in step with the
/// session: fetched on sign-in, cleared on sign-out.
pub fn use_society_scope(session: SessionStore, api: ApiClient) -> SocietyStore {
    let store = use_context_provider(SocietyStore::new);
    let token = use_memo(move || session.token());

    use_resource(move || {
        let token = token();
        let api = api.clone();
        async move { store.refresh(&api, token).await }
    });

    store
}
