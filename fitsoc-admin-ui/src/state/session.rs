use dioxus::prelude::*;
use dioxus::core::spawn_forever;
use fitsoc::{Credentials, Session, User, run_login, run_logout};

use crate::api::ApiClient;

/// Application-wide session context.
///
/// Login and logout run on the root scope so they outlive the page that
/// started them; the public guard unmounts the login page while loading.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionStore {
    session: Signal<Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            session: Signal::new(Session::new()),
        }
    }

    pub fn snapshot(&self) -> Session {
        self.session.read().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.session.read().user().cloned()
    }

    pub fn token(&self) -> Option<String> {
        self.session.read().token().map(str::to_string)
    }

    pub fn is_loading(&self) -> bool {
        self.session.read().is_loading()
    }

    pub fn error(&self) -> Option<String> {
        self.session.read().error().map(str::to_string)
    }

    pub fn login(self, api: ApiClient, credentials: Credentials) {
        let mut session = self.session;
        spawn_forever(async move {
            run_login(&api, credentials, move |event| session.write().apply(event)).await;
        });
    }

    pub fn logout(self, api: ApiClient) {
        let mut session = self.session;
        let token = self.token();
        spawn_forever(async move {
            run_logout(&api, token, move |event| session.write().apply(event)).await;
        });
    }
}
