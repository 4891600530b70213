use crate::error::AuthError;
use crate::login::Credentials;
use crate::models::{Role, User};
use async_trait::async_trait;
use tracing::{info, warn};

/// What a successful login hands back: the bearer token and the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthGrant {
    pub token: String,
    pub user: User,
}

/// Remote side of authentication. Implemented by the HTTP client.
#[async_trait(?Send)]
pub trait AuthGateway {
    async fn login(&self, credentials: &Credentials) -> Result<AuthGrant, AuthError>;
    async fn logout(&self, token: &str) -> Result<(), AuthError>;
}

/// State transitions of a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    LoginStarted,
    LoggedIn(AuthGrant),
    LoginFailed(String),
    LogoutStarted,
    LoggedOut,
}

/// Client-side record of authentication status and the current user.
///
/// Created unauthenticated at start-up. Consumers never write fields
/// directly; every change goes through [`Session::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
    is_authenticated: bool,
    is_loading: bool,
    error: Option<String>,
    token: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::LoginStarted => {
                self.is_loading = true;
                self.error = None;
            }
            SessionEvent::LoggedIn(grant) => {
                info!(user_id = %grant.user.id, role = %grant.user.role, "Session established");
                self.user = Some(grant.user);
                self.token = Some(grant.token);
                self.is_authenticated = true;
                self.is_loading = false;
                self.error = None;
            }
            SessionEvent::LoginFailed(message) => {
                self.user = None;
                self.token = None;
                self.is_authenticated = false;
                self.is_loading = false;
                self.error = Some(message);
            }
            SessionEvent::LogoutStarted => {
                self.is_loading = true;
            }
            SessionEvent::LoggedOut => {
                info!("Session cleared");
                *self = Self::default();
            }
        }
    }
}

/// Runs a login attempt, reporting each transition through `apply`.
pub async fn run_login<G, F>(gateway: &G, credentials: Credentials, mut apply: F)
where
    G: AuthGateway + ?Sized,
    F: FnMut(SessionEvent),
{
    apply(SessionEvent::LoginStarted);

    match gateway.login(&credentials).await {
        Ok(grant) => apply(SessionEvent::LoggedIn(grant)),
        Err(e) => {
            warn!(email = %credentials.email, error = %e, "Login failed");
            apply(SessionEvent::LoginFailed(e.to_string()));
        }
    }
}

/// Ends the session. The local session is always cleared, even when the
/// server-side logout fails.
pub async fn run_logout<G, F>(gateway: &G, token: Option<String>, mut apply: F)
where
    G: AuthGateway + ?Sized,
    F: FnMut(SessionEvent),
{
    apply(SessionEvent::LogoutStarted);

    if let Some(token) = token {
        if let Err(e) = gateway.logout(&token).await {
            warn!(error = %e, "Server-side logout failed");
        }
    }

    apply(SessionEvent::LoggedOut);
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::Fake;
    use fake::faker::name::en::{FirstName, LastName};
    use std::cell::Cell;

    struct StubGateway {
        login_calls: Cell<u32>,
        logout_calls: Cell<u32>,
        accept: bool,
        role: Role,
    }

    impl StubGateway {
        fn new(accept: bool, role: Role) -> Self {
            Self {
                login_calls: Cell::new(0),
                logout_calls: Cell::new(0),
                accept,
                role,
            }
        }
    }

    #[async_trait(?Send)]
    impl AuthGateway for StubGateway {
        async fn login(&self, credentials: &Credentials) -> Result<AuthGrant, AuthError> {
            self.login_calls.set(self.login_calls.get() + 1);
            if !self.accept {
                return Err(AuthError::InvalidCredentials);
            }
            Ok(AuthGrant {
                token: "token-123".to_string(),
                user: User {
                    id: "u1".to_string(),
                    first_name: FirstName().fake(),
                    last_name: LastName().fake(),
                    email: credentials.email.clone(),
                    role: self.role,
                },
            })
        }

        async fn logout(&self, _token: &str) -> Result<(), AuthError> {
            self.logout_calls.set(self.logout_calls.get() + 1);
            if self.accept {
                Ok(())
            } else {
                Err(AuthError::Transport("connection reset".to_string()))
            }
        }
    }

    fn credentials() -> Credentials {
        Credentials {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
        }
    }

    #[test]
    fn test_new_session_is_unauthenticated() {
        let session = Session::new();

        assert!(!session.is_authenticated());
        assert!(!session.is_loading());
        assert!(session.user().is_none());
        assert!(session.error().is_none());
    }

    #[tokio::test]
    async fn test_successful_login() {
        let gateway = StubGateway::new(true, Role::CenterAdmin);
        let mut session = Session::new();
        let mut events = Vec::new();

        run_login(&gateway, credentials(), |event| {
            events.push(event.clone());
            session.apply(event);
        })
        .await;

        assert_eq!(gateway.login_calls.get(), 1);
        assert_eq!(events.first(), Some(&SessionEvent::LoginStarted));
        assert!(session.is_authenticated());
        assert!(!session.is_loading());
        assert_eq!(session.role(), Some(Role::CenterAdmin));
        assert_eq!(session.token(), Some("token-123"));
        assert_eq!(session.user().map(|u| u.email.as_str()), Some("a@b.com"));
    }

    #[tokio::test]
    async fn test_failed_login_sets_error() {
        let gateway = StubGateway::new(false, Role::SuperAdmin);
        let mut session = Session::new();

        run_login(&gateway, credentials(), |event| session.apply(event)).await;

        assert!(!session.is_authenticated());
        assert!(!session.is_loading());
        assert_eq!(session.error(), Some("Invalid email or password"));
    }

    #[test]
    fn test_login_started_is_loading_and_clears_error() {
        let mut session = Session::new();
        session.apply(SessionEvent::LoginFailed("nope".to_string()));
        session.apply(SessionEvent::LoginStarted);

        assert!(session.is_loading());
        assert!(session.error().is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let gateway = StubGateway::new(true, Role::SuperAdmin);
        let mut session = Session::new();
        run_login(&gateway, credentials(), |event| session.apply(event)).await;

        let token = session.token().map(str::to_string);
        run_logout(&gateway, token, |event| session.apply(event)).await;

        assert_eq!(gateway.logout_calls.get(), 1);
        assert_eq!(session, Session::new());
    }

    #[tokio::test]
    async fn test_logout_clears_session_when_server_fails() {
        let gateway = StubGateway::new(false, Role::SuperAdmin);
        let mut session = Session::new();
        session.apply(SessionEvent::LoggedIn(AuthGrant {
            token: "stale".to_string(),
            user: User {
                id: "u2".to_string(),
                first_name: "Ravi".to_string(),
                last_name: "Kumar".to_string(),
                email: "ravi@example.com".to_string(),
                role: Role::Staff,
            },
        }));

        let token = session.token().map(str::to_string);
        run_logout(&gateway, token, |event| session.apply(event)).await;

        assert_eq!(gateway.logout_calls.get(), 1);
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
    }

    #[tokio::test]
    async fn test_logout_without_token_skips_server() {
        let gateway = StubGateway::new(true, Role::SuperAdmin);
        let mut session = Session::new();

        run_logout(&gateway, None, |event| session.apply(event)).await;

        assert_eq!(gateway.logout_calls.get(), 0);
        assert!(!session.is_loading());
    }
}
