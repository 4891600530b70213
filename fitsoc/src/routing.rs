//! Route guard decisions.
//!
//! The functions here only decide which page should be active. Performing
//! the navigation is left to the caller, which must replace the current
//! history entry rather than push a new one.

use crate::models::Role;
use crate::session::Session;
use std::fmt;
use tracing::debug;

/// Every page the console can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Dashboard,
    Members,
    Trainers,
    Memberships,
    Events,
    DietPlans,
    Society,
    NotFound,
}

impl Page {
    /// Where `/` leads.
    pub const DEFAULT: Page = Page::Dashboard;

    pub fn path(&self) -> &'static str {
        match self {
            Page::Login => "/login",
            Page::Dashboard => "/dashboard",
            Page::Members => "/members",
            Page::Trainers => "/trainers",
            Page::Memberships => "/memberships",
            Page::Events => "/events",
            Page::DietPlans => "/diet-plans",
            Page::Society => "/society",
            Page::NotFound => "/404",
        }
    }

    /// Resolves a URL path. Trailing slashes are ignored; `/` maps to the
    /// default page and anything unknown to [`Page::NotFound`].
    pub fn from_path(path: &str) -> Page {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Page::DEFAULT,
            "/login" => Page::Login,
            "/dashboard" => Page::Dashboard,
            "/members" => Page::Members,
            "/trainers" => Page::Trainers,
            "/memberships" => Page::Memberships,
            "/events" => Page::Events,
            "/diet-plans" => Page::DietPlans,
            "/society" => Page::Society,
            _ => Page::NotFound,
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, Page::Login)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A navigation the guard wants performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub to: Page,
    /// Replace the current history entry instead of pushing.
    pub replace: bool,
}

impl Redirect {
    fn replacing(to: Page) -> Self {
        Self { to, replace: true }
    }
}

/// Outcome of evaluating a guard for one navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// Session is still loading; show a placeholder and do not redirect.
    Checking,
    PublicAllowed,
    ProtectedAllowed,
    Redirect(Redirect),
}

impl GuardState {
    pub fn redirect(&self) -> Option<Redirect> {
        match self {
            GuardState::Redirect(r) => Some(*r),
            _ => None,
        }
    }
}

/// Applies the role-based landing override: a center admin asking for the
/// dashboard is sent to members. Every other combination is left alone.
pub fn resolve_landing(role: Role, requested: Page) -> Page {
    match (role, requested) {
        (Role::CenterAdmin, Page::Dashboard) => Page::Members,
        _ => requested,
    }
}

/// Guard for pages that only make sense signed out, such as the login page.
pub fn public_guard(session: &Session) -> GuardState {
    if session.is_loading() {
        return GuardState::Checking;
    }

    if session.is_authenticated() {
        let landing = resolve_landing(session.role().unwrap_or_default(), Page::DEFAULT);
        debug!(to = %landing, "Signed-in user sent away from public page");
        return GuardState::Redirect(Redirect::replacing(landing));
    }

    GuardState::PublicAllowed
}

/// Guard for every authenticated page. The order of checks matters:
/// loading before authentication, authentication before role.
pub fn protected_guard(session: &Session, requested: Page) -> GuardState {
    if session.is_loading() {
        return GuardState::Checking;
    }

    let Some(role) = session.role().filter(|_| session.is_authenticated()) else {
        debug!(requested = %requested, "Unauthenticated navigation sent to login");
        return GuardState::Redirect(Redirect::replacing(Page::Login));
    };

    let resolved = resolve_landing(role, requested);
    if resolved != requested {
        debug!(requested = %requested, to = %resolved, role = %role, "Role landing override");
        return GuardState::Redirect(Redirect::replacing(resolved));
    }

    GuardState::ProtectedAllowed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use crate::session::{AuthGrant, SessionEvent};

    const PROTECTED: [Page; 7] = [
        Page::Dashboard,
        Page::Members,
        Page::Trainers,
        Page::Memberships,
        Page::Events,
        Page::DietPlans,
        Page::Society,
    ];

    fn signed_in(role: Role) -> Session {
        let mut session = Session::new();
        session.apply(SessionEvent::LoggedIn(AuthGrant {
            token: "t".to_string(),
            user: User {
                id: "u1".to_string(),
                first_name: "Meera".to_string(),
                last_name: "Iyer".to_string(),
                email: "meera@example.com".to_string(),
                role,
            },
        }));
        session
    }

    fn loading() -> Session {
        let mut session = Session::new();
        session.apply(SessionEvent::LoginStarted);
        session
    }

    #[test]
    fn test_unauthenticated_protected_navigation_goes_to_login() {
        let session = Session::new();

        for page in PROTECTED {
            let state = protected_guard(&session, page);
            assert_eq!(
                state,
                GuardState::Redirect(Redirect {
                    to: Page::Login,
                    replace: true,
                }),
                "page {page}"
            );
        }
    }

    #[test]
    fn test_authenticated_login_redirects_to_landing() {
        let state = public_guard(&signed_in(Role::SuperAdmin));
        assert_eq!(state.redirect().map(|r| r.to), Some(Page::Dashboard));
        assert_eq!(state.redirect().map(|r| r.replace), Some(true));

        let state = public_guard(&signed_in(Role::CenterAdmin));
        assert_eq!(state.redirect().map(|r| r.to), Some(Page::Members));
    }

    #[test]
    fn test_signed_out_login_is_allowed() {
        assert_eq!(public_guard(&Session::new()), GuardState::PublicAllowed);
    }

    #[test]
    fn test_center_admin_dashboard_override() {
        assert_eq!(resolve_landing(Role::CenterAdmin, Page::Dashboard), Page::Members);

        for role in [Role::SuperAdmin, Role::Staff, Role::Unknown] {
            assert_eq!(resolve_landing(role, Page::Dashboard), Page::Dashboard);
        }

        let state = protected_guard(&signed_in(Role::CenterAdmin), Page::Dashboard);
        assert_eq!(state.redirect().map(|r| r.to), Some(Page::Members));

        let state = protected_guard(&signed_in(Role::SuperAdmin), Page::Dashboard);
        assert_eq!(state, GuardState::ProtectedAllowed);
    }

    #[test]
    fn test_center_admin_may_open_other_pages() {
        let session = signed_in(Role::CenterAdmin);
        for page in PROTECTED.into_iter().filter(|p| *p != Page::Dashboard) {
            assert_eq!(protected_guard(&session, page), GuardState::ProtectedAllowed);
        }
    }

    #[test]
    fn test_loading_never_redirects() {
        let session = loading();

        assert_eq!(public_guard(&session), GuardState::Checking);
        for page in PROTECTED {
            assert_eq!(protected_guard(&session, page), GuardState::Checking);
        }
    }

    #[test]
    fn test_paths_resolve() {
        assert_eq!(Page::from_path("/"), Page::Dashboard);
        assert_eq!(Page::from_path("/diet-plans/"), Page::DietPlans);
        assert_eq!(Page::from_path("/nope"), Page::NotFound);

        for page in PROTECTED {
            assert_eq!(Page::from_path(page.path()), page);
            assert!(!page.is_public());
        }
        assert!(Page::Login.is_public());
    }
}
