// Public API
pub mod error;
pub mod login;
pub mod models;
pub mod routing;
pub mod session;
pub mod shell;
pub mod society;

// Re-export commonly used types
pub use error::{AuthError, ValidationError};
pub use login::{Credentials, LoginForm, submit_login};
pub use models::{Role, Society, User};
pub use routing::{GuardState, Page, Redirect, protected_guard, public_guard, resolve_landing};
pub use session::{AuthGateway, AuthGrant, Session, SessionEvent, run_login, run_logout};
pub use shell::{DocumentClasses, LayoutMode, NAV_ITEMS, NavItem, ShellState, Theme};
pub use society::{SocietyResource, SocietyScope};
