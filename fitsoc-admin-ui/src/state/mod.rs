mod session;
mod shell;
mod society;

pub use session::SessionStore;
pub use shell::DocumentRoot;
pub use society::{SocietyStore, use_society_scope};
