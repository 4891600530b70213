mod protected_route;
mod public_route;
mod redirect;

pub use protected_route::ProtectedRoute;
pub use public_route::PublicRoute;
use redirect::Redirect;
