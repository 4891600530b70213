pub mod dashboard;
pub mod diet_plans;
pub mod events;
pub mod login;
pub mod members;
pub mod memberships;
pub mod not_found;
pub mod resource_page;
pub mod society;
pub mod trainers;

pub use dashboard::Dashboard;
pub use diet_plans::DietPlans;
pub use events::Events;
pub use login::Login;
pub use members::Members;
pub use memberships::Memberships;
pub use not_found::NotFound;
pub use society::Society;
pub use trainers::Trainers;
