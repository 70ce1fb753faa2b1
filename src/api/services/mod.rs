pub mod health;
pub mod links;
pub mod redirect;
pub mod types;

pub use health::{AppStartTime, HealthService, health_routes};
pub use links::{LinkService, link_routes};
pub use redirect::{RedirectService, redirect_routes};
