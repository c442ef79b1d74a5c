pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::FileStorage;
pub use config::toml_config::SiteConfig;
pub use config::QueueAction;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::{
    auth::AuthFlow, catalog::StaticCatalog, checkout::CheckoutFlow, plan_queue::PlanQueue,
    session::SessionStore,
};
pub use utils::error::{GymError, Result};
