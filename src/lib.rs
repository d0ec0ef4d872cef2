pub mod config;
pub mod controllers;
pub mod errors;
pub mod provider;
pub mod services;
pub mod types;

pub use config::Config;
pub use controllers::build_router;
pub use types::AppState;
