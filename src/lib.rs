//! items-api: versioned CRUD service for a single `items` table on SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod version;

pub use config::{DatabaseSettings, Settings};
pub use error::{AppError, ConfigError};
pub use model::{Item, ItemCreate, ItemRead};
pub use routes::{app, common_routes_with_ready, item_routes, versioned_routes};
pub use service::ItemRepository;
pub use state::AppState;
pub use store::{Session, Store};
pub use version::ApiVersion;
