//! Animal adoption API: CRUD over a single `animal` table.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{Backend, Config};
pub use error::{AppError, ConfigError};
pub use model::{Animal, AnimalChanges, AnimalDraft, NewAnimal};
pub use routes::{animal_routes, app, common_routes};
pub use service::AnimalService;
pub use state::AppState;
pub use store::{connect, ensure_database_exists, ensure_tables, init};
