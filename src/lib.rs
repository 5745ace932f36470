pub mod ai;
pub mod environment;
pub mod error;
pub mod export;
pub mod model;
pub mod projection;
pub mod publish;
pub mod schema;
pub mod skills;
pub mod store;
pub mod templates;
pub mod validation;
pub mod web;

pub use environment::EnvironmentConfig;
pub use error::ApiError;
pub use model::{NewVersionData, ResumeVersion, VersionContent};
pub use store::{DatabaseConfig, ResumeStore};
pub use web::start_web_server;
