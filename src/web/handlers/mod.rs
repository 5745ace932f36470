// src/web/handlers/mod.rs

pub mod ai_handlers;
pub mod publish_handlers;
pub mod resume_handlers;

pub use ai_handlers::*;
pub use publish_handlers::*;
pub use resume_handlers::*;
