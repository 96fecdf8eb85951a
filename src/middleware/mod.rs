//! Middleware: request extractors and router layers.

pub mod auth;
pub mod cors;
pub mod path;

pub use auth::AuthUser;
pub use cors::cors_layer;
pub use path::UserIdPath;
