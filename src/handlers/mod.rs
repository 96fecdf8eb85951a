//! HTTP request handlers.

pub mod http;
pub mod marker;
pub mod user;

pub use http::*;
pub use marker::*;
pub use user::*;
