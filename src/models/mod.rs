//! Data models for users, markers, and progress.

pub mod marker;
pub mod progress;
pub mod user;

pub use marker::*;
pub use progress::Progress;
pub use user::*;
