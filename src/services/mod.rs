//! Business logic: progress and ranking.

pub mod progress;

pub use progress::{build_response, compute_progress, leaderboard, rank};
