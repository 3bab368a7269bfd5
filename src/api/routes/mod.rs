//! API Routes
//!
//! Route handlers organized by functionality.

pub mod fallback;
pub mod health;
pub mod intern;
pub mod leaderboard;
