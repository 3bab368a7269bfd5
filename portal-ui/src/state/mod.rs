//! State Management
//!
//! Per-view fetch state, derived leaderboard values, and global toasts.

pub mod clipboard;
pub mod fetch;
pub mod global;
pub mod leaderboard;
pub mod models;
pub mod rewards;
