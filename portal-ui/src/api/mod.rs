//! Browser-Side Services
//!
//! HTTP calls to the Intern Portal API and clipboard access.

pub mod client;
pub mod clipboard;

pub use client::{check_health, fetch_intern, fetch_leaderboard, get_api_base, set_api_base};
