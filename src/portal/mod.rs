//! Intern Portal data layer
//!
//! - **types**: Core data structures (InternProfile, LeaderboardEntry) and ranking
//! - **repository**: Read-only repository trait and the static implementation
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust,no_run
//! use intern_portal::portal::{PortalRepository, StaticRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = StaticRepository::default();
//!
//!     for entry in repo.leaderboard().await? {
//!         println!("#{} {} ${}", entry.rank, entry.name, entry.donations);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod repository;
pub mod types;

pub use error::{RepositoryError, RepositoryResult};
pub use repository::{PortalRepository, StaticRepository};
pub use types::{
    avatar_url_for, is_ranked, rank_entries, InternProfile, LeaderboardEntry, Participant,
};
