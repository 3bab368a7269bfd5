//! Read-only data access for the portal
//!
//! Handlers depend on [`PortalRepository`] rather than on concrete records, so
//! a persistent store can replace [`StaticRepository`] without touching the
//! HTTP contract.

use async_trait::async_trait;

use super::error::{RepositoryError, RepositoryResult};
use super::types::{is_ranked, rank_entries, InternProfile, LeaderboardEntry, Participant};

/// Read-only source of portal data
#[async_trait]
pub trait PortalRepository: Send + Sync {
    /// Profile of the current intern
    async fn profile(&self) -> RepositoryResult<InternProfile>;

    /// Leaderboard sorted by donations, highest first, with ranks assigned
    async fn leaderboard(&self) -> RepositoryResult<Vec<LeaderboardEntry>>;
}

/// Fixed in-memory records
///
/// Every call builds fresh values from the same seed data, so responses are
/// deterministic for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct StaticRepository {
    profile: InternProfile,
    participants: Vec<Participant>,
}

impl StaticRepository {
    pub fn new(profile: InternProfile, participants: Vec<Participant>) -> Self {
        Self {
            profile,
            participants,
        }
    }

    /// Number of participants on the leaderboard
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }
}

impl Default for StaticRepository {
    fn default() -> Self {
        Self::new(
            InternProfile::new("Vishwa Vikas", "vishwavy2025", 7400),
            vec![
                Participant::new("Vishwa Vikas", "vishwavy2025", 7400),
                Participant::new("Sarah Johnson", "sarahj2025", 6800),
                Participant::new("Mike Chen", "mikec2025", 6200),
                Participant::new("Emily Davis", "emilyd2025", 5800),
                Participant::new("Alex Rodriguez", "alexr2025", 5200),
            ],
        )
    }
}

#[async_trait]
impl PortalRepository for StaticRepository {
    async fn profile(&self) -> RepositoryResult<InternProfile> {
        Ok(self.profile.clone())
    }

    async fn leaderboard(&self) -> RepositoryResult<Vec<LeaderboardEntry>> {
        let entries = rank_entries(self.participants.clone());

        if !is_ranked(&entries) {
            return Err(RepositoryError::Corruption(
                "leaderboard ranking is inconsistent".to_string(),
            ));
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_profile() {
        let repo = StaticRepository::default();
        let profile = repo.profile().await.unwrap();

        assert_eq!(profile.name, "Vishwa Vikas");
        assert_eq!(profile.referral_code, "vishwavy2025");
        assert_eq!(profile.donations, 7400);
    }

    #[tokio::test]
    async fn test_default_leaderboard_is_ranked() {
        let repo = StaticRepository::default();
        let entries = repo.leaderboard().await.unwrap();

        assert_eq!(entries.len(), repo.participant_count());
        assert!(is_ranked(&entries));
        assert_eq!(entries[0].rank, 1);
        assert_eq!(entries[0].referral_code, "vishwavy2025");
        assert_eq!(entries[4].name, "Alex Rodriguez");

        let total: u64 = entries.iter().map(|e| e.donations).sum();
        assert_eq!(total, 31_400);
    }

    #[tokio::test]
    async fn test_leaderboard_is_deterministic() {
        let repo = StaticRepository::default();
        let first = repo.leaderboard().await.unwrap();
        let second = repo.leaderboard().await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_unsorted_seed_is_ranked_on_read() {
        let repo = StaticRepository::new(
            InternProfile::new("Mike Chen", "mikec2025", 6200),
            vec![
                Participant::new("Mike Chen", "mikec2025", 6200),
                Participant::new("Sarah Johnson", "sarahj2025", 6800),
            ],
        );
        let entries = repo.leaderboard().await.unwrap();

        assert_eq!(entries[0].name, "Sarah Johnson");
        assert_eq!(entries[1].rank, 2);
    }
}
