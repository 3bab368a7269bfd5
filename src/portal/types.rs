//! Core data types for the Intern Portal
//!
//! - `InternProfile`: the current user's referral record
//! - `LeaderboardEntry`: one participant's rank-ordered donation record
//! - `Participant`: an unranked record, input to [`rank_entries`]

use serde::{Deserialize, Serialize};

/// The current intern's referral/donation record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InternProfile {
    pub name: String,
    /// Opaque identifier used for referral attribution
    pub referral_code: String,
    /// Total donations raised, in whole dollars
    pub donations: u64,
}

impl InternProfile {
    pub fn new(name: impl Into<String>, referral_code: impl Into<String>, donations: u64) -> Self {
        Self {
            name: name.into(),
            referral_code: referral_code.into(),
            donations,
        }
    }
}

/// A participant before ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
    pub referral_code: String,
    pub donations: u64,
    pub avatar_url: String,
}

impl Participant {
    pub fn new(name: impl Into<String>, referral_code: impl Into<String>, donations: u64) -> Self {
        let name = name.into();
        let avatar_url = avatar_url_for(&name);
        Self {
            name,
            referral_code: referral_code.into(),
            donations,
            avatar_url,
        }
    }
}

/// One row of the leaderboard
///
/// `rank` is 1-based and consistent with descending `donations`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: String,
    pub referral_code: String,
    pub donations: u64,
    /// External avatar image reference
    #[serde(rename = "avatar")]
    pub avatar_url: String,
}

/// Avatar service used for generated participant images
pub const AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg";

/// Build the avatar URL for a display name, seeded by the lowercased first name
pub fn avatar_url_for(name: &str) -> String {
    let seed = name
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_lowercase();
    format!("{}?seed={}", AVATAR_BASE_URL, seed)
}

/// Sort participants by donations (highest first) and assign contiguous ranks
///
/// The sort is stable, so participants with equal donations keep their input
/// order and receive consecutive ranks.
pub fn rank_entries(mut participants: Vec<Participant>) -> Vec<LeaderboardEntry> {
    participants.sort_by(|a, b| b.donations.cmp(&a.donations));

    participants
        .into_iter()
        .zip(1u32..)
        .map(|(p, rank)| LeaderboardEntry {
            rank,
            name: p.name,
            referral_code: p.referral_code,
            donations: p.donations,
            avatar_url: p.avatar_url,
        })
        .collect()
}

/// Check the leaderboard ordering invariant
///
/// Ranks must run 1, 2, 3, ... in sequence order and donations must never
/// increase from one entry to the next.
pub fn is_ranked(entries: &[LeaderboardEntry]) -> bool {
    let ranks_contiguous = entries
        .iter()
        .zip(1u32..)
        .all(|(entry, expected)| entry.rank == expected);

    let donations_descending = entries
        .windows(2)
        .all(|pair| pair[0].donations >= pair[1].donations);

    ranks_contiguous && donations_descending
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_wire_format() {
        let profile = InternProfile::new("Vishwa Vikas", "vishwavy2025", 7400);
        let json = serde_json::to_value(&profile).unwrap();

        assert_eq!(json["name"], "Vishwa Vikas");
        assert_eq!(json["referralCode"], "vishwavy2025");
        assert_eq!(json["donations"], 7400);
    }

    #[test]
    fn test_entry_serializes_avatar_field() {
        let entries = rank_entries(vec![Participant::new("Mike Chen", "mikec2025", 6200)]);
        let json = serde_json::to_value(&entries[0]).unwrap();

        assert_eq!(json["rank"], 1);
        assert_eq!(json["referralCode"], "mikec2025");
        assert_eq!(
            json["avatar"],
            "https://api.dicebear.com/7.x/avataaars/svg?seed=mike"
        );
        assert!(json.get("avatarUrl").is_none());
    }

    #[test]
    fn test_rank_entries_sorts_descending() {
        let entries = rank_entries(vec![
            Participant::new("Emily Davis", "emilyd2025", 5800),
            Participant::new("Vishwa Vikas", "vishwavy2025", 7400),
            Participant::new("Alex Rodriguez", "alexr2025", 5200),
            Participant::new("Sarah Johnson", "sarahj2025", 6800),
        ]);

        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Vishwa Vikas", "Sarah Johnson", "Emily Davis", "Alex Rodriguez"]
        );
        assert!(is_ranked(&entries));
    }

    #[test]
    fn test_rank_entries_ties_keep_input_order() {
        let entries = rank_entries(vec![
            Participant::new("A One", "a", 100),
            Participant::new("B Two", "b", 300),
            Participant::new("C Three", "c", 100),
        ]);

        assert_eq!(entries[0].referral_code, "b");
        assert_eq!(entries[1].referral_code, "a");
        assert_eq!(entries[2].referral_code, "c");
        assert_eq!(entries[2].rank, 3);
    }

    #[test]
    fn test_rank_entries_empty() {
        let entries = rank_entries(Vec::new());
        assert!(entries.is_empty());
        assert!(is_ranked(&entries));
    }

    #[test]
    fn test_is_ranked_rejects_gaps_and_inversions() {
        let mut entries = rank_entries(vec![
            Participant::new("A", "a", 300),
            Participant::new("B", "b", 200),
        ]);
        entries[1].rank = 3;
        assert!(!is_ranked(&entries));

        entries[1].rank = 2;
        entries[1].donations = 400;
        assert!(!is_ranked(&entries));
    }

    #[test]
    fn test_avatar_from_first_name() {
        let p = Participant::new("Sarah Johnson", "sarahj2025", 6800);
        assert_eq!(p.avatar_url, avatar_url_for(&p.name));
        assert_eq!(
            avatar_url_for("Sarah Johnson"),
            "https://api.dicebear.com/7.x/avataaars/svg?seed=sarah"
        );
    }
}
