//! Leaderboard Aggregation
//!
//! Pure derived values over the server-ranked entries. Recomputed on every
//! render, so nothing here may have side effects.

use super::models::LeaderboardEntry;

/// Ranks up to and including this one get podium treatment
pub const TOP_TIER_CUTOFF: u32 = 3;

/// Summary row shown above the leaderboard
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LeaderboardSummary {
    pub participants: usize,
    pub total_donations: u64,
    /// Rounded to the nearest dollar; 0 when there are no participants
    pub average_per_person: u64,
}

impl LeaderboardSummary {
    pub fn from_entries(entries: &[LeaderboardEntry]) -> Self {
        let participants = entries.len();
        let total_donations: u64 = entries.iter().map(|e| e.donations).sum();

        Self {
            participants,
            total_donations,
            average_per_person: rounded_average(total_donations, participants),
        }
    }
}

/// Integer average rounded half up, 0 for an empty set
fn rounded_average(total: u64, count: usize) -> u64 {
    if count == 0 {
        return 0;
    }
    let count = count as u64;
    (total + count / 2) / count
}

/// Visual treatment for a rank
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankTier {
    Gold,
    Silver,
    Bronze,
    Standard,
}

impl RankTier {
    /// Tier for a 1-based rank; anything past [`TOP_TIER_CUTOFF`] is Standard
    pub fn for_rank(rank: u32) -> Self {
        if rank == 0 || rank > TOP_TIER_CUTOFF {
            return RankTier::Standard;
        }
        match rank {
            1 => RankTier::Gold,
            2 => RankTier::Silver,
            _ => RankTier::Bronze,
        }
    }

    pub fn is_podium(self) -> bool {
        self != RankTier::Standard
    }

    /// Badge background classes
    pub fn badge_class(self) -> &'static str {
        match self {
            RankTier::Gold => "bg-gradient-to-r from-yellow-400 to-yellow-600 text-white",
            RankTier::Silver => "bg-gradient-to-r from-gray-300 to-gray-500 text-white",
            RankTier::Bronze => "bg-gradient-to-r from-amber-500 to-amber-700 text-white",
            RankTier::Standard => "bg-gray-100 text-gray-600",
        }
    }

    /// Icon shown next to the name, `None` for the plain `#n` label
    pub fn icon(self) -> Option<&'static str> {
        match self {
            RankTier::Gold => Some("👑"),
            RankTier::Silver => Some("🥈"),
            RankTier::Bronze => Some("🥉"),
            RankTier::Standard => None,
        }
    }
}

/// Rank of the participant with the given referral code
pub fn rank_of(entries: &[LeaderboardEntry], referral_code: &str) -> Option<u32> {
    entries
        .iter()
        .find(|e| e.referral_code == referral_code)
        .map(|e| e.rank)
}

/// Dollar amount with thousands separators, e.g. `$31,400`
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("${}", grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(rank: u32, name: &str, code: &str, donations: u64) -> LeaderboardEntry {
        LeaderboardEntry {
            rank,
            name: name.to_string(),
            referral_code: code.to_string(),
            donations,
            avatar_url: String::new(),
        }
    }

    fn sample() -> Vec<LeaderboardEntry> {
        vec![
            entry(1, "Vishwa Vikas", "vishwavy2025", 7400),
            entry(2, "Sarah Johnson", "sarahj2025", 6800),
            entry(3, "Mike Chen", "mikec2025", 6200),
            entry(4, "Emily Davis", "emilyd2025", 5800),
            entry(5, "Alex Rodriguez", "alexr2025", 5200),
        ]
    }

    #[test]
    fn test_summary_of_sample() {
        let summary = LeaderboardSummary::from_entries(&sample());

        assert_eq!(summary.participants, 5);
        assert_eq!(summary.total_donations, 31_400);
        assert_eq!(summary.average_per_person, 6_280);
    }

    #[test]
    fn test_summary_of_empty_is_zero() {
        let summary = LeaderboardSummary::from_entries(&[]);

        assert_eq!(summary, LeaderboardSummary::default());
        assert_eq!(summary.average_per_person, 0);
    }

    #[test]
    fn test_average_rounds_to_nearest() {
        assert_eq!(rounded_average(10, 4), 3); // 2.5 rounds up
        assert_eq!(rounded_average(10, 3), 3); // 3.33
        assert_eq!(rounded_average(11, 3), 4); // 3.67
    }

    #[test]
    fn test_rank_tiers() {
        assert_eq!(RankTier::for_rank(1), RankTier::Gold);
        assert_eq!(RankTier::for_rank(2), RankTier::Silver);
        assert_eq!(RankTier::for_rank(TOP_TIER_CUTOFF), RankTier::Bronze);
        assert_eq!(RankTier::for_rank(TOP_TIER_CUTOFF + 1), RankTier::Standard);
        assert_eq!(RankTier::for_rank(40), RankTier::Standard);
        assert_eq!(RankTier::for_rank(0), RankTier::Standard);

        assert!(RankTier::for_rank(3).is_podium());
        assert!(!RankTier::for_rank(4).is_podium());
        assert!(RankTier::Standard.icon().is_none());
        assert_eq!(
            RankTier::for_rank(4).badge_class(),
            RankTier::for_rank(9).badge_class()
        );
    }

    #[test]
    fn test_rank_of() {
        let entries = sample();
        assert_eq!(rank_of(&entries, "mikec2025"), Some(3));
        assert_eq!(rank_of(&entries, "nobody"), None);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0), "$0");
        assert_eq!(format_amount(999), "$999");
        assert_eq!(format_amount(7400), "$7,400");
        assert_eq!(format_amount(31_400), "$31,400");
        assert_eq!(format_amount(1_234_567), "$1,234,567");
    }
}
