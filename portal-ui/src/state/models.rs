//! API Payload Types
//!
//! Mirrors of the records served by the Intern Portal API.

/// The current intern's referral/donation record
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternProfile {
    pub name: String,
    pub referral_code: String,
    pub donations: u64,
}

/// One row of the leaderboard, already ranked by the server
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: String,
    pub referral_code: String,
    pub donations: u64,
    #[serde(rename = "avatar")]
    pub avatar_url: String,
}

/// Health check payload
#[derive(Clone, Debug, serde::Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_leaderboard_payload() {
        let json = r#"[
            {"rank": 1, "name": "Vishwa Vikas", "referralCode": "vishwavy2025",
             "donations": 7400, "avatar": "https://api.dicebear.com/7.x/avataaars/svg?seed=vishwa"}
        ]"#;

        let entries: Vec<LeaderboardEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0].referral_code, "vishwavy2025");
        assert!(entries[0].avatar_url.ends_with("seed=vishwa"));
    }

    #[test]
    fn test_decode_profile_payload() {
        let json = r#"{"name": "Vishwa Vikas", "referralCode": "vishwavy2025", "donations": 7400}"#;
        let profile: InternProfile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.donations, 7400);
    }
}
