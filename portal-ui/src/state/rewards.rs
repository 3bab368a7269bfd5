//! Rewards Catalogue
//!
//! Static unlockables shown on the dashboard.

#[derive(Clone, Debug, PartialEq)]
pub struct Reward {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub unlocked: bool,
    /// Percent complete, 0 to 100
    pub progress: u8,
}

pub fn catalogue() -> Vec<Reward> {
    vec![
        Reward {
            id: 1,
            name: "Early Access Pass",
            description: "Get early access to new features",
            icon: "🎁",
            unlocked: true,
            progress: 100,
        },
        Reward {
            id: 2,
            name: "Premium Badge",
            description: "Exclusive premium status badge",
            icon: "🏅",
            unlocked: false,
            progress: 75,
        },
        Reward {
            id: 3,
            name: "Mentor Session",
            description: "1-on-1 session with senior developer",
            icon: "👤",
            unlocked: false,
            progress: 50,
        },
        Reward {
            id: 4,
            name: "Conference Ticket",
            description: "Free ticket to tech conference",
            icon: "🎯",
            unlocked: false,
            progress: 25,
        },
    ]
}

pub fn unlocked_count(rewards: &[Reward]) -> usize {
    rewards.iter().filter(|r| r.unlocked).count()
}
