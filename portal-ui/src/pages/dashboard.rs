//! Dashboard Page
//!
//! The intern's profile: donations, referral code, rank, and rewards.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::api::clipboard;
use crate::components::{ErrorPanel, Loading, StatCard};
use crate::state::clipboard::{AckTimer, CopyFeedback};
use crate::state::fetch::{use_fetch, FetchSlot, FetchState};
use crate::state::leaderboard::{format_amount, rank_of};
use crate::state::models::{InternProfile, LeaderboardEntry};
use crate::state::rewards::{catalogue, unlocked_count, Reward};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let profile = use_fetch(
        "intern data",
        "Failed to fetch intern data",
        api::fetch_intern,
    );

    // Only feeds the rank card; its failure just leaves the card blank
    let leaderboard = use_fetch(
        "leaderboard data",
        "Failed to fetch leaderboard data",
        api::fetch_leaderboard,
    );

    move || {
        profile.slot.with(|slot| match slot.state() {
            FetchState::Loading => view! { <Loading /> }.into_view(),
            FetchState::Error(message) => view! {
                <ErrorPanel message=message.clone() on_retry=profile.retry />
            }
            .into_view(),
            FetchState::Ready(intern) => view! {
                <ProfileOverview intern=intern.clone() leaderboard=leaderboard.slot />
            }
            .into_view(),
        })
    }
}

#[component]
fn ProfileOverview(
    intern: InternProfile,
    leaderboard: RwSignal<FetchSlot<Vec<LeaderboardEntry>>>,
) -> impl IntoView {
    let code = intern.referral_code.clone();
    let current_rank = Signal::derive(move || {
        leaderboard.with(|slot| {
            slot.ready()
                .and_then(|entries| rank_of(entries, &code))
                .map(|rank| format!("#{}", rank))
                .unwrap_or_else(|| "—".to_string())
        })
    });

    let last_updated = chrono::Local::now().format("%-m/%-d/%Y").to_string();

    view! {
        <div class="space-y-8">
            // Welcome section
            <div class="card">
                <div class="flex items-center justify-between">
                    <div>
                        <h1 class="text-2xl font-bold text-gray-900">
                            {format!("Welcome back, {}! 👋", intern.name)}
                        </h1>
                        <p class="text-gray-600 mt-1">"Here's your Intern Portal dashboard"</p>
                    </div>
                    <div class="hidden sm:block text-sm text-gray-500">
                        {format!("Last updated: {}", last_updated)}
                    </div>
                </div>
            </div>

            // Stats grid
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <StatCard
                    label="Total Donations"
                    value=format_amount(intern.donations)
                    icon="💵"
                    accent="bg-green-100"
                />
                <ReferralCard code=intern.referral_code />
                <StatCard
                    label="Current Rank"
                    value=current_rank
                    icon="🏅"
                    accent="bg-yellow-100"
                    footer="Among all participants this month"
                />
            </div>

            <RewardsSection />

            // Quick actions
            <div class="card">
                <h2 class="text-xl font-bold text-gray-900 mb-4">"Quick Actions"</h2>
                <A
                    href="/leaderboard"
                    class="inline-flex items-center space-x-3 p-4 border border-gray-200 rounded-lg hover:bg-gray-50 transition-colors"
                >
                    <span>"🏆"</span>
                    <span class="font-medium">"View Leaderboard"</span>
                </A>
            </div>
        </div>
    }
}

/// Referral code with a copy-to-clipboard button
#[component]
fn ReferralCard(code: String) -> impl IntoView {
    let feedback = create_rw_signal(CopyFeedback::default());
    let ack_timer = store_value(AckTimer::new(feedback));

    on_cleanup(move || {
        ack_timer.try_update_value(|timer| timer.cancel());
    });

    let code_to_copy = code.clone();
    let copy = move |_| {
        let code = code_to_copy.clone();
        spawn_local(async move {
            match clipboard::write_text(&code).await {
                Ok(()) => {
                    ack_timer.try_update_value(|timer| timer.acknowledge());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to copy: {}", e).into());
                }
            }
        });
    };

    view! {
        <div class="card">
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-sm font-medium text-gray-600">"Your Referral Code"</p>
                    <p class="text-xl font-mono font-bold text-primary-600">{code}</p>
                </div>
                <div class="flex items-center justify-center w-12 h-12 bg-primary-100 rounded-lg">
                    <span class="text-2xl">"🔗"</span>
                </div>
            </div>
            <div class="mt-4">
                <button
                    on:click=copy
                    class="flex items-center space-x-2 text-sm text-primary-600 hover:text-primary-700 transition-colors"
                >
                    <span>"📋"</span>
                    <span>
                        {move || if feedback.with(|f| f.is_copied()) { "Copied!" } else { "Copy code" }}
                    </span>
                </button>
            </div>
        </div>
    }
}

#[component]
fn RewardsSection() -> impl IntoView {
    let rewards = catalogue();
    let unlocked = unlocked_count(&rewards);
    let total = rewards.len();

    view! {
        <div class="card">
            <div class="flex items-center justify-between mb-6">
                <h2 class="text-xl font-bold text-gray-900">"Rewards & Unlockables"</h2>
                <span class="text-sm text-gray-500">
                    {format!("{} of {} unlocked", unlocked, total)}
                </span>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                {rewards
                    .into_iter()
                    .map(|reward| view! { <RewardTile reward=reward /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn RewardTile(reward: Reward) -> impl IntoView {
    let tile_class = if reward.unlocked {
        "relative p-4 rounded-lg border-2 border-green-200 bg-green-50"
    } else {
        "relative p-4 rounded-lg border-2 border-gray-200 bg-gray-50"
    };

    view! {
        <div class=tile_class data-reward-id=reward.id>
            {reward.unlocked.then(|| view! {
                <div class="absolute top-2 right-2 w-6 h-6 bg-green-500 rounded-full flex items-center justify-center">
                    <span class="text-white text-xs">"✓"</span>
                </div>
            })}
            <div class="flex items-center space-x-3">
                <span class="text-2xl">{reward.icon}</span>
                <div class="flex-1">
                    <h3 class="font-medium text-sm text-gray-800">{reward.name}</h3>
                    <p class="text-xs text-gray-500 mt-1">{reward.description}</p>
                </div>
            </div>
            {(!reward.unlocked).then(|| view! {
                <div class="mt-3">
                    <div class="flex items-center justify-between text-xs text-gray-500 mb-1">
                        <span>"Progress"</span>
                        <span>{format!("{}%", reward.progress)}</span>
                    </div>
                    <div class="w-full bg-gray-200 rounded-full h-2">
                        <div
                            class="bg-primary-600 h-2 rounded-full transition-all"
                            style=format!("width: {}%", reward.progress)
                        />
                    </div>
                </div>
            })}
        </div>
    }
}
