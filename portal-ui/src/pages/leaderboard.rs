//! Leaderboard Page
//!
//! Ranked participants with summary totals.

use leptos::*;

use crate::api;
use crate::components::{ErrorPanel, Loading, StatCard};
use crate::state::fetch::{use_fetch, FetchState};
use crate::state::leaderboard::{format_amount, LeaderboardSummary, RankTier};
use crate::state::models::LeaderboardEntry;

/// Leaderboard page component
#[component]
pub fn Leaderboard() -> impl IntoView {
    let board = use_fetch(
        "leaderboard data",
        "Failed to fetch leaderboard data",
        api::fetch_leaderboard,
    );

    move || {
        board.slot.with(|slot| match slot.state() {
            FetchState::Loading => view! { <Loading /> }.into_view(),
            FetchState::Error(message) => view! {
                <ErrorPanel message=message.clone() on_retry=board.retry />
            }
            .into_view(),
            FetchState::Ready(entries) => view! {
                <LeaderboardView entries=entries.clone() />
            }
            .into_view(),
        })
    }
}

#[component]
fn LeaderboardView(entries: Vec<LeaderboardEntry>) -> impl IntoView {
    let summary = LeaderboardSummary::from_entries(&entries);

    view! {
        <div class="space-y-8">
            // Header
            <div class="card">
                <div class="flex items-center justify-between">
                    <div>
                        <h1 class="text-2xl font-bold text-gray-900 flex items-center space-x-3">
                            <span>"🏆"</span>
                            <span>"Leaderboard"</span>
                        </h1>
                        <p class="text-gray-600 mt-1">"Top performers this month"</p>
                    </div>
                    <div class="text-sm text-gray-500">"Updated daily"</div>
                </div>
            </div>

            // Stats overview
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <StatCard
                    label="Total Participants"
                    value=summary.participants.to_string()
                    icon="👥"
                    accent="bg-blue-100"
                />
                <StatCard
                    label="Total Donations"
                    value=format_amount(summary.total_donations)
                    icon="💵"
                    accent="bg-green-100"
                />
                <StatCard
                    label="Average per Person"
                    value=format_amount(summary.average_per_person)
                    icon="📈"
                    accent="bg-purple-100"
                />
            </div>

            // Rankings
            <div class="card">
                <h2 class="text-xl font-bold text-gray-900 mb-6">"Rankings"</h2>
                {if entries.is_empty() {
                    view! {
                        <p class="text-gray-500 text-sm">"No participants yet"</p>
                    }
                    .into_view()
                } else {
                    view! {
                        <div class="space-y-3">
                            {entries
                                .into_iter()
                                .map(|entry| view! { <LeaderboardRow entry=entry /> })
                                .collect_view()}
                        </div>
                    }
                    .into_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn LeaderboardRow(entry: LeaderboardEntry) -> impl IntoView {
    let tier = RankTier::for_rank(entry.rank);

    let row_class = if tier.is_podium() {
        "flex items-center justify-between p-4 rounded-lg border-2 border-yellow-200 bg-yellow-50"
    } else {
        "flex items-center justify-between p-4 rounded-lg border border-gray-200"
    };

    let marker = match tier.icon() {
        Some(icon) => view! { <span class="text-2xl">{icon}</span> }.into_view(),
        None => view! {
            <span class="text-lg font-bold text-gray-400">{format!("#{}", entry.rank)}</span>
        }
        .into_view(),
    };

    view! {
        <div class=row_class>
            <div class="flex items-center space-x-4">
                <div class="w-10 flex justify-center">{marker}</div>
                <img
                    src=entry.avatar_url
                    alt=entry.name.clone()
                    class="w-12 h-12 rounded-full bg-gray-100"
                />
                <div>
                    <p class="font-semibold text-gray-900">{entry.name}</p>
                    <p class="text-sm font-mono text-gray-500">{entry.referral_code}</p>
                </div>
            </div>
            <div class="flex items-center space-x-3">
                <span class="text-lg font-bold text-gray-900">{format_amount(entry.donations)}</span>
                <span class=format!("px-3 py-1 rounded-full text-sm font-medium {}", tier.badge_class())>
                    {format!("#{}", entry.rank)}
                </span>
            </div>
        </div>
    }
}
