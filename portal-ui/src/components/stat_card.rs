//! Stat Card Component
//!
//! A labelled headline number with an icon and optional footer line.

use leptos::*;

/// Stat card component
#[component]
pub fn StatCard(
    /// Caption above the value
    #[prop(into)]
    label: String,
    /// Display value, already formatted
    #[prop(into)]
    value: MaybeSignal<String>,
    /// Emoji icon
    icon: &'static str,
    /// Tailwind background class for the icon tile
    #[prop(default = "bg-gray-100")]
    accent: &'static str,
    /// Optional line under the value
    #[prop(optional, into)]
    footer: Option<String>,
) -> impl IntoView {
    view! {
        <div class="card">
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-sm font-medium text-gray-600">{label}</p>
                    <p class="text-3xl font-bold text-gray-900">{move || value.get()}</p>
                </div>
                <div class=format!("flex items-center justify-center w-12 h-12 rounded-lg {}", accent)>
                    <span class="text-2xl">{icon}</span>
                </div>
            </div>

            {footer.map(|text| view! {
                <div class="mt-4 text-sm text-gray-600">{text}</div>
            })}
        </div>
    }
}
