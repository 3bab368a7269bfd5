//! Toast Notifications
//!
//! Dismissible banners for the settings page's save and connection results.

use leptos::*;

use crate::state::global::GlobalState;

#[derive(Clone, Copy)]
enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✕",
        }
    }

    fn border_class(self) -> &'static str {
        match self {
            ToastKind::Success => "border-green-500 text-green-700",
            ToastKind::Error => "border-red-500 text-red-700",
        }
    }
}

/// Toast container, bottom right
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-6 right-4 z-50 space-y-2">
            {move || state.success.get().map(|text| view! {
                <ToastBanner text=text kind=ToastKind::Success slot=state.success />
            })}
            {move || state.error.get().map(|text| view! {
                <ToastBanner text=text kind=ToastKind::Error slot=state.error />
            })}
        </div>
    }
}

#[component]
fn ToastBanner(
    text: String,
    kind: ToastKind,
    /// Signal cleared by the close button
    slot: RwSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <div
            class=format!(
                "flex items-center space-x-3 bg-white border-l-4 {} px-4 py-3 rounded shadow-md",
                kind.border_class()
            )
            role="status"
        >
            <span class="font-bold">{kind.icon()}</span>
            <span class="text-sm text-gray-800">{text}</span>
            <button
                on:click=move |_| slot.set(None)
                class="ml-2 text-gray-400 hover:text-gray-600"
                aria-label="Dismiss"
            >
                "×"
            </button>
        </div>
    }
}
