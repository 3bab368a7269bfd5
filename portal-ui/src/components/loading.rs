//! Loading and Error Components
//!
//! Placeholders for the Loading and Error states of a fetched view.

use leptos::*;

/// Full-page loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-96">
            <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-primary-600" />
        </div>
    }
}

/// Error message with a retry button
#[component]
pub fn ErrorPanel(
    #[prop(into)]
    message: String,
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="text-center py-12">
            <div class="text-red-600 mb-4">{message}</div>
            <button
                on:click=move |_| on_retry.call(())
                class="btn-primary"
            >
                "Try Again"
            </button>
        </div>
    }
}
