//! Settings Page
//!
//! Lets the user point the dashboard at a different API server.

use leptos::*;

use crate::api;
use crate::state::global::GlobalState;
use crate::state::models::HealthStatus;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Header
            <div class="card">
                <h1 class="text-2xl font-bold text-gray-900">"Settings"</h1>
                <p class="text-gray-600 mt-1">"Configure your Intern Portal dashboard"</p>
            </div>

            // API Connection
            <ApiSettings />
        </div>
    }
}

/// API connection settings
#[component]
fn ApiSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (api_url, set_api_url) = create_signal(api::get_api_base());
    let (testing, set_testing) = create_signal(false);
    let (test_result, set_test_result) = create_signal(None::<Result<HealthStatus, String>>);

    let test_connection = move |_| {
        set_testing.set(true);
        set_test_result.set(None);

        // Check the typed URL; only Save persists it
        let candidate = api_url.get();

        spawn_local(async move {
            match api::check_health(&candidate).await {
                Ok(health) => {
                    state.show_success("Connection successful!");
                    set_test_result.try_set(Some(Ok(health)));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Health check failed: {}", e).into());
                    state.show_error("Connection failed");
                    set_test_result.try_set(Some(Err(e.to_string())));
                }
            }
            set_testing.try_set(false);
        });
    };

    let save_url = move |_| {
        api::set_api_base(&api_url.get());
        set_api_url.set(api::get_api_base());
        state.show_success("API URL saved");
    };

    view! {
        <section class="card">
            <h2 class="text-xl font-bold text-gray-900 mb-4">"API Connection"</h2>

            <div class="space-y-4">
                // API URL
                <div>
                    <label class="block text-sm text-gray-600 mb-2">"Intern Portal API URL"</label>
                    <div class="flex space-x-2">
                        <input
                            type="text"
                            prop:value=move || api_url.get()
                            on:input=move |ev| set_api_url.set(event_target_value(&ev))
                            class="flex-1 rounded-lg px-4 py-3
                                   border border-gray-300 focus:border-primary-500 focus:outline-none"
                        />
                        <button
                            on:click=test_connection
                            disabled=move || testing.get()
                            class="px-4 py-3 bg-gray-200 hover:bg-gray-300 disabled:bg-gray-100
                                   rounded-lg font-medium transition-colors"
                        >
                            {move || if testing.get() { "Testing..." } else { "Test" }}
                        </button>
                        <button on:click=save_url class="btn-primary">
                            "Save"
                        </button>
                    </div>
                </div>

                // Connection status
                <div class="flex items-center space-x-2 text-sm">
                    <span class="text-gray-600">"Status:"</span>
                    {move || {
                        match test_result.get() {
                            Some(Ok(health)) => view! {
                                <span class="text-green-600">
                                    {format!("✓ {} ({})", health.message, health.status)}
                                </span>
                                <span class="text-gray-400">{health.timestamp}</span>
                            }.into_view(),
                            Some(Err(e)) => view! {
                                <span class="text-red-600">{format!("✕ {}", e)}</span>
                            }.into_view(),
                            None => view! {
                                <span class="text-gray-400">"Not tested"</span>
                            }.into_view(),
                        }
                    }}
                </div>
            </div>
        </section>
    }
}
