//! Intern Portal Dashboard
//!
//! Referral and donation dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Profile overview with a copyable referral code
//! - Ranked leaderboard with summary totals
//! - Configurable API endpoint
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It reads everything from the Intern Portal API over HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
