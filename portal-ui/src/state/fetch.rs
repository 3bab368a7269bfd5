//! Per-View Fetch State
//!
//! Each view owns one [`FetchSlot`]: Loading on mount, then Ready or Error,
//! with retry going back to Loading. Every fetch carries a [`FetchTicket`];
//! a response is applied only while its ticket is still the newest, so a
//! late reply to a superseded request can never overwrite newer state.

use leptos::*;
use std::fmt::Display;
use std::future::Future;

/// What a view currently shows
#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    Loading,
    /// User-facing message; the underlying cause is only logged
    Error(String),
    Ready(T),
}

/// Identifies one issued fetch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Fetch state plus the generation counter guarding against stale replies
#[derive(Clone, Debug)]
pub struct FetchSlot<T> {
    state: FetchState<T>,
    generation: u64,
}

impl<T> Default for FetchSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FetchSlot<T> {
    /// Initial slot, Loading before the first fetch is issued
    pub fn new() -> Self {
        Self {
            state: FetchState::Loading,
            generation: 0,
        }
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Enter Loading and supersede any in-flight fetch
    pub fn begin(&mut self) -> FetchTicket {
        self.generation += 1;
        self.state = FetchState::Loading;
        FetchTicket(self.generation)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Apply a fetch result if its ticket is still current
    ///
    /// Failures become `Error(user_message)`. Returns whether the result was
    /// applied.
    pub fn complete<E>(
        &mut self,
        ticket: FetchTicket,
        result: Result<T, E>,
        user_message: &str,
    ) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        self.state = match result {
            Ok(data) => FetchState::Ready(data),
            Err(_) => FetchState::Error(user_message.to_string()),
        };
        true
    }

    /// Drop interest in every outstanding fetch (view teardown)
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    pub fn ready(&self) -> Option<&T> {
        match &self.state {
            FetchState::Ready(data) => Some(data),
            _ => None,
        }
    }
}

/// Reactive handle returned by [`use_fetch`]
pub struct FetchHandle<T: 'static> {
    pub slot: RwSignal<FetchSlot<T>>,
    /// Re-enter Loading and re-issue the same fetch
    pub retry: Callback<()>,
}

impl<T: 'static> Clone for FetchHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for FetchHandle<T> {}

/// Create a fetch slot for the current view and issue the first fetch
///
/// `what` names the data in console diagnostics, `user_message` is what the
/// view shows on failure. The slot is invalidated when the view is torn down.
pub fn use_fetch<T, E, F, Fut>(
    what: &'static str,
    user_message: &'static str,
    fetcher: F,
) -> FetchHandle<T>
where
    T: 'static,
    E: Display + 'static,
    F: Fn() -> Fut + Clone + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
{
    let slot = create_rw_signal(FetchSlot::new());

    let run = move || {
        let Some(ticket) = slot.try_update(|s| s.begin()) else {
            return;
        };

        let fetcher = fetcher.clone();
        spawn_local(async move {
            let result = fetcher().await;

            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Error fetching {}: {}", what, e).into());
            }

            let applied = slot
                .try_update(|s| s.complete(ticket, result, user_message))
                .unwrap_or(false);

            if !applied {
                web_sys::console::debug_1(&format!("Discarded stale {} response", what).into());
            }
        });
    };

    let retry = Callback::new({
        let run = run.clone();
        move |_: ()| run()
    });

    // Fetch once on mount
    create_effect(move |_| untrack(|| run()));

    on_cleanup(move || {
        slot.try_update(|s| s.invalidate());
    });

    FetchHandle { slot, retry }
}
