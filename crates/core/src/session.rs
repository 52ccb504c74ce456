// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session state and the injectable session provider.
//!
//! The session provider owns the only process-wide mutable state in this
//! core: the current principal. Consumers (the route guard, the dashboard
//! redirect) take the provider as an explicit dependency and observe its
//! state; they never mutate it. The application shell drives the provider
//! through its lifecycle: `initialize` when bootstrap starts, `set_state`
//! when login, profile refresh, logout, or a 401 resolves, `teardown` when
//! the shell unmounts.

use clinilog_domain::Principal;

/// The tri-state session signal observed by consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// The identity bootstrap or a refresh is in flight.
    Loading,
    /// No authenticated principal. Also the shape a failed identity fetch
    /// surfaces as; consumers never see a crash.
    Anonymous,
    /// An authenticated principal is present.
    Authenticated(Principal),
}

impl SessionState {
    /// Returns whether the session is still resolving.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the authenticated principal, if present.
    #[must_use]
    pub const fn principal(&self) -> Option<&Principal> {
        match self {
            Self::Authenticated(principal) => Some(principal),
            Self::Loading | Self::Anonymous => None,
        }
    }
}

/// Identifies one subscription on a session provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A change listener invoked with the new state after every update.
pub type SessionListener = Box<dyn Fn(&SessionState)>;

/// The session/identity provider contract.
///
/// Implementations own session bootstrap, login, logout, and refresh; this
/// core only defines the observation surface those flows feed.
pub trait SessionProvider {
    /// Enters the `Loading` state; the identity bootstrap has started.
    fn initialize(&mut self);

    /// Returns the current session state.
    fn current_state(&self) -> SessionState;

    /// Registers a change listener and returns its subscription id.
    fn subscribe(&mut self, listener: SessionListener) -> SubscriptionId;

    /// Removes a previously registered listener. Unknown ids are ignored.
    fn unsubscribe(&mut self, id: SubscriptionId);

    /// Drops every listener and returns the session to `Anonymous`.
    fn teardown(&mut self);
}

/// The in-process [`SessionProvider`] implementation.
///
/// Single-threaded by design: the UI process that renders also drives the
/// session, so there is no locking and listeners run synchronously inside
/// [`InMemorySessionProvider::set_state`].
pub struct InMemorySessionProvider {
    state: SessionState,
    listeners: Vec<(SubscriptionId, SessionListener)>,
    next_id: u64,
}

impl InMemorySessionProvider {
    /// Creates a provider in the `Anonymous` state with no listeners.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: SessionState::Anonymous,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Replaces the session state and notifies every listener.
    ///
    /// Called by the application shell whenever an identity flow resolves:
    /// successful login, bootstrap completion, profile refresh, logout, or
    /// a 401 clearing the session.
    pub fn set_state(&mut self, state: SessionState) {
        self.state = state;
        for (_, listener) in &self.listeners {
            listener(&self.state);
        }
    }
}

impl Default for InMemorySessionProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InMemorySessionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemorySessionProvider")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl SessionProvider for InMemorySessionProvider {
    fn initialize(&mut self) {
        self.set_state(SessionState::Loading);
    }

    fn current_state(&self) -> SessionState {
        self.state.clone()
    }

    fn subscribe(&mut self, listener: SessionListener) -> SubscriptionId {
        let id: SubscriptionId = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
    }

    fn teardown(&mut self) {
        self.listeners.clear();
        self.state = SessionState::Anonymous;
    }
}
