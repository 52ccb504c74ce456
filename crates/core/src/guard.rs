// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Route guard: the four-state authorization decision.
//!
//! The guard observes the session signal and decides what a protected
//! route renders: a loading indicator, a login redirect, a restricted-
//! access notice, or the guarded content. The decision is re-made on every
//! observed change, so a role update mid-session takes effect on the next
//! render.
//!
//! ## Invariants
//!
//! - A loading session suppresses both the redirect and the forbidden
//!   notice; nothing is decided until the signal resolves
//! - The guard performs no I/O and cannot fail; a provider failure
//!   surfaces as an anonymous session, never a crash
//! - Each entry into the forbidden state emits exactly one audit record;
//!   re-renders of an unchanged denial do not repeat it
//! - The forbidden auto-redirect is a UX softening only; the security
//!   decision is made here, before any content renders

use crate::navigation::{FORBIDDEN_REDIRECT_DELAY, RedirectTarget, destination_for};
use crate::session::SessionState;
use clinilog_audit::{AccessDenial, Actor, AuditSink};
use clinilog_domain::{Role, has_any_role, resolve_role};
use std::time::Duration;
use tracing::{debug, warn};

/// Static configuration of one guarded route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardConfig {
    /// The roles allowed to view the guarded content. Empty means the
    /// route is unreachable, not open.
    pub allowed: Vec<Role>,
    /// The navigation target being guarded, carried into login redirects
    /// and denial records.
    pub attempted_path: String,
}

impl GuardConfig {
    /// Creates a new `GuardConfig`.
    ///
    /// # Arguments
    ///
    /// * `allowed` - The roles allowed to view the guarded content
    /// * `attempted_path` - The navigation target being guarded
    #[must_use]
    pub const fn new(allowed: Vec<Role>, attempted_path: String) -> Self {
        Self {
            allowed,
            attempted_path,
        }
    }
}

/// What a guarded route renders. Exactly one per evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// The session is still resolving; render the loading indicator.
    Loading,
    /// No principal; redirect to sign-in, carrying the attempted path.
    Unauthenticated {
        /// The login redirect with the return path.
        redirect: RedirectTarget,
    },
    /// The principal's role is not in the allow-list; render the
    /// restricted-access notice.
    Forbidden {
        /// The role that was resolved and denied.
        resolved_role: Role,
        /// The safe destination the notice offers (and auto-navigates to).
        fallback: RedirectTarget,
        /// How long the notice stays before auto-navigating.
        redirect_after: Duration,
    },
    /// Render the guarded content unchanged.
    Authorized,
}

/// Evaluates the guard decision for one session state.
///
/// Pure: no I/O, no telemetry, always exactly one outcome. [`RouteGuard`]
/// wraps this with the denial bookkeeping.
#[must_use]
pub fn evaluate(config: &GuardConfig, session: &SessionState) -> GuardOutcome {
    match session {
        SessionState::Loading => GuardOutcome::Loading,
        SessionState::Anonymous => GuardOutcome::Unauthenticated {
            redirect: RedirectTarget::login_returning_to(&config.attempted_path),
        },
        SessionState::Authenticated(principal) => {
            if has_any_role(Some(principal), &config.allowed) {
                GuardOutcome::Authorized
            } else {
                let resolved_role: Role = resolve_role(Some(principal));
                GuardOutcome::Forbidden {
                    resolved_role,
                    fallback: RedirectTarget::to(String::from(destination_for(resolved_role))),
                    redirect_after: FORBIDDEN_REDIRECT_DELAY,
                }
            }
        }
    }
}

/// A guarded route that re-evaluates on every observed session change.
///
/// Keeps one bit of state: whether the current denial has already been
/// recorded. A stable denial observed across many renders emits a single
/// audit record; leaving and re-entering the forbidden state records
/// again.
#[derive(Debug)]
pub struct RouteGuard {
    config: GuardConfig,
    denial_recorded: bool,
}

impl RouteGuard {
    /// Creates a guard for one route configuration.
    #[must_use]
    pub const fn new(config: GuardConfig) -> Self {
        Self {
            config,
            denial_recorded: false,
        }
    }

    /// Returns the route configuration.
    #[must_use]
    pub const fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Evaluates the session state and returns what to render.
    ///
    /// On entry into the forbidden state, emits a warning and records one
    /// [`AccessDenial`] into the sink.
    #[must_use]
    pub fn observe(&mut self, session: &SessionState, audit: &mut dyn AuditSink) -> GuardOutcome {
        let outcome: GuardOutcome = evaluate(&self.config, session);

        match &outcome {
            GuardOutcome::Forbidden { resolved_role, .. } => {
                if !self.denial_recorded {
                    self.denial_recorded = true;
                    self.record_denial(session, *resolved_role, audit);
                }
            }
            GuardOutcome::Authorized => {
                self.denial_recorded = false;
                debug!(path = %self.config.attempted_path, "Access granted");
            }
            GuardOutcome::Loading | GuardOutcome::Unauthenticated { .. } => {
                self.denial_recorded = false;
            }
        }

        outcome
    }

    fn record_denial(
        &self,
        session: &SessionState,
        resolved_role: Role,
        audit: &mut dyn AuditSink,
    ) {
        // Forbidden is only reachable with a principal present.
        let Some(principal) = session.principal() else {
            return;
        };

        warn!(
            path = %self.config.attempted_path,
            role = %resolved_role,
            "Access denied"
        );

        audit.record_denial(AccessDenial::new(
            Actor::new(principal.id.clone(), principal.email.clone(), resolved_role),
            self.config.attempted_path.clone(),
            self.config.allowed.clone(),
        ));
    }
}
