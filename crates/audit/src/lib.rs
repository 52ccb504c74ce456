// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use clinilog_domain::Role;

/// The principal an access decision was made about.
///
/// A snapshot of the identity at the moment of the decision: the record
/// stays meaningful even if the account is later renamed or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The principal's unique identifier.
    pub id: String,
    /// The principal's email at the time of the decision.
    pub email: String,
    /// The effective role that was resolved for the decision.
    pub role: Role,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The principal's unique identifier
    /// * `email` - The principal's email
    /// * `role` - The resolved effective role
    #[must_use]
    pub const fn new(id: String, email: String, role: Role) -> Self {
        Self { id, email, role }
    }
}

/// An immutable record of one access-control denial.
///
/// Every denial produces exactly one record capturing who was denied,
/// what path they attempted, and which roles the route allowed at that
/// moment. Records are for audit of denials, not error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessDenial {
    /// The denied principal.
    pub actor: Actor,
    /// The navigation target the principal attempted to reach.
    pub attempted_path: String,
    /// The allow-list configured on the route at the time of denial.
    pub allowed_roles: Vec<Role>,
}

impl AccessDenial {
    /// Creates a new `AccessDenial`.
    ///
    /// Once created, a denial record is immutable.
    ///
    /// # Arguments
    ///
    /// * `actor` - The denied principal
    /// * `attempted_path` - The attempted navigation target
    /// * `allowed_roles` - The route's allow-list at the time of denial
    #[must_use]
    pub const fn new(actor: Actor, attempted_path: String, allowed_roles: Vec<Role>) -> Self {
        Self {
            actor,
            attempted_path,
            allowed_roles,
        }
    }
}

/// A destination for denial records.
///
/// The route guard takes a sink as an explicit dependency; what the sink
/// does with the records (buffer for batch upload, print in tests) is the
/// caller's concern. Recording is infallible.
pub trait AuditSink {
    /// Records one denial.
    fn record_denial(&mut self, denial: AccessDenial);
}

/// An [`AuditSink`] that keeps records in memory.
///
/// Used by tests to assert on emitted records, and by the application
/// shell to buffer denials between uploads.
#[derive(Debug, Default)]
pub struct InMemoryAuditSink {
    denials: Vec<AccessDenial>,
}

impl InMemoryAuditSink {
    /// Creates a new empty sink.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            denials: Vec::new(),
        }
    }

    /// Returns the recorded denials, oldest first.
    #[must_use]
    pub fn denials(&self) -> &[AccessDenial] {
        &self.denials
    }

    /// Removes and returns every recorded denial.
    pub fn drain(&mut self) -> Vec<AccessDenial> {
        std::mem::take(&mut self.denials)
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record_denial(&mut self, denial: AccessDenial) {
        self.denials.push(denial);
    }
}
