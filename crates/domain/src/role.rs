// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Effective-role resolution for route authorization.
//!
//! The identity backend has shipped the actor's role in two shapes over
//! time: a free-form `role` string and, before that, a bare `is_admin`
//! boolean. [`resolve_role`] is the single adapter from those wire signals
//! to the closed [`Role`] enumeration; nothing else in the system inspects
//! the raw fields.
//!
//! ## Invariants
//!
//! - Resolution is total: every principal (and `None`) maps to exactly one
//!   role. Malformed payloads degrade to the Collaborator default instead
//!   of failing, so an unexpected backend value never locks a user out of
//!   baseline access.
//! - The declared role string takes precedence over the legacy boolean,
//!   and the boolean takes precedence over the default.
//! - Unrecognized role strings are never promoted to Administrator; they
//!   fall through to the legacy boolean and then the default.

use crate::types::Principal;
use serde::{Deserialize, Serialize};

/// Access tiers for route authorization.
///
/// Driver and collector staff exist as registration-time roles in the
/// wider system, but route authorization collapses every non-administrator
/// to the Collaborator tier, so the closed set stays at two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Administrator: full access, including the administrative dashboard,
    /// account approval, and fleet management.
    Administrator,
    /// Collaborator: the operational tier shared by clinic staff, drivers,
    /// and collectors.
    Collaborator,
}

impl Role {
    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Administrator => "Administrator",
            Self::Collaborator => "Collaborator",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Declared-role strings recognized as Administrator.
const ADMINISTRATOR_ALIASES: [&str; 3] = ["admin", "administrator", "administrador"];

/// Declared-role strings recognized as Collaborator-tier, including the
/// driver and collector registration roles.
const COLLABORATOR_ALIASES: [&str; 6] = [
    "colaborador",
    "collaborator",
    "motorista",
    "driver",
    "coletor",
    "collector",
];

/// Resolves a principal's effective role.
///
/// Precedence, in order:
///
/// 1. Declared role matching an administrator alias → `Administrator`
/// 2. Declared role matching a collaborator-tier alias → `Collaborator`
/// 3. Legacy `is_admin` flag, when present
/// 4. The `Collaborator` default
///
/// Alias matching is case-insensitive and ignores surrounding whitespace.
/// The function is total: an absent principal resolves to the default, on
/// the understanding that callers gate on authentication separately
/// ([`has_any_role`] does).
#[must_use]
pub fn resolve_role(principal: Option<&Principal>) -> Role {
    let Some(principal) = principal else {
        return Role::Collaborator;
    };

    if let Some(declared) = principal.role.as_deref() {
        let normalized = declared.trim().to_lowercase();
        if ADMINISTRATOR_ALIASES.contains(&normalized.as_str()) {
            return Role::Administrator;
        }
        if COLLABORATOR_ALIASES.contains(&normalized.as_str()) {
            return Role::Collaborator;
        }
        // Unrecognized strings fall through to the legacy flag.
    }

    match principal.is_admin {
        Some(true) => Role::Administrator,
        Some(false) | None => Role::Collaborator,
    }
}

/// Checks whether a principal's effective role is in an allow-list.
///
/// An absent principal never matches, regardless of the allow-list. An
/// empty allow-list never matches, regardless of the principal: a route
/// configured with no roles is unreachable, not a wildcard.
#[must_use]
pub fn has_any_role(principal: Option<&Principal>, allowed: &[Role]) -> bool {
    match principal {
        None => false,
        Some(p) => allowed.contains(&resolve_role(Some(p))),
    }
}
