// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::AccountStatus;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Principal identifier is empty or invalid.
    InvalidPrincipalId(String),
    /// Principal email is empty or not a plausible address.
    InvalidEmail(String),
    /// Principal display name is empty or invalid.
    InvalidDisplayName(String),
    /// Appointment client name is empty or invalid.
    InvalidClientName(String),
    /// Account status string is not recognized.
    InvalidAccountStatus(String),
    /// Requested account status transition is not permitted.
    InvalidStatusTransition {
        /// The current account status.
        from: AccountStatus,
        /// The requested target status.
        to: AccountStatus,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPrincipalId(msg) => write!(f, "Invalid principal id: {msg}"),
            Self::InvalidEmail(msg) => write!(f, "Invalid email: {msg}"),
            Self::InvalidDisplayName(msg) => write!(f, "Invalid display name: {msg}"),
            Self::InvalidClientName(msg) => write!(f, "Invalid client name: {msg}"),
            Self::InvalidAccountStatus(value) => {
                write!(f, "Unknown account status: '{value}'")
            }
            Self::InvalidStatusTransition { from, to } => {
                write!(
                    f,
                    "Account status cannot change from {from} to {to}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
