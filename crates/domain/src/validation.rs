// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Appointment, Principal};

/// Validates a principal's identity fields.
///
/// # Errors
///
/// Returns an error if:
/// - The id is empty
/// - The email is empty or lacks an `@`
/// - The display name is empty
pub fn validate_principal_fields(principal: &Principal) -> Result<(), DomainError> {
    if principal.id.trim().is_empty() {
        return Err(DomainError::InvalidPrincipalId(String::from(
            "Principal id must not be empty",
        )));
    }

    let email = principal.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(DomainError::InvalidEmail(format!(
            "'{}' is not a plausible email address",
            principal.email
        )));
    }

    if principal.name.trim().is_empty() {
        return Err(DomainError::InvalidDisplayName(String::from(
            "Display name must not be empty",
        )));
    }

    Ok(())
}

/// Validates an appointment's fields.
///
/// # Errors
///
/// Returns an error if the client name is empty.
pub fn validate_appointment_fields(appointment: &Appointment) -> Result<(), DomainError> {
    if appointment.client_name.trim().is_empty() {
        return Err(DomainError::InvalidClientName(String::from(
            "Client name must not be empty",
        )));
    }

    Ok(())
}
