// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize};

/// The clinic's operational timezone.
///
/// Every appointment timestamp is mapped onto a calendar date in this one
/// zone. Grid construction and event attachment both consume the resulting
/// wall-clock dates, so the two computations always agree on what "day" a
/// timestamp belongs to.
pub const CLINIC_TZ: Tz = chrono_tz::America::Sao_Paulo;

/// Represents the lifecycle state of a staff account.
///
/// New registrations start as `Pending` and are reviewed by an
/// administrator before the account can sign in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    /// Registered, awaiting administrator review.
    #[default]
    Pending,
    /// Reviewed and approved. The only state that may sign in.
    Approved,
    /// Registration rejected. Terminal.
    Rejected,
    /// Temporarily barred by an administrator.
    Suspended,
    /// Deactivated account retained for history.
    Inactive,
}

impl AccountStatus {
    /// Parses an account status from a wire string.
    ///
    /// Both the English and the Portuguese spellings used by the backend
    /// are accepted, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a known status.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s.trim().to_lowercase().as_str() {
            "pending" | "pendente" => Ok(Self::Pending),
            "approved" | "aprovado" => Ok(Self::Approved),
            "rejected" | "rejeitado" => Ok(Self::Rejected),
            "suspended" | "suspenso" => Ok(Self::Suspended),
            "inactive" | "inativo" => Ok(Self::Inactive),
            _ => Err(DomainError::InvalidAccountStatus(s.to_string())),
        }
    }

    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Suspended => "suspended",
            Self::Inactive => "inactive",
        }
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// Valid transitions are:
    /// - Pending → Approved | Rejected
    /// - Approved → Suspended | Inactive
    /// - Suspended → Approved | Inactive
    /// - Inactive → Approved
    ///
    /// Rejected is terminal.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Approved | Self::Rejected)
                | (Self::Approved, Self::Suspended | Self::Inactive)
                | (Self::Suspended, Self::Approved | Self::Inactive)
                | (Self::Inactive, Self::Approved)
        )
    }

    /// Applies a transition, returning the new status.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition is not permitted.
    pub const fn transition_to(self, target: Self) -> Result<Self, DomainError> {
        if self.can_transition_to(target) {
            Ok(target)
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: self,
                to: target,
            })
        }
    }

    /// Returns whether an account in this status may sign in.
    #[must_use]
    pub const fn may_sign_in(&self) -> bool {
        matches!(self, Self::Approved)
    }
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents an authenticated actor as delivered by the identity backend.
///
/// The `role` string and the legacy `is_admin` flag are the backend's raw
/// signals and must not be consulted directly: the effective role is
/// determined by [`crate::resolve_role`], the single adapter from the wire
/// shape to the closed [`crate::Role`] enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    /// The unique identifier assigned by the backend.
    pub id: String,
    /// The account email address.
    pub email: String,
    /// The display name shown in the UI.
    pub name: String,
    /// The declared role string, exactly as the backend sent it.
    /// May be absent, misspelled, or from an older payload variant.
    #[serde(default)]
    pub role: Option<String>,
    /// Legacy administrator flag from payloads that predate the role field.
    #[serde(default, alias = "is_admin")]
    pub is_admin: Option<bool>,
    /// The account lifecycle status, when the payload carried a
    /// recognizable one. An unknown status string degrades to `None`
    /// rather than failing the whole payload.
    #[serde(default, deserialize_with = "lenient_account_status")]
    pub status: Option<AccountStatus>,
    /// When the account was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Principal {
    /// Creates a new `Principal` with only the required identity fields.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier assigned by the backend
    /// * `email` - The account email address
    /// * `name` - The display name
    #[must_use]
    pub const fn new(id: String, email: String, name: String) -> Self {
        Self {
            id,
            email,
            name,
            role: None,
            is_admin: None,
            status: None,
            created_at: None,
        }
    }
}

/// Deserializes an account status leniently.
///
/// Absent, null, and unrecognized values all become `None`; recognized
/// English or Portuguese spellings become the parsed status.
fn lenient_account_status<'de, D>(deserializer: D) -> Result<Option<AccountStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| AccountStatus::parse(&s).ok()))
}

/// Represents a scheduled collection appointment.
///
/// The calendar only ever reads the scheduled-for instant; the remaining
/// fields are carried for the agenda views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// The canonical numeric identifier assigned by the backend.
    /// `None` indicates the appointment has not been persisted yet.
    pub appointment_id: Option<i64>,
    /// The client this appointment serves.
    pub client_name: String,
    /// The scheduled instant, UTC.
    pub scheduled_for: DateTime<Utc>,
    /// Free-form note for the logistics team.
    #[serde(default)]
    pub note: Option<String>,
}

impl Appointment {
    /// Creates a new `Appointment` without a persisted ID.
    ///
    /// # Arguments
    ///
    /// * `client_name` - The client this appointment serves
    /// * `scheduled_for` - The scheduled instant, UTC
    #[must_use]
    pub const fn new(client_name: String, scheduled_for: DateTime<Utc>) -> Self {
        Self {
            appointment_id: None,
            client_name,
            scheduled_for,
            note: None,
        }
    }

    /// Creates an `Appointment` with an existing persisted ID.
    #[must_use]
    pub const fn with_id(
        appointment_id: i64,
        client_name: String,
        scheduled_for: DateTime<Utc>,
    ) -> Self {
        Self {
            appointment_id: Some(appointment_id),
            client_name,
            scheduled_for,
            note: None,
        }
    }

    /// Returns the calendar date this appointment falls on, in the
    /// clinic's operational timezone.
    #[must_use]
    pub fn clinic_date(&self) -> NaiveDate {
        self.scheduled_for.with_timezone(&CLINIC_TZ).date_naive()
    }
}
