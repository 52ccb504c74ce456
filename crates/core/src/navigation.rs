// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Navigation targets and the dashboard destination lookup.

use crate::session::SessionState;
use clinilog_domain::{Role, resolve_role};
use std::time::Duration;

/// The sign-in page.
pub const LOGIN_PATH: &str = "/login";

/// The generic dashboard entry point that forwards by role.
pub const DASHBOARD_ENTRY_PATH: &str = "/dashboard";

/// The administrative dashboard.
pub const ADMIN_DASHBOARD_PATH: &str = "/dashboard/administrativo";

/// The operational dashboard.
pub const OPERATIONAL_DASHBOARD_PATH: &str = "/dashboard/operacional";

/// How long the restricted-access notice stays on screen before the view
/// auto-navigates to the fallback destination.
pub const FORBIDDEN_REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Returns the concrete dashboard for a role.
#[must_use]
pub const fn destination_for(role: Role) -> &'static str {
    match role {
        Role::Administrator => ADMIN_DASHBOARD_PATH,
        Role::Collaborator => OPERATIONAL_DASHBOARD_PATH,
    }
}

/// A navigation instruction handed to the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget {
    /// Where to navigate.
    pub path: String,
    /// The path to return to after the destination flow completes.
    /// Carried by login redirects so sign-in can send the user back.
    pub return_to: Option<String>,
}

impl RedirectTarget {
    /// Creates a plain redirect with no return path.
    #[must_use]
    pub const fn to(path: String) -> Self {
        Self {
            path,
            return_to: None,
        }
    }

    /// Creates a login redirect carrying the attempted path.
    #[must_use]
    pub fn login_returning_to(attempted_path: &str) -> Self {
        Self {
            path: String::from(LOGIN_PATH),
            return_to: Some(attempted_path.to_string()),
        }
    }
}

/// What the `/dashboard` entry point renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardRedirect {
    /// The session is still resolving; render the loading affordance,
    /// never guess a destination.
    Loading,
    /// No principal; send the user to sign in and back here afterwards.
    Login(RedirectTarget),
    /// Forward to the role-appropriate concrete dashboard.
    Dashboard(&'static str),
}

/// Picks the destination for the generic `/dashboard` entry point.
#[must_use]
pub fn dashboard_redirect(session: &SessionState) -> DashboardRedirect {
    match session {
        SessionState::Loading => DashboardRedirect::Loading,
        SessionState::Anonymous => {
            DashboardRedirect::Login(RedirectTarget::login_returning_to(DASHBOARD_ENTRY_PATH))
        }
        SessionState::Authenticated(principal) => {
            DashboardRedirect::Dashboard(destination_for(resolve_role(Some(principal))))
        }
    }
}
