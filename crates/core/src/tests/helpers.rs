// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared fixtures for the core crate tests.

use clinilog_domain::Principal;

pub fn create_collaborator() -> Principal {
    let mut principal: Principal = Principal::new(
        String::from("u-200"),
        String::from("carla@clinilog.example"),
        String::from("Carla Nunes"),
    );
    principal.role = Some(String::from("colaborador"));
    principal
}

pub fn create_administrator() -> Principal {
    let mut principal: Principal = Principal::new(
        String::from("u-201"),
        String::from("rafael@clinilog.example"),
        String::from("Rafael Costa"),
    );
    principal.role = Some(String::from("admin"));
    principal
}

/// A principal from an old payload variant: no role string, only the
/// legacy boolean.
pub fn create_legacy_administrator() -> Principal {
    let mut principal: Principal = Principal::new(
        String::from("u-202"),
        String::from("dora@clinilog.example"),
        String::from("Dora Pires"),
    );
    principal.is_admin = Some(true);
    principal
}
