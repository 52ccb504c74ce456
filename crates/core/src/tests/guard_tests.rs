// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_administrator, create_collaborator, create_legacy_administrator,
};
use crate::{
    FORBIDDEN_REDIRECT_DELAY, GuardConfig, GuardOutcome, LOGIN_PATH, OPERATIONAL_DASHBOARD_PATH,
    RouteGuard, SessionState, evaluate,
};
use clinilog_audit::InMemoryAuditSink;
use clinilog_domain::Role;

fn admin_only_config() -> GuardConfig {
    GuardConfig::new(vec![Role::Administrator], String::from("/frota/carros"))
}

#[test]
fn test_loading_session_yields_loading() {
    let config: GuardConfig = admin_only_config();

    let outcome: GuardOutcome = evaluate(&config, &SessionState::Loading);

    // Nothing is decided while the signal resolves: no redirect, no notice.
    assert_eq!(outcome, GuardOutcome::Loading);
}

#[test]
fn test_anonymous_session_redirects_to_login_with_return_path() {
    let config: GuardConfig = admin_only_config();

    let outcome: GuardOutcome = evaluate(&config, &SessionState::Anonymous);

    let GuardOutcome::Unauthenticated { redirect } = outcome else {
        panic!("expected Unauthenticated, got {outcome:?}");
    };
    assert_eq!(redirect.path, LOGIN_PATH);
    assert_eq!(redirect.return_to.as_deref(), Some("/frota/carros"));
}

#[test]
fn test_collaborator_on_admin_route_is_forbidden() {
    let config: GuardConfig = admin_only_config();
    let session: SessionState = SessionState::Authenticated(create_collaborator());

    let outcome: GuardOutcome = evaluate(&config, &session);

    let GuardOutcome::Forbidden {
        resolved_role,
        fallback,
        redirect_after,
    } = outcome
    else {
        panic!("expected Forbidden, got {outcome:?}");
    };
    assert_eq!(resolved_role, Role::Collaborator);
    assert_eq!(fallback.path, OPERATIONAL_DASHBOARD_PATH);
    assert_eq!(redirect_after, FORBIDDEN_REDIRECT_DELAY);
}

#[test]
fn test_administrator_on_admin_route_is_authorized() {
    let config: GuardConfig = admin_only_config();
    let session: SessionState = SessionState::Authenticated(create_administrator());

    assert_eq!(evaluate(&config, &session), GuardOutcome::Authorized);
}

#[test]
fn test_legacy_admin_flag_is_authorized_on_admin_route() {
    let config: GuardConfig = admin_only_config();
    let session: SessionState = SessionState::Authenticated(create_legacy_administrator());

    assert_eq!(evaluate(&config, &session), GuardOutcome::Authorized);
}

#[test]
fn test_empty_allow_list_denies_everyone() {
    let config: GuardConfig = GuardConfig::new(Vec::new(), String::from("/desativado"));
    let session: SessionState = SessionState::Authenticated(create_administrator());

    let outcome: GuardOutcome = evaluate(&config, &session);
    assert!(matches!(outcome, GuardOutcome::Forbidden { .. }));
}

#[test]
fn test_denial_records_telemetry_exactly_once() {
    let mut guard: RouteGuard = RouteGuard::new(admin_only_config());
    let mut sink: InMemoryAuditSink = InMemoryAuditSink::new();
    let session: SessionState = SessionState::Authenticated(create_collaborator());

    // The same denial observed across several renders.
    for _ in 0..3 {
        let outcome: GuardOutcome = guard.observe(&session, &mut sink);
        assert!(matches!(outcome, GuardOutcome::Forbidden { .. }));
    }

    assert_eq!(sink.denials().len(), 1);
    let denial = &sink.denials()[0];
    assert_eq!(denial.attempted_path, "/frota/carros");
    assert_eq!(denial.actor.role, Role::Collaborator);
    assert_eq!(denial.actor.id, "u-200");
    assert_eq!(denial.allowed_roles, vec![Role::Administrator]);
}

#[test]
fn test_role_change_mid_session_updates_the_decision() {
    let mut guard: RouteGuard = RouteGuard::new(admin_only_config());
    let mut sink: InMemoryAuditSink = InMemoryAuditSink::new();

    let denied: SessionState = SessionState::Authenticated(create_collaborator());
    assert!(matches!(
        guard.observe(&denied, &mut sink),
        GuardOutcome::Forbidden { .. }
    ));

    // A profile refresh promoted the account; the next render authorizes.
    let mut promoted = create_collaborator();
    promoted.role = Some(String::from("admin"));
    let granted: SessionState = SessionState::Authenticated(promoted);
    assert_eq!(
        guard.observe(&granted, &mut sink),
        GuardOutcome::Authorized
    );

    // Demoted again: a fresh denial, recorded a second time.
    assert!(matches!(
        guard.observe(&denied, &mut sink),
        GuardOutcome::Forbidden { .. }
    ));
    assert_eq!(sink.denials().len(), 2);
}

#[test]
fn test_loading_and_anonymous_record_no_telemetry() {
    let mut guard: RouteGuard = RouteGuard::new(admin_only_config());
    let mut sink: InMemoryAuditSink = InMemoryAuditSink::new();

    let _ = guard.observe(&SessionState::Loading, &mut sink);
    let _ = guard.observe(&SessionState::Anonymous, &mut sink);

    assert!(sink.denials().is_empty());
}

#[test]
fn test_guard_exposes_its_configuration() {
    let guard: RouteGuard = RouteGuard::new(admin_only_config());

    assert_eq!(guard.config().attempted_path, "/frota/carros");
    assert_eq!(guard.config().allowed, vec![Role::Administrator]);
}
