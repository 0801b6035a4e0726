//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use trustbase_app::{
    context::AppContext,
    domain::{
        access_logs::MockAccessLogsService, auth::MockAuthService, consents::MockConsentsService,
        organizations::MockOrgsService, voice::MockVoiceService,
    },
    store::Store,
};

use crate::state::State;

fn strict_orgs_mock() -> MockOrgsService {
    let mut orgs = MockOrgsService::new();

    orgs.expect_list_organizations().never();
    orgs.expect_get_organization().never();
    orgs.expect_list_categories().never();
    orgs.expect_trust_score_summary().never();

    orgs
}

fn strict_consents_mock() -> MockConsentsService {
    let mut consents = MockConsentsService::new();

    consents.expect_list_consents().never();
    consents.expect_get_consent().never();
    consents.expect_grant_consent().never();
    consents.expect_revoke_consent().never();
    consents.expect_consent_history().never();
    consents.expect_consent_stats().never();

    consents
}

fn strict_access_logs_mock() -> MockAccessLogsService {
    let mut access_logs = MockAccessLogsService::new();

    access_logs.expect_list_access_logs().never();
    access_logs.expect_get_access_log().never();
    access_logs.expect_access_stats().never();
    access_logs.expect_simulate_access().never();

    access_logs
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_login().never();
    auth.expect_session_user().never();
    auth.expect_logout().never();

    auth
}

fn strict_voice_mock() -> MockVoiceService {
    let mut voice = MockVoiceService::new();

    voice.expect_answer().never();

    voice
}

fn app_context(
    orgs: MockOrgsService,
    consents: MockConsentsService,
    access_logs: MockAccessLogsService,
    auth: MockAuthService,
    voice: MockVoiceService,
) -> AppContext {
    AppContext {
        orgs: Arc::new(orgs),
        consents: Arc::new(consents),
        access_logs: Arc::new(access_logs),
        auth: Arc::new(auth),
        voice: Arc::new(voice),
        store: Arc::new(Store::default()),
    }
}

fn service_with(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}

pub(crate) fn orgs_service(orgs: MockOrgsService, route: Router) -> Service {
    let state = State::from_app_context(app_context(
        orgs,
        strict_consents_mock(),
        strict_access_logs_mock(),
        strict_auth_mock(),
        strict_voice_mock(),
    ));

    service_with(state, route)
}

pub(crate) fn consents_service(consents: MockConsentsService, route: Router) -> Service {
    let state = State::from_app_context(app_context(
        strict_orgs_mock(),
        consents,
        strict_access_logs_mock(),
        strict_auth_mock(),
        strict_voice_mock(),
    ));

    service_with(state, route)
}

pub(crate) fn access_logs_service(access_logs: MockAccessLogsService, route: Router) -> Service {
    let state = State::from_app_context(app_context(
        strict_orgs_mock(),
        strict_consents_mock(),
        access_logs,
        strict_auth_mock(),
        strict_voice_mock(),
    ));

    service_with(state, route)
}

pub(crate) fn auth_service(auth: MockAuthService, route: Router) -> Service {
    let state = State::from_app_context(app_context(
        strict_orgs_mock(),
        strict_consents_mock(),
        strict_access_logs_mock(),
        auth,
        strict_voice_mock(),
    ));

    service_with(state, route)
}

pub(crate) fn voice_service(voice: MockVoiceService, route: Router) -> Service {
    let state = State::from_app_context(app_context(
        strict_orgs_mock(),
        strict_consents_mock(),
        strict_access_logs_mock(),
        strict_auth_mock(),
        voice,
    ));

    service_with(state, route)
}
