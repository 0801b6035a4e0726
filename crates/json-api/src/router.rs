//! App Router

use salvo::Router;

use crate::{access_logs, auth, consents, healthcheck, orgs, voice};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("orgs")
                .get(orgs::index::handler)
                .push(Router::with_path("categories/list").get(orgs::categories::handler))
                .push(Router::with_path("trust-scores/summary").get(orgs::trust_scores::handler))
                .push(Router::with_path("{org}").get(orgs::get::handler)),
        )
        .push(
            Router::with_path("consents")
                .get(consents::index::handler)
                .push(Router::with_path("grant").post(consents::grant::handler))
                .push(Router::with_path("revoke").post(consents::revoke::handler))
                .push(Router::with_path("stats/summary").get(consents::stats::handler))
                .push(
                    Router::with_path("{consent}")
                        .get(consents::get::handler)
                        .push(Router::with_path("history").get(consents::history::handler)),
                ),
        )
        .push(
            Router::with_path("access-logs")
                .get(access_logs::index::handler)
                .push(Router::with_path("stats/summary").get(access_logs::stats::handler))
                .push(Router::with_path("simulate").post(access_logs::simulate::handler))
                .push(Router::with_path("{log}").get(access_logs::get::handler)),
        )
        .push(
            Router::with_path("auth")
                .push(Router::with_path("login").post(auth::login::handler))
                .push(Router::with_path("session-check").post(auth::session_check::handler))
                .push(Router::with_path("logout").post(auth::logout::handler)),
        )
        .push(
            Router::with_path("voice")
                .push(Router::with_path("query").post(voice::query::handler))
                .push(Router::with_path("languages").get(voice::languages::handler))
                .push(Router::with_path("demo/prompts").get(voice::prompts::handler)),
        )
}
