//! App Context

use std::sync::Arc;

use crate::{
    domain::{
        access_logs::{AccessLogsService, MemAccessLogsService},
        auth::{AuthService, MemAuthService},
        consents::{ConsentsService, MemConsentsService},
        organizations::{MemOrgsService, OrgsService},
        voice::{CannedVoiceService, VoiceService},
    },
    ids::{IdSource, UuidIdSource},
    seed::SeedData,
    store::Store,
};

/// Service handles shared by every request handler.
#[derive(Clone)]
pub struct AppContext {
    pub orgs: Arc<dyn OrgsService>,
    pub consents: Arc<dyn ConsentsService>,
    pub access_logs: Arc<dyn AccessLogsService>,
    pub auth: Arc<dyn AuthService>,
    pub voice: Arc<dyn VoiceService>,
    /// Kept for collection counts in the healthcheck.
    pub store: Arc<Store>,
}

impl AppContext {
    /// Build the application context over a store seeded with the injected
    /// initial state.
    #[must_use]
    pub fn from_seed(seed: SeedData) -> Self {
        Self::with_ids(seed, Arc::new(UuidIdSource))
    }

    /// Same as [`AppContext::from_seed`] with a custom identifier source.
    #[must_use]
    pub fn with_ids(seed: SeedData, ids: Arc<dyn IdSource>) -> Self {
        let store = Arc::new(Store::from_seed(seed));

        Self {
            orgs: Arc::new(MemOrgsService::new(Arc::clone(&store))),
            consents: Arc::new(MemConsentsService::new(Arc::clone(&store), Arc::clone(&ids))),
            access_logs: Arc::new(MemAccessLogsService::new(
                Arc::clone(&store),
                Arc::clone(&ids),
            )),
            auth: Arc::new(MemAuthService::new(Arc::clone(&store), ids)),
            voice: Arc::new(CannedVoiceService::new()),
            store,
        }
    }
}
