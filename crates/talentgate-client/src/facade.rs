//! Entry point tying the request wrapper, session and route guard together.

use std::sync::Arc;

use talentgate_auth::guard::{GuardDecision, GuardWatcher, RouteGuard, RoutePolicy};
use talentgate_auth::session::{SessionManager, SessionStore, build_store};
use talentgate_core::config::AppConfig;
use talentgate_core::error::AppError;

use crate::api::{
    ApplicationsApi, AuthApi, CandidatesApi, EvaluationsApi, PositionsApi, ProfileApi,
    StatisticsApi,
};
use crate::http::ApiClient;

/// The TalentGate client.
#[derive(Debug, Clone)]
pub struct TalentGateClient {
    api: ApiClient,
    guard: RouteGuard,
}

impl TalentGateClient {
    /// Builds the client, restoring the session from the configured store.
    pub async fn connect(config: &AppConfig) -> Result<Self, AppError> {
        Self::with_store(config, build_store(&config.session)).await
    }

    /// Builds the client over an explicit session store.
    pub async fn with_store(
        config: &AppConfig,
        store: Arc<dyn SessionStore>,
    ) -> Result<Self, AppError> {
        let session = SessionManager::restore(store).await?;
        let guard = RouteGuard::new(RoutePolicy::from_config(&config.guard)?);
        let api = ApiClient::new(config, session)?;
        Ok(Self { api, guard })
    }

    /// The request wrapper.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// The shared session.
    pub fn session(&self) -> &SessionManager {
        self.api.session()
    }

    /// The route guard.
    pub fn guard(&self) -> &RouteGuard {
        &self.guard
    }

    /// Checks navigation to `path` against the current session.
    pub fn navigate(&self, path: &str) -> GuardDecision {
        self.guard.check(path, &self.session().snapshot())
    }

    /// Follows the session from `path`, redirecting as it changes.
    pub fn watch_route(&self, path: &str) -> GuardWatcher {
        GuardWatcher::new(self.guard.clone(), self.session().subscribe(), path)
    }

    /// Sign-in and identity.
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(&self.api)
    }

    /// Profile of the signed-in user.
    pub fn profile(&self) -> ProfileApi<'_> {
        ProfileApi::new(&self.api)
    }

    /// Job positions.
    pub fn positions(&self) -> PositionsApi<'_> {
        PositionsApi::new(&self.api)
    }

    /// Job applications.
    pub fn applications(&self) -> ApplicationsApi<'_> {
        ApplicationsApi::new(&self.api)
    }

    /// Evaluation tests.
    pub fn evaluations(&self) -> EvaluationsApi<'_> {
        EvaluationsApi::new(&self.api)
    }

    /// Candidate records.
    pub fn candidates(&self) -> CandidatesApi<'_> {
        CandidatesApi::new(&self.api)
    }

    /// Dashboard statistics.
    pub fn statistics(&self) -> StatisticsApi<'_> {
        StatisticsApi::new(&self.api)
    }
}
