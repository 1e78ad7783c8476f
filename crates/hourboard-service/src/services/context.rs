//! Service context - dependency container for services
//!
//! Holds the repositories, the identity-token verifier, and the workflow
//! switches needed by services.

use std::sync::Arc;

use hourboard_common::{AppConfig, ConsistencyConfig, IdentityTokenService, RequestConfig, TagConfig};
use hourboard_core::traits::{
    AdvisorRequestRepository, ArchivalRunRepository, EventRepository, HistoricalEventRepository,
    StoreHealth, UserRepository,
};
use hourboard_db::{
    MemoryAdvisorRequestRepository, MemoryArchivalRunRepository, MemoryEventRepository,
    MemoryHistoricalEventRepository, MemoryStoreHealth, MemoryUserRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Configurable behaviour of the workflows
#[derive(Debug, Clone, Default)]
pub struct WorkflowSettings {
    pub consistency: ConsistencyConfig,
    pub requests: RequestConfig,
    pub tags: TagConfig,
}

impl From<&AppConfig> for WorkflowSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            consistency: config.consistency,
            requests: config.requests,
            tags: config.tags.clone(),
        }
    }
}

/// Service context containing all dependencies
///
/// This is the dependency container that gets passed to all services.
/// It provides access to:
/// - Store repositories (PostgreSQL or in-process)
/// - Store health probe
/// - Identity-token verification
/// - Workflow settings
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    event_repo: Arc<dyn EventRepository>,
    request_repo: Arc<dyn AdvisorRequestRepository>,
    historical_repo: Arc<dyn HistoricalEventRepository>,
    archival_repo: Arc<dyn ArchivalRunRepository>,
    store_health: Arc<dyn StoreHealth>,

    // Services
    identity_service: Arc<IdentityTokenService>,

    settings: WorkflowSettings,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        event_repo: Arc<dyn EventRepository>,
        request_repo: Arc<dyn AdvisorRequestRepository>,
        historical_repo: Arc<dyn HistoricalEventRepository>,
        archival_repo: Arc<dyn ArchivalRunRepository>,
        store_health: Arc<dyn StoreHealth>,
        identity_service: Arc<IdentityTokenService>,
        settings: WorkflowSettings,
    ) -> Self {
        Self {
            user_repo,
            event_repo,
            request_repo,
            historical_repo,
            archival_repo,
            store_health,
            identity_service,
            settings,
        }
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the event repository
    pub fn event_repo(&self) -> &dyn EventRepository {
        self.event_repo.as_ref()
    }

    /// Get the advisor request repository
    pub fn request_repo(&self) -> &dyn AdvisorRequestRepository {
        self.request_repo.as_ref()
    }

    /// Get the historical event repository
    pub fn historical_repo(&self) -> &dyn HistoricalEventRepository {
        self.historical_repo.as_ref()
    }

    /// Get the archival run marker repository
    pub fn archival_repo(&self) -> &dyn ArchivalRunRepository {
        self.archival_repo.as_ref()
    }

    /// Get the store health probe
    pub fn store_health(&self) -> &dyn StoreHealth {
        self.store_health.as_ref()
    }

    // === Services ===

    /// Get the identity-token service
    pub fn identity_service(&self) -> &IdentityTokenService {
        self.identity_service.as_ref()
    }

    // === Settings ===

    pub fn settings(&self) -> &WorkflowSettings {
        &self.settings
    }

    #[inline]
    pub fn atomic_updates(&self) -> bool {
        self.settings.consistency.atomic_updates
    }

    #[inline]
    pub fn tags(&self) -> &TagConfig {
        &self.settings.tags
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("identity_service", &self.identity_service)
            .field("settings", &self.settings)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    event_repo: Option<Arc<dyn EventRepository>>,
    request_repo: Option<Arc<dyn AdvisorRequestRepository>>,
    historical_repo: Option<Arc<dyn HistoricalEventRepository>>,
    archival_repo: Option<Arc<dyn ArchivalRunRepository>>,
    store_health: Option<Arc<dyn StoreHealth>>,
    identity_service: Option<Arc<IdentityTokenService>>,
    settings: WorkflowSettings,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            user_repo: None,
            event_repo: None,
            request_repo: None,
            historical_repo: None,
            archival_repo: None,
            store_health: None,
            identity_service: None,
            settings: WorkflowSettings::default(),
        }
    }

    /// Pre-fill every repository with the in-process store
    pub fn in_memory() -> Self {
        Self::new()
            .user_repo(Arc::new(MemoryUserRepository::new()))
            .event_repo(Arc::new(MemoryEventRepository::new()))
            .request_repo(Arc::new(MemoryAdvisorRequestRepository::new()))
            .historical_repo(Arc::new(MemoryHistoricalEventRepository::new()))
            .archival_repo(Arc::new(MemoryArchivalRunRepository::new()))
            .store_health(Arc::new(MemoryStoreHealth))
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn event_repo(mut self, repo: Arc<dyn EventRepository>) -> Self {
        self.event_repo = Some(repo);
        self
    }

    pub fn request_repo(mut self, repo: Arc<dyn AdvisorRequestRepository>) -> Self {
        self.request_repo = Some(repo);
        self
    }

    pub fn historical_repo(mut self, repo: Arc<dyn HistoricalEventRepository>) -> Self {
        self.historical_repo = Some(repo);
        self
    }

    pub fn archival_repo(mut self, repo: Arc<dyn ArchivalRunRepository>) -> Self {
        self.archival_repo = Some(repo);
        self
    }

    pub fn store_health(mut self, health: Arc<dyn StoreHealth>) -> Self {
        self.store_health = Some(health);
        self
    }

    pub fn identity_service(mut self, service: Arc<IdentityTokenService>) -> Self {
        self.identity_service = Some(service);
        self
    }

    pub fn settings(mut self, settings: WorkflowSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::MissingDependency` naming the first collaborator not set
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo.ok_or_else(|| ServiceError::MissingDependency("user_repo"))?,
            self.event_repo.ok_or_else(|| ServiceError::MissingDependency("event_repo"))?,
            self.request_repo.ok_or_else(|| ServiceError::MissingDependency("request_repo"))?,
            self.historical_repo.ok_or_else(|| ServiceError::MissingDependency("historical_repo"))?,
            self.archival_repo.ok_or_else(|| ServiceError::MissingDependency("archival_repo"))?,
            self.store_health.ok_or_else(|| ServiceError::MissingDependency("store_health"))?,
            self.identity_service.ok_or_else(|| ServiceError::MissingDependency("identity_service"))?,
            self.settings,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
