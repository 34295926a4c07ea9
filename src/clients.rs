//! Per-session registry of API clients.
//!
//! Holds one authentication context and hands out one client per platform
//! service. Clients are constructed on first access and memoized for the
//! lifetime of the registry, so every command in an invocation that talks to
//! a given service shares the same client (same connection pool, same
//! session token).
//!
//! The cells are unsynchronized (`once_cell::unsync`), which makes the
//! registry `!Sync`: one registry belongs to one CLI task. Wrap it in
//! external synchronization if that ever changes.

use crate::auth::CliAuth;
use crate::services::{
    ApiError, AssetsService, ContxtService, EmsService, EventsService, FacilitiesService,
    HealthService, IotService, SisService,
};
use once_cell::unsync::OnceCell;
use std::sync::Arc;

/// Holds the session authentication context and all client APIs.
pub struct Clients {
    auth: Arc<CliAuth>,
    assets: OnceCell<AssetsService>,
    contxt: OnceCell<ContxtService>,
    ems: OnceCell<EmsService>,
    events: OnceCell<EventsService>,
    facilities: OnceCell<FacilitiesService>,
    health: OnceCell<HealthService>,
    iot: OnceCell<IotService>,
    sis: OnceCell<SisService>,
}

impl Clients {
    pub fn new(auth: Arc<CliAuth>) -> Clients {
        Clients {
            auth,
            assets: OnceCell::new(),
            contxt: OnceCell::new(),
            ems: OnceCell::new(),
            events: OnceCell::new(),
            facilities: OnceCell::new(),
            health: OnceCell::new(),
            iot: OnceCell::new(),
            sis: OnceCell::new(),
        }
    }

    pub fn auth(&self) -> &Arc<CliAuth> {
        &self.auth
    }

    /// Each accessor constructs its client on first call and returns the
    /// stored instance afterwards. Construction errors propagate unchanged;
    /// the registry performs no retry and no fallback.
    pub fn assets(&self) -> Result<&AssetsService, ApiError> {
        self.assets
            .get_or_try_init(|| AssetsService::new(Arc::clone(&self.auth)))
    }

    pub fn contxt(&self) -> Result<&ContxtService, ApiError> {
        self.contxt
            .get_or_try_init(|| ContxtService::new(Arc::clone(&self.auth)))
    }

    pub fn ems(&self) -> Result<&EmsService, ApiError> {
        self.ems
            .get_or_try_init(|| EmsService::new(Arc::clone(&self.auth)))
    }

    pub fn events(&self) -> Result<&EventsService, ApiError> {
        self.events
            .get_or_try_init(|| EventsService::new(Arc::clone(&self.auth)))
    }

    pub fn facilities(&self) -> Result<&FacilitiesService, ApiError> {
        self.facilities
            .get_or_try_init(|| FacilitiesService::new(Arc::clone(&self.auth)))
    }

    pub fn health(&self) -> Result<&HealthService, ApiError> {
        self.health
            .get_or_try_init(|| HealthService::new(Arc::clone(&self.auth)))
    }

    pub fn iot(&self) -> Result<&IotService, ApiError> {
        self.iot
            .get_or_try_init(|| IotService::new(Arc::clone(&self.auth)))
    }

    pub fn sis(&self) -> Result<&SisService, ApiError> {
        self.sis
            .get_or_try_init(|| SisService::new(Arc::clone(&self.auth)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn test_auth() -> Arc<CliAuth> {
        Arc::new(CliAuth::new(
            "client-id".to_string(),
            "client-secret".to_string(),
            Url::parse("https://contxt.auth0.com/oauth/token").unwrap(),
        ))
    }

    #[test]
    fn accessor_returns_the_identical_instance_on_repeat_calls() {
        let clients = Clients::new(test_auth());
        let first = clients.facilities().unwrap() as *const FacilitiesService;
        let second = clients.facilities().unwrap() as *const FacilitiesService;
        assert_eq!(first, second);
    }

    #[test]
    fn construction_happens_once_and_only_for_accessed_services() {
        let auth = test_auth();
        let clients = Clients::new(Arc::clone(&auth));

        // local handle + the registry's own
        assert_eq!(Arc::strong_count(&auth), 2);

        clients.assets().unwrap();
        assert_eq!(Arc::strong_count(&auth), 3);

        // memoized: the second access must not construct another client
        clients.assets().unwrap();
        assert_eq!(Arc::strong_count(&auth), 3);

        clients.iot().unwrap();
        assert_eq!(Arc::strong_count(&auth), 4);
    }

    #[test]
    fn every_service_accessor_is_wired() {
        let clients = Clients::new(test_auth());
        assert!(clients.assets().is_ok());
        assert!(clients.contxt().is_ok());
        assert!(clients.ems().is_ok());
        assert!(clients.events().is_ok());
        assert!(clients.facilities().is_ok());
        assert!(clients.health().is_ok());
        assert!(clients.iot().is_ok());
        assert!(clients.sis().is_ok());
    }
}
