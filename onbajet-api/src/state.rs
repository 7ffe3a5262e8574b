use std::sync::Arc;

use onbajet_catalog::CatalogProvider;
use onbajet_core::IdentityResolver;
use onbajet_deals::{TravelAdvisor, TravelConfig};
use onbajet_store::app_config::DefaultsConfig;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogProvider>,
    pub identity: Arc<dyn IdentityResolver>,
    pub advisor: Arc<TravelAdvisor>,
    pub defaults: DefaultsConfig,
}

impl AppState {
    pub fn new(
        catalog: Arc<dyn CatalogProvider>,
        identity: Arc<dyn IdentityResolver>,
        travel: TravelConfig,
        defaults: DefaultsConfig,
    ) -> Self {
        Self {
            catalog,
            identity,
            advisor: Arc::new(TravelAdvisor::new(travel)),
            defaults,
        }
    }
}
