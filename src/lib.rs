pub mod config;
pub mod db;
pub mod dtos;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;
pub mod utils;

use std::sync::Arc;

use config::Config;
use db::DatabaseExt;
use service::{property_service::PropertyService, settings_service::SettingsService};

#[derive(Clone)]
pub struct AppState {
    pub env: Config,
    pub property_service: Arc<PropertyService>,
    pub settings_service: Arc<SettingsService>,
}

impl AppState {
    pub fn new(db_client: Arc<dyn DatabaseExt>, config: Config) -> Self {
        let property_service = Arc::new(PropertyService::new(db_client.clone()));
        let settings_service = Arc::new(SettingsService::new(db_client));

        Self {
            env: config,
            property_service,
            settings_service,
        }
    }
}
