pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use crate::database::store::JobBoardStore;
use crate::services::{
    application_service::ApplicationService, job_service::JobService,
    stats_service::StatsService,
};

#[derive(Clone)]
pub struct AppState {
    pub job_service: JobService,
    pub application_service: ApplicationService,
    pub stats_service: StatsService,
    pub admin_password: Arc<str>,
}

impl AppState {
    pub fn new(store: Arc<dyn JobBoardStore>, admin_password: impl Into<Arc<str>>) -> Self {
        Self {
            job_service: JobService::new(store.clone()),
            application_service: ApplicationService::new(store.clone()),
            stats_service: StatsService::new(store),
            admin_password: admin_password.into(),
        }
    }
}
