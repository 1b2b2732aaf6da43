pub mod appointments;
pub mod backend;
pub mod config;
pub mod entities;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod pagination;
pub mod routes;
pub mod search;
pub mod session;
pub mod utils;

use std::sync::Arc;

pub use backend::BackendClient;
pub use config::Config;
pub use error::{AppError, AppResult};

use search::SearchViews;

#[derive(Clone)]
pub struct AppState {
    pub backend: BackendClient,
    pub config: Config,
    pub views: Arc<SearchViews>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        Ok(Self {
            backend: BackendClient::new(&config)?,
            config,
            views: Arc::new(SearchViews::new()),
        })
    }
}
