use std::sync::Arc;

use crate::database::store::JobBoardStore;
use crate::error::Result;
use crate::models::stats::BoardStats;

#[derive(Clone)]
pub struct StatsService {
    store: Arc<dyn JobBoardStore>,
}

impl StatsService {
    pub fn new(store: Arc<dyn JobBoardStore>) -> Self {
        Self { store }
    }

    pub async fn summary(&self) -> Result<BoardStats> {
        self.store.stats().await
    }
}
