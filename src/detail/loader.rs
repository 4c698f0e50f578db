use crate::api::ChampionFeed;
use crate::error::AppError;
use std::sync::Arc;
use tracing::{debug, warn};

use super::record::{assemble_skins, DetailRecord, SkinVariant};

/// Fetches per-champion data against the release pinned at startup.
///
/// Nothing is memoized: every call goes back to the feed.
#[derive(Clone)]
pub struct DetailLoader {
    feed: Arc<dyn ChampionFeed>,
    version: String,
}

impl DetailLoader {
    pub fn new(feed: Arc<dyn ChampionFeed>, version: impl Into<String>) -> Self {
        DetailLoader {
            feed,
            version: version.into(),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn load_detail(&self, champion_id: &str) -> Result<DetailRecord, AppError> {
        debug!(champion = champion_id, "loading detail");
        let dto = self
            .feed
            .champion_detail(&self.version, champion_id)
            .inspect_err(|e| warn!(champion = champion_id, error = %e, "detail fetch failed"))?;
        Ok(DetailRecord::assemble(&self.version, &dto))
    }

    pub fn load_skins(&self, champion_id: &str) -> Result<Vec<SkinVariant>, AppError> {
        debug!(champion = champion_id, "loading skins");
        let dto = self
            .feed
            .champion_detail(&self.version, champion_id)
            .inspect_err(|e| warn!(champion = champion_id, error = %e, "skins fetch failed"))?;
        Ok(assemble_skins(champion_id, &dto))
    }
}
