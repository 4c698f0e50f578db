pub mod chart;
pub mod requests;

use crate::api::ChampionFeed;
use crate::catalog::{filter, Catalog, Entry, FilterOutcome, Query, TagFilter};
use crate::detail::{DetailRecord, DetailView, SkinGallery, SkinVariant};
use crate::error::AppError;
use tracing::{debug, info, warn};

pub use chart::{ChartHandle, ChartSlot, ChartSurface};
pub use requests::{RequestKind, RequestToken, RequestTracker};

/// State for one browsing session: created by `start`, ended by `teardown`.
pub struct Session {
    catalog: Catalog,
    query: Query,
    chart: ChartSlot,
    requests: RequestTracker,
}

impl Session {
    pub fn start(feed: &dyn ChampionFeed) -> Result<Self, AppError> {
        Catalog::load(feed).map(Session::new)
    }

    pub fn new(catalog: Catalog) -> Self {
        Session {
            catalog,
            query: Query::default(),
            chart: ChartSlot::new(),
            requests: RequestTracker::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn version(&self) -> &str {
        self.catalog.version()
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Entries admitted by the current query.
    pub fn visible(&self) -> FilterOutcome<'_> {
        let outcome = filter(self.catalog.entries(), &self.query);
        debug!(
            term = %self.query.term,
            tag = %self.query.tag,
            matches = outcome.len(),
            "filter applied"
        );
        outcome
    }

    pub fn set_term(&mut self, term: &str) {
        self.query.term = term.to_string();
    }

    pub fn clear_term(&mut self) {
        self.query.term.clear();
    }

    pub fn set_tag(&mut self, tag: TagFilter) {
        self.query.tag = tag;
    }

    /// Starts an on-demand fetch, superseding any outstanding one.
    pub fn begin(&mut self, kind: RequestKind, champion_id: &str) -> Result<RequestToken, AppError> {
        let canonical = self
            .catalog
            .find(champion_id)
            .map(|entry| entry.id.clone())
            .ok_or_else(|| AppError::UnknownChampion(champion_id.to_string()))?;
        Ok(self.requests.issue(kind, &canonical))
    }

    pub fn entry_for(&self, token: &RequestToken) -> Option<&Entry> {
        self.catalog.get(&token.champion_id)
    }

    /// Builds the detail view if `token` is still current; stale results yield `None`.
    pub fn finish_detail(
        &mut self,
        token: &RequestToken,
        fetched: Result<DetailRecord, AppError>,
    ) -> Option<DetailView> {
        if !self.settle(token) {
            return None;
        }
        if let Err(e) = &fetched {
            warn!(champion = %token.champion_id, error = %e, "showing summary fallback");
        }
        self.entry_for(token)
            .map(|entry| DetailView::resolve(entry, fetched))
    }

    pub fn finish_skins(
        &mut self,
        token: &RequestToken,
        fetched: Result<Vec<SkinVariant>, AppError>,
    ) -> Option<SkinGallery> {
        if !self.settle(token) {
            return None;
        }
        if let Err(e) = &fetched {
            warn!(champion = %token.champion_id, error = %e, "showing base skin only");
        }
        self.entry_for(token)
            .map(|entry| SkinGallery::resolve(entry, fetched))
    }

    fn settle(&mut self, token: &RequestToken) -> bool {
        let current = self.requests.settle(token);
        if !current {
            info!(
                champion = %token.champion_id,
                generation = token.generation(),
                "dropping stale response"
            );
        }
        current
    }

    pub fn is_pending(&self, token: &RequestToken) -> bool {
        self.requests.is_current(token)
    }

    pub fn has_pending(&self) -> bool {
        self.requests.pending().is_some()
    }

    pub fn show_chart(&mut self, surface: &mut dyn ChartSurface, entry_id: &str) -> bool {
        match self.catalog.get(entry_id).map(|e| e.stats) {
            Some(stats) => self.chart.show(surface, entry_id, &stats),
            None => {
                self.chart.release();
                false
            }
        }
    }

    pub fn chart_is_live(&self) -> bool {
        self.chart.is_live()
    }

    /// Closing a view abandons its fetch and frees its chart.
    pub fn close_view(&mut self) {
        self.requests.cancel();
        self.chart.release();
    }

    pub fn teardown(mut self) {
        self.close_view();
        info!(version = %self.catalog.version(), "session closed");
    }
}
