#![forbid(unsafe_code)]

//! Career graph compatibility engine (headless).
//!
//! Design goals:
//! - deterministic, testable outputs (identical inputs yield identical edges)
//! - recoverable handling of malformed catalog records (skip + log, never panic)
//! - runtime-agnostic async APIs (no specific executor required)
//!
//! Layout lives in `climber-layout`; this crate owns the catalog model, the
//! compatibility scorer, search, and per-session visibility state.

pub mod catalog;
pub mod error;
pub mod score;
pub mod search;
pub mod visibility;

pub use catalog::{Catalog, Position};
pub use error::{Error, Result};
pub use score::{MAX_SCORE, Reason, ScoreOptions, ScoredEdge, TransitionKind, score_edges};
pub use search::{SearchHit, search};
pub use visibility::{Exploration, VisibilitySnapshot};

/// Stateless facade over a catalog and one scoring rule set.
///
/// Session state (the visibility set) stays outside in an [`Exploration`];
/// an `Engine` can serve any number of concurrent sessions.
#[derive(Debug, Clone)]
pub struct Engine {
    catalog: Catalog,
    options: ScoreOptions,
}

impl Engine {
    pub fn new(catalog: Catalog) -> Self {
        if catalog.is_empty() {
            tracing::warn!("engine built over an empty catalog; every query degrades to an empty result");
        }
        Self {
            catalog,
            options: ScoreOptions::default(),
        }
    }

    pub fn with_score_options(mut self, options: ScoreOptions) -> Self {
        self.options = options;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn options(&self) -> &ScoreOptions {
        &self.options
    }

    /// Synchronous variant of [`Engine::scored_edges`].
    pub fn scored_edges_sync(&self, center_id: &str) -> Vec<ScoredEdge> {
        score_edges(&self.catalog, center_id, &self.options)
    }

    pub async fn scored_edges(&self, center_id: &str) -> Vec<ScoredEdge> {
        self.scored_edges_sync(center_id)
    }

    /// Synchronous variant of [`Engine::search`].
    pub fn search_sync(&self, term: &str, center: Option<&str>) -> Vec<SearchHit> {
        search(&self.catalog, term, center, &self.options)
    }

    pub async fn search(&self, term: &str, center: Option<&str>) -> Vec<SearchHit> {
        self.search_sync(term, center)
    }

    /// Starts an exploration session centered on `initial`.
    pub fn start_exploration(&self, initial: &str) -> Exploration {
        if !self.catalog.contains(initial) {
            tracing::warn!(id = %initial, "exploration starts at a position missing from the catalog");
        }
        Exploration::new(initial)
    }

    /// Convenience wrapper over [`Exploration::expand`] with this engine's
    /// catalog and options.
    pub fn expand(&self, exploration: &mut Exploration, id: &str) -> Vec<ScoredEdge> {
        exploration.expand(id, &self.catalog, &self.options)
    }

    /// Convenience wrapper over [`Exploration::show_all`].
    pub fn show_all(&self, exploration: &mut Exploration) {
        exploration.show_all(&self.catalog, &self.options);
    }
}

#[cfg(test)]
mod tests;
