//! Visibility state for one exploration session: which positions the user
//! has revealed so far, and which one is the current center.
//!
//! The visible set only grows. The single exception is [`Exploration::reset`],
//! which restores the singleton initial set; exploration history is never
//! silently lost mid-session.

use crate::catalog::Catalog;
use crate::score::{ScoreOptions, ScoredEdge, score_edges};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibilitySnapshot {
    pub center: String,
    /// Discovery order: the order ids were first revealed.
    pub visible: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Exploration {
    initial: String,
    center: String,
    visible: IndexSet<String>,
    expand_limit: Option<usize>,
}

impl Exploration {
    pub fn new(initial: impl Into<String>) -> Self {
        let initial = initial.into();
        let mut visible = IndexSet::new();
        visible.insert(initial.clone());
        Self {
            center: initial.clone(),
            initial,
            visible,
            expand_limit: None,
        }
    }

    /// Caps how many scored edges a single `expand` reveals; `None` (the
    /// default) reveals every qualifying edge.
    pub fn with_expand_limit(mut self, limit: Option<usize>) -> Self {
        self.expand_limit = limit;
        self
    }

    pub fn initial(&self) -> &str {
        &self.initial
    }

    pub fn center(&self) -> &str {
        &self.center
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.contains(id)
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Re-centers on `id` and reveals its scored edges. Returns the revealed
    /// edges so callers don't have to score twice.
    ///
    /// Expanding an id missing from the catalog still records the id (layout
    /// drops it later); the set never shrinks here.
    pub fn expand(
        &mut self,
        id: &str,
        catalog: &Catalog,
        options: &ScoreOptions,
    ) -> Vec<ScoredEdge> {
        if !catalog.contains(id) {
            tracing::warn!(id = %id, "expanding a position missing from the catalog");
        }
        let mut edges = score_edges(catalog, id, options);
        if let Some(limit) = self.expand_limit {
            edges.truncate(limit);
        }
        self.center = id.to_string();
        self.visible.insert(id.to_string());
        for edge in &edges {
            self.visible.insert(edge.target_id.clone());
        }
        edges
    }

    /// Restores the singleton initial set and re-centers on it.
    pub fn reset(&mut self) {
        self.center = self.initial.clone();
        self.visible.clear();
        self.visible.insert(self.initial.clone());
    }

    /// Reveals every position that participates in at least one qualifying
    /// edge anywhere in the catalog. Isolated positions stay hidden; nothing
    /// already visible is removed. Idempotent.
    pub fn show_all(&mut self, catalog: &Catalog, options: &ScoreOptions) {
        for id in catalog.ids() {
            let edges = score_edges(catalog, id, options);
            if edges.is_empty() {
                continue;
            }
            self.visible.insert(id.to_string());
            for edge in edges {
                self.visible.insert(edge.target_id);
            }
        }
    }

    pub fn snapshot(&self) -> VisibilitySnapshot {
        VisibilitySnapshot {
            center: self.center.clone(),
            visible: self.visible.iter().cloned().collect(),
        }
    }
}
