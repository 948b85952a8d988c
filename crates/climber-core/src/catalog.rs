//! The position catalog: a read-only, order-preserving mapping from position
//! id to its attributes.
//!
//! Iteration order is the order positions appear in the source JSON object;
//! the scorer relies on it as the stable tie-break for equal scores.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One entry of the career catalog.
///
/// Wire format is camelCase JSON (`salaryMin`, `transferableSkills`, ...).
/// Unknown fields (presentation leftovers like colors or pinned coordinates)
/// are ignored on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub pillar: String,
    #[serde(default)]
    pub salary_min: f64,
    #[serde(default)]
    pub salary_max: f64,
    #[serde(default)]
    pub description: String,
    /// Display-only, but participates in search.
    #[serde(default)]
    pub requirements: Vec<String>,
    /// Manually curated direct edges. Targets may dangle; dangling ids are
    /// ignored wherever connections are consumed.
    #[serde(default)]
    pub connections: Vec<String>,
    #[serde(default)]
    pub transferable_skills: Vec<String>,
}

impl Position {
    /// Midpoint of the salary band, degrading on malformed input: a negative
    /// or non-finite bound is treated as absent, an inverted range falls back
    /// to its stated floor, and a fully absent band is 0.
    pub fn salary_midpoint(&self) -> f64 {
        let lo = valid_bound(self.salary_min);
        let hi = valid_bound(self.salary_max);
        match (lo, hi) {
            (Some(lo), Some(hi)) if lo <= hi => (lo + hi) / 2.0,
            (Some(lo), Some(_)) => {
                tracing::debug!(id = %self.id, "inverted salary range, using the lower bound");
                lo
            }
            (Some(v), None) | (None, Some(v)) => v,
            (None, None) => 0.0,
        }
    }
}

fn valid_bound(v: f64) -> Option<f64> {
    (v.is_finite() && v >= 0.0).then_some(v)
}

/// Immutable position catalog keyed by id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    positions: IndexMap<String, Position>,
}

impl Catalog {
    /// Builds a catalog from already-constructed positions, keyed by their
    /// `id` field. Later duplicates replace earlier ones.
    pub fn from_positions(positions: impl IntoIterator<Item = Position>) -> Self {
        let positions = positions
            .into_iter()
            .map(|p| (p.id.clone(), p))
            .collect::<IndexMap<_, _>>();
        let catalog = Self { positions };
        catalog.warn_dangling();
        catalog
    }

    /// Loads a catalog from a JSON object mapping id to position record.
    /// The map key is authoritative for the position id.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let positions: IndexMap<String, Position> =
            serde_json::from_str(text).map_err(|err| Error::InvalidCatalog {
                message: err.to_string(),
            })?;
        Ok(Self::from_entries(positions))
    }

    /// Same as [`Catalog::from_json_str`] for an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let positions: IndexMap<String, Position> =
            serde_json::from_value(value).map_err(|err| Error::InvalidCatalog {
                message: err.to_string(),
            })?;
        Ok(Self::from_entries(positions))
    }

    fn from_entries(mut positions: IndexMap<String, Position>) -> Self {
        for (id, position) in positions.iter_mut() {
            if !position.id.is_empty() && position.id != *id {
                tracing::warn!(key = %id, embedded = %position.id, "position id disagrees with its catalog key");
            }
            position.id = id.clone();
        }
        let catalog = Self { positions };
        catalog.warn_dangling();
        catalog
    }

    pub fn get(&self, id: &str) -> Option<&Position> {
        self.positions.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Position)> {
        self.positions.iter().map(|(id, p)| (id.as_str(), p))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.positions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Curated connections whose target is missing from the catalog, as
    /// `(source id, missing target id)` pairs. Diagnostic only; dangling
    /// edges are ignored, never fatal.
    pub fn dangling_connections(&self) -> Vec<(String, String)> {
        let mut dangling = Vec::new();
        for (id, position) in self.iter() {
            for target in &position.connections {
                if !self.contains(target) {
                    dangling.push((id.to_string(), target.clone()));
                }
            }
        }
        dangling
    }

    fn warn_dangling(&self) {
        for (source, target) in self.dangling_connections() {
            tracing::warn!(%source, %target, "curated connection points at a missing position");
        }
    }
}
