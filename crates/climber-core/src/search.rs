//! Case-insensitive catalog search, optionally ranked by compatibility with
//! the current center position.

use crate::catalog::{Catalog, Position};
use crate::score::{ScoreOptions, score_edges};
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub position: Position,
    /// Score of the edge from the search center to this hit, when one
    /// qualifies. `None` when no center was given, the hit is the center
    /// itself, or no qualifying edge exists.
    pub compatibility: Option<u32>,
}

/// Substring match across title, pillar, level, description and
/// requirements. A blank term matches nothing.
///
/// Hits with a compatibility score sort first (descending); everything else
/// sorts by title.
pub fn search(
    catalog: &Catalog,
    term: &str,
    center: Option<&str>,
    options: &ScoreOptions,
) -> Vec<SearchHit> {
    let term = term.trim();
    if term.is_empty() {
        return Vec::new();
    }
    let needle = term.to_lowercase();
    let matches = |hay: &str| hay.to_lowercase().contains(&needle);

    let center_edges = center.map(|c| score_edges(catalog, c, options));

    let mut hits = Vec::new();
    for (id, position) in catalog.iter() {
        let matched = matches(&position.title)
            || matches(&position.pillar)
            || matches(&position.level)
            || matches(&position.description)
            || position.requirements.iter().any(|r| matches(r));
        if !matched {
            continue;
        }

        let compatibility = center_edges
            .as_ref()
            .and_then(|edges| edges.iter().find(|e| e.target_id == id))
            .map(|e| e.score);

        hits.push(SearchHit {
            position: position.clone(),
            compatibility,
        });
    }

    hits.sort_by(|a, b| match (a.compatibility, b.compatibility) {
        (Some(x), Some(y)) => y.cmp(&x).then_with(|| a.position.title.cmp(&b.position.title)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.position.title.cmp(&b.position.title),
    });
    hits
}
