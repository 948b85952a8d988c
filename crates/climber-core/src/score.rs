//! The compatibility scorer: an additive point system deciding, for a source
//! position, which catalog entries are plausible transitions and how strong
//! each one is.
//!
//! Scoring is deterministic and total: any source id yields a (possibly
//! empty) edge list, never an error. Edges are ephemeral and rebuilt on every
//! call.

use crate::catalog::Catalog;
use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound of a clamped compatibility score.
pub const MAX_SCORE: u32 = 100;

/// Edge classification: `Internal` iff source and target share a pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionKind {
    #[serde(rename = "internal")]
    Internal,
    #[serde(rename = "cross-functional")]
    CrossFunctional,
}

/// A human-readable factor that contributed to an edge's score, in the order
/// the factors were evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reason {
    #[serde(rename = "salary progression")]
    SalaryProgression,
    #[serde(rename = "compatible salary")]
    CompatibleSalary,
    #[serde(rename = "growth potential")]
    GrowthPotential,
    #[serde(rename = "same area")]
    SameArea,
    #[serde(rename = "related area")]
    RelatedArea,
    #[serde(rename = "new area")]
    NewArea,
    #[serde(rename = "same level")]
    SameLevel,
    #[serde(rename = "natural progression")]
    NaturalProgression,
    #[serde(rename = "big step up")]
    BigStepUp,
    #[serde(rename = "curated path")]
    CuratedPath,
    #[serde(rename = "transferable skills")]
    TransferableSkills,
}

impl Reason {
    pub fn label(self) -> &'static str {
        match self {
            Reason::SalaryProgression => "salary progression",
            Reason::CompatibleSalary => "compatible salary",
            Reason::GrowthPotential => "growth potential",
            Reason::SameArea => "same area",
            Reason::RelatedArea => "related area",
            Reason::NewArea => "new area",
            Reason::SameLevel => "same level",
            Reason::NaturalProgression => "natural progression",
            Reason::BigStepUp => "big step up",
            Reason::CuratedPath => "curated path",
            Reason::TransferableSkills => "transferable skills",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A scored, directed transition edge. Recomputed on demand; has no identity
/// beyond the `(source, target)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredEdge {
    pub source_id: String,
    pub target_id: String,
    /// Clamped to `0..=100`.
    pub score: u32,
    pub reasons: Vec<Reason>,
    /// Rounded signed difference between target and source salary midpoints.
    pub salary_delta: i64,
    pub kind: TransitionKind,
}

/// Scoring constants and data tables.
///
/// The defaults are the canonical rule set; the handful of presentation
/// variants in the wild differ only in these values, so variants are a
/// configuration concern, not separate scorers.
#[derive(Debug, Clone)]
pub struct ScoreOptions {
    /// Minimum raw (pre-clamp) total for a candidate to become an edge.
    pub admission_threshold: f64,
    /// Downward tolerance around the source salary midpoint.
    pub salary_flexibility: f64,
    /// Multiplier applied to `salary_flexibility` for the upward bound of
    /// the acceptance window; > 1 favors upward mobility.
    pub upward_stretch: f64,
    /// Edges kept per source after sorting; bounds rendered fan-out.
    pub edge_cap: usize,
    /// Bonus for targets listed in the source's curated connections.
    /// Zero disables the factor.
    pub curated_bonus: f64,
    /// Bonus when source and target share a transferable skill tag.
    /// Zero disables the factor.
    pub skills_bonus: f64,
    /// Pillar -> related pillars. Lookups are directional.
    pub related_areas: IndexMap<String, Vec<String>>,
    /// Level label -> ordinal rank.
    pub level_ranks: IndexMap<String, i32>,
    /// Rank assumed for level labels missing from `level_ranks`.
    pub default_level_rank: i32,
}

impl Default for ScoreOptions {
    fn default() -> Self {
        Self {
            admission_threshold: 20.0,
            salary_flexibility: 0.3,
            upward_stretch: 1.5,
            edge_cap: 12,
            curated_bonus: 10.0,
            skills_bonus: 8.0,
            related_areas: default_related_areas(),
            level_ranks: default_level_ranks(),
            default_level_rank: 2,
        }
    }
}

impl ScoreOptions {
    pub fn level_rank(&self, level: &str) -> i32 {
        self.level_ranks
            .get(level)
            .copied()
            .unwrap_or(self.default_level_rank)
    }

    pub fn areas_related(&self, from: &str, to: &str) -> bool {
        self.related_areas
            .get(from)
            .is_some_and(|related| related.iter().any(|p| p == to))
    }
}

fn default_related_areas() -> IndexMap<String, Vec<String>> {
    [
        ("Tecnologia", vec!["Dados", "Produto"]),
        ("Gestão", vec!["Financeiro", "Recursos Humanos"]),
        ("Financeiro", vec!["Gestão", "Dados"]),
        ("Dados", vec!["Tecnologia", "Financeiro"]),
        ("Produto", vec!["Tecnologia", "Dados"]),
        ("Recursos Humanos", vec!["Gestão"]),
    ]
    .into_iter()
    .map(|(pillar, related)| {
        (
            pillar.to_string(),
            related.into_iter().map(str::to_string).collect(),
        )
    })
    .collect()
}

fn default_level_ranks() -> IndexMap<String, i32> {
    [
        ("Júnior", 1),
        ("Pleno", 2),
        ("Sênior", 3),
        ("Especialista", 3),
        ("Coordenador", 4),
        ("Gerente", 5),
        ("Diretor", 6),
        ("VP", 7),
        ("C-Level", 8),
    ]
    .into_iter()
    .map(|(level, rank)| (level.to_string(), rank))
    .collect()
}

/// Scores every catalog entry against `source_id` and returns the qualifying
/// edges, sorted by descending score (ties keep catalog order) and truncated
/// to `options.edge_cap`.
///
/// An unknown source id is a recoverable "no edges" result, not an error.
pub fn score_edges(catalog: &Catalog, source_id: &str, options: &ScoreOptions) -> Vec<ScoredEdge> {
    let Some(source) = catalog.get(source_id) else {
        tracing::warn!(id = %source_id, "scoring requested for a position missing from the catalog");
        return Vec::new();
    };

    let source_mid = source.salary_midpoint();
    let window_lo = source_mid * (1.0 - options.salary_flexibility);
    let window_hi = source_mid * (1.0 + options.salary_flexibility * options.upward_stretch);
    let max_diff = source_mid * options.salary_flexibility;
    let source_rank = options.level_rank(&source.level);
    let source_skills: FxHashSet<&str> = source
        .transferable_skills
        .iter()
        .map(String::as_str)
        .collect();

    let mut edges = Vec::new();
    for (target_id, target) in catalog.iter() {
        if target_id == source_id {
            continue;
        }

        let target_mid = target.salary_midpoint();
        let mut score = 0.0;
        let mut reasons = Vec::new();

        // Salary factor (0-35). The acceptance window is asymmetric: further
        // up than down, so upward moves survive the band check more often.
        if max_diff > 0.0 && (window_lo..=window_hi).contains(&target_mid) {
            let diff = (source_mid - target_mid).abs();
            score += ((1.0 - diff / max_diff) * 35.0).max(15.0);
            reasons.push(if target_mid > source_mid * 1.1 {
                Reason::SalaryProgression
            } else {
                Reason::CompatibleSalary
            });
        } else if max_diff <= 0.0 && target_mid == source_mid {
            // Degenerate source band; an exact match is still fully compatible.
            score += 35.0;
            reasons.push(Reason::CompatibleSalary);
        } else if target_mid > source_mid {
            score += 10.0;
            reasons.push(Reason::GrowthPotential);
        }

        // Pillar factor (5-30). Never zero: an unrelated area still gets a
        // baseline credit.
        if source.pillar == target.pillar {
            score += 30.0;
            reasons.push(Reason::SameArea);
        } else if options.areas_related(&source.pillar, &target.pillar) {
            score += 18.0;
            reasons.push(Reason::RelatedArea);
        } else {
            score += 5.0;
            reasons.push(Reason::NewArea);
        }

        // Level factor (0-25). One rank up outranks staying flat.
        match options.level_rank(&target.level) - source_rank {
            0 => {
                score += 20.0;
                reasons.push(Reason::SameLevel);
            }
            1 => {
                score += 25.0;
                reasons.push(Reason::NaturalProgression);
            }
            2 => {
                score += 15.0;
                reasons.push(Reason::BigStepUp);
            }
            _ => {}
        }

        if options.curated_bonus > 0.0 && source.connections.iter().any(|c| c == target_id) {
            score += options.curated_bonus;
            reasons.push(Reason::CuratedPath);
        }

        if options.skills_bonus > 0.0
            && !source_skills.is_empty()
            && target
                .transferable_skills
                .iter()
                .any(|s| source_skills.contains(s.as_str()))
        {
            score += options.skills_bonus;
            reasons.push(Reason::TransferableSkills);
        }

        if score >= options.admission_threshold {
            edges.push(ScoredEdge {
                source_id: source_id.to_string(),
                target_id: target_id.to_string(),
                score: (score.round() as u32).min(MAX_SCORE),
                reasons,
                salary_delta: (target_mid - source_mid).round() as i64,
                kind: if source.pillar == target.pillar {
                    TransitionKind::Internal
                } else {
                    TransitionKind::CrossFunctional
                },
            });
        }
    }

    // Stable sort: equal scores keep catalog iteration order.
    edges.sort_by(|a, b| b.score.cmp(&a.score));
    edges.truncate(options.edge_cap);
    edges
}
