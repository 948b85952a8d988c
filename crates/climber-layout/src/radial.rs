//! Initial radial placement: the center at canvas center, scored neighbors
//! on per-pillar angular sectors, everything else on a uniform outer ring.
//!
//! No randomness anywhere; two calls with identical inputs produce
//! bit-identical coordinates.

use crate::LayoutOptions;
use crate::geom::point;
use crate::model::LayoutNode;
use climber_core::Catalog;
use climber_core::score::{MAX_SCORE, ScoredEdge, TransitionKind};
use rustc_hash::FxHashSet;
use std::f64::consts::{PI, TAU};

/// One pillar's slice of the circle, in radians.
#[derive(Debug, Clone, PartialEq)]
pub struct PillarSector {
    pub pillar: String,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// Six equal sectors tiling the full circle, in the reference pillar order.
/// Adding a pillar is a data change: append a sector (or supply a custom
/// table through [`LayoutOptions`]).
pub fn default_sectors() -> Vec<PillarSector> {
    [
        "Tecnologia",
        "Produto",
        "Dados",
        "Gestão",
        "Financeiro",
        "Recursos Humanos",
    ]
    .into_iter()
    .enumerate()
    .map(|(i, pillar)| PillarSector {
        pillar: pillar.to_string(),
        start_angle: i as f64 * PI / 3.0,
        end_angle: (i + 1) as f64 * PI / 3.0,
    })
    .collect()
}

/// Unknown pillars fall back to the first sector.
fn sector_for<'a>(sectors: &'a [PillarSector], pillar: &str) -> Option<&'a PillarSector> {
    sectors
        .iter()
        .find(|s| s.pillar == pillar)
        .or_else(|| sectors.first())
}

pub fn place_nodes(
    catalog: &Catalog,
    center_id: &str,
    visible: &[String],
    center_edges: &[ScoredEdge],
    options: &LayoutOptions,
) -> Vec<LayoutNode> {
    let canvas_center = point(options.canvas_width / 2.0, options.canvas_height / 2.0);

    let mut counted = FxHashSet::default();
    let ring_total = visible
        .iter()
        .filter(|id| {
            id.as_str() != center_id && catalog.contains(id) && counted.insert(id.as_str())
        })
        .count();

    let mut seen = FxHashSet::default();
    let mut nodes = Vec::with_capacity(visible.len());
    let mut ring_ordinal = 0usize;

    for id in visible {
        if !seen.insert(id.as_str()) {
            continue;
        }

        if id == center_id {
            if catalog.contains(id) {
                nodes.push(LayoutNode {
                    id: id.clone(),
                    x: (options.canvas_width - options.center_width) / 2.0,
                    y: (options.canvas_height - options.center_height) / 2.0,
                    width: options.center_width,
                    height: options.center_height,
                    is_center: true,
                });
            } else {
                tracing::warn!(id = %id, "layout center missing from the catalog");
            }
            continue;
        }

        let Some(position) = catalog.get(id) else {
            tracing::warn!(id = %id, "dropping visible position missing from the catalog");
            continue;
        };
        let ordinal = ring_ordinal;
        ring_ordinal += 1;

        let edge = center_edges.iter().find(|e| e.target_id == *id);
        let sector = edge.and_then(|_| sector_for(&options.sectors, &position.pillar));

        let (angle, radius) = match (edge, sector) {
            (Some(edge), Some(sector)) => {
                // Same-pillar siblings share the sector evenly, in edge order.
                let siblings: Vec<&ScoredEdge> = center_edges
                    .iter()
                    .filter(|e| {
                        catalog
                            .get(&e.target_id)
                            .is_some_and(|p| p.pillar == position.pillar)
                    })
                    .collect();
                let index = siblings
                    .iter()
                    .position(|e| e.target_id == *id)
                    .unwrap_or(0);

                let span = sector.end_angle - sector.start_angle;
                let step = span / siblings.len().max(1) as f64;
                let angle = sector.start_angle + step * index as f64 + step / 2.0;

                // Internal transitions sit closer to the center than
                // cross-functional ones; stronger edges sit slightly further
                // out, and siblings fan outward so they don't stack.
                let base = match edge.kind {
                    TransitionKind::Internal => options.internal_base_radius,
                    TransitionKind::CrossFunctional => options.cross_base_radius,
                };
                let radius = base
                    + f64::from(edge.score) / f64::from(MAX_SCORE) * options.score_radius_gain
                    + index as f64 * options.sibling_radius_step;
                (angle, radius)
            }
            // Reached transitively, not from the current center: uniform
            // placement on the outer ring.
            _ => (
                ordinal as f64 * TAU / ring_total.max(1) as f64,
                options.outer_ring_radius,
            ),
        };

        let mut node = LayoutNode {
            id: id.clone(),
            x: canvas_center.x + radius * angle.cos() - options.node_width / 2.0,
            y: canvas_center.y + radius * angle.sin() - options.node_height / 2.0,
            width: options.node_width,
            height: options.node_height,
            is_center: false,
        };
        node.clamp_into(options.canvas_width, options.canvas_height, options.bounds_margin);
        nodes.push(node);
    }

    nodes
}
