#![forbid(unsafe_code)]

//! Deterministic radial layout for career graphs (headless).
//!
//! Consumes a catalog, a center position and the center's scored edges from
//! `climber-core` and produces bounds-clamped node boxes. Layout is total:
//! unknown ids are dropped with a logged anomaly, and degenerate inputs
//! degrade to an empty or partial result rather than failing.

pub mod collide;
pub mod geom;
pub mod model;
pub mod radial;

pub use model::LayoutNode;
pub use radial::{PillarSector, default_sectors};

use climber_core::Catalog;
use climber_core::score::ScoredEdge;

/// Layout constants. The defaults are the reference 1000x700 canvas.
#[derive(Debug, Clone)]
pub struct LayoutOptions {
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// The center box is larger than peripheral ones to keep the focus
    /// visually distinct.
    pub center_width: f64,
    pub center_height: f64,
    pub node_width: f64,
    pub node_height: f64,
    /// Base orbit for same-pillar transitions.
    pub internal_base_radius: f64,
    /// Base orbit for cross-functional transitions.
    pub cross_base_radius: f64,
    /// Radius added per point of edge score (scaled by 1/100).
    pub score_radius_gain: f64,
    /// Radius added per same-pillar sibling ahead of a node in its sector.
    pub sibling_radius_step: f64,
    /// Orbit for visible nodes with no scored edge from the center.
    pub outer_ring_radius: f64,
    /// Minimum gap kept between any node box and the canvas edge.
    pub bounds_margin: f64,
    /// Minimum center-to-center distance enforced by the separation sweeps.
    pub min_separation: f64,
    /// Extra distance added on top of the resolved overlap.
    pub separation_margin: f64,
    pub max_collision_passes: usize,
    /// Chebyshev center distance below which the fallback nudge kicks in.
    pub hard_floor: f64,
    pub fallback_offset: f64,
    /// Pillar -> angular sector table; must tile the full circle.
    pub sectors: Vec<PillarSector>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            canvas_width: 1000.0,
            canvas_height: 700.0,
            center_width: 160.0,
            center_height: 80.0,
            node_width: 140.0,
            node_height: 70.0,
            internal_base_radius: 200.0,
            cross_base_radius: 280.0,
            score_radius_gain: 40.0,
            sibling_radius_step: 25.0,
            outer_ring_radius: 320.0,
            bounds_margin: 15.0,
            min_separation: 160.0,
            separation_margin: 2.0,
            max_collision_passes: 100,
            hard_floor: 50.0,
            fallback_offset: 80.0,
            sectors: default_sectors(),
        }
    }
}

/// Lays out the visible node set around `center_id`.
///
/// `center_edges` are the scored edges of the current center (as returned by
/// `climber_core::score_edges`); visible nodes without one fall back to the
/// outer ring. Output boxes are fully inside the canvas and overlap-resolved.
pub fn layout(
    catalog: &Catalog,
    center_id: &str,
    visible: &[String],
    center_edges: &[ScoredEdge],
    options: &LayoutOptions,
) -> Vec<LayoutNode> {
    let mut nodes = radial::place_nodes(catalog, center_id, visible, center_edges, options);
    collide::resolve_collisions(&mut nodes, options);
    nodes
}
