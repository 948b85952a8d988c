use climber_core::score::{ScoreOptions, score_edges};
use climber_core::{Catalog, Position};
use climber_layout::{LayoutOptions, layout};

fn position(id: &str, pillar: &str, level: &str, min: f64, max: f64) -> Position {
    Position {
        id: id.to_string(),
        title: id.to_string(),
        level: level.to_string(),
        pillar: pillar.to_string(),
        salary_min: min,
        salary_max: max,
        ..Default::default()
    }
}

fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn center_sits_at_canvas_center_with_the_larger_footprint() {
    let catalog = Catalog::from_positions([position("a", "Tecnologia", "Pleno", 8000.0, 12000.0)]);
    let nodes = layout(&catalog, "a", &ids(&["a"]), &[], &LayoutOptions::default());

    assert_eq!(nodes.len(), 1);
    let center = &nodes[0];
    assert!(center.is_center);
    assert_eq!((center.width, center.height), (160.0, 80.0));
    assert_eq!((center.x, center.y), (420.0, 310.0));
    assert_eq!((center.center_x(), center.center_y()), (500.0, 350.0));
}

#[test]
fn nodes_without_a_center_edge_take_the_outer_ring() {
    let catalog = Catalog::from_positions([
        position("a", "Tecnologia", "Pleno", 8000.0, 12000.0),
        position("b", "Tecnologia", "Pleno", 8000.0, 12000.0),
        position("c", "Tecnologia", "Pleno", 8000.0, 12000.0),
    ]);
    // No scored edges at all: b and c were reached transitively.
    let nodes = layout(&catalog, "a", &ids(&["a", "b", "c"]), &[], &LayoutOptions::default());

    let b = nodes.iter().find(|n| n.id == "b").unwrap();
    assert_eq!((b.x, b.y), (750.0, 315.0));

    let c = nodes.iter().find(|n| n.id == "c").unwrap();
    assert_eq!(c.x, 110.0);
    assert!((c.y - 315.0).abs() < 1e-9);
}

#[test]
fn internal_transitions_orbit_closer_than_cross_functional_ones() {
    let catalog = Catalog::from_positions([
        position("center", "Tecnologia", "Pleno", 8000.0, 12000.0),
        position("peer", "Tecnologia", "Sênior", 10000.0, 16000.0),
        position("lateral", "Dados", "Pleno", 8000.0, 12000.0),
    ]);
    let edges = score_edges(&catalog, "center", &ScoreOptions::default());
    assert_eq!(edges.len(), 2);

    let nodes = layout(
        &catalog,
        "center",
        &ids(&["center", "peer", "lateral"]),
        &edges,
        &LayoutOptions::default(),
    );

    let canvas_center = climber_layout::geom::point(500.0, 350.0);
    let peer = nodes.iter().find(|n| n.id == "peer").unwrap();
    let lateral = nodes.iter().find(|n| n.id == "lateral").unwrap();
    let peer_dist = (peer.center() - canvas_center).length();
    let lateral_dist = (lateral.center() - canvas_center).length();

    // peer: internal base 200 + score gain; lateral: cross base 280 + gain.
    assert!((peer_dist - 228.0).abs() < 1e-9);
    assert!((lateral_dist - 309.2).abs() < 1e-9);
    assert!(peer_dist < lateral_dist);

    // Sparse arrangements resolve with no box overlap at all.
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            assert!(!nodes[i].intersects(&nodes[j]), "{} overlaps {}", nodes[i].id, nodes[j].id);
        }
    }
}

#[test]
fn layout_is_deterministic() {
    let catalog = dense_catalog();
    let edges = score_edges(&catalog, "p00", &ScoreOptions::default());
    let visible: Vec<String> = catalog.ids().map(str::to_string).collect();
    let options = LayoutOptions::default();

    let first = layout(&catalog, "p00", &visible, &edges, &options);
    let second = layout(&catalog, "p00", &visible, &edges, &options);
    assert_eq!(first, second);
}

#[test]
fn every_box_stays_inside_the_canvas() {
    let catalog = dense_catalog();
    let edges = score_edges(&catalog, "p00", &ScoreOptions::default());
    let visible: Vec<String> = catalog.ids().map(str::to_string).collect();
    let options = LayoutOptions::default();

    let nodes = layout(&catalog, "p00", &visible, &edges, &options);
    assert_eq!(nodes.len(), catalog.len());
    for node in &nodes {
        assert!(node.x >= 0.0, "{} escapes left", node.id);
        assert!(node.y >= 0.0, "{} escapes top", node.id);
        assert!(node.x + node.width <= options.canvas_width, "{} escapes right", node.id);
        assert!(node.y + node.height <= options.canvas_height, "{} escapes bottom", node.id);
    }
}

#[test]
fn no_two_nodes_share_a_near_identical_position() {
    let catalog = dense_catalog();
    let edges = score_edges(&catalog, "p00", &ScoreOptions::default());
    let visible: Vec<String> = catalog.ids().map(str::to_string).collect();
    let nodes = layout(&catalog, "p00", &visible, &edges, &LayoutOptions::default());

    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            let dx = (nodes[i].center_x() - nodes[j].center_x()).abs();
            let dy = (nodes[i].center_y() - nodes[j].center_y()).abs();
            assert!(
                dx.max(dy) >= 1.0,
                "{} and {} collapsed onto each other",
                nodes[i].id,
                nodes[j].id
            );
        }
    }
}

#[test]
fn ids_missing_from_the_catalog_are_dropped_not_fatal() {
    let catalog = Catalog::from_positions([
        position("a", "Tecnologia", "Pleno", 8000.0, 12000.0),
        position("b", "Tecnologia", "Pleno", 8000.0, 12000.0),
    ]);
    let nodes = layout(
        &catalog,
        "a",
        &ids(&["a", "ghost", "b"]),
        &[],
        &LayoutOptions::default(),
    );

    assert_eq!(nodes.len(), 2);
    assert!(nodes.iter().all(|n| n.id != "ghost"));
}

#[test]
fn an_unknown_center_degrades_to_a_plain_ring() {
    let catalog = Catalog::from_positions([
        position("a", "Tecnologia", "Pleno", 8000.0, 12000.0),
        position("b", "Tecnologia", "Pleno", 8000.0, 12000.0),
    ]);
    let nodes = layout(
        &catalog,
        "ghost",
        &ids(&["ghost", "a", "b"]),
        &[],
        &LayoutOptions::default(),
    );

    assert_eq!(nodes.len(), 2);
    assert!(nodes.iter().all(|n| !n.is_center));
}

#[test]
fn empty_visible_set_lays_out_nothing() {
    let catalog = Catalog::from_positions([position("a", "Tecnologia", "Pleno", 8000.0, 12000.0)]);
    assert!(layout(&catalog, "a", &[], &[], &LayoutOptions::default()).is_empty());
}

/// A center plus fourteen same-pillar positions: every target lands in one
/// sector, which forces the separation sweeps to do real work.
fn dense_catalog() -> Catalog {
    let mut positions = vec![position("p00", "Tecnologia", "Pleno", 8000.0, 12000.0)];
    for i in 1..15 {
        positions.push(position(
            &format!("p{i:02}"),
            "Tecnologia",
            "Pleno",
            8000.0,
            12000.0,
        ));
    }
    Catalog::from_positions(positions)
}
