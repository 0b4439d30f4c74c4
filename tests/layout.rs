//! Layout tests: determinism, rank monotonicity, the isolation line and
//! the empty-catalog edge case.
mod common;
use common::*;
use keiro::prelude::*;
use keiro::scene::{ISOLATE_SPACING, RANK_SEP, layout};

#[test]
fn test_layout_is_deterministic() {
    let catalog = keiro::data::demo_catalog().expect("demo catalog is valid");
    let graph = GraphIndex::build(&catalog);
    let first = layout::hierarchical(&graph);
    let second = layout::hierarchical(&graph);
    assert_eq!(first, second);

    // And stable across a full rebuild from the same definitions.
    let rebuilt = GraphIndex::build(&catalog);
    assert_eq!(layout::hierarchical(&rebuilt), first);
}

#[test]
fn test_ranks_advance_left_to_right() {
    let catalog = abc_catalog();
    let graph = GraphIndex::build(&catalog);
    let positions = layout::hierarchical(&graph);

    let a = graph.resolve("A").expect("A exists");
    let b = graph.resolve("B").expect("B exists");
    let c = graph.resolve("C").expect("C exists");
    assert_eq!(positions[a.0].x, 0.0);
    assert_eq!(positions[b.0].x, RANK_SEP);
    assert_eq!(positions[c.0].x, 2.0 * RANK_SEP);
}

#[test]
fn test_rank_is_longest_path_not_shortest() {
    // A -> D directly, but also A -> B -> C -> D: D must sit at rank 3.
    let catalog = Catalog::new(
        vec![
            node("A", NodeType::Source, "A", "A", "", "L"),
            node("B", NodeType::Command, "B", "B", "", "L"),
            node("C", NodeType::Copy, "C", "C", "", "L"),
            node("D", NodeType::Lakehouse, "D", "D", "", "L"),
        ],
        vec![edge("A", "B"), edge("B", "C"), edge("C", "D"), edge("A", "D")],
    )
    .expect("valid catalog");
    let graph = GraphIndex::build(&catalog);
    let positions = layout::hierarchical(&graph);
    let d = graph.resolve("D").expect("D exists");
    assert_eq!(positions[d.0].x, 3.0 * RANK_SEP);
}

#[test]
fn test_empty_catalog_layouts_to_empty_scene() {
    let catalog = Catalog::new(vec![], vec![]).expect("empty catalog");
    let graph = GraphIndex::build(&catalog);
    assert!(layout::hierarchical(&graph).is_empty());

    // And the full scene stack stays inert instead of erroring.
    let controller = Controller::new(catalog, 800.0, 600.0);
    assert_eq!(controller.stats(), GraphStats { nodes: 0, edges: 0, in_path: 0 });
    assert!(controller.scene().nodes().is_empty());
}

#[test]
fn test_cyclic_graph_layout_does_not_hang() {
    let catalog = cyclic_catalog();
    let graph = GraphIndex::build(&catalog);
    let positions = layout::hierarchical(&graph);
    assert_eq!(positions.len(), 3);
}

#[test]
fn test_isolation_line_spacing_and_centering() {
    let catalog = abc_catalog();
    let graph = GraphIndex::build(&catalog);
    let b = graph.resolve("B").expect("B exists");
    let path = graph.ordered_path(b);

    let targets = layout::isolation_line(&path, graph.node_count());
    let points: Vec<_> = path
        .iter()
        .map(|&n| targets[n.0].expect("path nodes have targets"))
        .collect();

    assert_eq!(points[0].x, -ISOLATE_SPACING);
    assert_eq!(points[1].x, 0.0);
    assert_eq!(points[2].x, ISOLATE_SPACING);
    assert!(points.iter().all(|p| p.y == 0.0));
}

#[test]
fn test_isolation_line_single_node() {
    let catalog = abc_catalog();
    let graph = GraphIndex::build(&catalog);
    let targets = layout::isolation_line(&[NodeIx(0)], graph.node_count());
    assert_eq!(targets[0].expect("target set").x, 0.0);
    assert!(targets[1].is_none());
}

#[test]
fn test_viewport_fit_clamps_zoom() {
    let viewport = Viewport::new(800.0, 600.0);
    let catalog = keiro::data::demo_catalog().expect("demo catalog");
    let graph = GraphIndex::build(&catalog);
    let scene = Scene::new(&catalog, &graph, 800.0, 600.0);
    let bbox = scene.bounding_box_all().expect("non-empty");
    let fitted = viewport.fitted_to(bbox, 50.0);
    assert!(fitted.zoom >= 0.15 && fitted.zoom <= 3.0);

    // The framed center lands at the viewport center.
    let center = fitted.to_screen(bbox.center());
    assert!((center.x - 400.0).abs() < 1e-9);
    assert!((center.y - 300.0).abs() < 1e-9);
}
