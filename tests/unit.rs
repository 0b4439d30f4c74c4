//! Unit tests for catalog validation, the style table and display helpers.
mod common;
use common::*;
use keiro::prelude::*;
use keiro::scene::flatten_label;
use std::collections::HashSet;

#[test]
fn test_node_type_style_table_is_distinct() {
    let colors: HashSet<_> = NodeType::ALL.iter().map(|t| t.style().color).collect();
    let labels: HashSet<_> = NodeType::ALL.iter().map(|t| t.style().label).collect();
    let shapes: HashSet<_> = NodeType::ALL.iter().map(|t| t.style().shape).collect();
    assert_eq!(colors.len(), NodeType::ALL.len());
    assert_eq!(labels.len(), NodeType::ALL.len());
    assert_eq!(shapes.len(), NodeType::ALL.len());
}

#[test]
fn test_node_type_display_uses_legend_label() {
    assert_eq!(format!("{}", NodeType::Orchestrator), "Orchestrator Pipeline");
    assert_eq!(format!("{}", NodeType::Lakehouse), "Lakehouse");
}

#[test]
fn test_node_type_serde_round_trip() {
    for node_type in NodeType::ALL {
        let json = serde_json::to_string(&node_type).expect("serialize");
        let back: NodeType = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, node_type);
    }
    // The wire names match the authored catalog keys.
    assert_eq!(
        serde_json::from_str::<NodeType>("\"orch\"").expect("orch"),
        NodeType::Orchestrator
    );
    assert_eq!(
        serde_json::from_str::<NodeType>("\"datasource\"").expect("datasource"),
        NodeType::DataSource
    );
}

#[test]
fn test_duplicate_node_id_is_fatal() {
    let result = Catalog::new(
        vec![
            node("A", NodeType::Source, "A", "A", "", "L"),
            node("A", NodeType::Command, "A2", "A2", "", "L"),
        ],
        vec![],
    );
    match result {
        Err(CatalogError::DuplicateNodeId(id)) => assert_eq!(id, "A"),
        other => panic!("expected DuplicateNodeId, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_dangling_edge_endpoint_is_fatal() {
    let result = Catalog::new(
        vec![node("A", NodeType::Source, "A", "A", "", "L")],
        vec![edge("A", "ghost")],
    );
    match result {
        Err(CatalogError::EdgeEndpointNotFound {
            edge_index,
            missing_node_id,
            endpoint,
        }) => {
            assert_eq!(edge_index, 0);
            assert_eq!(missing_node_id, "ghost");
            assert_eq!(endpoint, "target");
        }
        other => panic!("expected EdgeEndpointNotFound, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_empty_catalog_is_valid() {
    let catalog = Catalog::new(vec![], vec![]).expect("empty catalog is not an error");
    assert!(catalog.is_empty());
}

#[test]
fn test_catalog_json_parse_error() {
    let err = Catalog::from_json("{ not json").expect_err("must fail");
    assert!(matches!(err, CatalogError::JsonParseError(_)));
}

#[test]
fn test_edge_style_defaults_to_solid_in_json() {
    let catalog = Catalog::from_json(
        r#"{
            "nodes": [
                { "id": "a", "type": "source", "techLabel": "a", "execLabel": "a", "desc": "", "layer": "L" },
                { "id": "b", "type": "lakehouse", "techLabel": "b", "execLabel": "b", "desc": "", "layer": "L" }
            ],
            "edges": [
                { "source": "a", "target": "b" },
                { "source": "a", "target": "b", "label": "feeds", "style": "dashed" }
            ]
        }"#,
    )
    .expect("valid catalog");
    assert_eq!(catalog.edges()[0].style, EdgeStyle::Solid);
    assert_eq!(catalog.edges()[1].style, EdgeStyle::Dashed);
    assert_eq!(catalog.edges()[1].label.as_deref(), Some("feeds"));
}

#[test]
fn test_error_display() {
    let err = CatalogError::EdgeEndpointNotFound {
        edge_index: 3,
        missing_node_id: "lh_gold".to_string(),
        endpoint: "source",
    };
    assert!(err.to_string().contains("lh_gold"));
    assert!(err.to_string().contains("#3"));

    let query_err = QueryError::NodeNotFound("nope".to_string());
    assert!(query_err.to_string().contains("nope"));
}

#[test]
fn test_flatten_label() {
    assert_eq!(flatten_label("PL_FMD_\nLOAD_ALL"), "PL_FMD_ LOAD_ALL");
    assert_eq!(flatten_label("no break"), "no break");
}

#[test]
fn test_label_mode_toggle() {
    assert_eq!(LabelMode::Technical.toggled(), LabelMode::Executive);
    assert_eq!(LabelMode::Executive.toggled(), LabelMode::Technical);
}
