//! Common test utilities for building small catalogs.
use keiro::prelude::*;

#[allow(dead_code)]
pub fn node(id: &str, node_type: NodeType, tech: &str, exec: &str, desc: &str, layer: &str) -> NodeDefinition {
    NodeDefinition {
        id: id.to_string(),
        node_type,
        technical_label: tech.to_string(),
        executive_label: exec.to_string(),
        description: desc.to_string(),
        layer: layer.to_string(),
    }
}

#[allow(dead_code)]
pub fn edge(source: &str, target: &str) -> EdgeDefinition {
    EdgeDefinition {
        source: source.to_string(),
        target: target.to_string(),
        label: None,
        style: EdgeStyle::Solid,
    }
}

/// The three-node chain `A(source) -> B(connection) -> C(lakehouse)`.
/// C's description mentions "lakehouse" so search tests have a match.
#[allow(dead_code)]
pub fn abc_catalog() -> Catalog {
    Catalog::new(
        vec![
            node("A", NodeType::Source, "SQL\nA", "Source\nA", "Origin database.", "Source"),
            node("B", NodeType::Connection, "CON\nB", "Link\nB", "Gateway link.", "Connection"),
            node("C", NodeType::Lakehouse, "LH\nC", "Lake\nC", "Bronze lakehouse layer.", "Bronze"),
        ],
        vec![edge("A", "B"), edge("B", "C")],
    )
    .expect("abc catalog is valid")
}

/// A diamond: `A -> B`, `A -> C`, `B -> D`, `C -> D`. D is reachable from A
/// along two chains, so path dedup matters.
#[allow(dead_code)]
pub fn diamond_catalog() -> Catalog {
    Catalog::new(
        vec![
            node("A", NodeType::Source, "A", "A", "", "L0"),
            node("B", NodeType::Command, "B", "B", "", "L1"),
            node("C", NodeType::Command, "C", "C", "", "L1"),
            node("D", NodeType::Lakehouse, "D", "D", "", "L2"),
        ],
        vec![edge("A", "B"), edge("A", "C"), edge("B", "D"), edge("C", "D")],
    )
    .expect("diamond catalog is valid")
}

/// A three-node cycle `A -> B -> C -> A`. The domain never authors one, but
/// traversal has to terminate on it anyway.
#[allow(dead_code)]
pub fn cyclic_catalog() -> Catalog {
    Catalog::new(
        vec![
            node("A", NodeType::Source, "A", "A", "", "L"),
            node("B", NodeType::Command, "B", "B", "", "L"),
            node("C", NodeType::Lakehouse, "C", "C", "", "L"),
        ],
        vec![edge("A", "B"), edge("B", "C"), edge("C", "A")],
    )
    .expect("cyclic catalog is structurally valid")
}

/// A controller over the A->B->C catalog with a fixed seed and viewport.
#[allow(dead_code)]
pub fn abc_controller() -> Controller {
    Controller::with_rng_seed(abc_catalog(), 1280.0, 720.0, 7)
}
