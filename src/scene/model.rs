use crate::catalog::{Catalog, EdgeStyle, NodeStyle, NodeType};
use crate::graph::{EdgeIx, GraphIndex, NodeIx};

use super::layout::Point;

/// Per-element visual state flags. Purely boolean: how they composite
/// (e.g. a search match inside a dimmed region) is the host styling layer's
/// decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisualFlags {
    pub highlighted: bool,
    pub dimmed: bool,
    pub selected: bool,
    pub search_match: bool,
    pub isolated: bool,
}

impl VisualFlags {
    /// Clears every flag except `search_match`, which only the search query
    /// owns.
    pub fn clear_selection(&mut self) {
        self.highlighted = false;
        self.dimmed = false;
        self.selected = false;
        self.isolated = false;
    }

    pub fn clear_all(&mut self) {
        *self = VisualFlags::default();
    }
}

/// A render-ready node instance: catalog data plus resolved style, current
/// model-space position and visual state.
#[derive(Debug, Clone)]
pub struct NodeElement {
    pub node: NodeIx,
    pub id: String,
    pub node_type: NodeType,
    pub technical_label: String,
    pub executive_label: String,
    pub description: String,
    pub layer: String,
    pub style: NodeStyle,
    pub position: Point,
    pub flags: VisualFlags,
}

/// A render-ready edge instance. Endpoint positions are looked up live
/// through the owning scene, never cached here.
#[derive(Debug, Clone)]
pub struct EdgeElement {
    pub edge: EdgeIx,
    pub source: NodeIx,
    pub target: NodeIx,
    pub label: String,
    pub line: EdgeStyle,
    pub flags: VisualFlags,
}

/// Pure, deterministic transform from the static catalog into the scene's
/// element lists. No I/O, no global state; positions start at the origin
/// and are assigned by the layout pass.
pub(super) fn build_elements(
    catalog: &Catalog,
    graph: &GraphIndex,
) -> (Vec<NodeElement>, Vec<EdgeElement>) {
    let nodes = catalog
        .nodes()
        .iter()
        .enumerate()
        .map(|(i, def)| NodeElement {
            node: NodeIx(i),
            id: def.id.clone(),
            node_type: def.node_type,
            technical_label: def.technical_label.clone(),
            executive_label: def.executive_label.clone(),
            description: def.description.clone(),
            layer: def.layer.clone(),
            style: def.node_type.style(),
            position: Point::default(),
            flags: VisualFlags::default(),
        })
        .collect();

    let edges = catalog
        .edges()
        .iter()
        .enumerate()
        .map(|(i, def)| {
            let (source, target) = graph.endpoints(EdgeIx(i));
            EdgeElement {
                edge: EdgeIx(i),
                source,
                target,
                label: def.label.clone().unwrap_or_default(),
                line: def.style,
                flags: VisualFlags::default(),
            }
        })
        .collect();

    (nodes, edges)
}
