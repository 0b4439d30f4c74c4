//! Read models projected for the surrounding chrome: the side detail
//! panel, the status strip and the audit matrix tab.

use crate::catalog::NodeType;
use crate::graph::{GraphIndex, NodeIx};
use crate::scene::{Scene, flatten_label};

/// Which display-name variant the chrome is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelMode {
    #[default]
    Technical,
    Executive,
}

impl LabelMode {
    pub fn toggled(self) -> Self {
        match self {
            LabelMode::Technical => LabelMode::Executive,
            LabelMode::Executive => LabelMode::Technical,
        }
    }
}

/// One entry of the ordered path shown in the detail panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PathEntry {
    pub id: String,
    pub label: String,
    pub color: &'static str,
    pub is_current: bool,
}

/// The selected node's full detail record for the side panel.
///
/// Upstream/downstream counts are transitive: the number of strict
/// ancestors and descendants, not direct neighbors.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeDetail {
    pub id: String,
    pub node_type: NodeType,
    pub type_label: &'static str,
    pub color: &'static str,
    pub technical_label: String,
    pub executive_label: String,
    pub description: String,
    pub layer: String,
    pub upstream_count: usize,
    pub downstream_count: usize,
    pub path: Vec<PathEntry>,
}

/// Live graph statistics for the status strip. `in_path` is the connected
/// set's size while a node is isolated, the match count while a type is
/// highlighted, and 0 in the plain overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    pub in_path: usize,
}

/// One row of the audit matrix: every catalog node with its transitive
/// in/out degree.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditRow {
    pub id: String,
    pub type_label: &'static str,
    pub color: &'static str,
    pub name: String,
    pub layer: String,
    pub upstream_count: usize,
    pub downstream_count: usize,
}

pub(crate) fn build_detail(
    scene: &Scene,
    graph: &GraphIndex,
    node: NodeIx,
    mode: LabelMode,
) -> NodeDetail {
    let element = scene.node(node);
    let path = graph
        .ordered_path(node)
        .into_iter()
        .map(|step| {
            let e = scene.node(step);
            let raw = match mode {
                LabelMode::Technical => &e.technical_label,
                LabelMode::Executive => &e.executive_label,
            };
            PathEntry {
                id: e.id.clone(),
                label: flatten_label(raw),
                color: e.style.color,
                is_current: step == node,
            }
        })
        .collect();

    NodeDetail {
        id: element.id.clone(),
        node_type: element.node_type,
        type_label: element.style.label,
        color: element.style.color,
        technical_label: flatten_label(&element.technical_label),
        executive_label: flatten_label(&element.executive_label),
        description: element.description.clone(),
        layer: element.layer.clone(),
        upstream_count: graph.ancestors(node).len(),
        downstream_count: graph.descendants(node).len(),
        path,
    }
}

pub(crate) fn build_audit_rows(scene: &Scene, graph: &GraphIndex, mode: LabelMode) -> Vec<AuditRow> {
    scene
        .nodes()
        .iter()
        .map(|element| {
            let raw = match mode {
                LabelMode::Technical => &element.technical_label,
                LabelMode::Executive => &element.executive_label,
            };
            AuditRow {
                id: element.id.clone(),
                type_label: element.style.label,
                color: element.style.color,
                name: flatten_label(raw),
                layer: element.layer.clone(),
                upstream_count: graph.ancestors(element.node).len(),
                downstream_count: graph.descendants(element.node).len(),
            }
        })
        .collect()
}
