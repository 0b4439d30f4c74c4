use crate::error::CatalogError;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use super::NodeType;

/// A single authored entry in the pipeline map.
///
/// Labels come in two variants: a `technical_label` naming the actual
/// artifact (and usually containing a `\n` break for two-line rendering) and
/// an `executive_label` phrased for non-technical readers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDefinition {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(rename = "techLabel")]
    pub technical_label: String,
    #[serde(rename = "execLabel")]
    pub executive_label: String,
    #[serde(rename = "desc")]
    pub description: String,
    pub layer: String,
}

/// Rendering style of an edge line. Dashed edges mark indirect relationships
/// (configuration, metadata reads) as opposed to the main data flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeStyle {
    #[default]
    Solid,
    Dashed,
}

/// A directed relationship between two catalog nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeDefinition {
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub style: EdgeStyle,
}

/// The complete, validated node/edge catalog.
///
/// Construction is the single validation point: node ids must be unique and
/// every edge endpoint must name an existing node. A catalog that fails
/// these checks is a data-authoring defect and is rejected outright; the
/// traversal and rendering layers are allowed to assume integrity.
///
/// The catalog is immutable for the life of the process; there are no
/// create/update/delete operations.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    nodes: Vec<NodeDefinition>,
    edges: Vec<EdgeDefinition>,
}

impl Catalog {
    /// Validates and wraps an authored node/edge set. An empty catalog is
    /// valid and produces an inert, empty scene downstream.
    pub fn new(
        nodes: Vec<NodeDefinition>,
        edges: Vec<EdgeDefinition>,
    ) -> Result<Self, CatalogError> {
        let mut seen: AHashSet<&str> = AHashSet::with_capacity(nodes.len());
        for node in &nodes {
            if !seen.insert(node.id.as_str()) {
                return Err(CatalogError::DuplicateNodeId(node.id.clone()));
            }
        }

        for (edge_index, edge) in edges.iter().enumerate() {
            if !seen.contains(edge.source.as_str()) {
                return Err(CatalogError::EdgeEndpointNotFound {
                    edge_index,
                    missing_node_id: edge.source.clone(),
                    endpoint: "source",
                });
            }
            if !seen.contains(edge.target.as_str()) {
                return Err(CatalogError::EdgeEndpointNotFound {
                    edge_index,
                    missing_node_id: edge.target.clone(),
                    endpoint: "target",
                });
            }
        }

        Ok(Self { nodes, edges })
    }

    /// Parses a catalog from its JSON representation and validates it.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog =
            serde_json::from_str(json).map_err(|e| CatalogError::JsonParseError(e.to_string()))?;
        Self::new(raw.nodes, raw.edges)
    }

    pub fn nodes(&self) -> &[NodeDefinition] {
        &self.nodes
    }

    pub fn edges(&self) -> &[EdgeDefinition] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Serde shape of the JSON catalog resource.
#[derive(Deserialize)]
struct RawCatalog {
    nodes: Vec<NodeDefinition>,
    edges: Vec<EdgeDefinition>,
}
