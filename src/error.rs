use thiserror::Error;

/// Errors that can occur while loading and validating a node/edge catalog.
///
/// All of these represent data-authoring defects. They are raised once, at
/// startup, when the catalog is constructed, never during traversal or
/// rendering.
#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    #[error("Failed to parse catalog JSON: {0}")]
    JsonParseError(String),

    #[error("Duplicate node id '{0}' in catalog")]
    DuplicateNodeId(String),

    #[error(
        "Edge #{edge_index} references missing node '{missing_node_id}' as its {endpoint} endpoint"
    )]
    EdgeEndpointNotFound {
        edge_index: usize,
        missing_node_id: String,
        endpoint: &'static str,
    },
}

/// Errors raised when querying the graph with an id the catalog does not
/// contain.
#[derive(Error, Debug, Clone)]
pub enum QueryError {
    #[error("Node '{0}' not found in catalog")]
    NodeNotFound(String),
}
