//! Index-based adjacency over a validated [`Catalog`], plus the path
//! computation that drives the isolated view.
//!
//! Everything here refers to nodes and edges by arena index (`NodeIx`,
//! `EdgeIx`); the definitions themselves stay owned by the catalog. Both
//! traversal directions keep a visited set, so a cyclic edge set terminates
//! with a finite, deduplicated result instead of looping.

use crate::catalog::Catalog;
use crate::error::QueryError;
use ahash::{AHashMap, AHashSet};
use itertools::Itertools;

/// Arena index of a node in the catalog's node list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIx(pub usize);

/// Arena index of an edge in the catalog's edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeIx(pub usize);

/// Direction-indexed adjacency for a catalog, built once at startup.
#[derive(Debug, Clone)]
pub struct GraphIndex {
    ids: AHashMap<String, NodeIx>,
    /// Outgoing edge indices per node, in catalog edge order.
    outgoing: Vec<Vec<EdgeIx>>,
    /// Incoming edge indices per node, maintained as a separate reverse index.
    incoming: Vec<Vec<EdgeIx>>,
    /// `(source, target)` node indices per edge.
    endpoints: Vec<(NodeIx, NodeIx)>,
}

impl GraphIndex {
    /// Builds the adjacency index. The catalog has already been validated,
    /// so every edge endpoint resolves.
    pub fn build(catalog: &Catalog) -> Self {
        let node_count = catalog.nodes().len();
        let mut ids = AHashMap::with_capacity(node_count);
        for (i, node) in catalog.nodes().iter().enumerate() {
            ids.insert(node.id.clone(), NodeIx(i));
        }

        let mut outgoing = vec![Vec::new(); node_count];
        let mut incoming = vec![Vec::new(); node_count];
        let mut endpoints = Vec::with_capacity(catalog.edges().len());
        for (i, edge) in catalog.edges().iter().enumerate() {
            let source = ids[edge.source.as_str()];
            let target = ids[edge.target.as_str()];
            outgoing[source.0].push(EdgeIx(i));
            incoming[target.0].push(EdgeIx(i));
            endpoints.push((source, target));
        }

        Self {
            ids,
            outgoing,
            incoming,
            endpoints,
        }
    }

    pub fn node_count(&self) -> usize {
        self.outgoing.len()
    }

    pub fn edge_count(&self) -> usize {
        self.endpoints.len()
    }

    /// Resolves a string id to its arena index.
    pub fn resolve(&self, id: &str) -> Result<NodeIx, QueryError> {
        self.ids
            .get(id)
            .copied()
            .ok_or_else(|| QueryError::NodeNotFound(id.to_string()))
    }

    pub fn endpoints(&self, edge: EdgeIx) -> (NodeIx, NodeIx) {
        self.endpoints[edge.0]
    }

    pub fn outgoing(&self, node: NodeIx) -> &[EdgeIx] {
        &self.outgoing[node.0]
    }

    pub fn incoming(&self, node: NodeIx) -> &[EdgeIx] {
        &self.incoming[node.0]
    }

    /// Strict ancestors of `node` in discovery order (nearest first),
    /// deduplicated. Reverse traversal over incoming edges.
    pub fn ancestors(&self, node: NodeIx) -> Vec<NodeIx> {
        self.walk(node, Direction::Upstream)
    }

    /// Strict descendants of `node` in discovery order (nearest first),
    /// deduplicated. Forward traversal over outgoing edges.
    pub fn descendants(&self, node: NodeIx) -> Vec<NodeIx> {
        self.walk(node, Direction::Downstream)
    }

    /// Depth-first walk in one direction. The visited set guards expansion:
    /// a node already expanded in this direction is never re-expanded, which
    /// both deduplicates diamond-shaped reachability and truncates cycles.
    fn walk(&self, start: NodeIx, direction: Direction) -> Vec<NodeIx> {
        let mut visited: AHashSet<NodeIx> = AHashSet::new();
        visited.insert(start);
        let mut collected = Vec::new();
        let mut stack = vec![start];

        while let Some(current) = stack.pop() {
            let edges = match direction {
                Direction::Upstream => &self.incoming[current.0],
                Direction::Downstream => &self.outgoing[current.0],
            };
            for &edge in edges {
                let (source, target) = self.endpoints[edge.0];
                let next = match direction {
                    Direction::Upstream => source,
                    Direction::Downstream => target,
                };
                if visited.insert(next) {
                    collected.push(next);
                    stack.push(next);
                }
            }
        }

        collected
    }

    /// The ordered path through `node`: strict ancestors furthest-first,
    /// then the node itself, then strict descendants nearest-first. A node
    /// reachable along multiple chains appears once, at its first-seen
    /// position.
    pub fn ordered_path(&self, node: NodeIx) -> Vec<NodeIx> {
        let upstream = self.ancestors(node);
        let downstream = self.descendants(node);

        upstream
            .into_iter()
            .rev()
            .chain(std::iter::once(node))
            .chain(downstream)
            .unique()
            .collect()
    }

    /// The closure used for dimming: the node plus all its ancestors and
    /// descendants.
    pub fn connected_set(&self, node: NodeIx) -> AHashSet<NodeIx> {
        let mut set: AHashSet<NodeIx> = AHashSet::new();
        set.insert(node);
        set.extend(self.ancestors(node));
        set.extend(self.descendants(node));
        set
    }

    /// Edges whose both endpoints are members of `set`, in catalog order.
    /// These stay highlighted while everything else dims.
    pub fn edges_within(&self, set: &AHashSet<NodeIx>) -> Vec<EdgeIx> {
        self.endpoints
            .iter()
            .enumerate()
            .filter(|(_, (source, target))| set.contains(source) && set.contains(target))
            .map(|(i, _)| EdgeIx(i))
            .collect()
    }

    /// Edges touching `node` in either direction, deduplicated self-loops
    /// included once.
    pub fn incident_edges(&self, node: NodeIx) -> Vec<EdgeIx> {
        self.incoming[node.0]
            .iter()
            .chain(self.outgoing[node.0].iter())
            .copied()
            .unique()
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Upstream,
    Downstream,
}
