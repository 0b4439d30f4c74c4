use crate::graph::{GraphIndex, NodeIx};
use ahash::AHashMap;

/// Horizontal distance between ranks in the hierarchical layout.
pub const RANK_SEP: f64 = 120.0;
/// Vertical distance between nodes within a rank.
pub const NODE_SEP: f64 = 50.0;
/// Horizontal spacing of the isolated single-line layout.
pub const ISOLATE_SPACING: f64 = 220.0;

/// A point in model space. Screen space is derived by the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Computes the base hierarchical left-to-right layout.
///
/// Ranking is longest-path-from-root over outgoing edges; within a rank
/// nodes are ordered by the median rank-position of their predecessors
/// (barycenter pass) with arena index as the tiebreak, so the result is
/// fully determined by the catalog order. Returns one position per node,
/// indexed by `NodeIx`; an empty graph yields an empty layout.
pub fn hierarchical(graph: &GraphIndex) -> Vec<Point> {
    let node_count = graph.node_count();
    if node_count == 0 {
        return Vec::new();
    }

    let ranks = longest_path_ranks(graph);

    // Group nodes by rank, preserving arena order.
    let max_rank = ranks.iter().copied().max().unwrap_or(0);
    let mut columns: Vec<Vec<NodeIx>> = vec![Vec::new(); max_rank + 1];
    for i in 0..node_count {
        columns[ranks[i]].push(NodeIx(i));
    }

    // One barycenter sweep left-to-right to reduce crossings. Positions of
    // the previous column are their final row indices.
    let mut row: AHashMap<NodeIx, usize> = AHashMap::with_capacity(node_count);
    for column in &mut columns {
        let mut keyed: Vec<(f64, NodeIx)> = column
            .iter()
            .map(|&node| {
                let mut upstream_rows: Vec<usize> = graph
                    .incoming(node)
                    .iter()
                    .filter_map(|&edge| row.get(&graph.endpoints(edge).0).copied())
                    .collect();
                upstream_rows.sort_unstable();
                let key = if upstream_rows.is_empty() {
                    f64::MAX
                } else {
                    upstream_rows[upstream_rows.len() / 2] as f64
                };
                (key, node)
            })
            .collect();
        keyed.sort_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.1.cmp(&b.1))
        });
        *column = keyed.into_iter().map(|(_, node)| node).collect();
        for (index, &node) in column.iter().enumerate() {
            row.insert(node, index);
        }
    }

    // Assign coordinates: columns advance by RANK_SEP, rows by NODE_SEP,
    // each column vertically centered on y = 0.
    let mut positions = vec![Point::default(); node_count];
    for (rank, column) in columns.iter().enumerate() {
        let height = (column.len().saturating_sub(1)) as f64 * NODE_SEP;
        for (index, &node) in column.iter().enumerate() {
            positions[node.0] = Point::new(
                rank as f64 * RANK_SEP,
                index as f64 * NODE_SEP - height / 2.0,
            );
        }
    }
    positions
}

/// The single-line layout used by the isolated view: the ordered path laid
/// along y = 0, evenly spaced and centered on x = 0.
pub fn isolation_line(path: &[NodeIx], node_count: usize) -> Vec<Option<Point>> {
    let mut positions = vec![None; node_count];
    let total_width = (path.len().saturating_sub(1)) as f64 * ISOLATE_SPACING;
    let start_x = -total_width / 2.0;
    for (i, &node) in path.iter().enumerate() {
        positions[node.0] = Some(Point::new(start_x + i as f64 * ISOLATE_SPACING, 0.0));
    }
    positions
}

/// Longest distance from any root, per node. Memoized DFS over incoming
/// edges; a node encountered while its own rank is still being computed is
/// on a cycle and contributes rank 0, which truncates the recurrence
/// deterministically.
fn longest_path_ranks(graph: &GraphIndex) -> Vec<usize> {
    #[derive(Clone, Copy, PartialEq)]
    enum State {
        Unvisited,
        InProgress,
        Done,
    }

    fn rank_of(
        graph: &GraphIndex,
        node: NodeIx,
        states: &mut [State],
        ranks: &mut [usize],
    ) -> usize {
        match states[node.0] {
            State::Done => return ranks[node.0],
            State::InProgress => return 0,
            State::Unvisited => {}
        }
        states[node.0] = State::InProgress;
        let mut best = 0;
        for &edge in graph.incoming(node) {
            let (source, _) = graph.endpoints(edge);
            best = best.max(rank_of(graph, source, states, ranks) + 1);
        }
        states[node.0] = State::Done;
        ranks[node.0] = best;
        best
    }

    let node_count = graph.node_count();
    let mut states = vec![State::Unvisited; node_count];
    let mut ranks = vec![0usize; node_count];
    for i in 0..node_count {
        rank_of(graph, NodeIx(i), &mut states, &mut ranks);
    }
    ranks
}
