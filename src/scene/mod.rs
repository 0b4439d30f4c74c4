//! The render surface: element lists with positions and visual flags, the
//! viewport camera, theme-resolved styling, search marking and hover data.
//!
//! The scene renders to *data*; the surrounding chrome draws it. Layout
//! and flag application never fail for a non-empty catalog, and an empty
//! catalog produces a stable empty scene.

pub mod layout;
pub mod model;
pub mod theme;

pub use layout::{ISOLATE_SPACING, NODE_SEP, Point, RANK_SEP};
pub use model::{EdgeElement, NodeElement, VisualFlags};
pub use theme::{Palette, Theme, ThemeSource};

use crate::catalog::Catalog;
use crate::graph::{GraphIndex, NodeIx};

/// Camera fit padding used for the overview layout.
pub const OVERVIEW_FIT_PADDING: f64 = 50.0;
/// Camera fit padding used when framing an isolated connected set.
pub const ISOLATE_FIT_PADDING: f64 = 80.0;

const MIN_ZOOM: f64 = 0.15;
const MAX_ZOOM: f64 = 3.0;

/// The camera: model space maps to screen space as `model * zoom + pan`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub zoom: f64,
    pub pan: Point,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            zoom: 1.0,
            pan: Point::new(width / 2.0, height / 2.0),
        }
    }

    pub fn to_screen(&self, p: Point) -> Point {
        Point::new(p.x * self.zoom + self.pan.x, p.y * self.zoom + self.pan.y)
    }

    /// The zoom/pan that frames `bbox` with `padding` on all sides, zoom
    /// clamped to the interactive range.
    pub fn fitted_to(&self, bbox: BoundingBox, padding: f64) -> Viewport {
        let usable_w = (self.width - 2.0 * padding).max(1.0);
        let usable_h = (self.height - 2.0 * padding).max(1.0);
        let zoom = (usable_w / bbox.width().max(1.0))
            .min(usable_h / bbox.height().max(1.0))
            .clamp(MIN_ZOOM, MAX_ZOOM);
        let center = bbox.center();
        Viewport {
            width: self.width,
            height: self.height,
            zoom,
            pan: Point::new(
                self.width / 2.0 - center.x * zoom,
                self.height / 2.0 - center.y * zoom,
            ),
        }
    }
}

/// An axis-aligned model-space rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
}

/// Hover data for a node, anchored in screen space above the node. Computed
/// on demand from the live camera, so a host that re-queries after a pan or
/// zoom never sees a stale anchor; dismissal on pointer-out or viewport
/// change is the host's job.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub type_label: &'static str,
    pub label: String,
    pub description: String,
    pub anchor: Point,
}

/// The graph surface. Owns every rendered element and is the sole writer of
/// their visual flags; the controller drives it, the host reads it.
#[derive(Debug, Clone)]
pub struct Scene {
    nodes: Vec<NodeElement>,
    edges: Vec<EdgeElement>,
    base_positions: Vec<Point>,
    pub viewport: Viewport,
    theme: Theme,
}

impl Scene {
    /// Builds the scene from a validated catalog: element model, base
    /// hierarchical layout, camera fitted to the whole graph.
    pub fn new(catalog: &Catalog, graph: &GraphIndex, width: f64, height: f64) -> Self {
        let (mut nodes, edges) = model::build_elements(catalog, graph);
        let base_positions = layout::hierarchical(graph);
        for element in &mut nodes {
            element.position = base_positions[element.node.0];
        }

        let mut scene = Self {
            nodes,
            edges,
            base_positions,
            viewport: Viewport::new(width, height),
            theme: Theme::default(),
        };
        if let Some(bbox) = scene.bounding_box_all() {
            scene.viewport = scene.viewport.fitted_to(bbox, OVERVIEW_FIT_PADDING);
        }
        scene
    }

    pub fn nodes(&self) -> &[NodeElement] {
        &self.nodes
    }

    pub fn edges(&self) -> &[EdgeElement] {
        &self.edges
    }

    pub fn node(&self, node: NodeIx) -> &NodeElement {
        &self.nodes[node.0]
    }

    pub fn node_mut(&mut self, node: NodeIx) -> &mut NodeElement {
        &mut self.nodes[node.0]
    }

    pub fn edges_mut(&mut self) -> &mut [EdgeElement] {
        &mut self.edges
    }

    /// Mutable access to every node's visual flags, for bulk clears.
    pub fn nodes_flags_mut(&mut self) -> impl Iterator<Item = &mut VisualFlags> {
        self.nodes.iter_mut().map(|n| &mut n.flags)
    }

    /// The node's position from the base hierarchical layout, independent
    /// of any isolation repositioning currently applied.
    pub fn base_position(&self, node: NodeIx) -> Point {
        self.base_positions[node.0]
    }

    /// The node's current screen-space position under the live camera.
    pub fn rendered_position(&self, node: NodeIx) -> Point {
        self.viewport.to_screen(self.nodes[node.0].position)
    }

    /// Re-applies the style table for a theme change. Positions, selection
    /// and search flags are untouched, and re-applying the active theme is
    /// a no-op.
    pub fn apply_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// The chrome colors resolved for the active theme.
    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }

    /// Marks every node whose labels, description or layer contain the
    /// query (case-insensitive) as a search match; an empty or whitespace
    /// query clears all matches. A pure overlay: dim/highlight state is
    /// never altered here.
    pub fn apply_search(&mut self, query: &str) {
        let q = query.trim().to_lowercase();
        for element in &mut self.nodes {
            element.flags.search_match = !q.is_empty()
                && (element.technical_label.to_lowercase().contains(&q)
                    || element.executive_label.to_lowercase().contains(&q)
                    || element.description.to_lowercase().contains(&q)
                    || element.layer.to_lowercase().contains(&q));
        }
    }

    pub fn clear_search(&mut self) {
        for element in &mut self.nodes {
            element.flags.search_match = false;
        }
    }

    /// Hover data for a node, anchored just above its rendered outline.
    pub fn tooltip(&self, node: NodeIx) -> Tooltip {
        let element = &self.nodes[node.0];
        let screen = self.rendered_position(node);
        let half_height = element.style.size.1 * self.viewport.zoom / 2.0;
        Tooltip {
            type_label: element.style.label,
            label: flatten_label(&element.technical_label),
            description: element.description.clone(),
            anchor: Point::new(screen.x, screen.y - half_height - 12.0),
        }
    }

    /// Bounding box of the full node set, honoring node sizes. `None` for
    /// an empty catalog.
    pub fn bounding_box_all(&self) -> Option<BoundingBox> {
        self.bounding_box(self.nodes.iter().map(|n| n.node))
    }

    /// Bounding box of a node subset. `None` if the set is empty.
    pub fn bounding_box(&self, set: impl IntoIterator<Item = NodeIx>) -> Option<BoundingBox> {
        let mut bbox: Option<BoundingBox> = None;
        for node in set {
            let element = &self.nodes[node.0];
            let (w, h) = element.style.size;
            let (x, y) = (element.position.x, element.position.y);
            let b = BoundingBox {
                min_x: x - w / 2.0,
                min_y: y - h / 2.0,
                max_x: x + w / 2.0,
                max_y: y + h / 2.0,
            };
            bbox = Some(match bbox {
                None => b,
                Some(acc) => BoundingBox {
                    min_x: acc.min_x.min(b.min_x),
                    min_y: acc.min_y.min(b.min_y),
                    max_x: acc.max_x.max(b.max_x),
                    max_y: acc.max_y.max(b.max_y),
                },
            });
        }
        bbox
    }
}

/// Technical labels carry a line break for two-line node rendering; panel
/// and tooltip text wants them on one line.
pub fn flatten_label(label: &str) -> String {
    label.replace('\n', " ")
}
