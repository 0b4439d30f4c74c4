use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of pipeline-entity kinds. Used purely for styling and
/// grouping; the traversal layer never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Source,
    Connection,
    #[serde(rename = "datasource")]
    DataSource,
    #[serde(rename = "orch")]
    Orchestrator,
    Command,
    Copy,
    Lakehouse,
    Notebook,
    Config,
    Tooling,
}

impl NodeType {
    /// Every variant, in legend order.
    pub const ALL: [NodeType; 10] = [
        NodeType::Source,
        NodeType::Connection,
        NodeType::DataSource,
        NodeType::Orchestrator,
        NodeType::Command,
        NodeType::Copy,
        NodeType::Lakehouse,
        NodeType::Notebook,
        NodeType::Config,
        NodeType::Tooling,
    ];

    /// The type's fixed visual attributes. An exhaustive match so a new
    /// variant cannot ship without a style.
    pub fn style(self) -> NodeStyle {
        match self {
            NodeType::Source => NodeStyle {
                label: "SQL Source",
                color: "#3B82F6",
                shape: NodeShape::CutRectangle,
                size: (155.0, 62.0),
            },
            NodeType::Connection => NodeStyle {
                label: "Connection",
                color: "#8B5CF6",
                shape: NodeShape::Diamond,
                size: (145.0, 70.0),
            },
            NodeType::DataSource => NodeStyle {
                label: "Data Source",
                color: "#F59E0B",
                shape: NodeShape::RoundHexagon,
                size: (155.0, 64.0),
            },
            NodeType::Orchestrator => NodeStyle {
                label: "Orchestrator Pipeline",
                color: "#EF4444",
                shape: NodeShape::Octagon,
                size: (175.0, 72.0),
            },
            NodeType::Command => NodeStyle {
                label: "Command Pipeline",
                color: "#F97316",
                shape: NodeShape::RoundPentagon,
                size: (150.0, 64.0),
            },
            NodeType::Copy => NodeStyle {
                label: "Copy Pipeline",
                color: "#06B6D4",
                shape: NodeShape::RoundRectangle,
                size: (155.0, 60.0),
            },
            NodeType::Lakehouse => NodeStyle {
                label: "Lakehouse",
                color: "#10B981",
                shape: NodeShape::Barrel,
                size: (180.0, 78.0),
            },
            NodeType::Notebook => NodeStyle {
                label: "Notebook",
                color: "#A855F7",
                shape: NodeShape::RoundDiamond,
                size: (165.0, 68.0),
            },
            NodeType::Config => NodeStyle {
                label: "Config / Variable Lib",
                color: "#64748B",
                shape: NodeShape::Ellipse,
                size: (135.0, 56.0),
            },
            NodeType::Tooling => NodeStyle {
                label: "Tooling Pipeline",
                color: "#22C55E",
                shape: NodeShape::Tag,
                size: (140.0, 58.0),
            },
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.style().label)
    }
}

/// Node outline shapes, mirroring the closed shape vocabulary of the render
/// surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeShape {
    CutRectangle,
    Diamond,
    RoundHexagon,
    Octagon,
    RoundPentagon,
    RoundRectangle,
    Barrel,
    RoundDiamond,
    Ellipse,
    Tag,
}

/// Type-derived visual attributes: legend label, base fill color, outline
/// shape and the node's base width/height in model units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeStyle {
    pub label: &'static str,
    pub color: &'static str,
    pub shape: NodeShape,
    pub size: (f64, f64),
}
