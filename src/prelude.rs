//! Prelude module for convenient imports
//!
//! Re-exports the types most hosts need: the catalog and its closed type
//! set, the controller with its state machine and events, and the read
//! models for the detail panel and status strip.

// Catalog and styling
pub use crate::catalog::{
    Catalog, EdgeDefinition, EdgeStyle, NodeDefinition, NodeShape, NodeStyle, NodeType,
};

// Interaction core
pub use crate::controller::{Controller, OutboundEvent, SelectionState, ViewState};

// Graph queries
pub use crate::graph::{EdgeIx, GraphIndex, NodeIx};

// Scene and theming
pub use crate::scene::{Point, Scene, Theme, ThemeSource, Tooltip, Viewport, VisualFlags};

// Read models
pub use crate::detail::{AuditRow, GraphStats, LabelMode, NodeDetail, PathEntry};

// Flow particles
pub use crate::flow::{FlowAnimation, FlowParticle};

// Error types
pub use crate::error::{CatalogError, QueryError};
