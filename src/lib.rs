//! # Keiro - Dependency-Graph Isolation and Flow Animation Core
//!
//! **Keiro** is the interaction core of a pipeline dependency map: it turns
//! a static catalog of typed nodes and directed edges into a laid-out,
//! themeable scene, computes the full upstream/downstream closure of any
//! selected node, re-arranges that path onto a single animated line, and
//! drives a looping particle stream along the highlighted edges.
//!
//! The crate renders to *data*: positions, visual flags, resolved colors,
//! particle coordinates. Drawing, input capture and the surrounding page
//! chrome belong to the host.
//!
//! ## Core Workflow
//!
//! 1.  **Load the catalog**: author nodes and edges (or parse them from
//!     JSON) and validate them with [`Catalog::new`](catalog::Catalog::new).
//!     Referential integrity is checked once, up front; a dangling edge
//!     endpoint is a fatal authoring defect, not a runtime condition.
//! 2.  **Build the controller**: [`Controller::new`](controller::Controller::new)
//!     assembles the graph index, the hierarchical layout and the camera.
//! 3.  **Feed it input**: forward node clicks, background clicks, search
//!     keystrokes, legend clicks and the theme signal.
//! 4.  **Tick and draw**: call [`tick`](controller::Controller::tick) every
//!     frame, then read the scene's elements and the particle positions.
//!
//! ## Quick Start
//!
//! ```rust
//! use keiro::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = keiro::data::demo_catalog()?;
//!     let mut controller = Controller::new(catalog, 1280.0, 720.0);
//!
//!     // A click on a node isolates its full ancestor/descendant path.
//!     controller.select_node("pl_load_brz")?;
//!
//!     // Drive the reposition -> fit -> flow transition to completion.
//!     controller.settle_animations();
//!
//!     let detail = controller.detail().ok_or("no selection")?;
//!     println!(
//!         "{}: {} upstream, {} downstream, {} nodes in path",
//!         detail.technical_label,
//!         detail.upstream_count,
//!         detail.downstream_count,
//!         detail.path.len()
//!     );
//!
//!     // Particles loop along the highlighted edges until restored.
//!     controller.tick(1.0 / 60.0);
//!     controller.restore();
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod controller;
pub mod data;
pub mod detail;
pub mod error;
pub mod flow;
pub mod graph;
pub mod prelude;
pub mod scene;
