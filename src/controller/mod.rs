//! The interaction core: the Overview/Isolated state machine, path
//! isolation, the staged reposition → fit → flow transition, type
//! highlighting and the outbound read-model events.
//!
//! All work happens on the caller's thread in response to an input call or
//! a [`Controller::tick`]. The controller is the sole writer of
//! [`SelectionState`] and drives every visual-flag mutation on the scene.

pub mod sequence;

pub use sequence::{FIT_DURATION, REPOSITION_DURATION, ease_in_out_cubic};

use crate::catalog::{Catalog, NodeType};
use crate::detail::{AuditRow, GraphStats, LabelMode, NodeDetail, build_audit_rows, build_detail};
use crate::error::QueryError;
use crate::flow::FlowAnimation;
use crate::graph::{GraphIndex, NodeIx};
use crate::scene::{
    ISOLATE_FIT_PADDING, OVERVIEW_FIT_PADDING, Point, Scene, Theme, ThemeSource, layout,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sequence::{NodeTween, Sequence, Settled, Stage};

/// The two interaction states of the graph view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Overview,
    Isolated(NodeIx),
}

/// Process-local UI session state. Single-writer: only user-input calls on
/// the controller mutate it.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    pub selected: Option<NodeIx>,
    pub is_isolated: bool,
    pub search_query: String,
    pub label_mode: LabelMode,
    pub highlighted_type: Option<NodeType>,
}

/// Notifications for the surrounding chrome, drained via
/// [`Controller::poll_events`]. Search changes emit nothing; matches are a
/// pure render concern.
#[derive(Debug, Clone, PartialEq)]
pub enum OutboundEvent {
    SelectionChanged(Option<NodeDetail>),
    StatsChanged(GraphStats),
}

/// Owns the catalog, graph index, scene, selection state and any live
/// transition or particle session.
pub struct Controller {
    catalog: Catalog,
    graph: GraphIndex,
    scene: Scene,
    state: SelectionState,
    sequence: Option<Sequence>,
    flow: Option<FlowAnimation>,
    events: Vec<OutboundEvent>,
    rng: StdRng,
}

impl Controller {
    /// Builds the full stack from a validated catalog and the host's
    /// viewport size.
    pub fn new(catalog: Catalog, width: f64, height: f64) -> Self {
        Self::with_rng_seed(catalog, width, height, rand::random())
    }

    /// Like [`Controller::new`] with a fixed RNG seed, so particle jitter
    /// is reproducible.
    pub fn with_rng_seed(catalog: Catalog, width: f64, height: f64, seed: u64) -> Self {
        let graph = GraphIndex::build(&catalog);
        let scene = Scene::new(&catalog, &graph, width, height);
        Self {
            catalog,
            graph,
            scene,
            state: SelectionState::default(),
            sequence: None,
            flow: None,
            events: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn graph(&self) -> &GraphIndex {
        &self.graph
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn view_state(&self) -> ViewState {
        match self.state.selected {
            Some(node) if self.state.is_isolated => ViewState::Isolated(node),
            _ => ViewState::Overview,
        }
    }

    /// Whether a reposition/fit transition is still in flight.
    pub fn is_animating(&self) -> bool {
        self.sequence.is_some()
    }

    /// The live particle session, if one is running.
    pub fn flow(&self) -> Option<&FlowAnimation> {
        self.flow.as_ref()
    }

    /// Drains pending outbound events.
    pub fn poll_events(&mut self) -> Vec<OutboundEvent> {
        std::mem::take(&mut self.events)
    }

    // ------------------------------------------------------------------
    // Inputs
    // ------------------------------------------------------------------

    /// Click on a node: enter (or re-enter) the isolated view for it.
    pub fn select_node(&mut self, id: &str) -> Result<(), QueryError> {
        let node = self.graph.resolve(id)?;
        self.select(node);
        Ok(())
    }

    /// Click on empty background: a no-op in the overview, a restore while
    /// isolated or type-highlighted.
    pub fn background_click(&mut self) {
        if self.state.is_isolated || self.state.highlighted_type.is_some() {
            self.restore();
        }
    }

    /// Restores the full overview: all visual state cleared, flow stopped,
    /// base layout re-run with an animated transition. Idempotent: a
    /// second call just replays the stable layout.
    pub fn restore(&mut self) {
        self.restore_then(Settled::Nothing);
        let stats = self.stats();
        self.events.push(OutboundEvent::SelectionChanged(None));
        self.events.push(OutboundEvent::StatsChanged(stats));
    }

    /// Legend click: highlight every node of `node_type` (and its incident
    /// edges) after a restore settles. Clicking the active type again
    /// toggles back to the plain overview.
    pub fn highlight_type(&mut self, node_type: NodeType) {
        if self.state.highlighted_type == Some(node_type) {
            self.restore();
            return;
        }
        self.restore_then(Settled::HighlightType(node_type));
        self.events.push(OutboundEvent::SelectionChanged(None));
    }

    /// Updates the search query and re-marks matches. Overlay-only: dim and
    /// highlight flags are untouched, and no outbound event is emitted.
    pub fn set_search(&mut self, query: &str) {
        self.state.search_query = query.to_string();
        self.scene.apply_search(query);
    }

    pub fn set_label_mode(&mut self, mode: LabelMode) {
        if self.state.label_mode == mode {
            return;
        }
        self.state.label_mode = mode;
        // The detail panel re-renders its labels in the new mode.
        let detail = self.detail();
        self.events.push(OutboundEvent::SelectionChanged(detail));
    }

    pub fn toggle_label_mode(&mut self) {
        self.set_label_mode(self.state.label_mode.toggled());
    }

    /// Polls the external theme signal and restyles if it changed.
    /// Re-applying the active theme produces no visual diff.
    pub fn observe_theme(&mut self, source: &dyn ThemeSource) {
        self.scene.apply_theme(Theme::from_dark(source.is_dark()));
    }

    // ------------------------------------------------------------------
    // Read models
    // ------------------------------------------------------------------

    /// The selected node's detail record, if any.
    pub fn detail(&self) -> Option<NodeDetail> {
        self.state
            .selected
            .map(|node| build_detail(&self.scene, &self.graph, node, self.state.label_mode))
    }

    /// Detail record for an arbitrary node id, independent of selection.
    pub fn detail_for(&self, id: &str) -> Result<NodeDetail, QueryError> {
        let node = self.graph.resolve(id)?;
        Ok(build_detail(
            &self.scene,
            &self.graph,
            node,
            self.state.label_mode,
        ))
    }

    /// Live statistics for the status strip.
    pub fn stats(&self) -> GraphStats {
        let in_path = if let Some(node) = self.state.selected.filter(|_| self.state.is_isolated) {
            self.graph.connected_set(node).len()
        } else if let Some(node_type) = self.state.highlighted_type {
            self.scene
                .nodes()
                .iter()
                .filter(|n| n.node_type == node_type)
                .count()
        } else {
            0
        };
        GraphStats {
            nodes: self.graph.node_count(),
            edges: self.graph.edge_count(),
            in_path,
        }
    }

    /// The audit-matrix rows, one per catalog node.
    pub fn audit_rows(&self) -> Vec<AuditRow> {
        build_audit_rows(&self.scene, &self.graph, self.state.label_mode)
    }

    // ------------------------------------------------------------------
    // Frame clock
    // ------------------------------------------------------------------

    /// Advances any in-flight transition and the particle system by `dt`
    /// seconds. Safe to call with no animation running.
    pub fn tick(&mut self, dt: f64) {
        if let Some(mut seq) = self.sequence.take() {
            seq.elapsed += dt;
            match seq.stage {
                Stage::Reposition => {
                    let t = (seq.elapsed / REPOSITION_DURATION).min(1.0);
                    let eased = ease_in_out_cubic(t);
                    for tween in &seq.tweens {
                        self.scene.node_mut(tween.node).position = tween.at(eased);
                    }
                    if t >= 1.0 {
                        seq.stage = Stage::Fit;
                        seq.elapsed = 0.0;
                        seq.fit_from = Some(self.scene.viewport);
                        seq.fit_to = self
                            .scene
                            .bounding_box(seq.fit_nodes.iter().copied())
                            .map(|bbox| self.scene.viewport.fitted_to(bbox, seq.fit_padding));
                    }
                    self.sequence = Some(seq);
                }
                Stage::Fit => match (seq.fit_from, seq.fit_to) {
                    (Some(from), Some(to)) => {
                        let t = (seq.elapsed / FIT_DURATION).min(1.0);
                        let eased = ease_in_out_cubic(t);
                        self.scene.viewport.zoom = sequence::lerp(from.zoom, to.zoom, eased);
                        self.scene.viewport.pan = Point::new(
                            sequence::lerp(from.pan.x, to.pan.x, eased),
                            sequence::lerp(from.pan.y, to.pan.y, eased),
                        );
                        if t >= 1.0 {
                            // A session spawned here renders its spawn frame
                            // before it first advances.
                            self.settle(seq.on_settled);
                            return;
                        }
                        self.sequence = Some(seq);
                    }
                    // Nothing to frame (empty set); settle immediately.
                    _ => {
                        self.settle(seq.on_settled);
                        return;
                    }
                },
            }
        }

        if let Some(flow) = &mut self.flow {
            flow.tick();
        }
    }

    /// Runs the controller until all chained transitions have settled.
    /// Convenience for hosts (and tests) that want the final state without
    /// frame-by-frame stepping.
    pub fn settle_animations(&mut self) {
        while self.sequence.is_some() {
            self.tick(1.0 / 60.0);
        }
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn select(&mut self, node: NodeIx) {
        // A newer selection preempts everything in flight: pending stages
        // are dropped with the old sequence and the particle session stops
        // before a new one can start.
        self.sequence = None;
        self.flow = None;

        for element in self.scene.nodes_flags_mut() {
            element.clear_selection();
        }
        for edge in self.scene.edges_mut() {
            edge.flags.clear_selection();
        }

        let connected = self.graph.connected_set(node);
        let path = self.graph.ordered_path(node);
        let flow_edges = self.graph.edges_within(&connected);

        for i in 0..self.scene.nodes().len() {
            let member = connected.contains(&NodeIx(i));
            let flags = &mut self.scene.node_mut(NodeIx(i)).flags;
            flags.dimmed = !member;
            flags.highlighted = member;
            flags.isolated = member;
        }
        for edge in self.scene.edges_mut() {
            edge.flags.dimmed = true;
        }
        for &edge in &flow_edges {
            let flags = &mut self.scene.edges_mut()[edge.0].flags;
            flags.dimmed = false;
            flags.highlighted = true;
        }
        {
            let flags = &mut self.scene.node_mut(node).flags;
            flags.selected = true;
            flags.highlighted = false;
        }

        let targets = layout::isolation_line(&path, self.graph.node_count());
        let tweens = path
            .iter()
            .filter_map(|&step| {
                targets[step.0].map(|to| NodeTween {
                    node: step,
                    from: self.scene.node(step).position,
                    to,
                })
            })
            .collect();

        self.sequence = Some(Sequence::new(
            tweens,
            path,
            ISOLATE_FIT_PADDING,
            Settled::StartFlow(flow_edges),
        ));

        self.state.selected = Some(node);
        self.state.is_isolated = true;
        self.state.highlighted_type = None;

        let detail = self.detail();
        let stats = self.stats();
        self.events.push(OutboundEvent::SelectionChanged(detail));
        self.events.push(OutboundEvent::StatsChanged(stats));
    }

    fn restore_then(&mut self, on_settled: Settled) {
        self.sequence = None;
        self.flow = None;

        for element in self.scene.nodes_flags_mut() {
            element.clear_all();
        }
        for edge in self.scene.edges_mut() {
            edge.flags.clear_all();
        }

        let tweens = self
            .scene
            .nodes()
            .iter()
            .map(|element| NodeTween {
                node: element.node,
                from: element.position,
                to: self.scene.base_position(element.node),
            })
            .collect();
        let all_nodes: Vec<NodeIx> = self.scene.nodes().iter().map(|n| n.node).collect();

        self.sequence = Some(Sequence::new(
            tweens,
            all_nodes,
            OVERVIEW_FIT_PADDING,
            on_settled,
        ));

        self.state.selected = None;
        self.state.is_isolated = false;
        self.state.highlighted_type = None;
    }

    fn settle(&mut self, outcome: Settled) {
        self.sequence = None;
        match outcome {
            Settled::StartFlow(edges) => {
                // Replaces any earlier session; at most one is ever live.
                self.flow = Some(FlowAnimation::start(&edges, &mut self.rng));
            }
            Settled::HighlightType(node_type) => self.apply_type_highlight(node_type),
            Settled::Nothing => {}
        }
    }

    fn apply_type_highlight(&mut self, node_type: NodeType) {
        let matched: Vec<NodeIx> = self
            .scene
            .nodes()
            .iter()
            .filter(|n| n.node_type == node_type)
            .map(|n| n.node)
            .collect();

        for element in self.scene.nodes_flags_mut() {
            element.dimmed = true;
        }
        for edge in self.scene.edges_mut() {
            edge.flags.dimmed = true;
        }
        for &node in &matched {
            let flags = &mut self.scene.node_mut(node).flags;
            flags.dimmed = false;
            flags.highlighted = true;
            for edge in self.graph.incident_edges(node) {
                self.scene.edges_mut()[edge.0].flags.dimmed = false;
            }
        }

        self.state.highlighted_type = Some(node_type);
        let stats = self.stats();
        self.events.push(OutboundEvent::StatsChanged(stats));
    }
}
