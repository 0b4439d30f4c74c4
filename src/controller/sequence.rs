use crate::catalog::NodeType;
use crate::graph::{EdgeIx, NodeIx};
use crate::scene::{Point, Viewport};

/// Duration of the node repositioning tween, in seconds.
pub const REPOSITION_DURATION: f64 = 0.6;
/// Duration of the camera fit tween, in seconds.
pub const FIT_DURATION: f64 = 0.4;

/// The standard ease-in-out cubic curve over `t ∈ [0,1]`.
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

pub(super) fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// One node's animated move.
#[derive(Debug, Clone)]
pub(super) struct NodeTween {
    pub node: NodeIx,
    pub from: Point,
    pub to: Point,
}

impl NodeTween {
    pub fn at(&self, eased: f64) -> Point {
        Point::new(
            lerp(self.from.x, self.to.x, eased),
            lerp(self.from.y, self.to.y, eased),
        )
    }
}

/// What happens once the whole sequence has settled.
#[derive(Debug, Clone)]
pub(super) enum Settled {
    /// Start the particle system over these edges (isolation sequences).
    StartFlow(Vec<EdgeIx>),
    /// Apply a type highlight without repositioning (restore-then-highlight).
    HighlightType(NodeType),
    /// Plain restore; nothing further.
    Nothing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Stage {
    Reposition,
    Fit,
}

/// An in-flight reposition → fit transition with its chained follow-up.
///
/// Strictly sequenced: the camera fit is computed only after every node
/// tween has settled, and the follow-up runs only after the fit has
/// settled. There is no cancellation token; the controller owning exactly
/// one `Sequence` *is* the token; replacing it drops the old sequence and
/// its unreached stages with it.
#[derive(Debug, Clone)]
pub(super) struct Sequence {
    pub stage: Stage,
    pub tweens: Vec<NodeTween>,
    pub elapsed: f64,
    /// Nodes the camera frames once repositioning settles.
    pub fit_nodes: Vec<NodeIx>,
    pub fit_padding: f64,
    pub fit_from: Option<Viewport>,
    pub fit_to: Option<Viewport>,
    pub on_settled: Settled,
}

impl Sequence {
    pub fn new(
        tweens: Vec<NodeTween>,
        fit_nodes: Vec<NodeIx>,
        fit_padding: f64,
        on_settled: Settled,
    ) -> Self {
        Self {
            stage: Stage::Reposition,
            tweens,
            elapsed: 0.0,
            fit_nodes,
            fit_padding,
            fit_from: None,
            fit_to: None,
            on_settled,
        }
    }
}
