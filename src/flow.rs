//! The flow-particle session: a purely cosmetic indication of direction
//! along a highlighted edge set.
//!
//! A session is an owned object with explicit start/stop; the controller
//! holds at most one, so dropping/replacing it is both the teardown and the
//! single-session guarantee. Particle positions are recomputed from the
//! edges' current rendered endpoints every tick; nothing is cached, so
//! they track camera pans, zooms and re-layouts for free.

use crate::graph::EdgeIx;
use crate::scene::{Point, Scene};
use rand::Rng;

/// Particles spawned per highlighted edge, offset evenly across `[0,1)`.
pub const PARTICLES_PER_EDGE: usize = 3;
/// Base per-tick progress advance.
pub const BASE_SPEED: f64 = 0.004;
/// Upper bound of the per-particle random speed jitter.
pub const SPEED_JITTER: f64 = 0.002;

/// One marker traveling along an edge. `progress` stays in `[0,1)` and
/// wraps on overflow; the stream loops until the session is dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowParticle {
    pub edge: EdgeIx,
    pub progress: f64,
    pub speed: f64,
}

impl FlowParticle {
    /// Advances progress by one tick, wrapping modulo 1.
    pub fn advance(&mut self) {
        self.progress += self.speed;
        if self.progress >= 1.0 {
            self.progress -= 1.0;
        }
    }
}

/// A live particle system over a fixed edge set.
#[derive(Debug, Clone)]
pub struct FlowAnimation {
    particles: Vec<FlowParticle>,
}

impl FlowAnimation {
    /// Spawns [`PARTICLES_PER_EDGE`] particles per edge at progress offsets
    /// 0, 1/3, 2/3 with independent random speed jitter, so the stream
    /// looks naturally distributed rather than synchronized. The caller
    /// supplies the RNG; tests pass a seeded one.
    pub fn start(edges: &[EdgeIx], rng: &mut impl Rng) -> Self {
        let mut particles = Vec::with_capacity(edges.len() * PARTICLES_PER_EDGE);
        for &edge in edges {
            for i in 0..PARTICLES_PER_EDGE {
                particles.push(FlowParticle {
                    edge,
                    progress: i as f64 / PARTICLES_PER_EDGE as f64,
                    speed: BASE_SPEED + rng.random_range(0.0..SPEED_JITTER),
                });
            }
        }
        Self { particles }
    }

    pub fn particles(&self) -> &[FlowParticle] {
        &self.particles
    }

    /// One animation frame: every particle advances and wraps.
    pub fn tick(&mut self) {
        for particle in &mut self.particles {
            particle.advance();
        }
    }

    /// Current screen-space particle positions, interpolated between each
    /// edge's live rendered endpoints.
    pub fn positions(&self, scene: &Scene) -> Vec<Point> {
        self.particles
            .iter()
            .map(|particle| {
                let edge = &scene.edges()[particle.edge.0];
                let src = scene.rendered_position(edge.source);
                let tgt = scene.rendered_position(edge.target);
                Point::new(
                    src.x + (tgt.x - src.x) * particle.progress,
                    src.y + (tgt.y - src.y) * particle.progress,
                )
            })
            .collect()
    }
}
