//! Verlet point masses with an optional anchor target.

use crate::float::Float;
use crate::vec::Vec2;

/// A point mass integrated with position Verlet.
///
/// Velocity is implicit: `pos - prev_pos`. A particle that is anchored still
/// integrates like any other; the solver snaps it back to `anchor_target`
/// after every relaxation pass. Anchor state is owned by the cloth so the
/// anchor set and the flags cannot drift apart.
#[derive(Clone, Debug)]
pub struct Particle<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub acceleration: Vec2<F>,
    /// Display-only size, ignored by the physics.
    pub radius: F,
    anchored: bool,
    anchor_target: Vec2<F>,
}

impl<F: Float> Particle<F> {
    /// A free particle at rest with zero acceleration.
    pub fn new(pos: Vec2<F>, radius: F) -> Self {
        Particle {
            pos,
            prev_pos: pos,
            acceleration: Vec2::zero(),
            radius,
            anchored: false,
            anchor_target: pos,
        }
    }

    /// Advance one fixed step: `pos += (pos - prev_pos) + a * dt^2`.
    pub fn integrate(&mut self, dt: F) {
        let next = self.pos + self.velocity_raw() + self.acceleration.scale(dt * dt);
        self.prev_pos = self.pos;
        self.pos = next;
    }

    /// Displacement over the last step.
    pub fn velocity_raw(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }

    pub fn is_anchored(&self) -> bool {
        self.anchored
    }

    /// Where the solver pins this particle while it is anchored.
    pub fn anchor_target(&self) -> Vec2<F> {
        self.anchor_target
    }

    pub(crate) fn set_anchor_target(&mut self, target: Vec2<F>) {
        self.anchor_target = target;
    }

    pub(crate) fn set_anchored(&mut self, anchored: bool) {
        self.anchored = anchored;
    }

    /// Snap to the anchor target.
    pub(crate) fn pin(&mut self) {
        self.pos = self.anchor_target;
    }

    /// Drop at the anchor target with no carried velocity.
    pub(crate) fn settle_at_target(&mut self) {
        self.pos = self.anchor_target;
        self.prev_pos = self.anchor_target;
    }
}
