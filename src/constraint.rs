//! Structural distance links between cloth particles.

use crate::float::Float;
use crate::metric::DistanceMetric;
use crate::particle::Particle;
use crate::vec::Vec2;

/// Lengths below this are treated as coincident endpoints and left alone.
pub const MIN_CONSTRAINT_LENGTH: f32 = 1e-6;

/// A distance constraint between particles `a` and `b`.
///
/// Endpoints are indices into the owning cloth's particle storage. The
/// relation is symmetric; the order only fixes the sign of the correction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Constraint<F: Float> {
    pub a: usize,
    pub b: usize,
    pub rest_length: F,
}

impl<F: Float> Constraint<F> {
    pub fn new(a: usize, b: usize, rest_length: F) -> Self {
        Constraint { a, b, rest_length }
    }

    /// Move both endpoints halfway toward the rest length.
    ///
    /// Returns `false` without touching either particle when the endpoints
    /// coincide, since the correction direction is undefined there.
    pub fn solve<M: DistanceMetric>(&self, particles: &mut [Particle<F>]) -> bool {
        let delta = particles[self.b].pos - particles[self.a].pos;
        let len = M::length(delta);
        if len.is_near_zero(F::from_f32(MIN_CONSTRAINT_LENGTH)) {
            return false;
        }

        let diff = (len - self.rest_length) / len;
        let correction = delta.scale(F::half() * diff);

        particles[self.a].pos = particles[self.a].pos + correction;
        particles[self.b].pos = particles[self.b].pos - correction;
        true
    }

    /// Midpoint of the two endpoints' current positions.
    pub fn midpoint(&self, particles: &[Particle<F>]) -> Vec2<F> {
        particles[self.a].pos.midpoint(particles[self.b].pos)
    }

    /// Current endpoint positions, `(a, b)`.
    pub fn endpoints(&self, particles: &[Particle<F>]) -> (Vec2<F>, Vec2<F>) {
        (particles[self.a].pos, particles[self.b].pos)
    }

    pub fn connects(&self, index: usize) -> bool {
        self.a == index || self.b == index
    }
}
