//! Distance metrics shared by the solver and nearest-particle picking.
//!
//! A cloth is parameterised by exactly one metric type, so the solver's
//! length computation and the pointer pick can never disagree.

use crate::float::Float;
use crate::vec::Vec2;

/// Length of a 2D offset.
pub trait DistanceMetric {
    /// Length of `delta` under this metric.
    fn length<F: Float>(delta: Vec2<F>) -> F;

    /// Distance between two points.
    fn distance<F: Float>(a: Vec2<F>, b: Vec2<F>) -> F {
        Self::length(b - a)
    }
}

/// Exact Euclidean norm, `sqrt(dx^2 + dy^2)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Euclidean;

impl DistanceMetric for Euclidean {
    fn length<F: Float>(delta: Vec2<F>) -> F {
        delta.length()
    }
}

/// Square-root-free octagonal approximation of the Euclidean norm.
///
/// `(1007/1024)·max + (441/1024)·min`, minus `(40/1024)·max` whenever
/// `max < 16·min`. Relative error stays within about ±4%.
///
/// The correction term departs from the classic two-term
/// `0.984·max + 0.431·min` form, which overshoots by up to about 7%.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Octagonal;

impl DistanceMetric for Octagonal {
    fn length<F: Float>(delta: Vec2<F>) -> F {
        let dx = delta.x.abs();
        let dy = delta.y.abs();
        let min = dx.min(dy);
        let max = dx.max(dy);

        let scale = F::from_f32(1.0 / 1024.0);
        let mut approx = (max * F::from_f32(1007.0) + min * F::from_f32(441.0)) * scale;
        if max < min * F::from_f32(16.0) {
            approx = approx - max * F::from_f32(40.0) * scale;
        }
        approx
    }
}
