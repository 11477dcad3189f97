//! Planar vector type used for positions, accelerations and pointer input.

use crate::float::Float;
use core::ops::{Add, Sub};

/// 2D vector in simulation space (origin bottom-left, y-up).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Zero vector.
    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    /// Scale both components by a scalar.
    pub fn scale(self, s: F) -> Self { Vec2 { x: self.x * s, y: self.y * s } }

    pub fn dot(self, other: Self) -> F { self.x * other.x + self.y * other.y }

    /// Component-wise absolute value.
    pub fn abs(self) -> Self { Vec2 { x: self.x.abs(), y: self.y.abs() } }

    /// Exact Euclidean length.
    pub fn length(self) -> F { self.dot(self).sqrt() }

    /// Point halfway between `self` and `other`.
    pub fn midpoint(self, other: Self) -> Self {
        (self + other).scale(F::half())
    }

    /// True when `other` lies strictly inside the axis-aligned box of
    /// half-extent `extent` centred on `self`.
    pub fn within_box(self, other: Self, extent: F) -> bool {
        let d = (self - other).abs();
        d.x < extent && d.y < extent
    }

    pub fn is_finite(self) -> bool { self.x.is_finite() && self.y.is_finite() }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}
