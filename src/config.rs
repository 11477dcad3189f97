//! Construction-time configuration for the cloth and the pointer controller.

use crate::error::{ClothError, ClothResult};
use crate::float::Float;
use crate::vec::Vec2;

/// Which particles start out anchored.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnchorLayout {
    /// No initial anchors; the cloth falls freely.
    None,
    /// Top-left and top-right particles.
    TopCorners,
    /// Both top corners plus the top-centre column, `(cols - 1) / 2`.
    #[default]
    TopCornersAndCenter,
    /// Every particle of the top row.
    TopRow,
}

/// Fixed parameters of one cloth.
///
/// Defaults reproduce the classic 35x20 curtain: spacing 15, gravity
/// `(0, -2)`, timestep 0.3, six relaxation passes.
///
/// # Builder Pattern
/// ```
/// use tatter::config::{AnchorLayout, ClothConfig};
/// use tatter::vec::Vec2;
///
/// let config: ClothConfig<f32> = ClothConfig::new()
///     .with_grid(10, 8)
///     .with_rest_length(12.0)
///     .with_iterations(5)
///     .with_anchors(AnchorLayout::TopRow);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClothConfig<F: Float> {
    /// Position of grid cell (0, 0), the bottom-left particle.
    pub origin: Vec2<F>,
    /// Particles per row.
    pub cols: usize,
    /// Particles per column.
    pub rows: usize,
    /// Grid spacing and rest length of every constraint.
    pub rest_length: F,
    /// Acceleration applied to every particle.
    pub gravity: Vec2<F>,
    /// Fixed integration step.
    pub timestep: F,
    /// Relaxation passes per frame.
    pub iterations: usize,
    /// Display radius of each particle.
    pub particle_radius: F,
    pub anchors: AnchorLayout,
}

impl<F: Float> ClothConfig<F> {
    pub fn new() -> Self {
        ClothConfig {
            origin: Vec2::new(F::from_f32(45.0), F::from_f32(90.0)),
            cols: 35,
            rows: 20,
            rest_length: F::from_f32(15.0),
            gravity: Vec2::new(F::zero(), F::from_f32(-2.0)),
            timestep: F::from_f32(0.3),
            iterations: 6,
            particle_radius: F::half(),
            anchors: AnchorLayout::TopCornersAndCenter,
        }
    }

    pub fn with_origin(mut self, origin: Vec2<F>) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_grid(mut self, cols: usize, rows: usize) -> Self {
        self.cols = cols;
        self.rows = rows;
        self
    }

    pub fn with_rest_length(mut self, rest_length: F) -> Self {
        self.rest_length = rest_length;
        self
    }

    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_timestep(mut self, timestep: F) -> Self {
        self.timestep = timestep;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_particle_radius(mut self, radius: F) -> Self {
        self.particle_radius = radius;
        self
    }

    pub fn with_anchors(mut self, anchors: AnchorLayout) -> Self {
        self.anchors = anchors;
        self
    }

    /// Reject degenerate grids and non-physical constants.
    pub fn validate(&self) -> ClothResult<()> {
        // Links never outnumber two per particle.
        let addressable = self.cols.checked_mul(self.rows).and_then(|n| n.checked_mul(2));
        if self.cols < 2 || self.rows < 2 || addressable.is_none() {
            return Err(ClothError::InvalidGridDimensions { cols: self.cols, rows: self.rows });
        }
        if !self.origin.is_finite() {
            return Err(ClothError::NonFiniteVector { field: "origin" });
        }
        if !self.gravity.is_finite() {
            return Err(ClothError::NonFiniteVector { field: "gravity" });
        }
        if !self.rest_length.is_finite() || self.rest_length <= F::zero() {
            return Err(ClothError::InvalidRestLength);
        }
        if !self.timestep.is_finite() || self.timestep <= F::zero() {
            return Err(ClothError::InvalidTimestep);
        }
        if self.iterations == 0 {
            return Err(ClothError::InvalidIterations);
        }
        Ok(())
    }
}

impl<F: Float> Default for ClothConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Tuning for pointer picking and tearing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractionConfig<F: Float> {
    /// Maximum pick distance for pointer-down. `None` always picks the
    /// nearest particle, however far away.
    pub pick_radius: Option<F>,
    /// Half-extent of the tear box around the pointer. `None` uses the
    /// cloth's rest length.
    pub tear_extent: Option<F>,
    /// Also tear at the press position on pointer-down in tear mode.
    pub tear_on_press: bool,
}

impl<F: Float> InteractionConfig<F> {
    pub fn new() -> Self {
        InteractionConfig {
            pick_radius: None,
            tear_extent: None,
            tear_on_press: false,
        }
    }

    pub fn with_pick_radius(mut self, radius: F) -> Self {
        self.pick_radius = Some(radius);
        self
    }

    pub fn with_tear_extent(mut self, extent: F) -> Self {
        self.tear_extent = Some(extent);
        self
    }

    pub fn with_tear_on_press(mut self, enabled: bool) -> Self {
        self.tear_on_press = enabled;
        self
    }
}

impl<F: Float> Default for InteractionConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
