//! Drawing contract between the cloth and an external surface.

use crate::float::Float;
use crate::vec::Vec2;

/// A drawing target that accepts line and circle primitives in simulation
/// coordinates (origin bottom-left, y-up). Any axis flip belongs to the
/// implementor.
pub trait Surface<F: Float> {
    fn draw_line(&mut self, from: Vec2<F>, to: Vec2<F>);

    fn draw_circle(&mut self, center: Vec2<F>, radius: F);
}

/// What `Cloth::draw` emits.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawOptions {
    /// Also draw one circle per particle at its display radius.
    pub particles: bool,
}

impl DrawOptions {
    /// Constraint lines and particle circles.
    pub fn with_particles() -> Self {
        DrawOptions { particles: true }
    }
}
