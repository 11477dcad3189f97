//! The cloth: a tearable grid of Verlet particles held by structural links.

use core::marker::PhantomData;

use crate::config::{AnchorLayout, ClothConfig};
use crate::constraint::Constraint;
use crate::error::{ClothError, ClothResult};
use crate::float::Float;
use crate::metric::{DistanceMetric, Octagonal};
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::particle::Particle;
use crate::render::{DrawOptions, Surface};
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// A cloth mesh built from a grid of Verlet particles.
///
/// Particle at (col, row) has index `row * cols + col` and starts at
/// `origin + (col, row) * rest_length`; row 0 is the bottom row. Each
/// particle is linked to its right neighbour and the neighbour above.
/// Links only ever disappear (tearing), they are never re-created.
///
/// `M` picks the distance metric used by both the solver and
/// [`Cloth::nearest_particle`].
pub struct Cloth<F: Float, M: DistanceMetric = Octagonal> {
    particles: AllocVec<Particle<F>>,
    constraints: AllocVec<Constraint<F>>,
    anchors: AllocVec<usize>,
    config: ClothConfig<F>,
    metric: PhantomData<M>,
}

impl<F: Float, M: DistanceMetric> Cloth<F, M> {
    /// Build the grid, its structural links and the initial anchors.
    ///
    /// Fails fast on grids smaller than 2x2 and on non-physical constants.
    pub fn new(config: ClothConfig<F>) -> ClothResult<Self> {
        config.validate()?;

        let cols = config.cols;
        let rows = config.rows;
        let spacing = config.rest_length;

        let mut particles = AllocVec::with_capacity(cols * rows);
        for row in 0..rows {
            for col in 0..cols {
                let offset = Vec2::new(F::from_usize(col), F::from_usize(row)).scale(spacing);
                let mut p = Particle::new(config.origin + offset, config.particle_radius);
                p.acceleration = config.gravity;
                particles.push(p);
            }
        }

        let mut constraints = AllocVec::with_capacity((cols - 1) * rows + (rows - 1) * cols);

        // Horizontal: (col, row) - (col + 1, row)
        for row in 0..rows {
            for col in 0..(cols - 1) {
                let a = row * cols + col;
                constraints.push(Constraint::new(a + 1, a, spacing));
            }
        }

        // Vertical: (col, row) - (col, row + 1)
        for row in 0..(rows - 1) {
            for col in 0..cols {
                let a = row * cols + col;
                constraints.push(Constraint::new(a + cols, a, spacing));
            }
        }

        let mut cloth = Cloth {
            particles,
            constraints,
            anchors: AllocVec::new(),
            config,
            metric: PhantomData,
        };

        for index in cloth.initial_anchors() {
            let target = cloth.particles[index].pos;
            cloth.anchor(index, target);
        }

        tracing::debug!(
            cols,
            rows,
            constraints = cloth.constraints.len(),
            anchors = cloth.anchors.len(),
            "cloth built"
        );
        Ok(cloth)
    }

    fn initial_anchors(&self) -> AllocVec<usize> {
        let top = self.rows() - 1;
        let last = self.cols() - 1;
        let mut picks = match self.config.anchors {
            AnchorLayout::None => AllocVec::new(),
            AnchorLayout::TopCorners => alloc::vec![self.index(0, top), self.index(last, top)],
            AnchorLayout::TopCornersAndCenter => alloc::vec![
                self.index(last / 2, top),
                self.index(0, top),
                self.index(last, top),
            ],
            AnchorLayout::TopRow => (0..self.cols()).map(|col| self.index(col, top)).collect(),
        };
        // On a 2-wide grid the centre is the left corner.
        picks.dedup();
        picks
    }

    /// Advance every particle one Verlet step, anchored ones included.
    ///
    /// Anchors drift here and are snapped back by [`Cloth::relax`].
    pub fn integrate(&mut self) {
        let dt = self.config.timestep;
        for p in self.particles.iter_mut() {
            p.integrate(dt);
        }
    }

    /// Run the configured number of relaxation passes, re-pinning every
    /// anchor after each pass.
    pub fn relax(&mut self) {
        self.relax_observed(&mut NoOpStepObserver);
    }

    fn relax_observed<O: StepObserver>(&mut self, observer: &mut O) {
        for pass in 0..self.config.iterations {
            let mut skipped = 0;
            for c in self.constraints.iter() {
                if !c.solve::<M>(&mut self.particles) {
                    skipped += 1;
                }
            }
            if skipped > 0 {
                tracing::trace!(pass, skipped, "skipped coincident constraints");
            }

            for &index in self.anchors.iter() {
                self.particles[index].pin();
            }
            observer.on_relax_pass(pass, skipped);
        }
    }

    /// One full frame update: integrate, then relax.
    pub fn step<O: StepObserver>(&mut self, observer: &mut O) {
        self.integrate();
        observer.on_integrate();
        self.relax_observed(observer);
        observer.on_step_complete();
    }

    /// Anchor particle `index` at `target`. Returns `true` if it was not
    /// already anchored; an existing anchor just gets the new target.
    pub fn anchor(&mut self, index: usize, target: Vec2<F>) -> bool {
        let p = &mut self.particles[index];
        p.set_anchor_target(target);
        if p.is_anchored() {
            return false;
        }
        p.set_anchored(true);
        self.anchors.push(index);
        tracing::debug!(index, x = ?target.x, y = ?target.y, "particle anchored");
        true
    }

    /// Move the anchor target of particle `index`. Takes effect at the end
    /// of the next relaxation pass if the particle is anchored.
    pub fn set_anchor_target(&mut self, index: usize, target: Vec2<F>) {
        self.particles[index].set_anchor_target(target);
    }

    /// Free an anchored particle at its anchor target with zero velocity.
    /// Returns `false` if it was not anchored.
    pub fn release(&mut self, index: usize) -> bool {
        let p = &mut self.particles[index];
        if !p.is_anchored() {
            return false;
        }
        p.set_anchored(false);
        p.settle_at_target();
        self.anchors.retain(|&a| a != index);
        tracing::debug!(index, "particle released");
        true
    }

    /// Index of the particle closest to `pos` under the cloth's metric.
    ///
    /// Ties go to the lowest index. With `max_distance`, particles at or
    /// beyond that distance are not considered.
    pub fn nearest_particle(&self, pos: Vec2<F>, max_distance: Option<F>) -> Option<usize> {
        let mut best: Option<(usize, F)> = None;
        for (i, p) in self.particles.iter().enumerate() {
            let d = M::distance(pos, p.pos);
            if let Some(limit) = max_distance {
                if !(d < limit) {
                    continue;
                }
            }
            match best {
                Some((_, best_d)) if !(d < best_d) => {}
                _ => best = Some((i, d)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Remove every link whose midpoint lies strictly inside the box of
    /// half-extent `extent` around `pos`. Returns how many were removed.
    pub fn tear_at(&mut self, pos: Vec2<F>, extent: F) -> usize {
        let before = self.constraints.len();
        let particles = &self.particles;
        self.constraints
            .retain(|c| !pos.within_box(c.midpoint(particles), extent));
        let removed = before - self.constraints.len();
        if removed > 0 {
            tracing::debug!(removed, remaining = self.constraints.len(), "cloth torn");
        }
        removed
    }

    /// Emit one line per remaining link and, optionally, one circle per
    /// particle.
    pub fn draw<S: Surface<F>>(&self, surface: &mut S, options: DrawOptions) {
        for (from, to) in self.segments() {
            surface.draw_line(from, to);
        }
        if options.particles {
            for p in self.particles.iter() {
                surface.draw_circle(p.pos, p.radius);
            }
        }
    }

    /// Current endpoint positions of every remaining link.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2<F>, Vec2<F>)> + '_ {
        let particles = &self.particles;
        self.constraints.iter().map(move |c| c.endpoints(particles))
    }

    pub fn index(&self, col: usize, row: usize) -> usize {
        row * self.config.cols + col
    }

    /// Checked version of [`Cloth::index`].
    pub fn try_index(&self, col: usize, row: usize) -> ClothResult<usize> {
        if col >= self.cols() || row >= self.rows() {
            return Err(ClothError::ParticleOutOfBounds {
                col,
                row,
                cols: self.cols(),
                rows: self.rows(),
            });
        }
        Ok(self.index(col, row))
    }

    /// Grid cell `(col, row)` of a particle index.
    pub fn coord(&self, index: usize) -> (usize, usize) {
        (index % self.config.cols, index / self.config.cols)
    }

    pub fn particle(&self, index: usize) -> &Particle<F> { &self.particles[index] }

    /// Mutable access for positions and accelerations. Anchor state is
    /// only changed through [`Cloth::anchor`] and [`Cloth::release`].
    pub fn particle_mut(&mut self, index: usize) -> &mut Particle<F> { &mut self.particles[index] }

    pub fn position_at(&self, col: usize, row: usize) -> Vec2<F> {
        self.particles[self.index(col, row)].pos
    }

    pub fn particles(&self) -> &[Particle<F>] { &self.particles }
    pub fn constraints(&self) -> &[Constraint<F>] { &self.constraints }
    /// Anchored particle indices, in the order they were anchored.
    pub fn anchors(&self) -> &[usize] { &self.anchors }
    pub fn is_anchored(&self, index: usize) -> bool { self.particles[index].is_anchored() }
    pub fn config(&self) -> &ClothConfig<F> { &self.config }
    pub fn rest_length(&self) -> F { self.config.rest_length }
    pub fn cols(&self) -> usize { self.config.cols }
    pub fn rows(&self) -> usize { self.config.rows }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn constraint_count(&self) -> usize { self.constraints.len() }
    pub fn anchor_count(&self) -> usize { self.anchors.len() }

    /// Whether a link between particles `a` and `b` (either order) remains.
    pub fn is_linked(&self, a: usize, b: usize) -> bool {
        self.constraints.iter().any(|c| c.connects(a) && c.connects(b))
    }
}
