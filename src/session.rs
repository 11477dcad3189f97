//! One simulation session: a cloth, its pointer controller, and the frame
//! driver that ties them to a drawing surface.

use crate::cloth::Cloth;
use crate::config::{ClothConfig, InteractionConfig};
use crate::error::ClothResult;
use crate::float::Float;
use crate::interaction::{InteractionController, InteractionState};
use crate::metric::{DistanceMetric, Octagonal};
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::render::{DrawOptions, Surface};
use crate::vec::Vec2;

/// Owns the cloth and the controller for the lifetime of one session.
///
/// Every method is one discrete operation. Hosts that deliver pointer
/// events on another thread should put the whole session behind a single
/// lock and hold it for one event or one [`ClothSession::frame`].
pub struct ClothSession<F: Float, M: DistanceMetric = Octagonal> {
    cloth: Cloth<F, M>,
    controller: InteractionController<F>,
    draw_options: DrawOptions,
}

impl<F: Float, M: DistanceMetric> ClothSession<F, M> {
    pub fn new(cloth: ClothConfig<F>, interaction: InteractionConfig<F>) -> ClothResult<Self> {
        Ok(ClothSession {
            cloth: Cloth::new(cloth)?,
            controller: InteractionController::new(interaction),
            draw_options: DrawOptions::default(),
        })
    }

    pub fn with_draw_options(mut self, options: DrawOptions) -> Self {
        self.draw_options = options;
        self
    }

    pub fn set_draw_options(&mut self, options: DrawOptions) {
        self.draw_options = options;
    }

    /// Integrate, relax, then draw onto `surface`.
    pub fn frame<S: Surface<F>>(&mut self, surface: &mut S) {
        self.frame_observed(surface, &mut NoOpStepObserver);
    }

    pub fn frame_observed<S: Surface<F>, O: StepObserver>(
        &mut self,
        surface: &mut S,
        observer: &mut O,
    ) {
        self.cloth.step(observer);
        self.cloth.draw(surface, self.draw_options);
    }

    pub fn pointer_down(&mut self, pos: Vec2<F>) -> Option<usize> {
        self.controller.on_pointer_down(&mut self.cloth, pos)
    }

    pub fn pointer_move(&mut self, pos: Vec2<F>) -> usize {
        self.controller.on_pointer_move(&mut self.cloth, pos)
    }

    pub fn pointer_up(&mut self) {
        self.controller.on_pointer_up(&mut self.cloth);
    }

    pub fn set_tear_mode(&mut self, enabled: bool) {
        self.controller.set_tear_mode(enabled);
    }

    pub fn set_anchor_intent(&mut self, enabled: bool) {
        self.controller.set_anchor_intent(enabled);
    }

    pub fn state(&self) -> InteractionState { self.controller.state() }
    pub fn cloth(&self) -> &Cloth<F, M> { &self.cloth }
    pub fn cloth_mut(&mut self) -> &mut Cloth<F, M> { &mut self.cloth }
    pub fn controller(&self) -> &InteractionController<F> { &self.controller }
}
