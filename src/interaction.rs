//! Pointer-driven anchoring, dragging and tearing.
//!
//! The controller turns three pointer entry points plus two externally
//! asserted modes (tear, anchor-intent) into edits of a [`Cloth`]:
//!
//! - press picks the nearest particle, unless tear mode is on;
//! - moving while pressed drags the picked particle, anchoring it on the
//!   first move, or tears links under the pointer when nothing was picked;
//! - release frees the dragged particle unless anchor-intent was asserted
//!   during the drag, then clears every mode.
//!
//! Modes never outlive one press/release cycle.

use crate::cloth::Cloth;
use crate::config::InteractionConfig;
use crate::float::Float;
use crate::metric::DistanceMetric;
use crate::vec::Vec2;

/// What the current press is doing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InteractionState {
    Idle,
    DraggingParticle,
    Tearing,
}

/// Per-session pointer state. At most one particle is dragged at a time.
#[derive(Clone, Debug)]
pub struct InteractionController<F: Float> {
    config: InteractionConfig<F>,
    dragging: bool,
    tear_mode: bool,
    anchor_intent: bool,
    active: Option<usize>,
}

impl<F: Float> InteractionController<F> {
    pub fn new(config: InteractionConfig<F>) -> Self {
        InteractionController {
            config,
            dragging: false,
            tear_mode: false,
            anchor_intent: false,
            active: None,
        }
    }

    /// Request tearing for the next press (or the current one, if nothing
    /// was picked).
    pub fn set_tear_mode(&mut self, enabled: bool) {
        self.tear_mode = enabled;
    }

    /// Keep the dragged particle anchored where it is dropped. Must be
    /// asserted after the press; pointer-down clears it.
    pub fn set_anchor_intent(&mut self, enabled: bool) {
        self.anchor_intent = enabled;
    }

    /// Start a press at `pos`. Returns the picked particle, if any.
    ///
    /// A particle still held by an unfinished press is released first.
    pub fn on_pointer_down<M: DistanceMetric>(
        &mut self,
        cloth: &mut Cloth<F, M>,
        pos: Vec2<F>,
    ) -> Option<usize> {
        // A press while a drag is still open means the release was lost.
        if let Some(stale) = self.active.take() {
            cloth.release(stale);
            tracing::debug!(index = stale, "stale drag released");
        }
        self.anchor_intent = false;
        self.dragging = true;

        if !self.tear_mode {
            self.active = cloth.nearest_particle(pos, self.config.pick_radius);
            if let Some(index) = self.active {
                tracing::debug!(index, "particle picked");
            }
        } else if self.config.tear_on_press {
            self.tear(cloth, pos);
        }
        self.active
    }

    /// Pointer moved to `pos`. Returns the number of links torn.
    pub fn on_pointer_move<M: DistanceMetric>(
        &mut self,
        cloth: &mut Cloth<F, M>,
        pos: Vec2<F>,
    ) -> usize {
        if !self.dragging {
            return 0;
        }

        if let Some(index) = self.active {
            // The first move turns the pick into an anchor; later moves
            // only retarget it.
            cloth.anchor(index, pos);
            0
        } else if self.tear_mode {
            self.tear(cloth, pos)
        } else {
            0
        }
    }

    /// End the press. The dragged particle is released unless
    /// anchor-intent was asserted.
    pub fn on_pointer_up<M: DistanceMetric>(&mut self, cloth: &mut Cloth<F, M>) {
        if let Some(index) = self.active.take() {
            if !self.anchor_intent {
                cloth.release(index);
            } else {
                tracing::debug!(index, "particle kept anchored");
            }
        }

        self.dragging = false;
        self.anchor_intent = false;
        self.tear_mode = false;
    }

    fn tear<M: DistanceMetric>(&self, cloth: &mut Cloth<F, M>, pos: Vec2<F>) -> usize {
        let extent = self.config.tear_extent.unwrap_or_else(|| cloth.rest_length());
        cloth.tear_at(pos, extent)
    }

    pub fn state(&self) -> InteractionState {
        match (self.dragging, self.active, self.tear_mode) {
            (true, Some(_), _) => InteractionState::DraggingParticle,
            (true, None, true) => InteractionState::Tearing,
            _ => InteractionState::Idle,
        }
    }

    /// Particle picked by the current press.
    pub fn active(&self) -> Option<usize> { self.active }
    pub fn is_dragging(&self) -> bool { self.dragging }
    pub fn tear_mode(&self) -> bool { self.tear_mode }
    pub fn anchor_intent(&self) -> bool { self.anchor_intent }
    pub fn config(&self) -> &InteractionConfig<F> { &self.config }
}

impl<F: Float> Default for InteractionController<F> {
    fn default() -> Self {
        Self::new(InteractionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AnchorLayout, ClothConfig};
    use crate::metric::Euclidean;

    fn cloth() -> Cloth<f64, Euclidean> {
        let config = ClothConfig::new()
            .with_origin(Vec2::new(0.0, 0.0))
            .with_grid(5, 5)
            .with_rest_length(10.0)
            .with_anchors(AnchorLayout::None);
        Cloth::new(config).unwrap()
    }

    #[test]
    fn click_without_move_does_not_anchor() {
        let mut cloth = cloth();
        let mut ctl = InteractionController::default();
        let picked = ctl.on_pointer_down(&mut cloth, Vec2::new(21.0, 19.0));
        assert_eq!(picked, Some(cloth.index(2, 2)));
        assert_eq!(ctl.state(), InteractionState::DraggingParticle);
        ctl.on_pointer_up(&mut cloth);
        assert_eq!(cloth.anchor_count(), 0);
        assert_eq!(ctl.state(), InteractionState::Idle);
    }

    #[test]
    fn first_move_anchors_picked_particle() {
        let mut cloth = cloth();
        let mut ctl = InteractionController::default();
        let picked = ctl.on_pointer_down(&mut cloth, Vec2::new(0.0, 0.0)).unwrap();
        ctl.on_pointer_move(&mut cloth, Vec2::new(-5.0, -5.0));
        assert!(cloth.is_anchored(picked));
        ctl.on_pointer_move(&mut cloth, Vec2::new(-7.0, -6.0));
        assert_eq!(cloth.anchors(), &[picked]);
        assert_eq!(cloth.particle(picked).anchor_target(), Vec2::new(-7.0, -6.0));
    }

    #[test]
    fn move_without_press_is_ignored() {
        let mut cloth = cloth();
        let mut ctl = InteractionController::default();
        ctl.set_tear_mode(true);
        assert_eq!(ctl.on_pointer_move(&mut cloth, Vec2::new(20.0, 20.0)), 0);
        assert_eq!(cloth.constraint_count(), 40);
    }

    #[test]
    fn pointer_down_clears_anchor_intent() {
        let mut cloth = cloth();
        let mut ctl = InteractionController::default();
        ctl.set_anchor_intent(true);
        ctl.on_pointer_down(&mut cloth, Vec2::new(0.0, 0.0));
        assert!(!ctl.anchor_intent());
    }

    #[test]
    fn pick_radius_limits_selection() {
        let mut cloth = cloth();
        let mut ctl = InteractionController::new(InteractionConfig::new().with_pick_radius(3.0));
        assert_eq!(ctl.on_pointer_down(&mut cloth, Vec2::new(500.0, 500.0)), None);
        ctl.on_pointer_up(&mut cloth);
        assert_eq!(ctl.on_pointer_down(&mut cloth, Vec2::new(11.0, 1.0)), Some(1));
    }

    #[test]
    fn press_without_release_frees_previous_drag() {
        let mut cloth = cloth();
        let mut ctl = InteractionController::default();
        let first = ctl.on_pointer_down(&mut cloth, Vec2::new(0.0, 0.0)).unwrap();
        ctl.on_pointer_move(&mut cloth, Vec2::new(-5.0, -5.0));
        assert!(cloth.is_anchored(first));

        let second = ctl.on_pointer_down(&mut cloth, Vec2::new(40.0, 40.0)).unwrap();
        assert_ne!(first, second);
        assert!(!cloth.is_anchored(first));
        assert_eq!(cloth.anchor_count(), 0);
        assert_eq!(ctl.active(), Some(second));
    }

    #[test]
    fn tear_press_drops_stale_drag() {
        let mut cloth = cloth();
        let mut ctl = InteractionController::default();
        let first = ctl.on_pointer_down(&mut cloth, Vec2::new(0.0, 0.0)).unwrap();
        ctl.on_pointer_move(&mut cloth, Vec2::new(-5.0, -5.0));

        ctl.set_tear_mode(true);
        assert_eq!(ctl.on_pointer_down(&mut cloth, Vec2::new(25.0, 20.0)), None);
        assert!(!cloth.is_anchored(first));
        assert_eq!(ctl.state(), InteractionState::Tearing);
        assert!(ctl.on_pointer_move(&mut cloth, Vec2::new(25.0, 20.0)) > 0);
        assert_eq!(cloth.anchor_count(), 0);
    }

    #[test]
    fn tear_on_press_is_opt_in() {
        let mut cloth = cloth();
        let mut ctl = InteractionController::default();
        ctl.set_tear_mode(true);
        ctl.on_pointer_down(&mut cloth, Vec2::new(25.0, 20.0));
        assert_eq!(cloth.constraint_count(), 40);

        let mut ctl = InteractionController::new(InteractionConfig::new().with_tear_on_press(true));
        ctl.set_tear_mode(true);
        ctl.on_pointer_down(&mut cloth, Vec2::new(25.0, 20.0));
        assert!(cloth.constraint_count() < 40);
    }
}
