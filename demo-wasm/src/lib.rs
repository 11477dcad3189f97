use tatter::{ClothConfig, ClothSession, DrawOptions, InteractionConfig, Surface, Vec2};
use wasm_bindgen::prelude::*;

/// Flat draw buffers filled during a frame, in canvas coordinates.
#[derive(Default)]
struct CanvasBuffers {
    height: f32,
    lines: Vec<f32>,
    circles: Vec<f32>,
}

impl CanvasBuffers {
    fn flip(&self, p: Vec2<f32>) -> (f32, f32) {
        (p.x, self.height - p.y)
    }

    fn clear(&mut self) {
        self.lines.clear();
        self.circles.clear();
    }
}

impl Surface<f32> for CanvasBuffers {
    fn draw_line(&mut self, from: Vec2<f32>, to: Vec2<f32>) {
        let (x0, y0) = self.flip(from);
        let (x1, y1) = self.flip(to);
        self.lines.extend_from_slice(&[x0, y0, x1, y1]);
    }

    fn draw_circle(&mut self, center: Vec2<f32>, radius: f32) {
        let (x, y) = self.flip(center);
        self.circles.extend_from_slice(&[x, y, radius]);
    }
}

// ---- Cloth Demo ----

/// Browser glue: canvas pixels (y-down) in, flat line buffers out.
///
/// Keyboard mapping follows the classic demo: hold `t` to tear, press `a`
/// during a drag to leave the particle pinned where it is dropped.
#[wasm_bindgen]
pub struct ClothDemo {
    session: ClothSession<f32>,
    buffers: CanvasBuffers,
}

impl ClothDemo {
    fn build(config: ClothConfig<f32>, canvas_height: f32) -> Result<ClothDemo, JsError> {
        let session = ClothSession::new(config, InteractionConfig::new())
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(ClothDemo {
            session,
            buffers: CanvasBuffers { height: canvas_height, ..Default::default() },
        })
    }

    fn to_sim(&self, x: f32, y: f32) -> Vec2<f32> {
        Vec2::new(x, self.buffers.height - y)
    }
}

#[wasm_bindgen]
impl ClothDemo {
    /// The classic 35x20 curtain on a canvas of the given height.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_height: f32) -> Result<ClothDemo, JsError> {
        Self::build(ClothConfig::new(), canvas_height)
    }

    /// A custom grid hung from the top corners and centre.
    pub fn with_grid(
        cols: usize,
        rows: usize,
        spacing: f32,
        origin_x: f32,
        origin_y: f32,
        canvas_height: f32,
    ) -> Result<ClothDemo, JsError> {
        let config = ClothConfig::new()
            .with_grid(cols, rows)
            .with_rest_length(spacing)
            .with_origin(Vec2::new(origin_x, origin_y));
        Self::build(config, canvas_height)
    }

    /// Integrate, relax and refill the draw buffers.
    pub fn frame(&mut self) {
        self.buffers.clear();
        self.session.frame(&mut self.buffers);
    }

    /// Returns true if a particle was picked.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        let pos = self.to_sim(x, y);
        self.session.pointer_down(pos).is_some()
    }

    /// Returns the number of links torn by this move.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> usize {
        let pos = self.to_sim(x, y);
        self.session.pointer_move(pos)
    }

    pub fn pointer_up(&mut self) {
        self.session.pointer_up();
    }

    pub fn key_down(&mut self, key: &str) {
        match key {
            "t" | "T" => self.session.set_tear_mode(true),
            "a" | "A" => self.session.set_anchor_intent(true),
            _ => {}
        }
    }

    pub fn key_up(&mut self, key: &str) {
        if matches!(key, "t" | "T") {
            self.session.set_tear_mode(false);
        }
    }

    pub fn set_show_particles(&mut self, show: bool) {
        self.session.set_draw_options(DrawOptions { particles: show });
    }

    pub fn set_canvas_height(&mut self, height: f32) {
        self.buffers.height = height;
    }

    /// Returns flat [x0, y0, x1, y1, ...] per link from the last frame.
    pub fn segments(&self) -> Vec<f32> {
        self.buffers.lines.clone()
    }

    /// Returns flat [x, y, radius, ...] per particle from the last frame,
    /// empty unless particles are shown.
    pub fn particles(&self) -> Vec<f32> {
        self.buffers.circles.clone()
    }

    pub fn link_count(&self) -> usize {
        self.session.cloth().constraint_count()
    }

    pub fn anchor_count(&self) -> usize {
        self.session.cloth().anchor_count()
    }
}
