//! Tearable Verlet cloth for interactive 2D scenes.
//!
//! `tatter` simulates a grid of point masses held together by structural
//! distance links. Each frame integrates every particle with position
//! Verlet, then relaxes the links for a fixed number of passes while
//! re-pinning anchored particles. A pointer controller lets users grab,
//! drag, pin and tear the cloth.
//!
//! # Features
//!
//! - **Verlet integration**: fixed timestep, implicit velocity
//! - **Relaxation solver**: Gauss-Seidel style halving correction with anchor re-pinning
//! - **Tearing**: links under the pointer are removed permanently
//! - **Pointer controller**: drag, anchor-on-drop, release with zero velocity
//! - **Pluggable metric**: exact Euclidean or square-root-free octagonal distance
//! - **Observable**: monitor frames via the `StepObserver` trait and `tracing`
//! - **`no_std` compatible**: works in embedded and WASM environments
//!
//! # Example
//! ```
//! use tatter::{ClothConfig, ClothSession, InteractionConfig, Surface, Vec2};
//!
//! struct Lines(usize);
//! impl Surface<f32> for Lines {
//!     fn draw_line(&mut self, _: Vec2<f32>, _: Vec2<f32>) { self.0 += 1; }
//!     fn draw_circle(&mut self, _: Vec2<f32>, _: f32) {}
//! }
//!
//! let mut session: ClothSession<f32> =
//!     ClothSession::new(ClothConfig::new().with_grid(8, 6), InteractionConfig::new()).unwrap();
//! let mut lines = Lines(0);
//! session.frame(&mut lines);
//! assert_eq!(lines.0, 7 * 6 + 5 * 8);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod metric;
pub mod particle;
pub mod constraint;
pub mod cloth;
pub mod interaction;
pub mod session;
pub mod render;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use metric::{DistanceMetric, Euclidean, Octagonal};
pub use particle::Particle;
pub use constraint::Constraint;
pub use cloth::Cloth;
pub use interaction::{InteractionController, InteractionState};
pub use session::ClothSession;
pub use render::{DrawOptions, Surface};
pub use config::{AnchorLayout, ClothConfig, InteractionConfig};
pub use observer::{NoOpStepObserver, StepObserver, TracingStepObserver};
pub use error::{ClothError, ClothResult};
