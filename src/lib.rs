//! # motes
//!
//! An interactive particle toy: a cloud of dots in the unit cube that wanders,
//! forms shapes, or links up into a random graph, depending on the mode.
//!
//! ## Quick Start
//!
//! ```ignore
//! use motes::prelude::*;
//!
//! fn main() -> Result<(), SimulationError> {
//!     Simulation::new()
//!         .with_particle_count(1000)
//!         .with_mode(Mode::Graph)
//!         .run()
//! }
//! ```
//!
//! ## Modes
//!
//! | Key | Mode | Motion |
//! |-----|------|--------|
//! | - | Random | Jitter along every axis (startup default) |
//! | `w` | Wave | Nudged toward a sine/cosine curve |
//! | `p` | Pulse | Nudged toward the origin, except near the mid-plane |
//! | `c` | Sphere | Nudged toward a hemisphere around (0.5, 0.5, 0.5) |
//! | `h` | Graph | Jitter, with random edges drawn between particles |
//!
//! `>` and `<` raise and lower the graph edge probability, `+` and `-` zoom,
//! `i` `j` `k` `l` pan and Escape quits. Every bound key except Escape
//! re-spawns the particles.
//!
//! ## Layout
//!
//! The simulation itself has no window or GPU dependency:
//!
//! - [`particle`] holds the population
//! - [`motion`] moves it one frame at a time
//! - [`adjacency`] remembers which pairs are linked
//! - [`render`] turns a frame into draw calls on a [`Canvas`]
//! - [`session`] ties them together behind four hooks
//!
//! [`Simulation`] wraps a [`Session`] in a winit window drawn with wgpu.

pub mod adjacency;
pub mod camera;
pub mod error;
mod gpu;
pub mod input;
pub mod motion;
pub mod particle;
pub mod render;
pub mod session;
mod shader;
mod simulation;
pub mod time;
pub mod visuals;

pub use adjacency::{AdjacencyCache, Link};
pub use camera::{Camera, Pan};
pub use error::{GpuError, SimulationError};
pub use glam::{Vec3, Vec4};
pub use input::Command;
pub use motion::{Mode, MotionParams};
pub use particle::{Particle, ParticleStore};
pub use render::{Canvas, DrawList};
pub use session::{KeyOutcome, Session, SessionConfig};
pub use simulation::Simulation;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use motes::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::SimulationError;
    pub use crate::input::Command;
    pub use crate::motion::{Mode, MotionParams};
    pub use crate::render::{Canvas, DrawList};
    pub use crate::session::{Session, SessionConfig};
    pub use crate::simulation::Simulation;
    pub use crate::{Vec3, Vec4};
}
