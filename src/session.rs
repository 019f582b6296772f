//! A running demo: particles, adjacency, mode and view in one place.
//!
//! The window shell drives a [`Session`] through four hooks:
//! [`advance`](Session::advance) once per idle iteration,
//! [`draw_frame`](Session::draw_frame) on repaint,
//! [`handle_command`](Session::handle_command) on key press, and
//! [`set_viewport`](Session::set_viewport) on resize.

use glam::Mat4;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::adjacency::{AdjacencyCache, DEFAULT_EDGE_PROBABILITY};
use crate::camera::{self, Camera};
use crate::input::Command;
use crate::motion::{self, Mode, MotionParams};
use crate::particle::{ParticleStore, DEFAULT_FRIENDLY_CHANCE, DEFAULT_PARTICLE_COUNT};
use crate::render::{self, Canvas, FrameParams};
use crate::visuals::{self, Glow};

/// Edge probability change per `<` / `>` press.
pub const DEFAULT_EDGE_PROBABILITY_STEP: f32 = 0.005;
/// Dot size change per `<` / `>` press.
pub const DEFAULT_DOT_SIZE_STEP: f32 = 0.001;

/// Tunables for a [`Session`].
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub particle_count: usize,
    /// Fixed seed for a reproducible run. `None` seeds from the OS.
    pub seed: Option<u64>,
    pub initial_mode: Mode,
    pub motion: MotionParams,
    pub friendly_chance: f32,
    pub edge_probability: f32,
    pub edge_probability_step: f32,
    /// Dot diameter in pixels.
    pub dot_size: f32,
    pub dot_size_step: f32,
    pub highlight_chance: f32,
    pub glow_step: f32,
    pub pan_step: f32,
    pub zoom_step: f32,
    /// Degrees of spin per idle iteration.
    pub spin_degrees: f32,
    pub show_axes: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            seed: None,
            initial_mode: Mode::Random,
            motion: MotionParams::default(),
            friendly_chance: DEFAULT_FRIENDLY_CHANCE,
            edge_probability: DEFAULT_EDGE_PROBABILITY,
            edge_probability_step: DEFAULT_EDGE_PROBABILITY_STEP,
            dot_size: visuals::DEFAULT_DOT_SIZE,
            dot_size_step: DEFAULT_DOT_SIZE_STEP,
            highlight_chance: visuals::DEFAULT_HIGHLIGHT_CHANCE,
            glow_step: visuals::DEFAULT_GLOW_STEP,
            pan_step: camera::DEFAULT_PAN_STEP,
            zoom_step: camera::DEFAULT_ZOOM_STEP,
            spin_degrees: camera::DEFAULT_SPIN_DEGREES,
            show_axes: false,
        }
    }
}

/// What a key press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The command ran and the particles were re-initialized.
    Reinitialized,
    /// The key is not bound; nothing changed.
    Ignored,
    /// The user asked to quit.
    Exit,
}

/// Simulation state owned by the window shell.
pub struct Session {
    config: SessionConfig,
    mode: Mode,
    store: ParticleStore,
    adjacency: AdjacencyCache,
    glow: Glow,
    camera: Camera,
    edge_probability: f32,
    dot_size: f32,
    viewport: (u32, u32),
    generation: u64,
    rng: StdRng,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut session = Self {
            mode: config.initial_mode,
            store: ParticleStore::default(),
            adjacency: AdjacencyCache::default(),
            glow: Glow::new(config.glow_step),
            camera: Camera::new(config.pan_step, config.zoom_step, config.spin_degrees),
            edge_probability: sanitize_edge_probability(config.edge_probability),
            dot_size: config.dot_size.max(visuals::MIN_DOT_SIZE),
            viewport: (1, 1),
            generation: 0,
            rng,
            config,
        };
        session.reinitialize();
        session
    }

    /// Replace every particle and forget every edge decision.
    ///
    /// In the destination modes, destinations are assigned once after the
    /// whole population is positioned.
    pub fn reinitialize(&mut self) {
        let count = self.config.particle_count;
        if self.store.len() == count {
            self.store.respawn(self.config.friendly_chance, &mut self.rng);
        } else {
            self.store = ParticleStore::initialize(count, self.config.friendly_chance, &mut self.rng);
        }
        if self.mode != Mode::Random {
            motion::assign_destinations(&mut self.store, self.mode, &mut self.rng);
        }

        // Only graph mode reads the cache; other modes keep it empty.
        if !self.mode.draws_edges() {
            self.adjacency = AdjacencyCache::default();
        } else if self.adjacency.len() == count {
            self.adjacency.reset();
        } else {
            self.adjacency.reset_to(count);
        }
        self.glow.reset();
        self.generation += 1;

        log::info!(
            "Initialized {} particles in {} mode (generation {})",
            count,
            self.mode,
            self.generation
        );
    }

    /// Idle hook: move every particle one frame and spin the view.
    pub fn advance(&mut self) {
        motion::update_positions(&mut self.store, self.mode, &self.config.motion, &mut self.rng);
        self.camera.tick();
    }

    /// Repaint hook: emit this frame's draw calls.
    pub fn draw_frame<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        let params = FrameParams {
            mode: self.mode,
            dot_size: self.dot_size,
            edge_probability: self.edge_probability,
            highlight_chance: self.config.highlight_chance,
            show_axes: self.config.show_axes,
        };
        render::draw_frame(
            &self.store,
            &mut self.adjacency,
            &mut self.glow,
            &params,
            &mut self.rng,
            canvas,
        );
    }

    /// Key hook. Every bound command except [`Command::Exit`] re-initializes
    /// the particles.
    pub fn handle_command(&mut self, command: Option<Command>) -> KeyOutcome {
        let Some(command) = command else {
            log::debug!("Unbound key ignored");
            return KeyOutcome::Ignored;
        };
        log::debug!("Command {:?}", command);

        match command {
            Command::Exit => return KeyOutcome::Exit,
            Command::SetMode(mode) => {
                if mode != self.mode {
                    log::debug!("Mode {} -> {}", self.mode, mode);
                }
                self.mode = mode;
            }
            Command::MoreEdges => {
                self.edge_probability =
                    (self.edge_probability + self.config.edge_probability_step).min(1.0);
                self.dot_size = (self.dot_size - self.config.dot_size_step).max(visuals::MIN_DOT_SIZE);
            }
            Command::FewerEdges => {
                self.edge_probability =
                    (self.edge_probability - self.config.edge_probability_step).max(0.0);
                self.dot_size += self.config.dot_size_step;
            }
            Command::ZoomIn => self.camera.zoom_in(),
            Command::ZoomOut => self.camera.zoom_out(),
            Command::Pan(direction) => self.camera.pan(direction),
        }

        self.reinitialize();
        KeyOutcome::Reinitialized
    }

    /// Resize hook.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width.max(1), height.max(1));
    }

    /// View-projection matrix for the current viewport.
    pub fn view_proj(&self) -> Mat4 {
        let (w, h) = self.viewport;
        self.camera.view_proj(w as f32 / h as f32)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn particles(&self) -> &ParticleStore {
        &self.store
    }

    pub fn adjacency(&self) -> &AdjacencyCache {
        &self.adjacency
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn edge_probability(&self) -> f32 {
        self.edge_probability
    }

    pub fn dot_size(&self) -> f32 {
        self.dot_size
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Number of re-initializations so far, starting at 1.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}

/// Clamp to `[0, 1]`, falling back to the default for NaN or infinity.
fn sanitize_edge_probability(probability: f32) -> f32 {
    if probability.is_finite() {
        probability.clamp(0.0, 1.0)
    } else {
        log::warn!(
            "Edge probability {} is not finite, using {}",
            probability,
            DEFAULT_EDGE_PROBABILITY
        );
        DEFAULT_EDGE_PROBABILITY
    }
}
