//! Simulation builder and window runner

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::error::SimulationError;
use crate::gpu::GpuState;
use crate::input::Command;
use crate::motion::Mode;
use crate::render::DrawList;
use crate::session::{KeyOutcome, Session, SessionConfig};
use crate::time::FrameClock;
use crate::visuals::BACKGROUND;

const DEFAULT_TITLE: &str = "motes";
const DEFAULT_WINDOW_SIZE: (u32, u32) = (512, 512);

/// A particle demo builder.
///
/// Use method chaining to configure, then call `.run()` to start.
///
/// ```ignore
/// Simulation::new()
///     .with_particle_count(2000)
///     .with_seed(7)
///     .with_mode(Mode::Graph)
///     .run()?;
/// ```
pub struct Simulation {
    config: SessionConfig,
    title: String,
    window_size: (u32, u32),
}

impl Simulation {
    /// Create a new simulation with default settings.
    pub fn new() -> Self {
        Self {
            config: SessionConfig::default(),
            title: DEFAULT_TITLE.to_string(),
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }

    /// Replace the whole session configuration.
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the number of particles.
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.config.particle_count = count;
        self
    }

    /// Seed the random stream for a reproducible run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Set the starting mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.config.initial_mode = mode;
        self
    }

    /// Set the random-walk divisor. Larger is slower.
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.config.motion.speed = speed;
        self
    }

    /// Set the per-axis nudge of the destination modes.
    pub fn with_step_size(mut self, step_size: f32) -> Self {
        self.config.motion.step_size = step_size;
        self
    }

    /// Set the starting edge probability for graph mode.
    pub fn with_edge_probability(mut self, probability: f32) -> Self {
        self.config.edge_probability = probability;
        self
    }

    /// Set the probability that a spawned particle is friendly.
    pub fn with_friendly_chance(mut self, chance: f32) -> Self {
        self.config.friendly_chance = chance;
        self
    }

    /// Set how often a mixed edge is drawn highlighted.
    pub fn with_highlight_chance(mut self, chance: f32) -> Self {
        self.config.highlight_chance = chance;
        self
    }

    /// Set the dot diameter in pixels.
    pub fn with_dot_size(mut self, size: f32) -> Self {
        self.config.dot_size = size;
        self
    }

    /// Set the view spin per frame, in degrees. Zero disables it.
    pub fn with_spin(mut self, degrees: f32) -> Self {
        self.config.spin_degrees = degrees;
        self
    }

    /// Draw reference axes.
    pub fn with_axes(mut self, show: bool) -> Self {
        self.config.show_axes = show;
        self
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    /// The configuration the session will start with.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Run the simulation. This blocks until the window is closed or Escape
    /// is pressed.
    pub fn run(self) -> Result<(), SimulationError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(Session::new(self.config), self.title, self.window_size);
        event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    session: Session,
    frame: DrawList,
    clock: FrameClock,
    title: String,
    window_size: (u32, u32),
    /// Setup failure to report once the event loop has stopped.
    error: Option<SimulationError>,
}

impl App {
    fn new(session: Session, title: String, window_size: (u32, u32)) -> Self {
        Self {
            window: None,
            gpu_state: None,
            session,
            frame: DrawList::new(),
            clock: FrameClock::new(),
            title,
            window_size,
            error: None,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), SimulationError> {
        let window_attrs = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(self.window_size.0, self.window_size.1));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let size = window.inner_size();
        self.session.set_viewport(size.width, size.height);
        self.window = Some(window.clone());
        self.gpu_state = Some(pollster::block_on(GpuState::new(window, BACKGROUND))?);
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(gpu_state) = &mut self.gpu_state else {
            return;
        };

        self.frame.clear();
        self.session.draw_frame(&mut self.frame);

        match gpu_state.render(&self.frame, self.session.view_proj()) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu_state.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }

        if let Some(fps) = self.clock.tick() {
            log::debug!(
                "{:.1} fps at {:.0}s, {} dots, {} edges",
                fps,
                self.clock.elapsed(),
                self.frame.points.len(),
                self.frame.segment_count()
            );
            if let Some(window) = &self.window {
                window.set_title(&format!(
                    "{} - {} mode - {:.0} fps",
                    self.title,
                    self.session.mode(),
                    fps
                ));
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_window(event_loop) {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                self.session
                    .set_viewport(physical_size.width, physical_size.height);
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                log::debug!("Key {:?}", event.logical_key);
                let command = Command::from_key(&event.logical_key);
                if self.session.handle_command(command) == KeyOutcome::Exit {
                    log::info!("Escape pressed, exiting");
                    event_loop.exit();
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    /// Idle hook: advance the simulation, then ask for a repaint.
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            self.session.advance();
            window.request_redraw();
        }
    }
}
