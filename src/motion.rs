//! Motion modes and the per-frame position update.
//!
//! Every particle follows the same [`Mode`]. `Random` and `Graph` jitter
//! each particle by a small random amount per frame; `Wave`, `Pulse` and
//! `Sphere` first assign each particle a destination (see
//! [`assign_destinations`]) and then [`step`] it every frame.

use glam::Vec3;
use rand::Rng;

use crate::particle::{Particle, ParticleStore};

/// Divisor applied to random-walk jitter. Larger is slower.
pub const DEFAULT_SPEED: f32 = 10_000.0;

/// Fixed per-axis nudge used by the destination modes.
pub const DEFAULT_STEP_SIZE: f32 = 1.0 / DEFAULT_SPEED;

/// Active motion algorithm, shared by all particles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Mode {
    /// Random walk, no destinations.
    #[default]
    Random,
    /// Particles head for a point on a sine/cosine wave.
    Wave,
    /// Particles head for a hemisphere of radius 0.5 around (0.5, 0.5, 0.5).
    Sphere,
    /// Particles collapse to the origin except those near the mid-plane.
    Pulse,
    /// Random walk, plus random edges drawn between particles.
    Graph,
}

impl Mode {
    /// Whether this mode steers particles toward destinations.
    pub fn uses_destinations(self) -> bool {
        matches!(self, Mode::Wave | Mode::Sphere | Mode::Pulse)
    }

    /// Whether edges are drawn in this mode.
    pub fn draws_edges(self) -> bool {
        self == Mode::Graph
    }

    /// Compute the destination for a particle at `position`.
    ///
    /// Returns `None` for the modes that have no destinations.
    pub fn destination(self, position: Vec3, dir: Sign) -> Option<Vec3> {
        match self {
            Mode::Random | Mode::Graph => None,
            Mode::Wave => {
                let angle = (360.0 * position.x).to_radians();
                Some(Vec3::new(angle.sin(), angle.cos(), dir.as_f32()))
            }
            Mode::Pulse => Some(Vec3::new(
                pulse_axis(position.x),
                pulse_axis(position.y),
                pulse_axis(position.z),
            )),
            Mode::Sphere => {
                let dx = position.x - 0.5;
                let dy = position.y - 0.5;
                // Points outside the equatorial disk land on the equator
                // instead of producing NaN.
                let radicand = (0.25 - dx * dx - dy * dy).max(0.0);
                Some(Vec3::new(
                    position.x,
                    position.y,
                    0.5 + dir.as_f32() * radicand.sqrt(),
                ))
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Random => "random",
            Mode::Wave => "wave",
            Mode::Sphere => "sphere",
            Mode::Pulse => "pulse",
            Mode::Graph => "graph",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Doubles an axis value strictly inside (0.495, 0.505), zeroes anything else.
fn pulse_axis(value: f32) -> f32 {
    if 0.495 < value && value < 0.505 {
        value * 2.0
    } else {
        value * 0.0
    }
}

/// Direction drawn once per destination batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen::<f32>() > 0.5 {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    #[inline]
    pub fn as_f32(self) -> f32 {
        match self {
            Sign::Positive => 1.0,
            Sign::Negative => -1.0,
        }
    }
}

/// Tunables for the position update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionParams {
    /// Jitter divisor for the random-walk modes.
    pub speed: f32,
    /// Per-axis nudge for the destination modes.
    pub step_size: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            step_size: DEFAULT_STEP_SIZE,
        }
    }
}

/// Assign a destination to every particle for `mode`.
///
/// One [`Sign`] is drawn for the whole batch. Modes without destinations
/// leave the store untouched, but still consume the sign draw so the random
/// stream does not depend on the mode.
pub fn assign_destinations<R: Rng + ?Sized>(store: &mut ParticleStore, mode: Mode, rng: &mut R) {
    let dir = Sign::random(rng);
    for particle in store.iter_mut() {
        if let Some(destination) = mode.destination(particle.position, dir) {
            particle.set_destination(destination);
        }
    }
}

/// Nudge one particle by `step_size` on each axis.
///
/// An axis that differs from its destination moves by `+step_size`; an axis
/// that already matches moves by `-step_size`. This is a fixed-magnitude
/// nudge, not homing.
pub fn step(particle: &mut Particle, step_size: f32) {
    let delta = particle.destination - particle.position;
    let nudge = Vec3::new(
        if delta.x != 0.0 { step_size } else { -step_size },
        if delta.y != 0.0 { step_size } else { -step_size },
        if delta.z != 0.0 { step_size } else { -step_size },
    );
    particle.position += nudge;
}

/// Random walk: each particle moves by `uniform(0,1) / speed` per axis, in
/// the negative or positive direction with equal probability.
pub fn update_random_mode<R: Rng + ?Sized>(store: &mut ParticleStore, speed: f32, rng: &mut R) {
    for particle in store.iter_mut() {
        let sign = if rng.gen::<f32>() > 0.5 { -1.0 } else { 1.0 };
        let jitter = Vec3::new(rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>()) / speed;
        particle.position += sign * jitter;
    }
}

/// Advance every particle by one frame under `mode`.
pub fn update_positions<R: Rng + ?Sized>(
    store: &mut ParticleStore,
    mode: Mode,
    params: &MotionParams,
    rng: &mut R,
) {
    match mode {
        Mode::Random | Mode::Graph => update_random_mode(store, params.speed, rng),
        Mode::Wave | Mode::Sphere | Mode::Pulse => {
            for particle in store.iter_mut().filter(|p| p.has_destination) {
                step(particle, params.step_size);
            }
        }
    }
}
