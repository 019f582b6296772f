//! Particle records and the fixed-size store that owns them.
//!
//! A [`ParticleStore`] is created with a fixed count and is never grown or
//! shrunk. Switching modes replaces every particle at once; indices stay
//! stable for the lifetime of one generation, which is what the
//! [`AdjacencyCache`](crate::adjacency::AdjacencyCache) keys on.

use glam::Vec3;
use rand::Rng;

/// Default population size.
pub const DEFAULT_PARTICLE_COUNT: usize = 1000;

/// Default probability that a freshly spawned particle is friendly.
pub const DEFAULT_FRIENDLY_CHANCE: f32 = 0.3;

/// A single point particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Affects colour only (dots and graph edges).
    pub friendly: bool,
    /// Current position.
    pub position: Vec3,
    /// Target used by the destination modes. Only meaningful when
    /// `has_destination` is set.
    pub destination: Vec3,
    pub has_destination: bool,
}

impl Particle {
    /// A particle at `position` with no destination.
    pub fn new(friendly: bool, position: Vec3) -> Self {
        Self {
            friendly,
            position,
            destination: Vec3::ZERO,
            has_destination: false,
        }
    }

    /// Spawn a particle with a random friendliness and a random position.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, friendly_chance: f32) -> Self {
        let friendly = rng.gen::<f32>() < friendly_chance;
        Self::new(friendly, spawn_position(rng))
    }

    /// Set a destination and mark it valid.
    pub fn set_destination(&mut self, destination: Vec3) {
        self.destination = destination;
        self.has_destination = true;
    }
}

/// Random point in `[-1, 1]^3` where all three axes share one sign.
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let sign = if rng.gen::<f32>() > 0.5 { -1.0 } else { 1.0 };
    Vec3::new(
        sign * rng.gen::<f32>(),
        sign * rng.gen::<f32>(),
        sign * rng.gen::<f32>(),
    )
}

/// Owned, contiguous particle buffer with a fixed count.
#[derive(Debug, Clone, Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
}

impl ParticleStore {
    /// Fill a new store with `count` freshly spawned particles.
    ///
    /// Destinations are not assigned here; the session does that in one
    /// batch once every particle has a position.
    pub fn initialize<R: Rng + ?Sized>(count: usize, friendly_chance: f32, rng: &mut R) -> Self {
        let particles = (0..count)
            .map(|_| Particle::spawn(rng, friendly_chance))
            .collect();
        Self { particles }
    }

    /// Wrap an explicit set of particles.
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    /// Replace every particle in place, keeping the count.
    pub fn respawn<R: Rng + ?Sized>(&mut self, friendly_chance: f32, rng: &mut R) {
        for particle in &mut self.particles {
            *particle = Particle::spawn(rng, friendly_chance);
        }
    }

    pub fn clear_destinations(&mut self) {
        for particle in &mut self.particles {
            particle.has_destination = false;
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Particle> {
        self.particles.iter_mut()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }
}

impl std::ops::Index<usize> for ParticleStore {
    type Output = Particle;

    fn index(&self, index: usize) -> &Particle {
        &self.particles[index]
    }
}

impl<'a> IntoIterator for &'a ParticleStore {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}
