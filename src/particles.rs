//! Ambient background particles: fixed population, constant drift, toroidal wraparound.

use crate::config::{ParticleConfig, MAX_PARTICLES};
use crate::geometry::{wrap, Viewport};

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub opacity: f64,
}

/// The whole population. Only positions change after generation.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Fill the field with `config.count` particles (at most `MAX_PARTICLES`) spread
    /// uniformly over `viewport`.
    pub fn generate(config: &ParticleConfig, viewport: Viewport, rng: &mut fastrand::Rng) -> Self {
        let count = config.count.min(MAX_PARTICLES) as u32;
        let particles = (0..count)
            .map(|id| Particle {
                id,
                x: wrap(rng.f64() * viewport.width, viewport.width),
                y: wrap(rng.f64() * viewport.height, viewport.height),
                size: config.size.sample(rng),
                speed_x: config.speed.sample(rng),
                speed_y: config.speed.sample(rng),
                opacity: config.opacity.sample(rng),
            })
            .collect();
        Self { particles }
    }

    /// A field holding exactly `particles`.
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    /// Advance every particle by its velocity and wrap into the viewport as it is now.
    ///
    /// A viewport that shrank since the last tick is picked up here, not at resize time.
    pub fn tick(&mut self, viewport: Viewport) {
        for p in &mut self.particles {
            p.x = wrap(p.x + p.speed_x, viewport.width);
            p.y = wrap(p.y + p.speed_y, viewport.height);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
