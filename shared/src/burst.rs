use rand::Rng;

use crate::{FireworksConfig, Particle, Surface};

/// One firework explosion: a fixed batch of particles sharing an origin.
///
/// Particles are only ever removed after construction.
#[derive(Clone, Debug)]
pub struct Burst {
    origin: (f64, f64),
    particles: Vec<Particle>,
}

impl Burst {
    pub fn new(origin: (f64, f64), config: &FireworksConfig, rng: &mut impl Rng) -> Burst {
        Burst {
            origin,
            particles: (0..config.particles_per_burst)
                .map(|_| Particle::scatter(origin, config, rng))
                .collect(),
        }
    }

    /// Advances every particle, then drops the spent ones.
    pub fn update(&mut self) {
        for particle in self.particles.iter_mut() {
            particle.update();
        }

        self.particles.retain(Particle::is_alive);
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        for particle in self.particles.iter() {
            particle.draw(surface)?;
        }

        Ok(())
    }

    pub fn is_exhausted(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.is_exhausted()
    }

    pub fn origin(&self) -> (f64, f64) {
        self.origin
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}
