use rand::{seq::SliceRandom, Rng};

use crate::{Color, FireworksConfig, Surface};

/// A single decaying spark.
///
/// Opacity is tracked as an age counter: after `n` updates the opacity is `1 - n * fade`, and
/// the particle is spent once `n` reaches `ceil(1 / fade)`, so accumulated rounding can never
/// keep it faintly alive.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    position: (f64, f64),
    velocity: (f64, f64),
    color: Color,
    friction: f64,
    gravity: f64,
    fade: f64,
    radius: f64,
    age: u32,
    lifespan: u32,
}

impl Particle {
    pub fn new(
        position: (f64, f64),
        velocity: (f64, f64),
        color: Color,
        config: &FireworksConfig,
    ) -> Particle {
        Particle {
            position,
            velocity,
            color,
            friction: config.friction,
            gravity: config.gravity,
            fade: config.fade,
            radius: config.radius,
            age: 0,
            lifespan: (1.0 / config.fade).ceil().max(1.0) as u32,
        }
    }

    /// Spawns a particle at `origin` with a uniformly random velocity in
    /// `[-spread, spread]` per axis and a random palette color.
    pub fn scatter(origin: (f64, f64), config: &FireworksConfig, rng: &mut impl Rng) -> Particle {
        let velocity = (
            (rng.gen::<f64>() - 0.5) * 2.0 * config.spread,
            (rng.gen::<f64>() - 0.5) * 2.0 * config.spread,
        );
        let color = config
            .palette
            .choose(rng)
            .copied()
            .unwrap_or(Color::WHITE);

        Particle::new(origin, velocity, color, config)
    }

    /// Advances one tick: friction, then gravity, then integration, then fading.
    pub fn update(&mut self) {
        self.velocity.0 *= self.friction;
        self.velocity.1 *= self.friction;
        self.velocity.1 += self.gravity;
        self.position.0 += self.velocity.0;
        self.position.1 += self.velocity.1;
        self.age = self.age.saturating_add(1);
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        surface.fill_circle(self.position, self.radius, self.color, self.alpha())
    }

    pub fn alpha(&self) -> f64 {
        if self.age >= self.lifespan {
            0.0
        } else {
            (1.0 - self.age as f64 * self.fade).clamp(0.0, 1.0)
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alpha() > 0.0
    }

    pub fn position(&self) -> (f64, f64) {
        self.position
    }

    pub fn velocity(&self) -> (f64, f64) {
        self.velocity
    }

    pub fn color(&self) -> Color {
        self.color
    }
}
