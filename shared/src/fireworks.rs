use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{Burst, FireworksConfig, Surface};

/// The per-frame fireworks driver. Owns the active bursts; nothing outside mutates them except
/// through [`Fireworks::launch`].
pub struct Fireworks {
    bursts: Vec<Burst>,
    config: FireworksConfig,
    rng: ChaCha8Rng,
    frame: u64,
}

impl Fireworks {
    pub fn new(config: FireworksConfig, seed: u64) -> Fireworks {
        Fireworks {
            bursts: Vec::new(),
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            frame: 0,
        }
    }

    /// Runs one frame: fade, maybe launch, advance and draw, evict exhausted bursts.
    ///
    /// Rescheduling is left to the caller.
    pub fn tick<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        let size = surface.size();

        surface.fade(self.config.trail_alpha)?;

        if self.rng.gen::<f64>() < self.config.spawn_chance {
            self.launch(size);
        }

        for burst in self.bursts.iter_mut() {
            burst.update();
            burst.draw(surface)?;
        }

        let before = self.bursts.len();
        self.bursts.retain(|burst| !burst.is_exhausted());

        if self.bursts.len() < before {
            trace!(
                "frame {}: evicted {} bursts, {} live",
                self.frame,
                before - self.bursts.len(),
                self.bursts.len()
            );
        }

        self.frame += 1;

        Ok(())
    }

    /// Launches a burst at a random point: anywhere across the width, within the top half.
    pub fn launch(&mut self, (width, height): (f64, f64)) {
        let origin = (
            self.rng.gen::<f64>() * width,
            self.rng.gen::<f64>() * (height / 2.0),
        );

        self.launch_at(origin);
    }

    pub(crate) fn launch_at(&mut self, origin: (f64, f64)) {
        debug!("launching burst at ({:.0}, {:.0})", origin.0, origin.1);

        let burst = Burst::new(origin, &self.config, &mut self.rng);
        self.bursts.push(burst);
    }

    pub fn bursts(&self) -> &[Burst] {
        &self.bursts
    }

    pub fn particle_count(&self) -> usize {
        self.bursts.iter().map(Burst::len).sum()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn config(&self) -> &FireworksConfig {
        &self.config
    }
}
