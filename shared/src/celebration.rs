use log::{info, warn};

use crate::Config;

/// Work the acceptance sequence hands to the host's timers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Deferred {
    OpeningBurst,
    StartHearts,
}

/// Side effects of accepting, provided by the host page.
pub trait Stage {
    type Error;

    /// Starts background music. Playback failures are the implementor's to log and swallow.
    fn play_music(&mut self);

    fn hide_question(&mut self) -> Result<(), Self::Error>;

    fn reveal_celebration(&mut self) -> Result<(), Self::Error>;

    /// Sizes the drawing surface to the viewport.
    fn fit_surface(&mut self) -> Result<(), Self::Error>;

    /// Arms the animation loop for the next display frame.
    fn request_frame(&mut self) -> Result<(), Self::Error>;

    fn defer(&mut self, delay_ms: u32, task: Deferred) -> Result<(), Self::Error>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
}

pub struct Celebration {
    phase: Phase,
    opening_bursts: usize,
    opening_stagger_ms: u32,
    hearts_delay_ms: u32,
}

impl Celebration {
    pub fn new(config: &Config) -> Celebration {
        Celebration {
            phase: Phase::Idle,
            opening_bursts: config.fireworks.opening_bursts,
            opening_stagger_ms: config.fireworks.opening_stagger_ms,
            hearts_delay_ms: config.hearts.delay_ms,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Runs the acceptance sequence. Only the first call has any effect; it returns `true`.
    ///
    /// The phase flips to [`Phase::Running`] before any effect runs, so a failing effect
    /// cannot leave the page able to arm a second loop.
    pub fn accept<S: Stage>(&mut self, stage: &mut S) -> Result<bool, S::Error> {
        if self.phase == Phase::Running {
            warn!("already celebrating, ignoring repeated accept");
            return Ok(false);
        }

        self.phase = Phase::Running;
        info!("accepted, starting celebration");

        stage.play_music();
        stage.hide_question()?;
        stage.reveal_celebration()?;
        stage.fit_surface()?;
        stage.request_frame()?;

        let mut delay = 0u32;
        for _ in 0..self.opening_bursts {
            stage.defer(delay, Deferred::OpeningBurst)?;
            delay = delay.saturating_add(self.opening_stagger_ms);
        }

        stage.defer(self.hearts_delay_ms, Deferred::StartHearts)?;

        Ok(true)
    }
}
