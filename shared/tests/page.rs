//! Drives the shared logic through a simulated host page: timers, frame requests, viewport.

use std::convert::Infallible;

use pretty_assertions::assert_eq;
use shared::{Celebration, Color, Config, Deferred, Fireworks, Phase, Stage, Surface};

#[derive(Default)]
struct Canvas {
    width: u32,
    height: u32,
    fades: Vec<(f64, f64)>,
    circles: usize,
}

impl Surface for Canvas {
    type Error = Infallible;

    fn size(&self) -> (f64, f64) {
        (self.width as f64, self.height as f64)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn fade(&mut self, _alpha: f64) -> Result<(), Infallible> {
        let size = self.size();
        self.fades.push(size);
        Ok(())
    }

    fn fill_circle(&mut self, _: (f64, f64), _: f64, _: Color, _: f64) -> Result<(), Infallible> {
        self.circles += 1;
        Ok(())
    }
}

struct Page {
    viewport: (u32, u32),
    canvas: Canvas,
    question_visible: bool,
    celebration_visible: bool,
    music_attempts: usize,
    pending_frames: usize,
    timers: Vec<(u32, Deferred)>,
    hearts_started: bool,
    clock_ms: u32,
}

impl Page {
    fn new(viewport: (u32, u32)) -> Page {
        Page {
            viewport,
            canvas: Canvas::default(),
            question_visible: true,
            celebration_visible: false,
            music_attempts: 0,
            pending_frames: 0,
            timers: Vec::new(),
            hearts_started: false,
            clock_ms: 0,
        }
    }

    /// What the window `resize` listener does.
    fn resize_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
        self.canvas.resize(width, height);
    }

    /// Runs one display frame if one was requested; the loop always requests the next.
    fn run_frame(&mut self, fireworks: &mut Fireworks) {
        if self.pending_frames > 0 {
            self.pending_frames -= 1;
            fireworks.tick(&mut self.canvas).unwrap();
            self.pending_frames += 1;
        }
    }

    /// Fires every timer due by `ms`.
    fn advance(&mut self, ms: u32, fireworks: &mut Fireworks) {
        self.clock_ms += ms;
        let clock = self.clock_ms;
        let (due, later): (Vec<_>, Vec<_>) =
            self.timers.drain(..).partition(|(at, _)| *at <= clock);
        self.timers = later;

        for (_, task) in due {
            match task {
                Deferred::OpeningBurst => fireworks.launch(self.canvas.size()),
                Deferred::StartHearts => self.hearts_started = true,
            }
        }
    }
}

impl Stage for Page {
    type Error = Infallible;

    fn play_music(&mut self) {
        self.music_attempts += 1;
    }

    fn hide_question(&mut self) -> Result<(), Infallible> {
        self.question_visible = false;
        Ok(())
    }

    fn reveal_celebration(&mut self) -> Result<(), Infallible> {
        self.celebration_visible = true;
        Ok(())
    }

    fn fit_surface(&mut self) -> Result<(), Infallible> {
        let (width, height) = self.viewport;
        self.canvas.resize(width, height);
        Ok(())
    }

    fn request_frame(&mut self) -> Result<(), Infallible> {
        self.pending_frames += 1;
        Ok(())
    }

    fn defer(&mut self, delay_ms: u32, task: Deferred) -> Result<(), Infallible> {
        self.timers.push((self.clock_ms + delay_ms, task));
        Ok(())
    }
}

fn quiet_config() -> Config {
    let mut config = Config::default();
    config.fireworks.spawn_chance = 0.0;
    config
}

#[test]
fn accept_reveals_and_arms_in_one_turn() {
    let config = quiet_config();
    let mut celebration = Celebration::new(&config);
    let mut page = Page::new((800, 600));

    assert!(celebration.accept(&mut page).unwrap());

    assert!(page.celebration_visible);
    assert!(!page.question_visible);
    assert_eq!(page.music_attempts, 1);
    assert_eq!(page.pending_frames, 1);
    assert_eq!(page.canvas.size(), (800.0, 600.0));
    assert_eq!(celebration.phase(), Phase::Running);
}

#[test]
fn repeated_accept_does_not_double_arm() {
    let config = quiet_config();
    let mut celebration = Celebration::new(&config);
    let mut page = Page::new((800, 600));

    celebration.accept(&mut page).unwrap();
    let timers = page.timers.len();

    assert!(!celebration.accept(&mut page).unwrap());
    assert!(!celebration.accept(&mut page).unwrap());

    assert_eq!(page.pending_frames, 1);
    assert_eq!(page.timers.len(), timers);
    assert_eq!(page.music_attempts, 1);
}

#[test]
fn opening_bursts_are_staggered_and_hearts_follow() {
    let config = quiet_config();
    let mut celebration = Celebration::new(&config);
    let mut fireworks = Fireworks::new(config.fireworks.clone(), 3);
    let mut page = Page::new((800, 600));

    celebration.accept(&mut page).unwrap();

    page.advance(0, &mut fireworks);
    assert_eq!(fireworks.bursts().len(), 1);

    page.advance(300, &mut fireworks);
    assert_eq!(fireworks.bursts().len(), 2);

    page.advance(900, &mut fireworks);
    assert_eq!(fireworks.bursts().len(), 5);
    assert!(!page.hearts_started);

    page.advance(800, &mut fireworks);
    assert!(page.hearts_started);
    assert!(page.timers.is_empty());

    for burst in fireworks.bursts() {
        let (x, y) = burst.origin();
        assert!((0.0..800.0).contains(&x));
        assert!((0.0..300.0).contains(&y));
    }
}

#[test]
fn resize_lands_before_the_next_frame() {
    let config = quiet_config();
    let mut celebration = Celebration::new(&config);
    let mut fireworks = Fireworks::new(config.fireworks.clone(), 4);
    let mut page = Page::new((800, 600));

    celebration.accept(&mut page).unwrap();
    page.run_frame(&mut fireworks);
    assert_eq!(page.canvas.fades, vec![(800.0, 600.0)]);

    page.resize_viewport(1200, 900);
    assert_eq!((page.canvas.width, page.canvas.height), (1200, 900));

    page.run_frame(&mut fireworks);
    assert_eq!(page.canvas.fades, vec![(800.0, 600.0), (1200.0, 900.0)]);
}

#[test]
fn loop_keeps_running_after_the_sky_is_empty() {
    let config = quiet_config();
    let mut celebration = Celebration::new(&config);
    let mut fireworks = Fireworks::new(config.fireworks.clone(), 5);
    let mut page = Page::new((640, 480));

    celebration.accept(&mut page).unwrap();
    page.advance(1200, &mut fireworks);
    assert_eq!(fireworks.particle_count(), 250);

    let mut previous = fireworks.particle_count();
    for _ in 0..100 {
        page.run_frame(&mut fireworks);
        assert!(fireworks.particle_count() <= previous);
        previous = fireworks.particle_count();
    }

    assert!(fireworks.bursts().is_empty());
    assert_eq!(page.pending_frames, 1);

    page.run_frame(&mut fireworks);
    assert_eq!(fireworks.frame(), 101);
    assert!(page.canvas.circles > 0);
}
