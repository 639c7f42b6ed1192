use std::fmt;

use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
use shared::{
    evade, Celebration, Config, ConfigError, Fireworks, HeartSprite, Stage, Surface,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement};

use super::BackgroundMusic;
use crate::{
    draw::CanvasSurface, ACCEPT_ID, CANVAS_ID, CELEBRATION_ID, DECLINE_ID, MUSIC_ID,
    QUESTION_IDS, SHY_TEXT_ID,
};

/// Errors concerning the [`App`].
#[derive(Debug)]
pub struct AppError(String);

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ConfigError> for AppError {
    fn from(config_error: ConfigError) -> Self {
        AppError(format!("ConfigError: {config_error}"))
    }
}

impl From<serde_wasm_bindgen::Error> for AppError {
    fn from(error: serde_wasm_bindgen::Error) -> Self {
        AppError(format!("ConfigError: {error}"))
    }
}

impl From<AppError> for JsValue {
    fn from(app_error: AppError) -> Self {
        JsValue::from_str(&app_error.0)
    }
}

/// The page elements the app drives. The first four are required.
pub struct Page {
    pub decline: HtmlElement,
    pub accept: HtmlElement,
    pub celebration: Element,
    pub canvas: HtmlCanvasElement,
    pub shy_text: Option<HtmlElement>,
    pub question: Vec<HtmlElement>,
    pub music: Option<BackgroundMusic>,
}

impl Page {
    pub fn locate(document: &Document) -> Result<Page, JsValue> {
        let required = |id: &str| {
            document
                .get_element_by_id(id)
                .ok_or_else(|| AppError(format!("missing #{id} element")))
        };
        let optional = |id: &str| {
            document
                .get_element_by_id(id)
                .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        };

        Ok(Page {
            decline: required(DECLINE_ID)?.dyn_into()?,
            accept: required(ACCEPT_ID)?.dyn_into()?,
            celebration: required(CELEBRATION_ID)?,
            canvas: required(CANVAS_ID)?.dyn_into()?,
            shy_text: optional(SHY_TEXT_ID),
            question: QUESTION_IDS.iter().copied().filter_map(optional).collect(),
            music: document
                .get_element_by_id(MUSIC_ID)
                .and_then(|element| element.dyn_into().ok())
                .map(BackgroundMusic::new),
        })
    }
}

pub struct App {
    pub config: Config,
    celebration: Celebration,
    fireworks: Fireworks,
    surface: CanvasSurface,
    rng: ChaCha8Rng,
}

impl App {
    pub fn new(config: Config, surface: CanvasSurface, seed: u64) -> App {
        App {
            celebration: Celebration::new(&config),
            fireworks: Fireworks::new(config.fireworks.clone(), seed),
            surface,
            rng: ChaCha8Rng::seed_from_u64(seed.rotate_left(32)),
            config,
        }
    }

    pub fn tick(&mut self) -> Result<(), JsValue> {
        self.fireworks.tick(&mut self.surface)
    }

    pub fn accept<S: Stage>(&mut self, stage: &mut S) -> Result<bool, S::Error> {
        self.celebration.accept(stage)
    }

    /// Launches one burst somewhere in the top half of the canvas.
    pub fn launch(&mut self) {
        let size = self.surface.size();
        self.fireworks.launch(size);
    }

    /// Where the decline control should jump to next.
    pub fn evade(&mut self, viewport: (f64, f64), control: (f64, f64)) -> (f64, f64) {
        evade(viewport, control, self.config.decline.padding, &mut self.rng)
    }

    pub fn sample_heart(&mut self) -> HeartSprite {
        HeartSprite::sample(&self.config.hearts, &mut self.rng)
    }
}
