mod app;
mod callbacks;
mod config;
mod draw;
mod logger;

use std::{cell::RefCell, rc::Rc};

use app::{App, Page};
use callbacks::FrameLoop;
use draw::CanvasSurface;
use log::{error, info};
use shared::Config;
use wasm_bindgen::{prelude::*, JsCast};

pub const DECLINE_ID: &str = "noBtn";
pub const ACCEPT_ID: &str = "yesBtn";
pub const CELEBRATION_ID: &str = "celebration-container";
pub const MUSIC_ID: &str = "background-music";
pub const CANVAS_ID: &str = "fireworks-canvas";
pub const SHY_TEXT_ID: &str = "shyText";
/// Hidden once the question is answered.
pub const QUESTION_IDS: [&str; 4] = ["topGif", "btnGroup", "questionText", SHY_TEXT_ID];

fn window() -> web_sys::Window {
    web_sys::window().expect("no global `window` exists")
}

fn document() -> web_sys::Document {
    window()
        .document()
        .expect("should have a document on window")
}

fn request_animation_frame(f: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window().request_animation_frame(f.as_ref().unchecked_ref())
}

/// Runs `f` once after `delay_ms`.
fn set_timeout(f: impl FnOnce() + 'static, delay_ms: u32) -> Result<i32, JsValue> {
    let callback = Closure::once_into_js(f);

    window().set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay_ms as i32,
    )
}

/// Current viewport size in CSS pixels.
fn viewport() -> Result<(u32, u32), JsValue> {
    let width = window().inner_width()?.as_f64().unwrap_or_default();
    let height = window().inner_height()?.as_f64().unwrap_or_default();

    Ok((width as u32, height as u32))
}

fn seed() -> u64 {
    let now = window()
        .performance()
        .map(|performance| performance.now())
        .unwrap_or_default();

    now.to_bits() ^ (js_sys::Math::random() * u64::MAX as f64) as u64
}

/// The configuration the page runs with when nothing overrides it.
#[wasm_bindgen(js_name = defaultConfig)]
pub fn default_config() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&Config::default()).map_err(Into::into)
}

#[wasm_bindgen(start)]
fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logger::init();

    let page = Rc::new(Page::locate(&document())?);
    let config = config::load_config(&page.canvas);
    log::set_max_level(config.log_level);

    let surface = CanvasSurface::new(page.canvas.clone())?;
    let app = Rc::new(RefCell::new(App::new(config, surface, seed())));

    let frame_loop: FrameLoop = Rc::new(RefCell::new(None));

    {
        let app = app.clone();
        let next_frame = frame_loop.clone();

        *frame_loop.borrow_mut() = Some(Closure::new(move || {
            if let Err(err) = app.borrow_mut().tick() {
                error!("frame failed: {:?}", err);
            }

            if let Some(closure) = next_frame.borrow().as_ref() {
                if let Err(err) = request_animation_frame(closure) {
                    error!("could not schedule the next frame: {:?}", err);
                }
            }
        }));
    }

    for event in ["mouseover", "touchstart", "click"] {
        let app = app.clone();
        let target = page.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_: web_sys::Event| {
            callbacks::on_decline(&app, &target);
        });
        page.decline
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let app = app.clone();
        let target = page.clone();
        let frame_loop = frame_loop.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_: web_sys::MouseEvent| {
            callbacks::on_accept(&app, &target, &frame_loop);
        });
        page.accept
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let page = page.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_: JsValue| {
            callbacks::on_resize(&page);
        });
        window().add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    info!("page ready");

    Ok(())
}
