use std::{cell::RefCell, rc::Rc};

use log::{error, info};
use shared::{FLOAT_STYLE_ID, FLOAT_UP_KEYFRAMES, HEART_GLYPH};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::HtmlElement;

use super::App;
use crate::{document, set_timeout, window};

/// Starts the endless stream of floating hearts.
pub fn start_hearts(app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
    install_float_style()?;

    let interval_ms = app.borrow().config.hearts.interval_ms;
    let closure = {
        let app = app.clone();

        Closure::<dyn FnMut()>::new(move || {
            if let Err(err) = spawn_heart(&app) {
                error!("could not spawn heart: {:?}", err);
            }
        })
    };

    window().set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        interval_ms as i32,
    )?;
    closure.forget();

    info!("hearts every {}ms", interval_ms);

    Ok(())
}

fn install_float_style() -> Result<(), JsValue> {
    let document = document();

    if document.get_element_by_id(FLOAT_STYLE_ID).is_none() {
        let style = document.create_element("style")?;
        style.set_id(FLOAT_STYLE_ID);
        style.set_inner_html(FLOAT_UP_KEYFRAMES);

        document
            .head()
            .ok_or_else(|| JsValue::from_str("document has no head"))?
            .append_child(&style)?;
    }

    Ok(())
}

fn spawn_heart(app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
    let (heart, lifetime_ms) = {
        let mut app = app.borrow_mut();
        (app.sample_heart(), app.config.hearts.lifetime_ms)
    };

    let element = document()
        .create_element("div")?
        .dyn_into::<HtmlElement>()?;
    element.set_inner_html(HEART_GLYPH);

    let style = element.style();
    style.set_property("position", "fixed")?;
    style.set_property("left", &heart.left())?;
    style.set_property("bottom", "-50px")?;
    style.set_property("font-size", &heart.font_size())?;
    style.set_property("animation", &heart.animation())?;
    style.set_property("opacity", &heart.opacity.to_string())?;
    style.set_property("z-index", "999")?;

    document()
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?
        .append_child(&element)?;

    set_timeout(move || element.remove(), lifetime_ms)?;

    Ok(())
}
