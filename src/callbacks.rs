use std::{cell::RefCell, rc::Rc};

use log::{debug, error};
use wasm_bindgen::prelude::*;

use crate::{
    app::{App, Page, WebStage},
    draw::fit_canvas,
    viewport,
};

/// Slot for the self-rescheduling animation frame closure.
pub type FrameLoop = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub fn on_resize(page: &Rc<Page>) {
    if let Err(err) = fit_canvas(&page.canvas) {
        error!("could not resize canvas: {:?}", err);
    }
}

pub fn on_decline(app: &Rc<RefCell<App>>, page: &Rc<Page>) {
    if let Err(err) = move_decline(app, page) {
        error!("could not move decline button: {:?}", err);
    }
}

fn move_decline(app: &Rc<RefCell<App>>, page: &Page) -> Result<(), JsValue> {
    let (width, height) = viewport()?;
    let control = (
        page.decline.offset_width() as f64,
        page.decline.offset_height() as f64,
    );

    let (left, top) = app
        .borrow_mut()
        .evade((width as f64, height as f64), control);

    let style = page.decline.style();
    style.set_property("position", "fixed")?;
    style.set_property("left", &format!("{left}px"))?;
    style.set_property("top", &format!("{top}px"))?;

    if let Some(shy_text) = &page.shy_text {
        shy_text.style().set_property("opacity", "1")?;
    }

    Ok(())
}

pub fn on_accept(app: &Rc<RefCell<App>>, page: &Rc<Page>, frame_loop: &FrameLoop) {
    let mut stage = WebStage {
        app,
        page,
        frame_loop,
    };

    let result = app.borrow_mut().accept(&mut stage);

    match result {
        Ok(true) => debug!("celebration armed"),
        Ok(false) => (),
        Err(err) => error!("celebration failed to start: {:?}", err),
    }
}
