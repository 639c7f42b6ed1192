use std::{cell::RefCell, rc::Rc};

use log::error;
use shared::{Deferred, Stage};
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use super::{start_hearts, App, Page};
use crate::{callbacks::FrameLoop, draw::fit_canvas, request_animation_frame, set_timeout};

/// The acceptance sequence's view of the live page.
pub struct WebStage<'a> {
    pub app: &'a Rc<RefCell<App>>,
    pub page: &'a Page,
    pub frame_loop: &'a FrameLoop,
}

impl Stage for WebStage<'_> {
    type Error = JsValue;

    fn play_music(&mut self) {
        if let Some(music) = &self.page.music {
            music.play();
        }
    }

    fn hide_question(&mut self) -> Result<(), JsValue> {
        self.page
            .question
            .iter()
            .try_for_each(|element: &HtmlElement| element.style().set_property("display", "none"))
    }

    fn reveal_celebration(&mut self) -> Result<(), JsValue> {
        self.page.celebration.class_list().remove_1("hidden")
    }

    fn fit_surface(&mut self) -> Result<(), JsValue> {
        fit_canvas(&self.page.canvas)
    }

    fn request_frame(&mut self) -> Result<(), JsValue> {
        match self.frame_loop.borrow().as_ref() {
            Some(closure) => request_animation_frame(closure).map(|_| ()),
            None => Err(JsValue::from_str("frame loop is not installed")),
        }
    }

    fn defer(&mut self, delay_ms: u32, task: Deferred) -> Result<(), JsValue> {
        let app = self.app.clone();

        set_timeout(
            move || match task {
                Deferred::OpeningBurst => app.borrow_mut().launch(),
                Deferred::StartHearts => {
                    if let Err(err) = start_hearts(&app) {
                        error!("could not start hearts: {:?}", err);
                    }
                }
            },
            delay_ms,
        )
        .map(|_| ())
    }
}
