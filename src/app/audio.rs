use futures::TryFutureExt;
use log::{debug, warn};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlAudioElement;

/// The page's background track.
#[derive(Clone, Debug)]
pub struct BackgroundMusic {
    element: HtmlAudioElement,
}

impl BackgroundMusic {
    pub fn new(element: HtmlAudioElement) -> BackgroundMusic {
        BackgroundMusic { element }
    }

    /// Starts playback without waiting on it. A rejected play (usually the autoplay policy)
    /// is logged and otherwise ignored.
    pub fn play(&self) {
        match self.element.play() {
            Ok(promise) => spawn_local(
                JsFuture::from(promise)
                    .map_ok(|_| debug!("background music playing"))
                    .unwrap_or_else(|err| warn!("audio autoplay blocked: {:?}", err)),
            ),
            Err(err) => warn!("audio playback failed: {:?}", err),
        }
    }
}
