use log::{debug, warn};
use shared::Config;
use wasm_bindgen::JsValue;
use web_sys::HtmlCanvasElement;

use crate::{app::AppError, window};

/// Name of the optional global object holding configuration overrides.
pub const CONFIG_GLOBAL: &str = "valentineConfig";

/// Loads the page configuration, falling back to defaults when it is missing or invalid.
///
/// `window.valentineConfig` wins over the canvas `data-config` attribute.
pub fn load_config(canvas: &HtmlCanvasElement) -> Config {
    match read_config(canvas) {
        Ok(config) => {
            debug!("configuration: {:?}", config);
            config
        }
        Err(err) => {
            warn!("{}, using defaults", err);
            Config::default()
        }
    }
}

fn read_config(canvas: &HtmlCanvasElement) -> Result<Config, AppError> {
    let global = js_sys::Reflect::get(&window(), &JsValue::from_str(CONFIG_GLOBAL))
        .unwrap_or(JsValue::UNDEFINED);

    if !global.is_undefined() && !global.is_null() {
        let config: Config = serde_wasm_bindgen::from_value(global)?;
        config.validate()?;
        return Ok(config);
    }

    match canvas.dataset().get("config") {
        Some(json) => Ok(Config::from_json(&json)?),
        None => Ok(Config::default()),
    }
}
