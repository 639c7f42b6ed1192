use std::f64::consts::TAU;

use shared::{Color, Surface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::viewport;

/// The fireworks canvas. Dimensions are read from the element on every call, so a resize
/// applied directly to the element is picked up by the very next frame.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<CanvasSurface, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(CanvasSurface { canvas, context })
    }
}

impl Surface for CanvasSurface {
    type Error = JsValue;

    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn fade(&mut self, alpha: f64) -> Result<(), JsValue> {
        let (width, height) = self.size();

        self.context
            .set_fill_style(&JsValue::from_str(&format!("rgba(0, 0, 0, {alpha})")));
        self.context.fill_rect(0.0, 0.0, width, height);

        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: (f64, f64),
        radius: f64,
        color: Color,
        alpha: f64,
    ) -> Result<(), JsValue> {
        self.context.save();
        self.context.set_global_alpha(alpha);
        self.context.begin_path();
        self.context.arc(center.0, center.1, radius, 0.0, TAU)?;
        self.context
            .set_fill_style(&JsValue::from_str(&color.to_hex()));
        self.context.fill();
        self.context.restore();

        Ok(())
    }
}

/// Matches the canvas pixel size to the viewport.
pub fn fit_canvas(canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    let (width, height) = viewport()?;

    canvas.set_width(width);
    canvas.set_height(height);

    Ok(())
}
