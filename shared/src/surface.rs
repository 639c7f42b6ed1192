use crate::Color;

/// A 2D drawing surface the fireworks are painted onto.
///
/// The browser build implements this over a `CanvasRenderingContext2d`; tests use an
/// in-memory recorder.
pub trait Surface {
    type Error;

    /// Current pixel dimensions `(width, height)`.
    fn size(&self) -> (f64, f64);

    fn resize(&mut self, width: u32, height: u32);

    /// Paints translucent black over the whole surface, leaving motion trails instead of a hard clear.
    fn fade(&mut self, alpha: f64) -> Result<(), Self::Error>;

    /// Fills a stroke-free circle, composited at `alpha`.
    fn fill_circle(
        &mut self,
        center: (f64, f64),
        radius: f64,
        color: Color,
        alpha: f64,
    ) -> Result<(), Self::Error>;
}
