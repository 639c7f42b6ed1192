use rand::Rng;

/// Picks a new top-left corner for the decline control, somewhere in the viewport but never
/// closer than `padding` to the top or left edge.
pub fn evade(
    (viewport_width, viewport_height): (f64, f64),
    (control_width, control_height): (f64, f64),
    padding: f64,
    rng: &mut impl Rng,
) -> (f64, f64) {
    let left = rng.gen::<f64>() * (viewport_width - control_width - padding);
    let top = rng.gen::<f64>() * (viewport_height - control_height - padding);

    (left.max(padding), top.max(padding))
}
