use rand::Rng;

use crate::HeartsConfig;

pub const HEART_GLYPH: &str = "❤️";
pub const FLOAT_STYLE_ID: &str = "float-style";

/// Keyframes every heart animates along: straight up past the top edge with one full turn.
pub const FLOAT_UP_KEYFRAMES: &str = "
@keyframes floatUp {
    to {
        bottom: 110vh;
        transform: rotate(360deg);
    }
}
";

/// Randomised appearance of one floating heart.
#[derive(Clone, Debug, PartialEq)]
pub struct HeartSprite {
    /// Horizontal position, in viewport-width percent.
    pub left_vw: f64,
    pub font_size_px: f64,
    pub duration_s: f64,
    pub opacity: f64,
}

impl HeartSprite {
    pub fn sample(config: &HeartsConfig, rng: &mut impl Rng) -> HeartSprite {
        HeartSprite {
            left_vw: rng.gen::<f64>() * 100.0,
            font_size_px: config.min_size_px + rng.gen::<f64>() * config.size_range_px,
            duration_s: config.min_duration_s + rng.gen::<f64>() * config.duration_range_s,
            opacity: rng.gen::<f64>(),
        }
    }

    pub fn left(&self) -> String {
        format!("{}vw", self.left_vw)
    }

    pub fn font_size(&self) -> String {
        format!("{}px", self.font_size_px)
    }

    pub fn animation(&self) -> String {
        format!("floatUp {}s linear forwards", self.duration_s)
    }
}
