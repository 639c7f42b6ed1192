use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{default_palette, Color};

/// Errors raised while loading or validating a [`Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid color {0:?}, expected #rrggbb or #rgb")]
    InvalidColor(String),

    #[error("palette must contain at least one color")]
    EmptyPalette,

    #[error("{field} must be {expected}, got {value}")]
    OutOfRange {
        field: &'static str,
        expected: &'static str,
        value: f64,
    },
}

/// Page tunables. Every field has a default, so an empty JSON object is a valid configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub fireworks: FireworksConfig,
    pub hearts: HeartsConfig,
    pub decline: DeclineConfig,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            fireworks: FireworksConfig::default(),
            hearts: HeartsConfig::default(),
            decline: DeclineConfig::default(),
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Config, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.fireworks.validate()?;
        self.hearts.validate()?;

        if !(self.decline.padding >= 0.0) {
            return Err(out_of_range(
                "decline.padding",
                "non-negative",
                self.decline.padding,
            ));
        }

        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FireworksConfig {
    pub particles_per_burst: usize,
    /// Chance per frame of launching an extra burst.
    pub spawn_chance: f64,
    /// Alpha of the black fill painted over the canvas each frame.
    pub trail_alpha: f64,
    pub friction: f64,
    pub gravity: f64,
    /// Opacity lost per tick.
    pub fade: f64,
    /// Half-width of the uniform initial velocity range, per axis.
    pub spread: f64,
    pub radius: f64,
    pub palette: Vec<Color>,
    pub opening_bursts: usize,
    pub opening_stagger_ms: u32,
}

impl Default for FireworksConfig {
    fn default() -> Self {
        FireworksConfig {
            particles_per_burst: 50,
            spawn_chance: 0.05,
            trail_alpha: 0.1,
            friction: 0.96,
            gravity: 0.05,
            fade: 0.01,
            spread: 4.0,
            radius: 3.0,
            palette: default_palette(),
            opening_bursts: 5,
            opening_stagger_ms: 300,
        }
    }
}

impl FireworksConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }

        if self.particles_per_burst == 0 {
            return Err(out_of_range(
                "fireworks.particlesPerBurst",
                "at least 1",
                0.0,
            ));
        }

        check_unit("fireworks.spawnChance", self.spawn_chance)?;
        check_unit("fireworks.trailAlpha", self.trail_alpha)?;
        check_positive_unit("fireworks.friction", self.friction)?;
        check_positive_unit("fireworks.fade", self.fade)?;

        if !self.gravity.is_finite() {
            return Err(out_of_range("fireworks.gravity", "finite", self.gravity));
        }

        if !(self.spread >= 0.0 && self.spread.is_finite()) {
            return Err(out_of_range("fireworks.spread", "non-negative", self.spread));
        }

        if !(self.radius > 0.0 && self.radius.is_finite()) {
            return Err(out_of_range("fireworks.radius", "positive", self.radius));
        }

        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeartsConfig {
    /// Delay between acceptance and the first heart.
    pub delay_ms: u32,
    pub interval_ms: u32,
    /// Time before a heart element is removed from the page.
    pub lifetime_ms: u32,
    pub min_size_px: f64,
    pub size_range_px: f64,
    pub min_duration_s: f64,
    pub duration_range_s: f64,
}

impl Default for HeartsConfig {
    fn default() -> Self {
        HeartsConfig {
            delay_ms: 2000,
            interval_ms: 500,
            lifetime_ms: 8000,
            min_size_px: 20.0,
            size_range_px: 20.0,
            min_duration_s: 4.0,
            duration_range_s: 3.0,
        }
    }
}

impl HeartsConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.interval_ms == 0 {
            return Err(out_of_range("hearts.intervalMs", "at least 1", 0.0));
        }

        for (field, value) in [
            ("hearts.minSizePx", self.min_size_px),
            ("hearts.sizeRangePx", self.size_range_px),
            ("hearts.minDurationS", self.min_duration_s),
            ("hearts.durationRangeS", self.duration_range_s),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(out_of_range(field, "non-negative", value));
            }
        }

        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeclineConfig {
    /// Minimum distance kept between the evading control and the top-left viewport edges.
    pub padding: f64,
}

impl Default for DeclineConfig {
    fn default() -> Self {
        DeclineConfig { padding: 50.0 }
    }
}

fn out_of_range(field: &'static str, expected: &'static str, value: f64) -> ConfigError {
    ConfigError::OutOfRange {
        field,
        expected,
        value,
    }
}

fn check_unit(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(out_of_range(field, "within [0, 1]", value))
    }
}

fn check_positive_unit(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(out_of_range(field, "within (0, 1]", value))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn defaults_match_the_page() {
        let config = Config::default();

        assert_eq!(config.fireworks.particles_per_burst, 50);
        assert_eq!(config.fireworks.spawn_chance, 0.05);
        assert_eq!(config.fireworks.friction, 0.96);
        assert_eq!(config.fireworks.gravity, 0.05);
        assert_eq!(config.fireworks.fade, 0.01);
        assert_eq!(config.fireworks.palette.len(), 5);
        assert_eq!(config.hearts.delay_ms, 2000);
        assert_eq!(config.hearts.interval_ms, 500);
        assert_eq!(config.decline.padding, 50.0);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let config = Config::from_json(
            r##"{
                "fireworks": { "spawnChance": 0.2, "palette": ["#00ff00", "#00f"] },
                "logLevel": "debug"
            }"##,
        )
        .unwrap();

        assert_eq!(config.fireworks.spawn_chance, 0.2);
        assert_eq!(
            config.fireworks.palette,
            vec![Color(0, 0xff, 0), Color(0, 0, 0xff)]
        );
        assert_eq!(config.fireworks.friction, 0.96);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            Config::from_json(r#"{ "fireworks": { "palette": [] } }"#),
            Err(ConfigError::EmptyPalette)
        ));
        assert!(matches!(
            Config::from_json(r#"{ "fireworks": { "spawnChance": 1.5 } }"#),
            Err(ConfigError::OutOfRange { field: "fireworks.spawnChance", .. })
        ));
        assert!(matches!(
            Config::from_json(r#"{ "fireworks": { "fade": 0 } }"#),
            Err(ConfigError::OutOfRange { field: "fireworks.fade", .. })
        ));
        assert!(matches!(
            Config::from_json(r#"{ "hearts": { "intervalMs": 0 } }"#),
            Err(ConfigError::OutOfRange { field: "hearts.intervalMs", .. })
        ));
        assert!(matches!(
            Config::from_json(r##"{ "fireworks": { "palette": ["#zzz"] } }"##),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(Config::from_json("[1,"), Err(ConfigError::Json(_))));
    }
}
