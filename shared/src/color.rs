use std::fmt;

use data_encoding::{HEXLOWER, HEXLOWER_PERMISSIVE};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// An opaque sRGB color, written as `#rrggbb` (or the `#rgb` shorthand) in configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const HOT_PINK: Color = Color(0xff, 0x69, 0xb4);
    pub const DEEP_PINK: Color = Color(0xff, 0x14, 0x93);
    pub const WHITE: Color = Color(0xff, 0xff, 0xff);
    pub const GOLD: Color = Color(0xff, 0xd7, 0x00);
    pub const ORANGE_RED: Color = Color(0xff, 0x45, 0x00);

    /// Parses `#rrggbb` or `#rgb`, case-insensitive. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Result<Color, ConfigError> {
        let digits = hex.trim().trim_start_matches('#');

        let expanded = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
            6 => digits.to_string(),
            _ => return Err(ConfigError::InvalidColor(hex.to_string())),
        };

        match HEXLOWER_PERMISSIVE.decode(expanded.as_bytes()) {
            Ok(bytes) => Ok(Color(bytes[0], bytes[1], bytes[2])),
            Err(_) => Err(ConfigError::InvalidColor(hex.to_string())),
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{}", HEXLOWER.encode(&[self.0, self.1, self.2]))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Pink, deep pink, white, gold and orange-red.
pub fn default_palette() -> Vec<Color> {
    vec![
        Color::HOT_PINK,
        Color::DEEP_PINK,
        Color::WHITE,
        Color::GOLD,
        Color::ORANGE_RED,
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_long_and_short_forms() {
        assert_eq!(Color::from_hex("#ff69b4").unwrap(), Color::HOT_PINK);
        assert_eq!(Color::from_hex("FF1493").unwrap(), Color::DEEP_PINK);
        assert_eq!(Color::from_hex("#fff").unwrap(), Color::WHITE);
    }

    #[test]
    fn rejects_garbage() {
        assert!(Color::from_hex("#ff69b").is_err());
        assert!(Color::from_hex("#gggggg").is_err());
        assert!(Color::from_hex("").is_err());
    }

    #[test]
    fn displays_as_lowercase_hex() {
        assert_eq!(Color::GOLD.to_string(), "#ffd700");
    }
}
