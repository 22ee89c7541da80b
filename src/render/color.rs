//! Colors and the palette that maps traversal states to them

use crate::graph::EdgeState;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
#[error("Invalid color {0:?}, expected #rrggbb")]
pub struct ColorParseError(pub String);

/// RGB color, written as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub const GREEN: Color = Color::rgb(0x82, 0xa7, 0x62);
    pub const YELLOW: Color = Color::rgb(0xe1, 0xaf, 0x4c);
    pub const BLUE: Color = Color::rgb(0x4b, 0x6a, 0x91);
    pub const WHITE: Color = Color::rgb(0xe5, 0xe9, 0xf0);
    pub const CANVAS: Color = Color::rgb(0x33, 0x39, 0x47);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorParseError(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Colors used for each kind of draw call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Untouched elements
    pub neutral: Color,
    /// Explored vertices
    pub explored: Color,
    /// Discovery and relaxed edges, vertices whose distance just improved
    pub highlight: Color,
    /// Back and cross edges, edges under examination
    pub secondary: Color,
    /// Canvas background
    pub background: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            neutral: Color::WHITE,
            explored: Color::BLUE,
            highlight: Color::GREEN,
            secondary: Color::YELLOW,
            background: Color::CANVAS,
        }
    }
}

impl Palette {
    /// Color an edge is drawn with once it has `state`
    pub fn edge(&self, state: EdgeState) -> Color {
        match state {
            EdgeState::Unexplored => self.neutral,
            EdgeState::Discovery | EdgeState::Relaxed => self.highlight,
            EdgeState::Back | EdgeState::Cross => self.secondary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_display_and_parse() {
        assert_eq!(Color::BLUE.to_string(), "#4b6a91");
        assert_eq!("#4b6a91".parse::<Color>(), Ok(Color::BLUE));
        assert_eq!("#FFFFFF".parse::<Color>(), Ok(Color::rgb(255, 255, 255)));
    }

    #[test]
    fn test_color_parse_errors() {
        assert!("4b6a91".parse::<Color>().is_err());
        assert!("#4b6a9".parse::<Color>().is_err());
        assert!("#zzzzzz".parse::<Color>().is_err());
        assert!("#\u{e9}\u{e9}\u{e9}".parse::<Color>().is_err());
        assert!("#+1+2+3".parse::<Color>().is_err());
        assert!("#-1ffff".parse::<Color>().is_err());
    }

    #[test]
    fn test_palette_edge_colors() {
        let palette = Palette::default();
        assert_eq!(palette.edge(EdgeState::Discovery), Color::GREEN);
        assert_eq!(palette.edge(EdgeState::Relaxed), Color::GREEN);
        assert_eq!(palette.edge(EdgeState::Back), Color::YELLOW);
        assert_eq!(palette.edge(EdgeState::Cross), Color::YELLOW);
        assert_eq!(palette.edge(EdgeState::Unexplored), Color::WHITE);
    }

    #[test]
    fn test_color_serde_as_hex() {
        let json = serde_json::to_string(&Color::GREEN).unwrap();
        assert_eq!(json, "\"#82a762\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::GREEN);
    }
}
