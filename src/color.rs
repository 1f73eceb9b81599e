use std::fmt;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::{PaintError, PaintResult};

/// An opaque RGB color, formatted as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from wide integers, rejecting anything outside 0..=255.
    pub fn from_channels(r: i64, g: i64, b: i64) -> PaintResult<Self> {
        Ok(Self {
            r: checked_channel('R', r)?,
            g: checked_channel('G', g)?,
            b: checked_channel('B', b)?,
        })
    }

    /// Parse the three RGB text fields of the toolbar.
    pub fn from_text(r: &str, g: &str, b: &str) -> PaintResult<Self> {
        Self::from_channels(
            parse_channel('R', r)?,
            parse_channel('G', g)?,
            parse_channel('B', b)?,
        )
    }

    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn parse_hex(text: &str) -> PaintResult<Self> {
        let digits = text.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(PaintError::InvalidHexColor(text.to_owned()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| PaintError::InvalidHexColor(text.to_owned()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

fn parse_channel(channel: char, text: &str) -> PaintResult<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| PaintError::InvalidChannelText {
            channel,
            text: text.to_owned(),
        })
}

fn checked_channel(channel: char, value: i64) -> PaintResult<u8> {
    u8::try_from(value).map_err(|_| PaintError::ChannelOutOfRange { channel, value })
}

impl Default for Rgb {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Rgb> for Color32 {
    fn from(rgb: Rgb) -> Self {
        Color32::from_rgb(rgb.r, rgb.g, rgb.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for String {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hex()
    }
}

impl TryFrom<String> for Rgb {
    type Error = PaintError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&text)
    }
}
