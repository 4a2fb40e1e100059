// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic marker colours.
//!
//! Hues are spread with the golden-ratio conjugate so that consecutive ids
//! land far apart on the colour wheel. Saturation and value are fixed at 0.7.

use core::fmt;
use core::str::FromStr;

use peniko::Color;
use serde::{Deserialize, Serialize};

use crate::PointId;

const GOLDEN_RATIO_CONJUGATE: f64 = 0.618_033_988_7;
const SATURATION: f64 = 0.7;
const VALUE: f64 = 0.7;

/// An opaque sRGB marker colour, written as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PointColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// A string that is not a `#rrggbb` colour.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid colour {0:?}, expected #rrggbb")]
pub struct ParseColorError(pub String);

impl PointColor {
    /// Creates a colour from 8-bit channels.
    #[must_use]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The colour assigned to the point with id `id`.
    #[must_use]
    pub fn for_id(id: PointId) -> Self {
        let hue = (id.0 as f64 * GOLDEN_RATIO_CONJUGATE).rem_euclid(1.0);
        Self::from_hsv(hue, SATURATION, VALUE)
    }

    /// Converts HSV (all components in `[0, 1]`) to RGB.
    #[must_use]
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        let h6 = h.rem_euclid(1.0) * 6.0;
        let sector = h6.floor();
        let f = h6 - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - f * s);
        let t = v * (1.0 - (1.0 - f) * s);
        #[expect(clippy::cast_possible_truncation, reason = "sector is in 0..=6")]
        let sector = sector as u8;
        let (r, g, b) = match sector {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Self::from_rgb8(channel(r), channel(g), channel(b))
    }

    /// Formats as `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Converts to a renderer colour.
    #[must_use]
    pub fn to_color(self) -> Color {
        Color::from_rgb8(self.r, self.g, self.b)
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "value is clamped to the u8 range first"
)]
fn channel(c: f64) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for PointColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for PointColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_owned());
        let hex = s.strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(err());
        }
        let part = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        Ok(Self::from_rgb8(part(0)?, part(2)?, part(4)?))
    }
}

impl From<PointColor> for String {
    fn from(color: PointColor) -> Self {
        color.to_hex()
    }
}

impl TryFrom<String> for PointColor {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PointColor> for Color {
    fn from(color: PointColor) -> Self {
        color.to_color()
    }
}
