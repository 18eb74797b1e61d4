//! RGB color triple shared by palettes, recoloring, and rendering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An 8-bit RGB color.
///
/// Serializes as a 3-element array `[r, g, b]`, the wire form used by the
/// recolor operation and the palette listing. Equality is exact per channel,
/// which is what the first-match recolor scan relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The `[r, g, b]` array form.
    #[inline]
    pub fn as_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// CSS hex form (`#rrggbb`), used for SVG fills.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(v: [u8; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(v: Rgb) -> Self {
        v.as_array()
    }
}

impl fmt::Display for Rgb {
    /// The literal `RGB(r, g, b)` form printed in the legend artifact.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB({}, {}, {})", self.r, self.g, self.b)
    }
}
