//! The pattern data model: a label grid plus its ordered palette.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// One palette slot: a stable 1-based id and its current color.
///
/// Ids are assigned once at generation time (`cluster index + 1`) and never
/// reused or reordered; recoloring replaces `rgb` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub id: u32,
    pub rgb: Rgb,
}

impl PaletteEntry {
    pub const fn new(id: u32, rgb: Rgb) -> Self {
        Self { id, rgb }
    }
}

/// A generated stitch pattern.
///
/// Stores one `u8` palette label per cell in row-major order (top row
/// first), along with the grid dimensions and the palette. The label grid
/// is immutable for the lifetime of the pattern; only palette RGB values
/// change, so every cell pointing at a repainted entry picks up the new
/// color through shared indirection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    width: u32,
    height: u32,
    labels: Vec<u8>,
    palette: Vec<PaletteEntry>,
}

impl Pattern {
    /// Create a pattern from a row-major label grid and its palette.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `labels.len() == width * height` and that every
    /// label indexes into the palette.
    pub fn new(width: u32, height: u32, labels: Vec<u8>, palette: Vec<PaletteEntry>) -> Self {
        debug_assert_eq!(
            labels.len(),
            (width * height) as usize,
            "labels length ({}) must match width * height ({}x{}={})",
            labels.len(),
            width,
            height,
            width * height,
        );
        debug_assert!(
            labels.iter().all(|&l| (l as usize) < palette.len()),
            "every label must index into the palette ({} entries)",
            palette.len(),
        );
        Self {
            width,
            height,
            labels,
            palette,
        }
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The label grid, row-major, one `u8` per cell.
    #[inline]
    pub fn labels(&self) -> &[u8] {
        &self.labels
    }

    /// The palette, ascending by id.
    #[inline]
    pub fn palette(&self) -> &[PaletteEntry] {
        &self.palette
    }

    /// Label at cell `(x, y)` with a top-left origin.
    #[inline]
    pub fn label_at(&self, x: u32, y: u32) -> u8 {
        self.labels[(y * self.width + x) as usize]
    }

    /// Current color of cell `(x, y)`.
    #[inline]
    pub fn rgb_at(&self, x: u32, y: u32) -> Rgb {
        self.palette[self.label_at(x, y) as usize].rgb
    }

    /// Repaint the first palette entry whose color exactly equals `old`.
    ///
    /// Scans ascending by id and returns the id of the changed entry, or
    /// `None` when nothing matched. A miss is a defined no-op, not an
    /// error: the palette and the label grid are left untouched.
    pub fn recolor(&mut self, old: Rgb, new: Rgb) -> Option<u32> {
        for entry in &mut self.palette {
            if entry.rgb == old {
                entry.rgb = new;
                return Some(entry.id);
            }
        }
        None
    }

    /// The per-cell RGB grid, row-major.
    ///
    /// Recomputed on every call from `(labels, palette)` so it can never
    /// lag behind a recolor.
    pub fn derived_pixels(&self) -> Vec<Rgb> {
        self.labels
            .iter()
            .map(|&label| self.palette[label as usize].rgb)
            .collect()
    }
}
