//! Photo to pattern conversion: resample to the grid, then k-means the
//! cell colors down to a fixed-size palette.

use kmeans_colors::get_kmeans;
use palette::cast::ComponentsAs;
use palette::Srgb;

use crate::color::Rgb;
use crate::error::PatternError;
use crate::pattern::{PaletteEntry, Pattern};

/// Upper bound on palette size. Labels are stored as `u8`, so a pattern can
/// never reference more than 256 palette entries.
pub const MAX_COLORS: usize = 256;

/// Fixed base seed so the same input always yields the same pattern.
const SEED: u64 = 42;
/// Independent restarts; the run with the lowest score wins.
const RUNS: u64 = 10;
const MAX_ITER: usize = 300;
const CONVERGE: f32 = 1e-4;

/// Build a pattern from an encoded source image.
///
/// The image is decoded, resampled to exactly `width` x `height` cells with
/// an area-averaging filter, and the cell colors are clustered into
/// `num_colors` palette entries. Clustering is seeded, so identical inputs
/// produce identical patterns. Images with fewer distinct colors than
/// `num_colors` still get a full-size palette; the extra entries repeat
/// existing colors.
pub fn generate(
    image_bytes: &[u8],
    width: u32,
    height: u32,
    num_colors: usize,
) -> Result<Pattern, PatternError> {
    if width == 0 || height == 0 {
        return Err(PatternError::InvalidDimensions { width, height });
    }
    if num_colors < 1 || num_colors > MAX_COLORS {
        return Err(PatternError::InvalidColorCount { count: num_colors });
    }

    let image = image::load_from_memory(image_bytes)?;
    let resized = image.thumbnail_exact(width, height).to_rgb8();

    let cells: &[Srgb<u8>] = resized.as_raw().components_as();
    let pixels: Vec<Srgb<f32>> = cells.iter().map(|cell| cell.into_format()).collect();

    let mut best = get_kmeans(num_colors, MAX_ITER, CONVERGE, false, &pixels, SEED);
    for run in 1..RUNS {
        let candidate = get_kmeans(num_colors, MAX_ITER, CONVERGE, false, &pixels, SEED + run);
        if candidate.score < best.score {
            best = candidate;
        }
    }

    let mut palette: Vec<PaletteEntry> = best
        .centroids
        .iter()
        .enumerate()
        .map(|(i, centroid)| {
            let rgb: Srgb<u8> = centroid.into_format();
            PaletteEntry::new((i + 1) as u32, Rgb::new(rgb.red, rgb.green, rgb.blue))
        })
        .collect();

    // Centroid seeding stops early once every pixel already sits on a
    // centroid, so a low-variety image can come back with fewer clusters
    // than requested. The palette still carries exactly `num_colors`
    // entries; the surplus ones repeat existing colors and no cell
    // references them.
    let found = palette.len();
    for i in found..num_colors {
        let rgb = palette[i % found].rgb;
        palette.push(PaletteEntry::new((i + 1) as u32, rgb));
    }

    Ok(Pattern::new(width, height, best.indices, palette))
}
