//! stitch-quant: deterministic photo-to-chart color quantization.
//!
//! This library turns a raster photograph into a small grid of palette
//! indices (a [`Pattern`]) suitable for a stitched chart. The photograph is
//! area-resampled down to the target cell grid, the resampled pixels are
//! clustered into a fixed number of colors with a seeded k-means, and every
//! cell stores a 0-based label into the resulting palette.
//!
//! The pipeline is deterministic: identical input bytes and parameters
//! produce identical labels and centroids, so a chart can be regenerated
//! bit-for-bit. Palette entries can later be repainted in place via
//! [`Pattern::recolor`] without touching any label.
//!
//! # Quick start
//!
//! ```
//! use stitch_quant::generate;
//!
//! // A 2x2 solid red source image, encoded as PNG in memory.
//! let mut png = std::io::Cursor::new(Vec::new());
//! image::RgbImage::from_pixel(2, 2, image::Rgb([255, 0, 0]))
//!     .write_to(&mut png, image::ImageFormat::Png)
//!     .unwrap();
//!
//! let pattern = generate(png.get_ref(), 2, 2, 1).unwrap();
//!
//! assert_eq!(pattern.palette().len(), 1);
//! assert_eq!(pattern.palette()[0].id, 1);
//! assert_eq!(pattern.palette()[0].rgb.as_array(), [255, 0, 0]);
//! assert!(pattern.labels().iter().all(|&label| label == 0));
//! ```
//!
//! # Palette ids
//!
//! Ids are 1-based and follow the clustering run's native centroid order.
//! Which color ends up with which id is incidental to the algorithm; callers
//! must not rely on any particular id-to-color association across different
//! inputs.

pub mod color;
pub mod error;
pub mod pattern;
pub mod quantize;

pub use color::Rgb;
pub use error::PatternError;
pub use pattern::{PaletteEntry, Pattern};
pub use quantize::{generate, MAX_COLORS};
