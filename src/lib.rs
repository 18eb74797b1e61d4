//! Stitchgrid - photo to stitch chart server
//!
//! Converts uploaded photos into indexed-color stitch patterns and renders
//! them as chart, color list, and gauge PNG artifacts.
//! This library exposes modules for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod server;
pub mod services;
