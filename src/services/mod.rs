pub mod output_store;
pub mod pattern_service;
pub mod render_service;

pub use output_store::{OutputStore, CHART_FILE, GAUGE_FILE, LEGEND_FILE};
pub use pattern_service::{PatternService, PatternSnapshot};
pub use render_service::RenderService;
