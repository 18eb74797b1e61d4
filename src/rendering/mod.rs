pub mod canvas;
pub mod chart;
pub mod gauge;
pub mod legend;
pub mod rasterizer;

pub use canvas::SvgCanvas;
pub use chart::{chart_svg, ChartOptions};
pub use gauge::{gauge_svg, physical_size};
pub use legend::legend_svg;
pub use rasterizer::SvgRenderer;
