pub mod canvas_renderer;
pub mod line_chart;

pub use canvas_renderer::{CanvasRenderer, ChartPalette};
pub use line_chart::{LineChartGeometry, Margin, PriceAxis, tooltip_text};
