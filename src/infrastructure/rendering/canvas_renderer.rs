use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::line_chart::LineChartGeometry;
use crate::domain::{
    errors::{AppError, AppResult},
    logging::{LogComponent, get_logger},
};

/// Colors of the line chart
#[derive(Debug, Clone, Copy)]
pub struct ChartPalette {
    pub background: &'static str,
    pub axis: &'static str,
    pub grid: &'static str,
    pub line: &'static str,
    pub cursor: &'static str,
}

impl Default for ChartPalette {
    fn default() -> Self {
        Self {
            background: "#FFFFFF",
            axis: "#6B7280",
            grid: "#E5E7EB",
            line: "#4F46E5",
            cursor: "#9CA3AF",
        }
    }
}

const LINE_WIDTH: f64 = 2.0;
const TICK_SIZE: f64 = 6.0;
const FONT: &str = "12px -apple-system, BlinkMacSystemFont, sans-serif";

fn js_err(context: &'static str) -> impl FnOnce(JsValue) -> AppError {
    move |e| AppError::Browser(format!("{}: {:?}", context, e))
}

/// Canvas 2D renderer for the forecast line
pub struct CanvasRenderer {
    palette: ChartPalette,
}

impl Default for CanvasRenderer {
    fn default() -> Self {
        Self::new(ChartPalette::default())
    }
}

impl CanvasRenderer {
    pub fn new(palette: ChartPalette) -> Self {
        Self { palette }
    }

    fn context(canvas: &HtmlCanvasElement) -> AppResult<CanvasRenderingContext2d> {
        canvas
            .get_context("2d")
            .map_err(js_err("Failed to get 2D context"))?
            .ok_or_else(|| AppError::Browser("2D context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::Browser("Failed to cast to 2D context".to_string()))
    }

    /// Draw axes, ticks and the line; `hover` adds a cursor and active dot
    pub fn render(
        &self,
        canvas: &HtmlCanvasElement,
        geometry: &LineChartGeometry,
        hover: Option<usize>,
    ) -> AppResult<()> {
        canvas.set_width(geometry.width as u32);
        canvas.set_height(geometry.height as u32);
        let ctx = Self::context(canvas)?;

        ctx.set_fill_style_str(self.palette.background);
        ctx.fill_rect(0.0, 0.0, geometry.width, geometry.height);

        self.draw_y_axis(&ctx, geometry)?;
        self.draw_x_axis(&ctx, geometry)?;
        if let Some(index) = hover {
            self.draw_cursor(&ctx, geometry, index);
        }
        self.draw_line(&ctx, geometry);
        if let Some(index) = hover {
            self.draw_active_dot(&ctx, geometry, index);
        }

        get_logger().debug(
            LogComponent::Infrastructure("CanvasRenderer"),
            &format!("🎨 Rendered {} points", geometry.points.len()),
        );
        Ok(())
    }

    fn draw_y_axis(&self, ctx: &CanvasRenderingContext2d, g: &LineChartGeometry) -> AppResult<()> {
        let x = g.plot.left;
        ctx.set_stroke_style_str(self.palette.axis);
        ctx.set_line_width(1.0);
        ctx.begin_path();
        ctx.move_to(x, g.plot.top);
        ctx.line_to(x, g.plot.bottom());
        ctx.stroke();

        ctx.set_fill_style_str(self.palette.axis);
        ctx.set_font(FONT);
        ctx.set_text_align("right");
        ctx.set_text_baseline("middle");
        for tick in &g.y_ticks {
            ctx.begin_path();
            ctx.move_to(x - TICK_SIZE, tick.y);
            ctx.line_to(x, tick.y);
            ctx.stroke();
            ctx.fill_text(&tick.label, x - TICK_SIZE - 4.0, tick.y)
                .map_err(js_err("Failed to draw price label"))?;
        }
        Ok(())
    }

    fn draw_x_axis(&self, ctx: &CanvasRenderingContext2d, g: &LineChartGeometry) -> AppResult<()> {
        let y = g.plot.bottom();
        ctx.set_stroke_style_str(self.palette.axis);
        ctx.begin_path();
        ctx.move_to(g.plot.left, y);
        ctx.line_to(g.plot.right(), y);
        ctx.stroke();

        ctx.set_text_align("center");
        ctx.set_text_baseline("top");
        for tick in &g.x_ticks {
            ctx.begin_path();
            ctx.move_to(tick.x, y);
            ctx.line_to(tick.x, y + TICK_SIZE);
            ctx.stroke();
            ctx.fill_text(&tick.label, tick.x, y + TICK_SIZE + 4.0)
                .map_err(js_err("Failed to draw time label"))?;
        }
        Ok(())
    }

    fn draw_line(&self, ctx: &CanvasRenderingContext2d, g: &LineChartGeometry) {
        let Some(&(x0, y0)) = g.points.first() else { return };
        ctx.set_stroke_style_str(self.palette.line);
        ctx.set_line_width(LINE_WIDTH);
        ctx.set_line_join("round");
        ctx.begin_path();
        ctx.move_to(x0, y0);
        for &(x, y) in &g.points[1..] {
            ctx.line_to(x, y);
        }
        // a lone point has no segment, mark it with a short tick instead
        if g.points.len() == 1 {
            ctx.line_to(x0 + 0.01, y0);
            ctx.set_line_cap("round");
        }
        ctx.stroke();
    }

    fn draw_cursor(&self, ctx: &CanvasRenderingContext2d, g: &LineChartGeometry, index: usize) {
        let Some(&(x, _)) = g.points.get(index) else { return };
        ctx.set_stroke_style_str(self.palette.cursor);
        ctx.set_line_width(1.0);
        ctx.begin_path();
        ctx.move_to(x, g.plot.top);
        ctx.line_to(x, g.plot.bottom());
        ctx.stroke();
    }

    fn draw_active_dot(&self, ctx: &CanvasRenderingContext2d, g: &LineChartGeometry, index: usize) {
        let Some(&(x, y)) = g.points.get(index) else { return };
        ctx.set_fill_style_str(self.palette.line);
        ctx.begin_path();
        let _ = ctx.arc(x, y, 4.0, 0.0, std::f64::consts::TAU);
        ctx.fill();
    }
}
