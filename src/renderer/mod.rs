//! Canvas2D scene painting
//!
//! Immediate-mode painting of one frame: the baseline stroke, one
//! half-circle per arc, one filled dot per arc. The backing buffer is
//! resynced to the displayed size at the top of every frame, which also
//! clears the surface.

use std::f64::consts::PI;

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::STROKE_WIDTH;
use crate::sim::Layout;

/// Owns the canvas and its 2D context
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    /// Wrap a canvas and grab its 2D context
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// Resync the backing buffer to the displayed size and return it
    ///
    /// Assigning the backing size clears the surface and resets context
    /// state, so each frame starts from a blank slate.
    pub fn begin_frame(&self) -> (f32, f32) {
        let width = self.canvas.client_width().max(0) as u32;
        let height = self.canvas.client_height().max(0) as u32;
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.ctx.set_line_width(STROKE_WIDTH as f64);
        (width as f32, height as f32)
    }

    /// Stroke the baseline segment
    pub fn draw_baseline(&self, layout: &Layout, color: &str) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.begin_path();
        self.ctx
            .move_to(layout.baseline_start.x as f64, layout.baseline_start.y as f64);
        self.ctx
            .line_to(layout.baseline_end.x as f64, layout.baseline_end.y as f64);
        self.ctx.stroke();
    }

    /// Stroke one half-circle below the baseline
    pub fn draw_arc(&self, center: Vec2, radius: f32, color: &str) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, PI, 2.0 * PI);
        self.ctx.stroke();
    }

    /// Paint one filled dot
    pub fn draw_dot(&self, pos: Vec2, radius: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(pos.x as f64, pos.y as f64, radius as f64, 0.0, 2.0 * PI);
        self.ctx.fill();
    }
}
