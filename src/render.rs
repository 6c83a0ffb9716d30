use glam::Vec2;
use netfield_core::{DotStyle, Painter, Rgba};
use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Draws the field onto a 2D canvas context.
///
/// Dots carry a glow; links are drawn without one since shadows on strokes
/// are expensive. The shadow state is only touched when switching between
/// the two.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
    glow_on: bool,
}

impl CanvasPainter {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        ctx.set_shadow_blur(0.0);
        Self {
            ctx,
            glow_on: false,
        }
    }

    fn set_glow(&mut self, style: Option<&DotStyle>) {
        match style {
            Some(s) if !self.glow_on => {
                self.ctx.set_shadow_blur(s.glow_blur as f64);
                self.ctx.set_shadow_color(&s.glow.to_hex());
                self.glow_on = true;
            }
            None if self.glow_on => {
                self.ctx.set_shadow_blur(0.0);
                self.glow_on = false;
            }
            _ => {}
        }
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn dot(&mut self, center: Vec2, radius: f32, style: &DotStyle) {
        self.set_glow(Some(style));
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        #[allow(deprecated)]
        self.ctx
            .set_fill_style(&JsValue::from_str(&style.fill.to_css()));
        self.ctx.fill();
    }

    fn link(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.set_glow(None);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        #[allow(deprecated)]
        self.ctx.set_stroke_style(&JsValue::from_str(&color.to_css()));
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }
}
