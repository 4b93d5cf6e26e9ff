use crate::core::{Glow, Rgba, Surface, Viewport};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Surface`] over a canvas 2D context.
pub struct Canvas2d {
    ctx: web::CanvasRenderingContext2d,
}

impl Canvas2d {
    pub fn from_canvas(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("not a 2d context: {:?}", e))?;
        Ok(Self { ctx })
    }
}

impl Surface for Canvas2d {
    fn clear(&mut self, viewport: Viewport) {
        self.ctx
            .clear_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
    }

    fn gradient_line(&mut self, from: Vec2, to: Vec2, start: Rgba, end: Rgba, width: f32) {
        let gradient =
            self.ctx
                .create_linear_gradient(from.x as f64, from.y as f64, to.x as f64, to.y as f64);
        _ = gradient.add_color_stop(0.0, &start.css());
        _ = gradient.add_color_stop(1.0, &end.css());
        self.ctx.set_line_width(width as f64);
        self.ctx.set_stroke_style_canvas_gradient(&gradient);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn circle(&mut self, center: Vec2, radius: f32, fill: Rgba, glow: Option<Glow>) {
        if !(radius.is_finite() && radius > 0.0) {
            return;
        }
        match glow {
            Some(g) => {
                self.ctx.set_shadow_blur(g.blur as f64);
                self.ctx.set_shadow_color(&g.color.css());
            }
            None => self.ctx.set_shadow_blur(0.0),
        }
        self.ctx.set_fill_style_str(&fill.css());
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .is_ok()
        {
            self.ctx.fill();
        }
        self.ctx.set_shadow_blur(0.0);
    }
}
