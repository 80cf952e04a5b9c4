//! Canvas 2D backend

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::scene::{DrawCmd, TextAlign};

/// Replays draw lists onto a canvas
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    /// Acquire the 2D context of `canvas`
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        use wasm_bindgen::JsCast;

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    /// Draw one frame
    pub fn draw(&self, cmds: &[DrawCmd]) {
        for cmd in cmds {
            if let Err(e) = self.draw_one(cmd) {
                log::warn!("Draw error: {:?}", e);
            }
        }
    }

    fn draw_one(&self, cmd: &DrawCmd) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        match cmd {
            DrawCmd::Clear => {
                ctx.clear_rect(0.0, 0.0, self.width, self.height);
            }
            DrawCmd::Line {
                from,
                to,
                width,
                color,
            } => {
                ctx.begin_path();
                ctx.move_to(from.x as f64, from.y as f64);
                ctx.line_to(to.x as f64, to.y as f64);
                ctx.set_line_width(*width as f64);
                ctx.set_stroke_style_str(&color.to_css());
                ctx.stroke();
            }
            DrawCmd::Circle {
                center,
                radius,
                color,
            } => {
                ctx.begin_path();
                ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)?;
                ctx.set_fill_style_str(&color.to_css());
                ctx.fill();
            }
            DrawCmd::Ellipse {
                center,
                radii,
                color,
            } => {
                ctx.begin_path();
                ctx.ellipse(
                    center.x as f64,
                    center.y as f64,
                    radii.x as f64,
                    radii.y as f64,
                    0.0,
                    0.0,
                    TAU,
                )?;
                ctx.set_fill_style_str(&color.to_css());
                ctx.fill();
            }
            DrawCmd::Sector {
                center,
                radius,
                start,
                end,
                color,
            } => {
                ctx.begin_path();
                ctx.move_to(center.x as f64, center.y as f64);
                ctx.arc(
                    center.x as f64,
                    center.y as f64,
                    *radius as f64,
                    *start as f64,
                    *end as f64,
                )?;
                ctx.close_path();
                ctx.set_fill_style_str(&color.to_css());
                ctx.fill();
            }
            DrawCmd::Rect { min, size, color } => {
                ctx.set_fill_style_str(&color.to_css());
                ctx.fill_rect(min.x as f64, min.y as f64, size.x as f64, size.y as f64);
            }
            DrawCmd::Text {
                pos,
                text,
                size_px,
                align,
                color,
            } => {
                ctx.set_font(&format!("{}px sans-serif", size_px));
                ctx.set_text_align(match align {
                    TextAlign::Left => "left",
                    TextAlign::Center => "center",
                });
                ctx.set_fill_style_str(&color.to_css());
                ctx.fill_text(text, pos.x as f64, pos.y as f64)?;
            }
        }
        Ok(())
    }
}
