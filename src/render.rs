use crate::constants::{
    AXIS_LINE_WIDTH, AXIS_X_COLOR, AXIS_Y_COLOR, BACKGROUND_COLOR, CIRCLE_COLOR, POINT_COLOR,
    POINT_RADIUS_PX, SEGMENT_COLOR, SHAPE_LINE_WIDTH,
};
use glam::DVec2;
use intersect_core::{circle_outline, ndc_to_canvas, InteractionSession, CIRCLE_OUTLINE_SEGMENTS};
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Canvas2D view of an [`InteractionSession`]: axes, circle, segment and
/// intersection markers, all given in NDC and mapped onto the canvas here.
pub struct Display {
    ctx: web::CanvasRenderingContext2d,
    canvas: web::HtmlCanvasElement,
}

impl Display {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext(2d) failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context not available"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self {
            ctx,
            canvas: canvas.clone(),
        })
    }

    #[inline]
    fn size(&self) -> (f64, f64) {
        (
            self.canvas.width().max(1) as f64,
            self.canvas.height().max(1) as f64,
        )
    }

    #[inline]
    fn to_px(&self, p: DVec2) -> DVec2 {
        let (w, h) = self.size();
        ndc_to_canvas(p, w, h)
    }

    pub fn draw(&self, session: &InteractionSession) -> Result<(), JsValue> {
        let (w, h) = self.size();
        self.ctx.set_fill_style_str(BACKGROUND_COLOR);
        self.ctx.fill_rect(0.0, 0.0, w, h);

        self.ctx.set_line_width(AXIS_LINE_WIDTH);
        self.polyline(&[DVec2::new(0.0, -1.0), DVec2::new(0.0, 1.0)], AXIS_Y_COLOR);
        self.polyline(&[DVec2::new(-1.0, 0.0), DVec2::new(1.0, 0.0)], AXIS_X_COLOR);

        self.ctx.set_line_width(SHAPE_LINE_WIDTH);
        let circle = session.circle();
        if let Some(center) = circle.center {
            if circle.radius > 0.0 {
                let outline = circle_outline(center, circle.radius, CIRCLE_OUTLINE_SEGMENTS);
                self.polyline(&outline, CIRCLE_COLOR);
            }
        }

        if let Some((p1, p2)) = session.segment().endpoints() {
            self.polyline(&[p1, p2], SEGMENT_COLOR);
        }

        self.ctx.set_fill_style_str(POINT_COLOR);
        for p in session.intersections() {
            let px = self.to_px(*p);
            self.ctx.begin_path();
            self.ctx.arc(px.x, px.y, POINT_RADIUS_PX, 0.0, TAU)?;
            self.ctx.fill();
        }
        Ok(())
    }

    fn polyline(&self, points: &[DVec2], color: &str) {
        let mut iter = points.iter().map(|p| self.to_px(*p));
        let Some(first) = iter.next() else {
            return;
        };
        self.ctx.set_stroke_style_str(color);
        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for p in iter {
            self.ctx.line_to(p.x, p.y);
        }
        self.ctx.stroke();
    }
}
