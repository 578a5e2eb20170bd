//! Canvas 2D renderer for the browser build
//!
//! Sprites are drawn centered on their entity. Until an image has finished
//! loading its rectangle is filled with a flat color instead.

use std::collections::HashMap;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::{FrameView, INSTRUCTIONS, Renderer, Sprite};
use crate::sim::Aabb;

const BACKGROUND: &str = "#FFF";
const SCORE_COLOR: &str = "#6DD5FA";
const TEXT_COLOR: &str = "black";

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    images: HashMap<Sprite, HtmlImageElement>,
    show_instructions: bool,
    debug_hitboxes: bool,
}

impl CanvasRenderer {
    /// Start loading every sprite from `asset_base` (e.g. "" or "assets/")
    pub fn new(
        ctx: CanvasRenderingContext2d,
        asset_base: &str,
        show_instructions: bool,
        debug_hitboxes: bool,
    ) -> Self {
        let mut images = HashMap::new();
        for sprite in Sprite::ALL {
            match HtmlImageElement::new() {
                Ok(image) => {
                    image.set_src(&format!("{}{}", asset_base, sprite.file_name()));
                    images.insert(sprite, image);
                }
                Err(e) => log::warn!("Could not create image for {:?}: {:?}", sprite, e),
            }
        }

        Self {
            ctx,
            images,
            show_instructions,
            debug_hitboxes,
        }
    }

    fn placeholder_color(sprite: Sprite) -> &'static str {
        match sprite {
            Sprite::Tree => "#2E7D32",
            Sprite::Rock => "#757575",
            Sprite::Snowboarder => "#1565C0",
            Sprite::SnowboarderDead => "#C62828",
        }
    }

    fn draw_sprite(&self, sprite: Sprite, rect: &Aabb) -> Result<(), JsValue> {
        let min = rect.min();
        let (x, y) = (f64::from(min.x), f64::from(min.y));
        let (w, h) = (f64::from(rect.size.x), f64::from(rect.size.y));

        match self.images.get(&sprite) {
            Some(image) if image.complete() && image.natural_width() > 0 => self
                .ctx
                .draw_image_with_html_image_element_and_dw_and_dh(image, x, y, w, h),
            _ => {
                self.ctx.set_fill_style_str(Self::placeholder_color(sprite));
                self.ctx.fill_rect(x, y, w, h);
                Ok(())
            }
        }
    }

    fn outline(&self, rect: &Aabb) {
        let min = rect.min();
        self.ctx.stroke_rect(
            f64::from(min.x),
            f64::from(min.y),
            f64::from(rect.size.x),
            f64::from(rect.size.y),
        );
    }

    fn draw_hud(&self, frame: &FrameView) -> Result<(), JsValue> {
        self.ctx.set_font("30px Arial");
        self.ctx.set_fill_style_str(SCORE_COLOR);
        self.ctx.fill_text(&frame.score_label(), 50.0, 50.0)?;

        if self.show_instructions {
            let x = f64::from(frame.bounds.width) - 275.0;
            self.ctx.set_font("20px Arial");
            self.ctx.set_fill_style_str(TEXT_COLOR);
            for (i, line) in INSTRUCTIONS.iter().enumerate() {
                self.ctx.fill_text(line, x, 50.0 + 25.0 * i as f64)?;
            }
        }
        Ok(())
    }

    fn draw_frame(&self, frame: &FrameView) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(BACKGROUND);
        self.ctx.fill_rect(
            0.0,
            0.0,
            f64::from(frame.bounds.width),
            f64::from(frame.bounds.height),
        );

        for obstacle in &frame.obstacles {
            self.draw_sprite(obstacle.sprite, &obstacle.hitbox)?;
        }

        let actor = &frame.actor;
        let sprite_rect = Aabb::new(actor.pos, actor.draw_size);
        self.draw_sprite(actor.sprite, &sprite_rect)?;

        if self.debug_hitboxes {
            self.ctx.set_stroke_style_str(TEXT_COLOR);
            for obstacle in &frame.obstacles {
                self.outline(&obstacle.hitbox);
            }
            self.outline(&actor.hitbox);
        }

        self.draw_hud(frame)
    }
}

impl Renderer for CanvasRenderer {
    fn render(&mut self, frame: &FrameView) {
        if let Err(e) = self.draw_frame(frame) {
            log::warn!("Render error: {:?}", e);
        }
    }
}
