//! The image drawn for every tile.

use hexmissions::geo::{ HexOutline, Size };

use ggez::{ Context, GameError, GameResult };
use ggez::conf::NumSamples;
use ggez::graphics::{ self, BlendMode, Canvas, Color, DrawMode, DrawParam, Drawable, Image, MeshBuilder, Rect };
use log::debug;
use nalgebra::Point2;

use std::convert::TryFrom;

pub const FILL: Color = Color { r: 1., g: 1., b: 1., a: 1. };
pub const BORDER: Color = Color { r: 0.392, g: 0.392, b: 0.392, a: 1. };
    const CLEAR: Color = Color { r: 0., g: 0., b: 0., a: 0. };

/// A hexagon filled with the ground texture and outlined by a border,
/// rendered once and drawn for every tile of the same radius.
pub struct HexVisual {
    outline: HexOutline,
    image: Image,
}

impl HexVisual {
    pub fn size(&self) -> Size {
        self.outline.size()
    }

    pub fn image(&self) -> &Image {
        &self.image
    }
}

/// Render the hexagon of the given radius: the filled polygon, the
/// texture multiplied onto it, centered on the surface, then the border.
pub fn build(ctx: &mut Context, radius: u32, texture: &Image) -> GameResult<HexVisual> {
    let outline = HexOutline::new(radius);
    let (w, h) = (outline.width() as f32, outline.height() as f32);
    let canvas = Canvas::new(ctx, extent(outline.width())?, extent(outline.height())?, NumSamples::One)?;

    let screen = graphics::screen_coordinates(ctx);
    graphics::set_canvas(ctx, Some(&canvas));
    graphics::set_screen_coordinates(ctx, Rect::new(0., 0., w, h))?;
    graphics::clear(ctx, CLEAR);

    let fill = MeshBuilder::new()
        .polygon(DrawMode::fill(), outline.corners(), FILL)?
        .build(ctx)?;
    graphics::draw(ctx, &fill, DrawParam::default())?;

    let mut ground = texture.clone();
    ground.set_blend_mode(Some(BlendMode::Multiply));
    let dest = Point2::new(
        (w - ground.width() as f32) / 2.,
        (h - ground.height() as f32) / 2.);
    graphics::draw(ctx, &ground, DrawParam::default().dest(dest))?;

    let border = MeshBuilder::new()
        .polygon(DrawMode::stroke(1.), outline.corners(), BORDER)?
        .build(ctx)?;
    graphics::draw(ctx, &border, DrawParam::default())?;

    graphics::set_canvas(ctx, None);
    graphics::set_screen_coordinates(ctx, screen)?;
    debug!("Built hex visual of radius {} ({}x{})", radius, w, h);

    Ok(HexVisual { outline, image: canvas.image().clone() })
}

fn extent(pixels: u32) -> GameResult<u16> {
    u16::try_from(pixels).map_err(|_| GameError::RenderError(
        format!("a hex visual of {} pixels exceeds the canvas size limit", pixels)))
}
