//! Drawing frames of a level.

use crate::visual::{ self, HexVisual };

use hexmissions::config::Config;
use hexmissions::level::LevelMap;
use hexmissions::scene::{ self, Scene };

use ggez::{ Context, GameError, GameResult };
use ggez::graphics::{ self, Color, DrawParam, Font, Image, Scale, Text, TextFragment };
use log::info;
use nalgebra::{ Point2, Vector2 };
use thiserror::Error;

use std::collections::HashMap;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("the level cannot be laid out")]
    Layout(#[from] hexmissions::Error),
    #[error("graphics backend failure")]
    Backend(#[from] GameError),
}

/// Draws the background, tiles and tile labels of a level.
///
/// A tile's label is its catalog id, so tiles sharing a catalog
/// entry share a label.
pub struct Renderer {
    radius: u32,
    background: Image,
    background_scale: Vector2<f32>,
    visuals: HashMap<u32, HexVisual>,
    labels: HashMap<u32, Text>,
    scene: Scene,
}

impl Renderer {
    /// Prepare everything needed for drawing frames of the given level,
    /// i.e. the tile image, the layout and the labels.
    pub fn new(
        ctx: &mut Context,
        level: &LevelMap,
        config: &Config,
        background: Image,
        ground: &Image,
        font: Font,
    ) -> Result<Renderer, RenderError> {
        let radius = level.radius();
        let viewport = config.viewport_size();

        let mut visuals = HashMap::new();
        let hex = visual::build(ctx, radius, ground)?;
        let scene = Scene::new(level, hex.size(), viewport)?;
        visuals.insert(radius, hex);
        info!("Layout offset for {} tiles: {:?}", level.len(), scene.offset());

        let scale = Scale::uniform(config.font_size);
        let labels = level.tiles()
            .map(|t| {
                let id = t.tile().id();
                let fragment = TextFragment::new(id.to_string()).font(font).scale(scale);
                (id, Text::new(fragment))
            })
            .collect();

        let background_scale = Vector2::new(
            viewport.width / background.width() as f32,
            viewport.height / background.height() as f32);

        Ok(Renderer { radius, background, background_scale, visuals, labels, scene })
    }

    /// Draw a frame of the level this renderer was prepared for.
    pub fn draw(&self, ctx: &mut Context, level: &LevelMap) -> GameResult<()> {
        let visual = match self.visuals.get(&level.radius()) {
            Some(v) => v,
            None => panic!("no hex visual for radius {} (prepared for {})", level.radius(), self.radius),
        };
        let mut frame = Frame {
            ctx,
            background: &self.background,
            background_scale: self.background_scale,
            visual,
            labels: &self.labels,
        };
        self.scene.draw(&mut frame)
    }
}

/// A frame drawn on the ggez screen.
struct Frame<'a> {
    ctx: &'a mut Context,
    background: &'a Image,
    background_scale: Vector2<f32>,
    visual: &'a HexVisual,
    labels: &'a HashMap<u32, Text>,
}

impl scene::Canvas for Frame<'_> {
    type Error = GameError;

    fn background(&mut self) -> GameResult<()> {
        let param = DrawParam::default().scale(self.background_scale);
        graphics::draw(self.ctx, self.background, param)
    }

    fn hex(&mut self, dest: Point2<f32>) -> GameResult<()> {
        graphics::draw(self.ctx, self.visual.image(), DrawParam::default().dest(dest))
    }

    fn label(&mut self, id: u32, anchor: Point2<f32>, alpha: u8) -> GameResult<()> {
        let text = &self.labels[&id];
        let (w, h) = text.dimensions(self.ctx);
        let dest = anchor - Vector2::new(w as f32 / 2., h as f32 / 2.);
        let param = DrawParam::default().dest(dest).color(Color::from_rgba(0, 0, 0, alpha));
        graphics::draw(self.ctx, text, param)
    }
}
