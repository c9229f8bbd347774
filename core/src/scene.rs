//! The per-frame drawing of a level, independent of the graphics backend.

use crate::geo::Size;
use crate::layout;
use crate::level::LevelMap;

use nalgebra::{ Point2, Vector2 };

/// The opacity of the tile labels.
pub const LABEL_ALPHA: u8 = 160;

/// A render target for a frame of the scene.
pub trait Canvas {
    type Error;

    /// Draw the background, covering the whole viewport.
    fn background(&mut self) -> Result<(), Self::Error>;

    /// Draw the image of a hexagon with its top-left corner at `dest`.
    fn hex(&mut self, dest: Point2<f32>) -> Result<(), Self::Error>;

    /// Draw the label of the tile with the given catalog id, centered
    /// on `anchor`. The label text is the id itself.
    fn label(&mut self, id: u32, anchor: Point2<f32>, alpha: u8) -> Result<(), Self::Error>;
}

/// The arrangement of a level on the screen.
///
/// All layout computations happen once, on construction: the offset,
/// the top-left corner of every tile image and the anchor of every
/// label. Drawing a frame replays them.
#[derive(Clone, Debug)]
pub struct Scene {
    offset: Vector2<f32>,
    tiles: Vec<SceneTile>,
}

/// A tile as drawn on the screen.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct SceneTile {
    /// The catalog id, which is also the label text.
    pub id: u32,
    /// The top-left corner of the tile's image.
    pub dest: Point2<f32>,
    /// The center of the tile, where its label goes.
    pub anchor: Point2<f32>,
}

impl Scene {
    pub fn new(level: &LevelMap, visual: Size, viewport: Size) -> crate::Result<Scene> {
        let offset = layout::compute_offset(level, visual, viewport)?;
        let center = visual.center();
        let tiles = level.tiles()
            .map(|t| {
                let anchor = t.position() + offset;
                SceneTile { id: t.tile().id(), dest: anchor - center, anchor }
            })
            .collect();
        Ok(Scene { offset, tiles })
    }

    /// The offset of all tile positions.
    pub fn offset(&self) -> Vector2<f32> {
        self.offset
    }

    pub fn tiles(&self) -> &[SceneTile] {
        &self.tiles
    }

    /// Draw a frame: the background, then all hexagons, then the
    /// labels of all tiles on top.
    pub fn draw<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        canvas.background()?;
        for t in &self.tiles {
            canvas.hex(t.dest)?;
        }
        for t in &self.tiles {
            canvas.label(t.id, t.anchor, LABEL_ALPHA)?;
        }
        Ok(())
    }
}
