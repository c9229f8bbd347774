
use hexmissions::config::AssetPaths;

use ggez::{ Context, GameError };
use ggez::graphics;
use log::info;
use thiserror::Error;

/// An asset could not be loaded.
#[derive(Debug, Error)]
#[error("failed to load the asset {path}")]
pub struct AssetError {
    pub path: String,
    #[source]
    pub source: GameError,
}

pub struct Assets {
    pub images: Images,
    pub font: graphics::Font,
}

impl Assets {
    pub fn load(ctx: &mut Context, paths: &AssetPaths) -> Result<Assets, AssetError> {
        let images = Images::load(ctx, paths)?;
        let font = load(&paths.font, |p| graphics::Font::new(ctx, p))?;
        Ok(Assets { images, font })
    }
}

pub struct Images {
    pub background: graphics::Image,
    pub ground_tile: graphics::Image,
}

impl Images {
    fn load(ctx: &mut Context, paths: &AssetPaths) -> Result<Images, AssetError> {
        let background = load(&paths.background, |p| graphics::Image::new(ctx, p))?;
        let ground_tile = load(&paths.ground_tile, |p| graphics::Image::new(ctx, p))?;
        Ok(Images { background, ground_tile })
    }
}

fn load<T, F>(path: &str, f: F) -> Result<T, AssetError>
where F: FnOnce(&str) -> Result<T, GameError> {
    let asset = f(path).map_err(|source| AssetError { path: path.to_string(), source })?;
    info!("Loaded {}", path);
    Ok(asset)
}
