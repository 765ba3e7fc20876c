//! Tile-based image partitioning.
//!
//! Divides the image into tiles that workers render independently. Tiles
//! are handed out in a fixed order; results are composited by tile index.

use crate::renderer::render_pixel;
use crate::sampler::PixelSampler;
use crate::tonemap::encode;
use crate::{Camera, RenderConfig, Scene};
use rand::RngCore;

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// X coordinate of the tile's top-left corner
    pub x: u32,
    /// Y coordinate of the tile's top-left corner
    pub y: u32,
    /// Width of the tile in pixels
    pub width: u32,
    /// Height of the tile in pixels
    pub height: u32,
    /// Position of this tile in the render order
    pub index: usize,
}

impl Tile {
    /// Create a new tile.
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    /// Get the total number of pixels in this tile.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Order in which tiles are handed out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TileOrder {
    /// Row by row from the top-left corner
    Scanline,
    /// Nearest to the image center first
    #[default]
    Spiral,
}

/// Split an image into tiles of at most `tile_width` x `tile_height`.
///
/// Edge tiles are clipped to the image, so the tiles cover every pixel
/// exactly once. `index` follows the returned order.
pub fn generate_tiles(
    width: u32,
    height: u32,
    tile_width: u32,
    tile_height: u32,
    order: TileOrder,
) -> Vec<Tile> {
    let mut tiles = Vec::new();
    if tile_width == 0 || tile_height == 0 {
        return tiles;
    }

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let tw = tile_width.min(width - x);
            let th = tile_height.min(height - y);
            tiles.push(Tile::new(x, y, tw, th, tiles.len()));
            x = x.saturating_add(tile_width);
        }
        y = y.saturating_add(tile_height);
    }

    if order == TileOrder::Spiral {
        sort_spiral(&mut tiles, width, height);
        for (i, tile) in tiles.iter_mut().enumerate() {
            tile.index = i;
        }
    }

    tiles
}

/// Sort tiles by distance from the image center.
///
/// The sort is stable, so equidistant tiles keep their scanline order.
fn sort_spiral(tiles: &mut [Tile], width: u32, height: u32) {
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;

    let distance = |t: &Tile| {
        let dx = t.x as f32 + t.width as f32 / 2.0 - center_x;
        let dy = t.y as f32 + t.height as f32 / 2.0 - center_y;
        dx * dx + dy * dy
    };

    tiles.sort_by(|a, b| distance(a).total_cmp(&distance(b)));
}

/// Pixels of one finished tile.
#[derive(Debug, Clone)]
pub struct TileResult {
    /// The tile that was rendered
    pub tile: Tile,
    /// Encoded RGB values, row-major within the tile
    pub pixels: Vec<f32>,
}

impl TileResult {
    pub fn new(tile: Tile, pixels: Vec<f32>) -> Self {
        Self { tile, pixels }
    }
}

/// Render every pixel of a tile and encode it for display.
pub fn render_tile(
    tile: &Tile,
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> TileResult {
    let mut sampler = PixelSampler::new(config.jitter);
    let mut pixels = Vec::with_capacity(tile.pixel_count() * 3);

    for local_y in 0..tile.height {
        for local_x in 0..tile.width {
            let x = tile.x + local_x;
            let y = tile.y + local_y;
            let color = render_pixel(scene, camera, x, y, config, &mut sampler, rng);
            pixels.extend_from_slice(&encode(color).to_array());
        }
    }

    TileResult::new(*tile, pixels)
}
