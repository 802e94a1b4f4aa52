use anyhow::anyhow;
use image::{Rgba, RgbaImage};

use crate::grid::PixelGrid;

/// RGBA colors for each palette index.
pub type Palette = [Rgba<u8>; 16];

const fn rgb(hex: u32) -> Rgba<u8> {
    Rgba([(hex >> 16) as u8, (hex >> 8) as u8, hex as u8, 0xff])
}

/// The 16-color Arcade palette. Index 0 is transparent.
pub const ARCADE_PALETTE: Palette = [
    Rgba([0, 0, 0, 0]),
    rgb(0xffffff),
    rgb(0xff2121),
    rgb(0xff93c4),
    rgb(0xff8135),
    rgb(0xfff609),
    rgb(0x249ca3),
    rgb(0x78dc52),
    rgb(0x003fad),
    rgb(0x87f2ff),
    rgb(0x8e2ec4),
    rgb(0xa4839f),
    rgb(0x5c406c),
    rgb(0xe5cdc4),
    rgb(0x91463d),
    rgb(0x000000),
];

/// Renders the grid with `palette`, each pixel blown up to a `scale` x `scale` square.
/// Indices past the end of the palette wrap around. Fails when the scaled image would not fit in
/// `u32` pixels per side.
pub fn to_image(grid: &PixelGrid, palette: &Palette, scale: u32) -> anyhow::Result<RgbaImage> {
    let scale = scale.max(1);
    let scaled = |side: usize| {
        u32::try_from(side)
            .ok()
            .and_then(|side| side.checked_mul(scale))
            .ok_or_else(|| {
                anyhow!(
                    "{}x{} maze at scale {} is too large for an image",
                    grid.width(),
                    grid.height(),
                    scale
                )
            })
    };
    let width = scaled(grid.width())?;
    let height = scaled(grid.height())?;

    Ok(RgbaImage::from_fn(width, height, |x, y| {
        let index = grid.get((x / scale) as usize, (y / scale) as usize) as usize;
        palette[index % palette.len()]
    }))
}
