//! PNG export of a frame.

use crate::raster::{PixelGrid, BYTES_PER_PIXEL};
use image::{Rgb, RgbImage};
use std::io;
use std::path::Path;

/// Save the grid as an 8-bit RGB PNG, one image pixel per raster pixel.
/// Walks the raw backing store: pixels are little-endian `0x00RRGGBB`, so
/// the bytes of each cell are B, G, R, unused.
pub fn export_png(grid: &PixelGrid, path: &Path) -> io::Result<()> {
    let bytes = grid.as_bytes();
    let pitch = grid.pitch();

    let img = RgbImage::from_fn(grid.width() as u32, grid.height() as u32, |x, y| {
        let at = y as usize * pitch + x as usize * BYTES_PER_PIXEL;
        Rgb([bytes[at + 2], bytes[at + 1], bytes[at]])
    });

    img.save(path)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))
}
