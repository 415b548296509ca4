//! Random initial population.

use crate::error::LifeError;
use crate::life::{ALIVE, DEAD};
use crate::raster::PixelGrid;
use rand::prelude::*;

/// Coin-flip every cell from the given stream: alive on an odd draw.
///
/// `StdRng` matters here. A generator with a weak low bit (the classic
/// truncated LCG failure) produces visible banding across the raster, so
/// the parity of the draw has to be trustworthy.
pub fn seed_grid(grid: &mut PixelGrid, rng: &mut StdRng) -> Result<(), LifeError> {
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let cell = if (rng.gen::<u32>() & 1) == 1 { ALIVE } else { DEAD };
            grid.set(row, col, cell)?;
        }
    }
    Ok(())
}
