//! Frame loop: advance one generation per tick and present it.

use crate::buffer::DoubleBuffer;
use crate::config::LifeConfig;
use crate::screen::{self, Screen};
use crate::snapshot;
use crossterm::event::{KeyCode, KeyModifiers};
use rand::prelude::*;
use std::io;

/// Raster geometry for print mode when no override is given
const PRINT_WIDTH: usize = 80;
const PRINT_HEIGHT: usize = 48;

/// Run the visualization
pub fn run(config: LifeConfig) -> io::Result<()> {
    let seed = config.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs()
    });

    let mut rng = StdRng::seed_from_u64(seed);

    if config.print {
        return run_print(&config, &mut rng);
    }

    let mut screen = Screen::new(true)?;
    screen.clear_screen()?;

    let (init_cols, init_rows) = screen.size();
    let (w, h) = raster_size(&config, init_cols, init_rows);
    let mut buffer = DoubleBuffer::new(w, h, &mut rng)?;

    loop {
        // A terminal resize invalidates the simulation: reallocate and
        // reseed before the next generation is computed, never mid-tick.
        let (cols, rows) = crossterm::terminal::size().unwrap_or((init_cols, init_rows));
        if (cols, rows) != screen.size() {
            screen.resize(cols, rows);
            screen.clear_screen()?;

            let (new_w, new_h) = raster_size(&config, cols, rows);
            if (new_w, new_h) != (buffer.width(), buffer.height()) {
                buffer.resize(new_w, new_h, &mut rng)?;
            }
        }

        if let Some((code, mods)) = screen.check_key()? {
            let quit = matches!(code, KeyCode::Char('q') | KeyCode::Esc)
                || (code == KeyCode::Char('c') && mods.contains(KeyModifiers::CONTROL));
            if quit {
                break;
            }
        }

        buffer.advance();
        screen.present(buffer.active_grid())?;
        screen.sleep(config.time_step);
    }

    if let Some(path) = &config.export {
        snapshot::export_png(buffer.active_grid(), path)?;
    }

    Ok(())
}

/// Evolve a fixed number of generations and print the final frame to
/// stdout (no alternate screen, terminates on its own).
fn run_print(config: &LifeConfig, rng: &mut StdRng) -> io::Result<()> {
    let w = config.width.unwrap_or(PRINT_WIDTH).max(1);
    let h = config.height.unwrap_or(PRINT_HEIGHT).max(1);
    let mut buffer = DoubleBuffer::new(w, h, rng)?;

    // The first advance presents the seed itself; the rest evolve it.
    for _ in 0..=config.generations {
        buffer.advance();
    }

    screen::print_frame(buffer.active_grid());

    if let Some(path) = &config.export {
        snapshot::export_png(buffer.active_grid(), path)?;
    }

    Ok(())
}

/// Raster geometry for the current terminal: one pixel per column, two per
/// row (half-block presentation), unless overridden by config.
fn raster_size(config: &LifeConfig, cols: u16, rows: u16) -> (usize, usize) {
    let w = config.width.unwrap_or(cols as usize);
    let h = config.height.unwrap_or(rows as usize * 2);
    (w.max(1), h.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> LifeConfig {
        LifeConfig {
            time_step: 0.05,
            seed: None,
            width: None,
            height: None,
            print: false,
            generations: 100,
            export: None,
        }
    }

    #[test]
    fn raster_tracks_the_terminal_by_default() {
        assert_eq!(raster_size(&config(), 120, 40), (120, 80));
    }

    #[test]
    fn raster_override_wins_over_terminal_geometry() {
        let mut cfg = config();
        cfg.width = Some(64);
        cfg.height = Some(64);
        assert_eq!(raster_size(&cfg, 120, 40), (64, 64));
    }

    #[test]
    fn degenerate_terminal_still_yields_a_grid() {
        assert_eq!(raster_size(&config(), 0, 0), (1, 1));
    }
}
