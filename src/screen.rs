//! Terminal presenter.
//!
//! Paints a [`PixelGrid`] onto the terminal, two raster rows per text row
//! using the upper-half-block glyph: the foreground color carries the top
//! pixel, the background color the bottom one. The raster is sampled
//! nearest-neighbor, so any grid geometry lands on any terminal size.

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{poll, read, Event, KeyCode, KeyModifiers},
    execute, queue,
    style::{Color, Colors, Print, ResetColor, SetColors},
    terminal::{
        disable_raw_mode, enable_raw_mode, size, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use std::io::{self, stdout, Write};
use std::time::Duration;

use crate::life::DEAD;
use crate::raster::PixelGrid;

const HALF_BLOCK: char = '▀';

/// Terminal abstraction for presenting frames
pub struct Screen {
    width: u16,
    height: u16,
    buffer: Vec<Vec<Cell>>,
    alternate_screen: bool,
}

/// A single terminal cell: two vertically stacked raster pixels
#[derive(Clone, Copy)]
struct Cell {
    top: u32,
    bottom: u32,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            top: DEAD,
            bottom: DEAD,
        }
    }
}

impl Screen {
    /// Initialize the terminal for drawing
    pub fn new(alternate_screen: bool) -> io::Result<Self> {
        let (width, height) = size()?;

        if alternate_screen {
            enable_raw_mode()?;
            execute!(stdout(), EnterAlternateScreen, Hide)?;
        }

        let buffer = vec![vec![Cell::default(); width as usize]; height as usize];

        Ok(Self {
            width,
            height,
            buffer,
            alternate_screen,
        })
    }

    /// Get terminal dimensions
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Adopt new terminal dimensions, discarding the old back buffer
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.buffer = vec![vec![Cell::default(); width as usize]; height as usize];
    }

    /// Clear the actual terminal
    pub fn clear_screen(&self) -> io::Result<()> {
        execute!(stdout(), Clear(ClearType::All))?;
        Ok(())
    }

    /// Paint a frame: sample the raster into the back buffer, then flush
    /// it to the terminal. The grid is only read.
    pub fn present(&mut self, grid: &PixelGrid) -> io::Result<()> {
        self.blit(grid);
        self.flush()
    }

    /// Nearest-neighbor scale of the raster onto the cell buffer. Each text
    /// row covers two rows of the display surface.
    fn blit(&mut self, grid: &PixelGrid) {
        let cols = self.width as usize;
        let rows = self.height as usize;
        if cols == 0 || rows == 0 || grid.width() == 0 || grid.height() == 0 {
            return;
        }

        let surface_height = rows * 2;
        for (y, row) in self.buffer.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                let col = scale_index(x, grid.width(), cols);
                let top = scale_index(y * 2, grid.height(), surface_height);
                let bottom = scale_index(y * 2 + 1, grid.height(), surface_height);
                cell.top = grid.pixel(top, col);
                cell.bottom = grid.pixel(bottom, col);
            }
        }
    }

    /// Render the entire buffer to screen
    fn flush(&self) -> io::Result<()> {
        let mut out = stdout();

        for (y, row) in self.buffer.iter().enumerate() {
            queue!(out, MoveTo(0, y as u16))?;
            for cell in row {
                queue!(
                    out,
                    SetColors(Colors::new(rgb(cell.top), rgb(cell.bottom))),
                    Print(HALF_BLOCK)
                )?;
            }
        }

        queue!(out, ResetColor)?;
        out.flush()
    }

    /// Check for keypress (non-blocking), returns (code, modifiers)
    pub fn check_key(&self) -> io::Result<Option<(KeyCode, KeyModifiers)>> {
        if poll(Duration::from_millis(0))? {
            if let Event::Key(key_event) = read()? {
                return Ok(Some((key_event.code, key_event.modifiers)));
            }
        }
        Ok(None)
    }

    /// Sleep for specified duration
    pub fn sleep(&self, seconds: f32) {
        std::thread::sleep(Duration::from_secs_f32(seconds));
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        if self.alternate_screen {
            let _ = execute!(stdout(), Show, LeaveAlternateScreen);
            let _ = disable_raw_mode();
        }
    }
}

/// Print a frame to stdout with ANSI colors (for print mode), one text row
/// per two raster rows at natural size. Goes through the checked accessor;
/// an odd bottom row past the edge prints as dead.
pub fn print_frame(grid: &PixelGrid) {
    for row in (0..grid.height()).step_by(2) {
        for col in 0..grid.width() {
            let top = grid.get(row, col).unwrap_or(DEAD);
            let bottom = grid.get(row + 1, col).unwrap_or(DEAD);

            let (tr, tg, tb) = channels(top);
            let (br, bg, bb) = channels(bottom);
            print!("\x1b[38;2;{};{};{}m", tr, tg, tb);
            print!("\x1b[48;2;{};{};{}m", br, bg, bb);
            print!("{}", HALF_BLOCK);
        }
        println!("\x1b[0m");
    }
}

/// Map a destination index onto the source axis, nearest-neighbor.
#[inline]
fn scale_index(i: usize, src: usize, dst: usize) -> usize {
    i * src / dst
}

/// Split a 0x00RRGGBB pixel into its color channels.
#[inline]
fn channels(pixel: u32) -> (u8, u8, u8) {
    ((pixel >> 16) as u8, (pixel >> 8) as u8, pixel as u8)
}

fn rgb(pixel: u32) -> Color {
    let (r, g, b) = channels(pixel);
    Color::Rgb { r, g, b }
}
