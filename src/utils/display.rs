//! Display and output formatting utilities

use crate::config::DisplayConfig;
use crate::game_of_life::Grid;
use anyhow::{Context, Result};
use itertools::Itertools;
use std::io::Write;

/// Renders generations as text per the console contract
///
/// Each row becomes one line of cell glyphs separated by single spaces;
/// between generations a fixed number of blank lines emulates a screen clear
/// on an append-only terminal.
pub struct GridRenderer {
    alive_glyph: char,
    dead_glyph: char,
    clear_lines: usize,
}

impl GridRenderer {
    pub fn new(display: &DisplayConfig) -> Self {
        Self {
            alive_glyph: display.alive_glyph,
            dead_glyph: display.dead_glyph,
            clear_lines: display.clear_lines,
        }
    }

    fn glyph(&self, alive: bool) -> char {
        if alive {
            self.alive_glyph
        } else {
            self.dead_glyph
        }
    }

    /// Format one generation as lines of space-separated glyphs
    pub fn format_generation(&self, grid: &Grid) -> String {
        let mut output = String::with_capacity(grid.height * (grid.width * 2 + 1));
        for row in 0..grid.height {
            let line = (0..grid.width)
                .map(|col| self.glyph(grid.get(row, col)))
                .join(" ");
            output.push_str(&line);
            output.push('\n');
        }
        output
    }

    /// Write one generation to the console
    pub fn write_generation<W: Write>(&self, grid: &Grid, out: &mut W) -> Result<()> {
        out.write_all(self.format_generation(grid).as_bytes())
            .context("Failed to write generation to console")
    }

    /// Emit the blank lines that push the previous frame off screen
    pub fn write_clear<W: Write>(&self, out: &mut W) -> Result<()> {
        for _ in 0..self.clear_lines {
            writeln!(out).context("Failed to write clear line")?;
        }
        Ok(())
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn renderer(clear_lines: usize) -> GridRenderer {
        let mut settings = Settings::default();
        settings.display.clear_lines = clear_lines;
        GridRenderer::new(&settings.display)
    }

    #[test]
    fn test_format_generation_glyphs_and_spacing() {
        let cells = vec![vec![true, false, true], vec![false, true, false]];
        let grid = Grid::from_cells(cells).unwrap();

        let formatted = renderer(100).format_generation(&grid);
        assert_eq!(formatted, "O   O\n  O  \n");
    }

    #[test]
    fn test_format_generation_custom_glyphs() {
        let mut settings = Settings::default();
        settings.display.alive_glyph = '#';
        settings.display.dead_glyph = '.';
        let renderer = GridRenderer::new(&settings.display);

        let cells = vec![vec![true, false]];
        let grid = Grid::from_cells(cells).unwrap();
        assert_eq!(renderer.format_generation(&grid), "# .\n");
    }

    #[test]
    fn test_write_clear_emits_exact_count() {
        let mut out = Vec::new();
        renderer(5).write_clear(&mut out).unwrap();
        assert_eq!(out, b"\n\n\n\n\n");
    }

    #[test]
    fn test_single_cell_row_has_no_separator() {
        let cells = vec![vec![true], vec![false]];
        let grid = Grid::from_cells(cells).unwrap();
        assert_eq!(renderer(0).format_generation(&grid), "O\n \n");
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        // Should either be colored or plain text
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
