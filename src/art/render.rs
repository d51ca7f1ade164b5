use unicode_width::UnicodeWidthStr;

use super::{Board, Position, TileSet};

impl Board {
    /// Renders the board row by row through `tiles`, each row ending in `\n`.
    pub fn render(&self, tiles: &TileSet) -> String {
        let mut out = String::with_capacity((self.width() * 4 + 1) * self.height());
        for row in self.render_lines(tiles) {
            out.push_str(&row);
            out.push('\n');
        }
        out
    }

    /// Same as [`Board::render`] but one `String` per row, without newlines.
    pub fn render_lines(&self, tiles: &TileSet) -> Vec<String> {
        (0..self.height())
            .map(|y| (0..self.width()).map(|x| self.tile_at(tiles, x, y)).collect())
            .collect()
    }

    fn tile_at(&self, tiles: &TileSet, x: usize, y: usize) -> &'static str {
        let pos = Position::new(x, y);
        match (tiles.start(), tiles.end()) {
            (Some(s), _) if pos == self.start() => s,
            (_, Some(e)) if Some(pos) == self.end() => e,
            _ => tiles.glyph(self.count(x, y)),
        }
    }
}

/// Wraps rendered rows in a `+---+` / `|...|` box.
///
/// The first line's display width sets the box width. Lines of any other
/// width, such as the empty tail after a final newline, are dropped.
pub fn armor(rendered: &str) -> String {
    let lines: Vec<&str> = rendered.split('\n').collect();
    let cols = lines.first().map_or(0, |l| l.width());
    let border = format!("+{}+\n", "-".repeat(cols));

    let mut out = String::with_capacity(rendered.len() + (lines.len() + 2) * 4 + cols * 2);
    out.push_str(&border);
    for row in lines.iter().filter(|l| l.width() == cols) {
        out.push('|');
        out.push_str(row);
        out.push_str("|\n");
    }
    out.push_str(&border);
    out
}
