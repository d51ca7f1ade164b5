use tracing::{debug, trace};

use crate::error::{Error, Result};

/// A cell coordinate. `x` grows rightwards and `y` grows downwards from the
/// top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Visit-count grid explored by the drunken bishop.
///
/// A board is built once per fingerprint. Walking it again keeps going from
/// where the previous walk ended and adds onto the same counters.
#[derive(Clone, Debug)]
pub struct Board {
    width: usize,
    height: usize,
    counts: Vec<u32>,
    start: Position,
    cursor: Position,
    end: Option<Position>,
}

impl Board {
    /// Creates a zeroed `width` x `height` board with the bishop in the centre.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let (width, height) = (width as usize, height as usize);
        let start = Position::new(width / 2, height / 2);
        Ok(Self {
            width,
            height,
            counts: vec![0; width * height],
            start,
            cursor: start,
            end: None,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Position {
        self.start
    }

    /// Where the last walk finished, or `None` if the board was never walked.
    pub fn end(&self) -> Option<Position> {
        self.end
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Visit counter at `(x, y)`. Panics when out of bounds.
    pub fn count(&self, x: usize, y: usize) -> u32 {
        self.counts[self.idx(x, y)]
    }

    /// All counters, row-major.
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Walks `fingerprint` across the board and returns the number of bytes
    /// consumed, which is always `fingerprint.len()`.
    ///
    /// Every byte is read as four 2-bit moves, least-significant pair first:
    /// `0b00` up-left, `0b01` up-right, `0b10` down-left, `0b11` down-right.
    /// Moves into a wall are absorbed on that axis only.
    pub fn walk(&mut self, fingerprint: &[u8]) -> usize {
        if let Some(prev) = self.end {
            trace!(x = prev.x, y = prev.y, "resuming walk from previous end");
        }

        // breadcrumb where the bishop stands before moving
        self.mark();

        for &byte in fingerprint {
            for shift in (0..8).step_by(2) {
                match (byte >> shift) & 0b11 {
                    0b00 => {
                        self.move_left();
                        self.move_up();
                    }
                    0b01 => {
                        self.move_right();
                        self.move_up();
                    }
                    0b10 => {
                        self.move_left();
                        self.move_down();
                    }
                    _ => {
                        self.move_right();
                        self.move_down();
                    }
                }
                self.mark();
            }
        }
        self.end = Some(self.cursor);

        debug!(
            bytes = fingerprint.len(),
            end_x = self.cursor.x,
            end_y = self.cursor.y,
            "walk complete"
        );
        fingerprint.len()
    }

    fn move_left(&mut self) {
        self.cursor.x = self.cursor.x.saturating_sub(1);
    }

    fn move_right(&mut self) {
        if self.cursor.x + 1 < self.width {
            self.cursor.x += 1;
        }
    }

    fn move_up(&mut self) {
        self.cursor.y = self.cursor.y.saturating_sub(1);
    }

    fn move_down(&mut self) {
        if self.cursor.y + 1 < self.height {
            self.cursor.y += 1;
        }
    }

    fn mark(&mut self) {
        debug_assert!(
            self.cursor.x < self.width && self.cursor.y < self.height,
            "cursor {:?} left the {}x{} board",
            self.cursor,
            self.width,
            self.height
        );
        let idx = self.idx(self.cursor.x, self.cursor.y);
        self.counts[idx] = self.counts[idx].saturating_add(1);
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }
}
