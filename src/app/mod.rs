use std::error::Error;
use std::io::{stdout, Stdout};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::debug;

use randomart::config::{RANDOM_FINGERPRINT_LEN, VIEWER_POLL_MS};
use randomart::{input, Board, TileSet, BUNDLED};

use crate::ui::draw_viewer;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// What the viewer is currently showing. The board is walked once per
/// fingerprint; tileset and armor changes only re-render it.
pub struct Viewer {
    pub board: Board,
    pub fingerprint: Vec<u8>,
    pub tiles: TileSet,
    pub armored: bool,
    width: i32,
    height: i32,
}

impl Viewer {
    pub fn new(
        width: i32,
        height: i32,
        fingerprint: Vec<u8>,
        tiles: TileSet,
        armored: bool,
    ) -> randomart::Result<Self> {
        let mut board = Board::new(width, height)?;
        board.walk(&fingerprint);
        Ok(Self {
            board,
            fingerprint,
            tiles,
            armored,
            width,
            height,
        })
    }

    /// Rendered rows for the art pane, armored if toggled on.
    pub fn art(&self) -> String {
        let rendered = self.board.render(&self.tiles);
        if self.armored {
            randomart::armor(&rendered)
        } else {
            rendered
        }
    }

    pub fn next_tiles(&mut self) {
        let idx = BUNDLED
            .iter()
            .position(|t| t.id() == self.tiles.id())
            .map_or(0, |i| (i + 1) % BUNDLED.len());
        self.tiles = BUNDLED[idx];
    }

    pub fn toggle_armor(&mut self) {
        self.armored = !self.armored;
    }

    /// Draws a fresh random fingerprint on a new board.
    pub fn reroll(&mut self) -> randomart::Result<()> {
        let fingerprint = input::random_fingerprint(RANDOM_FINGERPRINT_LEN);
        let mut board = Board::new(self.width, self.height)?;
        board.walk(&fingerprint);
        debug!(fingerprint = %hex::encode(&fingerprint), "rerolled");
        self.board = board;
        self.fingerprint = fingerprint;
        Ok(())
    }
}

pub fn run(mut viewer: Viewer) -> Result<(), Box<dyn Error>> {
    let mut tui = TuiGuard::new()?;
    run_loop(tui.terminal_mut(), &mut viewer)
}

fn run_loop(terminal: &mut Term, viewer: &mut Viewer) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|frame| draw_viewer(frame, viewer))?;

        if event::poll(Duration::from_millis(VIEWER_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    break;
                }
                handle_input(key.code, viewer)?;
            }
        }
    }
    Ok(())
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn handle_input(code: KeyCode, viewer: &mut Viewer) -> randomart::Result<()> {
    match code {
        KeyCode::Char('t') => viewer.next_tiles(),
        KeyCode::Char('a') => viewer.toggle_armor(),
        KeyCode::Char('r') => viewer.reroll()?,
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use randomart::{GALAXY_TILES, SSH_TILES};

    fn viewer() -> Viewer {
        Viewer::new(17, 9, vec![0x9b, 0x4c], SSH_TILES, false).unwrap()
    }

    #[test]
    fn rejects_bad_dimensions() {
        assert!(Viewer::new(0, 9, Vec::new(), SSH_TILES, false).is_err());
    }

    #[test]
    fn cycles_through_bundled_tilesets() {
        let mut v = viewer();
        v.next_tiles();
        assert_eq!(v.tiles, GALAXY_TILES);
        v.next_tiles();
        assert_eq!(v.tiles, SSH_TILES);
    }

    #[test]
    fn toggles_armor() {
        let mut v = viewer();
        assert!(!v.art().starts_with('+'));
        v.toggle_armor();
        assert!(v.art().starts_with("+-----------------+\n"));
    }

    #[test]
    fn restyling_does_not_rewalk() {
        let mut v = Viewer::new(17, 9, vec![0x9b, 0x4c], SSH_TILES, true).unwrap();
        assert!(v.art().starts_with('+'));
        let before = v.board.counts().to_vec();
        v.next_tiles();
        v.toggle_armor();
        let _ = v.art();
        let _ = v.art();
        assert_eq!(v.board.counts(), &before[..]);
        assert_eq!(v.board.counts().iter().sum::<u32>(), 1 + 4 * 2);
    }

    #[test]
    fn reroll_replaces_the_walk() {
        let mut v = viewer();
        v.reroll().unwrap();
        assert_eq!(v.fingerprint.len(), RANDOM_FINGERPRINT_LEN);
        let total: u32 = v.board.counts().iter().sum();
        assert_eq!(total as usize, 1 + 4 * RANDOM_FINGERPRINT_LEN);
    }
}
