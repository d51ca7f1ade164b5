use ratatui::prelude::*;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::app::Viewer;

const SIDEBAR_W: u16 = 26;

pub fn draw_viewer(frame: &mut Frame, viewer: &Viewer) {
    let area = frame.size();

    // Outer "cabinet" frame.
    let cabinet = Block::default()
        .title("RANDOMART")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    let cabinet_inner = cabinet.inner(area);
    frame.render_widget(cabinet, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(SIDEBAR_W)])
        .split(cabinet_inner);

    draw_art(frame, viewer, cols[0]);
    draw_sidebar(frame, viewer, cols[1]);
}

fn draw_art(frame: &mut Frame, viewer: &Viewer, area: Rect) {
    let art = viewer.art();
    let lines: Vec<Line> = art.lines().map(|row| Line::raw(row.to_string())).collect();
    let art_w = art.lines().map(|row| row.width()).max().unwrap_or(0) as u16;
    let art_h = lines.len() as u16;

    // Center the art within the pane; clip if the terminal is too small.
    let v_center = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(art_h.min(area.height)),
            Constraint::Min(0),
        ])
        .split(area);
    let h_center = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(art_w.min(area.width)),
            Constraint::Min(0),
        ])
        .split(v_center[1]);

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(paragraph, h_center[1]);
}

fn draw_sidebar(frame: &mut Frame, viewer: &Viewer, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(7)])
        .split(area);

    let board = &viewer.board;
    let start = board.start();
    let end = board
        .end()
        .map_or_else(|| "-".to_string(), |e| format!("{},{}", e.x, e.y));

    let info = Paragraph::new(vec![
        Line::raw(format!("{:<7} {}", "TILES:", viewer.tiles.id())),
        Line::raw(format!("{:<7} {}x{}", "SIZE:", board.width(), board.height())),
        Line::raw(format!("{:<7} {},{}", "START:", start.x, start.y)),
        Line::raw(format!("{:<7} {}", "END:", end)),
        Line::raw(""),
        Line::raw(hex::encode(&viewer.fingerprint)),
    ])
    .block(Block::default().title("INFO").borders(Borders::ALL))
    .wrap(Wrap { trim: false });
    frame.render_widget(info, chunks[0]);

    let controls = Paragraph::new("t tiles\na armor\nr reroll\nq quit")
        .block(Block::default().title("CONTROLS").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(controls, chunks[1]);
}
