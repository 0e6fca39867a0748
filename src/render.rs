use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Phase};
use crate::config::GameConfig;
use crate::game::{CellKind, GameSession};

/// How a cell kind turns into a glyph and a style.
pub trait CellSkin {
    fn symbol(&self, kind: CellKind) -> char;
    fn style(&self, kind: CellKind) -> Style;
}

pub struct BlockSkin;

impl CellSkin for BlockSkin {
    fn symbol(&self, kind: CellKind) -> char {
        match kind {
            CellKind::Empty => ' ',
            CellKind::Head => '█',
            CellKind::Body => '▓',
            CellKind::Food => '●',
        }
    }

    fn style(&self, kind: CellKind) -> Style {
        match kind {
            CellKind::Empty => Style::default(),
            CellKind::Head => Style::default().fg(Color::Yellow),
            CellKind::Body => Style::default().fg(Color::Green),
            CellKind::Food => Style::default().fg(Color::LightRed),
        }
    }
}

pub struct AsciiSkin;

impl CellSkin for AsciiSkin {
    fn symbol(&self, kind: CellKind) -> char {
        match kind {
            CellKind::Empty => ' ',
            CellKind::Head => 'O',
            CellKind::Body => 'o',
            CellKind::Food => '*',
        }
    }

    fn style(&self, _kind: CellKind) -> Style {
        Style::default()
    }
}

pub struct BoardWidget<'a> {
    session: &'a GameSession,
    skin: &'a dyn CellSkin,
    cell_width: u16,
}

impl<'a> BoardWidget<'a> {
    pub fn new(session: &'a GameSession, skin: &'a dyn CellSkin, cell_width: u16) -> Self {
        BoardWidget {
            session,
            skin,
            cell_width,
        }
    }
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for coord in self.session.grid().coords() {
            let kind = self.session.cell_at(coord);
            let symbol = self.skin.symbol(kind);
            let style = self.skin.style(kind);
            let y = area.y + coord.row;
            if y >= area.bottom() {
                continue;
            }
            for column in 0..self.cell_width {
                let x = area.x + coord.cell * self.cell_width + column;
                if x >= area.right() {
                    break;
                }
                buf[(x, y)].set_char(symbol).set_style(style);
            }
        }
    }
}

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(frame.area());

    frame.render_widget(header(app), chunks[0]);

    let borders = if app.config().border {
        Borders::ALL
    } else {
        Borders::NONE
    };
    let block = Block::default().borders(borders);
    let inner = block.inner(chunks[1]);
    frame.render_widget(block, chunks[1]);

    match app.phase() {
        Phase::Idle => {
            let text = "Welcome to Snake!\nArrow keys or WASD steer\nPress SPACE to start";
            frame.render_widget(centred(text), overlay_strip(inner, 3));
        }
        Phase::Running(session) => {
            frame.render_widget(board(session, app.config()), inner);
        }
        Phase::GameOver {
            session,
            reason,
            final_score,
        } => {
            frame.render_widget(board(session, app.config()), inner);
            let text = format!(
                "Game over!\n{}\nFinal score: {}\nPress SPACE to play again",
                reason.describe(),
                final_score
            );
            frame.render_widget(centred(&text), overlay_strip(inner, 4));
        }
    }
}

fn header(app: &App) -> Paragraph<'static> {
    let mode = if app.config().wrap_enabled {
        "wrap"
    } else {
        "walls"
    };
    let score = match app.phase() {
        Phase::Running(session) => session.score(),
        Phase::GameOver { final_score, .. } => *final_score,
        Phase::Idle => 0,
    };
    Paragraph::new(format!("Score: {}    Mode: {}", score, mode))
        .block(Block::default().borders(Borders::ALL).title("gridsnake"))
}

fn board<'a>(session: &'a GameSession, config: &GameConfig) -> BoardWidget<'a> {
    let skin: &'static dyn CellSkin = if config.ascii { &AsciiSkin } else { &BlockSkin };
    BoardWidget::new(session, skin, config.cell_width)
}

fn centred(text: &str) -> Paragraph<'_> {
    Paragraph::new(text).alignment(Alignment::Center)
}

fn overlay_strip(area: Rect, height: u16) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    chunks[1]
}
