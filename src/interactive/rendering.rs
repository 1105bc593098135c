//! TUI rendering with ratatui
//!
//! Board, mistake budget and messages for the puzzle interface.

use super::app::{App, MessageStyle};
use crate::core::{CategoryIndex, GROUP_SIZE, Word};
use crate::engine::Outcome;
use crate::output::formatters::{DIFFICULTY, category_rgb, category_text_rgb, mistake_dots};
use crate::output::share::share_text;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Height of one board row
const ROW_HEIGHT: u16 = 3;

/// Fill for a revealed category row or a pending tile
#[must_use]
pub const fn tile_color(index: CategoryIndex) -> Color {
    let (r, g, b) = category_rgb(index);
    Color::Rgb(r, g, b)
}

/// Text drawn on a category fill
#[must_use]
pub const fn tile_text_color(index: CategoryIndex) -> Color {
    let (r, g, b) = category_text_rgb(index);
    Color::Rgb(r, g, b)
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Board
            Constraint::Length(3), // Mistakes
            Constraint::Length(8), // Messages / share
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_board(f, app, chunks[1]);
    render_mistakes(f, app, chunks[2]);

    if app.session.outcome().is_finished() {
        render_share(f, app, chunks[3]);
    } else {
        render_messages(f, app, chunks[3]);
    }

    render_status(f, app, chunks[4]);

    if app.show_help {
        render_help(f, f.area());
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let puzzle = app.session.puzzle();
    let title = if puzzle.title().is_empty() {
        "CLUSTERS".to_string()
    } else {
        puzzle.title().to_uppercase()
    };
    let text = if puzzle.author().is_empty() {
        title
    } else {
        format!("{title} by {}", puzzle.author().to_uppercase())
    };

    let header = Paragraph::new(text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let revealed = app.session.revealed();
    let pool = app.session.pool();
    let pool_rows = pool.len().div_ceil(GROUP_SIZE);

    let constraints: Vec<Constraint> = (0..revealed.len() + pool_rows)
        .map(|_| Constraint::Length(ROW_HEIGHT))
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (row, &index) in rows.iter().zip(&revealed) {
        render_category(f, app, index, *row);
    }

    let pool_areas = rows.iter().skip(revealed.len());
    for (row_index, (chunk, row)) in pool.chunks(GROUP_SIZE).zip(pool_areas).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Fill(1); GROUP_SIZE])
            .split(*row);

        for (col, (word, cell)) in chunk.iter().zip(cells.iter()).enumerate() {
            render_tile(f, app, word, row_index * GROUP_SIZE + col, *cell);
        }
    }
}

fn render_category(f: &mut Frame, app: &App, index: CategoryIndex, area: Rect) {
    let category = app.session.puzzle().category(index);
    let words: Vec<&str> = category.words().iter().map(Word::text).collect();

    let content = vec![
        Line::from(Span::styled(
            category.name().to_uppercase(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(words.join(", ")),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .style(Style::default().fg(tile_text_color(index)).bg(tile_color(index)))
        .block(Block::default().borders(Borders::NONE));
    f.render_widget(paragraph, area);
}

fn render_tile(f: &mut Frame, app: &App, word: &Word, position: usize, area: Rect) {
    let pending = app
        .session
        .pending()
        .filter(|p| p.guess.contains(word))
        .map(|p| p.category);

    let style = if let Some(index) = pending {
        Style::default()
            .fg(tile_text_color(index))
            .bg(tile_color(index))
            .add_modifier(Modifier::BOLD)
    } else if app.session.is_selected(word) {
        Style::default()
            .fg(Color::White)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let border = if position == app.cursor && !app.session.outcome().is_finished() {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let tile = Paragraph::new(word.text())
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border),
        );
    f.render_widget(tile, area);
}

fn render_mistakes(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.session.remaining_mistakes();
    let color = if remaining <= 1 {
        Color::Red
    } else {
        Color::White
    };

    let content = Line::from(vec![
        Span::raw("Mistakes remaining: "),
        Span::styled(
            mistake_dots(remaining, app.session.max_mistakes()),
            Style::default().fg(color),
        ),
    ]);

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Warning => Style::default().fg(Color::Yellow),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_share(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.session.outcome() {
        Outcome::Won => (" 🎉 You won, congrats! ", Color::Green),
        _ => (" Next time! ", Color::Red),
    };

    let text = share_text(
        app.session.puzzle(),
        app.session.history(),
        app.session.max_mistakes(),
    );

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(paragraph, area);
}

/// Rules and colour legend drawn over the centre of the screen
fn render_help(f: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from("Find four groups of four words that share something in common."),
        Line::from(""),
        Line::from("Arrows/hjkl move, Space selects, Enter submits four words."),
        Line::from("s shuffles, d deselects, n starts a new game, q quits."),
        Line::from(""),
        Line::from(Span::styled(
            "Category colours, easiest first",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    lines.extend(CategoryIndex::ALL.into_iter().zip(DIFFICULTY).map(|(index, label)| {
        Line::from(vec![
            Span::styled("    ", Style::default().bg(tile_color(index))),
            Span::raw(format!(" {label}")),
        ])
    }));

    let popup = centered(area, 68, lines.len() as u16 + 2);
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(" Help (? to close) ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(30),
            Constraint::Percentage(50),
        ])
        .split(area);

    let selected = Paragraph::new(format!(
        "Selected: {}/{GROUP_SIZE}",
        app.session.selection().len()
    ))
    .alignment(Alignment::Center);
    f.render_widget(selected, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.session.outcome().is_finished() {
        "q: Quit | n: New Game | ?: Help"
    } else if app.session.can_submit() {
        "Enter: Submit | d: Deselect | s: Shuffle | ?: Help"
    } else {
        "Arrows: Move | Space: Select | s: Shuffle | ?: Help"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
