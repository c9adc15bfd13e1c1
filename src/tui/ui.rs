//! Stateless UI rendering for the game.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::app::App;
use crate::theme::Theme;
use hangdev_core::{Banner, GameSession, KeyStatus, Rgb};

/// Background and text colors for a theme.
fn palette(theme: Theme) -> Style {
    match theme {
        Theme::Dark => Style::default()
            .bg(Color::Rgb(0x28, 0x27, 0x26))
            .fg(Color::Rgb(0xF9, 0xF4, 0xDA)),
        Theme::Light => Style::default()
            .bg(Color::Rgb(0xF9, 0xF4, 0xDA))
            .fg(Color::Rgb(0x1E, 0x1E, 0x1E)),
    }
}

fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Renders the whole screen.
pub fn draw<S>(frame: &mut Frame, app: &App<S>) {
    let area = frame.area();
    let base = palette(app.theme());
    frame.render_widget(Block::default().style(base), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(4), // Status banner
            Constraint::Length(3), // Stakes
            Constraint::Length(3), // Word
            Constraint::Length(4), // Keyboard
            Constraint::Min(2),    // Screen-reader text
            Constraint::Length(1), // Controls
        ])
        .split(area);

    let session = app.session();

    let title = Paragraph::new(vec![
        Line::from(Span::styled("HangDev", base.add_modifier(Modifier::BOLD))),
        Line::from("Guess the word. Save the language. Or it's gone 💀"),
    ])
    .style(base)
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_banner(frame, chunks[1], session, base);
    draw_stakes(frame, chunks[2], session, base);
    draw_word(frame, chunks[3], session, base);
    draw_keyboard(frame, chunks[4], session, base);

    let mut lines = Vec::new();
    if let Some(announcement) = session.announcement() {
        lines.push(Line::from(announcement));
    }
    lines.push(Line::from(format!("Current word: {}", session.word_description())));
    let status = Paragraph::new(lines)
        .style(base.add_modifier(Modifier::DIM))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(status, chunks[5]);

    let controls = Paragraph::new(format!(
        "a-z guess · Enter new game · Tab {} · Esc quit",
        app.theme().toggle_label().to_lowercase()
    ))
    .style(base.add_modifier(Modifier::ITALIC))
    .alignment(Alignment::Center);
    frame.render_widget(controls, chunks[6]);
}

fn draw_banner<S, R>(frame: &mut Frame, area: Rect, session: &GameSession<S, R>, base: Style) {
    let banner = session.banner();
    let style = match banner {
        Banner::Victory => Style::default().bg(Color::Rgb(0x10, 0xA9, 0x5B)).fg(Color::White),
        Banner::Defeat => Style::default().bg(Color::Rgb(0xBA, 0x2A, 0x2A)).fg(Color::White),
        Banner::Farewell(_) => Style::default()
            .bg(Color::Rgb(0x7A, 0x5E, 0xA7))
            .fg(Color::White)
            .add_modifier(Modifier::ITALIC),
        Banner::None => base,
    };

    let mut lines = Vec::new();
    if let Some(title) = banner.title() {
        lines.push(Line::from(Span::styled(title, style.add_modifier(Modifier::BOLD))));
    }
    if let Some(message) = banner.message() {
        lines.push(Line::from(message.to_string()));
    }

    let paragraph = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).style(style));
    frame.render_widget(paragraph, area);
}

fn draw_stakes<S, R>(frame: &mut Frame, area: Rect, session: &GameSession<S, R>, base: Style) {
    let mut spans = Vec::new();
    for stake in session.stakes() {
        let style = if stake.eliminated {
            base.fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default()
                .bg(rgb(*stake.entry.background()))
                .fg(rgb(*stake.entry.foreground()))
        };
        let label = if stake.eliminated {
            format!(" 💀{} ", stake.entry.label())
        } else {
            format!(" {} ", stake.entry.label())
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(base)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn draw_word<S, R>(frame: &mut Frame, area: Rect, session: &GameSession<S, R>, base: Style) {
    let cell = base.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    let spans: Vec<Span> = session
        .revealed_word()
        .into_iter()
        .flat_map(|letter| {
            let shown = if letter.visible {
                letter.letter.as_char().to_ascii_uppercase()
            } else {
                ' '
            };
            let style = if letter.missed {
                cell.fg(Color::Rgb(0xEC, 0x5D, 0x49))
            } else {
                cell
            };
            [Span::styled(format!(" {shown} "), style), Span::raw(" ")]
        })
        .collect();

    let paragraph = Paragraph::new(Line::from(spans))
        .style(base)
        .alignment(Alignment::Center)
        .block(Block::default().style(base));
    frame.render_widget(paragraph, area);
}

fn draw_keyboard<S, R>(frame: &mut Frame, area: Rect, session: &GameSession<S, R>, base: Style) {
    let disabled = session.is_over();
    let keys = session.keyboard();

    let lines: Vec<Line> = keys
        .chunks(13)
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .flat_map(|(letter, status)| {
                    let bg = match status {
                        KeyStatus::Unguessed => Color::Rgb(0xFC, 0xBA, 0x29),
                        KeyStatus::Correct => Color::Rgb(0x10, 0xA9, 0x5B),
                        KeyStatus::Wrong => Color::Rgb(0xEC, 0x5D, 0x49),
                    };
                    let mut style = Style::default().bg(bg).fg(Color::Black);
                    if disabled {
                        style = style.add_modifier(Modifier::DIM);
                    }
                    let label = format!(" {} ", letter.as_char().to_ascii_uppercase());
                    [Span::styled(label, style), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .style(base)
        .alignment(Alignment::Center)
        .block(Block::default().style(base));
    frame.render_widget(paragraph, area);
}
