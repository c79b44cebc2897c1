//! TUI rendering with ratatui
//!
//! Panels for the Blossom assistant: the current proposal, the projected
//! plan, the played words, and a score gauge over the twelve rounds.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{BANK_SIZE, PETAL_COUNT, ROUNDS};
use crate::output::formatters::{format_bank, letter, word_icon};
use crate::solver::{Engine, EngineType};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = match &app.game {
        Some(game) => format!("🌸 BLOSSOM - {}", format_bank(game.bank())),
        None => "🌸 BLOSSOM - Word Game Assistant".to_string(),
    };
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Magenta)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),      // Current proposal
            Constraint::Percentage(50), // Plan
            Constraint::Percentage(50), // History
        ])
        .split(area);

    render_proposal(f, app, chunks[0]);
    render_plan(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn status_color(app: &App, word: &str) -> Color {
    match app.bank_dictionary.is_validated(word) {
        None => Color::Red,
        Some(false) => Color::Yellow,
        Some(true) => Color::Green,
    }
}

fn render_proposal(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Current Round ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let content = match (&app.game, &app.proposal) {
        (Some(game), Some(proposal)) => {
            let mut lines = vec![
                Line::from(format!(
                    "Round {} of {ROUNDS}   Special letter: {}",
                    game.round() + 1,
                    letter(game.special())
                )),
                Line::from(vec![
                    Span::raw("I play:    "),
                    Span::raw(word_icon(app.bank_dictionary.status(&proposal.word), &proposal.word)),
                    Span::raw(" "),
                    Span::styled(
                        proposal.word.to_uppercase(),
                        Style::default()
                            .fg(status_color(app, &proposal.word))
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(format!("Points:    {}", proposal.points)),
            ];
            if let Some(expected) = proposal.expected_total {
                lines.push(Line::from(format!("Expected:  {expected} points")));
            }
            lines
        }
        (Some(game), None) => vec![
            Line::from(format!("Final score: {} points", game.score())),
            Line::from(format!("Words played: {}", game.turns().len())),
        ],
        (None, _) => vec![Line::from("Enter a bank to start")],
    };

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_plan(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Projected Plan ")
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Cyan));

    let (Some(plan), Some(game)) = (&app.plan, &app.game) else {
        let text = match app.settings.engine {
            EngineType::Greedy(_) => "The greedy engine does not plan ahead",
            EngineType::Better(_) => "No plan",
        };
        f.render_widget(Paragraph::new(text).block(block), area);
        return;
    };

    let mut lines: Vec<Line> = Vec::with_capacity(PETAL_COUNT);
    for i in 0..PETAL_COUNT {
        let petal = game.bank().petals()[i];
        let bucket = &plan.buckets[i];
        let label_style = if petal == plan.special {
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else if bucket.len() < plan.still_needed[i] {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::White)
        };

        let mut spans = vec![Span::styled(
            format!("{} {}/{}: ", letter(petal), bucket.len(), plan.still_needed[i]),
            label_style,
        )];
        for a in bucket {
            spans.push(Span::styled(
                format!("{} ({}) ", a.word.to_uppercase(), a.points),
                Style::default().fg(status_color(app, &a.word)),
            ));
        }
        lines.push(Line::from(spans));
    }

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .game
        .iter()
        .flat_map(|g| g.turns().iter().rev())
        .map(|turn| {
            let distinct = {
                let mut letters: Vec<u8> = turn.word.bytes().collect();
                letters.sort_unstable();
                letters.dedup();
                letters.len()
            };
            let icon = if distinct == BANK_SIZE { "🌸" } else { "  " };
            ListItem::new(format!(
                "{:>2}. {} {} {:<12} {:>3}",
                turn.round + 1,
                letter(turn.letter),
                icon,
                turn.word.to_uppercase(),
                turn.points
            ))
        })
        .collect();

    let history =
        List::new(items).block(Block::default().title(" Played ").borders(Borders::ALL));
    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Round gauge
            Constraint::Length(3), // Score gauge
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_progress(f, app, chunks[0], chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_progress(f: &mut Frame, app: &App, rounds_area: Rect, score_area: Rect) {
    let (round, score, expected) = app.game.as_ref().map_or((0, 0, 0), |g| {
        let expected = app
            .proposal
            .as_ref()
            .and_then(|p| p.expected_total)
            .unwrap_or_else(|| g.score());
        (g.round(), g.score(), expected)
    });

    let rounds = Gauge::default()
        .block(
            Block::default()
                .title(" Rounds ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Magenta))
        .percent((round * 100 / ROUNDS) as u16)
        .label(format!("{round}/{ROUNDS}"));
    f.render_widget(rounds, rounds_area);

    let ratio = if expected == 0 {
        0.0
    } else {
        (f64::from(score) / f64::from(expected)).min(1.0)
    };
    let score_gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Score ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(ratio)
        .label(format!("{score} / {expected} expected"));
    f.render_widget(score_gauge, score_area);
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
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::BankEntry => (
            " Enter Bank (7 letters, center first) | Enter to start ",
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        ),
        InputMode::Deciding => (
            " Is that a valid word? y: accept | n: reject ",
            app.proposal
                .as_ref()
                .map(|p| p.word.to_uppercase())
                .unwrap_or_default(),
            Color::Cyan,
        ),
        InputMode::GameOver => (
            " 🌸 GAME OVER 🌸 | Press 'n' for a new bank or 'q' to quit ",
            String::new(),
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let engine = format!(
        "Engine: {} | {}",
        app.settings.engine.name(),
        app.settings.rotation.name()
    );
    f.render_widget(Paragraph::new(engine).alignment(Alignment::Center), chunks[0]);

    let games = format!(
        "Games: {} | Best: {}",
        app.stats.games_played, app.stats.best_total
    );
    f.render_widget(Paragraph::new(games).alignment(Alignment::Center), chunks[1]);

    let words = format!(
        "+{} validated | -{} removed",
        app.stats.words_validated, app.stats.words_removed
    );
    f.render_widget(Paragraph::new(words).alignment(Alignment::Center), chunks[2]);

    let help_text = match app.input_mode {
        InputMode::BankEntry => "Esc: Quit | Enter: Start",
        InputMode::Deciding => "y: Accept | n: Reject | q: Quit",
        InputMode::GameOver => "n: New Bank | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
