//! Game over: name prompt, then a short summary before the leaderboard.

use super::game_common::{render_modal, render_status_bar};
use super::GameLayout;
use crate::core::constants::{MAX_NAME_LEN, TARGET_FPS};
use crate::screens::name_entry::NameEntry;
use crate::screens::{GameOverPhase, GameOverState};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_game_over(frame: &mut Frame, layout: &GameLayout, state: &GameOverState) {
    let inner = render_modal(frame, layout.content, 44, 12, " Game Over ", Color::Red);

    let mut lines = vec![
        Line::from(Span::styled(
            "YOU CRASHED",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                state.result.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("   Level: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                state.result.level.to_string(),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
    ];

    match &state.phase {
        GameOverPhase::NameEntry(entry) => {
            lines.extend(name_prompt_lines(entry));
            frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
            render_status_bar(
                frame,
                layout.status_bar,
                Line::from(Span::styled(
                    "Enter your name for the leaderboard",
                    Style::default().fg(Color::Yellow),
                )),
                &[("[Enter]", "Save"), ("[Backspace]", "Delete"), ("[Ctrl+Q]", "Quit")],
            );
        }
        GameOverPhase::Summary {
            name,
            rank,
            frames_left,
            ..
        } => {
            let placed = match rank {
                Some(r) => Line::from(Span::styled(
                    format!("{} placed #{} on the leaderboard!", name, r),
                    Style::default().fg(Color::Green),
                )),
                None => Line::from(Span::styled(
                    format!("Nice try, {}. Not a top score this time.", name),
                    Style::default().fg(Color::White),
                )),
            };
            lines.push(placed);
            frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);

            let seconds = frames_left.div_ceil(TARGET_FPS);
            render_status_bar(
                frame,
                layout.status_bar,
                Line::from(Span::styled(
                    format!("Leaderboard in {}s", seconds),
                    Style::default().fg(Color::DarkGray),
                )),
                &[],
            );
        }
    }
}

fn name_prompt_lines(entry: &NameEntry) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "Enter your name:",
            Style::default().fg(Color::White),
        )),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Cyan)),
            Span::styled(
                entry.buffer.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("_", Style::default().fg(Color::Cyan)),
        ]),
        Line::from(Span::styled(
            format!("{}/{}", entry.len(), MAX_NAME_LEN),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    if let Some(error) = entry.error {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        )));
    }
    lines
}
