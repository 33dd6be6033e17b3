//! Top scores table.

use super::game_common::{render_button, render_status_bar};
use super::viewport::Viewport;
use super::GameLayout;
use crate::core::entities::Bounds;
use crate::leaderboard::LeaderboardEntry;
use crate::screens::controls::LEADERBOARD_CONTROLS;
use crate::screens::LeaderboardView;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const TABLE_REGION: Bounds = Bounds::new(100, 60, 600, 400);

pub fn render_leaderboard(
    frame: &mut Frame,
    layout: &GameLayout,
    view: &LeaderboardView,
    pointer: Option<(i32, i32)>,
) {
    let viewport = Viewport::new(layout.content);

    if let Some(area) = viewport.to_cells(TABLE_REGION) {
        render_table(frame, area, view);
    }

    for control in &LEADERBOARD_CONTROLS {
        render_button(frame, &viewport, control, control.action.label(false), pointer);
    }

    render_status_bar(
        frame,
        layout.status_bar,
        Line::from(Span::styled(
            "Top 5 scores",
            Style::default().fg(Color::Yellow),
        )),
        &[("[Esc/Backspace/b]", "Back"), ("[Ctrl+Q]", "Quit")],
    );
}

fn render_table(frame: &mut Frame, area: Rect, view: &LeaderboardView) {
    let header = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled(
            "LEADERBOARD",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{:<4} {:<20} {:>7} {:>5}  {:<19}",
                "#", "Name", "Score", "Lvl", "Date (UTC)"
            ),
            header,
        )),
    ];

    if view.entries.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "No scores yet. Go set one!",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for (i, entry) in view.entries.iter().enumerate() {
        let style = if view.highlight == Some(i) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(format_row(i + 1, entry), style)));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn format_row(rank: usize, entry: &LeaderboardEntry) -> String {
    format!(
        "{:<4} {:<20} {:>7} {:>5}  {:<19}",
        format!("{}.", rank),
        entry.name,
        entry.score,
        entry.level,
        entry.date
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_line_up_with_header() {
        let entry = LeaderboardEntry {
            name: "Ace".to_string(),
            score: 120,
            level: 4,
            date: "2024-05-01 12:00:00".to_string(),
        };
        let row = format_row(1, &entry);
        assert!(row.starts_with("1.   Ace"));
        assert!(row.ends_with("2024-05-01 12:00:00"));
        assert_eq!(row.chars().count(), 4 + 1 + 20 + 1 + 7 + 1 + 5 + 2 + 19);
    }
}
