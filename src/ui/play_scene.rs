//! In-session rendering: the road, the car, and the falling bollards.

use super::game_common::render_status_bar;
use super::viewport::Viewport;
use super::GameLayout;
use crate::core::constants::STARTING_HEALTH;
use crate::core::engine::Playfield;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_play(frame: &mut Frame, layout: &GameLayout, field: &Playfield) {
    let viewport = Viewport::new(layout.content);

    for obstacle in &field.obstacles {
        if let Some(cells) = viewport.to_cells(obstacle.bounds()) {
            fill(frame, cells, '█', Color::Red);
        }
    }

    if let Some(cells) = viewport.to_cells(field.player.bounds()) {
        fill(frame, cells, '▓', Color::Yellow);
    }

    render_hud(frame, layout.status_bar, field);
}

/// Paint a solid block of `glyph`.
fn fill(frame: &mut Frame, area: Rect, glyph: char, color: Color) {
    let row: String = std::iter::repeat(glyph).take(area.width as usize).collect();
    let lines: Vec<Line> = (0..area.height)
        .map(|_| Line::from(Span::styled(row.clone(), Style::default().fg(color))))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_hud(frame: &mut Frame, area: Rect, field: &Playfield) {
    let session = &field.session;
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let lost = STARTING_HEALTH.saturating_sub(session.health);
    let hearts = format!(
        "{}{}",
        "♥".repeat(session.health as usize),
        "♡".repeat(lost as usize)
    );

    let status = Line::from(vec![
        Span::styled("Score: ", label),
        Span::styled(session.display_score().to_string(), value),
        Span::styled("   Multiplier: ", label),
        Span::styled(format!("{:.1}x", session.multiplier()), value),
        Span::styled("   Level: ", label),
        Span::styled(session.level.to_string(), value),
        Span::styled("   Health: ", label),
        Span::styled(hearts, Style::default().fg(Color::Red)),
    ]);

    render_status_bar(
        frame,
        area,
        status,
        &[("[←/→ a/d]", "Steer"), ("[Ctrl+Q]", "Quit")],
    );
}
