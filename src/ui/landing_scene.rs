//! Title screen with the menu buttons.

use super::game_common::{render_button, render_status_bar};
use super::viewport::Viewport;
use super::GameLayout;
use crate::core::entities::Bounds;
use crate::screens::controls::LANDING_CONTROLS;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Title and blurb, above the buttons.
const TITLE_REGION: Bounds = Bounds::new(0, 40, 800, 240);

const CREDIT: &str = "Created by SSgt King";
const PROJECT_URL: &str = "github.com/lordbuffcloud/bollard_striker";

pub fn render_landing(
    frame: &mut Frame,
    layout: &GameLayout,
    sound_enabled: bool,
    pointer: Option<(i32, i32)>,
) {
    let viewport = Viewport::new(layout.content);

    if let Some(area) = viewport.to_cells(TITLE_REGION) {
        render_title(frame, area);
    }

    for control in &LANDING_CONTROLS {
        let label = control.action.label(sound_enabled);
        render_button(frame, &viewport, control, label, pointer);
    }

    render_status_bar(
        frame,
        layout.status_bar,
        Line::from(Span::styled(
            "Dodge the bollards. Three hits and you're out.",
            Style::default().fg(Color::Yellow),
        )),
        &[
            ("[Enter/s]", "Start"),
            ("[l]", "Leaderboard"),
            ("[m]", "Sound"),
            ("[q]", "Quit"),
        ],
    );
}

fn title_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "BOLLARD STRIKER",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "You're late for work at the base gate.",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "Steer with ←/→ or a/d and don't hit the bollards.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(CREDIT, Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled(
            PROJECT_URL,
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        )),
    ]
}

fn render_title(frame: &mut Frame, area: Rect) {
    let lines = title_lines();
    // Vertically center within the region
    let y = area.y + area.height.saturating_sub(lines.len() as u16) / 2;
    let height = (lines.len() as u16).min(area.height);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        Rect::new(area.x, y, area.width, height),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_title_credits_author_and_project() {
        let lines: Vec<String> = title_lines().iter().map(plain).collect();
        assert_eq!(lines[0], "BOLLARD STRIKER");
        assert!(lines.iter().any(|l| l == "Created by SSgt King"));
        assert_eq!(
            lines.last().map(String::as_str),
            Some("github.com/lordbuffcloud/bollard_striker")
        );
    }

    #[test]
    fn test_title_fits_its_region_on_a_small_terminal() {
        let viewport = Viewport::new(Rect::new(0, 0, 80, 24));
        let area = viewport.to_cells(TITLE_REGION).unwrap();
        assert!(title_lines().len() as u16 <= area.height);
    }
}
