//! Shared layout and widgets used by every scene.

use super::viewport::Viewport;
use crate::screens::Control;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Layout areas returned by `create_game_layout`.
pub struct GameLayout {
    /// The logical 800x600 screen, scaled to fit.
    pub content: Rect,
    /// Status bar area (2 lines) below the content.
    pub status_bar: Rect,
}

/// Split the terminal into the framed logical screen and a status bar.
///
/// ```text
/// ┌─ Bollard Striker ───────────────┐
/// │                                 │
/// │   [content: 800x600 logical]    │
/// │                                 │
/// │ [status bar - 2 lines]          │
/// └─────────────────────────────────┘
/// ```
///
/// Pure so the input side can compute the same viewport the scenes draw in.
pub fn game_layout(area: Rect) -> GameLayout {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(2)])
        .split(inner);
    GameLayout {
        content: chunks[0],
        status_bar: chunks[1],
    }
}

/// Draw the outer frame and return the areas inside it.
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    game_layout(area)
}

/// Two-line status bar: a message, then `[key] action` hints.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status: Line,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    frame.render_widget(
        Paragraph::new(status).alignment(Alignment::Center),
        Rect { height: 1, ..area },
    );

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Draw a control at its scaled position. Hovered controls are highlighted.
pub fn render_button(
    frame: &mut Frame,
    viewport: &Viewport,
    control: &Control,
    label: &str,
    pointer: Option<(i32, i32)>,
) {
    let Some(cells) = viewport.to_cells(control.region) else {
        return;
    };

    let hovered = control.is_hovered(pointer);
    let (fg, border) = if hovered {
        (Color::Black, Color::Yellow)
    } else if control.primary {
        (Color::White, Color::Cyan)
    } else {
        (Color::White, Color::Gray)
    };
    let mut style = Style::default().fg(fg);
    if hovered {
        style = style.bg(Color::Yellow).add_modifier(Modifier::BOLD);
    }

    let text = Line::from(vec![
        Span::styled(label.to_string(), style),
        Span::styled(
            format!(" [{}]", control.hotkey),
            style.fg(if hovered { Color::Black } else { Color::DarkGray }),
        ),
    ]);

    // Thin buttons lose their border rather than their label
    if cells.height >= 3 {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .style(style);
        let inner = block.inner(cells);
        frame.render_widget(block, cells);
        let y = inner.y + inner.height.saturating_sub(1) / 2;
        frame.render_widget(
            Paragraph::new(text).alignment(Alignment::Center),
            Rect::new(inner.x, y, inner.width, 1),
        );
    } else {
        frame.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .style(style),
            cells,
        );
    }
}

/// Centered bordered box, cleared, clipped to `area`. Returns its inner area.
pub fn render_modal(
    frame: &mut Frame,
    area: Rect,
    width: u16,
    height: u16,
    title: &str,
    color: Color,
) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    let modal = Rect::new(x, y, width, height);

    frame.render_widget(Clear, modal);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);
    inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_leaves_status_bar() {
        let layout = game_layout(Rect::new(0, 0, 82, 34));
        assert_eq!(layout.content, Rect::new(1, 1, 80, 30));
        assert_eq!(layout.status_bar, Rect::new(1, 31, 80, 2));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let layout = game_layout(Rect::new(0, 0, 3, 3));
        assert!(layout.content.width <= 1);
    }
}
