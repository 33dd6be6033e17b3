//! Terminal rendering. Scenes only read game state; they never change it.

pub mod game_common;
mod game_over_scene;
mod landing_scene;
mod leaderboard_scene;
mod play_scene;
pub mod viewport;

pub use game_common::{game_layout, GameLayout};

use crate::screens::{GameApp, Screen};
use game_common::create_game_layout;
use rand::Rng;
use ratatui::{layout::Rect, style::Color, Frame};
use viewport::Viewport;

/// Draw the current screen.
pub fn draw<R: Rng>(frame: &mut Frame, app: &GameApp<R>) {
    let screen = app.screen();
    let border = match screen {
        Screen::Playing(_) => Color::Yellow,
        Screen::GameOver(_) => Color::Red,
        _ => Color::Cyan,
    };
    let area = frame.size();
    let layout = create_game_layout(frame, area, " Bollard Striker ", border);

    match screen {
        Screen::Landing => landing_scene::render_landing(
            frame,
            &layout,
            app.settings().sound_enabled,
            app.pointer(),
        ),
        Screen::Playing(field) => play_scene::render_play(frame, &layout, field),
        Screen::GameOver(state) => game_over_scene::render_game_over(frame, &layout, state),
        Screen::LeaderboardView(view) => {
            leaderboard_scene::render_leaderboard(frame, &layout, view, app.pointer())
        }
        Screen::Exit => {}
    }
}

/// Where the logical screen sits for a terminal of this size. Mouse input
/// is mapped through the same viewport the scenes draw in.
pub fn viewport_for(size: Rect) -> Viewport {
    Viewport::new(game_layout(size).content)
}
