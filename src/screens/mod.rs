//! Screen state machine: Landing -> Playing -> GameOver -> LeaderboardView.
//!
//! ```text
//!            Start                 health == 0
//! Landing ─────────────▶ Playing ─────────────▶ GameOver
//!   ▲  │ View Leaderboard                         │ name submitted,
//!   │  ▼                                          │ 3s summary
//!   └─ LeaderboardView ◀──────────────────────────┘
//!      (Back)
//! ```
//!
//! Quit is accepted on every screen and leads to `Exit` without saving
//! anything that is still in progress.

pub mod controls;
pub mod name_entry;

use crate::core::constants::GAME_OVER_SUMMARY_FRAMES;
use crate::core::engine::{process_tick, FinalResult, Playfield};
use crate::core::entities::Steer;
use crate::input::FrameInput;
use crate::leaderboard::{LeaderboardEntry, LeaderboardStore};
use crate::settings::Settings;
use controls::{activated_action, ControlAction, LANDING_CONTROLS, LEADERBOARD_CONTROLS};
use name_entry::NameEntry;
use rand::Rng;
use std::path::PathBuf;

pub use controls::Control;
pub use name_entry::NameEntryError;

/// Whether the main loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Things the presentation layer may want to react to (sound cues).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    Click,
    Collision,
    LevelUp,
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOverPhase {
    /// Waiting for the player's name.
    NameEntry(NameEntry),
    /// Score recorded; shown for a fixed time before the leaderboard.
    Summary {
        name: String,
        rank: Option<usize>,
        entries: Vec<LeaderboardEntry>,
        frames_left: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOverState {
    pub result: FinalResult,
    pub phase: GameOverPhase,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardView {
    pub entries: Vec<LeaderboardEntry>,
    /// Row to highlight (the score just recorded), 0-based.
    pub highlight: Option<usize>,
}

#[derive(Debug, Clone)]
pub enum Screen {
    Landing,
    Playing(Playfield),
    GameOver(GameOverState),
    LeaderboardView(LeaderboardView),
    Exit,
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Landing => "Landing",
            Screen::Playing(_) => "Playing",
            Screen::GameOver(_) => "GameOver",
            Screen::LeaderboardView(_) => "LeaderboardView",
            Screen::Exit => "Exit",
        }
    }
}

/// The whole game: current screen plus the services screens need.
pub struct GameApp<R: Rng> {
    screen: Screen,
    store: LeaderboardStore,
    settings: Settings,
    settings_path: Option<PathBuf>,
    rng: R,
    pointer: Option<(i32, i32)>,
    events: Vec<UiEvent>,
}

impl<R: Rng> GameApp<R> {
    pub fn new(store: LeaderboardStore, settings: Settings, rng: R) -> Self {
        Self {
            screen: Screen::Landing,
            store,
            settings,
            settings_path: None,
            rng,
            pointer: None,
            events: Vec::new(),
        }
    }

    /// Persist settings changes (the sound toggle) to this file.
    pub fn with_settings_path(mut self, path: PathBuf) -> Self {
        self.settings_path = Some(path);
        self
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &LeaderboardStore {
        &self.store
    }

    /// Last known pointer position, for hover highlighting.
    pub fn pointer(&self) -> Option<(i32, i32)> {
        self.pointer
    }

    /// Events raised since the last call.
    pub fn take_events(&mut self) -> Vec<UiEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advance one frame.
    pub fn step(&mut self, input: &FrameInput) -> Flow {
        self.pointer = input.pointer;

        if input.quit {
            if !matches!(self.screen, Screen::Exit) {
                log::info!("Quit requested on {} screen", self.screen.name());
            }
            self.screen = Screen::Exit;
            return Flow::Exit;
        }

        let current = std::mem::replace(&mut self.screen, Screen::Exit);
        let previous = current.name();
        let next = match current {
            Screen::Landing => self.step_landing(input),
            Screen::Playing(field) => self.step_playing(field, input),
            Screen::GameOver(state) => self.step_game_over(state, input),
            Screen::LeaderboardView(view) => self.step_leaderboard(view, input),
            Screen::Exit => Screen::Exit,
        };
        if next.name() != previous {
            log::debug!("Screen {} -> {}", previous, next.name());
        }
        self.screen = next;

        match self.screen {
            Screen::Exit => Flow::Exit,
            _ => Flow::Continue,
        }
    }

    fn step_landing(&mut self, input: &FrameInput) -> Screen {
        let Some(action) = activated_action(&LANDING_CONTROLS, input) else {
            return Screen::Landing;
        };
        self.events.push(UiEvent::Click);

        match action {
            ControlAction::Start => self.start_session(),
            ControlAction::ViewLeaderboard => {
                log::debug!("Opening leaderboard from landing");
                Screen::LeaderboardView(LeaderboardView {
                    entries: self.store.load(),
                    highlight: None,
                })
            }
            ControlAction::ToggleSound => {
                let enabled = self.settings.toggle_sound();
                log::info!("Sound {}", if enabled { "enabled" } else { "disabled" });
                if let Some(path) = &self.settings_path {
                    if let Err(e) = self.settings.save(path) {
                        log::error!("Failed to save settings to {}: {}", path.display(), e);
                    }
                }
                Screen::Landing
            }
            ControlAction::Quit => {
                log::info!("Quit selected on landing screen");
                Screen::Exit
            }
            ControlAction::Back => Screen::Landing,
        }
    }

    fn start_session(&mut self) -> Screen {
        log::info!("Starting new session");
        Screen::Playing(Playfield::new(&mut self.rng))
    }

    fn step_playing(&mut self, mut field: Playfield, input: &FrameInput) -> Screen {
        let steer = Steer::from_held(input.left, input.right);
        let outcome = process_tick(&mut field, steer, &mut self.rng);

        if outcome.leveled_up {
            log::debug!(
                "Level up: level {}, speed {}, multiplier {:.1}x",
                field.session.level,
                field.session.obstacle_speed,
                field.session.multiplier()
            );
            self.events.push(UiEvent::LevelUp);
        }
        if outcome.hit.is_some() {
            log::debug!("Collision, health now {}", field.session.health);
            self.events.push(UiEvent::Collision);
        }

        if outcome.session_over {
            let result = field.final_result();
            log::info!(
                "Session over: score {}, level {}",
                result.score,
                result.level
            );
            self.events.push(UiEvent::GameOver);
            return Screen::GameOver(GameOverState {
                result,
                phase: GameOverPhase::NameEntry(NameEntry::new()),
            });
        }

        Screen::Playing(field)
    }

    fn step_game_over(&mut self, mut state: GameOverState, input: &FrameInput) -> Screen {
        match state.phase {
            GameOverPhase::NameEntry(ref mut entry) => {
                entry.apply(&input.text);
                if !input.confirm {
                    return Screen::GameOver(state);
                }
                let name = match entry.submit() {
                    Ok(name) => name,
                    Err(e) => {
                        log::debug!("Rejected name: {}", e);
                        return Screen::GameOver(state);
                    }
                };
                self.events.push(UiEvent::Click);
                state.phase = self.record_score(name, state.result);
                Screen::GameOver(state)
            }
            GameOverPhase::Summary {
                ref mut frames_left,
                ..
            } if *frames_left > 1 => {
                *frames_left -= 1;
                Screen::GameOver(state)
            }
            GameOverPhase::Summary { rank, entries, .. } => {
                Screen::LeaderboardView(LeaderboardView {
                    entries,
                    highlight: rank.map(|r| r - 1),
                })
            }
        }
    }

    fn record_score(&mut self, name: String, result: FinalResult) -> GameOverPhase {
        let (rank, entries) = match self.store.update(&name, result.score, result.level) {
            Ok(outcome) => {
                log::info!(
                    "Recorded {} with score {} (rank {:?})",
                    name,
                    result.score,
                    outcome.rank
                );
                (outcome.rank, outcome.entries)
            }
            Err(e) => {
                log::error!("Failed to record score for {}: {}", name, e);
                (None, self.store.load())
            }
        };
        GameOverPhase::Summary {
            name,
            rank,
            entries,
            frames_left: GAME_OVER_SUMMARY_FRAMES,
        }
    }

    fn step_leaderboard(&mut self, view: LeaderboardView, input: &FrameInput) -> Screen {
        let back = input.back
            || input.pressed_backspace()
            || activated_action(&LEADERBOARD_CONTROLS, input) == Some(ControlAction::Back);
        if back {
            self.events.push(UiEvent::Click);
            Screen::Landing
        } else {
            Screen::LeaderboardView(view)
        }
    }
}
