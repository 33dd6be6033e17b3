//! Per-frame input snapshot and its construction from terminal events.
//!
//! The state machine only ever sees a [`FrameInput`]. [`InputCollector`]
//! turns crossterm events into one snapshot per frame.

use crate::ui::viewport::Viewport;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// One text-editing keystroke, in the order typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    Char(char),
    Backspace,
}

/// Everything the player did during one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    /// Pointer position in logical screen coordinates, if over the screen.
    pub pointer: Option<(i32, i32)>,
    pub click: bool,
    pub confirm: bool,
    pub back: bool,
    pub quit: bool,
    pub text: Vec<TextEdit>,
}

impl FrameInput {
    /// Printable characters typed this frame, lowercased, for hotkeys.
    pub fn typed_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.text.iter().filter_map(|edit| match edit {
            TextEdit::Char(c) => Some(c.to_ascii_lowercase()),
            TextEdit::Backspace => None,
        })
    }

    pub fn pressed_hotkey(&self, hotkey: char) -> bool {
        self.typed_chars().any(|c| c == hotkey)
    }

    pub fn pressed_backspace(&self) -> bool {
        self.text.contains(&TextEdit::Backspace)
    }
}

/// Frames a direction stays held after a press when the terminal does not
/// report key releases. Long enough to bridge the OS key-repeat delay.
const HOLD_AFTER_PRESS_FRAMES: u8 = 18;
/// Frames a direction stays held after an auto-repeat event.
const HOLD_AFTER_REPEAT_FRAMES: u8 = 6;

/// Approximates "key is held" from press/repeat/release events.
#[derive(Debug, Clone, Copy, Default)]
struct HeldKey {
    frames_left: u8,
}

impl HeldKey {
    fn press(&mut self) {
        self.frames_left = if self.frames_left > 0 {
            HOLD_AFTER_REPEAT_FRAMES.max(self.frames_left)
        } else {
            HOLD_AFTER_PRESS_FRAMES
        };
    }

    fn release(&mut self) {
        self.frames_left = 0;
    }

    fn is_held(&self) -> bool {
        self.frames_left > 0
    }

    fn tick(&mut self) {
        self.frames_left = self.frames_left.saturating_sub(1);
    }
}

/// Accumulates terminal events between frames.
#[derive(Debug, Default)]
pub struct InputCollector {
    left: HeldKey,
    right: HeldKey,
    pointer: Option<(i32, i32)>,
    pending: FrameInput,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_event(&mut self, event: Event, viewport: &Viewport) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse, viewport),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            match key.code {
                KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => self.left.release(),
                KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => self.right.release(),
                _ => {}
            }
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => self.pending.quit = true,
            KeyCode::Left => self.steer_left(),
            KeyCode::Right => self.steer_right(),
            KeyCode::Enter => self.pending.confirm = true,
            KeyCode::Esc => self.pending.back = true,
            KeyCode::Backspace => self.pending.text.push(TextEdit::Backspace),
            KeyCode::Char(c) if !ctrl => {
                match c {
                    'a' | 'A' => self.steer_left(),
                    'd' | 'D' => self.steer_right(),
                    _ => {}
                }
                self.pending.text.push(TextEdit::Char(c));
            }
            _ => {}
        }
    }

    fn steer_left(&mut self) {
        self.right.release();
        self.left.press();
    }

    fn steer_right(&mut self) {
        self.left.release();
        self.right.press();
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, viewport: &Viewport) {
        let logical = viewport.to_logical(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => self.pointer = logical,
            MouseEventKind::Down(MouseButton::Left) => {
                self.pointer = logical;
                if logical.is_some() {
                    self.pending.click = true;
                }
            }
            _ => {}
        }
    }

    /// Close the frame: emit the snapshot and age the held-key latches.
    pub fn finish_frame(&mut self) -> FrameInput {
        let mut input = std::mem::take(&mut self.pending);
        input.left = self.left.is_held();
        input.right = self.right.is_held();
        input.pointer = self.pointer;
        self.left.tick();
        self.right.tick();
        input
    }
}
