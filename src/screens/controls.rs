//! Clickable buttons: a closed set of actions, each with a hit region.

use crate::core::entities::Bounds;
use crate::input::FrameInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Start,
    ViewLeaderboard,
    ToggleSound,
    Quit,
    Back,
}

impl ControlAction {
    /// Button caption. The sound toggle shows its current state.
    pub fn label(&self, sound_enabled: bool) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::ViewLeaderboard => "View Leaderboard",
            Self::ToggleSound if sound_enabled => "Sound: On",
            Self::ToggleSound => "Sound: Off",
            Self::Quit => "Quit",
            Self::Back => "Back",
        }
    }
}

/// A button on one of the menu screens, in logical screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    pub action: ControlAction,
    pub region: Bounds,
    /// Keyboard shortcut (lowercase).
    pub hotkey: char,
    /// Also triggered by the confirm key.
    pub primary: bool,
}

impl Control {
    pub const fn new(action: ControlAction, region: Bounds, hotkey: char, primary: bool) -> Self {
        Self {
            action,
            region,
            hotkey,
            primary,
        }
    }

    pub fn is_hovered(&self, pointer: Option<(i32, i32)>) -> bool {
        pointer.is_some_and(|(x, y)| self.region.contains(x, y))
    }

    pub fn is_activated(&self, input: &FrameInput) -> bool {
        (input.click && self.is_hovered(input.pointer))
            || input.pressed_hotkey(self.hotkey)
            || (self.primary && input.confirm)
    }
}

pub const LANDING_CONTROLS: [Control; 4] = [
    Control::new(ControlAction::Start, Bounds::new(300, 300, 200, 80), 's', true),
    Control::new(
        ControlAction::ViewLeaderboard,
        Bounds::new(250, 400, 300, 80),
        'l',
        false,
    ),
    Control::new(
        ControlAction::ToggleSound,
        Bounds::new(250, 500, 140, 50),
        'm',
        false,
    ),
    Control::new(ControlAction::Quit, Bounds::new(410, 500, 140, 50), 'q', false),
];

pub const LEADERBOARD_CONTROLS: [Control; 1] = [Control::new(
    ControlAction::Back,
    Bounds::new(325, 500, 150, 50),
    'b',
    true,
)];

/// First control activated this frame, in list order.
pub fn activated_action(controls: &[Control], input: &FrameInput) -> Option<ControlAction> {
    controls
        .iter()
        .find(|c| c.is_activated(input))
        .map(|c| c.action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::TextEdit;

    #[test]
    fn test_click_inside_activates() {
        let input = FrameInput {
            pointer: Some((400, 340)),
            click: true,
            ..FrameInput::default()
        };
        assert_eq!(
            activated_action(&LANDING_CONTROLS, &input),
            Some(ControlAction::Start)
        );
    }

    #[test]
    fn test_hover_without_click_does_nothing() {
        let input = FrameInput {
            pointer: Some((400, 440)),
            ..FrameInput::default()
        };
        assert!(LANDING_CONTROLS[1].is_hovered(input.pointer));
        assert_eq!(activated_action(&LANDING_CONTROLS, &input), None);
    }

    #[test]
    fn test_click_outside_does_nothing() {
        let input = FrameInput {
            pointer: Some((10, 10)),
            click: true,
            ..FrameInput::default()
        };
        assert_eq!(activated_action(&LANDING_CONTROLS, &input), None);
    }

    #[test]
    fn test_hotkeys_case_insensitive() {
        let input = FrameInput {
            text: vec![TextEdit::Char('L')],
            ..FrameInput::default()
        };
        assert_eq!(
            activated_action(&LANDING_CONTROLS, &input),
            Some(ControlAction::ViewLeaderboard)
        );
    }

    #[test]
    fn test_confirm_hits_primary() {
        let input = FrameInput {
            confirm: true,
            ..FrameInput::default()
        };
        assert_eq!(
            activated_action(&LANDING_CONTROLS, &input),
            Some(ControlAction::Start)
        );
        assert_eq!(
            activated_action(&LEADERBOARD_CONTROLS, &input),
            Some(ControlAction::Back)
        );
    }

    #[test]
    fn test_regions_do_not_overlap() {
        for (i, a) in LANDING_CONTROLS.iter().enumerate() {
            for b in LANDING_CONTROLS.iter().skip(i + 1) {
                assert!(!a.region.overlaps(&b.region), "{:?} vs {:?}", a.action, b.action);
            }
        }
    }

    #[test]
    fn test_sound_label_reflects_state() {
        assert_eq!(ControlAction::ToggleSound.label(true), "Sound: On");
        assert_eq!(ControlAction::ToggleSound.label(false), "Sound: Off");
    }
}
