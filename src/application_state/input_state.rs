//! # Input State
//!
//! This module defines the input state types used by the input manager.
//! It provides the logical actions the sandbox understands, the per-frame
//! state of each action, and the snapshot handed to every simulation tick.

use std::collections::HashMap;

use phf::phf_map;
use serde::{Deserialize, Serialize};

/// Logical actions the player can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Walk forward
    Forward,
    /// Walk backward
    Back,
    /// Strafe left
    Left,
    /// Strafe right
    Right,
    /// Jump
    Jump,
    /// Hit the block under the crosshair
    BreakAction,
}

impl Action {
    /// Every action, in a fixed order.
    pub const ALL: [Action; 6] = [
        Action::Forward,
        Action::Back,
        Action::Left,
        Action::Right,
        Action::Jump,
        Action::BreakAction,
    ];

    /// The action bound to a physical key or button code, such as `"KeyW"`.
    pub fn for_code(code: &str) -> Option<Action> {
        KEY_BINDINGS.get(code).copied()
    }
}

/// Default bindings from key/button codes to actions.
static KEY_BINDINGS: phf::Map<&'static str, Action> = phf_map! {
    "KeyW" => Action::Forward,
    "KeyS" => Action::Back,
    "KeyA" => Action::Left,
    "KeyD" => Action::Right,
    "Space" => Action::Jump,
    "MouseLeft" => Action::BreakAction,
};

/// Represents the state of a key or button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RawInputState {
    /// Key/button is not pressed
    #[default]
    NotPressed,
    /// Key/button was just pressed this frame
    Pressed,
    /// Key/button has been held down for multiple frames
    Held,
    /// Key/button was just released this frame
    Released,
}

impl RawInputState {
    /// Determines if the input is actively down (either pressed or held)
    pub fn is_active(&self) -> bool {
        matches!(self, RawInputState::Pressed | RawInputState::Held)
    }

    /// Determines if the input was just pressed this frame
    pub fn is_just_pressed(&self) -> bool {
        matches!(self, RawInputState::Pressed)
    }

    /// Determines if the input was just released this frame
    pub fn is_just_released(&self) -> bool {
        matches!(self, RawInputState::Released)
    }

    /// Updates the input state based on the previous and current raw states
    pub fn from_raw_states(previous: bool, current: bool) -> Self {
        match (previous, current) {
            (false, true) => RawInputState::Pressed,
            (true, true) => RawInputState::Held,
            (true, false) => RawInputState::Released,
            (false, false) => RawInputState::NotPressed,
        }
    }
}

/// What a single tick sees of the player's input.
///
/// Holds the state of every action together with the pointer movement
/// accumulated since the previous snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    /// Current state of every tracked action
    pub action_states: HashMap<Action, RawInputState>,

    /// Pointer movement since the last snapshot (x, y)
    pub pointer_delta: Option<(f64, f64)>,
}

impl InputSnapshot {
    /// Gets the state of an action
    pub fn get_action_state(&self, action: Action) -> RawInputState {
        self.action_states.get(&action).copied().unwrap_or_default()
    }

    /// Gets the pointer movement since the last snapshot
    pub fn get_pointer_delta(&self) -> Option<(f64, f64)> {
        self.pointer_delta
    }

    /// Builds a snapshot with `held` actions active for at least one frame.
    ///
    /// Convenient for driving a simulation directly, without an input manager.
    pub fn holding(held: &[Action]) -> Self {
        let action_states = held
            .iter()
            .map(|action| (*action, RawInputState::Held))
            .collect();
        Self {
            action_states,
            pointer_delta: None,
        }
    }

    /// Marks `action` as pressed this frame.
    pub fn with_press(mut self, action: Action) -> Self {
        self.action_states.insert(action, RawInputState::Pressed);
        self
    }

    /// Sets the pointer movement of this snapshot.
    pub fn with_pointer_delta(mut self, delta_x: f64, delta_y: f64) -> Self {
        self.pointer_delta = Some((delta_x, delta_y));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions_from_raw_states() {
        assert!(RawInputState::from_raw_states(false, true).is_just_pressed());
        assert!(RawInputState::from_raw_states(true, true).is_active());
        assert!(!RawInputState::from_raw_states(true, true).is_just_pressed());
        assert!(RawInputState::from_raw_states(true, false).is_just_released());
        assert_eq!(RawInputState::from_raw_states(false, false), RawInputState::NotPressed);
    }

    #[test]
    fn default_bindings() {
        assert_eq!(Action::for_code("KeyW"), Some(Action::Forward));
        assert_eq!(Action::for_code("MouseLeft"), Some(Action::BreakAction));
        assert_eq!(Action::for_code("KeyQ"), None);
    }

    #[test]
    fn untracked_actions_are_not_pressed() {
        let snapshot = InputSnapshot::holding(&[Action::Left]).with_press(Action::Jump);
        assert!(snapshot.get_action_state(Action::Left).is_active());
        assert!(snapshot.get_action_state(Action::Jump).is_just_pressed());
        assert_eq!(snapshot.get_action_state(Action::Right), RawInputState::NotPressed);
    }

    #[test]
    fn actions_deserialize_in_snake_case() {
        let actions: Vec<Action> = serde_json::from_str(r#"["forward", "break_action"]"#)
            .expect("actions should parse");
        assert_eq!(actions, vec![Action::Forward, Action::BreakAction]);
    }
}
