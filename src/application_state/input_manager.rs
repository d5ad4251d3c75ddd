//! # Input Manager
//!
//! This module handles input processing for the application, including:
//! - Action state tracking from key and button events
//! - Pointer movement accumulation
//! - Per-tick input snapshots
//!
//! Events and snapshots happen on the same thread. Anything recorded before a
//! snapshot is taken is visible in that snapshot; later events land in the
//! next one.

use std::collections::{HashMap, HashSet};

use log::trace;

use super::input_state::{Action, InputSnapshot, RawInputState};

/// Manages the state of all actions and processes input events.
pub struct InputManager {
    /// State of every action at the last snapshot
    pub action_inputs_old: HashMap<Action, bool>,
    /// Current state of every action
    pub action_inputs_new: HashMap<Action, bool>,

    /// Actions that went down since the last snapshot, even if already released
    pressed_since_snapshot: HashSet<Action>,

    /// Pointer movement accumulated since the last snapshot
    pub pointer_delta: Option<(f64, f64)>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    /// Creates a new InputManager with every action released.
    pub fn new() -> Self {
        let mut action_inputs_old = HashMap::new();
        let mut action_inputs_new = HashMap::new();
        for action in Action::ALL {
            action_inputs_old.insert(action, false);
            action_inputs_new.insert(action, false);
        }

        Self {
            action_inputs_old,
            action_inputs_new,
            pressed_since_snapshot: HashSet::new(),
            pointer_delta: None,
        }
    }

    /// Records a press or release of `action`.
    ///
    /// Repeated presses without a release in between, such as key repeat,
    /// are not new presses.
    pub fn intake_action(&mut self, action: Action, pressed: bool) {
        let Some(action_state) = self.action_inputs_new.get_mut(&action) else {
            return;
        };
        if pressed && !*action_state {
            self.pressed_since_snapshot.insert(action);
        }
        *action_state = pressed;
    }

    /// Records a press or release of the key or button named `code`.
    ///
    /// Codes without a binding are ignored.
    ///
    /// # Returns
    /// Whether the code is bound to an action.
    pub fn intake_code(&mut self, code: &str, pressed: bool) -> bool {
        match Action::for_code(code) {
            Some(action) => {
                self.intake_action(action, pressed);
                true
            }
            None => {
                trace!("Ignoring unbound input code {code}");
                false
            }
        }
    }

    /// Adds pointer movement to the delta reported by the next snapshot.
    pub fn intake_pointer_motion(&mut self, delta: (f64, f64)) {
        let (x, y) = self.pointer_delta.unwrap_or((0.0, 0.0));
        self.pointer_delta = Some((x + delta.0, y + delta.1));
    }

    /// Creates a snapshot from the current raw boolean states.
    ///
    /// Any action that went down since the last snapshot is reported as
    /// `Pressed`, even if it was released again or was already held at the
    /// last snapshot and released in between, so short clicks are never lost.
    pub fn create_snapshot(&self) -> InputSnapshot {
        let action_states = self
            .action_inputs_new
            .iter()
            .map(|(action, &new_state)| {
                let old_state = self.action_inputs_old.get(action).copied().unwrap_or(false);
                let state = if self.pressed_since_snapshot.contains(action) {
                    RawInputState::Pressed
                } else {
                    RawInputState::from_raw_states(old_state, new_state)
                };
                (*action, state)
            })
            .collect();

        InputSnapshot {
            action_states,
            pointer_delta: self.pointer_delta,
        }
    }

    /// Returns the snapshot for this tick and prepares for the next one.
    pub fn get_and_reset_snapshot(&mut self) -> InputSnapshot {
        let snapshot = self.create_snapshot();
        self.reset_inputs();
        snapshot
    }

    /// Moves current states into the old states and clears per-tick input.
    pub fn reset_inputs(&mut self) {
        for (action, new_state) in self.action_inputs_new.iter() {
            if let Some(old_state) = self.action_inputs_old.get_mut(action) {
                *old_state = *new_state;
            }
        }
        self.pressed_since_snapshot.clear();
        self.pointer_delta = None;
    }

    /// Releases every action, for example when the window loses focus.
    pub fn release_all(&mut self) {
        for state in self.action_inputs_new.values_mut() {
            *state = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_then_hold_then_release() {
        let mut manager = InputManager::new();
        manager.intake_action(Action::Forward, true);
        assert!(manager
            .get_and_reset_snapshot()
            .get_action_state(Action::Forward)
            .is_just_pressed());
        assert_eq!(
            manager.get_and_reset_snapshot().get_action_state(Action::Forward),
            RawInputState::Held
        );

        manager.intake_action(Action::Forward, false);
        assert!(manager
            .get_and_reset_snapshot()
            .get_action_state(Action::Forward)
            .is_just_released());
        assert_eq!(
            manager.get_and_reset_snapshot().get_action_state(Action::Forward),
            RawInputState::NotPressed
        );
    }

    #[test]
    fn click_between_snapshots_is_seen() {
        let mut manager = InputManager::new();
        manager.intake_code("MouseLeft", true);
        manager.intake_code("MouseLeft", false);

        let snapshot = manager.get_and_reset_snapshot();
        assert!(snapshot.get_action_state(Action::BreakAction).is_just_pressed());
        assert_eq!(
            manager.get_and_reset_snapshot().get_action_state(Action::BreakAction),
            RawInputState::NotPressed
        );
    }

    #[test]
    fn click_while_held_at_last_snapshot_is_seen() {
        let mut manager = InputManager::new();
        manager.intake_action(Action::BreakAction, true);
        manager.get_and_reset_snapshot();
        manager.get_and_reset_snapshot();

        manager.intake_action(Action::BreakAction, false);
        manager.intake_action(Action::BreakAction, true);

        let snapshot = manager.get_and_reset_snapshot();
        assert!(snapshot.get_action_state(Action::BreakAction).is_just_pressed());
        assert_eq!(
            manager.get_and_reset_snapshot().get_action_state(Action::BreakAction),
            RawInputState::Held
        );
    }

    #[test]
    fn repeated_press_while_held_is_not_a_new_press() {
        let mut manager = InputManager::new();
        manager.intake_action(Action::Forward, true);
        manager.get_and_reset_snapshot();

        manager.intake_action(Action::Forward, true);
        assert_eq!(
            manager.get_and_reset_snapshot().get_action_state(Action::Forward),
            RawInputState::Held
        );
    }

    #[test]
    fn pointer_motion_accumulates_until_snapshot() {
        let mut manager = InputManager::new();
        manager.intake_pointer_motion((2.0, -1.0));
        manager.intake_pointer_motion((3.0, 4.0));

        assert_eq!(manager.get_and_reset_snapshot().get_pointer_delta(), Some((5.0, 3.0)));
        assert_eq!(manager.get_and_reset_snapshot().get_pointer_delta(), None);
    }

    #[test]
    fn unbound_codes_are_ignored() {
        let mut manager = InputManager::new();
        assert!(!manager.intake_code("KeyZ", true));
        let snapshot = manager.get_and_reset_snapshot();
        assert!(Action::ALL
            .iter()
            .all(|action| !snapshot.get_action_state(*action).is_active()));
    }

    #[test]
    fn release_all_clears_held_actions() {
        let mut manager = InputManager::new();
        manager.intake_action(Action::Jump, true);
        manager.get_and_reset_snapshot();
        manager.release_all();
        assert!(manager
            .get_and_reset_snapshot()
            .get_action_state(Action::Jump)
            .is_just_released());
    }
}
