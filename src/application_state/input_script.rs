//! Scripted input for the headless session.
//!
//! A script is a list of steps. Each step holds a set of actions down for a
//! number of frames and may move the pointer on its first frame. Actions not
//! listed in a step are released when the step begins.

use serde::{Deserialize, Serialize};

use super::{input_manager::InputManager, input_state::Action};

/// One step of an input script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptStep {
    /// Number of frames the step lasts
    pub frames: u32,
    /// Actions held down during the step
    #[serde(default)]
    pub held: Vec<Action>,
    /// Pointer movement applied on the first frame of the step
    #[serde(default)]
    pub pointer: Option<(f64, f64)>,
}

impl ScriptStep {
    /// A step that holds `held` for `frames` frames.
    pub fn hold(frames: u32, held: &[Action]) -> Self {
        Self {
            frames,
            held: held.to_vec(),
            pointer: None,
        }
    }

    /// A step that does nothing for `frames` frames.
    pub fn idle(frames: u32) -> Self {
        Self::hold(frames, &[])
    }

    /// A single frame that moves the pointer.
    pub fn look(delta_x: f64, delta_y: f64) -> Self {
        Self {
            frames: 1,
            held: Vec::new(),
            pointer: Some((delta_x, delta_y)),
        }
    }
}

/// Replays a list of steps into an `InputManager`.
#[derive(Debug, Clone)]
pub struct InputScript {
    steps: Vec<ScriptStep>,
    step_index: usize,
    frame_in_step: u32,
}

impl InputScript {
    /// Creates a script from its steps.
    pub fn new(steps: Vec<ScriptStep>) -> Self {
        Self {
            steps,
            step_index: 0,
            frame_in_step: 0,
        }
    }

    /// The built-in demo: fall to the ground, walk a little, look down at
    /// the block underfoot, break it, then jump.
    pub fn demo() -> Self {
        let mut steps = vec![
            ScriptStep::idle(120),
            ScriptStep::hold(20, &[Action::Forward]),
            ScriptStep::look(0.0, 200.0),
            ScriptStep::idle(30),
        ];
        for _ in 0..5 {
            steps.push(ScriptStep::hold(1, &[Action::BreakAction]));
            steps.push(ScriptStep::idle(1));
        }
        steps.push(ScriptStep::hold(1, &[Action::Jump]));
        steps.push(ScriptStep::idle(60));
        Self::new(steps)
    }

    /// Total number of frames covered by the script.
    pub fn frame_count(&self) -> u32 {
        self.steps.iter().map(|step| step.frames).sum()
    }

    /// Whether every step has been replayed.
    pub fn is_finished(&self) -> bool {
        self.step_index >= self.steps.len()
    }

    /// Feeds the next frame of input into `input_manager`.
    ///
    /// Once the script is finished every action stays released.
    pub fn feed_frame(&mut self, input_manager: &mut InputManager) {
        while let Some(step) = self.steps.get(self.step_index) {
            if self.frame_in_step < step.frames {
                break;
            }
            self.step_index += 1;
            self.frame_in_step = 0;
        }

        let Some(step) = self.steps.get(self.step_index) else {
            input_manager.release_all();
            return;
        };

        if self.frame_in_step == 0 {
            for action in Action::ALL {
                input_manager.intake_action(action, step.held.contains(&action));
            }
            if let Some(delta) = step.pointer {
                input_manager.intake_pointer_motion(delta);
            }
        }
        self.frame_in_step += 1;
    }
}
