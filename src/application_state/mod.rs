//! # Application State Management
//!
//! This module runs the sandbox outside of any window system:
//! - Input handling through the input manager, fed by an input script
//! - The fixed-step frame loop around the simulation
//! - The cosmetic day/night and weather collaborators
//!
//! Each frame feeds input, takes one snapshot, ticks the simulation once and
//! then updates the cosmetic collaborators, which never touch the world.

pub mod input_manager;
pub mod input_script;
pub mod input_state;

use input_manager::InputManager;
use input_script::InputScript;
use log::{debug, info};

use crate::{
    config::SandboxConfig,
    engine_state::{
        environment::{DayNightCycle, Weather, WeatherKind},
        player_state::PlayerState,
        voxels::block::block_type::BlockType,
        Simulation, FIXED_TIMESTEP,
    },
};

/// Frames between periodic progress log lines.
const LOG_INTERVAL_FRAMES: u32 = 60;

/// Everything the headless frame loop owns.
pub struct ApplicationState {
    /// The world, player and breaking state
    pub simulation: Simulation,

    /// Manages input state and event processing
    pub input_manager: InputManager,

    /// Cosmetic sky brightness
    pub day_night_cycle: DayNightCycle,

    /// Cosmetic weather
    pub weather: Weather,

    script: InputScript,
    frames: u32,
    frame_index: u32,
}

/// What the session looked like when it ended.
#[derive(Debug, Clone)]
pub struct SessionSummary {
    /// Frames simulated
    pub frames: u32,
    /// Final player state
    pub player: PlayerState,
    /// Collected blocks by type
    pub inventory: Vec<(BlockType, u32)>,
    /// Blocks left in the world
    pub blocks_remaining: usize,
    /// Weather at the end of the session
    pub weather: WeatherKind,
    /// Sky brightness at the end of the session
    pub light_intensity: f32,
}

impl ApplicationState {
    /// Builds the world, the player and the collaborators from `config`.
    pub fn new(config: &SandboxConfig) -> Self {
        let session = &config.session;
        let weather = match session.weather_seed {
            Some(seed) => Weather::with_seed(
                session.weather_min_frames,
                session.weather_max_frames,
                seed,
            ),
            None => Weather::new(
                session.weather_min_frames,
                session.weather_max_frames,
                fastrand::Rng::new(),
            ),
        };
        let script = match &session.input_script {
            Some(steps) => InputScript::new(steps.clone()),
            None => InputScript::demo(),
        };

        Self {
            simulation: Simulation::new(config),
            input_manager: InputManager::new(),
            day_night_cycle: DayNightCycle::new(session.day_duration),
            weather,
            script,
            frames: session.frames,
            frame_index: 0,
        }
    }

    /// Runs a single frame and returns the player state after it.
    pub fn run_frame(&mut self) -> PlayerState {
        self.script.feed_frame(&mut self.input_manager);
        let input = self.input_manager.get_and_reset_snapshot();

        let player = self.simulation.tick(&input, FIXED_TIMESTEP);

        self.day_night_cycle.update();
        self.weather.update();

        self.frame_index += 1;
        if self.frame_index % LOG_INTERVAL_FRAMES == 0 {
            debug!(
                "Frame {}: player at ({:.2}, {:.2}, {:.2}), light {:.3}, weather {}",
                self.frame_index,
                player.position.x,
                player.position.y,
                player.position.z,
                self.day_night_cycle.light_intensity(),
                self.weather.current()
            );
        }

        player
    }

    /// Runs the configured number of frames.
    pub fn run(&mut self) -> SessionSummary {
        info!(
            "Running {} frames ({} scripted)",
            self.frames,
            self.script.frame_count()
        );

        let mut player = *self.simulation.player.state();
        for _ in 0..self.frames {
            player = self.run_frame();
        }

        SessionSummary {
            frames: self.frame_index,
            player,
            inventory: self.simulation.inventory.items().collect(),
            blocks_remaining: self.simulation.world.len(),
            weather: self.weather.current(),
            light_intensity: self.day_night_cycle.light_intensity(),
        }
    }
}
