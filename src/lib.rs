#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Sandbox
//!
//! The simulation core of a first-person voxel sandbox: a small procedurally
//! generated block world, a player who walks, jumps and falls onto the
//! terrain, and block breaking by repeated hits on the block under the
//! crosshair.
//!
//! ## Key Modules
//!
//! * `application_state` - Input handling and the headless fixed-step frame loop
//! * `config` - Tunables loaded from JSON
//! * `engine_state` - The world, the player, aiming and breaking
//!
//! ## Architecture
//!
//! Rendering and windowing are left to the host. The core exposes plain data:
//! the block store (with per-block colour and opacity, ready to be turned into
//! instances), the player's position and view angles, and the breaking
//! progress of the current target.
//!
//! ## Usage
//!
//! ```no_run
//! fn main() {
//!     voxel_sandbox::run();
//! }
//! ```

use application_state::ApplicationState;
use config::SandboxConfig;
use log::{info, warn};
use web_time::Instant;

pub mod application_state;
pub mod config;
pub mod engine_state;

/// Runs a headless session configured from the environment.
///
/// The configuration is read from the JSON file named by
/// `VOXEL_SANDBOX_CONFIG`. A missing variable selects the defaults; an
/// unreadable or invalid file is logged and the defaults are used instead.
pub fn run() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let config = match SandboxConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            warn!("Falling back to the default configuration: {err}");
            SandboxConfig::default()
        }
    };

    let start = Instant::now();
    let mut state = ApplicationState::new(&config);
    let summary = state.run();

    info!(
        "Simulated {} frames in {:?}",
        summary.frames,
        start.elapsed()
    );
    info!(
        "Player finished at ({:.2}, {:.2}, {:.2}), {} blocks remain",
        summary.player.position.x,
        summary.player.position.y,
        summary.player.position.z,
        summary.blocks_remaining
    );
    info!(
        "Weather {}, light intensity {:.3}",
        summary.weather, summary.light_intensity
    );
    for (block_type, count) in &summary.inventory {
        info!("Inventory: {count} x {block_type}");
    }
}
