//! # Voxel Sandbox Entry Point
//!
//! Runs a headless session by calling into the library's `run()` function.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info VOXEL_SANDBOX_CONFIG=sandbox.json cargo run --release
//! ```

fn main() {
    voxel_sandbox::run();
}
