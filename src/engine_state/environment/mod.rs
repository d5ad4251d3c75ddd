//! # Environment
//!
//! Cosmetic collaborators driven by the outer frame loop. Neither reads nor
//! writes the world or the player; they only produce values for the render
//! layer.

pub mod day_night;
pub mod weather;

pub use day_night::DayNightCycle;
pub use weather::{Weather, WeatherKind};
