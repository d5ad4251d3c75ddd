//! Random weather spells.

use std::fmt;

use log::info;

/// The kinds of weather.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherKind {
    /// No precipitation
    Clear,
    /// Rain
    Rain,
    /// Snow
    Snow,
}

impl WeatherKind {
    /// Every weather kind, in picking order.
    pub const ALL: [WeatherKind; 3] = [WeatherKind::Clear, WeatherKind::Rain, WeatherKind::Snow];
}

impl fmt::Display for WeatherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WeatherKind::Clear => "clear",
            WeatherKind::Rain => "rain",
            WeatherKind::Snow => "snow",
        };
        f.write_str(name)
    }
}

/// Picks a new weather kind whenever the current spell runs out.
#[derive(Debug, Clone)]
pub struct Weather {
    current: WeatherKind,
    remaining_frames: f32,
    min_frames: f32,
    max_frames: f32,
    rng: fastrand::Rng,
}

impl Weather {
    /// Creates clear weather whose first spell ends on the first update.
    ///
    /// Spells last between `min_frames` (inclusive) and `max_frames` (exclusive).
    pub fn new(min_frames: f32, max_frames: f32, rng: fastrand::Rng) -> Self {
        Self {
            current: WeatherKind::Clear,
            remaining_frames: 0.0,
            min_frames,
            max_frames,
            rng,
        }
    }

    /// Creates weather with a reproducible sequence of spells.
    pub fn with_seed(min_frames: f32, max_frames: f32, seed: u64) -> Self {
        Self::new(min_frames, max_frames, fastrand::Rng::with_seed(seed))
    }

    /// Advances the weather by one frame.
    pub fn update(&mut self) {
        if self.remaining_frames <= 0.0 {
            self.change_weather();
        }
        self.remaining_frames -= 1.0;
    }

    fn change_weather(&mut self) {
        let index = self.rng.usize(..WeatherKind::ALL.len());
        self.current = WeatherKind::ALL[index];
        self.remaining_frames =
            self.min_frames + self.rng.f32() * (self.max_frames - self.min_frames);
        info!(
            "Weather changed to {} for {:.0} frames",
            self.current, self.remaining_frames
        );
    }

    /// The current weather.
    pub fn current(&self) -> WeatherKind {
        self.current
    }

    /// Frames left in the current spell.
    pub fn remaining_frames(&self) -> f32 {
        self.remaining_frames
    }
}
