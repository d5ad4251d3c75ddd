//! Day/night brightness cycle.

use std::f32::consts::PI;

/// Advances a clock and derives the sky brightness from it.
#[derive(Debug, Clone, PartialEq)]
pub struct DayNightCycle {
    time: f32,
    day_duration: f32,
}

impl DayNightCycle {
    /// Time added by each `update`, in seconds.
    pub const TIME_STEP: f32 = 1.0 / 60.0;

    /// Creates a cycle that starts at midnight and lasts `day_duration` seconds.
    pub fn new(day_duration: f32) -> Self {
        Self {
            time: 0.0,
            day_duration,
        }
    }

    /// Advances the clock by one frame, wrapping at the end of the day.
    pub fn update(&mut self) {
        self.time += Self::TIME_STEP;
        if self.time >= self.day_duration {
            self.time = 0.0;
        }
    }

    /// Seconds since the start of the current day.
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Sky brightness: zero at the start and end of the day, one at midday.
    pub fn light_intensity(&self) -> f32 {
        (self.time / self.day_duration * PI).sin()
    }

    /// Background colour for the current brightness.
    pub fn sky_color(&self) -> [f32; 3] {
        let intensity = self.light_intensity();
        [intensity / 2.0, intensity / 2.0, intensity]
    }
}

impl Default for DayNightCycle {
    fn default() -> Self {
        Self::new(300.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_dark_and_brightens() {
        let mut cycle = DayNightCycle::new(1.0);
        assert_eq!(cycle.light_intensity(), 0.0);
        for _ in 0..30 {
            cycle.update();
        }
        assert!(cycle.light_intensity() > 0.99);
        let [r, g, b] = cycle.sky_color();
        assert_eq!(r, g);
        assert!((b - 2.0 * r).abs() < 1e-6);
    }

    #[test]
    fn wraps_at_end_of_day() {
        let mut cycle = DayNightCycle::new(0.1);
        for _ in 0..7 {
            cycle.update();
        }
        assert!(cycle.time() < 0.1);
    }
}
