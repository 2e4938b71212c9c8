//! Core simulation types and constants shared by the engine and the host.

use bevy::prelude::*;

use crate::orbit::scale::SCENE_SECONDS_PER_DAY;

/// System sets for the per-frame pipeline.
///
/// The clock advances first, then every body is repositioned, then the
/// renderer copies positions into transforms. A moon must never read a
/// parent position from a previous frame, so the order is strict.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Advance `SimulationClock` by the frame delta.
    AdvanceClock,
    /// Recompute the `PositionTable`.
    Propagate,
    /// Copy positions and spins into render transforms.
    Sync,
}

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Radians to degrees conversion factor
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Seconds per day
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// J2000.0 epoch as Unix timestamp (January 1, 2000, 12:00 TT)
/// Note: This is approximate; TT differs from UTC by leap seconds
pub const J2000_UNIX: i64 = 946728000;

/// Slowest time scale reachable from the UI.
pub const MIN_TIME_SCALE: f64 = 0.1;

/// Fastest time scale reachable from the UI.
pub const MAX_TIME_SCALE: f64 = 10.0;

/// Factor applied by one "faster"/"slower" step.
pub const TIME_SCALE_STEP: f64 = 1.5;

/// Simulation clock resource.
///
/// `elapsed` counts scene seconds since the session started. One simulated day
/// lasts [`SCENE_SECONDS_PER_DAY`] scene seconds, so the calendar date is
/// `epoch_days + elapsed / SCENE_SECONDS_PER_DAY` days after J2000.
#[derive(Resource, Clone, Debug)]
pub struct SimulationClock {
    /// Scene seconds elapsed since the session started
    pub elapsed: f64,
    /// Scaled delta of the most recent frame (0 while paused)
    pub delta: f64,
    /// Time scale multiplier. Clamped by the setters, not by the field.
    pub time_scale: f64,
    /// Whether simulation is paused
    pub paused: bool,
    /// Days since J2000 at which the session starts
    pub epoch_days: f64,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::at_j2000_days(current_j2000_seconds() / SECONDS_PER_DAY)
    }
}

impl SimulationClock {
    /// Create a clock whose session starts at the given J2000 day.
    pub fn at_j2000_days(epoch_days: f64) -> Self {
        Self {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            paused: false,
            epoch_days,
        }
    }

    /// Scale that is actually applied this frame.
    pub fn effective_scale(&self) -> f64 {
        if self.paused { 0.0 } else { self.time_scale.max(0.0) }
    }

    /// Advance by one frame of real time. Negative deltas are ignored so the
    /// clock never runs backwards.
    pub fn advance(&mut self, real_delta_secs: f64) {
        let dt = real_delta_secs.max(0.0) * self.effective_scale();
        self.delta = dt;
        self.elapsed += dt;
    }

    /// Set the time scale, clamped to [`MIN_TIME_SCALE`, `MAX_TIME_SCALE`].
    pub fn set_time_scale(&mut self, scale: f64) {
        self.time_scale = if scale.is_finite() {
            scale.clamp(MIN_TIME_SCALE, MAX_TIME_SCALE)
        } else {
            1.0
        };
    }

    pub fn speed_up(&mut self) {
        self.set_time_scale(self.time_scale * TIME_SCALE_STEP);
    }

    pub fn slow_down(&mut self) {
        self.set_time_scale(self.time_scale / TIME_SCALE_STEP);
    }

    pub fn reset_time_scale(&mut self) {
        self.time_scale = 1.0;
    }

    /// Orbit clock in scene seconds since J2000. This is the time the
    /// position solver consumes.
    pub fn orbit_time(&self) -> f64 {
        self.epoch_days * SCENE_SECONDS_PER_DAY + self.elapsed
    }

    /// Current simulated date in days since J2000.
    pub fn simulated_days(&self) -> f64 {
        self.epoch_days + self.elapsed / SCENE_SECONDS_PER_DAY
    }

    /// Human-readable simulated date.
    pub fn date_string(&self) -> String {
        j2000_seconds_to_date_string(self.simulated_days() * SECONDS_PER_DAY)
    }
}

/// Convert Unix timestamp to seconds since J2000 epoch
pub fn unix_to_j2000_seconds(unix_timestamp: i64) -> f64 {
    (unix_timestamp - J2000_UNIX) as f64
}

/// Convert J2000 seconds to Unix timestamp
pub fn j2000_seconds_to_unix(j2000_seconds: f64) -> i64 {
    J2000_UNIX + j2000_seconds as i64
}

/// Get current time as J2000 seconds (using system clock).
///
/// Falls back to the J2000 epoch itself if the system clock reads before 1970.
pub fn current_j2000_seconds() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let unix_now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(J2000_UNIX);
    unix_to_j2000_seconds(unix_now)
}

/// Format J2000 seconds as a human-readable date string.
/// Returns format: "YYYY-MM-DD HH:MM UTC"
///
/// Approximate: ignores leap seconds and the TT/UTC offset.
pub fn j2000_seconds_to_date_string(j2000_seconds: f64) -> String {
    let unix_secs = j2000_seconds_to_unix(j2000_seconds);

    let days_since_epoch = unix_secs.div_euclid(86400);
    let time_of_day = unix_secs.rem_euclid(86400);

    let hours = time_of_day / 3600;
    let minutes = (time_of_day % 3600) / 60;

    let (year, month, day) = days_to_ymd(days_since_epoch);

    format!(
        "{:04}-{:02}-{:02} {:02}:{:02} UTC",
        year, month, day, hours, minutes
    )
}

/// Convert days since Unix epoch to year, month, day
fn days_to_ymd(days: i64) -> (i32, u32, u32) {
    // Algorithm for Gregorian calendar
    let remaining_days = days + 719468; // Days from year 0 to 1970

    let era = if remaining_days >= 0 {
        remaining_days / 146097
    } else {
        (remaining_days - 146096) / 146097
    };

    let day_of_era = (remaining_days - era * 146097) as u32;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146096) / 365;
    let year = (year_of_era as i64 + era * 400) as i32;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let mp = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = if month <= 2 { year + 1 } else { year };

    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_to_j2000() {
        assert_eq!(unix_to_j2000_seconds(J2000_UNIX), 0.0);
        assert_eq!(unix_to_j2000_seconds(J2000_UNIX + 86400), 86400.0);
    }

    #[test]
    fn test_date_string_j2000() {
        // J2000 epoch should be January 1, 2000, 12:00 UTC
        let date_str = j2000_seconds_to_date_string(0.0);
        assert!(date_str.contains("2000-01-01"), "Expected 2000-01-01, got {}", date_str);
        assert!(date_str.contains("12:00"), "Expected 12:00, got {}", date_str);
    }

    #[test]
    fn test_clock_advances_by_scaled_delta() {
        let mut clock = SimulationClock::at_j2000_days(0.0);
        clock.set_time_scale(2.0);
        clock.advance(0.5);
        assert_eq!(clock.elapsed, 1.0);
        assert_eq!(clock.delta, 1.0);
    }

    #[test]
    fn test_clock_ignores_negative_delta() {
        let mut clock = SimulationClock::at_j2000_days(0.0);
        clock.advance(1.0);
        clock.advance(-5.0);
        assert_eq!(clock.elapsed, 1.0);
        assert_eq!(clock.delta, 0.0);
    }

    #[test]
    fn test_paused_clock_does_not_advance() {
        let mut clock = SimulationClock::at_j2000_days(0.0);
        clock.paused = true;
        clock.advance(1.0);
        assert_eq!(clock.elapsed, 0.0);
    }

    #[test]
    fn test_time_scale_is_clamped() {
        let mut clock = SimulationClock::at_j2000_days(0.0);
        clock.set_time_scale(100.0);
        assert_eq!(clock.time_scale, MAX_TIME_SCALE);
        clock.set_time_scale(0.0);
        assert_eq!(clock.time_scale, MIN_TIME_SCALE);
        clock.set_time_scale(f64::NAN);
        assert_eq!(clock.time_scale, 1.0);
    }

    #[test]
    fn test_speed_steps_stay_in_range() {
        let mut clock = SimulationClock::at_j2000_days(0.0);
        for _ in 0..20 {
            clock.speed_up();
        }
        assert_eq!(clock.time_scale, MAX_TIME_SCALE);
        for _ in 0..40 {
            clock.slow_down();
        }
        assert_eq!(clock.time_scale, MIN_TIME_SCALE);
        clock.reset_time_scale();
        assert_eq!(clock.time_scale, 1.0);
    }

    #[test]
    fn test_simulated_days_follow_elapsed() {
        let mut clock = SimulationClock::at_j2000_days(10.0);
        clock.advance(SCENE_SECONDS_PER_DAY * 3.0);
        assert!((clock.simulated_days() - 13.0).abs() < 1e-12);
        assert!((clock.orbit_time() - 13.0 * SCENE_SECONDS_PER_DAY).abs() < 1e-9);
    }

    #[test]
    fn test_default_clock_is_after_j2000() {
        let clock = SimulationClock::default();
        assert!(!clock.paused);
        assert_eq!(clock.time_scale, 1.0);
        assert!(clock.epoch_days > 0.0);
    }
}
