use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Inputs of the series generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesParams {
    pub days: i32,
    pub trend: f64,
    pub seasonality: f64,
    pub noise: f64,
}

impl SeriesParams {
    pub fn new(days: i32, trend: f64, seasonality: f64, noise: f64) -> Self {
        Self { days, trend, seasonality, noise }
    }
}

impl Default for SeriesParams {
    fn default() -> Self {
        Self {
            days: 90,
            trend: 0.1,
            seasonality: 10.0,
            noise: 1.0,
        }
    }
}

pub const DEFAULT_WINDOW: i32 = 7;

/// Ranges the interactive controls allow. The core itself only requires
/// `days >= 1`, non-negative amplitudes and `window >= 1`.
#[derive(Debug, Clone)]
pub struct ParamBounds {
    pub days: RangeInclusive<i32>,
    pub trend: RangeInclusive<f64>,
    pub seasonality: RangeInclusive<f64>,
    pub noise: RangeInclusive<f64>,
    pub window: RangeInclusive<i32>,
}

impl Default for ParamBounds {
    fn default() -> Self {
        Self {
            days: 30..=365,
            trend: -0.5..=0.5,
            seasonality: 0.0..=20.0,
            noise: 0.0..=5.0,
            window: 1..=30,
        }
    }
}

impl ParamBounds {
    pub fn check(&self, params: &SeriesParams, window: i32) -> Result<(), String> {
        if !self.days.contains(&params.days) {
            return Err(out_of_range("days", params.days, &self.days));
        }
        if !self.trend.contains(&params.trend) {
            return Err(out_of_range("trend", params.trend, &self.trend));
        }
        if !self.seasonality.contains(&params.seasonality) {
            return Err(out_of_range("seasonality", params.seasonality, &self.seasonality));
        }
        if !self.noise.contains(&params.noise) {
            return Err(out_of_range("noise", params.noise, &self.noise));
        }
        if !self.window.contains(&window) {
            return Err(out_of_range("window", window, &self.window));
        }
        Ok(())
    }
}

fn out_of_range<T: std::fmt::Display>(name: &str, value: T, range: &RangeInclusive<T>) -> String {
    format!(
        "{} must be between {} and {} (got {})",
        name,
        range.start(),
        range.end(),
        value
    )
}
