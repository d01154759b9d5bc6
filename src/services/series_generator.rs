use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::f64::consts::PI;
use tracing::debug;

use crate::errors::SeriesError;
use crate::models::{Series, SeriesParams, TimePoint};
use crate::services::noise::NoiseSource;

/// Period of the seasonal component, in days.
const SEASON_PERIOD: f64 = 7.0;

/// Synthetic daily series ending now.
///
/// `value(i) = trend * i + seasonality * sin(i * PI / 7) + noise * N(0, 1)`
/// with `i = 0` the oldest day.
pub fn generate<N: NoiseSource + ?Sized>(
    params: &SeriesParams,
    noise: &mut N,
) -> Result<Series, SeriesError> {
    generate_at(params, Utc::now(), noise)
}

/// Same as [`generate`] with an explicit "now"; the last point carries `now`.
pub fn generate_at<N: NoiseSource + ?Sized>(
    params: &SeriesParams,
    now: DateTime<Utc>,
    noise: &mut N,
) -> Result<Series, SeriesError> {
    validate(params)?;

    let days = params.days as i64;
    days_back(now, days - 1)?;

    let points = (0..days)
        .map(|i| -> Result<TimePoint, SeriesError> {
            let timestamp = days_back(now, days - 1 - i)?;
            let draw = noise.standard_normal()?;
            Ok(TimePoint {
                timestamp,
                value: deterministic_value(params, i) + params.noise * draw,
            })
        })
        .collect::<Result<Vec<_>, SeriesError>>()?;

    debug!(
        "Generated {} points (trend={}, seasonality={}, noise={})",
        points.len(),
        params.trend,
        params.seasonality,
        params.noise
    );

    Ok(Series::new(points))
}

/// Trend plus seasonal component at index `i`.
pub fn deterministic_value(params: &SeriesParams, i: i64) -> f64 {
    let x = i as f64;
    params.trend * x + params.seasonality * (x * PI / SEASON_PERIOD).sin()
}

fn days_back(now: DateTime<Utc>, offset: i64) -> Result<DateTime<Utc>, SeriesError> {
    now.checked_sub_signed(ChronoDuration::days(offset))
        .ok_or_else(|| {
            SeriesError::InvalidParameter(
                "days reaches outside the representable date range".to_string(),
            )
        })
}

fn validate(params: &SeriesParams) -> Result<(), SeriesError> {
    if params.days < 1 {
        return Err(SeriesError::InvalidParameter(format!(
            "days must be at least 1 (got {})",
            params.days
        )));
    }
    for (name, value) in [
        ("trend", params.trend),
        ("seasonality", params.seasonality),
        ("noise", params.noise),
    ] {
        if !value.is_finite() {
            return Err(SeriesError::InvalidParameter(format!(
                "{} must be a finite number (got {})",
                name, value
            )));
        }
    }
    if params.seasonality < 0.0 {
        return Err(SeriesError::InvalidParameter(format!(
            "seasonality must not be negative (got {})",
            params.seasonality
        )));
    }
    if params.noise < 0.0 {
        return Err(SeriesError::InvalidParameter(format!(
            "noise must not be negative (got {})",
            params.noise
        )));
    }
    Ok(())
}
