use tracing::debug;

use crate::errors::SeriesError;
use crate::models::{Series, SmoothedPoint, SmoothedSeries};

/// Simple Moving Average (SMA)
/// Returns a vector aligned with `values`:
/// - `None` until enough values exist
/// - `Some(avg)` of the trailing `window` values after that
///
/// Windows are summed independently; a window of 1 reproduces the input
/// exactly.
pub fn sma(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }

    (0..values.len())
        .map(|i| {
            if i + 1 < window {
                None
            } else {
                let slice = &values[i + 1 - window..=i];
                Some(slice.iter().sum::<f64>() / window as f64)
            }
        })
        .collect()
}

/// Trailing rolling average of a series, one entry per point.
pub fn rolling_average(series: &Series, window: i32) -> Result<Vec<Option<f64>>, SeriesError> {
    let window = checked_window(window)?;
    Ok(sma(&series.values(), window))
}

/// Pairs every point of `series` with its rolling average.
pub fn smooth(series: &Series, window: i32) -> Result<SmoothedSeries, SeriesError> {
    let averages = rolling_average(series, window)?;

    let points: Vec<SmoothedPoint> = series
        .points()
        .iter()
        .zip(averages)
        .map(|(p, rolling_avg)| SmoothedPoint {
            timestamp: p.timestamp,
            value: p.value,
            rolling_avg,
        })
        .collect();

    debug!(
        "Smoothed {} points with window {} ({} defined)",
        points.len(),
        window,
        points.iter().filter(|p| p.rolling_avg.is_some()).count()
    );

    Ok(SmoothedSeries::new(window as usize, points))
}

fn checked_window(window: i32) -> Result<usize, SeriesError> {
    if window < 1 {
        return Err(SeriesError::InvalidParameter(format!(
            "window size must be at least 1 (got {})",
            window
        )));
    }
    Ok(window as usize)
}
