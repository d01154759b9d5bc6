use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::errors::AppError;
use crate::models::{ParamBounds, SeriesParams, SmoothedPoint, SmoothedSeries, DEFAULT_WINDOW};
use crate::services::csv_export::{self, CSV_FILE_NAME, CSV_MIME};
use crate::services::noise::RngNoise;
use crate::services::{rolling, series_generator};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_series))
        .route("/preview", get(get_preview))
        .route("/csv", get(download_csv))
}

#[derive(Debug, Default, Deserialize)]
pub struct SeriesQuery {
    /// Number of daily points (30 to 365, default 90)
    days: Option<i32>,
    /// Slope per day (-0.5 to 0.5, default 0.1)
    trend: Option<f64>,
    /// Amplitude of the weekly wave (0 to 20, default 10)
    seasonality: Option<f64>,
    /// Standard deviation of the noise (0 to 5, default 1)
    noise: Option<f64>,
    /// Rolling average window (1 to 30, default 7)
    window: Option<i32>,
    /// Fixed seed for reproducible noise
    seed: Option<u64>,
}

impl SeriesQuery {
    fn resolve(&self, bounds: &ParamBounds) -> Result<(SeriesParams, i32), AppError> {
        let defaults = SeriesParams::default();
        let params = SeriesParams {
            days: self.days.unwrap_or(defaults.days),
            trend: self.trend.unwrap_or(defaults.trend),
            seasonality: self.seasonality.unwrap_or(defaults.seasonality),
            noise: self.noise.unwrap_or(defaults.noise),
        };
        let window = self.window.unwrap_or(DEFAULT_WINDOW);

        bounds.check(&params, window)?;
        Ok((params, window))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PointDto {
    pub date: NaiveDate,
    pub timestamp: DateTime<Utc>,
    pub value: f64,
    pub rolling_avg: Option<f64>,
}

impl From<&SmoothedPoint> for PointDto {
    fn from(p: &SmoothedPoint) -> Self {
        Self {
            date: p.date(),
            timestamp: p.timestamp,
            value: p.value,
            rolling_avg: p.rolling_avg,
        }
    }
}

/// Labels for the raw-series chart and the rolling-average overlay chart.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChartMeta {
    pub series_title: String,
    pub smoothed_title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub legend_title: String,
}

impl ChartMeta {
    fn for_series(smoothed: &SmoothedSeries) -> Self {
        Self {
            series_title: "Time Series Data".to_string(),
            smoothed_title: smoothed.title(),
            x_axis_title: "Date".to_string(),
            y_axis_title: "Value".to_string(),
            legend_title: "Metric".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SeriesResponse {
    pub chart: ChartMeta,
    pub params: SeriesParams,
    pub window: usize,
    pub seed: Option<u64>,
    pub generated_at: DateTime<Utc>,
    pub points: Vec<PointDto>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PreviewResponse {
    pub total_points: usize,
    pub rows: Vec<PointDto>,
}

struct Generated {
    params: SeriesParams,
    seed: Option<u64>,
    smoothed: SmoothedSeries,
}

fn build(state: &AppState, query: &SeriesQuery) -> Result<Generated, AppError> {
    let (params, window) = query.resolve(&state.bounds).map_err(|e| {
        warn!("Rejected series request: {}", e);
        e
    })?;

    let seed = query.seed.or(state.settings.series_seed);
    let mut noise = match seed {
        Some(seed) => RngNoise::seeded(seed),
        None => RngNoise::from_os().map_err(|e| {
            error!("Failed to seed noise source: {}", e);
            e
        })?,
    };

    let series = series_generator::generate(&params, &mut noise)?;
    let smoothed = rolling::smooth(&series, window)?;

    Ok(Generated { params, seed, smoothed })
}

pub async fn get_series(
    Query(query): Query<SeriesQuery>,
    State(state): State<AppState>,
) -> Result<Json<SeriesResponse>, AppError> {
    info!("GET /api/series - Generating series {:?}", query);
    let generated = build(&state, &query)?;

    let smoothed = &generated.smoothed;
    let generated_at = smoothed
        .points()
        .last()
        .map(|p| p.timestamp)
        .unwrap_or_else(Utc::now);

    Ok(Json(SeriesResponse {
        chart: ChartMeta::for_series(smoothed),
        params: generated.params,
        window: smoothed.window(),
        seed: generated.seed,
        generated_at,
        points: smoothed.points().iter().map(PointDto::from).collect(),
    }))
}

pub async fn get_preview(
    Query(query): Query<SeriesQuery>,
    State(state): State<AppState>,
) -> Result<Json<PreviewResponse>, AppError> {
    info!("GET /api/series/preview - Previewing series {:?}", query);
    let generated = build(&state, &query)?;

    let smoothed = &generated.smoothed;
    Ok(Json(PreviewResponse {
        total_points: smoothed.len(),
        rows: smoothed
            .head(state.settings.preview_rows)
            .iter()
            .map(PointDto::from)
            .collect(),
    }))
}

pub async fn download_csv(
    Query(query): Query<SeriesQuery>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    info!("GET /api/series/csv - Exporting series {:?}", query);
    let generated = build(&state, &query)?;

    let body = csv_export::to_csv(&generated.smoothed).map_err(|e| {
        error!("Failed to export series as CSV: {:#}", e);
        AppError::Export(e.to_string())
    })?;

    Ok((
        [
            (header::CONTENT_TYPE, CSV_MIME.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", CSV_FILE_NAME),
            ),
        ],
        body,
    ))
}
