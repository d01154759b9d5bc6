use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// A series point paired with its trailing rolling average.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SmoothedPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
    pub rolling_avg: Option<f64>, // None until the window has enough history
}

impl SmoothedPoint {
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SmoothedSeries {
    window: usize,
    points: Vec<SmoothedPoint>,
}

impl SmoothedSeries {
    pub(crate) fn new(window: usize, points: Vec<SmoothedPoint>) -> Self {
        Self { window, points }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn points(&self) -> &[SmoothedPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn head(&self, n: usize) -> &[SmoothedPoint] {
        &self.points[..n.min(self.points.len())]
    }

    pub fn title(&self) -> String {
        format!("Original vs {}-day Rolling Average", self.window)
    }
}
