use chrono::{DateTime, Utc};
use serde::Serialize;

/// One daily observation of a generated series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimePoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

/// Ordered, gap-free daily series. Oldest point first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    points: Vec<TimePoint>,
}

impl Series {
    pub(crate) fn new(points: Vec<TimePoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[TimePoint] {
        &self.points
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First `n` points, the way a data-frame preview shows them.
    pub fn head(&self, n: usize) -> &[TimePoint] {
        &self.points[..n.min(self.points.len())]
    }
}
