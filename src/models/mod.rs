mod params;
mod smoothed;
mod time_point;

pub use params::{ParamBounds, SeriesParams, DEFAULT_WINDOW};
pub use smoothed::{SmoothedPoint, SmoothedSeries};
pub use time_point::{Series, TimePoint};
