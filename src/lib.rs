pub mod app;
pub mod config;
pub mod errors;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

pub use errors::{AppError, SeriesError};
pub use models::{Series, SeriesParams, SmoothedPoint, SmoothedSeries, TimePoint};
pub use services::noise::{NoiseSource, RngNoise};
pub use services::rolling::{rolling_average, smooth, sma};
pub use services::series_generator::{generate, generate_at};
