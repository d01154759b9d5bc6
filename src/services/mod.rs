pub mod csv_export;
pub mod noise;
pub mod rolling;
pub mod series_generator;
