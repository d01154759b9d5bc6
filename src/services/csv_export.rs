use anyhow::{Context, Result};
use chrono::NaiveDate;
use csv::WriterBuilder;
use serde::Serialize;

use crate::models::SmoothedSeries;

pub const CSV_FILE_NAME: &str = "time_series_data.csv";
pub const CSV_MIME: &str = "text/csv";

// Field names double as the header row: date,value,rolling_avg
#[derive(Debug, Serialize)]
struct CsvRow {
    date: NaiveDate,
    value: f64,
    rolling_avg: Option<f64>,
}

/// Serializes a smoothed series. A missing rolling average is written as
/// an empty field.
pub fn to_csv(series: &SmoothedSeries) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .has_headers(true)
        .from_writer(Vec::new());

    for point in series.points() {
        writer
            .serialize(CsvRow {
                date: point.date(),
                value: point.value,
                rolling_avg: point.rolling_avg,
            })
            .with_context(|| format!("Failed to write CSV row for {}", point.date()))?;
    }

    // An empty series still gets its header.
    if series.is_empty() {
        writer.write_record(["date", "value", "rolling_avg"])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {}", e.error()))?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SeriesParams, SmoothedPoint};
    use crate::services::noise::RngNoise;
    use crate::services::rolling::smooth;
    use crate::services::series_generator::generate_at;
    use chrono::{TimeZone, Utc};
    use csv::ReaderBuilder;

    #[test]
    fn test_header_and_rows() {
        let now = Utc.with_ymd_and_hms(2024, 1, 3, 9, 0, 0).unwrap();
        let series = generate_at(&SeriesParams::new(3, 1.0, 0.0, 0.0), now, &mut RngNoise::seeded(0)).unwrap();
        let csv_text = to_csv(&smooth(&series, 2).unwrap()).unwrap();

        let mut lines = csv_text.lines();
        assert_eq!(lines.next(), Some("date,value,rolling_avg"));

        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(csv_text.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);

        assert_eq!(&rows[0][0], "2024-01-01");
        assert_eq!(&rows[1][0], "2024-01-02");
        assert_eq!(&rows[2][0], "2024-01-03");

        let values: Vec<f64> = rows.iter().map(|r| r[1].parse().unwrap()).collect();
        assert_eq!(values, vec![0.0, 1.0, 2.0]);

        assert_eq!(&rows[0][2], "");
        assert_eq!(rows[1][2].parse::<f64>().unwrap(), 0.5);
        assert_eq!(rows[2][2].parse::<f64>().unwrap(), 1.5);
    }

    #[test]
    fn test_empty_series_writes_header_only() {
        let empty = SmoothedSeries::new(3, Vec::<SmoothedPoint>::new());
        assert_eq!(to_csv(&empty).unwrap(), "date,value,rolling_avg\n");
    }

    #[test]
    fn test_one_row_per_point() {
        let series = generate_at(&SeriesParams::default(), Utc::now(), &mut RngNoise::seeded(12)).unwrap();
        let csv_text = to_csv(&smooth(&series, 7).unwrap()).unwrap();
        assert_eq!(csv_text.lines().count(), 1 + 90);
    }
}
