//! Tabular I/O
//!
//! Bridges Polars frames (CSV exports from the forecast extraction jobs)
//! and the in-memory series types. Station frames hold one row per day,
//! a `time` column in `YYYY-MM-DD` and one numeric column per weather
//! parameter.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use polars::prelude::*;

use crate::error::IndicatorError;
use crate::series::{DecisionSeries, PointSeries};

const TIME_FORMAT: &str = "%Y-%m-%d";

/// Read a station frame from CSV.
pub fn read_station_csv(path: &str) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.into()))
        .with_context(|| format!("Failed to create CSV reader: {}", path))?
        .finish()
        .with_context(|| format!("Failed to load station CSV: {}", path))
}

/// Extract one parameter column as a time series.
pub fn series_from_frame(df: &DataFrame, value_col: &str) -> Result<PointSeries> {
    let times = frame_times(df)?;

    let values_col = df
        .column(value_col)
        .with_context(|| format!("Column '{}' not found", value_col))?
        .f64()
        .map_err(|_| {
            IndicatorError::TypeMismatch(format!("column '{}' is not float typed", value_col))
        })?;

    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let v = values_col
            .get(idx)
            .with_context(|| format!("Column '{}' has a missing value at row {}", value_col, idx))?;
        values.push(v);
    }

    PointSeries::new(value_col, times, values)
        .with_context(|| format!("Column '{}' does not form a valid series", value_col))
}

/// Assemble decision series into one frame, one column per indicator
/// plus the shared `time` column.
pub fn decisions_to_frame(decisions: &[(&str, &DecisionSeries)]) -> Result<DataFrame> {
    let first = decisions
        .first()
        .context("At least one decision series is required")?;

    let times: Vec<String> = first
        .1
        .times()
        .iter()
        .map(|t| t.format(TIME_FORMAT).to_string())
        .collect();

    let mut columns = vec![Column::new("time".into(), times)];
    for (name, series) in decisions {
        if series.times() != first.1.times() {
            anyhow::bail!("Decision series '{}' is not aligned with '{}'", name, first.0);
        }
        let values: Vec<u32> = series.values().iter().map(|d| u32::from(d.value())).collect();
        columns.push(Column::new((*name).into(), values));
    }

    DataFrame::new(columns).context("Failed to assemble decision frame")
}

fn frame_times(df: &DataFrame) -> Result<Vec<NaiveDate>> {
    let time_col = df
        .column("time")
        .context("Column 'time' not found")?
        .str()
        .map_err(|_| IndicatorError::TypeMismatch("column 'time' is not string typed".into()))?;

    let mut times = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let raw = time_col
            .get(idx)
            .with_context(|| format!("Column 'time' has a missing value at row {}", idx))?;
        let date = NaiveDate::parse_from_str(raw, TIME_FORMAT)
            .with_context(|| format!("Invalid date '{}' at row {}", raw, idx))?;
        times.push(date);
    }
    Ok(times)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::Decision;

    fn frame() -> DataFrame {
        df!(
            "time" => ["2024-01-01", "2024-01-02", "2024-01-03"],
            "tp" => [0.0, 4.5, 1.2],
        )
        .unwrap()
    }

    #[test]
    fn extracts_a_series() {
        let tp = series_from_frame(&frame(), "tp").unwrap();
        assert_eq!(tp.name(), "tp");
        assert_eq!(tp.values(), &[0.0, 4.5, 1.2]);
        assert_eq!(
            tp.times()[0],
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn missing_column_is_an_error() {
        assert!(series_from_frame(&frame(), "tmax").is_err());
    }

    #[test]
    fn wrongly_typed_columns_are_type_mismatches() {
        let df = df!(
            "time" => ["2024-01-01", "2024-01-02"],
            "tp" => ["dry", "wet"],
        )
        .unwrap();
        let err = series_from_frame(&df, "tp").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<IndicatorError>(),
            Some(IndicatorError::TypeMismatch(_))
        ));

        let df = df!(
            "time" => [1.0, 2.0],
            "tp" => [0.0, 4.5],
        )
        .unwrap();
        let err = series_from_frame(&df, "tp").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<IndicatorError>(),
            Some(IndicatorError::TypeMismatch(_))
        ));
    }

    #[test]
    fn bad_date_is_an_error() {
        let df = df!(
            "time" => ["2024-13-01"],
            "tp" => [0.0],
        )
        .unwrap();
        assert!(series_from_frame(&df, "tp").is_err());
    }

    #[test]
    fn decision_round_trip() {
        let tp = series_from_frame(&frame(), "tp").unwrap();
        let decisions = DecisionSeries::aligned_with(
            &tp,
            vec![Decision::Ideal, Decision::Critical, Decision::Intermediate],
        )
        .unwrap();
        let out = decisions_to_frame(&[("drying", &decisions)]).unwrap();
        assert_eq!(out.height(), 3);
        let col = out.column("drying").unwrap().u32().unwrap();
        assert_eq!(col.get(0), Some(2));
        assert_eq!(col.get(1), Some(0));
        assert_eq!(col.get(2), Some(1));
    }
}
