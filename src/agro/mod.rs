//! Agro-decision indicators
//!
//! Seven day-by-day rule evaluators giving a daily state of field-work
//! conditions over the forecast horizon (typically the next 10 days):
//! favorable (2), intermediate (1), not favorable (0). The rice-blast
//! disease risk lives in `disease` with the same ternary scale but risk
//! polarity (2 = high risk).
//!
//! Every evaluator combines the forecast with recent historical context
//! (observed rainfall, or rainfall estimates when observations are
//! missing) through lag-1 lookups and trailing windows that may span the
//! historical/forecast boundary.

pub mod disease;
pub mod drying;
pub mod fertilization;
pub mod harvesting;
pub mod irrigation;
pub mod land_preparation;
pub mod protection;
pub mod sowing;

pub use disease::rice_blast;
pub use drying::drying;
pub use fertilization::fertilization;
pub use harvesting::harvesting;
pub use irrigation::irrigation;
pub use land_preparation::land_preparation;
pub use protection::protection;
pub use sowing::sowing;

use crate::error::{IndicatorError, Result};
use crate::series::PointSeries;

/// All forecast inputs of one evaluator must share the primary rainfall
/// input's time axis.
pub(crate) fn ensure_aligned(primary: &PointSeries, others: &[&PointSeries]) -> Result<()> {
    for other in others {
        if other.times() != primary.times() {
            return Err(IndicatorError::AssertionViolation(format!(
                "`{}` is not aligned with `{}`",
                other.name(),
                primary.name()
            )));
        }
    }
    Ok(())
}

/// Last observed value of a historical series, required by the day-0
/// special cases.
pub(crate) fn last_observation(histo: &PointSeries) -> Result<f64> {
    histo.last_value().ok_or_else(|| {
        IndicatorError::InvalidInput(format!(
            "historical series `{}` must not be empty",
            histo.name()
        ))
    })
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Shared forecast fixture, a simulated D+8 horizon.

    use crate::series::PointSeries;
    use chrono::NaiveDate;

    pub fn forecast_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn forecast(name: &str, values: Vec<f64>) -> PointSeries {
        PointSeries::from_daily(name, forecast_start(), values)
    }

    pub fn tp() -> PointSeries {
        forecast("tp", vec![0.0, 35.0, 5.0, 5.5, 7.5, 0.0, 1.5, 17.2])
    }

    pub fn tmax() -> PointSeries {
        forecast("tmax", vec![35.0, 42.0, 35.0, 36.0, 33.0, 35.0, 34.0, 33.8])
    }

    pub fn rhmean() -> PointSeries {
        forecast("rhmean", vec![45.0, 40.0, 45.0, 42.0, 72.0, 55.0, 60.0, 55.0])
    }

    pub fn rhmin() -> PointSeries {
        forecast("rhmin", vec![20.0, 15.0, 20.0, 22.0, 21.0, 28.0, 30.0, 35.0])
    }

    pub fn gust() -> PointSeries {
        forecast("gust", vec![52.0, 35.0, 20.0, 34.0, 5.0, 8.0, 10.0, 12.0])
    }

    pub fn cloud_cover() -> PointSeries {
        forecast(
            "cloud_cover",
            vec![15.0, 26.0, 23.0, 38.0, 56.0, 45.0, 89.0, 45.0],
        )
    }

    /// `days` of history ending the day before the forecast starts.
    pub fn histo(values: Vec<f64>) -> PointSeries {
        let start = forecast_start() - chrono::Duration::days(values.len() as i64);
        PointSeries::from_daily("tp", start, values)
    }

    pub fn dry_histo(days: usize) -> PointSeries {
        histo(vec![0.0; days])
    }

    pub fn wet_histo(days: usize) -> PointSeries {
        histo(vec![2.0; days])
    }
}
