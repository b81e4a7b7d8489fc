//! Historical station products
//!
//! Daily summaries computed over the observed (or estimated) past: hot
//! degree days, rainfall accounting and wet/dry spell bookkeeping. These
//! are the per-station historical outputs of the advisory bulletin; the
//! surrounding file formats belong to the I/O layer.

use crate::error::Result;
use crate::series::{PointSeries, SeriesOps};
use crate::utils::{consecutive_event_count, wet_days, WET_DAY_THRESHOLD};
use crate::weather::degree_days::{degree_days, ThermalIndex};

/// Base temperature [deg C] for the historical hot degree days.
pub const HISTORICAL_DD_BASE: f64 = 18.0;

/// Historical summary for one station.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalSummary {
    /// Hot degree days at base 18, rounded to one decimal.
    pub degree_days: PointSeries,
    /// Rainfall total over the whole period [mm].
    pub total_rainfall: f64,
    /// Wet-day flag per day (>= 1 mm).
    pub wet_days: Vec<bool>,
    /// Consecutive wet days before each day, reset on a dry day.
    pub consecutive_wet_days: Vec<u32>,
    /// Consecutive dry days before each day, reset on a wet day.
    pub consecutive_dry_days: Vec<u32>,
}

/// Summarize historical mean temperature and rainfall for one station.
/// The two series may come from different sources and need not share a
/// time axis.
pub fn summarize_historical(tmean: &PointSeries, tp: &PointSeries) -> Result<HistoricalSummary> {
    let dd = degree_days(
        HISTORICAL_DD_BASE,
        None,
        None,
        Some(tmean),
        ThermalIndex::Hot,
        None,
        None,
    )?
    .map(|v| (v * 10.0).round() / 10.0);

    let wet = wet_days(tp.values(), WET_DAY_THRESHOLD);
    let dry: Vec<bool> = wet.iter().map(|&w| !w).collect();

    Ok(HistoricalSummary {
        degree_days: dd,
        total_rainfall: tp.sum(),
        consecutive_wet_days: consecutive_event_count(&wet),
        consecutive_dry_days: consecutive_event_count(&dry),
        wet_days: wet,
    })
}
