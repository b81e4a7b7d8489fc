//! Post-harvest drying ("séchage")
//!
//! Open-air drying of the harvested grain wants dry, warm-but-not-torrid
//! weather. Purely day-by-day: no historical context involved.

use crate::agro::ensure_aligned;
use crate::error::Result;
use crate::series::{Decision, DecisionSeries, PointSeries};

/// Evaluate drying conditions per forecast day.
///
/// `tp` is the rainfall forecast [mm], `tmax` the maximum-temperature
/// forecast [deg C], `rhmean` and `rhmin` the mean and minimum relative
/// humidity forecasts [%].
pub fn drying(
    tp: &PointSeries,
    tmax: &PointSeries,
    rhmean: &PointSeries,
    rhmin: &PointSeries,
) -> Result<DecisionSeries> {
    ensure_aligned(tp, &[tmax, rhmean, rhmin])?;

    let decisions = (0..tp.len())
        .map(|i| {
            let ideal = tp.value(i) <= 1.0
                && tmax.value(i) < 42.0
                && rhmean.value(i) < 50.0
                && rhmin.value(i) > 10.0;
            let critical = tmax.value(i) > 42.0 || tp.value(i) > 1.0 || rhmin.value(i) < 10.0;
            Decision::classify(ideal, critical)
        })
        .collect();

    DecisionSeries::aligned_with(tp, decisions)
}
