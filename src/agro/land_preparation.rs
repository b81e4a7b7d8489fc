//! Land preparation ("préparation du sol")
//!
//! Guidance on working the soil, typically just before the rainy season.
//! The soil must already be slightly moist, so the whole horizon is gated
//! on a recent-rainfall precondition; on top of that, calm weather is
//! required (no strong wind or heavy rain).

use crate::agro::ensure_aligned;
use crate::error::Result;
use crate::series::{Decision, DecisionSeries, PointSeries};
use crate::utils::{wet_days, WET_DAY_THRESHOLD};

/// Evaluate land-preparation conditions per forecast day.
///
/// `tp_histo` is the recent rainfall history (last month) [mm], `tp` the
/// rainfall forecast [mm] and `gust` the wind-gust forecast [km/h].
///
/// The moisture precondition needs at least 4 wet days over the history,
/// or over history and forecast combined; otherwise every day is reported
/// unfavorable regardless of the daily weather.
pub fn land_preparation(
    tp_histo: &PointSeries,
    tp: &PointSeries,
    gust: &PointSeries,
) -> Result<DecisionSeries> {
    ensure_aligned(tp, &[gust])?;

    let histo_wet = wet_days(tp_histo.values(), WET_DAY_THRESHOLD)
        .iter()
        .filter(|&&w| w)
        .count();
    let forecast_wet = wet_days(tp.values(), WET_DAY_THRESHOLD)
        .iter()
        .filter(|&&w| w)
        .count();

    let decisions = if histo_wet >= 4 || histo_wet + forecast_wet >= 4 {
        tp.values()
            .iter()
            .zip(gust.values())
            .map(|(&tp, &gust)| {
                let ideal = tp < 10.0 && tp > 1.0 && gust < 30.0;
                let critical = tp > 30.0 || gust > 50.0;
                Decision::classify(ideal, critical)
            })
            .collect()
    } else {
        vec![Decision::Critical; tp.len()]
    };

    DecisionSeries::aligned_with(tp, decisions)
}
