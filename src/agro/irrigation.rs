//! Irrigation
//!
//! Irrigation is worthwhile when the crop is losing much more water than
//! it receives: dry yesterday and today, strong evaporative demand, and
//! little rain expected over the coming 5 days. It turns pointless (or
//! harmful) when rain arrives or demand collapses.

use crate::agro::{ensure_aligned, last_observation};
use crate::error::Result;
use crate::series::{Decision, DecisionSeries, PointSeries};

/// Evaluate irrigation conditions per forecast day.
///
/// `tp_histo` is the recent rainfall history [mm], `tp` the rainfall
/// forecast [mm] and `etp` the reference evapotranspiration forecast
/// [mm]. The 5-day rainfall outlook truncates at the end of the horizon.
pub fn irrigation(
    tp_histo: &PointSeries,
    tp: &PointSeries,
    etp: &PointSeries,
) -> Result<DecisionSeries> {
    ensure_aligned(tp, &[etp])?;

    let last_histo = last_observation(tp_histo)?;

    let mut decisions = Vec::with_capacity(tp.len());
    for i in 0..tp.len() {
        let yesterday = if i == 0 { last_histo } else { tp.value(i - 1) };
        let outlook = tp.window_sum(i, 5);

        let ideal =
            yesterday <= 1.0 && tp.value(i) <= 1.0 && etp.value(i) >= 10.0 && outlook <= 10.0;
        let critical = tp.value(i) >= 10.0 || etp.value(i) <= 5.0 || outlook >= 50.0;
        decisions.push(Decision::classify(ideal, critical));
    }

    DecisionSeries::aligned_with(tp, decisions)
}
