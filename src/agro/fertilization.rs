//! Fertilization
//!
//! Fertilizer spreading wants moist conditions around the application day
//! (rain yesterday or today) with moderate rain amounts, and neither heavy
//! rain nor extreme heat. Day 0 checks yesterday against the last
//! historical observation; later days use a 2-day wet-day count on the
//! forecast itself. The asymmetry is intentional: only day 0 has an
//! observed yesterday to look up.

use crate::agro::{ensure_aligned, last_observation};
use crate::error::Result;
use crate::series::{Decision, DecisionSeries, PointSeries};
use crate::utils::WET_DAY_THRESHOLD;

/// Evaluate fertilization conditions per forecast day.
///
/// `tp_histo` is the recent rainfall history [mm], `tp` the rainfall
/// forecast [mm], `tmax` the maximum-temperature forecast [deg C] and
/// `rhmean` the mean relative humidity forecast [%].
pub fn fertilization(
    tp_histo: &PointSeries,
    tp: &PointSeries,
    tmax: &PointSeries,
    rhmean: &PointSeries,
) -> Result<DecisionSeries> {
    ensure_aligned(tp, &[tmax, rhmean])?;

    let wet = |v: f64| v >= WET_DAY_THRESHOLD;
    let last_histo = last_observation(tp_histo)?;

    let mut decisions = Vec::with_capacity(tp.len());
    for i in 0..tp.len() {
        let tp_i = tp.value(i);
        let rained_around = if i == 0 {
            wet(last_histo) && wet(tp_i)
        } else {
            wet(tp.value(i - 1)) || wet(tp_i)
        };

        let ideal = rained_around
            && rhmean.value(i) >= 70.0
            && tmax.value(i) < 35.0
            && tp_i > 5.0
            && tp_i < 10.0;
        let critical = tp_i >= 30.0 || tmax.value(i) >= 38.0;
        decisions.push(Decision::classify(ideal, critical));
    }

    DecisionSeries::aligned_with(tp, decisions)
}
