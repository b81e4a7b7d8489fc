//! Crop protection ("protection")
//!
//! Guidance for spreading insecticides. Products hold better on moist
//! foliage under overcast skies, so the ideal case wants rain yesterday
//! or today plus cloud cover, while strong gusts or scorching clear-sky
//! heat make spraying pointless or dangerous.

use crate::agro::{ensure_aligned, last_observation};
use crate::error::Result;
use crate::series::{Decision, DecisionSeries, PointSeries};
use crate::utils::WET_DAY_THRESHOLD;

/// Evaluate crop-protection conditions per forecast day.
///
/// `tp_histo` is the recent rainfall history [mm], `tp` the rainfall
/// forecast [mm], `tmax` the maximum-temperature forecast [deg C],
/// `gust` the wind-gust forecast [km/h] and `cloud_cover` the cloud
/// cover forecast [%].
pub fn protection(
    tp_histo: &PointSeries,
    tp: &PointSeries,
    tmax: &PointSeries,
    gust: &PointSeries,
    cloud_cover: &PointSeries,
) -> Result<DecisionSeries> {
    ensure_aligned(tp, &[tmax, gust, cloud_cover])?;

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
            && tmax.value(i) < 35.0
            && tp_i < 15.0
            && cloud_cover.value(i) >= 50.0;
        let critical =
            gust.value(i) >= 50.0 || (tmax.value(i) >= 38.0 && cloud_cover.value(i) <= 20.0);
        decisions.push(Decision::classify(ideal, critical));
    }

    DecisionSeries::aligned_with(tp, decisions)
}
