//! Sowing ("semis")
//!
//! Sowing wants a modest rain signal without an installed dry spell: the
//! dry-spell check looks at a 7-day window ending at the evaluated day on
//! the merged historical + forecast rainfall timeline.

use crate::agro::ensure_aligned;
use crate::error::Result;
use crate::series::{Decision, DecisionSeries, PointSeries};
use crate::utils::{cdd_max, WET_DAY_THRESHOLD};

/// Days of rainfall history kept in front of the forecast when merging
/// timelines (7 historical days ahead of a 10-day horizon).
const MERGED_WINDOW: usize = 17;

/// Evaluate sowing conditions per forecast day.
///
/// `tp_histo` is the recent rainfall history [mm], `tp` the rainfall
/// forecast [mm] and `gust` the wind-gust forecast [km/h].
pub fn sowing(tp_histo: &PointSeries, tp: &PointSeries, gust: &PointSeries) -> Result<DecisionSeries> {
    ensure_aligned(tp, &[gust])?;

    let merged = tp_histo.concat(tp)?.tail(MERGED_WINDOW);
    let merged = merged.values();

    let mut decisions = Vec::with_capacity(tp.len());
    for i in 0..tp.len() {
        let window = &merged[i.min(merged.len())..(i + 7).min(merged.len())];
        let dry_spell = cdd_max(window, WET_DAY_THRESHOLD);

        let tp_i = tp.value(i);
        let gust_i = gust.value(i);
        let ideal = (1.0..=10.0).contains(&tp_i) && gust_i <= 30.0 && dry_spell <= 5;
        let critical = tp_i > 30.0 || gust_i > 50.0 || dry_spell >= 7;
        decisions.push(Decision::classify(ideal, critical));
    }

    DecisionSeries::aligned_with(tp, decisions)
}
