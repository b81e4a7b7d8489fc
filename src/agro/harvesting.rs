//! Harvesting ("récolte")
//!
//! Harvest wants the grain dry: no rain today nor tomorrow, dry air, and
//! no rainfall at all over the recent history. A wet 2-day window around
//! the harvest day is disqualifying when it exceeds 5 mm.

use crate::agro::ensure_aligned;
use crate::error::Result;
use crate::series::{Decision, DecisionSeries, PointSeries};

/// Evaluate harvesting conditions per forecast day.
///
/// `tp_histo` is the recent rainfall history [mm], `tp` the rainfall
/// forecast [mm] and `rhmean` the mean relative humidity forecast [%].
/// The 2-day rainfall window truncates at the end of the horizon, so the
/// last day is judged on its own rainfall only.
pub fn harvesting(
    tp_histo: &PointSeries,
    tp: &PointSeries,
    rhmean: &PointSeries,
) -> Result<DecisionSeries> {
    ensure_aligned(tp, &[rhmean])?;

    let histo_dry = tp_histo.sum() == 0.0;

    let mut decisions = Vec::with_capacity(tp.len());
    for i in 0..tp.len() {
        let coming_rain = tp.window_sum(i, 2);
        let ideal = coming_rain == 0.0 && rhmean.value(i) < 80.0 && histo_dry;
        let critical = coming_rain > 5.0;
        decisions.push(Decision::classify(ideal, critical));
    }

    DecisionSeries::aligned_with(tp, decisions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agro::fixtures;

    #[test]
    fn critical_condition() {
        let out =
            harvesting(&fixtures::wet_histo(14), &fixtures::tp(), &fixtures::rhmean()).unwrap();
        assert_eq!(out.value(0), Decision::Critical);
    }

    #[test]
    fn intermediate_condition() {
        // 1.5 mm over the 2-day window: neither dry nor disqualifying
        let out =
            harvesting(&fixtures::dry_histo(14), &fixtures::tp(), &fixtures::rhmean()).unwrap();
        assert_eq!(out.value(5), Decision::Intermediate);
    }

    #[test]
    fn ideal_needs_a_dry_history() {
        let tp = PointSeries::from_daily(
            "tp",
            fixtures::forecast_start(),
            vec![0.0, 0.0, 0.0, 12.0],
        );
        let rhmean = PointSeries::from_daily(
            "rhmean",
            fixtures::forecast_start(),
            vec![60.0, 60.0, 60.0, 60.0],
        );

        let dry = harvesting(&fixtures::dry_histo(14), &tp, &rhmean).unwrap();
        assert_eq!(dry.value(0), Decision::Ideal);
        assert_eq!(dry.value(1), Decision::Ideal);
        // day 2 sees tomorrow's 12 mm
        assert_eq!(dry.value(2), Decision::Critical);

        let wet = harvesting(&fixtures::wet_histo(14), &tp, &rhmean).unwrap();
        assert_eq!(wet.value(0), Decision::Intermediate);
    }

    #[test]
    fn last_day_window_truncates() {
        let tp = PointSeries::from_daily("tp", fixtures::forecast_start(), vec![8.0, 0.0]);
        let rhmean = PointSeries::from_daily("rhmean", fixtures::forecast_start(), vec![70.0, 70.0]);
        let out = harvesting(&fixtures::dry_histo(14), &tp, &rhmean).unwrap();
        assert_eq!(out.value(0), Decision::Critical);
        assert_eq!(out.value(1), Decision::Ideal);
    }
}
