//! Rice blast risk
//!
//! Empirical risk bands for *Magnaporthe oryzae* outbreaks: infection
//! needs mild days, cool nights and near-saturated air. The scale reads
//! 2 = high risk, 0 = no risk, 1 = moderate. The two rule sets are not
//! complementary, so in-between weather (e.g. a 28.5 deg C day) falls in
//! the moderate band.

use crate::error::Result;
use crate::series::SeriesOps;

/// Rice-blast risk from mean temperature [deg C], minimum temperature
/// [deg C] and mean relative humidity [%].
pub fn rice_blast<S: SeriesOps>(tmean: &S, tmin: &S, rhmean: &S) -> Result<S> {
    let risk = S::zip_many(&[tmean, tmin, rhmean], |v| {
        let (tmean, tmin, rh) = (v[0], v[1], v[2]);
        if (25.0..=28.0).contains(&tmean) && tmin <= 22.0 && rh >= 90.0 {
            2.0
        } else if tmean >= 29.0 || rh <= 85.0 {
            0.0
        } else {
            1.0
        }
    })?;
    Ok(risk.renamed("rice_blast"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agro::fixtures;
    use crate::series::PointSeries;

    fn series(name: &str, values: Vec<f64>) -> PointSeries {
        PointSeries::from_daily(name, fixtures::forecast_start(), values)
    }

    #[test]
    fn risk_bands() {
        let tmean = series("tmean", vec![26.0, 30.0, 27.0, 26.5]);
        let tmin = series("tmin", vec![20.0, 24.0, 23.0, 21.0]);
        let rhmean = series("rhmean", vec![95.0, 92.0, 93.0, 80.0]);
        let out = rice_blast(&tmean, &tmin, &rhmean).unwrap();
        // high; too hot; warm night keeps it moderate; too dry
        assert_eq!(out.values(), &[2.0, 0.0, 1.0, 0.0]);
        assert_eq!(out.name(), "rice_blast");
    }

    #[test]
    fn gap_between_rule_sets_is_moderate() {
        let tmean = series("tmean", vec![28.5]);
        let tmin = series("tmin", vec![21.0]);
        let rhmean = series("rhmean", vec![92.0]);
        let out = rice_blast(&tmean, &tmin, &rhmean).unwrap();
        assert_eq!(out.values(), &[1.0]);
    }

    #[test]
    fn scalar_inputs() {
        assert_eq!(rice_blast(&26.0, &20.0, &95.0).unwrap(), 2.0);
        assert_eq!(rice_blast(&29.0, &20.0, &95.0).unwrap(), 0.0);
    }
}
