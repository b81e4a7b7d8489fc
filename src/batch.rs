//! Station bulletins
//!
//! Assembles the full product for one station (decision indicators,
//! disease risk, extreme-event risks, rainfall summaries) and fans the
//! computation out over a station network with Rayon.

use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::agro;
use crate::error::Result;
use crate::series::{DecisionSeries, PointSeries, SeriesOps};
use crate::utils::{wet_days, WET_DAY_THRESHOLD};
use crate::weather::{generate_risk, ExtremeEventConfig};

/// Forecast and historical inputs for one station.
///
/// All forecast series share the forecast time axis; `tp_histo` ends the
/// day before the forecast starts.
#[derive(Debug, Clone)]
pub struct StationForecast {
    pub tp_histo: PointSeries,
    pub tp: PointSeries,
    pub tmax: PointSeries,
    pub tmean: PointSeries,
    pub tmin: PointSeries,
    pub rhmean: PointSeries,
    pub rhmin: PointSeries,
    pub gust: PointSeries,
    pub cloud_cover: PointSeries,
    pub etp: PointSeries,
}

/// Daily guidance product for one station.
#[derive(Debug, Clone)]
pub struct AgroBulletin {
    pub land_preparation: DecisionSeries,
    pub sowing: DecisionSeries,
    pub fertilization: DecisionSeries,
    pub irrigation: DecisionSeries,
    pub protection: DecisionSeries,
    pub harvesting: DecisionSeries,
    pub drying: DecisionSeries,
    pub rice_blast: PointSeries,
    pub heavy_rain: PointSeries,
    pub heat_stress: PointSeries,
    pub strong_wind: PointSeries,
    pub wet_days: Vec<bool>,
    pub total_rainfall: f64,
}

/// Compute the full bulletin for one station.
pub fn compute_bulletin(
    station: &StationForecast,
    config: &ExtremeEventConfig,
) -> Result<AgroBulletin> {
    let rain = &config.heavy_rain;
    let heat = &config.heat_stress;
    let wind = &config.strong_wind;

    Ok(AgroBulletin {
        land_preparation: agro::land_preparation(&station.tp_histo, &station.tp, &station.gust)?,
        sowing: agro::sowing(&station.tp_histo, &station.tp, &station.gust)?,
        fertilization: agro::fertilization(
            &station.tp_histo,
            &station.tp,
            &station.tmax,
            &station.rhmean,
        )?,
        irrigation: agro::irrigation(&station.tp_histo, &station.tp, &station.etp)?,
        protection: agro::protection(
            &station.tp_histo,
            &station.tp,
            &station.tmax,
            &station.gust,
            &station.cloud_cover,
        )?,
        harvesting: agro::harvesting(&station.tp_histo, &station.tp, &station.rhmean)?,
        drying: agro::drying(&station.tp, &station.tmax, &station.rhmean, &station.rhmin)?,
        rice_blast: agro::rice_blast(&station.tmean, &station.tmin, &station.rhmean)?,
        heavy_rain: generate_risk(&station.tp, rain.lower, rain.upper).renamed("heavy_rain"),
        heat_stress: generate_risk(&station.tmax, heat.lower, heat.upper).renamed("heat_stress"),
        strong_wind: generate_risk(&station.gust, wind.lower, wind.upper).renamed("strong_wind"),
        wet_days: wet_days(station.tp.values(), WET_DAY_THRESHOLD),
        total_rainfall: (station.tp.sum() * 10.0).round() / 10.0,
    })
}

/// Compute bulletins for a station network in parallel.
///
/// Fails on the first station whose inputs are inconsistent.
pub fn compute_bulletins(
    stations: &FxHashMap<String, StationForecast>,
    config: &ExtremeEventConfig,
) -> Result<FxHashMap<String, AgroBulletin>> {
    stations
        .par_iter()
        .map(|(name, station)| Ok((name.clone(), compute_bulletin(station, config)?)))
        .collect()
}
