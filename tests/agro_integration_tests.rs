//! Agro Bulletin Integration Tests
//!
//! Runs the full station pipeline: Polars frames in, decision frames out.
//! The forecast fixture is an 8-day horizon with one windy clear day, one
//! stormy day and a humid mid-week window, so every indicator exercises
//! all three decision states somewhere.

use agromet_indicators::batch::{compute_bulletin, StationForecast};
use agromet_indicators::series::{Decision, PointSeries};
use agromet_indicators::table::{decisions_to_frame, series_from_frame};
use agromet_indicators::weather::ExtremeEventConfig;
use polars::prelude::*;

fn forecast_frame() -> DataFrame {
    df!(
        "time" => [
            "2024-01-01", "2024-01-02", "2024-01-03", "2024-01-04",
            "2024-01-05", "2024-01-06", "2024-01-07", "2024-01-08",
        ],
        "tp" => [0.0, 35.0, 5.0, 5.5, 7.5, 0.0, 1.5, 17.2],
        "tmax" => [35.0, 42.0, 35.0, 36.0, 33.0, 35.0, 34.0, 33.8],
        "tmean" => [28.0, 33.0, 27.0, 28.5, 26.0, 27.5, 26.5, 26.0],
        "tmin" => [22.0, 25.0, 20.0, 21.5, 20.0, 21.0, 20.5, 20.0],
        "rhmean" => [45.0, 40.0, 45.0, 42.0, 72.0, 55.0, 60.0, 55.0],
        "rhmin" => [20.0, 15.0, 20.0, 22.0, 21.0, 28.0, 30.0, 35.0],
        "gust" => [52.0, 35.0, 20.0, 34.0, 5.0, 8.0, 10.0, 12.0],
        "cloud_cover" => [15.0, 26.0, 23.0, 38.0, 56.0, 45.0, 89.0, 45.0],
        "etp" => [10.0, 4.0, 8.0, 9.5, 7.5, 6.8, 4.5, 6.0],
    )
    .unwrap()
}

fn histo_frame(rainfall: f64) -> DataFrame {
    let times: Vec<String> = (18..=31).map(|d| format!("2023-12-{d:02}")).collect();
    df!(
        "time" => times,
        "tp" => [rainfall; 14],
    )
    .unwrap()
}

fn station(histo_rainfall: f64) -> StationForecast {
    let df = forecast_frame();
    let col = |name: &str| series_from_frame(&df, name).unwrap();
    StationForecast {
        tp_histo: series_from_frame(&histo_frame(histo_rainfall), "tp").unwrap(),
        tp: col("tp"),
        tmax: col("tmax"),
        tmean: col("tmean"),
        tmin: col("tmin"),
        rhmean: col("rhmean"),
        rhmin: col("rhmin"),
        gust: col("gust"),
        cloud_cover: col("cloud_cover"),
        etp: col("etp"),
    }
}

#[test]
fn wet_season_bulletin() {
    let bulletin = compute_bulletin(&station(2.0), &ExtremeEventConfig::default()).unwrap();

    // land preparation: moist soil, so only the daily weather decides
    assert_eq!(bulletin.land_preparation.value(2), Decision::Ideal);
    assert_eq!(bulletin.land_preparation.value(3), Decision::Intermediate);

    // fertilization around the humid mid-week window
    assert_eq!(bulletin.fertilization.value(1), Decision::Critical);
    assert_eq!(bulletin.fertilization.value(4), Decision::Ideal);
    assert_eq!(bulletin.fertilization.value(6), Decision::Intermediate);

    // protection: windy day 0, overcast moist day 4, rainy day 7
    assert_eq!(bulletin.protection.value(0), Decision::Critical);
    assert_eq!(bulletin.protection.value(4), Decision::Ideal);
    assert_eq!(bulletin.protection.value(7), Decision::Intermediate);

    // harvesting is hopeless after a wet fortnight
    assert_eq!(bulletin.harvesting.value(0), Decision::Critical);

    // drying ignores history entirely
    assert_eq!(bulletin.drying.value(0), Decision::Ideal);
    assert_eq!(bulletin.drying.value(2), Decision::Critical);
    assert_eq!(bulletin.drying.value(5), Decision::Intermediate);
}

#[test]
fn dry_season_bulletin() {
    let bulletin = compute_bulletin(&station(0.0), &ExtremeEventConfig::default()).unwrap();

    // the forecast brings 6 wet days, so forecast rain alone satisfies the
    // land-preparation moisture precondition despite the dry history
    assert_eq!(bulletin.land_preparation.value(0), Decision::Critical); // gust 52
    assert_eq!(bulletin.land_preparation.value(2), Decision::Ideal);

    // sowing reacts to the installed dry spell instead
    assert_eq!(bulletin.sowing.value(3), Decision::Critical);
    assert_eq!(bulletin.sowing.value(4), Decision::Intermediate);
    assert_eq!(bulletin.sowing.value(6), Decision::Ideal);

    assert_eq!(bulletin.harvesting.value(5), Decision::Intermediate);
}

#[test]
fn extreme_event_risks_follow_the_operational_thresholds() {
    let bulletin = compute_bulletin(&station(2.0), &ExtremeEventConfig::default()).unwrap();

    assert_eq!(bulletin.heavy_rain.value(0), 0.0);
    assert_eq!(bulletin.heavy_rain.value(1), 2.0); // 35 mm
    assert_eq!(bulletin.heavy_rain.value(7), 1.0); // 17.2 mm

    assert_eq!(bulletin.heat_stress.value(1), 2.0); // 42 degC
    assert_eq!(bulletin.heat_stress.value(4), 0.0); // 33 degC

    assert_eq!(bulletin.strong_wind.value(0), 1.0); // 52 km/h
    assert_eq!(bulletin.strong_wind.value(2), 0.0);
}

#[test]
fn irrigation_pipeline_from_frames() {
    let start = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let tp = PointSeries::from_daily("tp", start, vec![0.0, 0.0, 0.5, 0.8, 0.1, 10.5, 3.1]);
    let etp = PointSeries::from_daily("etp", start, vec![10.0, 11.0, 8.0, 9.5, 7.5, 6.8, 4.5]);
    let histo = PointSeries::from_daily(
        "tp",
        start - chrono::Duration::days(14),
        vec![0.0; 14],
    );

    let out = agromet_indicators::agro::irrigation(&histo, &tp, &etp).unwrap();
    assert_eq!(out.value(0), Decision::Ideal);
    assert_eq!(out.value(2), Decision::Intermediate);
    assert_eq!(out.value(6), Decision::Critical);
}

#[test]
fn decision_frame_export() {
    let bulletin = compute_bulletin(&station(2.0), &ExtremeEventConfig::default()).unwrap();
    let frame = decisions_to_frame(&[
        ("land_preparation", &bulletin.land_preparation),
        ("sowing", &bulletin.sowing),
        ("fertilization", &bulletin.fertilization),
        ("irrigation", &bulletin.irrigation),
        ("protection", &bulletin.protection),
        ("harvesting", &bulletin.harvesting),
        ("drying", &bulletin.drying),
    ])
    .unwrap();

    assert_eq!(frame.height(), 8);
    assert_eq!(frame.width(), 8); // time + 7 indicators

    let time = frame.column("time").unwrap().str().unwrap();
    assert_eq!(time.get(0), Some("2024-01-01"));

    let drying = frame.column("drying").unwrap().u32().unwrap();
    assert_eq!(drying.get(0), Some(2));
    assert_eq!(drying.get(2), Some(0));
}
