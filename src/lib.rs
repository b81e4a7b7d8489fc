//! Agro-Meteorological Decision Indicators
//!
//! Turns daily weather forecasts and recent observations into operational
//! guidance for field work in West African rice systems.
//!
//! Module layout:
//! - `series`: time-series containers and the `SeriesOps` abstraction
//! - `weather/`: physical formulas (FAO-56 ETP, vapour pressure, degree
//!   days, wind) and threshold risks
//! - `agro/`: the day-by-day decision evaluators and rice-blast risk
//! - `table`: Polars CSV bridge for station frames
//! - `batch`: per-station bulletins, fanned out with Rayon

pub mod agro;
pub mod batch;
pub mod error;
pub mod series;
pub mod table;
pub mod utils;
pub mod weather;

// Re-export commonly used types
pub use batch::{compute_bulletin, compute_bulletins, AgroBulletin, StationForecast};
pub use error::{IndicatorError, Result};
pub use series::{Decision, DecisionSeries, GridSeries, PointSeries, SeriesOps};
pub use weather::{degree_days, fao56_penman_monteith, generate_risk, ExtremeEventConfig};
