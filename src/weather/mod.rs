//! Weather-derived quantities: physical/empirical formulas and
//! threshold-based risk indicators.

pub mod degree_days;
pub mod etp;
pub mod extreme_events;
pub mod historical;
pub mod thermodynamics;
pub mod wind;

pub use degree_days::{degree_days, CutoffMethod, ThermalIndex};
pub use etp::fao56_penman_monteith;
pub use extreme_events::{generate_risk, ExtremeEventConfig, RiskThresholds};
pub use historical::{summarize_historical, HistoricalSummary, HISTORICAL_DD_BASE};
