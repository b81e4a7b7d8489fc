//! Temporal series containers
//!
//! All formula and classifier functions operate on a small closed family of
//! containers sharing one elementwise capability set (`SeriesOps`):
//!
//! - `PointSeries`: one value per calendar day (stations, the common case)
//! - `GridSeries`: one value per (spatial cell, day), time as trailing axis
//! - `f64`: plain scalars, so every formula is also scalar-in/scalar-out
//!
//! Series are immutable value types: operations never mutate in place and
//! outputs share the input's time index. Time axes are gap-tolerant; only
//! operations that explicitly window over a fixed horizon assume contiguity.

use chrono::NaiveDate;
use serde::Serialize;
use smallvec::SmallVec;

use crate::error::{IndicatorError, Result};

/// Metadata record attached to derived gridded output (e.g. degree days).
/// Point series do not carry attributes; the record is silently dropped for
/// containers without attribute support.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesAttrs {
    pub parameter: String,
    pub base: f64,
    pub cutoff_method: Option<String>,
    pub cutoff_val: Option<f64>,
}

/// Elementwise capability set shared by all series containers.
///
/// Formula functions are generic over this trait instead of branching on
/// concrete container kinds.
pub trait SeriesOps: Sized + Clone {
    /// Apply `f` to every value, preserving the index/coordinate structure.
    fn map<F: Fn(f64) -> f64>(&self, f: F) -> Self;

    /// Combine two index-aligned containers elementwise. The result keeps
    /// the left operand's index and name.
    fn zip_with<F: Fn(f64, f64) -> f64>(&self, other: &Self, f: F) -> Result<Self>;

    /// Combine any number of index-aligned containers elementwise. `f`
    /// receives one value per input, in input order.
    fn zip_many<F: Fn(&[f64]) -> f64>(inputs: &[&Self], f: F) -> Result<Self>;

    /// Rename the container, where naming is supported.
    fn renamed(self, name: &str) -> Self;

    /// Attach descriptive metadata, where the container supports it.
    /// Default: drop the record.
    fn with_attrs(self, _attrs: SeriesAttrs) -> Self {
        self
    }
}

/// Daily series for a single location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointSeries {
    name: String,
    times: Vec<NaiveDate>,
    values: Vec<f64>,
}

impl PointSeries {
    /// Build a series from explicit (time, value) pairs. The time axis must
    /// be strictly increasing and index-aligned with the values.
    pub fn new(name: &str, times: Vec<NaiveDate>, values: Vec<f64>) -> Result<Self> {
        if times.len() != values.len() {
            return Err(IndicatorError::invalid(format!(
                "`{}`: {} timestamps for {} values",
                name,
                times.len(),
                values.len()
            )));
        }
        if times.windows(2).any(|w| w[0] >= w[1]) {
            return Err(IndicatorError::invalid(format!(
                "`{}`: time axis must be strictly increasing",
                name
            )));
        }
        Ok(Self {
            name: name.to_string(),
            times,
            values,
        })
    }

    /// Build a contiguous daily series starting at `start`. Convenient for
    /// forecast horizons, which are always contiguous.
    pub fn from_daily(name: &str, start: NaiveDate, values: Vec<f64>) -> Self {
        let times = (0..values.len() as i64)
            .map(|d| start + chrono::Duration::days(d))
            .collect();
        Self {
            name: name.to_string(),
            times,
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn times(&self) -> &[NaiveDate] {
        &self.times
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn value(&self, i: usize) -> f64 {
        self.values[i]
    }

    pub fn last_value(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Total over the whole series.
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Sum of `values[start..start + len]`, truncated at the series end.
    /// Windows reaching past the horizon never fail; they shrink.
    pub fn window_sum(&self, start: usize, len: usize) -> f64 {
        let end = (start + len).min(self.values.len());
        self.values[start.min(end)..end].iter().sum()
    }

    /// Last `n` days (the whole series when shorter than `n`).
    pub fn tail(&self, n: usize) -> PointSeries {
        let skip = self.values.len().saturating_sub(n);
        PointSeries {
            name: self.name.clone(),
            times: self.times[skip..].to_vec(),
            values: self.values[skip..].to_vec(),
        }
    }

    /// Append `other` onto this series, forming one continuous timeline.
    /// The two series must not overlap in time: historical series end the
    /// day before the forecast horizon starts.
    pub fn concat(&self, other: &PointSeries) -> Result<PointSeries> {
        if let (Some(last), Some(first)) = (self.times.last(), other.times.first()) {
            if first <= last {
                return Err(IndicatorError::invalid(format!(
                    "`{}` + `{}`: timelines overlap at {}",
                    self.name, other.name, first
                )));
            }
        }
        let mut times = self.times.clone();
        times.extend_from_slice(&other.times);
        let mut values = self.values.clone();
        values.extend_from_slice(&other.values);
        Ok(PointSeries {
            name: self.name.clone(),
            times,
            values,
        })
    }

    fn check_aligned(&self, other: &PointSeries) -> Result<()> {
        if self.times != other.times {
            return Err(IndicatorError::shape(format!(
                "`{}` and `{}` have different time axes",
                self.name, other.name
            )));
        }
        Ok(())
    }
}

impl SeriesOps for PointSeries {
    fn map<F: Fn(f64) -> f64>(&self, f: F) -> Self {
        PointSeries {
            name: self.name.clone(),
            times: self.times.clone(),
            values: self.values.iter().map(|&v| f(v)).collect(),
        }
    }

    fn zip_with<F: Fn(f64, f64) -> f64>(&self, other: &Self, f: F) -> Result<Self> {
        self.check_aligned(other)?;
        Ok(PointSeries {
            name: self.name.clone(),
            times: self.times.clone(),
            values: self
                .values
                .iter()
                .zip(&other.values)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        })
    }

    fn zip_many<F: Fn(&[f64]) -> f64>(inputs: &[&Self], f: F) -> Result<Self> {
        let first = inputs
            .first()
            .ok_or_else(|| IndicatorError::invalid("zip_many: no input series"))?;
        for other in &inputs[1..] {
            first.check_aligned(other)?;
        }
        let mut values = Vec::with_capacity(first.len());
        let mut row: SmallVec<[f64; 8]> = SmallVec::with_capacity(inputs.len());
        for i in 0..first.len() {
            row.clear();
            row.extend(inputs.iter().map(|s| s.values[i]));
            values.push(f(&row));
        }
        Ok(PointSeries {
            name: first.name.clone(),
            times: first.times.clone(),
            values,
        })
    }

    fn renamed(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }
}

/// One named spatial coordinate axis of a `GridSeries`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coord {
    pub name: String,
    pub values: Vec<f64>,
}

impl Coord {
    pub fn new(name: &str, values: Vec<f64>) -> Self {
        Coord {
            name: name.to_string(),
            values,
        }
    }
}

/// Daily series over a spatial grid. Values are stored flat in row-major
/// order with the time axis trailing, so elementwise operations are plain
/// broadcasts over the leading dimensions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridSeries {
    name: String,
    coords: Vec<Coord>,
    times: Vec<NaiveDate>,
    values: Vec<f64>,
    attrs: Option<SeriesAttrs>,
}

impl GridSeries {
    pub fn new(
        name: &str,
        coords: Vec<Coord>,
        times: Vec<NaiveDate>,
        values: Vec<f64>,
    ) -> Result<Self> {
        let cells: usize = coords.iter().map(|c| c.values.len()).product();
        if cells * times.len() != values.len() {
            return Err(IndicatorError::shape(format!(
                "`{}`: {} values for {} cells x {} timestamps",
                name,
                values.len(),
                cells,
                times.len()
            )));
        }
        Ok(Self {
            name: name.to_string(),
            coords,
            times,
            values,
            attrs: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    pub fn times(&self) -> &[NaiveDate] {
        &self.times
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn attrs(&self) -> Option<&SeriesAttrs> {
        self.attrs.as_ref()
    }

    /// Leading (spatial) dimension sizes.
    pub fn shape(&self) -> SmallVec<[usize; 4]> {
        self.coords.iter().map(|c| c.values.len()).collect()
    }

    fn check_aligned(&self, other: &GridSeries) -> Result<()> {
        if self.shape() != other.shape() || self.times != other.times {
            return Err(IndicatorError::shape(format!(
                "`{}` and `{}` have different grid shapes or time axes",
                self.name, other.name
            )));
        }
        Ok(())
    }
}

impl SeriesOps for GridSeries {
    fn map<F: Fn(f64) -> f64>(&self, f: F) -> Self {
        GridSeries {
            name: self.name.clone(),
            coords: self.coords.clone(),
            times: self.times.clone(),
            values: self.values.iter().map(|&v| f(v)).collect(),
            attrs: None,
        }
    }

    fn zip_with<F: Fn(f64, f64) -> f64>(&self, other: &Self, f: F) -> Result<Self> {
        self.check_aligned(other)?;
        Ok(GridSeries {
            name: self.name.clone(),
            coords: self.coords.clone(),
            times: self.times.clone(),
            values: self
                .values
                .iter()
                .zip(&other.values)
                .map(|(&a, &b)| f(a, b))
                .collect(),
            attrs: None,
        })
    }

    fn zip_many<F: Fn(&[f64]) -> f64>(inputs: &[&Self], f: F) -> Result<Self> {
        let first = inputs
            .first()
            .ok_or_else(|| IndicatorError::invalid("zip_many: no input series"))?;
        for other in &inputs[1..] {
            first.check_aligned(other)?;
        }
        let mut values = Vec::with_capacity(first.values.len());
        let mut row: SmallVec<[f64; 8]> = SmallVec::with_capacity(inputs.len());
        for i in 0..first.values.len() {
            row.clear();
            row.extend(inputs.iter().map(|s| s.values[i]));
            values.push(f(&row));
        }
        Ok(GridSeries {
            name: first.name.clone(),
            coords: first.coords.clone(),
            times: first.times.clone(),
            values,
            attrs: None,
        })
    }

    fn renamed(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    fn with_attrs(mut self, attrs: SeriesAttrs) -> Self {
        self.attrs = Some(attrs);
        self
    }
}

/// Scalars support the full capability set, so every formula is also usable
/// value by value.
impl SeriesOps for f64 {
    fn map<F: Fn(f64) -> f64>(&self, f: F) -> Self {
        f(*self)
    }

    fn zip_with<F: Fn(f64, f64) -> f64>(&self, other: &Self, f: F) -> Result<Self> {
        Ok(f(*self, *other))
    }

    fn zip_many<F: Fn(&[f64]) -> f64>(inputs: &[&Self], f: F) -> Result<Self> {
        if inputs.is_empty() {
            return Err(IndicatorError::invalid("zip_many: no input values"));
        }
        let row: SmallVec<[f64; 8]> = inputs.iter().map(|&&v| v).collect();
        Ok(f(&row))
    }

    fn renamed(self, _name: &str) -> Self {
        self
    }
}

/// One ternary agro decision. The numeric scale is fixed across all
/// classifiers: 0 unfavorable/critical, 1 intermediate, 2 favorable/ideal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Decision {
    Critical,
    Intermediate,
    Ideal,
}

impl Decision {
    /// Resolve ideal/critical predicate flags, defaulting the remainder to
    /// intermediate. Ideal is checked first, matching the rule tables.
    pub fn classify(ideal: bool, critical: bool) -> Decision {
        if ideal {
            Decision::Ideal
        } else if critical {
            Decision::Critical
        } else {
            Decision::Intermediate
        }
    }

    pub fn value(self) -> u8 {
        match self {
            Decision::Critical => 0,
            Decision::Intermediate => 1,
            Decision::Ideal => 2,
        }
    }
}

/// Ternary decisions index-aligned with the forecast input they were
/// evaluated against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionSeries {
    times: Vec<NaiveDate>,
    values: Vec<Decision>,
}

impl DecisionSeries {
    /// Align `decisions` with the time axis of the primary forecast input.
    pub fn aligned_with(forecast: &PointSeries, values: Vec<Decision>) -> Result<Self> {
        if values.len() != forecast.len() {
            return Err(IndicatorError::shape(format!(
                "{} decisions for a {}-day forecast",
                values.len(),
                forecast.len()
            )));
        }
        Ok(Self {
            times: forecast.times().to_vec(),
            values,
        })
    }

    pub fn times(&self) -> &[NaiveDate] {
        &self.times
    }

    pub fn values(&self) -> &[Decision] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn value(&self, i: usize) -> Decision {
        self.values[i]
    }

    /// Numeric view (0/1/2) on the same time axis.
    pub fn to_point_series(&self, name: &str) -> PointSeries {
        PointSeries {
            name: name.to_string(),
            times: self.times.clone(),
            values: self.values.iter().map(|d| d.value() as f64).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn rejects_misaligned_lengths() {
        let err = PointSeries::new("tp", vec![day(1), day(2)], vec![1.0]).unwrap_err();
        assert!(matches!(err, IndicatorError::InvalidInput(_)));
    }

    #[test]
    fn rejects_unordered_time_axis() {
        let err = PointSeries::new("tp", vec![day(2), day(1)], vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, IndicatorError::InvalidInput(_)));
    }

    #[test]
    fn zip_requires_same_time_axis() {
        let a = PointSeries::from_daily("a", day(1), vec![1.0, 2.0]);
        let b = PointSeries::from_daily("b", day(2), vec![1.0, 2.0]);
        let err = a.zip_with(&b, |x, y| x + y).unwrap_err();
        assert!(matches!(err, IndicatorError::AssertionViolation(_)));
    }

    #[test]
    fn concat_rejects_overlap() {
        let histo = PointSeries::from_daily("tp", day(1), vec![0.0; 5]);
        let forecast = PointSeries::from_daily("tp", day(5), vec![0.0; 3]);
        assert!(histo.concat(&forecast).is_err());

        let forecast = PointSeries::from_daily("tp", day(6), vec![0.0; 3]);
        let merged = histo.concat(&forecast).unwrap();
        assert_eq!(merged.len(), 8);
    }

    #[test]
    fn window_sum_truncates_at_horizon() {
        let tp = PointSeries::from_daily("tp", day(1), vec![1.0, 2.0, 3.0]);
        assert_eq!(tp.window_sum(1, 5), 5.0);
        assert_eq!(tp.window_sum(3, 2), 0.0);
    }

    #[test]
    fn scalar_is_a_series() {
        let doubled = 2.5_f64.map(|v| v * 2.0);
        assert_eq!(doubled, 5.0);
        let sum = f64::zip_many(&[&1.0, &2.0, &3.0], |row| row.iter().sum()).unwrap();
        assert_eq!(sum, 6.0);
    }

    #[test]
    fn grid_checks_cell_count() {
        let coords = vec![Coord::new("lat", vec![0.0, 1.0])];
        let times = vec![day(1), day(2)];
        assert!(GridSeries::new("t", coords.clone(), times.clone(), vec![0.0; 4]).is_ok());
        assert!(GridSeries::new("t", coords, times, vec![0.0; 3]).is_err());
    }

    #[test]
    fn classify_prefers_ideal() {
        assert_eq!(Decision::classify(true, true), Decision::Ideal);
        assert_eq!(Decision::classify(false, true), Decision::Critical);
        assert_eq!(Decision::classify(false, false), Decision::Intermediate);
    }
}
