//! Thermodynamic weather formulas
//!
//! Vapour pressure, psychrometric and atmospheric pressure relations used to
//! assemble the FAO-56 Penman-Monteith inputs. All functions are pure and
//! elementwise over any `SeriesOps` container; equation numbers refer to
//! Allen et al (1998), "Crop evapotranspiration" (FAO irrigation and
//! drainage paper 56).
//!
//! Abbreviations follow the FAO paper: svp = saturation vapour pressure,
//! avp = actual vapour pressure, psy = psychrometric constant, rh = relative
//! humidity, tdew/twet/tdry = dew point / wet bulb / dry bulb temperature.

use crate::error::{IndicatorError, Result};
use crate::series::SeriesOps;

/// Empirical saturation vapour pressure approximation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SvpVersion {
    /// Alduchov & Eskridge (1996) improved Magnus form.
    #[default]
    AlduchovEskridge,
    /// Equations 11 and 12 in Allen et al (1998).
    Allen1998,
}

impl TryFrom<u8> for SvpVersion {
    type Error = IndicatorError;

    fn try_from(version: u8) -> Result<Self> {
        match version {
            1 => Ok(SvpVersion::AlduchovEskridge),
            2 => Ok(SvpVersion::Allen1998),
            _ => Err(IndicatorError::invalid("`version` must be 1 or 2")),
        }
    }
}

/// Psychrometer type, selecting the ventilation coefficient of equation 16.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Psychrometer {
    /// Ventilated (Asmann or aspirated) psychrometer, ~5 m/s air movement.
    Ventilated,
    /// Naturally ventilated psychrometer, ~1 m/s air movement.
    NaturallyVentilated,
    /// Non-ventilated psychrometer installed indoors.
    NonVentilated,
}

impl Psychrometer {
    fn coefficient(self) -> f64 {
        match self {
            Psychrometer::Ventilated => 0.000662,
            Psychrometer::NaturallyVentilated => 0.000800,
            Psychrometer::NonVentilated => 0.001200,
        }
    }
}

impl TryFrom<u8> for Psychrometer {
    type Error = IndicatorError;

    fn try_from(id: u8) -> Result<Self> {
        match id {
            1 => Ok(Psychrometer::Ventilated),
            2 => Ok(Psychrometer::NaturallyVentilated),
            3 => Ok(Psychrometer::NonVentilated),
            _ => Err(IndicatorError::invalid(format!(
                "psychrometer should be in range 1 to 3: {id}"
            ))),
        }
    }
}

fn svp_scalar(t: f64, version: SvpVersion) -> f64 {
    match version {
        SvpVersion::AlduchovEskridge => 0.61094 * ((17.625 * t) / (t + 243.04)).exp(),
        SvpVersion::Allen1998 => 0.6108 * ((17.27 * t) / (t + 237.3)).exp(),
    }
}

/// Estimate saturation vapour pressure (*es*) [kPa] from air temperature
/// [deg C].
pub fn svp_from_t<S: SeriesOps>(t: &S, version: SvpVersion) -> S {
    t.map(|t| svp_scalar(t, version))
}

/// Slope of the saturation vapour pressure curve [kPa degC-1] at air
/// temperature `t` [deg C] (equation 13). Use the mean air temperature when
/// feeding the Penman-Monteith equation.
pub fn delta_svp<S: SeriesOps>(t: &S) -> S {
    t.map(|t| 4098.0 * svp_scalar(t, SvpVersion::default()) / (t + 237.3).powi(2))
}

/// Relative humidity [%] from the ratio of actual to saturation vapour
/// pressure at the same temperature (Allen et al 1998, page 67).
pub fn rh_from_avp_and_svp<S: SeriesOps>(avp: &S, svp: &S) -> Result<S> {
    avp.zip_with(svp, |avp, svp| 100.0 * avp / svp)
}

/// Relative humidity [%] from dew point and air temperature [deg C].
pub fn rh_from_tdew_and_t<S: SeriesOps>(tdew: &S, t: &S) -> Result<S> {
    let avp = svp_from_t(tdew, SvpVersion::default());
    let svp = svp_from_t(t, SvpVersion::default());
    rh_from_avp_and_svp(&avp, &svp)
}

/// Psychrometric constant [kPa degC-1] for a given psychrometer type at
/// atmospheric pressure [kPa] (equation 16).
pub fn psy_constant_of_psychrometer<S: SeriesOps>(
    atm_pressure: &S,
    psychrometer: Psychrometer,
) -> S {
    let coeff = psychrometer.coefficient();
    atm_pressure.map(|p| coeff * p)
}

/// Psychrometric constant [kPa degC-1] (equation 8). Exactly one of
/// `atmos_pres` [kPa] or `altitude` [m] is required; pressure is derived
/// from altitude when only the latter is given.
pub fn psy_constant<S: SeriesOps>(atmos_pres: Option<&S>, altitude: Option<&S>) -> Result<S> {
    let pressure = match (atmos_pres, altitude) {
        (Some(p), _) => p.clone(),
        (None, Some(alt)) => atm_pressure(alt),
        (None, None) => {
            return Err(IndicatorError::invalid(
                "`atmos_pres` or `altitude` must be provided",
            ))
        }
    };
    Ok(pressure.map(|p| 0.000665 * p))
}

/// Atmospheric pressure [kPa] from altitude [m], by the barometric
/// simplification of the ideal gas law at 20 deg C (equation 7).
pub fn atm_pressure<S: SeriesOps>(altitude: &S) -> S {
    altitude.map(|alt| ((293.0 - 0.0065 * alt) / 293.0).powf(5.26) * 101.3)
}

/// Mean saturation vapour pressure (*es*) [kPa] as the mean of svp at the
/// daily minimum and maximum temperature (equations 11 and 12).
pub fn mean_svp<S: SeriesOps>(tmin: &S, tmax: &S) -> Result<S> {
    tmin.zip_with(tmax, |tmin, tmax| {
        (svp_scalar(tmin, SvpVersion::default()) + svp_scalar(tmax, SvpVersion::default())) / 2.0
    })
}

/// Optional inputs for the `avp` estimation dispatcher. Populate whatever
/// observations are available; the most reliable applicable method wins.
pub struct AvpInputs<'a, S> {
    /// Dew point temperature [deg C].
    pub tdew: Option<&'a S>,
    /// Wet bulb temperature [deg C].
    pub twet: Option<&'a S>,
    /// Dry bulb temperature [deg C].
    pub tdry: Option<&'a S>,
    /// Atmospheric pressure [kPa], for the psychrometer method.
    pub atm_pressure: Option<&'a S>,
    /// Psychrometer type, when the ventilation regime is known.
    pub psychrometer: Option<Psychrometer>,
    /// Daily minimum temperature [deg C].
    pub tmin: Option<&'a S>,
    /// Daily maximum temperature [deg C].
    pub tmax: Option<&'a S>,
    /// Minimum relative humidity [%].
    pub rh_min: Option<&'a S>,
    /// Maximum relative humidity [%].
    pub rh_max: Option<&'a S>,
    /// Mean relative humidity [%].
    pub rh_mean: Option<&'a S>,
}

impl<'a, S> Default for AvpInputs<'a, S> {
    fn default() -> Self {
        AvpInputs {
            tdew: None,
            twet: None,
            tdry: None,
            atm_pressure: None,
            psychrometer: None,
            tmin: None,
            tmax: None,
            rh_min: None,
            rh_max: None,
            rh_mean: None,
        }
    }
}

/// Estimate actual vapour pressure (*ea*) [kPa], dispatching on the
/// available inputs in decreasing order of reliability:
///
/// 1. dew point (`tdew`)
/// 2. wet/dry bulb + pressure (`twet`, `tdry`, `atm_pressure`)
/// 3. `tmin`, `tmax`, `rh_min`, `rh_max`
/// 4. `tmin`, `rh_max`
/// 5. `tmin`, `tmax`, `rh_mean`
/// 6. `tmin` alone (least reliable; in arid areas subtract 2 deg C from
///    `tmin` first, per Annex 6 of Allen et al 1998)
pub fn avp<S: SeriesOps>(inputs: &AvpInputs<'_, S>) -> Result<S> {
    if let Some(tdew) = inputs.tdew {
        return Ok(avp_from_tdew(tdew));
    }
    if let (Some(twet), Some(tdry), Some(pressure)) =
        (inputs.twet, inputs.tdry, inputs.atm_pressure)
    {
        return avp_from_twet_tdry(twet, tdry, pressure, inputs.psychrometer);
    }
    if let (Some(tmin), Some(tmax), Some(rh_min), Some(rh_max)) =
        (inputs.tmin, inputs.tmax, inputs.rh_min, inputs.rh_max)
    {
        return avp_from_rhmin_rhmax(tmin, tmax, rh_min, rh_max);
    }
    if let (Some(tmin), Some(rh_max)) = (inputs.tmin, inputs.rh_max) {
        return avp_from_rhmax(tmin, rh_max);
    }
    if let (Some(tmin), Some(tmax), Some(rh_mean)) = (inputs.tmin, inputs.tmax, inputs.rh_mean) {
        return avp_from_rhmean(tmin, tmax, rh_mean);
    }
    if let Some(tmin) = inputs.tmin {
        return Ok(avp_from_tmin(tmin));
    }
    Err(IndicatorError::invalid("at least `tmin` must be provided"))
}

/// *ea* [kPa] assuming the air is saturated at the daily minimum
/// temperature (equation 48).
pub fn avp_from_tmin<S: SeriesOps>(tmin: &S) -> S {
    svp_from_t(tmin, SvpVersion::default())
}

/// *ea* [kPa] as the saturation vapour pressure at the dew point
/// temperature (equation 14).
pub fn avp_from_tdew<S: SeriesOps>(tdew: &S) -> S {
    svp_from_t(tdew, SvpVersion::default())
}

/// *ea* [kPa] from svp at tmin/tmax weighted by extreme relative humidity
/// (equation 17).
pub fn avp_from_rhmin_rhmax<S: SeriesOps>(
    tmin: &S,
    tmax: &S,
    rh_min: &S,
    rh_max: &S,
) -> Result<S> {
    S::zip_many(&[tmin, tmax, rh_min, rh_max], |v| {
        let svp_tmin = svp_scalar(v[0], SvpVersion::default());
        let svp_tmax = svp_scalar(v[1], SvpVersion::default());
        (svp_tmin * v[3] / 100.0 + svp_tmax * v[2] / 100.0) / 2.0
    })
}

/// *ea* [kPa] from svp at tmin and the maximum relative humidity
/// (equation 18), for when rh measurement errors are large.
pub fn avp_from_rhmax<S: SeriesOps>(tmin: &S, rh_max: &S) -> Result<S> {
    tmin.zip_with(rh_max, |tmin, rh_max| {
        svp_scalar(tmin, SvpVersion::default()) * rh_max / 100.0
    })
}

/// *ea* [kPa] from svp at tmin/tmax and the mean relative humidity
/// (equation 19). Less reliable than the rh_min/rh_max methods.
pub fn avp_from_rhmean<S: SeriesOps>(tmin: &S, tmax: &S, rh_mean: &S) -> Result<S> {
    S::zip_many(&[tmin, tmax, rh_mean], |v| {
        let svp_tmin = svp_scalar(v[0], SvpVersion::default());
        let svp_tmax = svp_scalar(v[1], SvpVersion::default());
        (v[2] / 100.0) * ((svp_tmax + svp_tmin) / 2.0)
    })
}

/// *ea* [kPa] from wet and dry bulb temperature (equation 15). The
/// psychrometric constant follows the psychrometer type when given,
/// otherwise the plain pressure-based constant.
pub fn avp_from_twet_tdry<S: SeriesOps>(
    twet: &S,
    tdry: &S,
    atm_pressure: &S,
    psychrometer: Option<Psychrometer>,
) -> Result<S> {
    let psy = match psychrometer {
        Some(p) => psy_constant_of_psychrometer(atm_pressure, p),
        None => psy_constant(Some(atm_pressure), None)?,
    };
    let svp_twet = svp_from_t(twet, SvpVersion::default());
    S::zip_many(&[&svp_twet, &psy, tdry, twet], |v| v[0] - v[1] * (v[2] - v[3]))
}

/// Dew point [deg C] from relative humidity [%] and air temperature
/// [deg C], by inverting the Magnus formula with the Tetens (1930)
/// constants.
pub fn tdew_from_rh_and_t<S: SeriesOps>(rh: &S, t: &S) -> Result<S> {
    const A: f64 = 17.27;
    const B: f64 = 237.7;

    rh.zip_with(t, |rh, t| {
        let phi = (A * t) / (B + t) + (rh / 100.0).ln();
        (B * phi) / (A - phi)
    })
}

/// Monthly soil heat flux (Gmonth) [MJ m-2 day-1] from the mean air
/// temperature of the previous and current month (equation 44), or of the
/// previous and next month when `next_month` is set (equation 43).
pub fn monthly_soil_heat_flux<S: SeriesOps>(
    t_month_prev: &S,
    t_month: &S,
    next_month: bool,
) -> Result<S> {
    let factor = if next_month { 0.07 } else { 0.14 };
    t_month.zip_with(t_month_prev, move |t, t_prev| factor * (t - t_prev))
}

/// Convert energy [MJ m-2 day-1] to equivalent evaporation [mm day-1]
/// using 1/lambda = 0.408 (equation 20).
pub fn energy_to_evap<S: SeriesOps>(energy: &S) -> S {
    energy.map(|e| 0.408 * e)
}
