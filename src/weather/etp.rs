//! Reference evapotranspiration (ETo/ETP)
//!
//! FAO-56 Penman-Monteith combination equation for a hypothetical short
//! grass reference surface (equation 6 in Allen et al 1998). This is the
//! method the FAO recommends for ETo with limited meteorological data;
//! simpler alternatives (Hargreaves-Samani, Blaney-Criddle) are markedly
//! less precise and deliberately not provided.

use crate::error::Result;
use crate::series::SeriesOps;

/// Estimate daily reference evapotranspiration [mm day-1].
///
/// Inputs, all elementwise over the same index:
/// - `net_rad`: net radiation at the crop surface [MJ m-2 day-1]
/// - `t`: mean daily air temperature at 2 m [deg C]
/// - `ws`: wind speed at 2 m [m s-1] (see `wind::wind_speed_2m`)
/// - `svp` / `avp`: saturation / actual vapour pressure [kPa]
/// - `delta_svp`: slope of the svp curve [kPa degC-1]
/// - `psy`: psychrometric constant [kPa degC-1]
/// - `shf`: soil heat flux (G) [MJ m-2 day-1]; `None` means 0, which is
///   reasonable for daily and 10-day steps (use
///   `thermodynamics::monthly_soil_heat_flux` for monthly steps)
#[allow(clippy::too_many_arguments)]
pub fn fao56_penman_monteith<S: SeriesOps>(
    net_rad: &S,
    t: &S,
    ws: &S,
    svp: &S,
    avp: &S,
    delta_svp: &S,
    psy: &S,
    shf: Option<f64>,
) -> Result<S> {
    let shf = shf.unwrap_or(0.0);
    S::zip_many(&[net_rad, t, ws, svp, avp, delta_svp, psy], |v| {
        let (net_rad, t, ws, svp, avp, delta_svp, psy) =
            (v[0], v[1], v[2], v[3], v[4], v[5], v[6]);
        let numerator =
            0.408 * (net_rad - shf) * delta_svp + psy * 891.3 * ws * (svp - avp) / (t + 273.0);
        let denominator = delta_svp + psy * (1.0 + 0.3365 * ws);
        numerator / denominator
    })
}
