//! Common helpers for projection math (meridian arc, latitude conversions, etc.).
//!
//! Everything here works in radius units: lengths are fractions of the
//! ellipsoid's semi-major axis, so callers can rescale to metres once.

use std::f64::consts::FRAC_PI_2;

use crate::error::ProjError;

/// Pole-proximity / degeneracy tolerance shared by all projections.
pub const EPS10: f64 = 1e-10;

// Meridian arc series coefficients (eighth order in e²).
const C00: f64 = 1.0;
const C02: f64 = 0.25;
const C04: f64 = 0.046875;
const C06: f64 = 0.01953125;
const C08: f64 = 0.01068115234375;
const C22: f64 = 0.75;
const C44: f64 = 0.46875;
const C46: f64 = 0.01302083333333333333;
const C48: f64 = 0.00712076822916666666;
const C66: f64 = 0.36458333333333333333;
const C68: f64 = 0.00569661458333333333;
const C88: f64 = 0.3076171875;

const INV_MLFN_EPS: f64 = 1e-11;
const INV_MLFN_MAX_ITER: usize = 10;

/// Meridian arc length evaluator for one eccentricity.
///
/// Precomputes the series-coefficient table once; `distance` and `latitude`
/// are then pure closed-form/Newton evaluations. Projections that measure
/// along the meridian (Bonne, Cassini, Sinusoidal) build one of these at
/// setup time.
#[derive(Clone, Copy, Debug)]
pub struct MeridianArc {
    en: [f64; 5],
    es: f64,
}

impl MeridianArc {
    pub fn new(es: f64) -> Self {
        let t = es * es;
        let en = [
            C00 - es * (C02 + es * (C04 + es * (C06 + es * C08))),
            es * (C22 - es * (C04 + es * (C06 + es * C08))),
            t * (C44 - es * (C46 + es * C48)),
            t * es * (C66 - es * C68),
            t * t * C88,
        ];
        Self { en, es }
    }

    /// Arc length along the meridian from the equator to `phi`, in radius
    /// units. Callers already hold sin/cos of `phi`, so they are passed in
    /// rather than recomputed.
    pub fn distance(&self, phi: f64, sphi: f64, cphi: f64) -> f64 {
        let en = &self.en;
        let c = cphi * sphi;
        let s2 = sphi * sphi;
        en[0] * phi - c * (en[1] + s2 * (en[2] + s2 * (en[3] + s2 * en[4])))
    }

    /// Latitude whose meridian arc length is `dist` (Newton inversion).
    pub fn latitude(&self, dist: f64) -> Result<f64, ProjError> {
        let k = 1.0 / (1.0 - self.es);
        let mut phi = dist;
        for _ in 0..INV_MLFN_MAX_ITER {
            let s = phi.sin();
            let t = 1.0 - self.es * s * s;
            let step = (self.distance(phi, s, phi.cos()) - dist) * t * t.sqrt() * k;
            phi -= step;
            if step.abs() < INV_MLFN_EPS {
                return Ok(phi);
            }
        }
        Err(ProjError::NonConvergentMeridianDistance)
    }
}

/// Scale factor of a parallel: cos φ / √(1 - es·sin²φ).
pub fn msfn(phi: f64, es: f64) -> f64 {
    let sinphi = phi.sin();
    phi.cos() / (1.0 - es * sinphi * sinphi).sqrt()
}

/// The conformal half-colatitude function ts(φ); exp(-ψ) for isometric
/// latitude ψ. Strictly decreasing from +∞ at the south pole to 0 at the
/// north pole.
pub fn tsfn(phi: f64, e: f64) -> f64 {
    let con = e * phi.sin();
    (0.5 * (FRAC_PI_2 - phi)).tan() / ((1.0 - con) / (1.0 + con)).powf(0.5 * e)
}

const PHI_FROM_TS_TOL: f64 = 1.0e-10;
const PHI_FROM_TS_MAX_ITER: usize = 15;

/// Invert `tsfn`: latitude for a given ts value, by fixed-point iteration.
pub fn phi_from_ts(ts: f64, e: f64) -> Result<f64, ProjError> {
    let eccnth = 0.5 * e;
    let mut phi = FRAC_PI_2 - 2.0 * ts.atan();
    for _ in 0..PHI_FROM_TS_MAX_ITER {
        let con = e * phi.sin();
        let dphi = FRAC_PI_2 - 2.0 * (ts * ((1.0 - con) / (1.0 + con)).powf(eccnth)).atan() - phi;
        phi += dphi;
        if dphi.abs() <= PHI_FROM_TS_TOL {
            return Ok(phi);
        }
    }
    Err(ProjError::NonConvergentPhiFromTs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proj::ellipsoid::WGS84;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_meridian_distance_equator() {
        let arc = MeridianArc::new(WGS84.e2);
        assert_abs_diff_eq!(arc.distance(0.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_meridian_quadrant() {
        // Equator-to-pole distance on WGS84 is 10 001 965.729 m.
        let arc = MeridianArc::new(WGS84.e2);
        let quadrant = arc.distance(FRAC_PI_2, 1.0, 0.0) * WGS84.a;
        assert_relative_eq!(quadrant, 10_001_965.729, epsilon = 1e-2);
    }

    #[test]
    fn test_meridian_distance_latitude_roundtrip() {
        let arc = MeridianArc::new(WGS84.e2);
        for deg in [-85.0, -60.0, -30.0, 0.0, 15.0, 45.0, 70.0, 89.0] {
            let phi: f64 = (deg as f64).to_radians();
            let dist = arc.distance(phi, phi.sin(), phi.cos());
            let back = arc.latitude(dist).unwrap();
            assert_abs_diff_eq!(back, phi, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_latitude_rejects_nan() {
        let arc = MeridianArc::new(WGS84.e2);
        assert_eq!(arc.latitude(f64::NAN), Err(ProjError::NonConvergentMeridianDistance));
    }

    #[test]
    fn test_msfn_equator_is_unity() {
        assert_relative_eq!(msfn(0.0, WGS84.e2), 1.0);
        assert_abs_diff_eq!(msfn(FRAC_PI_2, WGS84.e2), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_tsfn_phi_from_ts_roundtrip() {
        let e = WGS84.eccentricity();
        for deg in [-80.0, -45.0, -10.0, 0.0, 10.0, 45.0, 80.0] {
            let phi: f64 = (deg as f64).to_radians();
            let ts = tsfn(phi, e);
            let back = phi_from_ts(ts, e).unwrap();
            assert_abs_diff_eq!(back, phi, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_tsfn_equator_is_unity() {
        assert_relative_eq!(tsfn(0.0, WGS84.eccentricity()), 1.0, epsilon = 1e-15);
    }
}
