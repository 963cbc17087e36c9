//! Sinusoidal (Sanson-Flamsteed) projection.
//!
//! Pseudocylindrical and equal-area; parallels are straight lines true to
//! scale, the central meridian is true to scale.
//!
//! Ellipsoidal: x = λ·cosφ/√(1 - es·sin²φ),  y = M(φ)
//! Spherical:   x = λ·cosφ,  y = φ

use std::f64::consts::FRAC_PI_2;

use crate::error::{ProjError, SetupError};
use crate::proj::common::{EPS10, MeridianArc};
use crate::proj::ellipsoid::Ellipsoid;
use crate::proj::params::ParamList;
use crate::proj::Projection;

pub struct SinusoidalEllipsoidal {
    ellipsoid: Ellipsoid,
    arc: MeridianArc,
}

impl SinusoidalEllipsoidal {
    pub fn new(_params: &ParamList, ellipsoid: &Ellipsoid) -> Result<Self, SetupError> {
        Ok(Self {
            ellipsoid: *ellipsoid,
            arc: MeridianArc::new(ellipsoid.e2),
        })
    }
}

impl Projection for SinusoidalEllipsoidal {
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        let s = lat.sin();
        let c = lat.cos();
        let x = lon * c / (1.0 - self.ellipsoid.e2 * s * s).sqrt();
        let y = self.arc.distance(lat, s, c);
        Ok((x, y))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let lat = self.arc.latitude(y)?;
        if lat.abs() < FRAC_PI_2 {
            let s = lat.sin();
            let lon = x * (1.0 - self.ellipsoid.e2 * s * s).sqrt() / lat.cos();
            Ok((lon, lat))
        } else if (lat.abs() - FRAC_PI_2).abs() <= EPS10 {
            Ok((0.0, lat))
        } else {
            Err(ProjError::ToleranceExceeded)
        }
    }

    fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    fn name(&self) -> &'static str {
        "sinu"
    }
}

pub struct SinusoidalSpherical {
    ellipsoid: Ellipsoid,
}

impl SinusoidalSpherical {
    pub fn new(_params: &ParamList, ellipsoid: &Ellipsoid) -> Result<Self, SetupError> {
        Ok(Self {
            ellipsoid: *ellipsoid,
        })
    }
}

impl Projection for SinusoidalSpherical {
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        Ok((lon * lat.cos(), lat))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let lat = y;
        if lat.abs() > FRAC_PI_2 {
            return Err(ProjError::ToleranceExceeded);
        }
        if (lat.abs() - FRAC_PI_2).abs() <= EPS10 {
            Ok((0.0, lat))
        } else {
            Ok((x / lat.cos(), lat))
        }
    }

    fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    fn name(&self) -> &'static str {
        "sinu"
    }
}

/// Sinusoidal with the ellipse/sphere branch resolved at construction.
pub enum Sinusoidal {
    Ellipsoidal(SinusoidalEllipsoidal),
    Spherical(SinusoidalSpherical),
}

impl Sinusoidal {
    pub fn new(params: &ParamList, ellipsoid: &Ellipsoid) -> Result<Self, SetupError> {
        if ellipsoid.is_spherical() {
            Ok(Self::Spherical(SinusoidalSpherical::new(params, ellipsoid)?))
        } else {
            Ok(Self::Ellipsoidal(SinusoidalEllipsoidal::new(params, ellipsoid)?))
        }
    }
}

impl Projection for Sinusoidal {
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        match self {
            Self::Ellipsoidal(p) => p.forward(lon, lat),
            Self::Spherical(p) => p.forward(lon, lat),
        }
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        match self {
            Self::Ellipsoidal(p) => p.inverse(x, y),
            Self::Spherical(p) => p.inverse(x, y),
        }
    }

    fn ellipsoid(&self) -> &Ellipsoid {
        match self {
            Self::Ellipsoidal(p) => p.ellipsoid(),
            Self::Spherical(p) => p.ellipsoid(),
        }
    }

    fn name(&self) -> &'static str {
        "sinu"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proj::ellipsoid::{SPHERE, WGS84};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_ellipsoidal_roundtrip() {
        let proj = SinusoidalEllipsoidal::new(&ParamList::new(), &WGS84).unwrap();
        let cases: &[(f64, f64)] = &[
            (0.0, 0.0),
            (10.0, 45.0),
            (-73.9857, 40.7484), // NYC
            (139.6917, 35.6895), // Tokyo
            (18.42, -33.92),     // Cape Town
        ];
        for &(lon_deg, lat_deg) in cases {
            let lon = lon_deg.to_radians();
            let lat = lat_deg.to_radians();
            let (x, y) = proj.forward(lon, lat).unwrap();
            let (lon2, lat2) = proj.inverse(x, y).unwrap();
            assert_relative_eq!(lon2, lon, epsilon = 1e-9);
            assert_relative_eq!(lat2, lat, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_spherical_roundtrip() {
        let proj = SinusoidalSpherical::new(&ParamList::new(), &SPHERE).unwrap();
        for &(lon_deg, lat_deg) in &[(0.0, 0.0), (10.0, 45.0), (-120.0, -60.0)] {
            let lon = (lon_deg as f64).to_radians();
            let lat = (lat_deg as f64).to_radians();
            let (x, y) = proj.forward(lon, lat).unwrap();
            let (lon2, lat2) = proj.inverse(x, y).unwrap();
            assert_relative_eq!(lon2, lon, epsilon = 1e-12);
            assert_relative_eq!(lat2, lat, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_equator_is_identity() {
        // At φ = 0 both variants reduce to x = λ, y = 0.
        let proj = SinusoidalEllipsoidal::new(&ParamList::new(), &WGS84).unwrap();
        let lon = 15.0_f64.to_radians();
        assert_eq!(proj.forward(lon, 0.0).unwrap(), (lon, 0.0));
    }

    #[test]
    fn test_ellipsoidal_inverse_at_pole_zeroes_longitude() {
        let proj = SinusoidalEllipsoidal::new(&ParamList::new(), &WGS84).unwrap();
        let arc = MeridianArc::new(WGS84.e2);
        let phi = FRAC_PI_2 + 5e-11;
        let y = arc.distance(phi, phi.sin(), phi.cos());
        let (lon, lat) = proj.inverse(0.25, y).unwrap();
        assert_eq!(lon, 0.0);
        assert_abs_diff_eq!(lat, FRAC_PI_2, epsilon = 1e-10);
    }

    #[test]
    fn test_spherical_inverse_at_pole_zeroes_longitude() {
        let proj = SinusoidalSpherical::new(&ParamList::new(), &SPHERE).unwrap();
        assert_eq!(proj.inverse(0.5, FRAC_PI_2).unwrap(), (0.0, FRAC_PI_2));
    }

    #[test]
    fn test_inverse_out_of_range() {
        let e = SinusoidalEllipsoidal::new(&ParamList::new(), &WGS84).unwrap();
        assert_eq!(e.inverse(0.0, 2.0), Err(ProjError::ToleranceExceeded));
        let s = SinusoidalSpherical::new(&ParamList::new(), &SPHERE).unwrap();
        assert_eq!(s.inverse(0.0, 2.0), Err(ProjError::ToleranceExceeded));
    }

    #[test]
    fn test_selector_picks_variant_by_eccentricity() {
        assert!(matches!(
            Sinusoidal::new(&ParamList::new(), &WGS84).unwrap(),
            Sinusoidal::Ellipsoidal(_)
        ));
        assert!(matches!(
            Sinusoidal::new(&ParamList::new(), &SPHERE).unwrap(),
            Sinusoidal::Spherical(_)
        ));
    }
}
