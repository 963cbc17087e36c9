//! Bonne projection, pseudoconic and equal-area.
//!
//! Parallels are concentric circular arcs about the cone apex, true to scale
//! along each parallel and along the central meridian. With lat_1 = 90° this
//! degenerates into the Werner (cordiform) projection.
//!
//! Ellipsoidal:
//!   rh = am1 + m1 - M(φ),  E = cosφ·λ / (rh·√(1 - es·sin²φ))
//!   x = rh·sin(E),  y = am1 - rh·cos(E)
//! Spherical:
//!   rh = cotφ₁ + φ₁ - φ,  E = λ·cosφ / rh
//!   x = rh·sin(E),  y = cotφ₁ - rh·cos(E)

use std::f64::consts::FRAC_PI_2;

use crate::error::{ProjError, SetupError};
use crate::proj::common::{EPS10, MeridianArc};
use crate::proj::ellipsoid::Ellipsoid;
use crate::proj::params::ParamList;
use crate::proj::Projection;

/// Ellipsoidal Bonne kernel. `am1` is the apex distance of the standard
/// parallel, `m1` its meridian arc length.
pub struct BonneEllipsoidal {
    ellipsoid: Ellipsoid,
    arc: MeridianArc,
    m1: f64,
    am1: f64,
}

impl BonneEllipsoidal {
    pub fn new(params: &ParamList, ellipsoid: &Ellipsoid) -> Result<Self, SetupError> {
        let phi1 = params.get_or("lat_1", 0.0);
        if phi1.abs() < EPS10 {
            return Err(SetupError::DegenerateParallel);
        }
        let arc = MeridianArc::new(ellipsoid.e2);
        let s = phi1.sin();
        let c = phi1.cos();
        let m1 = arc.distance(phi1, s, c);
        let am1 = c / ((1.0 - ellipsoid.e2 * s * s).sqrt() * s);
        Ok(Self {
            ellipsoid: *ellipsoid,
            arc,
            m1,
            am1,
        })
    }
}

impl Projection for BonneEllipsoidal {
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        let s = lat.sin();
        let c = lat.cos();
        // rh cancels to exactly zero when a polar lat_1 meets its own pole
        // (am1 falls below half an ULP of m1); that point stays unguarded,
        // unlike the spherical kernel, and comes out NaN.
        let rh = self.am1 + self.m1 - self.arc.distance(lat, s, c);
        let e = c * lon / (rh * (1.0 - self.ellipsoid.e2 * s * s).sqrt());
        let x = rh * e.sin();
        let y = self.am1 - rh * e.cos();
        Ok((x, y))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let dy = self.am1 - y;
        let rh = x.hypot(dy);
        let lat = self.arc.latitude(self.am1 + self.m1 - rh)?;
        if lat.abs() < FRAC_PI_2 {
            let s = lat.sin();
            let lon = rh * x.atan2(dy) * (1.0 - self.ellipsoid.e2 * s * s).sqrt() / lat.cos();
            Ok((lon, lat))
        } else if (lat.abs() - FRAC_PI_2).abs() <= EPS10 {
            // Longitude is indeterminate at the poles.
            Ok((0.0, lat))
        } else {
            Err(ProjError::ToleranceExceeded)
        }
    }

    fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    fn name(&self) -> &'static str {
        "bonne"
    }
}

/// Spherical Bonne kernel. `cphi1` is cot(φ₁), or 0 when the standard
/// parallel sits on a pole (Werner).
pub struct BonneSpherical {
    ellipsoid: Ellipsoid,
    phi1: f64,
    cphi1: f64,
}

impl BonneSpherical {
    pub fn new(params: &ParamList, ellipsoid: &Ellipsoid) -> Result<Self, SetupError> {
        let phi1 = params.get_or("lat_1", 0.0);
        if phi1.abs() < EPS10 {
            return Err(SetupError::DegenerateParallel);
        }
        let cphi1 = if phi1.abs() + EPS10 >= FRAC_PI_2 {
            0.0
        } else {
            1.0 / phi1.tan()
        };
        Ok(Self {
            ellipsoid: *ellipsoid,
            phi1,
            cphi1,
        })
    }
}

impl Projection for BonneSpherical {
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        let rh = self.cphi1 + self.phi1 - lat;
        if rh.abs() > EPS10 {
            let e = lon * lat.cos() / rh;
            Ok((rh * e.sin(), self.cphi1 - rh * e.cos()))
        } else {
            // The parallel through this latitude collapses onto the apex.
            Ok((0.0, 0.0))
        }
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let dy = self.cphi1 - y;
        let rh = x.hypot(dy);
        let lat = self.cphi1 + self.phi1 - rh;
        if lat.abs() > FRAC_PI_2 {
            return Err(ProjError::ToleranceExceeded);
        }
        if (lat.abs() - FRAC_PI_2).abs() <= EPS10 {
            Ok((0.0, lat))
        } else {
            Ok((rh * x.atan2(dy) / lat.cos(), lat))
        }
    }

    fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    fn name(&self) -> &'static str {
        "bonne"
    }
}

/// Bonne with the ellipse/sphere branch resolved once at construction.
pub enum Bonne {
    Ellipsoidal(BonneEllipsoidal),
    Spherical(BonneSpherical),
}

impl Bonne {
    pub fn new(params: &ParamList, ellipsoid: &Ellipsoid) -> Result<Self, SetupError> {
        if ellipsoid.is_spherical() {
            Ok(Self::Spherical(BonneSpherical::new(params, ellipsoid)?))
        } else {
            Ok(Self::Ellipsoidal(BonneEllipsoidal::new(params, ellipsoid)?))
        }
    }
}

impl Projection for Bonne {
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
        "bonne"
    }
}
