//! Cassini-Soldner projection.
//!
//! Transverse equidistant: scale is true along the central meridian and along
//! great circles perpendicular to it. The ellipsoidal form uses Snyder's
//! series (Working Manual, eqs. 13-7 to 13-12), reliable within a few degrees
//! of the central meridian.
//!
//! Spherical:
//!   x = asin(cosφ·sinλ),  y = atan2(tanφ, cosλ) - φ₀

use crate::error::{ProjError, SetupError};
use crate::proj::common::MeridianArc;
use crate::proj::ellipsoid::Ellipsoid;
use crate::proj::params::ParamList;
use crate::proj::Projection;

// Series coefficients shared by forward and inverse.
const C1: f64 = 1.0 / 6.0;
const C2: f64 = 1.0 / 120.0;
const C3: f64 = 1.0 / 24.0;
const C4: f64 = 1.0 / 3.0;
const C5: f64 = 1.0 / 15.0;

pub struct CassiniEllipsoidal {
    ellipsoid: Ellipsoid,
    arc: MeridianArc,
    m0: f64,
}

impl CassiniEllipsoidal {
    pub fn new(params: &ParamList, ellipsoid: &Ellipsoid) -> Result<Self, SetupError> {
        let phi0 = params.get_or("lat_0", 0.0);
        let arc = MeridianArc::new(ellipsoid.e2);
        let m0 = arc.distance(phi0, phi0.sin(), phi0.cos());
        Ok(Self {
            ellipsoid: *ellipsoid,
            arc,
            m0,
        })
    }
}

impl Projection for CassiniEllipsoidal {
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        let es = self.ellipsoid.e2;
        let s = lat.sin();
        let c = lat.cos();
        let nu = 1.0 / (1.0 - es * s * s).sqrt();
        let tn = lat.tan();
        let t = tn * tn;
        let a1 = lon * c;
        let cc = es * c * c / (1.0 - es);
        let a2 = a1 * a1;
        let x = nu * a1 * (1.0 - a2 * t * (C1 + (8.0 - t + 8.0 * cc) * a2 * C2));
        let y = self.arc.distance(lat, s, c) - self.m0
            + nu * tn * a2 * (0.5 + (5.0 - t + 6.0 * cc) * a2 * C3);
        Ok((x, y))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let es = self.ellipsoid.e2;
        let ph1 = self.arc.latitude(self.m0 + y)?;
        let tn = ph1.tan();
        let t = tn * tn;
        let s = ph1.sin();
        let w = 1.0 - es * s * s;
        // nu/r collapses to w/(1 - es).
        let dd = x * w.sqrt();
        let d2 = dd * dd;
        let lat = ph1 - (w / (1.0 - es)) * tn * d2 * (0.5 - (1.0 + 3.0 * t) * d2 * C3);
        let lon = dd * (1.0 - t * d2 * (C4 - (1.0 + 3.0 * t) * d2 * C5)) / ph1.cos();
        Ok((lon, lat))
    }

    fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    fn name(&self) -> &'static str {
        "cass"
    }
}

pub struct CassiniSpherical {
    ellipsoid: Ellipsoid,
    phi0: f64,
}

impl CassiniSpherical {
    pub fn new(params: &ParamList, ellipsoid: &Ellipsoid) -> Result<Self, SetupError> {
        Ok(Self {
            ellipsoid: *ellipsoid,
            phi0: params.get_or("lat_0", 0.0),
        })
    }
}

impl Projection for CassiniSpherical {
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        let x = (lat.cos() * lon.sin()).asin();
        let y = lat.tan().atan2(lon.cos()) - self.phi0;
        Ok((x, y))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let dd = y + self.phi0;
        let lat = (dd.sin() * x.cos()).asin();
        let lon = x.tan().atan2(dd.cos());
        Ok((lon, lat))
    }

    fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    fn name(&self) -> &'static str {
        "cass"
    }
}

/// Cassini-Soldner with the ellipse/sphere branch resolved at construction.
pub enum Cassini {
    Ellipsoidal(CassiniEllipsoidal),
    Spherical(CassiniSpherical),
}

impl Cassini {
    pub fn new(params: &ParamList, ellipsoid: &Ellipsoid) -> Result<Self, SetupError> {
        if ellipsoid.is_spherical() {
            Ok(Self::Spherical(CassiniSpherical::new(params, ellipsoid)?))
        } else {
            Ok(Self::Ellipsoidal(CassiniEllipsoidal::new(params, ellipsoid)?))
        }
    }
}

impl Projection for Cassini {
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
        "cass"
    }
}
