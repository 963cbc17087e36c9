//! Mercator projection.
//!
//! Conformal cylindrical. The scale factor comes from `k_0`, or from a
//! standard parallel `lat_ts` when one is given (`lat_ts` wins if both are
//! present).
//!
//! Ellipsoidal: x = k₀·λ,  y = -k₀·ln(tsfn(φ, e))
//! Spherical:   x = k₀·λ,  y = k₀·ln(tan(π/4 + φ/2))

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use crate::error::{ProjError, SetupError};
use crate::proj::common::{EPS10, msfn, phi_from_ts, tsfn};
use crate::proj::ellipsoid::Ellipsoid;
use crate::proj::params::ParamList;
use crate::proj::Projection;

// Scale from lat_ts/k_0; the closure maps the standard parallel to k0.
fn scale_factor(
    params: &ParamList,
    from_parallel: impl Fn(f64) -> f64,
) -> Result<f64, SetupError> {
    match params.get("lat_ts") {
        Some(lat_ts) => {
            let phits = lat_ts.abs();
            if phits >= FRAC_PI_2 {
                return Err(SetupError::LatTsOutOfRange);
            }
            Ok(from_parallel(phits))
        }
        None => Ok(params.get_or("k_0", 1.0)),
    }
}

pub struct MercatorEllipsoidal {
    ellipsoid: Ellipsoid,
    k0: f64,
}

impl MercatorEllipsoidal {
    pub fn new(params: &ParamList, ellipsoid: &Ellipsoid) -> Result<Self, SetupError> {
        let k0 = scale_factor(params, |phits| msfn(phits, ellipsoid.e2))?;
        Ok(Self {
            ellipsoid: *ellipsoid,
            k0,
        })
    }
}

impl Projection for MercatorEllipsoidal {
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        if (lat.abs() - FRAC_PI_2).abs() <= EPS10 {
            return Err(ProjError::ToleranceExceeded);
        }
        let e = self.ellipsoid.eccentricity();
        Ok((self.k0 * lon, -self.k0 * tsfn(lat, e).ln()))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let e = self.ellipsoid.eccentricity();
        let lat = phi_from_ts((-y / self.k0).exp(), e)?;
        Ok((x / self.k0, lat))
    }

    fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    fn name(&self) -> &'static str {
        "merc"
    }
}

pub struct MercatorSpherical {
    ellipsoid: Ellipsoid,
    k0: f64,
}

impl MercatorSpherical {
    pub fn new(params: &ParamList, ellipsoid: &Ellipsoid) -> Result<Self, SetupError> {
        let k0 = scale_factor(params, f64::cos)?;
        Ok(Self {
            ellipsoid: *ellipsoid,
            k0,
        })
    }
}

impl Projection for MercatorSpherical {
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        if (lat.abs() - FRAC_PI_2).abs() <= EPS10 {
            return Err(ProjError::ToleranceExceeded);
        }
        Ok((self.k0 * lon, self.k0 * (FRAC_PI_4 + 0.5 * lat).tan().ln()))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let lat = FRAC_PI_2 - 2.0 * (-y / self.k0).exp().atan();
        Ok((x / self.k0, lat))
    }

    fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    fn name(&self) -> &'static str {
        "merc"
    }
}

/// Mercator with the ellipse/sphere branch resolved at construction.
pub enum Mercator {
    Ellipsoidal(MercatorEllipsoidal),
    Spherical(MercatorSpherical),
}

impl Mercator {
    pub fn new(params: &ParamList, ellipsoid: &Ellipsoid) -> Result<Self, SetupError> {
        if ellipsoid.is_spherical() {
            Ok(Self::Spherical(MercatorSpherical::new(params, ellipsoid)?))
        } else {
            Ok(Self::Ellipsoidal(MercatorEllipsoidal::new(params, ellipsoid)?))
        }
    }
}

impl Projection for Mercator {
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
        "merc"
    }
}
