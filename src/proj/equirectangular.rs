//! Equidistant Cylindrical (Plate Carrée) projection.
//!
//! forward: x = cos(φₜₛ)·λ, y = φ - φ₀
//! inverse: λ = x/cos(φₜₛ), φ = y + φ₀
//!
//! The spherical formula is applied regardless of the ellipsoid's
//! eccentricity, so there is no ellipsoidal variant.

use crate::error::{ProjError, SetupError};
use crate::proj::ellipsoid::Ellipsoid;
use crate::proj::params::ParamList;
use crate::proj::Projection;

pub struct Equirectangular {
    ellipsoid: Ellipsoid,
    rc: f64,
    phi0: f64,
}

impl Equirectangular {
    pub fn new(params: &ParamList, ellipsoid: &Ellipsoid) -> Result<Self, SetupError> {
        let rc = params.get_or("lat_ts", 0.0).cos();
        if rc <= 0.0 {
            return Err(SetupError::LatTsOutOfRange);
        }
        Ok(Self {
            ellipsoid: *ellipsoid,
            rc,
            phi0: params.get_or("lat_0", 0.0),
        })
    }
}

impl Projection for Equirectangular {
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        Ok((self.rc * lon, lat - self.phi0))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        Ok((x / self.rc, y + self.phi0))
    }

    fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    fn name(&self) -> &'static str {
        "eqc"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proj::ellipsoid::{SPHERE, WGS84};
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_roundtrip() {
        let params = ParamList::from([
            ("lat_ts", 30.0_f64.to_radians()),
            ("lat_0", 10.0_f64.to_radians()),
        ]);
        let proj = Equirectangular::new(&params, &SPHERE).unwrap();
        let lon = 10.0_f64.to_radians();
        let lat = 45.0_f64.to_radians();
        let (x, y) = proj.forward(lon, lat).unwrap();
        let (lon2, lat2) = proj.inverse(x, y).unwrap();
        assert_relative_eq!(lon2, lon, epsilon = 1e-15);
        assert_relative_eq!(lat2, lat, epsilon = 1e-15);
    }

    #[test]
    fn test_plate_carree_is_identity() {
        // Defaults give rc = 1, so the map is the identity on radians.
        let proj = Equirectangular::new(&ParamList::new(), &WGS84).unwrap();
        let lon = 15.0_f64.to_radians();
        let lat = 52.0_f64.to_radians();
        assert_eq!(proj.forward(lon, lat).unwrap(), (lon, lat));
    }

    #[test]
    fn test_standard_parallel_scales_x() {
        let lat_ts = 30.0_f64.to_radians();
        let params = ParamList::from([("lat_ts", lat_ts)]);
        let proj = Equirectangular::new(&params, &SPHERE).unwrap();
        let lon = 1.0_f64.to_radians();
        let (x, _) = proj.forward(lon, 0.0).unwrap();
        assert_relative_eq!(x, lon * lat_ts.cos(), epsilon = 1e-15);
    }

    #[test]
    fn test_lat_ts_beyond_pole_rejected() {
        let params = ParamList::from([("lat_ts", 120.0_f64.to_radians())]);
        assert_eq!(Equirectangular::new(&params, &SPHERE).err(), Some(SetupError::LatTsOutOfRange));
    }

    #[test]
    fn test_dateline_symmetry() {
        let proj = Equirectangular::new(&ParamList::new(), &SPHERE).unwrap();
        let (xe, _) = proj.forward(PI, 0.0).unwrap();
        let (xw, _) = proj.forward(-PI, 0.0).unwrap();
        assert_relative_eq!(xe, -xw, epsilon = 1e-15);
    }
}
