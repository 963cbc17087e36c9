//! Lambert Conformal Conic projection (1SP and 2SP).
//!
//! Conformal conic with one or two standard parallels. A single kernel
//! covers the ellipsoidal and the spherical form behind an internal flag,
//! since they differ only in how ρ(φ) is evaluated:
//!
//!   ρ = c·ts(φ)ⁿ (ellipsoid)  or  c·tan(π/4 + φ/2)⁻ⁿ (sphere)
//!   x = k₀·ρ·sin(nλ),  y = k₀·(ρ₀ - ρ·cos(nλ))

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use crate::error::{ProjError, SetupError};
use crate::proj::common::{EPS10, msfn, phi_from_ts, tsfn};
use crate::proj::ellipsoid::Ellipsoid;
use crate::proj::params::ParamList;
use crate::proj::Projection;

pub struct LambertConformalConic {
    ellipsoid: Ellipsoid,
    n: f64,    // cone constant
    c: f64,    // cone aperture
    rho0: f64, // radius of the origin parallel
    k0: f64,
    ellipsoidal: bool,
}

impl LambertConformalConic {
    /// With `lat_2` absent the cone is tangent at `lat_1`, which then also
    /// serves as the latitude of origin unless `lat_0` overrides it.
    pub fn new(params: &ParamList, ellipsoid: &Ellipsoid) -> Result<Self, SetupError> {
        let phi1 = params.get_or("lat_1", 0.0);
        let (phi2, phi0) = match params.get("lat_2") {
            Some(phi2) => (phi2, params.get_or("lat_0", 0.0)),
            None => (phi1, params.get_or("lat_0", phi1)),
        };
        if (phi1 + phi2).abs() < EPS10 {
            return Err(SetupError::SymmetricParallels);
        }
        let secant = (phi1 - phi2).abs() >= EPS10;
        let ellipsoidal = !ellipsoid.is_spherical();
        let mut n = phi1.sin();
        // The apex itself has radius zero; the power form blows up there.
        let polar_origin = (phi0.abs() - FRAC_PI_2).abs() < EPS10;
        let (c, rho0) = if ellipsoidal {
            let e = ellipsoid.eccentricity();
            let m1 = msfn(phi1, ellipsoid.e2);
            let ml1 = tsfn(phi1, e);
            if secant {
                n = (m1 / msfn(phi2, ellipsoid.e2)).ln() / (ml1 / tsfn(phi2, e)).ln();
            }
            let c = m1 * ml1.powf(-n) / n;
            (c, if polar_origin { 0.0 } else { c * tsfn(phi0, e).powf(n) })
        } else {
            if secant {
                n = (phi1.cos() / phi2.cos()).ln()
                    / ((FRAC_PI_4 + 0.5 * phi2).tan() / (FRAC_PI_4 + 0.5 * phi1).tan()).ln();
            }
            let c = phi1.cos() * (FRAC_PI_4 + 0.5 * phi1).tan().powf(n) / n;
            (c, if polar_origin { 0.0 } else { c * (FRAC_PI_4 + 0.5 * phi0).tan().powf(-n) })
        };
        Ok(Self {
            ellipsoid: *ellipsoid,
            n,
            c,
            rho0,
            k0: params.get_or("k_0", 1.0),
            ellipsoidal,
        })
    }
}

impl Projection for LambertConformalConic {
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        let rho = if (lat.abs() - FRAC_PI_2).abs() < EPS10 {
            // Only the pole inside the cone has a finite image.
            if lat * self.n <= 0.0 {
                return Err(ProjError::ToleranceExceeded);
            }
            0.0
        } else if self.ellipsoidal {
            self.c * tsfn(lat, self.ellipsoid.eccentricity()).powf(self.n)
        } else {
            self.c * (FRAC_PI_4 + 0.5 * lat).tan().powf(-self.n)
        };
        let theta = self.n * lon;
        let x = self.k0 * (rho * theta.sin());
        let y = self.k0 * (self.rho0 - rho * theta.cos());
        Ok((x, y))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let mut x = x / self.k0;
        let mut dy = self.rho0 - y / self.k0;
        let mut rho = x.hypot(dy);
        if rho == 0.0 {
            return Ok((0.0, if self.n > 0.0 { FRAC_PI_2 } else { -FRAC_PI_2 }));
        }
        if self.n < 0.0 {
            rho = -rho;
            x = -x;
            dy = -dy;
        }
        let lat = if self.ellipsoidal {
            phi_from_ts((rho / self.c).powf(1.0 / self.n), self.ellipsoid.eccentricity())?
        } else {
            2.0 * (self.c / rho).powf(1.0 / self.n).atan() - FRAC_PI_2
        };
        Ok((x.atan2(dy) / self.n, lat))
    }

    fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    fn name(&self) -> &'static str {
        "lcc"
    }
}
