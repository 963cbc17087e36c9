/// Reference ellipsoid parameters.
///
/// Projection kernels work in units of the semi-major axis and only consume
/// the shape parameters (`e2` and friends); `a` is carried so callers can
/// rescale planar output to metres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis (metres)
    pub a: f64,
    /// Flattening (dimensionless)
    pub f: f64,
    /// Semi-minor axis: a * (1 - f)
    pub b: f64,
    /// First eccentricity squared: 2f - f^2
    pub e2: f64,
    /// Second eccentricity squared: e^2 / (1 - e^2)
    pub ep2: f64,
    /// Third flattening: f / (2 - f)
    pub n: f64,
}

impl Ellipsoid {
    pub const fn new(a: f64, f: f64) -> Self {
        let b = a * (1.0 - f);
        let e2 = 2.0 * f - f * f;
        let ep2 = e2 / (1.0 - e2);
        let n = f / (2.0 - f);
        Self { a, f, b, e2, ep2, n }
    }

    /// First eccentricity (not expressible in a const context, so computed
    /// on demand from `e2`).
    pub fn eccentricity(&self) -> f64 {
        self.e2.sqrt()
    }

    /// A zero eccentricity selects every projection's spherical kernel.
    pub fn is_spherical(&self) -> bool {
        self.e2 == 0.0
    }
}

pub const WGS84: Ellipsoid = Ellipsoid::new(6_378_137.0, 1.0 / 298.257_223_563);
pub const GRS80: Ellipsoid = Ellipsoid::new(6_378_137.0, 1.0 / 298.257_222_101);
/// The classic authalic-radius sphere used when no ellipsoid is given.
pub const SPHERE: Ellipsoid = Ellipsoid::new(6_370_997.0, 0.0);
