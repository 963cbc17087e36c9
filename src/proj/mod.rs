pub mod bonne;
pub mod cassini;
pub mod common;
pub mod ellipsoid;
pub mod equirectangular;
pub mod factory;
pub mod lambert_conformal;
pub mod mercator;
pub mod params;
pub mod sinusoidal;

use crate::error::ProjError;

/// Trait for map projections supporting forward and inverse transforms.
///
/// Coordinates are in radians on the geographic side and radius units on the
/// planar side; the central meridian offset and any false easting/northing
/// are applied by the caller.
pub trait Projection: Send + Sync {
    /// Forward: (lon_rad, lat_rad) -> (x, y)
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError>;

    /// Inverse: (x, y) -> (lon_rad, lat_rad)
    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError>;

    fn ellipsoid(&self) -> &ellipsoid::Ellipsoid;

    /// Short registry identifier ("bonne", "merc", ...).
    fn name(&self) -> &'static str;
}
