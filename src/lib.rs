//! Cartographic projection kernels with static and name-keyed dispatch.
//!
//! Geographic input is (lon, lat) in radians, relative to the projection's
//! central meridian; planar output is in units of the ellipsoid's semi-major
//! axis. Scaling to metres, false offsets, and longitude wrapping belong to
//! the caller.
//!
//! Projections are built once from a [`proj::params::ParamList`] and an
//! [`proj::ellipsoid::Ellipsoid`], either through the concrete types (the
//! ellipsoidal/spherical split resolved at construction) or through the
//! [`proj::factory::ProjectionFactory`] when the name is only known at
//! runtime.

pub mod error;
pub mod proj;

pub use error::{FactoryError, ProjError, SetupError};
pub use proj::Projection;
pub use proj::ellipsoid::Ellipsoid;
pub use proj::factory::ProjectionFactory;
pub use proj::params::ParamList;
