use thiserror::Error;

/// Construction-time failures: the supplied parameters cannot yield a
/// usable projection instance.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("lat_1 is zero")]
    DegenerateParallel,

    #[error("lat_ts larger than 90 degrees")]
    LatTsOutOfRange,

    #[error("conic lat_1 = -lat_2")]
    SymmetricParallels,
}

/// Per-point transform failures. These reject the offending point only;
/// the projection instance stays usable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjError {
    #[error("coordinate outside the projection's invertible range")]
    ToleranceExceeded,

    #[error("non-convergent inverse meridian distance")]
    NonConvergentMeridianDistance,

    #[error("phi_from_ts failed to converge")]
    NonConvergentPhiFromTs,
}

/// Name-keyed lookup failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactoryError {
    #[error("unknown projection: {0}")]
    UnknownProjection(String),

    #[error("projection setup failed: {0}")]
    Setup(#[from] SetupError),
}
