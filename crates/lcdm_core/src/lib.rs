//! Cosmological distances and lookback time in a flat ΛCDM universe.
//!
//! The entry point is [`compute`] (or [`DistanceEngine::compute`] with a
//! custom [`EngineConfig`]), which validates the inputs, integrates the
//! expansion history with adaptive Gauss–Kronrod quadrature and derives:
//! - comoving distance `D_C = (c/H0) ∫₀^z dz'/E(z')`
//! - luminosity distance `D_L = (1+z) D_C`
//! - angular-diameter distance `D_A = D_C / (1+z)`
//! - lookback time `t_L = (1/H0) ∫₀^z dz'/((1+z') E(z'))`
//!
//! Every outcome, including invalid input and integration failure, is
//! returned as a [`DistanceResult`] whose [`Status`] the caller branches on.
//!
//! ```rust
//! use lcdm_core::{Status, compute};
//!
//! let result = compute(0.5, 67.4, 0.315, 0.685);
//! assert_eq!(result.status, Status::Ok);
//! let d = result.distances.unwrap();
//! assert!(d.luminosity_mpc > d.comoving_mpc);
//! ```

pub mod engine;
pub mod error;
pub mod integrand;
pub mod landmarks;
pub mod params;
pub mod quadrature;
pub mod status;

pub use engine::{
    ACCURACY_WARNING_THRESHOLD, DistanceEngine, EngineConfig, HUBBLE_TIME_GYR_TIMES_H0, compute,
    hubble_distance_mpc, hubble_time_gyr,
};
pub use error::EngineError;
pub use integrand::{
    EPSILON, ZERO_REDSHIFT_TOLERANCE, inverse_expansion, inverse_expansion_times_one_plus_z,
};
pub use landmarks::{ComovingScale, LookbackEpoch};
pub use params::{CosmologicalParameters, DEFAULT_REDSHIFT, FLATNESS_TOLERANCE};
pub use quadrature::{Quadrature, QuadratureConfig, QuadratureError, integrate};
pub use status::{
    DistanceError, DistanceResult, DistanceWarning, Distances, IntegrationDiagnostics, Status,
};
