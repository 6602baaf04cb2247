//! Distance engine: validation, integration and derived quantities.

use lcdm_units::C_KM_PER_S;
use tracing::{debug, warn};

use crate::error::EngineError;
use crate::integrand::{
    ZERO_REDSHIFT_TOLERANCE, inverse_expansion, inverse_expansion_times_one_plus_z,
};
use crate::params::CosmologicalParameters;
use crate::quadrature::{QuadratureConfig, QuadratureError, integrate};
use crate::status::{
    DistanceError, DistanceResult, DistanceWarning, Distances, IntegrationDiagnostics,
};

/// `1/H0` in gigayears for `H0` in km/s/Mpc (Mpc/km divided by s/Gyr).
pub const HUBBLE_TIME_GYR_TIMES_H0: f64 = 977.8;

/// Quadrature error above which a result carries an accuracy warning.
pub const ACCURACY_WARNING_THRESHOLD: f64 = 1e-5;

/// Hubble distance `c / H0` in megaparsecs.
pub fn hubble_distance_mpc(h0: f64) -> f64 {
    C_KM_PER_S / h0
}

/// Hubble time `1 / H0` in gigayears.
pub fn hubble_time_gyr(h0: f64) -> f64 {
    HUBBLE_TIME_GYR_TIMES_H0 / h0
}

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub quadrature: QuadratureConfig,
    /// Error estimate above which [`DistanceWarning::IntegrationAccuracy`]
    /// is attached (default 1e-5).
    pub accuracy_warning_threshold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            quadrature: QuadratureConfig::default(),
            accuracy_warning_threshold: ACCURACY_WARNING_THRESHOLD,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        self.quadrature
            .validate()
            .map_err(EngineError::InvalidConfig)?;
        if !self.accuracy_warning_threshold.is_finite() || self.accuracy_warning_threshold < 0.0 {
            return Err(EngineError::InvalidConfig(
                "accuracy_warning_threshold must be finite and non-negative",
            ));
        }
        Ok(())
    }
}

/// Flat ΛCDM distance calculator.
///
/// Holds only its configuration: every call to [`compute`](Self::compute)
/// is independent, so one engine can be shared freely across threads.
/// Memoization, if wanted, belongs to the caller, keyed on the four inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceEngine {
    config: EngineConfig,
}

impl DistanceEngine {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute comoving, luminosity and angular-diameter distances (Mpc) and
    /// lookback time (Gyr) at `redshift`.
    ///
    /// Checks run in order and the first failure wins:
    /// 1. any non-finite input: [`DistanceError::InvalidInput`]
    /// 2. `redshift < 0`: zeroed distances with [`DistanceWarning::Blueshift`]
    /// 3. `redshift ≈ 0`: zeroed distances, `Ok`
    /// 4. `h0 <= 0`: [`DistanceError::NonPositiveHubbleConstant`]
    /// 5. negative density: [`DistanceError::NegativeOmega`]
    ///
    /// Never panics; every failure is reported through the result's status.
    pub fn compute(
        &self,
        redshift: f64,
        h0: f64,
        omega_m: f64,
        omega_lambda: f64,
    ) -> DistanceResult {
        if ![redshift, h0, omega_m, omega_lambda]
            .iter()
            .all(|v| v.is_finite())
        {
            return DistanceResult::error(DistanceError::InvalidInput);
        }
        if redshift < 0.0 {
            return DistanceResult::warning(Distances::ZERO, DistanceWarning::Blueshift);
        }
        if redshift.abs() <= ZERO_REDSHIFT_TOLERANCE {
            return DistanceResult::ok(Distances::ZERO);
        }
        if h0 <= 0.0 {
            return DistanceResult::error(DistanceError::NonPositiveHubbleConstant);
        }
        if omega_m < 0.0 || omega_lambda < 0.0 {
            return DistanceResult::error(DistanceError::NegativeOmega);
        }

        match self.integrate(redshift, h0, omega_m, omega_lambda) {
            Ok(result) => result,
            Err(e) => {
                warn!(redshift, h0, omega_m, omega_lambda, error = %e, "distance calculation failed");
                DistanceResult::error(DistanceError::CalculationFailed(e.to_string()))
            }
        }
    }

    /// [`compute`](Self::compute) with a parameter set.
    pub fn compute_params(&self, redshift: f64, params: &CosmologicalParameters) -> DistanceResult {
        self.compute(redshift, params.h0, params.omega_m, params.omega_lambda)
    }

    fn integrate(
        &self,
        redshift: f64,
        h0: f64,
        omega_m: f64,
        omega_lambda: f64,
    ) -> Result<DistanceResult, CalculationError> {
        let quad = &self.config.quadrature;

        // Integrate in x = ln(1+u), du = e^x dx, so the tail at large
        // redshift spans at most ~710 units instead of [0, z].
        let upper = redshift.ln_1p();
        let comoving = integrate(
            |x| inverse_expansion(x.exp_m1(), omega_m, omega_lambda) * x.exp(),
            0.0,
            upper,
            quad,
        )?;
        let lookback = integrate(
            |x| {
                inverse_expansion_times_one_plus_z(x.exp_m1(), omega_m, omega_lambda) * x.exp()
            },
            0.0,
            upper,
            quad,
        )?;
        debug!(
            redshift,
            comoving = comoving.value,
            comoving_err = comoving.abs_error,
            comoving_subdivisions = comoving.subdivisions,
            lookback = lookback.value,
            lookback_err = lookback.abs_error,
            lookback_subdivisions = lookback.subdivisions,
            "integrated expansion history"
        );

        let comoving_mpc = hubble_distance_mpc(h0) * comoving.value;
        let lookback_gyr = hubble_time_gyr(h0) * lookback.value;
        let one_plus_z = 1.0 + redshift;
        let distances = Distances {
            comoving_mpc,
            luminosity_mpc: comoving_mpc * one_plus_z,
            ang_diam_mpc: comoving_mpc / one_plus_z,
            lookback_gyr,
        };
        if ![
            distances.comoving_mpc,
            distances.luminosity_mpc,
            distances.ang_diam_mpc,
            distances.lookback_gyr,
        ]
        .iter()
        .all(|v| v.is_finite())
        {
            return Err(CalculationError::NonFiniteResult);
        }

        let diagnostics = IntegrationDiagnostics {
            err_comoving: comoving.abs_error,
            err_lookback: lookback.abs_error,
            subdivisions_comoving: comoving.subdivisions,
            subdivisions_lookback: lookback.subdivisions,
        };

        let threshold = self.config.accuracy_warning_threshold;
        let result = if comoving.abs_error > threshold || lookback.abs_error > threshold {
            warn!(
                redshift,
                err_comoving = comoving.abs_error,
                err_lookback = lookback.abs_error,
                "integration error above threshold"
            );
            DistanceResult::warning(
                distances,
                DistanceWarning::IntegrationAccuracy {
                    err_comoving: comoving.abs_error,
                    err_lookback: lookback.abs_error,
                },
            )
        } else {
            DistanceResult::ok(distances)
        };
        Ok(result.with_diagnostics(diagnostics))
    }
}

/// Internal failure of the main path, surfaced as
/// [`DistanceError::CalculationFailed`].
#[derive(Debug)]
enum CalculationError {
    Quadrature(QuadratureError),
    NonFiniteResult,
}

impl std::fmt::Display for CalculationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Quadrature(e) => write!(f, "{e}"),
            Self::NonFiniteResult => write!(f, "derived distances are not finite"),
        }
    }
}

impl From<QuadratureError> for CalculationError {
    fn from(e: QuadratureError) -> Self {
        Self::Quadrature(e)
    }
}

/// Compute distances with the default [`DistanceEngine`].
pub fn compute(redshift: f64, h0: f64, omega_m: f64, omega_lambda: f64) -> DistanceResult {
    DistanceEngine::default().compute(redshift, h0, omega_m, omega_lambda)
}
