//! Result and status types returned by the distance engine.

use std::fmt::{Display, Formatter};

/// The four derived quantities of a single request.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Distances {
    /// Line-of-sight comoving distance in megaparsecs.
    pub comoving_mpc: f64,
    /// Luminosity distance in megaparsecs.
    pub luminosity_mpc: f64,
    /// Angular-diameter distance in megaparsecs.
    pub ang_diam_mpc: f64,
    /// Lookback time in gigayears.
    pub lookback_gyr: f64,
}

impl Distances {
    /// All four quantities exactly zero.
    pub const ZERO: Self = Self {
        comoving_mpc: 0.0,
        luminosity_mpc: 0.0,
        ang_diam_mpc: 0.0,
        lookback_gyr: 0.0,
    };
}

/// Absolute error estimates reported by the quadrature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationDiagnostics {
    pub err_comoving: f64,
    pub err_lookback: f64,
    pub subdivisions_comoving: usize,
    pub subdivisions_lookback: usize,
}

/// Advisory conditions; the accompanying distances are still usable.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum DistanceWarning {
    /// Negative redshift. All distances are reported as zero.
    Blueshift,
    /// A quadrature error estimate exceeded the warning threshold.
    IntegrationAccuracy { err_comoving: f64, err_lookback: f64 },
}

impl Display for DistanceWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blueshift => write!(
                f,
                "redshift is negative (blueshift); cosmological distances are reported as 0"
            ),
            Self::IntegrationAccuracy {
                err_comoving,
                err_lookback,
            } => write!(
                f,
                "integration accuracy may not be achieved (error: DC={err_comoving:.2e}, LT={err_lookback:.2e})"
            ),
        }
    }
}

/// Failures; no distances accompany these.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum DistanceError {
    /// One or more inputs is NaN or infinite.
    InvalidInput,
    /// `h0 <= 0`.
    NonPositiveHubbleConstant,
    /// `omega_m < 0` or `omega_lambda < 0`.
    NegativeOmega,
    /// The numerical integration failed.
    CalculationFailed(String),
}

impl Display for DistanceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "invalid input: all parameters must be finite numbers"),
            Self::NonPositiveHubbleConstant => write!(f, "Hubble constant must be positive"),
            Self::NegativeOmega => write!(f, "omega parameters cannot be negative"),
            Self::CalculationFailed(detail) => write!(f, "calculation failed: {detail}"),
        }
    }
}

impl std::error::Error for DistanceError {}

/// Outcome classification of a request.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Ok,
    Warning(DistanceWarning),
    Error(DistanceError),
}

/// Everything the engine reports for one request.
///
/// `distances` is `None` exactly when `status` is [`Status::Error`].
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceResult {
    pub distances: Option<Distances>,
    pub status: Status,
    pub diagnostics: Option<IntegrationDiagnostics>,
}

impl DistanceResult {
    pub(crate) fn ok(distances: Distances) -> Self {
        Self {
            distances: Some(distances),
            status: Status::Ok,
            diagnostics: None,
        }
    }

    pub(crate) fn warning(distances: Distances, warning: DistanceWarning) -> Self {
        Self {
            distances: Some(distances),
            status: Status::Warning(warning),
            diagnostics: None,
        }
    }

    pub(crate) fn error(error: DistanceError) -> Self {
        Self {
            distances: None,
            status: Status::Error(error),
            diagnostics: None,
        }
    }

    pub(crate) fn with_diagnostics(mut self, diagnostics: IntegrationDiagnostics) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    /// Whether the status is [`Status::Ok`].
    pub fn is_ok(&self) -> bool {
        matches!(self.status, Status::Ok)
    }

    /// The warning, if the status carries one.
    pub fn warning_kind(&self) -> Option<&DistanceWarning> {
        match &self.status {
            Status::Warning(w) => Some(w),
            _ => None,
        }
    }

    /// The error, if the status carries one.
    pub fn error_kind(&self) -> Option<&DistanceError> {
        match &self.status {
            Status::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Convert into a `Result`, dropping any warning.
    pub fn into_result(self) -> Result<Distances, DistanceError> {
        match (self.status, self.distances) {
            (Status::Error(e), _) => Err(e),
            (_, Some(d)) => Ok(d),
            (_, None) => Err(DistanceError::CalculationFailed(
                "result carries no distances".to_string(),
            )),
        }
    }
}
