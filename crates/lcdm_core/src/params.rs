//! Cosmological parameter sets.

/// Redshift used when the caller supplies none (Coma Cluster).
pub const DEFAULT_REDSHIFT: f64 = 0.03403;

/// Allowed `|Ωm + ΩΛ - 1|` before a parameter set is reported as non-flat.
pub const FLATNESS_TOLERANCE: f64 = 1e-3;

/// `H0` (km/s/Mpc), `Ωm` and `ΩΛ` of a flat ΛCDM model.
///
/// The engine only requires `h0 > 0` and non-negative densities. The sum
/// `Ωm + ΩΛ` is not constrained; the model assumes zero curvature
/// regardless, and [`is_flat`](Self::is_flat) lets callers advise on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CosmologicalParameters {
    pub h0: f64,
    pub omega_m: f64,
    pub omega_lambda: f64,
}

impl CosmologicalParameters {
    pub fn new(h0: f64, omega_m: f64, omega_lambda: f64) -> Self {
        Self {
            h0,
            omega_m,
            omega_lambda,
        }
    }

    /// Planck 2018 (TT,TE,EE+lowE+lensing) best fit.
    pub fn planck2018() -> Self {
        Self::new(67.4, 0.315, 0.685)
    }

    /// Curvature density implied by the densities, `1 - Ωm - ΩΛ`.
    ///
    /// Informational only: distances are always computed as if this were 0.
    pub fn curvature(&self) -> f64 {
        1.0 - self.omega_m - self.omega_lambda
    }

    /// Whether `Ωm + ΩΛ` is within [`FLATNESS_TOLERANCE`] of 1.
    pub fn is_flat(&self) -> bool {
        self.curvature().abs() <= FLATNESS_TOLERANCE
    }
}

impl Default for CosmologicalParameters {
    fn default() -> Self {
        Self::planck2018()
    }
}
