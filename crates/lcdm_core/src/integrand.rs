//! Integration kernels of the flat ΛCDM expansion history.
//!
//! With `E(z) = sqrt(Ωm (1+z)^3 + ΩΛ)`:
//! - comoving distance  `D_C = D_H ∫ dz / E(z)`
//! - lookback time      `t_L = t_H ∫ dz / ((1+z) E(z))`
//!
//! Both kernels are pure functions of `(z, Ωm, ΩΛ)` so the quadrature can
//! re-evaluate them at arbitrary sample points.

/// Floor added under the square root so `E(z)` is never exactly zero.
pub const EPSILON: f64 = 1e-15;

/// Absolute tolerance for treating a redshift as zero.
pub const ZERO_REDSHIFT_TOLERANCE: f64 = 1e-9;

/// `1 / E(z)`.
///
/// Returns `0.0` when the floored denominator is still below [`EPSILON`].
pub fn inverse_expansion(z: f64, omega_m: f64, omega_lambda: f64) -> f64 {
    let denominator = (omega_m * (1.0 + z).powi(3) + omega_lambda + EPSILON).sqrt();
    if denominator < EPSILON {
        return 0.0;
    }
    1.0 / denominator
}

/// `1 / ((1+z) E(z))`.
///
/// The radicand is clamped at zero. At `z ≈ 0` the limit form
/// `1 / sqrt(Ωm + ΩΛ + ε)` is returned directly. A denominator below
/// [`EPSILON`] saturates to `0.0`.
pub fn inverse_expansion_times_one_plus_z(z: f64, omega_m: f64, omega_lambda: f64) -> f64 {
    if z.abs() <= ZERO_REDSHIFT_TOLERANCE {
        let at_zero = (omega_m + omega_lambda + EPSILON).sqrt();
        if at_zero < EPSILON {
            return 0.0;
        }
        return 1.0 / at_zero;
    }

    let radicand = (omega_m * (1.0 + z).powi(3) + omega_lambda).max(0.0);
    let denominator = (1.0 + z) * (radicand + EPSILON).sqrt();
    if denominator.abs() < EPSILON {
        return 0.0;
    }
    1.0 / denominator
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn unity_at_zero_for_flat_universe() {
        assert!((inverse_expansion(0.0, 0.3, 0.7) - 1.0).abs() < EPS);
        assert!((inverse_expansion_times_one_plus_z(0.0, 0.3, 0.7) - 1.0).abs() < EPS);
    }

    #[test]
    fn de_sitter_is_constant() {
        for z in [0.0, 0.5, 3.0, 100.0] {
            assert!((inverse_expansion(z, 0.0, 1.0) - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn einstein_de_sitter_power_law() {
        // Ωm = 1: 1/E(z) = (1+z)^-1.5
        let z = 3.0;
        let expected = 4.0f64.powf(-1.5);
        assert!((inverse_expansion(z, 1.0, 0.0) - expected).abs() < EPS);
        let expected_lt = 4.0f64.powf(-2.5);
        assert!((inverse_expansion_times_one_plus_z(z, 1.0, 0.0) - expected_lt).abs() < EPS);
    }

    #[test]
    fn lookback_kernel_is_continuous_at_zero() {
        let at_zero = inverse_expansion_times_one_plus_z(0.0, 0.315, 0.685);
        let near_zero = inverse_expansion_times_one_plus_z(1e-6, 0.315, 0.685);
        assert!((at_zero - near_zero).abs() < 1e-5);
    }

    #[test]
    fn within_tolerance_uses_limit_form() {
        let exact = 1.0 / (0.315f64 + 0.685 + EPSILON).sqrt();
        assert_eq!(inverse_expansion_times_one_plus_z(5e-10, 0.315, 0.685), exact);
    }

    #[test]
    fn empty_universe_hits_epsilon_floor() {
        // Ωm = ΩΛ = 0: 1/sqrt(ε)
        let expected = 1.0 / EPSILON.sqrt();
        assert!((inverse_expansion(1.0, 0.0, 0.0) - expected).abs() / expected < EPS);
    }

    #[test]
    fn negative_radicand_is_clamped() {
        // A pathological ΩΛ < 0 would make the radicand negative.
        let v = inverse_expansion_times_one_plus_z(1.0, 0.0, -1.0);
        let expected = 1.0 / (2.0 * EPSILON.sqrt());
        assert!(v.is_finite());
        assert!((v - expected).abs() / expected < EPS);
    }

    #[test]
    fn lookback_kernel_saturates_at_minus_one() {
        // (1+z) = 0 makes the denominator vanish.
        assert_eq!(inverse_expansion_times_one_plus_z(-1.0, 0.3, 0.7), 0.0);
    }

    #[test]
    fn kernels_decrease_with_redshift() {
        let mut prev_dc = f64::INFINITY;
        let mut prev_lt = f64::INFINITY;
        for i in 0..50 {
            let z = i as f64 * 0.2;
            let dc = inverse_expansion(z, 0.315, 0.685);
            let lt = inverse_expansion_times_one_plus_z(z, 0.315, 0.685);
            assert!(dc <= prev_dc);
            assert!(lt <= prev_lt);
            prev_dc = dc;
            prev_lt = lt;
        }
    }
}
