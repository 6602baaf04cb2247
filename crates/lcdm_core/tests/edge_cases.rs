//! Validation order, degenerate inputs and failure reporting.

use lcdm_core::{
    DistanceEngine, DistanceError, DistanceWarning, Distances, EngineConfig, QuadratureConfig,
    Status, compute,
};

const PLANCK: (f64, f64, f64) = (67.4, 0.315, 0.685);

#[test]
fn zero_redshift_is_exactly_zero() {
    for (h0, om, ol) in [PLANCK, (70.0, 1.0, 0.0), (1.0, 0.0, 0.0), (200.0, 2.0, 2.0)] {
        let r = compute(0.0, h0, om, ol);
        assert_eq!(r.status, Status::Ok);
        assert_eq!(r.distances, Some(Distances::ZERO));
    }
}

#[test]
fn redshift_within_tolerance_of_zero() {
    let (h0, om, ol) = PLANCK;
    let r = compute(5e-10, h0, om, ol);
    assert_eq!(r.status, Status::Ok);
    assert_eq!(r.distances, Some(Distances::ZERO));
    assert!(r.diagnostics.is_none());
}

#[test]
fn smallest_integrated_redshift() {
    let (h0, om, ol) = PLANCK;
    let r = compute(1e-6, h0, om, ol);
    assert_eq!(r.status, Status::Ok);
    let d = r.distances.unwrap();
    // Hubble law: D_C ~ c z / H0.
    assert!((d.comoving_mpc - 299_792.458 / h0 * 1e-6).abs() < 1e-6);
}

#[test]
fn negative_redshift_is_blueshift_warning() {
    let (h0, om, ol) = PLANCK;
    for z in [-1e-12, -0.5, -0.99, -5.0] {
        let r = compute(z, h0, om, ol);
        assert_eq!(r.status, Status::Warning(DistanceWarning::Blueshift), "z={z}");
        assert_eq!(r.distances, Some(Distances::ZERO));
    }
}

#[test]
fn non_finite_inputs_are_invalid() {
    let bad = [f64::NAN, f64::INFINITY, f64::NEG_INFINITY];
    for v in bad {
        for r in [
            compute(v, 67.4, 0.315, 0.685),
            compute(1.0, v, 0.315, 0.685),
            compute(1.0, 67.4, v, 0.685),
            compute(1.0, 67.4, 0.315, v),
        ] {
            assert_eq!(r.status, Status::Error(DistanceError::InvalidInput));
            assert!(r.distances.is_none());
        }
    }
}

#[test]
fn non_positive_h0_for_positive_redshift() {
    for h0 in [0.0, -0.0, -67.4] {
        for z in [1e-3, 1.0, 50.0] {
            for (om, ol) in [(0.315, 0.685), (-1.0, 0.5), (0.0, 0.0)] {
                let r = compute(z, h0, om, ol);
                assert_eq!(
                    r.status,
                    Status::Error(DistanceError::NonPositiveHubbleConstant),
                    "z={z} h0={h0}"
                );
            }
        }
    }
}

#[test]
fn redshift_branches_precede_h0_check() {
    assert_eq!(
        compute(-0.1, -10.0, 0.3, 0.7).status,
        Status::Warning(DistanceWarning::Blueshift)
    );
    assert_eq!(compute(0.0, -10.0, 0.3, 0.7).status, Status::Ok);
}

#[test]
fn negative_omegas_are_rejected() {
    for (om, ol) in [(-0.1, 0.7), (0.3, -0.7), (-1.0, -1.0)] {
        let r = compute(1.0, 67.4, om, ol);
        assert_eq!(r.status, Status::Error(DistanceError::NegativeOmega));
        assert!(r.distances.is_none());
    }
}

#[test]
fn non_flat_parameters_are_not_blocked() {
    let r = compute(1.0, 70.0, 0.5, 0.9);
    assert_eq!(r.status, Status::Ok);
    assert!(r.distances.unwrap().comoving_mpc > 0.0);
}

#[test]
fn empty_universe_triggers_accuracy_warning() {
    // Ωm = ΩΛ = 0 leaves only the ε floor under the root: the integrand is
    // ~3e7 and the round-off floor of the error estimate exceeds 1e-5.
    let r = compute(1e4, 67.4, 0.0, 0.0);
    match r.status {
        Status::Warning(DistanceWarning::IntegrationAccuracy {
            err_comoving,
            err_lookback,
        }) => {
            assert!(err_comoving > 1e-5 || err_lookback > 1e-5);
        }
        other => panic!("expected accuracy warning, got {other:?}"),
    }
    let d = r.distances.expect("warning keeps distances");
    assert!(d.comoving_mpc.is_finite() && d.comoving_mpc > 0.0);
    assert!(r.diagnostics.is_some());
}

#[test]
fn capped_subdivisions_trigger_accuracy_warning() {
    let config = EngineConfig {
        quadrature: QuadratureConfig {
            max_subdivisions: 1,
            ..QuadratureConfig::default()
        },
        ..EngineConfig::default()
    };
    let engine = DistanceEngine::new(config).unwrap();
    let r = engine.compute(1000.0, 67.4, 0.315, 0.685);
    assert!(matches!(
        r.status,
        Status::Warning(DistanceWarning::IntegrationAccuracy { .. })
    ));
    let diag = r.diagnostics.unwrap();
    assert_eq!(diag.subdivisions_comoving, 1);
    assert!(diag.err_comoving > 1e-5);
    assert!(r.distances.is_some());
}

#[test]
fn default_engine_is_accurate_at_high_redshift() {
    let r = compute(1000.0, 67.4, 0.315, 0.685);
    assert_eq!(r.status, Status::Ok);
    let diag = r.diagnostics.unwrap();
    assert!(diag.subdivisions_comoving > 1);
    assert!(diag.subdivisions_comoving <= 100);
}

#[test]
fn overflowing_integrand_is_calculation_failure() {
    // (1+z)^3 overflows and 0 * inf is NaN when Ωm = 0.
    let r = compute(1e200, 67.4, 0.0, 1.0);
    match r.status {
        Status::Error(DistanceError::CalculationFailed(detail)) => {
            assert!(detail.contains("not finite"), "detail: {detail}");
        }
        other => panic!("expected calculation failure, got {other:?}"),
    }
    assert!(r.distances.is_none());
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = DistanceEngine::default();
    let handles: Vec<_> = (1..=4)
        .map(|i| std::thread::spawn(move || engine.compute(i as f64, 67.4, 0.315, 0.685)))
        .collect();
    for (i, h) in handles.into_iter().enumerate() {
        let threaded = h.join().unwrap();
        let direct = compute((i + 1) as f64, 67.4, 0.315, 0.685);
        assert_eq!(threaded, direct);
    }
}

#[test]
fn blueshift_warning_is_described() {
    let r = compute(-0.2, 67.4, 0.315, 0.685);
    let text = match r.warning_kind() {
        Some(w @ DistanceWarning::Blueshift) => w.to_string(),
        Some(other) => panic!("unexpected warning {other:?}"),
        None => panic!("expected a warning"),
    };
    assert!(text.contains("blueshift"));
}
