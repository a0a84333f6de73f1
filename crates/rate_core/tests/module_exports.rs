//! Integration tests for module exports.
//!
//! Verify that all public modules and types are exported and reachable via
//! absolute paths.

use approx::assert_relative_eq;

/// Sampling helpers are reachable and agree with each other.
#[test]
fn test_sampling_module_exports() {
    use rate_core::math::sampling::{
        linspace, utilization_grid, DEFAULT_SAMPLES, UTILIZATION_MAX, UTILIZATION_MIN,
    };

    let a = linspace(UTILIZATION_MIN, UTILIZATION_MAX, DEFAULT_SAMPLES).unwrap();
    let b = utilization_grid::<f64>(DEFAULT_SAMPLES).unwrap();
    assert_eq!(a, b);
}

/// Interpolators are reachable through the trait re-export.
#[test]
fn test_interpolators_module_exports() {
    use rate_core::math::interpolators::{Interpolator, LinearInterpolator};

    let interp = LinearInterpolator::new(&[0.0, 100.0], &[0.0, 2.0]).unwrap();
    assert_relative_eq!(interp.interpolate(25.0).unwrap(), 0.5, epsilon = 1e-12);
}

/// Error and rate types are re-exported at the `types` level.
#[test]
fn test_types_module_exports() {
    use rate_core::types::{
        annualize, apr_percent, ensure_finite, to_percent, ConfigurationError, CurveError,
        SECONDS_PER_YEAR,
    };

    assert_eq!(SECONDS_PER_YEAR, 31_536_000.0);
    assert_relative_eq!(annualize(1e-9_f64), 0.031536, max_relative = 1e-12);
    assert_relative_eq!(apr_percent(1e-9_f64), 3.1536, max_relative = 1e-12);
    assert_eq!(to_percent(0.5_f64), 50.0);

    let err: CurveError = ensure_finite("x", f64::NAN).unwrap_err().into();
    assert!(matches!(
        err,
        CurveError::Configuration(ConfigurationError::NonFinite { field: "x", .. })
    ));
}

/// Sampling then reading back a straight line reproduces the line.
#[test]
fn test_sample_then_interpolate_linear_curve() {
    use rate_core::math::interpolators::{Interpolator, LinearInterpolator};
    use rate_core::math::sampling::utilization_grid;

    let xs = utilization_grid::<f64>(100).unwrap();
    let ys: Vec<f64> = xs.iter().map(|u| 1e-9 + u * 2.5e-11).collect();
    let interp = LinearInterpolator::new(&xs, &ys).unwrap();

    for u in [0.0, 12.34, 50.0, 99.99, 100.0] {
        assert_relative_eq!(
            interp.interpolate(u).unwrap(),
            1e-9 + u * 2.5e-11,
            max_relative = 1e-9
        );
    }
}
