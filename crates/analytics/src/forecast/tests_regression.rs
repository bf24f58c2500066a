//! Unit tests for the least-squares line fit.

use super::regression::LinearFit;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_exact_line_is_recovered() {
    let points: Vec<(f64, f64)> = (0..5).map(|x| (x as f64, 10.0 * x as f64 + 5.0)).collect();
    let fit = LinearFit::fit(&points).unwrap();
    assert_close(fit.slope(), 10.0);
    assert_close(fit.intercept(), 5.0);
    assert_close(fit.predict(7.0), 75.0);
}

#[test]
fn test_noisy_points_fit_known_solution() {
    // Hand-computed: mean_x = 1.5, mean_y = 3.5, sxx = 5, sxy = 6.
    let points = [(0.0, 2.0), (1.0, 3.0), (2.0, 3.0), (3.0, 6.0)];
    let fit = LinearFit::fit(&points).unwrap();
    assert_close(fit.slope(), 1.2);
    assert_close(fit.intercept(), 1.7);
}

#[test]
fn test_unordered_points_fit_the_same_line() {
    let forward = [(0.0, 1.0), (1.0, 4.0), (2.0, 5.0), (5.0, 9.0)];
    let shuffled = [(5.0, 9.0), (1.0, 4.0), (0.0, 1.0), (2.0, 5.0)];
    let a = LinearFit::fit(&forward).unwrap();
    let b = LinearFit::fit(&shuffled).unwrap();
    assert_close(a.slope(), b.slope());
    assert_close(a.intercept(), b.intercept());
}

#[test]
fn test_declining_trend_goes_negative() {
    let points = [(0.0, 30.0), (1.0, 20.0), (2.0, 10.0)];
    let fit = LinearFit::fit(&points).unwrap();
    assert_close(fit.predict(4.0), -10.0);
}

#[test]
fn test_underdetermined_inputs() {
    assert!(LinearFit::fit(&[]).is_none());
    assert!(LinearFit::fit(&[(0.0, 1.0)]).is_none());
    assert!(LinearFit::fit(&[(2.0, 1.0), (2.0, 5.0), (2.0, 9.0)]).is_none());
}

#[test]
fn test_repeated_x_values_average() {
    // Two observations on day 0 behave like their mean.
    let points = [(0.0, 90.0), (0.0, 110.0), (1.0, 110.0)];
    let fit = LinearFit::fit(&points).unwrap();
    assert_close(fit.predict(0.0), 100.0);
    assert_close(fit.predict(1.0), 110.0);
}
