//! Standard normal distribution helpers.

const SCALE: f64 = 0.2316419;
const DENSITY: f64 = 0.3989423;
const COEFFICIENTS: [f64; 5] = [0.3193815, -0.3565638, 1.781478, -1.821256, 1.330274];

/// Cumulative distribution of the standard normal, via the Zelen & Severo
/// rational approximation (absolute error around 1e-7).
///
/// The coefficients are fixed so results match published calculators that
/// use the same polynomial. Accuracy degrades in the far tails.
pub fn normal_cdf(x: f64) -> f64 {
    let t = 1.0 / (1.0 + SCALE * x.abs());
    let d = DENSITY * (-x * x / 2.0).exp();
    let [c1, c2, c3, c4, c5] = COEFFICIENTS;
    let prob = d * t * (c1 + t * (c2 + t * (c3 + t * (c4 + t * c5))));

    if x > 0.0 { 1.0 - prob } else { prob }
}
