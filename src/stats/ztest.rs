use serde::{Deserialize, Serialize};

use super::normal::normal_cdf;
use crate::model::GroupSample;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZTest {
    pub z_score: f64,
    pub p_value: f64,
    pub is_significant: bool,
    pub confidence_level: f64,
}

impl ZTest {
    /// Result reported when there is nothing to compare.
    pub const NO_DATA: ZTest = ZTest {
        z_score: 0.0,
        p_value: 1.0,
        is_significant: false,
        confidence_level: 0.0,
    };
}

/// Two-tailed z-test for a difference between two proportions, using the
/// pooled standard error under the null hypothesis of equal rates.
///
/// Returns [`ZTest::NO_DATA`] when either arm has no trials or the pooled
/// proportion is 0 or 1.
pub fn two_proportion_z_test(control: GroupSample, variant: GroupSample, alpha: f64) -> ZTest {
    let (Some(p1), Some(p2)) = (control.proportion(), variant.proportion()) else {
        return ZTest::NO_DATA;
    };

    let n1 = control.trials as f64;
    let n2 = variant.trials as f64;
    let pooled = (control.successes as f64 + variant.successes as f64) / (n1 + n2);
    let se = (pooled * (1.0 - pooled) * (1.0 / n1 + 1.0 / n2)).sqrt();

    if se == 0.0 {
        return ZTest::NO_DATA;
    }

    let z_score = (p2 - p1) / se;
    // the polynomial gives 0.49999985 at zero, so identical rates would exceed 1
    let p_value = (2.0 * (1.0 - normal_cdf(z_score.abs()))).clamp(0.0, 1.0);

    ZTest {
        z_score,
        p_value,
        is_significant: p_value < alpha,
        confidence_level: (1.0 - p_value) * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::{ZTest, two_proportion_z_test};
    use crate::model::GroupSample;
    use crate::stats::DEFAULT_ALPHA;

    #[test]
    fn empty_arm_yields_no_data() {
        let control = GroupSample::clamped(0, 0);
        let variant = GroupSample::clamped(500, 40);
        assert_eq!(
            two_proportion_z_test(control, variant, DEFAULT_ALPHA),
            ZTest::NO_DATA
        );
        assert_eq!(
            two_proportion_z_test(variant, control, DEFAULT_ALPHA),
            ZTest::NO_DATA
        );
    }

    #[test]
    fn zero_pooled_variance_yields_no_data() {
        let none = GroupSample::clamped(400, 0);
        let all = GroupSample::clamped(400, 400);
        assert_eq!(two_proportion_z_test(none, none, DEFAULT_ALPHA), ZTest::NO_DATA);
        assert_eq!(two_proportion_z_test(all, all, DEFAULT_ALPHA), ZTest::NO_DATA);
    }

    #[test]
    fn identical_rates_have_unit_p_value() {
        let sample = GroupSample::clamped(1_000, 100);
        let test = two_proportion_z_test(sample, sample, DEFAULT_ALPHA);
        assert_eq!(test.z_score, 0.0);
        assert_eq!(test.p_value, 1.0);
        assert_eq!(test.confidence_level, 0.0);
        assert!(!test.is_significant);
    }

    #[test]
    fn reference_experiment_is_significant() {
        let control = GroupSample::clamped(10_000, 450);
        let variant = GroupSample::clamped(10_000, 520);
        let test = two_proportion_z_test(control, variant, DEFAULT_ALPHA);

        assert!((test.z_score - 2.304_134).abs() < 1e-5, "z={}", test.z_score);
        assert!((test.p_value - 0.021_215).abs() < 1e-5, "p={}", test.p_value);
        assert!((test.confidence_level - 97.878_495).abs() < 1e-3);
        assert!(test.is_significant);
    }

    #[test]
    fn small_difference_is_not_significant() {
        let control = GroupSample::clamped(1_000, 100);
        let variant = GroupSample::clamped(1_000, 110);
        let test = two_proportion_z_test(control, variant, DEFAULT_ALPHA);

        assert!((test.z_score - 0.729_422).abs() < 1e-5);
        assert!((test.p_value - 0.465_743).abs() < 1e-5);
        assert!(!test.is_significant);
    }

    #[test]
    fn negative_difference_has_negative_z() {
        let control = GroupSample::clamped(5_000, 300);
        let variant = GroupSample::clamped(5_000, 240);
        let test = two_proportion_z_test(control, variant, DEFAULT_ALPHA);

        assert!((test.z_score + 2.654_659).abs() < 1e-5);
        assert!((test.p_value - 0.007_939).abs() < 1e-5);
        assert!(test.is_significant);
    }

    #[test]
    fn stricter_alpha_can_reject_significance() {
        let control = GroupSample::clamped(10_000, 450);
        let variant = GroupSample::clamped(10_000, 520);
        assert!(!two_proportion_z_test(control, variant, 0.01).is_significant);
    }
}
