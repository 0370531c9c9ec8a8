//! Standard normal distribution functions.
//!
//! Provides `norm_cdf` and `norm_pdf`, generic over `T: Float` so the
//! analytical layer can evaluate them for `f64` and `f32` alike.
//!
//! The CDF uses the Abramowitz and Stegun rational approximation of the
//! complementary error function (formula 7.1.26), accurate to 1.5e-7 over
//! the whole real line.

use num_traits::Float;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Complementary error function, Abramowitz-Stegun 7.1.26.
///
/// Maximum absolute error 1.5e-7. Negative arguments are handled via the
/// reflection erfc(-x) = 2 - erfc(x).
#[inline]
fn erfc<T: Float>(x: T) -> T {
    let one = T::one();
    let two = T::from(2.0).unwrap();

    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    let abs_x = x.abs();
    let t = one / (one + p * abs_x);

    // Horner evaluation of the degree-5 polynomial in t
    let poly = t * (a1 + t * (a2 + t * (a3 + t * (a4 + t * a5))));
    let erfc_abs = poly * (-abs_x * abs_x).exp();

    if x < T::zero() {
        two - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) for X ~ N(0, 1) as `0.5 * erfc(-x / sqrt(2))`.
/// Result lies in [0, 1] and is accurate to at least 1e-6.
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-6);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let sqrt_2 = T::from(std::f64::consts::SQRT_2).unwrap();
    let half = T::from(0.5).unwrap();
    half * erfc(-x / sqrt_2)
}

/// Standard normal probability density function.
///
/// phi(x) = exp(-x^2 / 2) / sqrt(2 pi), always non-negative.
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-9);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let scale = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();
    scale * (-half * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn cdf_at_zero_is_half() {
        assert_relative_eq!(norm_cdf(0.0_f64), 0.5, epsilon = 1e-7);
    }

    #[test]
    fn cdf_reference_values() {
        // Standard normal table values
        assert_relative_eq!(norm_cdf(1.0_f64), 0.8413447460685429, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(-1.0_f64), 0.15865525393145707, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(2.0_f64), 0.9772498680518208, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(-2.33_f64), 0.009903075845469879, epsilon = 1e-6);
    }

    #[test]
    fn cdf_extreme_arguments_stay_bounded() {
        assert!(norm_cdf(10.0_f64) <= 1.0);
        assert!(norm_cdf(10.0_f64) > 0.9999999);
        assert!(norm_cdf(-10.0_f64) >= 0.0);
        assert!(norm_cdf(-10.0_f64) < 1e-7);
    }

    #[test]
    fn cdf_monotone_on_grid() {
        let xs: Vec<f64> = (-50..=50).map(|i| i as f64 * 0.1).collect();
        for w in xs.windows(2) {
            assert!(
                norm_cdf(w[1]) > norm_cdf(w[0]),
                "CDF not increasing at {}",
                w[0]
            );
        }
    }

    #[test]
    fn pdf_reference_values() {
        assert_relative_eq!(norm_pdf(0.0_f64), FRAC_1_SQRT_2PI, epsilon = 1e-12);
        assert_relative_eq!(norm_pdf(1.0_f64), 0.24197072451914337, epsilon = 1e-9);
        assert_relative_eq!(norm_pdf(2.0_f64), 0.05399096651318806, epsilon = 1e-9);
    }

    #[test]
    fn pdf_is_symmetric() {
        for x in [0.5, 1.0, 2.5, 4.0] {
            assert_relative_eq!(norm_pdf(x), norm_pdf(-x), epsilon = 1e-12);
        }
    }

    #[test]
    fn cdf_derivative_matches_pdf() {
        let h = 1e-4;
        for x in [-2.0, -0.5, 0.0, 0.5, 2.0] {
            let fd = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_relative_eq!(fd, norm_pdf(x), epsilon = 1e-4);
        }
    }

    #[test]
    fn f32_support() {
        assert!((norm_cdf(0.0_f32) - 0.5).abs() < 1e-5);
        assert!((norm_pdf(0.0_f32) - 0.398_942_3).abs() < 1e-5);
    }

    proptest! {
        #[test]
        fn cdf_bounded_and_symmetric(x in -8.0_f64..8.0) {
            let c = norm_cdf(x);
            prop_assert!((0.0..=1.0).contains(&c));
            prop_assert!((c + norm_cdf(-x) - 1.0).abs() < 1e-6);
        }
    }
}
