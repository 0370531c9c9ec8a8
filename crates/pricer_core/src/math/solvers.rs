//! Scalar root-finding.
//!
//! Newton-Raphson with a bisection fallback inside a bracketing interval.
//! The implied volatility solver in the vanilla layer is the main consumer:
//! Newton converges quadratically while vega is healthy, and bisection takes
//! over when the derivative degenerates or an iterate escapes the bracket.

use crate::types::error::SolverError;

/// Solver iteration and tolerance settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverConfig {
    /// Maximum number of iterations before giving up.
    pub max_iterations: usize,
    /// Absolute tolerance on |f(x)| at the root.
    pub tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-10,
        }
    }
}

/// Finds a root of `f` in `[lo, hi]` using Newton-Raphson with bisection
/// fallback.
///
/// `f(lo)` and `f(hi)` must bracket the root (opposite signs). Each
/// iteration attempts a Newton step from the current estimate; if the
/// derivative is too small or the step leaves the bracket, the iteration
/// falls back to bisection. The bracket is tightened every iteration, so
/// the method inherits bisection's guaranteed convergence.
///
/// # Errors
/// - [`SolverError::InvalidBracket`] if `f(lo)` and `f(hi)` have the same sign
/// - [`SolverError::DidNotConverge`] if the tolerance is not met within
///   `config.max_iterations`
///
/// # Examples
/// ```
/// use pricer_core::math::solvers::{newton_raphson, SolverConfig};
///
/// // Root of x^2 - 2 in [0, 2]
/// let root = newton_raphson(
///     |x| x * x - 2.0,
///     |x| 2.0 * x,
///     1.0,
///     0.0,
///     2.0,
///     &SolverConfig::default(),
/// )
/// .unwrap();
/// assert!((root - 2.0_f64.sqrt()).abs() < 1e-9);
/// ```
pub fn newton_raphson<F, D>(
    f: F,
    df: D,
    initial: f64,
    lo: f64,
    hi: f64,
    config: &SolverConfig,
) -> Result<f64, SolverError>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    let (mut lo, mut hi) = (lo, hi);
    let f_lo = f(lo);
    let f_hi = f(hi);

    if f_lo == 0.0 {
        return Ok(lo);
    }
    if f_hi == 0.0 {
        return Ok(hi);
    }
    if f_lo.signum() == f_hi.signum() {
        return Err(SolverError::InvalidBracket { lo, hi });
    }

    // Orient so that f(lo) < 0 < f(hi)
    if f_lo > 0.0 {
        std::mem::swap(&mut lo, &mut hi);
    }

    let mut x = initial.clamp(lo.min(hi), lo.max(hi));

    for _ in 0..config.max_iterations {
        let fx = f(x);
        if fx.abs() < config.tolerance {
            return Ok(x);
        }

        // Tighten the bracket with the current sign information
        if fx < 0.0 {
            lo = x;
        } else {
            hi = x;
        }

        let dfx = df(x);
        let newton = if dfx.abs() > f64::EPSILON {
            x - fx / dfx
        } else {
            f64::NAN
        };

        let (lower, upper) = (lo.min(hi), lo.max(hi));
        x = if newton.is_finite() && newton > lower && newton < upper {
            newton
        } else {
            0.5 * (lo + hi)
        };
    }

    Err(SolverError::DidNotConverge {
        iterations: config.max_iterations,
    })
}
