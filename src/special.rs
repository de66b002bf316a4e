//! Special mathematical functions.
//!
//! The normalisation constant and unnormalised kernel of the normal
//! distribution. These are raw `f64` functions: NaN propagates and no
//! validation is performed. Use [`crate::gaussian`] for checked evaluation.

use std::f64::consts::PI;

/// ln(√(2π)) = 0.5·ln(2π) ≈ 0.9189385332046727
pub const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_7;

/// √(2π), computed from [`std::f64::consts::PI`].
///
/// # Examples
/// ```
/// use u_density::special::sqrt_2pi;
/// assert!((sqrt_2pi() - 2.5066282746310002).abs() < 1e-15);
/// ```
pub fn sqrt_2pi() -> f64 {
    (2.0 * PI).sqrt()
}

/// Unnormalised Gaussian kernel exp(−z²/2).
///
/// Lies in `[0, 1]` for every non-NaN `z`, reaching 1 at `z = 0`.
/// Large `|z|` underflows to 0 rather than producing NaN.
pub fn gaussian_kernel(z: f64) -> f64 {
    (-0.5 * z * z).exp()
}

/// Natural log of the standard normal PDF: −z²/2 − ln(√(2π)).
pub fn standard_normal_log_pdf(z: f64) -> f64 {
    -0.5 * z * z - LN_SQRT_2PI
}

// ============================================================================
// Tests
// ============================================================================
