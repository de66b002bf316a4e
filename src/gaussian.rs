//! Gaussian (normal) probability density evaluation.
//!
//! [`Gaussian`] holds validated parameters N(μ, σ²); [`density`] is the
//! one-shot evaluator that validates and evaluates in a single call.
//!
//! # Mathematical Definition
//! - PDF: f(x) = (1/(σ√(2π))) exp(−(x−μ)²/(2σ²))
//! - Peak: f(μ) = 1/(σ√(2π))
//! - Log-PDF: −z²/2 − ln σ − ln √(2π), where z = (x−μ)/σ
//!
//! # Validation
//!
//! Inputs are checked for finiteness first, then `σ > 0`:
//!
//! | Condition | Error |
//! |---|---|
//! | `x`, `mean` or `stddev` is NaN/±∞ | [`DensityError::NonFiniteInput`] |
//! | `stddev ≤ 0` | [`DensityError::InvalidParameter`] |
//! | `1/(σ√(2π))` overflows `f64` | [`DensityError::InvalidParameter`] |
//!
//! Once parameters are accepted, every density for a finite `x` is finite
//! and non-negative.

use tracing::debug;

use crate::error::{DensityError, Result};
use crate::special;

/// Evaluates the normal PDF at `x` for mean `mean` and standard deviation
/// `stddev`.
///
/// # Errors
/// - [`DensityError::NonFiniteInput`] if any argument is NaN or infinite.
/// - [`DensityError::InvalidParameter`] if `stddev ≤ 0`.
///
/// # Examples
/// ```
/// use u_density::density;
/// let d = density(1.0, 0.0, 1.0).unwrap();
/// assert!((d - 0.24197072451914337).abs() < 1e-12);
/// assert!(density(f64::NAN, 0.0, 1.0).is_err());
/// ```
pub fn density(x: f64, mean: f64, stddev: f64) -> Result<f64> {
    let x = ensure_finite("x", x)?;
    Gaussian::new(mean, stddev)?.density(x)
}

/// Normal (Gaussian) distribution N(μ, σ²) with validated parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GaussianConfig"))]
pub struct Gaussian {
    mean: f64,
    stddev: f64,
}

impl Gaussian {
    /// Creates a new normal distribution N(mean, stddev²).
    ///
    /// # Errors
    /// - [`DensityError::NonFiniteInput`] if either parameter is NaN or infinite.
    /// - [`DensityError::InvalidParameter`] if `stddev ≤ 0`, or `stddev` is
    ///   so small that the peak density is not representable.
    pub fn new(mean: f64, stddev: f64) -> Result<Self> {
        let mean = ensure_finite("mean", mean)?;
        let stddev = ensure_finite("stddev", stddev)?;
        if stddev <= 0.0 {
            return Err(reject_parameter("stddev", stddev, "must be > 0"));
        }
        if !(1.0 / (stddev * special::sqrt_2pi())).is_finite() {
            return Err(reject_parameter(
                "stddev",
                stddev,
                "too small for a finite peak density",
            ));
        }
        Ok(Self { mean, stddev })
    }

    /// The standard normal distribution N(0, 1).
    pub const fn standard() -> Self {
        Self {
            mean: 0.0,
            stddev: 1.0,
        }
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    pub fn variance(&self) -> f64 {
        self.stddev * self.stddev
    }

    /// Density at the mode, 1/(σ√(2π)). This is the maximum of the PDF.
    pub fn peak_density(&self) -> f64 {
        1.0 / (self.stddev * special::sqrt_2pi())
    }

    /// PDF at `x`.
    ///
    /// # Errors
    /// Returns [`DensityError::NonFiniteInput`] if `x` is NaN or infinite.
    pub fn density(&self, x: f64) -> Result<f64> {
        let x = ensure_finite("x", x)?;
        Ok(self.peak_density() * special::gaussian_kernel(self.z_score(x)))
    }

    /// Natural log of the PDF at `x`.
    ///
    /// Stays accurate far in the tails where [`Gaussian::density`]
    /// underflows to zero.
    ///
    /// # Errors
    /// Returns [`DensityError::NonFiniteInput`] if `x` is NaN or infinite.
    pub fn log_density(&self, x: f64) -> Result<f64> {
        let x = ensure_finite("x", x)?;
        Ok(special::standard_normal_log_pdf(self.z_score(x)) - self.stddev.ln())
    }

    /// PDF at every point of `xs`, in order.
    ///
    /// # Errors
    /// Fails on the first non-finite point with
    /// [`DensityError::NonFiniteInput`].
    ///
    /// # Examples
    /// ```
    /// use u_density::Gaussian;
    /// let g = Gaussian::new(2.0, 0.5).unwrap();
    /// let ys = g.densities(&[1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(ys.len(), 3);
    /// assert!((ys[0] - ys[2]).abs() < 1e-15);
    /// ```
    pub fn densities(&self, xs: &[f64]) -> Result<Vec<f64>> {
        xs.iter().map(|&x| self.density(x)).collect()
    }

    /// Standard score (x − μ)/σ. Overflow saturates to ±∞, never NaN.
    fn z_score(&self, x: f64) -> f64 {
        (x - self.mean) / self.stddev
    }
}

impl Default for Gaussian {
    fn default() -> Self {
        Self::standard()
    }
}

fn ensure_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        return Ok(value);
    }
    debug!(param = name, value, "rejected non-finite input");
    Err(DensityError::NonFiniteInput { name, value })
}

fn reject_parameter(name: &'static str, value: f64, reason: &'static str) -> DensityError {
    debug!(param = name, value, reason, "rejected distribution parameter");
    DensityError::InvalidParameter {
        name,
        value,
        reason,
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Unvalidated `{ mean, stddev }` as read from a configuration file.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GaussianConfig {
    mean: f64,
    stddev: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<GaussianConfig> for Gaussian {
    type Error = DensityError;

    fn try_from(config: GaussianConfig) -> Result<Self> {
        Gaussian::new(config.mean, config.stddev)
    }
}

// ============================================================================
// Tests
// ============================================================================
