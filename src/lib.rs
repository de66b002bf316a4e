//! # u-density
//!
//! Gaussian probability density evaluation for the U-Engine ecosystem.
//!
//! The crate evaluates the normal PDF
//! `f(x) = (1/(σ√(2π))) exp(−(x−μ)²/(2σ²))` with explicit parameter
//! validation: a zero or negative standard deviation and non-finite inputs
//! are reported as errors instead of silently producing `inf` or `NaN`.
//!
//! ## Modules
//!
//! - [`gaussian`] — Validated [`Gaussian`] parameters and the [`density`] evaluator
//! - [`special`] — Standard-normal kernel and normalisation constants
//! - [`error`] — [`DensityError`] and the crate [`Result`] alias
//!
//! ## Design Philosophy
//!
//! - **Reject, don't propagate**: invalid parameters never reach the formula
//! - **Pure evaluation**: no shared state, safe to call from any thread
//! - **Property-based testing**: mathematical invariants verified via proptest
//!
//! # Examples
//! ```
//! use u_density::{density, DensityError};
//!
//! let peak = density(0.0, 0.0, 1.0).unwrap();
//! assert!((peak - 0.3989422804014327).abs() < 1e-12);
//!
//! assert!(matches!(
//!     density(0.0, 0.0, 0.0),
//!     Err(DensityError::InvalidParameter { .. })
//! ));
//! ```

pub mod error;
pub mod gaussian;
pub mod special;

pub use error::{DensityError, Result};
pub use gaussian::{density, Gaussian};
