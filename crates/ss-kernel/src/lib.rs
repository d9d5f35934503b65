//! Discrete scale-space Gaussian-derivative kernel generation.
//!
//! ## Kernel Model
//! Kernels are finite, odd-length coefficient vectors approximating a
//! derivative (of arbitrary order) of a Gaussian. The order-0 kernel is
//! Lindeberg's discrete Gaussian, `exp(-t) * I_n(t)` at integer offset `n`
//! with `t = variance / spacing^2`, which preserves the semigroup property
//! exactly in discrete space. Higher orders are obtained by repeated
//! convolution with a central-difference operator.
//!
//! ## Coefficient Convention
//! Coefficients follow the neighborhood (correlation) convention: the
//! coefficient at offset `n` weights the sample at `x + n`. Index `radius`
//! is the spatial center.
//!
//! ## Size Control
//! The kernel radius grows until the omitted Gaussian tail mass drops below
//! `max_error`, subject to a hard width cap. Hitting the cap is non-fatal:
//! the kernel is truncated, renormalized to unit sum, flagged, and a single
//! warning is emitted.
//!
//! Generation is a pure function of its parameters; identical parameters
//! yield bit-identical coefficient vectors.

mod bessel;
mod error;
mod kernel;
mod params;

pub use bessel::{bessel_i, bessel_i0, bessel_i1};
pub use error::Error;
pub use kernel::DerivativeKernel;
pub use params::{KernelParams, MAX_ERROR_MAX, MAX_ERROR_MIN, NormalizationExponents};
