//! Neighborhood assembly and 1D sweep for scale-space kernels.
//!
//! The generator in `ss-kernel` produces plain f64 coefficient vectors;
//! this crate owns everything that touches pipeline data:
//!
//! - [`Neighborhood`] centers a coefficient vector in a buffer of the
//!   pipeline's element type (odd length, center at the midpoint index).
//! - [`correlate_f64`] sweeps a kernel across a signal using the
//!   neighborhood convention: the coefficient at offset `n` weights the
//!   sample at `x + n`. No kernel flip.
//! - [`correlate_rows_f64`] / [`correlate_cols_f64`] apply the sweep along
//!   one axis of a flat row-major buffer; running them in sequence with
//!   per-axis kernels gives separable N-D filtering.
//!
//! Out-of-range taps near the signal ends are resolved by a [`Border`]
//! policy (clamp, zero fill, or reflect-101).

mod border;
mod correlate;
mod error;
mod neighborhood;

pub use border::Border;
pub use correlate::{correlate_cols_f64, correlate_f64, correlate_rows_f64};
pub use error::Error;
pub use neighborhood::Neighborhood;
