//! Umbrella crate for the scale-space kernel workspace.
//!
//! Re-exports the kernel generator (`ss-kernel`) and the
//! assembly/sweep boundary (`ss-filter`).

pub use ss_filter::{
    Border, Error as FilterError, Neighborhood, correlate_cols_f64, correlate_f64,
    correlate_rows_f64,
};
pub use ss_kernel::{
    DerivativeKernel, Error as KernelError, KernelParams, MAX_ERROR_MAX, MAX_ERROR_MIN,
    NormalizationExponents, bessel_i, bessel_i0, bessel_i1,
};
