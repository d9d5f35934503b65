use crate::error::Error;

/// Lower clamp bound for [`KernelParams::max_error`].
pub const MAX_ERROR_MIN: f64 = 1e-5;

/// Upper clamp bound for [`KernelParams::max_error`].
pub const MAX_ERROR_MAX: f64 = 1.0 - 1e-5;

/// Exponents of the two derivative-normalization regimes.
///
/// The literature fragment the original operator cites fixes both factors
/// only qualitatively, so they are configuration rather than constants.
/// Defaults follow Lindeberg's conventions:
///
/// - scale-space factor: `variance^(order * scale)`, `scale = 0.5` giving
///   the standard `sigma^order` normalized derivative;
/// - gamma factor: `t^(order * (gamma - 1) * gamma_exp)` with
///   `t = variance / spacing^2` and `gamma_exp = 0.5`, so `gamma = 1` is
///   the identity and, at unit spacing with both regimes active, the total
///   factor is `t^(order * gamma / 2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizationExponents {
    pub scale: f64,
    pub gamma_exp: f64,
}

impl Default for NormalizationExponents {
    fn default() -> Self {
        Self {
            scale: 0.5,
            gamma_exp: 0.5,
        }
    }
}

/// Parameters of one kernel-generation call.
///
/// A value object: build one (typically per filtering axis), hand it to
/// [`DerivativeKernel::generate`](crate::DerivativeKernel::generate), reuse
/// it freely. Generation never mutates or retains it, so distinct instances
/// can drive concurrent generations without coordination.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelParams {
    /// Variance of the continuous Gaussian, in physical units. Zero is the
    /// identity-kernel degenerate case.
    pub variance: f64,
    /// Sampling distance along the kernel's axis.
    pub spacing: f64,
    /// Derivative order; 0 is pure smoothing.
    pub order: u32,
    /// Gamma-normalization parameter (1.0 disables the gamma factor).
    pub gamma: f64,
    /// Fraction of Gaussian mass the kernel may omit. Values outside
    /// `[MAX_ERROR_MIN, MAX_ERROR_MAX]` are silently clamped.
    pub max_error: f64,
    /// Hard cap on kernel element count. Even caps round down to the
    /// nearest odd width.
    pub max_kernel_width: usize,
    /// Enables the scale-space amplitude normalization regime.
    pub normalize_across_scale: bool,
    pub exponents: NormalizationExponents,
}

impl Default for KernelParams {
    fn default() -> Self {
        Self {
            variance: 1.0,
            spacing: 1.0,
            order: 1,
            gamma: 1.0,
            max_error: 0.005,
            max_kernel_width: 30,
            normalize_across_scale: false,
            exponents: NormalizationExponents::default(),
        }
    }
}

impl KernelParams {
    pub fn smoothing(variance: f64) -> Self {
        Self {
            variance,
            order: 0,
            ..Self::default()
        }
    }

    pub fn derivative(variance: f64, order: u32) -> Self {
        Self {
            variance,
            order,
            ..Self::default()
        }
    }

    /// Sets `max_error`, clamping silently into the valid range.
    pub fn with_max_error(mut self, max_error: f64) -> Self {
        self.max_error = max_error.clamp(MAX_ERROR_MIN, MAX_ERROR_MAX);
        self
    }

    /// `max_error` clamped into the valid range, as used by generation.
    /// Direct field writes get the same silent-clamp treatment.
    pub(crate) fn clamped_max_error(&self) -> f64 {
        self.max_error.clamp(MAX_ERROR_MIN, MAX_ERROR_MAX)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !self.variance.is_finite() || self.variance < 0.0 {
            return Err(Error::InvalidVariance {
                variance: self.variance,
            });
        }
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(Error::InvalidSpacing {
                spacing: self.spacing,
            });
        }
        if !self.gamma.is_finite() {
            return Err(Error::InvalidGamma { gamma: self.gamma });
        }
        if self.max_kernel_width == 0 {
            return Err(Error::ZeroKernelWidth);
        }
        // Each derivative pass grows the radius by 1, so no order-m kernel
        // is shorter than 2m + 1; a cap below that can never be honored.
        if self.max_kernel_width < 2 * self.order as usize + 1 {
            return Err(Error::KernelWidthBelowOrder {
                max_kernel_width: self.max_kernel_width,
                order: self.order,
            });
        }
        Ok(())
    }
}
