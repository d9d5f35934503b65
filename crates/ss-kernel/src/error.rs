use core::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    InvalidVariance { variance: f64 },
    InvalidSpacing { spacing: f64 },
    InvalidGamma { gamma: f64 },
    ZeroKernelWidth,
    KernelWidthBelowOrder { max_kernel_width: usize, order: u32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidVariance { variance } => {
                write!(f, "variance must be finite and >= 0, got {variance}")
            }
            Self::InvalidSpacing { spacing } => {
                write!(f, "spacing must be finite and > 0, got {spacing}")
            }
            Self::InvalidGamma { gamma } => write!(f, "gamma must be finite, got {gamma}"),
            Self::ZeroKernelWidth => write!(f, "max_kernel_width must be >= 1"),
            Self::KernelWidthBelowOrder {
                max_kernel_width,
                order,
            } => write!(
                f,
                "max_kernel_width {max_kernel_width} cannot hold an order-{order} kernel \
                 (minimum width {})",
                2 * *order as usize + 1
            ),
        }
    }
}

impl std::error::Error for Error {}
