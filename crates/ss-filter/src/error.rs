use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    EvenKernelLength { len: usize },
    CastFailure { index: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EvenKernelLength { len } => {
                write!(f, "kernel length must be odd, got {len}")
            }
            Self::CastFailure { index } => {
                write!(f, "coefficient {index} is not representable in the target type")
            }
        }
    }
}

impl std::error::Error for Error {}
