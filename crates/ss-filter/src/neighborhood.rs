use num_traits::NumCast;
use ss_kernel::DerivativeKernel;

use crate::error::Error;

/// A coefficient vector assembled for the surrounding pipeline: centered in
/// a buffer of the pipeline's element type, odd length, center element at
/// the midpoint index.
///
/// Values are carried over unmodified apart from the cast; any precision
/// loss belongs to this boundary, never to the generator.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighborhood<T> {
    buf: Vec<T>,
    radius: usize,
}

impl<T: Copy + NumCast> Neighborhood<T> {
    /// Centers `kernel`'s coefficients in a typed buffer.
    pub fn from_kernel(kernel: &DerivativeKernel) -> Result<Self, Error> {
        Self::from_coefficients(&kernel.coefficients)
    }

    /// Centers a raw coefficient vector; its length must be odd.
    pub fn from_coefficients(coefficients: &[f64]) -> Result<Self, Error> {
        if coefficients.len() % 2 == 0 {
            return Err(Error::EvenKernelLength {
                len: coefficients.len(),
            });
        }
        let buf = coefficients
            .iter()
            .enumerate()
            .map(|(index, &c)| T::from(c).ok_or(Error::CastFailure { index }))
            .collect::<Result<Vec<T>, Error>>()?;
        Ok(Self {
            radius: buf.len() / 2,
            buf,
        })
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Length is always at least 1.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Element at the midpoint index (spatial offset 0).
    pub fn center(&self) -> T {
        self.buf[self.radius]
    }

    /// Element at spatial offset `n`, for `|n| <= radius`.
    pub fn at_offset(&self, n: isize) -> T {
        self.buf[(self.radius as isize + n) as usize]
    }

    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }
}
