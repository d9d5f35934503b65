/// Resolution policy for kernel taps that fall outside the signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Border {
    /// Repeat the nearest edge sample.
    Clamp,
    /// Treat out-of-range samples as zero.
    Zero,
    /// Mirror around the edge samples without repeating them
    /// (reflect-101: `..2 1 | 0 1 2 .. n-1 | n-2 n-3..`).
    Reflect,
}

impl Border {
    /// Maps index `i` into `[0, len)`, or `None` for a zero-fill tap.
    /// `len` must be non-zero.
    pub(crate) fn resolve(self, i: isize, len: usize) -> Option<usize> {
        debug_assert!(len > 0);
        if (0..len as isize).contains(&i) {
            return Some(i as usize);
        }
        match self {
            Self::Zero => None,
            Self::Clamp => Some(if i < 0 { 0 } else { len - 1 }),
            Self::Reflect => {
                if len == 1 {
                    return Some(0);
                }
                let period = 2 * (len as isize - 1);
                let r = i.rem_euclid(period) as usize;
                Some(if r < len { r } else { 2 * (len - 1) - r })
            }
        }
    }
}
