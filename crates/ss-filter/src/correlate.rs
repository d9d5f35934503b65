use crate::border::Border;

/// Sweeps a centered kernel across `signal`:
/// `out[x] = sum_n kernel[radius + n] * signal[x + n]`.
///
/// The kernel is applied in the neighborhood (correlation) convention used
/// by the generator; it is not flipped. Kernel length must be odd and
/// `out.len()` must equal `signal.len()`.
pub fn correlate_f64(signal: &[f64], kernel: &[f64], border: Border, out: &mut [f64]) {
    assert_eq!(kernel.len() % 2, 1, "kernel length must be odd");
    assert_eq!(out.len(), signal.len(), "out must match signal length");

    let n = signal.len();
    if n == 0 {
        return;
    }
    let radius = kernel.len() / 2;

    if n > 2 * radius {
        // Interior: full kernel footprint in bounds, one window per output.
        for (w, out_x) in signal.windows(kernel.len()).zip(&mut out[radius..]) {
            *out_x = dot(w, kernel);
        }
        for x in 0..radius {
            out[x] = tap_sum(signal, kernel, radius, x, border);
        }
        for x in (n - radius)..n {
            out[x] = tap_sum(signal, kernel, radius, x, border);
        }
    } else {
        for x in 0..n {
            out[x] = tap_sum(signal, kernel, radius, x, border);
        }
    }
}

/// Sweeps `kernel` along every row of a `width x height` row-major buffer.
pub fn correlate_rows_f64(
    data: &[f64],
    width: usize,
    height: usize,
    kernel: &[f64],
    border: Border,
    out: &mut [f64],
) {
    assert_eq!(data.len(), width * height, "data must be width * height");
    assert_eq!(out.len(), data.len(), "out must match data length");

    for (row, out_row) in data.chunks_exact(width).zip(out.chunks_exact_mut(width)) {
        correlate_f64(row, kernel, border, out_row);
    }
}

/// Sweeps `kernel` along every column of a `width x height` row-major
/// buffer. Columns are gathered into a scratch signal, swept, and scattered
/// back.
pub fn correlate_cols_f64(
    data: &[f64],
    width: usize,
    height: usize,
    kernel: &[f64],
    border: Border,
    out: &mut [f64],
) {
    assert_eq!(data.len(), width * height, "data must be width * height");
    assert_eq!(out.len(), data.len(), "out must match data length");

    let mut column = vec![0.0f64; height];
    let mut filtered = vec![0.0f64; height];
    for x in 0..width {
        for (y, c) in column.iter_mut().enumerate() {
            *c = data[y * width + x];
        }
        correlate_f64(&column, kernel, border, &mut filtered);
        for (y, &f) in filtered.iter().enumerate() {
            out[y * width + x] = f;
        }
    }
}

#[inline]
fn dot(window: &[f64], kernel: &[f64]) -> f64 {
    window.iter().zip(kernel).map(|(&s, &k)| s * k).sum()
}

fn tap_sum(signal: &[f64], kernel: &[f64], radius: usize, x: usize, border: Border) -> f64 {
    let mut acc = 0.0f64;
    for (j, &k) in kernel.iter().enumerate() {
        let i = x as isize + j as isize - radius as isize;
        if let Some(idx) = border.resolve(i, signal.len()) {
            acc += signal[idx] * k;
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{correlate_cols_f64, correlate_f64, correlate_rows_f64};
    use crate::border::Border;

    #[test]
    fn identity_kernel_passes_signal_through() {
        let signal = [1.0, 2.0, 3.0, 4.0];
        let mut out = [0.0; 4];
        correlate_f64(&signal, &[1.0], Border::Clamp, &mut out);
        assert_eq!(out, signal);
    }

    #[test]
    fn offset_convention_is_not_flipped() {
        // Coefficient at offset +1 reads the next sample.
        let signal = [10.0, 20.0, 30.0, 40.0];
        let mut out = [0.0; 4];
        correlate_f64(&signal, &[0.0, 0.0, 1.0], Border::Zero, &mut out);
        assert_eq!(out, [20.0, 30.0, 40.0, 0.0]);
    }

    #[test]
    fn border_policies_differ_at_the_ends() {
        let signal = [1.0, 2.0, 3.0];
        let kernel = [1.0, 1.0, 1.0];

        let mut out = [0.0; 3];
        correlate_f64(&signal, &kernel, Border::Zero, &mut out);
        assert_eq!(out, [3.0, 6.0, 5.0]);

        correlate_f64(&signal, &kernel, Border::Clamp, &mut out);
        assert_eq!(out, [4.0, 6.0, 8.0]);

        correlate_f64(&signal, &kernel, Border::Reflect, &mut out);
        assert_eq!(out, [5.0, 6.0, 7.0]);
    }

    #[test]
    fn short_signal_falls_back_to_tap_loop() {
        let signal = [2.0];
        let mut out = [0.0];
        correlate_f64(&signal, &[0.5, 1.0, 0.5], Border::Clamp, &mut out);
        assert_relative_eq!(out[0], 4.0, epsilon = 1e-12);
    }

    #[test]
    fn rows_and_cols_are_transposes_of_each_other() {
        // 3x2 buffer; filtering rows of the buffer equals filtering columns
        // of its transpose.
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let transposed = [1.0, 4.0, 2.0, 5.0, 3.0, 6.0];
        let kernel = [0.25, 0.5, 0.25];

        let mut by_rows = [0.0; 6];
        correlate_rows_f64(&data, 3, 2, &kernel, Border::Reflect, &mut by_rows);

        let mut by_cols = [0.0; 6];
        correlate_cols_f64(&transposed, 2, 3, &kernel, Border::Reflect, &mut by_cols);

        for y in 0..2 {
            for x in 0..3 {
                assert_relative_eq!(by_rows[y * 3 + x], by_cols[x * 2 + y], epsilon = 1e-12);
            }
        }
    }
}
