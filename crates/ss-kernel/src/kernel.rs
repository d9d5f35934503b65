use tracing::warn;

use crate::bessel::{X_MAX, bessel_i, bessel_i0};
use crate::error::Error;
use crate::params::KernelParams;

/// A generated Gaussian-derivative coefficient vector.
///
/// `coefficients` has odd length `2 * radius + 1` with the spatial center
/// at index `radius`; the coefficient at index `radius + n` weights the
/// sample at offset `n`. Order-0 kernels sum to 1 and are symmetric;
/// order-`m` kernels sum to ~0 and are symmetric for even `m`,
/// antisymmetric for odd `m`.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivativeKernel {
    pub coefficients: Vec<f64>,
    pub radius: usize,
    /// True when the width cap discarded part of the mathematically
    /// required support. The kernel is still renormalized and usable.
    pub truncated: bool,
}

impl DerivativeKernel {
    /// Generates the kernel for `params`.
    ///
    /// Pure function: no state is shared between calls, and identical
    /// parameters produce bit-identical vectors. Malformed parameters are
    /// rejected up front; truncation by the width cap is non-fatal (one
    /// warning, `truncated` flag set).
    pub fn generate(params: &KernelParams) -> Result<Self, Error> {
        params.validate()?;

        let t = (params.variance / (params.spacing * params.spacing)).min(X_MAX);

        // The width cap binds the final vector. Each derivative pass grows
        // the radius by 1, so the order-0 part gets the remaining budget.
        let cap_radius =
            ((params.max_kernel_width - 1) / 2).saturating_sub(params.order as usize);
        let (half, truncated) = gaussian_half_kernel(t, params.clamped_max_error(), cap_radius);
        if truncated {
            warn!(
                max_kernel_width = params.max_kernel_width,
                variance = params.variance,
                "kernel support exceeds the width cap; truncating and renormalizing"
            );
        }

        let mut coefficients = mirror(&half);
        coefficients = differentiate(coefficients, params.order, params.spacing);

        let factor = normalization_factor(params);
        if factor != 1.0 {
            for c in &mut coefficients {
                *c *= factor;
            }
        }

        let radius = coefficients.len() / 2;
        Ok(Self {
            coefficients,
            radius,
            truncated,
        })
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Length is always at least 1.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Coefficient at the spatial center (offset 0).
    pub fn center(&self) -> f64 {
        self.coefficients[self.radius]
    }

    pub fn sum(&self) -> f64 {
        self.coefficients.iter().sum()
    }
}

/// One-sided order-0 kernel `[c_0, c_1, ..., c_r]`, `c_n = exp(-t) I_n(t)`,
/// grown until the omitted tail mass is within `max_error` or `cap_radius`
/// stops it. Renormalized so the full symmetric kernel sums to exactly 1.
fn gaussian_half_kernel(t: f64, max_error: f64, cap_radius: usize) -> (Vec<f64>, bool) {
    if t == 0.0 {
        return (vec![1.0], false);
    }

    let et = (-t).exp();

    let mut half = vec![et * bessel_i0(t)];
    let mut sum = half[0];
    let mut truncated = false;
    while 1.0 - sum > max_error {
        if half.len() > cap_radius {
            truncated = true;
            break;
        }
        let c = et * bessel_i(half.len() as i32, t);
        sum += 2.0 * c;
        half.push(c);
    }

    // The truncated sum is below 1; downstream moment invariants need the
    // finite kernel itself to have unit mass.
    let total = half[0] + 2.0 * half[1..].iter().sum::<f64>();
    for c in &mut half {
        *c /= total;
    }
    (half, truncated)
}

/// Expands a one-sided kernel into the full symmetric vector
/// `[c_r, ..., c_1, c_0, c_1, ..., c_r]`.
fn mirror(half: &[f64]) -> Vec<f64> {
    let mut coeff = Vec::with_capacity(2 * half.len() - 1);
    coeff.extend(half.iter().rev());
    coeff.extend_from_slice(&half[1..]);
    coeff
}

/// Convolves `order` times with the central-difference operator
/// `[-1/(2h), 0, +1/(2h)]`; each pass grows the radius by 1. The operator
/// annihilates constants by construction, so the result keeps a vanishing
/// zeroth moment at every order.
fn differentiate(mut coeff: Vec<f64>, order: u32, spacing: f64) -> Vec<f64> {
    let a = 1.0 / (2.0 * spacing);
    for _ in 0..order {
        let mut next = vec![0.0; coeff.len() + 2];
        for (i, &c) in coeff.iter().enumerate() {
            next[i] -= a * c;
            next[i + 2] += a * c;
        }
        coeff = next;
    }
    coeff
}

/// The two multiplicative normalization regimes. Both are identity at
/// order 0 and never touch length, symmetry, or truncation.
fn normalization_factor(params: &KernelParams) -> f64 {
    if params.order == 0 {
        return 1.0;
    }
    let m = f64::from(params.order);
    let mut factor = 1.0;
    if params.normalize_across_scale {
        factor *= params.variance.powf(m * params.exponents.scale);
    }
    if params.gamma != 1.0 {
        let t = params.variance / (params.spacing * params.spacing);
        factor *= t.powf(m * (params.gamma - 1.0) * params.exponents.gamma_exp);
    }
    factor
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::DerivativeKernel;
    use crate::bessel::bessel_i0;
    use crate::error::Error;
    use crate::params::KernelParams;

    fn generate(params: &KernelParams) -> DerivativeKernel {
        DerivativeKernel::generate(params).expect("valid parameters")
    }

    #[test]
    fn order0_has_unit_sum_and_symmetry() {
        for &variance in &[0.25, 1.0, 2.0, 6.5] {
            let k = generate(&KernelParams::smoothing(variance));
            assert_eq!(k.len() % 2, 1);
            assert_relative_eq!(k.sum(), 1.0, epsilon = 1e-12);
            for i in 0..=k.radius {
                assert_eq!(
                    k.coefficients[k.radius + i],
                    k.coefficients[k.radius - i]
                );
            }
        }
    }

    #[test]
    fn unit_variance_matches_discrete_gaussian_values() {
        // t = 1: raw center exp(-1) * I0(1) ~= 0.4658 before renormalization,
        // radius 3 at max_error = 0.01, center ~= 0.46680 after.
        let raw_center = (-1.0f64).exp() * bessel_i0(1.0);
        assert_relative_eq!(raw_center, 0.465_76, epsilon = 1e-4);

        let params = KernelParams::smoothing(1.0).with_max_error(0.01);
        let k = generate(&params);
        assert_eq!(k.len(), 7);
        assert_relative_eq!(k.sum(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(k.center(), 0.466_80, epsilon = 1e-4);
    }

    #[test]
    fn zero_variance_degenerates_to_identity() {
        for &max_error in &[0.5, 0.01, 1e-5] {
            let params = KernelParams::smoothing(0.0).with_max_error(max_error);
            let k = generate(&params);
            assert_eq!(k.coefficients, vec![1.0]);
            assert_eq!(k.radius, 0);
            assert!(!k.truncated);
        }
    }

    #[test]
    fn odd_order_is_antisymmetric_with_zero_sum() {
        let k = generate(&KernelParams::derivative(1.0, 1));
        assert_eq!(k.center(), 0.0);
        assert!(k.sum().abs() < 1e-12);
        for i in 1..=k.radius {
            assert_eq!(k.coefficients[k.radius + i], -k.coefficients[k.radius - i]);
        }
        // Positive response to an increasing signal.
        assert!(k.coefficients[k.radius + 1] > 0.0);
    }

    #[test]
    fn even_order_is_symmetric_with_zero_sum() {
        let k = generate(&KernelParams::derivative(2.0, 2));
        assert!(k.sum().abs() < 1e-12);
        for i in 1..=k.radius {
            assert_eq!(k.coefficients[k.radius + i], k.coefficients[k.radius - i]);
        }
    }

    #[test]
    fn derivative_grows_radius_by_order() {
        let smooth = generate(&KernelParams::smoothing(1.5));
        for order in 1..4 {
            let k = generate(&KernelParams::derivative(1.5, order));
            assert_eq!(k.len(), smooth.len() + 2 * order as usize);
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let params = KernelParams {
            variance: 3.7,
            order: 2,
            gamma: 0.75,
            normalize_across_scale: true,
            ..KernelParams::default()
        };
        let a = generate(&params);
        let b = generate(&params);
        assert_eq!(a.coefficients, b.coefficients);
    }

    #[test]
    fn width_cap_truncates_and_renormalizes() {
        let params = KernelParams {
            max_kernel_width: 5,
            ..KernelParams::smoothing(10.0).with_max_error(1e-5)
        };
        let k = generate(&params);
        assert!(k.truncated);
        assert_eq!(k.len(), 5);
        assert_relative_eq!(k.sum(), 1.0, epsilon = 1e-12);

        // Even caps round down to the nearest odd width.
        let params = KernelParams {
            max_kernel_width: 6,
            ..KernelParams::smoothing(10.0).with_max_error(1e-5)
        };
        let k = generate(&params);
        assert!(k.truncated);
        assert_eq!(k.len(), 5);
    }

    #[test]
    fn uncapped_kernel_is_not_flagged() {
        let params = KernelParams {
            max_kernel_width: 101,
            ..KernelParams::smoothing(1.0)
        };
        assert!(!generate(&params).truncated);
    }

    #[test]
    fn scale_normalization_scales_by_variance_power() {
        let plain = generate(&KernelParams::derivative(4.0, 1));
        let normalized = generate(&KernelParams {
            normalize_across_scale: true,
            ..KernelParams::derivative(4.0, 1)
        });
        // variance^(order * 0.5) = 2
        for (n, p) in normalized.coefficients.iter().zip(&plain.coefficients) {
            assert_relative_eq!(*n, 2.0 * p, max_relative = 1e-12);
        }
    }

    #[test]
    fn gamma_one_is_identity_and_gamma_zero_unscales() {
        let plain = generate(&KernelParams::derivative(4.0, 1));
        let same = generate(&KernelParams {
            gamma: 1.0,
            ..KernelParams::derivative(4.0, 1)
        });
        assert_eq!(plain.coefficients, same.coefficients);

        // t = 4, factor t^(1 * (0 - 1) * 0.5) = 0.5
        let down = generate(&KernelParams {
            gamma: 0.0,
            ..KernelParams::derivative(4.0, 1)
        });
        for (d, p) in down.coefficients.iter().zip(&plain.coefficients) {
            assert_relative_eq!(*d, 0.5 * p, max_relative = 1e-12);
        }
    }

    #[test]
    fn normalization_is_identity_at_order_zero() {
        let plain = generate(&KernelParams::smoothing(2.0));
        let normalized = generate(&KernelParams {
            normalize_across_scale: true,
            gamma: 0.25,
            ..KernelParams::smoothing(2.0)
        });
        assert_eq!(plain.coefficients, normalized.coefficients);
    }

    #[test]
    fn truncated_derivative_kernel_respects_the_cap() {
        let params = KernelParams {
            max_kernel_width: 9,
            ..KernelParams::derivative(10.0, 1).with_max_error(1e-5)
        };
        let k = generate(&params);
        assert!(k.truncated);
        assert_eq!(k.len(), 9);
        assert!(k.sum().abs() < 1e-12);
    }

    #[test]
    fn caps_below_the_minimal_derivative_width_are_rejected() {
        // No order-2 kernel is shorter than 5 elements, so a cap of 3 can
        // never be honored and must be refused up front.
        let params = KernelParams {
            max_kernel_width: 3,
            ..KernelParams::derivative(1.0, 2)
        };
        assert_eq!(
            DerivativeKernel::generate(&params),
            Err(Error::KernelWidthBelowOrder {
                max_kernel_width: 3,
                order: 2,
            })
        );

        // The smallest admissible cap yields exactly the minimal kernel.
        let params = KernelParams {
            max_kernel_width: 5,
            ..KernelParams::derivative(1.0, 2)
        };
        let k = generate(&params);
        assert!(k.truncated);
        assert_eq!(k.len(), 5);
    }

    #[test]
    fn rejects_malformed_parameters() {
        let p = KernelParams {
            variance: f64::INFINITY,
            ..KernelParams::default()
        };
        assert!(DerivativeKernel::generate(&p).is_err());
    }
}
