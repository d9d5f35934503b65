use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ss_kernel::{DerivativeKernel, KernelParams};

fn bench_generate(c: &mut Criterion) {
    let smooth = KernelParams {
        max_kernel_width: 101,
        ..KernelParams::smoothing(4.0).with_max_error(1e-4)
    };
    c.bench_function("generate_order0_var4", |b| {
        b.iter(|| {
            let k = DerivativeKernel::generate(black_box(&smooth)).expect("valid params");
            black_box(k.coefficients.len());
        });
    });

    let second = KernelParams {
        normalize_across_scale: true,
        max_kernel_width: 101,
        ..KernelParams::derivative(16.0, 2).with_max_error(1e-4)
    };
    c.bench_function("generate_order2_var16_normalized", |b| {
        b.iter(|| {
            let k = DerivativeKernel::generate(black_box(&second)).expect("valid params");
            black_box(k.coefficients.len());
        });
    });
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
