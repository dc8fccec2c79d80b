use criterion::{criterion_group, criterion_main};


macro_rules! bench {
    ($ty:ident) => {
        pub mod $ty {
            use criterion::Criterion;
            use resample_stats::rand_util::seeded;
            use resample_stats::{Data, Sample};

            const NRESAMPLES: usize = 100_000;
            const SAMPLE_SIZE: usize = 100;

            pub fn mean(c: &mut Criterion) {
                let v = crate::common_bench::vec_sized::<$ty>(SAMPLE_SIZE);
                let sample = Sample::new(&v).unwrap();

                c.bench_function(
                    &format!("univariate_bootstrap_mean_{}", stringify!($ty)),
                    |b| b.iter(|| sample.bootstrap(NRESAMPLES, |s| s.mean(), &mut seeded(0))),
                );
            }

            pub fn linear_fit(c: &mut Criterion) {
                let x = crate::common_bench::vec_sized::<$ty>(SAMPLE_SIZE);
                let y = crate::common_bench::vec_sized::<$ty>(SAMPLE_SIZE);
                let data = Data::new(&x, &y).unwrap();

                c.bench_function(
                    &format!("bivariate_bootstrap_linear_fit_{}", stringify!($ty)),
                    |b| b.iter(|| data.bootstrap_linear_fit(NRESAMPLES, &mut seeded(0))),
                );
            }
        }
    };
}

mod bench {
    bench!(f32);
    bench!(f64);
}

criterion_group!(
    name = benches;
    config = common_bench::reduced_samples();
    targets = bench::f32::mean, bench::f32::linear_fit,
              bench::f64::mean, bench::f64::linear_fit);
criterion_main!(benches);
