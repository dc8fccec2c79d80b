#[cfg(test)]
macro_rules! test {
    ($ty:ident) => {
        mod $ty {
            use approx::relative_eq;
            use quickcheck::quickcheck;
            use quickcheck::TestResult;

            use crate::rand_util::seeded;
            use crate::univariate::{self, Sample};

            quickcheck!{
                fn mean(size: u8, start: u8, nresamples: u8, seed: u64) -> TestResult {
                    let size = size as usize;
                    let start = start as usize;
                    let nresamples = nresamples as usize;
                    if let Some(v) = crate::test::vec::<$ty>(size, start) {
                        let sample = Sample::new(&v[start..]).unwrap();

                        let means = if nresamples > 0 {
                            sample.bootstrap(nresamples, |s| s.mean(), &mut seeded(seed)).unwrap()
                        } else {
                            return TestResult::discard();
                        };

                        let min = sample.min();
                        let max = sample.max();

                        TestResult::from_bool(
                            // Computed the correct number of resamples
                            means.len() == nresamples &&
                            // No uninitialized values
                            means.iter().all(|&x| {
                                (x > min || relative_eq!(x, min)) &&
                                (x < max || relative_eq!(x, max))
                            })
                        )
                    } else {
                        TestResult::discard()
                    }
                }
            }

            quickcheck!{
                fn two_sample(
                    a_size: u8, a_start: u8,
                    b_size: u8, b_start: u8,
                    nresamples: u8, seed: u64
                ) -> TestResult {
                    let a_size = a_size as usize;
                    let b_size = b_size as usize;
                    let a_start = a_start as usize;
                    let b_start = b_start as usize;
                    let nresamples = nresamples as usize;
                    if let (Some(a), Some(b)) =
                        (crate::test::vec::<$ty>(a_size, a_start), crate::test::vec::<$ty>(b_size, b_start))
                    {
                        let a = Sample::new(&a[a_start..]).unwrap();
                        let b = Sample::new(&b[b_start..]).unwrap();

                        let distribution = if nresamples > 0 {
                            univariate::bootstrap(
                                a, b, nresamples, |a, b| a.mean() - b.mean(), &mut seeded(seed)
                            ).unwrap()
                        } else {
                            return TestResult::discard();
                        };

                        let min = <$ty>::min(a.min() - b.max(), b.min() - a.max());
                        let max = <$ty>::max(a.max() - b.min(), b.max() - a.min());

                        // Computed the correct number of resamples
                        let pass = distribution.len() == nresamples &&
                            // No uninitialized values
                            distribution.iter().all(|&x| {
                                (x > min || relative_eq!(x, min)) &&
                                (x < max || relative_eq!(x, max))
                            });

                        if !pass {
                            println!("A: {:?} (len={})", a.as_ref(), a.len());
                            println!("B: {:?} (len={})", b.as_ref(), b.len());
                            println!("Dist: {:?} (len={})", distribution.as_ref(), distribution.len());
                            println!("Min: {}, Max: {}, nresamples: {}",
                                min, max, nresamples);
                        }

                        TestResult::from_bool(pass)
                    } else {
                        TestResult::discard()
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    test!(f32);
    test!(f64);

    use crate::error::Error;
    use crate::rand_util::seeded;
    use crate::test::Identity;
    use crate::univariate::Sample;

    #[test]
    fn identity_draw_is_constant() {
        let sample = Sample::new(&[1.0f64, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let means = sample
            .bootstrap(100, |s| s.mean(), &mut Identity::default())
            .unwrap();

        assert_eq!(means.len(), 100);
        assert!(means.iter().all(|&m| m == 3.0));
    }

    #[test]
    fn single_replicate() {
        let sample = Sample::new(&[1.0f64, 2.0]).unwrap();
        let means = sample.bootstrap(1, |s| s.mean(), &mut seeded(5)).unwrap();

        assert_eq!(means.len(), 1);
    }

    #[test]
    fn zero_replicates_is_invalid() {
        let sample = Sample::new(&[1.0f64, 2.0]).unwrap();

        assert!(matches!(
            sample.bootstrap(0, |s| s.mean(), &mut seeded(5)),
            Err(Error::NoReplicates)
        ));
    }

    #[test]
    fn nan_statistic_aborts() {
        let sample = Sample::new(&[1.0f64, 2.0]).unwrap();

        assert!(matches!(
            sample.bootstrap(10, |_| f64::NAN, &mut seeded(5)),
            Err(Error::NotANumberReplicate { index: 0 })
        ));
    }

    #[test]
    fn same_seed_same_distribution() {
        let v: Vec<f64> = (0..50).map(|i| (i * i % 17) as f64).collect();
        let sample = Sample::new(&v).unwrap();

        let first = sample.bootstrap(1000, |s| s.mean(), &mut seeded(9)).unwrap();
        let second = sample.bootstrap(1000, |s| s.mean(), &mut seeded(9)).unwrap();

        assert_eq!(first.as_ref(), second.as_ref());
    }
}
