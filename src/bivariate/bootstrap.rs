#[cfg(test)]
macro_rules! test {
    ($ty:ident) => {
        mod $ty {
            use approx::relative_eq;
            use quickcheck::quickcheck;
            use quickcheck::TestResult;

            use crate::bivariate::Data;
            use crate::rand_util::seeded;

            quickcheck! {
                fn means(size: u8, start: u8,
                         offset: u8, nresamples: u8, seed: u64) -> TestResult {
                    let size = size as usize;
                    let start = start as usize;
                    let offset = offset as usize;
                    let nresamples = nresamples as usize;
                    if let Some(x) = crate::test::vec::<$ty>(size, start) {
                        let y = crate::test::vec::<$ty>(size + offset, start + offset).unwrap();
                        let data = Data::new(&x[start..], &y[start + offset..]).unwrap();

                        let y_means = if nresamples > 0 {
                            data.bootstrap(nresamples, |d| d.y().mean(), &mut seeded(seed)).unwrap()
                        } else {
                            return TestResult::discard();
                        };

                        let y_min = data.y().min();
                        let y_max = data.y().max();

                        TestResult::from_bool(
                            // Computed the correct number of resamples
                            y_means.len() == nresamples &&
                            // No uninitialized values
                            y_means.iter().all(|&y| {
                                (y > y_min || relative_eq!(y, y_min)) &&
                                (y < y_max || relative_eq!(y, y_max))
                            })
                        )
                    } else {
                        TestResult::discard()
                    }
                }
            }

            quickcheck! {
                fn linear_fit(size: u8, nresamples: u8, seed: u64) -> TestResult {
                    let size = size as usize;
                    let nresamples = nresamples as usize;
                    if size < 2 || nresamples == 0 {
                        return TestResult::discard();
                    }

                    let x: Vec<$ty> = (0..size).map(|i| i as $ty).collect();
                    let y: Vec<$ty> = x.iter().map(|&x| 0.5 * x - 2.).collect();
                    let data = Data::new(&x, &y).unwrap();

                    let (slopes, intercepts) =
                        data.bootstrap_linear_fit(nresamples, &mut seeded(seed)).unwrap();

                    // Exact line; with 10+ points a resample with a single x value is
                    // vanishingly rare, every other resample refits the line
                    TestResult::from_bool(
                        slopes.len() == nresamples &&
                        intercepts.len() == nresamples &&
                        (size < 10 ||
                            slopes.iter().all(|&s| relative_eq!(s, 0.5, epsilon = 1e-3)) &&
                            intercepts.iter().all(|&b| relative_eq!(b, -2., epsilon = 1e-2)))
                    )
                }
            }
        }
    };
}

#[cfg(test)]
mod test {
    test!(f32);
    test!(f64);

    use approx::relative_eq;

    use crate::bivariate::Data;
    use crate::error::Error;
    use crate::rand_util::seeded;
    use crate::test::{Identity, Scripted};

    #[test]
    fn identity_draw_refits_the_data() {
        let xs = [1.0f64, 2.0, 3.0];
        let ys = [2.0f64, 4.0, 6.0];
        let data = Data::new(&xs, &ys).unwrap();

        let (slopes, intercepts) = data
            .bootstrap_linear_fit(50, &mut Identity::default())
            .unwrap();

        assert_eq!(slopes.len(), 50);
        assert!(slopes.iter().all(|&m| m == 2.0));
        assert!(intercepts.iter().all(|&b| b == 0.0));
    }

    #[test]
    fn small_samples_never_fail() {
        let xs = [1.0f64, 2.0, 3.0];
        let ys = [2.0f64, 4.0, 6.0];
        let data = Data::new(&xs, &ys).unwrap();

        for seed in 0..20 {
            let (slopes, intercepts) = data.bootstrap_linear_fit(1000, &mut seeded(seed)).unwrap();

            assert_eq!(slopes.len(), 1000);
            assert_eq!(intercepts.len(), 1000);
            // A resample with distinct x values refits `y = 2x`, one that drew a single
            // point `(c, 2c)` gets `y = x + c`
            assert!(slopes.iter().zip(intercepts.iter()).all(|(&m, &b)| {
                (relative_eq!(m, 2.0, epsilon = 1e-9) && relative_eq!(b, 0.0, epsilon = 1e-9))
                    || (m == 1.0 && [1.0, 2.0, 3.0].contains(&b))
            }));
        }

        let xs = [4.0f64, 9.0];
        let ys = [1.0f64, -1.0];
        let data = Data::new(&xs, &ys).unwrap();
        let (slopes, _) = data.bootstrap_linear_fit(200, &mut seeded(3)).unwrap();

        assert_eq!(slopes.len(), 200);
    }

    #[test]
    fn single_x_resample_uses_the_minimum_norm_line() {
        // Every draw picks index 0, so every resample is `[(2, 3), (2, 3)]`
        let xs = [2.0f64, 5.0];
        let ys = [3.0f64, 1.0];
        let data = Data::new(&xs, &ys).unwrap();

        let (slopes, intercepts) = data
            .bootstrap_linear_fit(10, &mut Scripted::new(vec![]))
            .unwrap();

        assert!(slopes.iter().all(|&m| m == 0.75));
        assert!(intercepts.iter().all(|&b| b == 1.5));
    }

    #[test]
    fn mismatched_lengths() {
        let xs = [1.0f64, 2.0, 3.0];
        let ys = [2.0f64, 4.0];

        assert!(matches!(
            Data::new(&xs, &ys),
            Err(Error::LengthMismatch { left: 3, right: 2 })
        ));
    }

    #[test]
    fn degenerate_input_fails_before_resampling() {
        let xs = [1.0f64, 1.0];
        let ys = [2.0f64, 4.0];
        let data = Data::new(&xs, &ys).unwrap();

        assert!(matches!(
            data.bootstrap_linear_fit(10, &mut seeded(0)),
            Err(Error::DegenerateFit)
        ));
        assert!(matches!(
            data.bootstrap_linear_fit(0, &mut seeded(0)),
            Err(Error::NoReplicates)
        ));
    }
}
