//! Permutation test

use crate::distribution::{Comparison, Distribution};
use crate::error::{Error, Result};
use crate::float::Float;
use crate::rand_util::{fan_out, RandomSource};
use crate::univariate::Sample;

/// Permutation draws of two samples
///
/// The two samples are pooled once; every call to `next` shuffles the pool and splits it back
/// into groups with the original lengths. The pooled composition never changes, only the
/// group assignment does.
pub struct Permutations<A, R> {
    rng: R,
    pooled: Vec<A>,
    stage: Vec<A>,
    n_a: usize,
}

#[allow(clippy::should_implement_trait)]
impl<A, R> Permutations<A, R>
where
    A: Float,
    R: RandomSource,
{
    pub fn new(a: &Sample<A>, b: &Sample<A>, rng: R) -> Permutations<A, R> {
        let mut pooled = Vec::with_capacity(a.len() + b.len());
        pooled.extend_from_slice(a);
        pooled.extend_from_slice(b);

        Permutations {
            rng,
            stage: pooled.clone(),
            pooled,
            n_a: a.len(),
        }
    }

    pub fn next(&mut self) -> (&Sample<A>, &Sample<A>) {
        // Each draw permutes the original pooled order
        self.stage.copy_from_slice(&self.pooled);
        self.rng.shuffle(&mut self.stage);

        let (a, b) = self.stage.split_at(self.n_a);

        (Sample::new_unchecked(a), Sample::new_unchecked(b))
    }
}

/// Performs a two-sample permutation test
///
/// Draws `nresamples` permutations of the pooled samples, applies `statistic` to each split
/// and returns the fraction of replicates that are at least as extreme as `observed`
/// (according to `comparison`), together with the replicate distribution.
///
/// A p-value of zero means no replicate reached `observed`: the event is rarer than
/// `1 / nresamples`, not impossible.
///
/// - Multi-threaded
/// - Time: `O(nresamples * (a.len() + b.len()))`
/// - Memory: `O(nresamples)`
pub fn permutation_test<A, S, R>(
    a: &Sample<A>,
    b: &Sample<A>,
    statistic: S,
    nresamples: usize,
    observed: A,
    comparison: Comparison,
    rng: &mut R,
) -> Result<(A, Distribution<A>)>
where
    A: Float,
    S: Fn(&Sample<A>, &Sample<A>) -> A + Sync,
    R: RandomSource + Send,
{
    if nresamples == 0 {
        return Err(Error::NoReplicates);
    }

    log::debug!(
        "Drawing {} permutation replicates of {} + {} data points",
        nresamples,
        a.len(),
        b.len()
    );

    let replicates = fan_out(
        rng,
        nresamples,
        |stream| Permutations::new(a, b, stream),
        |permutations| {
            let (a, b) = permutations.next();

            statistic(a, b)
        },
    );
    let distribution = Distribution::from_replicates(replicates)?;

    Ok((distribution.p_value(observed, comparison), distribution))
}

#[cfg(test)]
macro_rules! test {
    ($ty:ident) => {
        mod $ty {
            use approx::relative_eq;
            use quickcheck::quickcheck;
            use quickcheck::TestResult;

            use crate::distribution::Comparison;
            use crate::rand_util::seeded;
            use crate::univariate::{permutation_test, Permutations, Sample};

            quickcheck! {
                fn preserves_pooled_totals(
                    a_size: u8, b_size: u8, seed: u64
                ) -> TestResult {
                    if let (Some(a), Some(b)) = (
                        crate::test::vec::<$ty>(a_size as usize, 0),
                        crate::test::vec::<$ty>(b_size as usize, 0),
                    ) {
                        let a = Sample::new(&a).unwrap();
                        let b = Sample::new(&b).unwrap();
                        let total = a.sum() + b.sum();
                        let mut permutations = Permutations::new(a, b, seeded(seed));

                        TestResult::from_bool((0..16).all(|_| {
                            let (pa, pb) = permutations.next();

                            pa.len() == a.len() &&
                                pb.len() == b.len() &&
                                relative_eq!(
                                    pa.sum() + pb.sum(),
                                    total,
                                    epsilon = 1e-3,
                                    max_relative = 1e-3
                                )
                        }))
                    } else {
                        TestResult::discard()
                    }
                }
            }

            quickcheck! {
                fn distribution_length(
                    a_size: u8, b_size: u8, nresamples: u8, seed: u64
                ) -> TestResult {
                    let nresamples = nresamples as usize;
                    if let (Some(a), Some(b)) = (
                        crate::test::vec::<$ty>(a_size as usize, 0),
                        crate::test::vec::<$ty>(b_size as usize, 0),
                    ) {
                        if nresamples == 0 {
                            return TestResult::discard();
                        }

                        let a = Sample::new(&a).unwrap();
                        let b = Sample::new(&b).unwrap();
                        let (p, distribution) = permutation_test(
                            a,
                            b,
                            |a, b| b.mean() - a.mean(),
                            nresamples,
                            b.mean() - a.mean(),
                            Comparison::GreaterOrEqual,
                            &mut seeded(seed),
                        )
                        .unwrap();

                        TestResult::from_bool(
                            distribution.len() == nresamples && p >= 0. && p <= 1.
                        )
                    } else {
                        TestResult::discard()
                    }
                }
            }
        }
    };
}
