//! Univariate analysis

mod bootstrap;
mod percentiles;
mod permutation;
mod resamples;
mod sample;

pub mod ecdf;

use crate::distribution::Distribution;
use crate::error::{Error, Result};
use crate::float::Float;
use crate::rand_util::{fan_out, RandomSource};

pub use self::ecdf::{ecdf, Ecdf};
pub use self::percentiles::Percentiles;
pub use self::permutation::{permutation_test, Permutations};
pub use self::resamples::Resamples;
pub use self::sample::Sample;

/// Maps boolean observations to `1` (true) and `0` (false)
///
/// The mean of the result is the fraction of `true` observations.
pub fn indicators<A>(flags: &[bool]) -> Vec<A>
where
    A: Float,
{
    flags
        .iter()
        .map(|&flag| A::cast(if flag { 1 } else { 0 }))
        .collect()
}

/// Performs an independent two-sample bootstrap
///
/// Every replicate applies `statistic` to one resample of `a` and one resample of `b`, each
/// drawn with replacement from its own sample.
///
/// - Multi-threaded
/// - Time: `O(nresamples)`
/// - Memory: `O(nresamples)`
pub fn bootstrap<A, S, R>(
    a: &Sample<A>,
    b: &Sample<A>,
    nresamples: usize,
    statistic: S,
    rng: &mut R,
) -> Result<Distribution<A>>
where
    A: Float,
    S: Fn(&Sample<A>, &Sample<A>) -> A + Sync,
    R: RandomSource + Send,
{
    if nresamples == 0 {
        return Err(Error::NoReplicates);
    }

    log::debug!(
        "Drawing {} two-sample bootstrap replicates of {} and {} data points",
        nresamples,
        a.len(),
        b.len()
    );

    let replicates = fan_out(
        rng,
        nresamples,
        |mut stream| {
            let other = stream.fork();

            (Resamples::new(a, stream), Resamples::new(b, other))
        },
        |(a_resamples, b_resamples)| statistic(a_resamples.next(), b_resamples.next()),
    );

    Distribution::from_replicates(replicates)
}
