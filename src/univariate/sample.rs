use std::{mem, ops};

use crate::distribution::Distribution;
use crate::error::{Error, Result};
use crate::float::Float;
use crate::rand_util::{fan_out, RandomSource};
use crate::univariate::{Ecdf, Percentiles, Resamples};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// A collection of data points drawn from a population
///
/// Invariants:
///
/// - The sample contains at least 1 data point
/// - The sample contains no `NaN`s
#[repr(transparent)]
pub struct Sample<A>([A]);

impl<A> Sample<A>
where
    A: Float,
{
    /// Creates a new sample from an existing slice
    ///
    /// Fails with `EmptySample` if `slice` is empty and with `NotANumber` if it contains a `NaN`
    pub fn new(slice: &[A]) -> Result<&Sample<A>> {
        if slice.is_empty() {
            return Err(Error::EmptySample);
        }

        if let Some(index) = slice.iter().position(|x| x.is_nan()) {
            return Err(Error::NotANumber { index });
        }

        Ok(Sample::new_unchecked(slice))
    }

    /// Views `slice` as a sample without checking the invariants
    pub(crate) fn new_unchecked(slice: &[A]) -> &Sample<A> {
        debug_assert!(!slice.is_empty());

        unsafe { mem::transmute(slice) }
    }

    /// Returns the biggest element in the sample
    ///
    /// - Time: `O(length)`
    pub fn max(&self) -> A {
        let mut elems = self.iter();

        match elems.next() {
            Some(&head) => elems.fold(head, |a, &b| a.max(b)),
            // NB `unreachable!` because `Sample` is guaranteed to have at least one data point
            None => unreachable!(),
        }
    }

    /// Returns the arithmetic average of the sample
    ///
    /// - Time: `O(length)`
    pub fn mean(&self) -> A {
        let n = self.len();

        self.sum() / A::cast(n)
    }

    /// Returns the smallest element in the sample
    ///
    /// - Time: `O(length)`
    pub fn min(&self) -> A {
        let mut elems = self.iter();

        match elems.next() {
            Some(&elem) => elems.fold(elem, |a, &b| a.min(b)),
            None => unreachable!(),
        }
    }

    /// Returns the 50th percentile
    ///
    /// - Time: `O(N log N) where N = length`
    pub fn median(&self) -> A {
        self.percentiles().median()
    }

    /// Returns a "view" into the percentiles of the sample
    ///
    /// This "view" makes consecutive computations of percentiles much faster (`O(1)`)
    ///
    /// - Time: `O(N log N) where N = length`
    /// - Memory: `O(length)`
    pub fn percentiles(&self) -> Percentiles<A> {
        use std::cmp::Ordering;

        // NB This function assumes that there are no `NaN`s in the sample
        fn cmp<T>(a: &T, b: &T) -> Ordering
        where
            T: PartialOrd,
        {
            match a.partial_cmp(b) {
                Some(o) => o,
                // Arbitrary way to handle NaNs that should never happen
                None => Ordering::Equal,
            }
        }

        let mut v = self.to_vec().into_boxed_slice();
        #[cfg(feature = "rayon")]
        v.par_sort_unstable_by(cmp);
        #[cfg(not(feature = "rayon"))]
        v.sort_unstable_by(cmp);

        Percentiles::from_sorted(v)
    }

    /// Returns the empirical cumulative distribution function of the sample
    ///
    /// - Time: `O(N log N) where N = length`
    pub fn ecdf(&self) -> Ecdf<A> {
        Ecdf::new(self)
    }

    /// Returns a copy of the sample translated so that its mean becomes `mean`
    ///
    /// Used to simulate the null hypothesis "both groups share the same mean"
    pub fn shifted(&self, mean: A) -> Vec<A> {
        let own = self.mean();

        self.iter().map(|&x| x - own + mean).collect()
    }

    /// Returns the standard deviation of the sample
    ///
    /// The `mean` can be optionally passed along to speed up (2X) the computation
    ///
    /// - Time: `O(length)`
    pub fn std_dev(&self, mean: Option<A>) -> A {
        self.var(mean).sqrt()
    }

    /// Returns the sum of all the elements of the sample
    ///
    /// - Time: `O(length)`
    pub fn sum(&self) -> A {
        crate::sum(self)
    }

    /// Returns the (unbiased) variance of the sample, zero for a single data point
    ///
    /// The `mean` can be optionally passed along to speed up (2X) the computation
    ///
    /// - Time: `O(length)`
    pub fn var(&self, mean: Option<A>) -> A {
        use std::ops::Add;

        if self.len() == 1 {
            return A::cast(0);
        }

        let mean = mean.unwrap_or_else(|| self.mean());
        let sum = self
            .iter()
            .map(|&x| (x - mean).powi(2))
            .fold(A::cast(0), Add::add);

        sum / A::cast(self.len() - 1)
    }

    /// Returns the bootstrap distribution of the parameter estimated by the 1-sample statistic
    ///
    /// Each replicate applies `statistic` to a resample, drawn with replacement, of the same
    /// length as this sample.
    ///
    /// - Multi-threaded
    /// - Time: `O(nresamples)`
    /// - Memory: `O(nresamples)`
    pub fn bootstrap<S, R>(
        &self,
        nresamples: usize,
        statistic: S,
        rng: &mut R,
    ) -> Result<Distribution<A>>
    where
        S: Fn(&Sample<A>) -> A + Sync,
        R: RandomSource + Send,
    {
        if nresamples == 0 {
            return Err(Error::NoReplicates);
        }

        log::debug!(
            "Drawing {} bootstrap replicates from a sample of {}",
            nresamples,
            self.len()
        );

        let replicates = fan_out(
            rng,
            nresamples,
            |stream| Resamples::new(self, stream),
            |resamples| statistic(resamples.next()),
        );

        Distribution::from_replicates(replicates)
    }
}

impl<A> ops::Deref for Sample<A> {
    type Target = [A];

    fn deref(&self) -> &[A] {
        &self.0
    }
}

impl<A> AsRef<[A]> for Sample<A> {
    fn as_ref(&self) -> &[A] {
        &self.0
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use crate::error::Error;
    use crate::univariate::Sample;

    #[test]
    fn rejects_empty() {
        let v: Vec<f64> = vec![];

        assert!(matches!(Sample::new(&v), Err(Error::EmptySample)));
    }

    #[test]
    fn rejects_nan() {
        let v = [1.0, 2.0, f64::NAN];

        assert!(matches!(
            Sample::new(&v),
            Err(Error::NotANumber { index: 2 })
        ));
    }

    #[test]
    fn single_point() {
        let v = [4.0f64];
        let s = Sample::new(&v).unwrap();

        assert_relative_eq!(s.mean(), 4.0);
        assert_relative_eq!(s.median(), 4.0);
        assert_relative_eq!(s.var(None), 0.0);
    }

    #[test]
    fn moments() {
        let v = [2.0f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let s = Sample::new(&v).unwrap();

        assert_relative_eq!(s.sum(), 40.0);
        assert_relative_eq!(s.mean(), 5.0);
        assert_relative_eq!(s.var(None), 32.0 / 7.0);
        assert_relative_eq!(s.min(), 2.0);
        assert_relative_eq!(s.max(), 9.0);
        assert_relative_eq!(s.median(), 4.5);
    }

    #[test]
    fn shifted_moves_the_mean_only() {
        let v = [1.0f64, 2.0, 6.0];
        let s = Sample::new(&v).unwrap();
        let shifted = s.shifted(10.0);
        let shifted = Sample::new(&shifted).unwrap();

        assert_relative_eq!(shifted.mean(), 10.0);
        assert_relative_eq!(shifted.var(None), s.var(None), epsilon = 1e-12);
    }
}
