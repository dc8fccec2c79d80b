//! Empirical cumulative distribution function

use crate::error::Result;
use crate::float::Float;
use crate::univariate::Sample;

/// The empirical cumulative distribution function of a sample
///
/// `x()` holds the sample values sorted in ascending order, `y()` holds `1/n, 2/n, ..., n/n`,
/// the proportion of the sample at or below each of the sorted values.
#[derive(Clone, Debug)]
pub struct Ecdf<A> {
    xs: Box<[A]>,
    ys: Box<[A]>,
}

impl<A> Ecdf<A>
where
    A: Float,
{
    /// Builds the ECDF of `sample`
    ///
    /// - Time: `O(N log N) where N = length`
    /// - Memory: `O(length)`
    pub fn new(sample: &Sample<A>) -> Ecdf<A> {
        let xs: Box<[A]> = sample.percentiles().as_slice().into();
        let n = A::cast(xs.len());
        let ys = (1..=xs.len()).map(|i| A::cast(i) / n).collect();

        Ecdf { xs, ys }
    }

    /// Returns the number of steps
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Never true, a sample has at least one data point
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Sorted sample values
    pub fn x(&self) -> &[A] {
        &self.xs
    }

    /// Cumulative proportions
    pub fn y(&self) -> &[A] {
        &self.ys
    }

    /// Iterate over the `(x, y)` points
    pub fn iter(&self) -> impl Iterator<Item = (A, A)> + '_ {
        self.xs.iter().cloned().zip(self.ys.iter().cloned())
    }

    /// Returns the fraction of the sample that is at or below `t`
    ///
    /// - Time: `O(log length)`
    pub fn eval(&self, t: A) -> A {
        let below = self.xs.partition_point(|&x| x <= t);

        A::cast(below) / A::cast(self.xs.len())
    }

    /// Consumes the ECDF, returning the sorted values and cumulative proportions
    pub fn into_parts(self) -> (Vec<A>, Vec<A>) {
        (self.xs.into_vec(), self.ys.into_vec())
    }
}

/// Computes the ECDF of the data points in `slice`
///
/// Fails with `EmptySample` if `slice` is empty and with `NotANumber` if it contains a `NaN`
pub fn ecdf<A>(slice: &[A]) -> Result<Ecdf<A>>
where
    A: Float,
{
    Ok(Sample::new(slice)?.ecdf())
}

#[cfg(test)]
macro_rules! test {
    ($ty:ident) => {
        mod $ty {
            use approx::relative_eq;
            use quickcheck::quickcheck;
            use quickcheck::TestResult;

            use crate::univariate::ecdf::ecdf;

            quickcheck! {
                fn sorted_and_ends_at_one(size: u8, start: u8) -> TestResult {
                    let size = size as usize;
                    let start = start as usize;
                    if let Some(v) = crate::test::vec::<$ty>(size, start) {
                        let ecdf = ecdf(&v[start..]).unwrap();
                        let (xs, ys) = (ecdf.x(), ecdf.y());

                        TestResult::from_bool(
                            xs.len() == size - start &&
                            ys.len() == size - start &&
                            xs.windows(2).all(|w| w[0] <= w[1]) &&
                            ys.windows(2).all(|w| w[0] <= w[1]) &&
                            relative_eq!(ys[ys.len() - 1], 1.)
                        )
                    } else {
                        TestResult::discard()
                    }
                }
            }
        }
    };
}
