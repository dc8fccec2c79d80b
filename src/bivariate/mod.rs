//! Bivariate analysis

mod bootstrap;
pub mod regression;
mod resamples;

use crate::bivariate::regression::StraightLine;
use crate::distribution::Distribution;
use crate::error::{Error, Result};
use crate::float::Float;
use crate::rand_util::{fan_out, RandomSource};
use crate::univariate::Sample;

pub use self::resamples::Resamples;

/// Bivariate `(X, Y)` data, paired by index
///
/// Invariants:
///
/// - No `NaN`s in the data
/// - At least one data point in the set
/// - As many `X`s as `Y`s
pub struct Data<'a, X, Y>(&'a [X], &'a [Y]);

impl<'a, X, Y> Copy for Data<'a, X, Y> {}

#[allow(clippy::expl_impl_clone_on_copy)]
impl<'a, X, Y> Clone for Data<'a, X, Y> {
    fn clone(&self) -> Data<'a, X, Y> {
        *self
    }
}

impl<'a, X, Y> Data<'a, X, Y> {
    /// Returns the length of the data set
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true, see the invariants
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the data set
    pub fn iter(&self) -> Pairs<'a, X, Y> {
        Pairs {
            data: *self,
            state: 0,
        }
    }
}

impl<'a, X, Y> Data<'a, X, Y>
where
    X: Float,
    Y: Float,
{
    /// Creates a new data set from two existing slices
    ///
    /// Fails with `LengthMismatch` if the slices differ in length, and with the `Sample`
    /// errors if either of them is empty or contains a `NaN`
    pub fn new(xs: &'a [X], ys: &'a [Y]) -> Result<Data<'a, X, Y>> {
        if xs.len() != ys.len() {
            return Err(Error::LengthMismatch {
                left: xs.len(),
                right: ys.len(),
            });
        }

        Sample::new(xs)?;
        Sample::new(ys)?;

        Ok(Data(xs, ys))
    }

    /// Returns the bootstrap distribution of the parameter estimated by the `statistic`
    ///
    /// Resamples pairs, so every resampled `x` keeps its own `y`.
    ///
    /// - Multi-threaded
    /// - Time: `O(nresamples)`
    /// - Memory: `O(nresamples)`
    pub fn bootstrap<T, S, R>(
        &self,
        nresamples: usize,
        statistic: S,
        rng: &mut R,
    ) -> Result<Distribution<T>>
    where
        T: Float,
        S: Fn(Data<X, Y>) -> T + Sync,
        R: RandomSource + Send,
    {
        if nresamples == 0 {
            return Err(Error::NoReplicates);
        }

        log::debug!(
            "Drawing {} pairs bootstrap replicates of {} data points",
            nresamples,
            self.len()
        );

        let replicates = fan_out(
            rng,
            nresamples,
            |stream| Resamples::new(*self, stream),
            |resamples| statistic(resamples.next()),
        );

        Distribution::from_replicates(replicates)
    }

    /// Returns a view into the `X` data
    pub fn x(&self) -> &'a Sample<X> {
        Sample::new_unchecked(self.0)
    }

    /// Returns a view into the `Y` data
    pub fn y(&self) -> &'a Sample<Y> {
        Sample::new_unchecked(self.1)
    }
}

impl<'a, A> Data<'a, A, A>
where
    A: Float,
{
    /// Returns the bootstrap distributions of the slope and the intercept of the least squares
    /// line, in that order
    ///
    /// Fails with `DegenerateFit` if all the `x` values are equal. A resample that draws a
    /// single `x` value doesn't fail, it contributes the line `StraightLine::least_squares`
    /// fits to it.
    ///
    /// - Multi-threaded
    /// - Time: `O(nresamples)`
    /// - Memory: `O(nresamples)`
    pub fn bootstrap_linear_fit<R>(
        &self,
        nresamples: usize,
        rng: &mut R,
    ) -> Result<(Distribution<A>, Distribution<A>)>
    where
        R: RandomSource + Send,
    {
        if nresamples == 0 {
            return Err(Error::NoReplicates);
        }

        StraightLine::fit(self)?;

        log::debug!(
            "Drawing {} linear fit replicates of {} data points",
            nresamples,
            self.len()
        );

        let fits = fan_out(
            rng,
            nresamples,
            |stream| Resamples::new(*self, stream),
            |resamples| StraightLine::least_squares(&resamples.next()),
        );

        let (slopes, intercepts): (Vec<A>, Vec<A>) = fits
            .into_iter()
            .map(|line| (line.slope, line.intercept))
            .unzip();

        Ok((
            Distribution::from_replicates(slopes)?,
            Distribution::from_replicates(intercepts)?,
        ))
    }
}

/// Iterator over `Data`
pub struct Pairs<'a, X: 'a, Y: 'a> {
    data: Data<'a, X, Y>,
    state: usize,
}

impl<'a, X, Y> Iterator for Pairs<'a, X, Y> {
    type Item = (&'a X, &'a Y);

    fn next(&mut self) -> Option<(&'a X, &'a Y)> {
        if self.state < self.data.len() {
            let i = self.state;
            self.state += 1;

            Some((&self.data.0[i], &self.data.1[i]))
        } else {
            None
        }
    }
}
