use std::ops::Deref;

use serde_derive::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::float::Float;
use crate::univariate::{Percentiles, Sample};

/// The replicate distribution of some parameter
///
/// Built once by a resampling engine, then only queried.
#[derive(Clone, Debug)]
pub struct Distribution<A>(Box<[A]>);

impl<A> Distribution<A>
where
    A: Float,
{
    /// Create a distribution from the given values
    ///
    /// Fails with `EmptySample` if there are no values and with `NotANumber` if any of them is
    /// `NaN`
    pub fn new(values: Vec<A>) -> Result<Distribution<A>> {
        Sample::new(&values)?;

        Ok(Distribution(values.into_boxed_slice()))
    }

    /// Wraps freshly computed replicates, rejecting any `NaN` the statistic produced
    pub(crate) fn from_replicates(values: Vec<A>) -> Result<Distribution<A>> {
        if values.is_empty() {
            return Err(Error::NoReplicates);
        }

        if let Some(index) = values.iter().position(|x| x.is_nan()) {
            return Err(Error::NotANumberReplicate { index });
        }

        Ok(Distribution(values.into_boxed_slice()))
    }

    /// Computes a confidence interval from the `lower` and `upper` percentiles, in `[0, 100]`
    ///
    /// Percentiles are estimated by linear interpolation over the sorted replicates, so the
    /// order of the replicates doesn't matter.
    pub fn confidence_interval(&self, lower: A, upper: A) -> Result<ConfidenceInterval<A>> {
        let _0 = A::cast(0);
        let _100 = A::cast(100);

        for &p in &[lower, upper] {
            if !(p >= _0 && p <= _100) {
                return Err(Error::PercentileOutOfRange(to_f64(p)));
            }
        }

        if lower > upper {
            return Err(Error::InvertedPercentiles {
                lower: to_f64(lower),
                upper: to_f64(upper),
            });
        }

        let percentiles = self.percentiles();

        Ok(ConfidenceInterval {
            lower_bound: percentiles.at(lower)?,
            upper_bound: percentiles.at(upper)?,
        })
    }

    /// Computes the central confidence interval at `confidence_level`, in the `(0, 1)` range
    ///
    /// A `confidence_level` of `0.95` uses the 2.5th and 97.5th percentiles.
    pub fn confidence_interval_at(&self, confidence_level: A) -> Result<ConfidenceInterval<A>> {
        let _0 = A::cast(0);
        let _1 = A::cast(1);
        let _50 = A::cast(50);

        if !(confidence_level > _0 && confidence_level < _1) {
            return Err(Error::ConfidenceLevelOutOfRange(to_f64(confidence_level)));
        }

        self.confidence_interval(_50 * (_1 - confidence_level), _50 * (_1 + confidence_level))
    }

    /// Computes the fraction of replicates that are at least as extreme as `observed`
    pub fn p_value(&self, observed: A, comparison: Comparison) -> A {
        let n = self.0.len();
        let hits = self
            .0
            .iter()
            .filter(|&&x| comparison.is_at_least_as_extreme(x, observed))
            .count();

        A::cast(hits) / A::cast(n)
    }

    /// Returns the standard deviation of the replicates
    pub fn standard_error(&self) -> A {
        self.std_dev(None)
    }

    /// Combines two distributions index by index
    ///
    /// Both must hold the same number of replicates, the `i`-th replicate of the result is
    /// `f(self[i], other[i])`.
    pub fn zip_with<F>(&self, other: &Distribution<A>, f: F) -> Result<Distribution<A>>
    where
        F: Fn(A, A) -> A,
    {
        if self.0.len() != other.0.len() {
            return Err(Error::LengthMismatch {
                left: self.0.len(),
                right: other.0.len(),
            });
        }

        let combined = self
            .0
            .iter()
            .zip(other.0.iter())
            .map(|(&x, &y)| f(x, y))
            .collect();

        Distribution::from_replicates(combined)
    }

    /// Returns the sorted view of the replicates
    pub fn percentiles(&self) -> Percentiles<A> {
        (**self).percentiles()
    }

    pub fn into_vec(self) -> Vec<A> {
        self.0.into_vec()
    }
}

impl<A> Deref for Distribution<A>
where
    A: Float,
{
    type Target = Sample<A>;

    fn deref(&self) -> &Sample<A> {
        Sample::new_unchecked(&self.0)
    }
}

impl<A> AsRef<[A]> for Distribution<A> {
    fn as_ref(&self) -> &[A] {
        &self.0
    }
}

fn to_f64<A: Float>(x: A) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}

/// Which replicates count as "at least as extreme" as the observed statistic
///
/// The direction depends on the alternative hypothesis, so it is always chosen by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// One-sided, the alternative predicts a larger statistic: `replicate >= observed`
    GreaterOrEqual,
    /// One-sided, the alternative predicts a smaller statistic: `replicate <= observed`
    LessOrEqual,
    /// Two-sided around zero: `|replicate| >= |observed|`
    TwoSided,
}

impl Comparison {
    pub fn is_at_least_as_extreme<A>(self, replicate: A, observed: A) -> bool
    where
        A: Float,
    {
        match self {
            Comparison::GreaterOrEqual => replicate >= observed,
            Comparison::LessOrEqual => replicate <= observed,
            Comparison::TwoSided => replicate.abs() >= observed.abs(),
        }
    }
}

/// Estimate interval of a population parameter
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval<A> {
    pub lower_bound: A,
    pub upper_bound: A,
}

impl<A> ConfidenceInterval<A>
where
    A: Float,
{
    pub fn contains(&self, x: A) -> bool {
        self.lower_bound <= x && x <= self.upper_bound
    }

    pub fn width(&self) -> A {
        self.upper_bound - self.lower_bound
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;
    use quickcheck::{quickcheck, TestResult};
    use rand::seq::SliceRandom;
    use rand::thread_rng;

    use super::{Comparison, Distribution};
    use crate::error::Error;

    quickcheck! {
        fn interval_ignores_order(values: Vec<i16>, lower: u8, upper: u8) -> TestResult {
            if values.is_empty() {
                return TestResult::discard();
            }

            let (lower, upper) = (
                f64::from(lower.min(upper)) * 100. / 255.,
                f64::from(lower.max(upper)) * 100. / 255.,
            );
            let values: Vec<f64> = values.into_iter().map(f64::from).collect();
            let mut shuffled = values.clone();
            shuffled.shuffle(&mut thread_rng());

            let a = Distribution::new(values).unwrap().confidence_interval(lower, upper).unwrap();
            let b = Distribution::new(shuffled).unwrap().confidence_interval(lower, upper).unwrap();

            TestResult::from_bool(a == b && a.lower_bound <= a.upper_bound)
        }
    }

    quickcheck! {
        fn p_value_is_monotonic(values: Vec<i16>, t: i16, dt: u16) -> TestResult {
            if values.is_empty() {
                return TestResult::discard();
            }

            let distribution = Distribution::new(values.into_iter().map(f64::from).collect()).unwrap();
            let (low, high) = (f64::from(t), f64::from(t) + f64::from(dt));

            let p_low = distribution.p_value(low, Comparison::GreaterOrEqual);
            let p_high = distribution.p_value(high, Comparison::GreaterOrEqual);

            TestResult::from_bool(p_high <= p_low && (0. ..=1.).contains(&p_low))
        }
    }

    #[test]
    fn constant_distribution() {
        let distribution = Distribution::new(vec![3.0f64; 10]).unwrap();

        for &(lower, upper) in &[(0., 100.), (2.5, 97.5), (50., 50.)] {
            let ci = distribution.confidence_interval(lower, upper).unwrap();

            assert_eq!((ci.lower_bound, ci.upper_bound), (3.0, 3.0));
        }
    }

    #[test]
    fn interval_at_confidence_level() {
        let distribution = Distribution::new((0..=100).map(f64::from).collect()).unwrap();
        let ci = distribution.confidence_interval_at(0.95).unwrap();

        assert_relative_eq!(ci.lower_bound, 2.5, epsilon = 1e-9);
        assert_relative_eq!(ci.upper_bound, 97.5, epsilon = 1e-9);
        assert!(ci.contains(50.));
        assert_relative_eq!(ci.width(), 95.0, epsilon = 1e-9);
    }

    #[test]
    fn invalid_percentiles() {
        let distribution = Distribution::new(vec![1.0f64, 2.0]).unwrap();

        assert!(matches!(
            distribution.confidence_interval(97.5, 2.5),
            Err(Error::InvertedPercentiles { .. })
        ));
        assert!(matches!(
            distribution.confidence_interval(-1., 50.),
            Err(Error::PercentileOutOfRange(_))
        ));
        assert!(matches!(
            distribution.confidence_interval(50., 101.),
            Err(Error::PercentileOutOfRange(_))
        ));
        assert!(matches!(
            distribution.confidence_interval_at(1.0),
            Err(Error::ConfidenceLevelOutOfRange(_))
        ));
    }

    #[test]
    fn p_values() {
        let distribution = Distribution::new(vec![-3.0f64, -1.0, 0.0, 1.0, 2.0]).unwrap();

        assert_relative_eq!(distribution.p_value(1.0, Comparison::GreaterOrEqual), 0.4);
        assert_relative_eq!(distribution.p_value(-1.0, Comparison::LessOrEqual), 0.4);
        assert_relative_eq!(distribution.p_value(2.0, Comparison::TwoSided), 0.4);
        assert_relative_eq!(distribution.p_value(10.0, Comparison::GreaterOrEqual), 0.0);
    }

    #[test]
    fn zip_with_requires_matching_lengths() {
        let a = Distribution::new(vec![1.0f64, 2.0, 3.0]).unwrap();
        let b = Distribution::new(vec![1.0f64, 1.0, 1.0]).unwrap();
        let c = Distribution::new(vec![1.0f64]).unwrap();

        let diff = a.zip_with(&b, |x, y| x - y).unwrap();

        assert_eq!(diff.as_ref(), &[0.0, 1.0, 2.0]);
        assert!(matches!(
            a.zip_with(&c, |x, y| x - y),
            Err(Error::LengthMismatch { left: 3, right: 1 })
        ));
    }
}
