//! Hypothesis tests and interval estimates
//!
//! Each procedure validates the configuration and the samples before consuming any
//! randomness, computes the observed statistic on the data as given, and then builds the
//! replicate distribution it derives its answer from.

use serde_derive::{Deserialize, Serialize};

use crate::bivariate::regression::StraightLine;
use crate::bivariate::Data;
use crate::config::Config;
use crate::distribution::{Comparison, Distribution};
use crate::error::Result;
use crate::estimate::{Estimate, Statistic};
use crate::rand_util::RandomSource;
use crate::univariate::{self, Sample};

/// The result of a hypothesis test
#[derive(Clone, Debug, Serialize)]
pub struct TestOutcome {
    /// The statistic computed on the original groups
    pub observed: f64,
    /// Fraction of the replicates at least as extreme as `observed`
    pub p_value: f64,
    pub comparison: Comparison,
    /// The null distribution the p-value was read from
    #[serde(skip)]
    pub distribution: Distribution<f64>,
}

impl TestOutcome {
    /// Whether the null hypothesis is rejected at `significance_level`
    pub fn is_significant(&self, significance_level: f64) -> bool {
        self.p_value < significance_level
    }
}

/// Bootstrap estimates of a least squares line
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearFitEstimates {
    pub slope: Estimate<f64>,
    pub intercept: Estimate<f64>,
    /// Coefficient of determination of the line fitted to the original data
    pub r_squared: f64,
}

/// Tests whether the group labels of `a` and `b` carry information about `statistic`
///
/// The null distribution comes from reshuffling the pooled observations into groups of the
/// original sizes, `config.comparison` decides which replicates count as extreme.
pub fn permutation_test<S, R>(
    a: &[f64],
    b: &[f64],
    statistic: S,
    config: &Config,
    rng: &mut R,
) -> Result<TestOutcome>
where
    S: Fn(&Sample<f64>, &Sample<f64>) -> f64 + Sync,
    R: RandomSource + Send,
{
    config.validate()?;
    let a = Sample::new(a)?;
    let b = Sample::new(b)?;

    let observed = statistic(a, b);
    let (p_value, distribution) = elapsed!(
        "Permutation test",
        univariate::permutation_test(
            a,
            b,
            &statistic,
            config.nresamples,
            observed,
            config.comparison,
            rng,
        )
    )?;

    Ok(TestOutcome {
        observed,
        p_value,
        comparison: config.comparison,
        distribution,
    })
}

/// Tests whether `a` and `b` share the same mean
///
/// Both groups are shifted to the pooled mean, which makes the null hypothesis true while
/// keeping the shape of each group. The replicates are `mean(b*) - mean(a*)` over independent
/// bootstrap resamples of the shifted groups, compared against the observed
/// `mean(b) - mean(a)`.
pub fn bootstrap_mean_difference_test<R>(
    a: &[f64],
    b: &[f64],
    config: &Config,
    rng: &mut R,
) -> Result<TestOutcome>
where
    R: RandomSource + Send,
{
    config.validate()?;
    let a = Sample::new(a)?;
    let b = Sample::new(b)?;

    let observed = b.mean() - a.mean();
    let pooled = (a.sum() + b.sum()) / (a.len() + b.len()) as f64;
    let a_shifted = a.shifted(pooled);
    let b_shifted = b.shifted(pooled);

    let distribution = elapsed!(
        "Bootstrapping the shifted means",
        mean_difference_replicates(
            Sample::new(&a_shifted)?,
            Sample::new(&b_shifted)?,
            config.nresamples,
            rng,
        )
    )?;
    let p_value = distribution.p_value(observed, config.comparison);

    Ok(TestOutcome {
        observed,
        p_value,
        comparison: config.comparison,
        distribution,
    })
}

/// Estimates `statistic` over `sample` with a bootstrap confidence interval
pub fn statistic_estimate<R>(
    sample: &[f64],
    statistic: Statistic,
    config: &Config,
    rng: &mut R,
) -> Result<Estimate<f64>>
where
    R: RandomSource + Send,
{
    config.validate()?;
    let sample = Sample::new(sample)?;
    let f = statistic.function();

    let distribution = elapsed!(
        format!("Bootstrapping the {}", statistic),
        sample.bootstrap(config.nresamples, f, rng)
    )?;

    Estimate::new(&distribution, f(sample), config.confidence_level)
}

/// Estimates the mean of `sample` with a bootstrap confidence interval
pub fn mean_estimate<R>(sample: &[f64], config: &Config, rng: &mut R) -> Result<Estimate<f64>>
where
    R: RandomSource + Send,
{
    statistic_estimate(sample, Statistic::Mean, config, rng)
}

/// Estimates `mean(b) - mean(a)` with a bootstrap confidence interval
///
/// The means of both groups are bootstrapped independently, with the same number of
/// replicates, and subtracted replicate by replicate.
pub fn mean_difference_estimate<R>(
    a: &[f64],
    b: &[f64],
    config: &Config,
    rng: &mut R,
) -> Result<Estimate<f64>>
where
    R: RandomSource + Send,
{
    config.validate()?;
    let a = Sample::new(a)?;
    let b = Sample::new(b)?;

    let distribution = elapsed!(
        "Bootstrapping the difference of means",
        mean_difference_replicates(a, b, config.nresamples, rng)
    )?;

    Estimate::new(&distribution, b.mean() - a.mean(), config.confidence_level)
}

/// Estimates the least squares line of `y` against `x` with pairs bootstrap intervals
pub fn linear_fit_estimates<R>(
    x: &[f64],
    y: &[f64],
    config: &Config,
    rng: &mut R,
) -> Result<LinearFitEstimates>
where
    R: RandomSource + Send,
{
    config.validate()?;
    let data = Data::new(x, y)?;

    let line = StraightLine::fit(&data)?;
    let (slopes, intercepts) = elapsed!(
        "Bootstrapping the linear regression",
        data.bootstrap_linear_fit(config.nresamples, rng)
    )?;

    Ok(LinearFitEstimates {
        slope: Estimate::new(&slopes, line.slope, config.confidence_level)?,
        intercept: Estimate::new(&intercepts, line.intercept, config.confidence_level)?,
        r_squared: line.r_squared(&data),
    })
}

fn mean_difference_replicates<R>(
    a: &Sample<f64>,
    b: &Sample<f64>,
    nresamples: usize,
    rng: &mut R,
) -> Result<Distribution<f64>>
where
    R: RandomSource + Send,
{
    let a_means = a.bootstrap(nresamples, Sample::mean, rng)?;
    let b_means = b.bootstrap(nresamples, Sample::mean, rng)?;

    b_means.zip_with(&a_means, |b, a| b - a)
}
