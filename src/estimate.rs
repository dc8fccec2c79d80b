use std::fmt;

use serde_derive::{Deserialize, Serialize};

use crate::distribution::{ConfidenceInterval, Distribution};
use crate::error::Result;
use crate::float::Float;
use crate::univariate::Sample;

/// A point estimate together with its bootstrap uncertainty
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Estimate<A> {
    pub confidence_interval: ConfidenceInterval<A>,
    pub confidence_level: A,
    pub point_estimate: A,
    pub standard_error: A,
}

impl<A> Estimate<A>
where
    A: Float,
{
    /// Summarizes `distribution` around `point_estimate`, reading the interval at
    /// `confidence_level`
    pub fn new(
        distribution: &Distribution<A>,
        point_estimate: A,
        confidence_level: A,
    ) -> Result<Estimate<A>> {
        Ok(Estimate {
            confidence_interval: distribution.confidence_interval_at(confidence_level)?,
            confidence_level,
            point_estimate,
            standard_error: distribution.standard_error(),
        })
    }
}

/// The one-sample statistics that can be selected by name
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Statistic {
    Mean,
    Median,
    StdDev,
    Sum,
}

impl Statistic {
    /// Returns the function computing this statistic
    pub fn function<A>(self) -> fn(&Sample<A>) -> A
    where
        A: Float,
    {
        match self {
            Statistic::Mean => Sample::<A>::mean,
            Statistic::Median => Sample::<A>::median,
            Statistic::StdDev => |s| s.std_dev(None),
            Statistic::Sum => Sample::<A>::sum,
        }
    }

    /// Returns the two-sample statistic `s(b) - s(a)`
    ///
    /// With `Mean` over indicator samples this is the difference of the fractions of `true`.
    pub fn difference<A>(self) -> impl Fn(&Sample<A>, &Sample<A>) -> A + Copy + Sync
    where
        A: Float,
    {
        let f = self.function::<A>();

        move |a: &Sample<A>, b: &Sample<A>| f(b) - f(a)
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Statistic::Mean => f.pad("mean"),
            Statistic::Median => f.pad("median"),
            Statistic::StdDev => f.pad("SD"),
            Statistic::Sum => f.pad("sum"),
        }
    }
}
