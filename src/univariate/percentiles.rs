use crate::error::{Error, Result};
use crate::float::Float;

/// A "view" into the percentiles of a sample
pub struct Percentiles<A>(Box<[A]>)
where
    A: Float;

impl<A> Percentiles<A>
where
    A: Float,
{
    /// `sorted` must be non-empty and in ascending order
    pub(crate) fn from_sorted(sorted: Box<[A]>) -> Percentiles<A> {
        debug_assert!(!sorted.is_empty());

        Percentiles(sorted)
    }

    /// Returns the percentile at `p`%, `p` must be in the range `[0, 100]`
    ///
    /// Interpolates linearly between the two closest ranks.
    fn at_unchecked(&self, p: A) -> A {
        let _100 = A::cast(100);
        let len = self.0.len() - 1;

        if p == _100 {
            return self.0[len];
        }

        let rank = (p / _100) * A::cast(len);
        let integer = rank.floor();
        let fraction = rank - integer;
        let n = integer.to_usize().unwrap_or(0).min(len);
        let floor = self.0[n];

        if n == len {
            floor
        } else {
            let ceiling = self.0[n + 1];

            floor + (ceiling - floor) * fraction
        }
    }

    /// Returns the percentile at `p`%
    ///
    /// Fails with `PercentileOutOfRange` if `p` is outside the closed `[0, 100]` range
    pub fn at(&self, p: A) -> Result<A> {
        let _0 = A::cast(0);
        let _100 = A::cast(100);

        if p >= _0 && p <= _100 {
            Ok(self.at_unchecked(p))
        } else {
            Err(Error::PercentileOutOfRange(p.to_f64().unwrap_or(f64::NAN)))
        }
    }

    /// Returns the interquartile range
    pub fn iqr(&self) -> A {
        let (q1, _, q3) = self.quartiles();

        q3 - q1
    }

    /// Returns the 50th percentile
    pub fn median(&self) -> A {
        self.at_unchecked(A::cast(50))
    }

    /// Returns the 25th, 50th and 75th percentiles
    pub fn quartiles(&self) -> (A, A, A) {
        (
            self.at_unchecked(A::cast(25)),
            self.at_unchecked(A::cast(50)),
            self.at_unchecked(A::cast(75)),
        )
    }

    /// Returns the sorted values backing this view
    pub fn as_slice(&self) -> &[A] {
        &self.0
    }
}
