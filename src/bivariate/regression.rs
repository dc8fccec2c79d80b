//! Regression analysis

use crate::bivariate::Data;
use crate::error::{Error, Result};
use crate::float::Float;

/// A straight line `y = m * x + b`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StraightLine<A>
where
    A: Float,
{
    /// The y-intercept of the line
    pub intercept: A,
    /// The slope of the line
    pub slope: A,
}

impl<A> StraightLine<A>
where
    A: Float,
{
    /// Fits the data to a straight line using ordinary least squares
    ///
    /// Fails with `DegenerateFit` when every `x` is the same, the slope is undefined then.
    ///
    /// - Time: `O(length)`
    pub fn fit(data: &Data<'_, A, A>) -> Result<StraightLine<A>> {
        if is_degenerate(data) {
            return Err(Error::DegenerateFit);
        }

        Ok(StraightLine::least_squares(data))
    }

    /// Fits the data to a straight line, never failing
    ///
    /// Same as `fit` when the `x` values differ. When every `x` equals `c` the least squares
    /// problem has infinitely many solutions; this returns the one `numpy.polyfit(x, y, 1)`
    /// returns, the minimum norm solution over the column-scaled design matrix:
    /// `slope = mean(y) / (2c)` and `intercept = mean(y) / 2`. When `c` is zero the slope
    /// column vanishes and the result is `slope = 0`, `intercept = mean(y)`. Either way the
    /// line passes through `(c, mean(y))`.
    ///
    /// - Time: `O(length)`
    #[allow(clippy::similar_names)]
    pub fn least_squares(data: &Data<'_, A, A>) -> StraightLine<A> {
        let xs = data.0;
        let ys = data.1;
        let _0 = A::cast(0);
        let _2 = A::cast(2);

        let n = A::cast(xs.len());
        let x_bar = crate::sum(xs) / n;
        let y_bar = crate::sum(ys) / n;

        if is_degenerate(data) {
            let c = xs[0];

            return if c == _0 {
                StraightLine {
                    intercept: y_bar,
                    slope: _0,
                }
            } else {
                StraightLine {
                    intercept: y_bar / _2,
                    slope: y_bar / (_2 * c),
                }
            };
        }

        let (sxy, sxx) = data.iter().fold((_0, _0), |(sxy, sxx), (&x, &y)| {
            let dx = x - x_bar;

            (sxy + dx * (y - y_bar), sxx + dx * dx)
        });

        let slope = sxy / sxx;
        let intercept = y_bar - slope * x_bar;

        StraightLine { intercept, slope }
    }

    /// Evaluates the line at `x`
    pub fn at(&self, x: A) -> A {
        self.slope * x + self.intercept
    }

    /// Computes the goodness of fit (coefficient of determination) for this data set
    ///
    /// A perfectly flat `y` is fitted exactly, which counts as `1`.
    ///
    /// - Time: `O(length)`
    pub fn r_squared(&self, data: &Data<'_, A, A>) -> A {
        let _0 = A::cast(0);
        let _1 = A::cast(1);
        let ys = data.1;

        let n = A::cast(ys.len());
        let y_bar = crate::sum(ys) / n;

        let mut ss_res = _0;
        let mut ss_tot = _0;
        for (&x, &y) in data.iter() {
            ss_res = ss_res + (y - self.at(x)).powi(2);
            ss_tot = ss_tot + (y - y_bar).powi(2);
        }

        if ss_tot == _0 {
            _1
        } else {
            _1 - ss_res / ss_tot
        }
    }
}

fn is_degenerate<A>(data: &Data<'_, A, A>) -> bool
where
    A: Float,
{
    let x0 = data.0[0];

    data.0.iter().all(|&x| x == x0)
}

#[cfg(test)]
macro_rules! test {
    ($ty:ident) => {
        mod $ty {
            use approx::relative_eq;
            use quickcheck::quickcheck;
            use quickcheck::TestResult;

            use crate::bivariate::regression::StraightLine;
            use crate::bivariate::Data;

            quickcheck! {
                fn r_squared(size: u8, start: u8, offset: u8) -> TestResult {
                    let size = size as usize;
                    let start = start as usize;
                    let offset = offset as usize;
                    if let Some(x) = crate::test::vec::<$ty>(size, start) {
                        let y = crate::test::vec::<$ty>(size + offset, start + offset).unwrap();
                        let data = Data::new(&x[start..], &y[start + offset..]).unwrap();

                        let sl = match StraightLine::fit(&data) {
                            Ok(sl) => sl,
                            Err(_) => return TestResult::discard(),
                        };

                        let r_squared = sl.r_squared(&data);

                        TestResult::from_bool(
                            (r_squared > 0. || relative_eq!(r_squared, 0., epsilon = 1e-3)) &&
                                (r_squared < 1. || relative_eq!(r_squared, 1., epsilon = 1e-3))
                        )
                    } else {
                        TestResult::discard()
                    }
                }
            }
        }
    };
}

#[cfg(test)]
mod test {
    test!(f32);
    test!(f64);

    use approx::assert_relative_eq;

    use crate::bivariate::regression::StraightLine;
    use crate::bivariate::Data;
    use crate::error::Error;

    #[test]
    fn exact_line() {
        let xs = [1.0f64, 2.0, 3.0];
        let ys = [2.0f64, 4.0, 6.0];
        let data = Data::new(&xs, &ys).unwrap();
        let line = StraightLine::fit(&data).unwrap();

        assert_eq!(line.slope, 2.0);
        assert_eq!(line.intercept, 0.0);
        assert_relative_eq!(line.r_squared(&data), 1.0);
    }

    #[test]
    fn noisy_line() {
        // numpy.polyfit([0, 1, 2, 3], [1, 3, 2, 5], 1) == [1.1, 1.1]
        let xs = [0.0f64, 1.0, 2.0, 3.0];
        let ys = [1.0f64, 3.0, 2.0, 5.0];
        let data = Data::new(&xs, &ys).unwrap();
        let line = StraightLine::fit(&data).unwrap();

        assert_relative_eq!(line.slope, 1.1, epsilon = 1e-12);
        assert_relative_eq!(line.intercept, 1.1, epsilon = 1e-12);
        assert_relative_eq!(line.at(2.0), 3.3, epsilon = 1e-12);
    }

    #[test]
    fn vertical_data_is_degenerate() {
        let xs = [2.0f64, 2.0, 2.0];
        let ys = [1.0f64, 5.0, 3.0];
        let data = Data::new(&xs, &ys).unwrap();

        assert!(matches!(StraightLine::fit(&data), Err(Error::DegenerateFit)));
    }

    #[test]
    fn vertical_data_least_squares() {
        // numpy.polyfit([2, 2, 2], [1, 5, 3], 1) == [0.75, 1.5]
        let xs = [2.0f64, 2.0, 2.0];
        let ys = [1.0f64, 5.0, 3.0];
        let data = Data::new(&xs, &ys).unwrap();
        let line = StraightLine::least_squares(&data);

        assert_relative_eq!(line.slope, 0.75);
        assert_relative_eq!(line.intercept, 1.5);
        assert_relative_eq!(line.at(2.0), 3.0);
    }

    #[test]
    fn vertical_data_at_zero() {
        // numpy.polynomial.polynomial.polyfit([0, 0], [1, 4], 1) == [2.5, 0]
        let xs = [0.0f64, 0.0];
        let ys = [1.0f64, 4.0];
        let data = Data::new(&xs, &ys).unwrap();
        let line = StraightLine::least_squares(&data);

        assert_eq!(line.slope, 0.0);
        assert_relative_eq!(line.intercept, 2.5);
    }

    #[test]
    fn least_squares_agrees_with_fit() {
        let xs = [0.0f64, 1.0, 2.0, 3.0];
        let ys = [1.0f64, 3.0, 2.0, 5.0];
        let data = Data::new(&xs, &ys).unwrap();

        assert_eq!(StraightLine::fit(&data).unwrap(), StraightLine::least_squares(&data));
    }
}
