use crate::bivariate::Data;
use crate::float::Float;
use crate::rand_util::RandomSource;

/// Pairs bootstrap draws
///
/// Each draw picks `n` indices with replacement and applies the same indices to both `X`
/// and `Y`, keeping every pair together.
pub struct Resamples<'a, X, Y, R>
where
    X: 'a + Float,
    Y: 'a + Float,
{
    rng: R,
    data: (&'a [X], &'a [Y]),
    stage: Option<(Vec<X>, Vec<Y>)>,
}

#[allow(clippy::should_implement_trait)]
impl<'a, X, Y, R> Resamples<'a, X, Y, R>
where
    X: 'a + Float,
    Y: 'a + Float,
    R: RandomSource,
{
    pub fn new(data: Data<'a, X, Y>, rng: R) -> Resamples<'a, X, Y, R> {
        Resamples {
            rng,
            data: (data.x(), data.y()),
            stage: None,
        }
    }

    pub fn next(&mut self) -> Data<'_, X, Y> {
        let n = self.data.0.len();

        match self.stage {
            None => {
                let mut stage = (Vec::with_capacity(n), Vec::with_capacity(n));

                for _ in 0..n {
                    let i = self.rng.index(n);

                    stage.0.push(self.data.0[i]);
                    stage.1.push(self.data.1[i]);
                }

                self.stage = Some(stage);
            }
            Some(ref mut stage) => {
                for i in 0..n {
                    let j = self.rng.index(n);

                    stage.0[i] = self.data.0[j];
                    stage.1[i] = self.data.1[j];
                }
            }
        }

        match self.stage {
            Some((ref x, ref y)) => Data(x, y),
            None => unreachable!(),
        }
    }
}
