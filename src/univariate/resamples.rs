use crate::float::Float;
use crate::rand_util::RandomSource;
use crate::univariate::Sample;

/// Bootstrap draws of a sample
///
/// Every call to `next` draws `n` indices uniformly, with replacement, from `[0, n)` and
/// returns the sample indexed by that draw. The staging buffer is reused across draws.
pub struct Resamples<'a, A, R>
where
    A: Float,
{
    rng: R,
    sample: &'a [A],
    stage: Option<Vec<A>>,
}

#[allow(clippy::should_implement_trait)]
impl<'a, A, R> Resamples<'a, A, R>
where
    A: 'a + Float,
    R: RandomSource,
{
    pub fn new(sample: &'a Sample<A>, rng: R) -> Resamples<'a, A, R> {
        let slice = sample;

        Resamples {
            rng,
            sample: slice,
            stage: None,
        }
    }

    pub fn next(&mut self) -> &Sample<A> {
        let n = self.sample.len();
        let rng = &mut self.rng;
        let sample = self.sample;

        let stage = self.stage.get_or_insert_with(|| Vec::with_capacity(n));
        if stage.is_empty() {
            stage.extend((0..n).map(|_| sample[rng.index(n)]));
        } else {
            for elem in stage.iter_mut() {
                *elem = sample[rng.index(n)];
            }
        }

        Sample::new_unchecked(stage)
    }
}
