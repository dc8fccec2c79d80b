//! Random sources and replicate fan-out

use std::cell::RefCell;
use std::cmp;
use std::time::{SystemTime, UNIX_EPOCH};

use oorandom::Rand64;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// The default random generator
pub type Rng = Rand64;

thread_local! {
    static SEED_RAND: RefCell<Rand64> = RefCell::new(Rand64::new(
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0)
    ));
}

/// Returns a generator seeded from the clock, results vary from run to run
pub fn new_rng() -> Rng {
    SEED_RAND.with(|r| r.borrow_mut().fork())
}

/// Returns a generator that always produces the same stream for the same `seed`
pub fn seeded(seed: u64) -> Rng {
    Rand64::new(u128::from(seed))
}

/// The device every resampling operation draws its randomness from
///
/// Engines never reach for a global generator: the caller passes one in, which makes any
/// run reproducible under a fixed seed and lets tests substitute a deterministic stub.
pub trait RandomSource: Sized {
    /// Returns an index drawn uniformly from `[0, upper)`
    ///
    /// `upper` is always at least 1.
    fn index(&mut self, upper: usize) -> usize;

    /// Derives an independent stream from this one
    ///
    /// Must be deterministic: the same parent state always yields the same child.
    fn fork(&mut self) -> Self;

    /// Shuffles `values` in place, every permutation being equally likely
    fn shuffle<T>(&mut self, values: &mut [T]) {
        // Fisher-Yates
        for i in (1..values.len()).rev() {
            let j = self.index(i + 1);
            values.swap(i, j);
        }
    }
}

impl RandomSource for Rand64 {
    fn index(&mut self, upper: usize) -> usize {
        self.rand_range(0..upper as u64) as usize
    }

    fn fork(&mut self) -> Rand64 {
        let seed = (u128::from(self.rand_u64()) << 64) | u128::from(self.rand_u64());

        Rand64::new(seed)
    }
}

/// Computes `nresamples` replicates, split into `ceil(sqrt(nresamples))` chunks
///
/// Each chunk gets its own stream, forked from `rng` in chunk order before any replicate is
/// computed, and its own state built by `init`. The output is ordered by chunk, so the result
/// does not depend on whether the chunks ran in parallel.
///
/// - Multithreaded (with the `rayon` feature)
/// - Time: `O(nresamples)`
/// - Memory: `O(nresamples)`
pub(crate) fn fan_out<R, S, T, I, F>(rng: &mut R, nresamples: usize, init: I, step: F) -> Vec<T>
where
    R: RandomSource + Send,
    T: Send,
    I: Fn(R) -> S + Sync,
    F: Fn(&mut S) -> T + Sync,
{
    if nresamples == 0 {
        return Vec::new();
    }

    let nchunks = (nresamples as f64).sqrt().ceil() as usize;
    let per_chunk = (nresamples + nchunks - 1) / nchunks;
    let streams: Vec<R> = (0..nchunks).map(|_| rng.fork()).collect();

    let chunk = |(i, stream): (usize, R)| {
        let start = i * per_chunk;
        let end = cmp::min(start + per_chunk, nresamples);
        let mut state = init(stream);

        (start..end).map(|_| step(&mut state)).collect::<Vec<T>>()
    };

    #[cfg(feature = "rayon")]
    let chunks: Vec<Vec<T>> = streams.into_par_iter().enumerate().map(chunk).collect();
    #[cfg(not(feature = "rayon"))]
    let chunks: Vec<Vec<T>> = streams.into_iter().enumerate().map(chunk).collect();

    let mut replicates = Vec::with_capacity(nresamples);
    for mut chunk in chunks {
        replicates.append(&mut chunk);
    }
    replicates
}
