#![allow(dead_code)]
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use resample_stats::RandomSource;

/// Bootstrap draws return `0, 1, .., n - 1`, so every resample equals the sample
#[derive(Default)]
pub struct Identity {
    next: usize,
}

impl RandomSource for Identity {
    fn index(&mut self, upper: usize) -> usize {
        let index = self.next % upper;
        self.next += 1;
        index
    }

    fn fork(&mut self) -> Identity {
        Identity::default()
    }

    fn shuffle<T>(&mut self, _: &mut [T]) {}
}

/// Shuffles by replaying a fixed list of permutations, shared by every forked stream
///
/// Permutation `perm` rearranges `values` so that `values'[i] = values[perm[i]]`.
#[derive(Clone)]
pub struct Scripted {
    script: Arc<Vec<Vec<usize>>>,
    cursor: Arc<AtomicUsize>,
}

impl Scripted {
    pub fn new(script: Vec<Vec<usize>>) -> Scripted {
        Scripted {
            script: Arc::new(script),
            cursor: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Deals `n` values with a fixed stride per permutation: `perm[i] = i * stride mod n`
    ///
    /// Every stride must be coprime with `n`.
    pub fn strides(n: usize, strides: &[usize]) -> Scripted {
        Scripted::new(
            strides
                .iter()
                .map(|&stride| (0..n).map(|i| i * stride % n).collect())
                .collect(),
        )
    }
}

impl RandomSource for Scripted {
    fn index(&mut self, _: usize) -> usize {
        0
    }

    fn fork(&mut self) -> Scripted {
        self.clone()
    }

    fn shuffle<T>(&mut self, values: &mut [T]) {
        let k = self.cursor.fetch_add(1, Ordering::SeqCst) % self.script.len();
        let perm = &self.script[k];
        let n = values.len();

        // `at[p]`: original index of the value now at position `p`
        // `pos[j]`: position of the value originally at index `j`
        let mut at: Vec<usize> = (0..n).collect();
        let mut pos: Vec<usize> = (0..n).collect();
        for i in 0..n {
            let p = pos[perm[i]];
            let moved = at[i];

            values.swap(i, p);
            at.swap(i, p);
            pos[perm[i]] = i;
            pos[moved] = p;
        }
    }
}
