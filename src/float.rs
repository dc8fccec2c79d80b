//! Float trait

use cast::From;
use num_traits::float;

/// An extension of `num_traits::float::Float` that adds safe casting from `usize`/`f32` and
/// `Sync + Send`, so samples and distributions can be shared across worker threads.
pub trait Float:
    float::Float + From<usize, Output = Self> + From<f32, Output = Self> + Sync + Send
{
}

impl Float for f32 {}
impl Float for f64 {}
