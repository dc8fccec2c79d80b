use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while building or querying a replicate distribution
///
/// All the variants except `AccessError` and `Json` describe invalid input. They are detected
/// before any randomness is consumed, so retrying with the same input fails the same way.
#[derive(Debug, Error)]
pub enum Error {
    /// A sample without data points
    #[error("sample is empty")]
    EmptySample,
    /// A sample that contains a `NaN`
    #[error("sample contains NaN at index {index}")]
    NotANumber { index: usize },
    /// The statistic produced a `NaN` for one of the resamples
    #[error("statistic returned NaN for replicate {index}")]
    NotANumberReplicate { index: usize },
    #[error("replicate count must be at least 1")]
    NoReplicates,
    #[error("percentile {0} is outside of the [0, 100] range")]
    PercentileOutOfRange(f64),
    #[error("lower percentile {lower} exceeds upper percentile {upper}")]
    InvertedPercentiles { lower: f64, upper: f64 },
    #[error("confidence level {0} is outside of the (0, 1) range")]
    ConfidenceLevelOutOfRange(f64),
    #[error("significance level {0} is outside of the (0, 1) range")]
    SignificanceLevelOutOfRange(f64),
    /// Two sequences that must be aligned by index have different lengths
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
    /// Least squares fit over data whose `x` values are all equal
    #[error("cannot fit a line: all x values are equal")]
    DegenerateFit,
    #[error("failed to access file {path:?}: {inner}")]
    AccessError {
        path: PathBuf,
        #[source]
        inner: io::Error,
    },
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns `true` for the input validation errors
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, Error::AccessError { .. } | Error::Json(_))
    }
}

pub type Result<T> = ::std::result::Result<T, Error>;
