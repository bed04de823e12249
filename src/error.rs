use thiserror::Error as ThisError;

/// Represents errors that can occur while evaluating a location test.
#[derive(Debug, ThisError, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The input sample size is too small for the test.
    #[error("Sample size must be at least {needed}, but was given {given}.")]
    InsufficientSampleSize { given: usize, needed: usize },

    /// The sample standard deviation is negative, which is not a valid
    /// dispersion measure.
    #[error("The sample standard deviation must be non-negative.")]
    NegativeStandardDeviation,

    /// The significance level lies outside the open interval (0, 1).
    #[error("The significance level must lie strictly between 0 and 1.")]
    InvalidSignificanceLevel,

    /// The standard error is zero while the sample mean differs from the
    /// hypothesized mean, leaving the test statistic undefined.
    #[error("The standard error is zero, the test statistic is undefined.")]
    ZeroStandardError,

    /// The input contains `NaN` values.
    /// Location tests cannot be performed on data with `NaN`s.
    #[error("Input data must not contain NaN values.")]
    ContainsNaN,

    /// See [`statrs::distribution::NormalError`].
    #[error("{0}")]
    NormalDistributionError(#[from] statrs::distribution::NormalError),

    /// See [`statrs::distribution::StudentsTError`].
    #[error("{0}")]
    StudentsTError(#[from] statrs::distribution::StudentsTError),
}
