use std::iter::IntoIterator;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{Error, Float};

/// Summary statistics of a univariate sample.
///
/// This is the sample-side input of [`mean_test`](crate::mean_test): everything
/// the evaluator needs to know about the data is its size, mean and standard
/// deviation. The fields are public so a summary can be written down directly
/// when the raw data is not available, e.g. when reproducing a published test.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct SampleSummary<T: Float> {
    /// The number of observations.
    pub n: usize,

    /// The arithmetic mean of the observations.
    pub mean: T,

    /// The sample standard deviation, computed with Bessel's correction
    /// (divisor `n - 1`).
    pub std_dev: T,
}

impl<T: Float> SampleSummary<T> {
    /// Derives the summary statistics of `data`.
    ///
    /// Takes one argument `data` which is an iterator over floating-point numbers ([`impl
    /// IntoIterator<Item = T>`](IntoIterator)).
    ///
    /// The sample size of `data` must be greater than 1, so that the
    /// Bessel-corrected standard deviation is defined.
    ///
    /// # Examples
    ///
    /// ```
    /// use meantest::SampleSummary;
    ///
    /// let summary = SampleSummary::from_data(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(summary.n, 4);
    /// assert_eq!(summary.mean, 2.5);
    /// assert!((summary.std_dev - 1.2909944487358056_f64).abs() < 1e-12);
    /// ```
    pub fn from_data<I: IntoIterator<Item = T>>(data: I) -> Result<Self, Error> {
        let data: Vec<T> = data.into_iter().collect();
        let n = data.len();

        if n < 2 {
            return Err(Error::InsufficientSampleSize {
                given: n,
                needed: 2,
            });
        }

        if data.iter().any(|&v| v.is_nan()) {
            return Err(Error::ContainsNaN);
        }

        let n_t = T::from(n).unwrap();
        let mean = iter_if_parallel!(&data).copied().sum::<T>() / n_t;
        let variance = iter_if_parallel!(&data).map(|&x| (x - mean).powi(2)).sum::<T>()
            / T::from(n - 1).unwrap();

        Ok(Self {
            n,
            mean,
            std_dev: variance.sqrt(),
        })
    }
}
