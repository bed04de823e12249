#![doc = include_str!("../README.md")]
#![warn(clippy::pedantic)]
#![allow(
    clippy::doc_markdown,
    clippy::float_cmp,
    clippy::cast_precision_loss,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

#[macro_use]
pub(crate) mod macros;

mod error;
mod methods;
mod summary;

use std::iter::Sum;

pub use error::Error;
pub use methods::*;
use num_traits::{Float as Float_, Num, NumAssign, NumOps};
pub use summary::SampleSummary;

/// A convenience trait combining bounds frequently used for floating-point computations.
#[cfg(feature = "parallel")]
pub trait Float: Float_ + Num + NumAssign + NumOps + Sum + Send + Sync {}

/// Blanket implementation of [`Float`] for any type that satisfies its bounds.
#[cfg(feature = "parallel")]
impl<T: Float_ + Num + NumAssign + NumOps + Sum + Send + Sync> Float for T {}

/// A convenience trait combining bounds frequently used for floating-point computations.
#[cfg(not(feature = "parallel"))]
pub trait Float: Float_ + Num + NumAssign + NumOps + Sum {}

/// Blanket implementation of [`Float`] for any type that satisfies its bounds.
#[cfg(not(feature = "parallel"))]
impl<T: Float_ + Num + NumAssign + NumOps + Sum> Float for T {}

/// The outcome of a one-sample location test.
///
/// This structure standardizes the output of the t-test and z-test paths:
/// the standardized test statistic, the p-value obtained by referring it to
/// the selected reference distribution, and the resulting decision.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct TestResult<T: Float> {
    /// The calculated test statistic, a t-score or z-score.
    pub statistic: T,

    /// The p-value corresponding to the test statistic. It indicates the probability
    /// of observing the given result, or one more extreme, if the null hypothesis is true.
    pub p_value: T,

    /// Whether the null hypothesis is rejected, true iff `p_value <= alpha`.
    pub reject: bool,
}

#[cfg(all(feature = "serde", test))]
mod test_result_serde_test {
    use serde_test::{Token, assert_ser_tokens};

    use super::TestResult;

    #[test]
    fn test_result_tokens() {
        let result = TestResult {
            statistic: -2.0,
            p_value: 0.05,
            reject: true,
        };

        let expected_tokens = vec![
            Token::Struct {
                name: "TestResult",
                len: 3,
            },
            Token::Str("statistic"),
            Token::F64(-2.0),
            Token::Str("p_value"),
            Token::F64(0.05),
            Token::Str("reject"),
            Token::Bool(true),
            Token::StructEnd,
        ];

        assert_ser_tokens(&result, &expected_tokens);
    }
}
