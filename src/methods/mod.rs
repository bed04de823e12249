
pub use mean_test::{ReferenceDistribution, Tail, TestSpec, mean_test};
pub use t_test::t_test;
pub use z_test::z_test;
