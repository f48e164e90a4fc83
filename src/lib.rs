//! Synthetic datasets following known functional forms.
//!
//! Generators produce a feature matrix and a matching target matrix for linear, multivariate
//! linear, logistic, trigonometric and power relationships. They are meant for exercising and
//! visualizing small neural networks, where the true function behind the data is known.
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use synthdata::dataset::{gen_multiple_linear, gen_trigonometric, Trigonometric};
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! let ds = gen_multiple_linear(&[1.0, 2.0, 3.0], 10, &mut rng).unwrap();
//! assert_eq!(ds.xs.shape(), [10, 3]);
//! assert_eq!(ds.ys.shape(), [10, 1]);
//!
//! let ds = gen_trigonometric(100, "sine".parse::<Trigonometric>().unwrap());
//! assert_eq!(ds.len(), 100);
//! ```

#![deny(unsafe_code, rust_2018_idioms, rust_2021_compatibility)]
#![warn(missing_docs)]

pub mod activation;
pub mod dataset;
pub mod error;
pub mod matrix;

pub use activation::{sigmoid, Activation};
pub use dataset::{Dataset, Family, Trigonometric};
pub use error::{Error, Result};
pub use matrix::Matrix;
