//! Data structures and generators for synthetic datasets.
//!
//! Every generator returns a [`Dataset`] whose feature matrix `xs` and target matrix `ys` have
//! one row per observation. Generators that sample their inputs take an explicit random number
//! generator, so a seeded generator always reproduces the same dataset.

use rand::Rng;
use rand_distr::Distribution;

use crate::{
    error::{Error, Result},
    matrix::Matrix,
};

mod family;
mod linear;
mod logistic;
mod structured;

pub use family::Family;
pub use linear::{gen_multiple_linear, gen_simple_linear};
pub use logistic::gen_multiple_logistic;
pub use structured::{
    gen_powx, gen_trigonometric, Trigonometric, DEFAULT_POW_X, POWX_BOUND, TRIG_BOUND,
};

/// A single sample within a dataset of mappings from vectors to vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorMapping<const M: usize, const N: usize> {
    /// The input data.
    pub input: [f64; M],
    /// The output data.
    pub output: [f64; N],
}

/// Paired feature and target matrices.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// The feature matrix, one row per observation.
    pub xs: Matrix,
    /// The target matrix, one single-value row per observation.
    pub ys: Matrix,
}

impl Dataset {
    fn new(xs: Matrix, ys: Matrix) -> Self {
        debug_assert_eq!(xs.nrows(), ys.nrows(), "one target row per feature row");
        Self { xs, ys }
    }

    /// Return the number of observations.
    pub fn len(&self) -> usize {
        self.xs.nrows()
    }

    /// Return true if the dataset holds no observation.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the number of feature columns.
    pub fn n_vars(&self) -> usize {
        self.xs.ncols()
    }

    /// Create an iterator over `(features, targets)` row pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&[f64], &[f64])> + '_ {
        self.xs.rows().zip(self.ys.rows())
    }

    /// Split the dataset into its feature and target matrices.
    pub fn into_parts(self) -> (Matrix, Matrix) {
        (self.xs, self.ys)
    }

    /// Convert each observation into a fixed-size [`VectorMapping`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleShapes`] if the feature matrix doesn't have `M` columns or the
    /// target matrix doesn't have `N` columns.
    pub fn mappings<const M: usize, const N: usize>(&self) -> Result<Vec<VectorMapping<M, N>>> {
        let incompatible = || {
            Error::IncompatibleShapes(vec![self.xs.ncols(), self.ys.ncols()], vec![M, N])
        };
        if self.n_vars() != M || self.ys.ncols() != N {
            return Err(incompatible());
        }
        self.iter()
            .map(|(x, y)| {
                Ok(VectorMapping {
                    input: x.try_into().map_err(|_| incompatible())?,
                    output: y.try_into().map_err(|_| incompatible())?,
                })
            })
            .collect()
    }
}

/// Sample `n_obs` rows of `betas.len() - 1` features from `distribution` and prepend the
/// intercept column of ones.
fn with_intercept<R, D>(betas: &[f64], n_obs: usize, rng: &mut R, distribution: D) -> Result<Matrix>
where
    R: Rng + ?Sized,
    D: Distribution<f64>,
{
    if betas.is_empty() {
        tracing::debug!(n_obs, "rejected empty coefficient sequence");
        return Err(Error::InvalidParameter(
            "betas must hold at least the intercept".to_string(),
        ));
    }
    let n_vars = betas.len() - 1;
    let xs = Matrix::random([n_obs, n_vars], rng, distribution);
    Matrix::fill([n_obs, 1], 1.0).hstack(&xs)
}

#[cfg(test)]
mod tests {
    use super::{Dataset, VectorMapping};
    use crate::{error::Error, matrix::Matrix};

    fn dataset() -> Dataset {
        let xs = Matrix::new([3, 2], vec![1., 2., 1., 4., 1., 6.]).unwrap();
        let ys = Matrix::column(vec![3., 5., 7.]);
        Dataset::new(xs, ys)
    }

    #[test]
    fn iter_pairs_rows() {
        let ds = dataset();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.n_vars(), 2);
        let pairs: Vec<_> = ds.iter().collect();
        assert_eq!(pairs[1], (&[1., 4.][..], &[5.][..]));

        let (xs, ys) = ds.into_parts();
        assert_eq!(xs.shape(), [3, 2]);
        assert_eq!(ys.ravel(), vec![3., 5., 7.]);
    }

    #[test]
    fn mappings() {
        let ds = dataset();
        let samples = ds.mappings::<2, 1>().unwrap();
        assert_eq!(
            samples[2],
            VectorMapping {
                input: [1., 6.],
                output: [7.]
            }
        );

        let err = ds.mappings::<3, 1>().unwrap_err();
        assert_eq!(err, Error::IncompatibleShapes(vec![2, 1], vec![3, 1]));

        let empty = Dataset::new(Matrix::fill([0, 2], 0.), Matrix::fill([0, 1], 0.));
        assert!(empty.is_empty());
        assert!(empty.mappings::<2, 1>().unwrap().is_empty());
        assert!(empty.mappings::<1, 1>().is_err());
    }
}
