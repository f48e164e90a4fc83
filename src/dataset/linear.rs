//! Generators for linear relationships.

use rand::Rng;
use rand_distr::Uniform;

use crate::{
    dataset::{with_intercept, Dataset},
    error::Result,
    matrix::Matrix,
};

/// Generate data that follows a univariate linear relationship `y = beta_0 + beta_1 * x`.
///
/// The features are `n_obs` values drawn uniformly from `[0, 1)`. Both matrices have shape
/// `(n_obs, 1)`.
pub fn gen_simple_linear<R>(beta_0: f64, beta_1: f64, n_obs: usize, rng: &mut R) -> Dataset
where
    R: Rng + ?Sized,
{
    let xs = Matrix::random([n_obs, 1], rng, Uniform::new(0.0, 1.0));
    let ys = xs.map(|x| beta_0 + beta_1 * x);
    tracing::debug!(n_obs, beta_0, beta_1, "generated simple linear dataset");
    Dataset::new(xs, ys)
}

/// Generate data that follows a multivariate linear relationship.
///
/// `betas[0]` is the intercept and is paired with a leading feature column of ones. The remaining
/// `betas.len() - 1` feature columns are drawn uniformly from `[0, 1)`, and the targets are the
/// product of the feature matrix with `betas`, as a single column.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`](crate::Error::InvalidParameter) if `betas` is empty.
pub fn gen_multiple_linear<R>(betas: &[f64], n_obs: usize, rng: &mut R) -> Result<Dataset>
where
    R: Rng + ?Sized,
{
    let xs = with_intercept(betas, n_obs, rng, Uniform::new(0.0, 1.0))?;
    let ys = xs.matmul(&Matrix::column(betas.to_vec()))?;
    tracing::debug!(n_obs, n_vars = xs.ncols(), "generated multiple linear dataset");
    Ok(Dataset::new(xs, ys))
}
