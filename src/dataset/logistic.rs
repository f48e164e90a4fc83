//! Generator for logistic relationships.

use rand::Rng;
use rand_distr::Uniform;

use crate::{
    activation::Activation,
    dataset::{with_intercept, Dataset},
    error::Result,
    matrix::Matrix,
};

/// The smallest target a logistic dataset holds.
const PROBABILITY_MIN: f64 = f64::MIN_POSITIVE;

/// The largest target a logistic dataset holds, the greatest `f64` below `1`.
const PROBABILITY_MAX: f64 = 1.0 - f64::EPSILON / 2.0;

/// Generate data that follows a multivariate logistic relationship `y = sigmoid(xs · betas)`.
///
/// The feature layout matches [`gen_multiple_linear`](super::gen_multiple_linear): a leading
/// column of ones for the intercept `betas[0]`, followed by `betas.len() - 1` sampled columns.
/// Sampled features are drawn uniformly from `[-0.5, 0.5)` so that the inflection region of the
/// logistic curve is well covered. Targets lie strictly inside `(0, 1)` for any finite
/// coefficients: values the sigmoid rounds to `0` or `1` are moved to the nearest representable
/// value inside the interval.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`](crate::Error::InvalidParameter) if `betas` is empty.
pub fn gen_multiple_logistic<R>(betas: &[f64], n_obs: usize, rng: &mut R) -> Result<Dataset>
where
    R: Rng + ?Sized,
{
    let xs = with_intercept(betas, n_obs, rng, Uniform::new(-0.5, 0.5))?;
    let z = xs.matmul(&Matrix::column(betas.to_vec()))?;
    let ys = Activation::Sigmoid
        .apply_matrix(&z)
        .map(|p| p.clamp(PROBABILITY_MIN, PROBABILITY_MAX));
    tracing::debug!(n_obs, n_vars = xs.ncols(), "generated multiple logistic dataset");
    Ok(Dataset::new(xs, ys))
}
