//! A value-level description of a generator and its parameters.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    dataset::{
        gen_multiple_linear, gen_multiple_logistic, gen_powx, gen_simple_linear,
        gen_trigonometric, Dataset, Trigonometric,
    },
    error::Result,
};

/// A functional form relating the features of a dataset to its targets.
///
/// Each variant carries the parameters of the matching generator, so a family can be chosen at
/// runtime and sampled any number of times.
#[derive(Clone, Debug, PartialEq)]
pub enum Family {
    /// See [`gen_simple_linear`].
    SimpleLinear {
        /// The intercept.
        beta_0: f64,
        /// The slope.
        beta_1: f64,
    },
    /// See [`gen_multiple_linear`].
    MultipleLinear {
        /// The intercept followed by one coefficient per sampled feature.
        betas: Vec<f64>,
    },
    /// See [`gen_multiple_logistic`].
    MultipleLogistic {
        /// The intercept followed by one coefficient per sampled feature.
        betas: Vec<f64>,
    },
    /// See [`gen_trigonometric`].
    Trigonometric(Trigonometric),
    /// See [`gen_powx`].
    Power {
        /// The exponent applied to each feature.
        pow_x: f64,
    },
}

impl Default for Family {
    fn default() -> Self {
        Self::Trigonometric(Trigonometric::default())
    }
}

impl Family {
    /// Return a stable lowercase name for the family.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SimpleLinear { .. } => "simple_linear",
            Self::MultipleLinear { .. } => "multiple_linear",
            Self::MultipleLogistic { .. } => "multiple_logistic",
            Self::Trigonometric(func) => func.name(),
            Self::Power { .. } => "powx",
        }
    }

    /// Return true if the features of the family are sampled rather than evenly spaced.
    pub fn is_random(&self) -> bool {
        matches!(
            self,
            Self::SimpleLinear { .. } | Self::MultipleLinear { .. } | Self::MultipleLogistic { .. }
        )
    }

    /// Generate `n_obs` observations, drawing any random features from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`](crate::Error::InvalidParameter) if a multivariate
    /// family holds no coefficient.
    pub fn generate<R>(&self, n_obs: usize, rng: &mut R) -> Result<Dataset>
    where
        R: Rng + ?Sized,
    {
        let _span = tracing::debug_span!("generate", family = self.name()).entered();
        match self {
            Self::SimpleLinear { beta_0, beta_1 } => {
                Ok(gen_simple_linear(*beta_0, *beta_1, n_obs, rng))
            }
            Self::MultipleLinear { betas } => gen_multiple_linear(betas, n_obs, rng),
            Self::MultipleLogistic { betas } => gen_multiple_logistic(betas, n_obs, rng),
            Self::Trigonometric(func) => Ok(gen_trigonometric(n_obs, *func)),
            Self::Power { pow_x } => Ok(gen_powx(n_obs, *pow_x)),
        }
    }

    /// Generate `n_obs` observations using a random number generator seeded from `seed`.
    ///
    /// # Errors
    ///
    /// See [`Family::generate`].
    pub fn generate_seeded(&self, n_obs: usize, seed: u64) -> Result<Dataset> {
        self.generate(n_obs, &mut StdRng::seed_from_u64(seed))
    }
}
