//! Generators over evenly spaced, non-random inputs.

use std::{fmt, str::FromStr};

use crate::{
    activation::Activation,
    dataset::Dataset,
    error::{Error, Result},
    matrix::Matrix,
};

/// Half-width of the input range of [`gen_trigonometric`].
///
/// This is the literal `3.14` rather than [`std::f64::consts::PI`].
#[allow(clippy::approx_constant)]
pub const TRIG_BOUND: f64 = 3.14;

/// Half-width of the input range of [`gen_powx`].
pub const POWX_BOUND: f64 = 5.0;

/// The exponent used by [`gen_powx`] when none is chosen.
pub const DEFAULT_POW_X: f64 = 2.0;

/// The functions [`gen_trigonometric`] can generate data for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Trigonometric {
    /// `sin(x)`.
    #[default]
    Sine,
    /// `cos(x)`.
    Cosine,
    /// `tanh(x)`.
    Tanh,
}

impl Trigonometric {
    /// All functions, in declaration order.
    pub const ALL: [Self; 3] = [Self::Sine, Self::Cosine, Self::Tanh];

    /// Return the name the function is parsed from.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sine => "sine",
            Self::Cosine => "cosine",
            Self::Tanh => "tanh",
        }
    }

    /// Apply the function to a single value.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Sine => x.sin(),
            Self::Cosine => x.cos(),
            Self::Tanh => Activation::Tanh.apply(x),
        }
    }
}

impl fmt::Display for Trigonometric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Trigonometric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|func| func.name() == s)
            .ok_or_else(|| {
                tracing::debug!(func = s, "rejected trigonometric function");
                Error::InvalidParameter(format!(
                    "unknown trigonometric function {s:?}, expected one of sine, cosine, tanh"
                ))
            })
    }
}

/// Generate data following a trigonometric or hyperbolic function.
///
/// The features are `n_obs` evenly spaced values over `[-3.14, 3.14]`, endpoints included. No
/// randomness is involved, so equal arguments always give equal datasets.
pub fn gen_trigonometric(n_obs: usize, func: Trigonometric) -> Dataset {
    let xs = Matrix::linspace(-TRIG_BOUND, TRIG_BOUND, n_obs);
    let ys = xs.map(|x| func.apply(x));
    tracing::debug!(n_obs, %func, "generated trigonometric dataset");
    Dataset::new(xs, ys)
}

/// Generate data following `y = x ^ pow_x`.
///
/// The features are `n_obs` evenly spaced values over `[-5, 5]`, endpoints included. The
/// exponent is not validated: fractional exponents of negative inputs give NaN, and negative
/// exponents give infinities at zero.
pub fn gen_powx(n_obs: usize, pow_x: f64) -> Dataset {
    let xs = Matrix::linspace(-POWX_BOUND, POWX_BOUND, n_obs);
    let ys = xs.map(|x| x.powf(pow_x));
    tracing::debug!(n_obs, pow_x, "generated power dataset");
    Dataset::new(xs, ys)
}
