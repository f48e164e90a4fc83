//! Element-wise activation functions.

use std::{fmt, str::FromStr};

use crate::{
    error::{Error, Result},
    matrix::Matrix,
};

/// Apply the logistic function `1 / (1 + e^-x)` to `x`.
///
/// The result lies in `(0, 1)` for moderate inputs and saturates to exactly `0` or `1` once
/// `|x|` exceeds roughly 37.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// The activation functions known to the crate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Activation {
    /// Returns the input unchanged.
    #[default]
    Identity,
    /// See [`sigmoid`].
    Sigmoid,
    /// `max(0, x)`.
    Relu,
    /// Hyperbolic tangent.
    Tanh,
}

impl Activation {
    /// All activations, in declaration order.
    pub const ALL: [Self; 4] = [Self::Identity, Self::Sigmoid, Self::Relu, Self::Tanh];

    /// Return the name the activation is parsed from.
    pub fn name(self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Sigmoid => "sigmoid",
            Self::Relu => "relu",
            Self::Tanh => "tanh",
        }
    }

    /// Apply the activation to a single value.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Identity => x,
            Self::Sigmoid => sigmoid(x),
            Self::Relu => {
                if x > 0.0 {
                    x
                } else {
                    0.0
                }
            }
            Self::Tanh => x.tanh(),
        }
    }

    /// Apply the activation to each element, keeping the shape.
    #[must_use]
    pub fn apply_matrix(self, m: &Matrix) -> Matrix {
        m.map(|x| self.apply(x))
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Activation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| {
                Error::InvalidParameter(format!(
                    "unknown activation {s:?}, expected one of identity, sigmoid, relu, tanh"
                ))
            })
    }
}
