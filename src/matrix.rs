//! A dense two-dimensional array of `f64` values.

use std::{ops, slice};

use rand::Rng;
use rand_distr::Distribution;

use crate::error::{Error, Result};

/// A dense, row-major matrix.
///
/// Throughout the crate, rows are observations and columns are variables. A matrix may have zero
/// rows, which is what the generators return when asked for no observations.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    buffer: Vec<f64>,
    layout: Layout,
}

impl ops::Index<[usize; 2]> for Matrix {
    type Output = f64;

    fn index(&self, index: [usize; 2]) -> &Self::Output {
        assert!(
            self.layout.contains(index),
            "index {:?} out of bounds for shape {:?}",
            index,
            self.layout.shape
        );
        &self.buffer[self.layout.translate(index)]
    }
}

impl<'a> IntoIterator for &'a Matrix {
    type Item = &'a f64;
    type IntoIter = slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.buffer.iter()
    }
}

impl Matrix {
    /// Create a matrix given its shape and data.
    ///
    /// The order of the elements in `data` is in increasing order of the column, then the row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleShapes`] if `data` doesn't hold exactly `rows * cols`
    /// elements.
    pub fn new(shape: [usize; 2], data: Vec<f64>) -> Result<Self> {
        let layout = Layout::contiguous(shape);
        if layout.capacity() != data.len() {
            return Err(Error::IncompatibleShapes(shape.to_vec(), vec![data.len()]));
        }
        Ok(Self {
            buffer: data,
            layout,
        })
    }

    /// Create a matrix given its shape filled with a single value.
    #[must_use]
    pub fn fill(shape: [usize; 2], value: f64) -> Self {
        let layout = Layout::contiguous(shape);
        Self {
            buffer: vec![value; layout.capacity()],
            layout,
        }
    }

    /// Create a single-column matrix holding the given values.
    #[must_use]
    pub fn column(data: Vec<f64>) -> Self {
        let layout = Layout::contiguous([data.len(), 1]);
        Self {
            buffer: data,
            layout,
        }
    }

    /// Create a matrix whose elements are drawn independently from `distribution`.
    ///
    /// Elements are drawn in row-major order, so a seeded `rng` always yields the same matrix.
    pub fn random<R, D>(shape: [usize; 2], rng: &mut R, distribution: D) -> Self
    where
        R: Rng + ?Sized,
        D: Distribution<f64>,
    {
        let layout = Layout::contiguous(shape);
        let buffer = (0..layout.capacity())
            .map(|_| distribution.sample(rng))
            .collect();
        Self { buffer, layout }
    }

    /// Create a single-column matrix of `num` evenly spaced values over `[start, stop]`.
    ///
    /// Both ends are included. A single point yields `start` and no points yield an empty column.
    #[must_use]
    pub fn linspace(start: f64, stop: f64, num: usize) -> Self {
        let data = match num {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let step = (stop - start) / (num - 1) as f64;
                let mut data: Vec<_> = (0..num).map(|i| start + i as f64 * step).collect();
                // Accumulated rounding must not move the endpoint.
                data[num - 1] = stop;
                data
            }
        };
        Self::column(data)
    }

    /// Return the shape of the matrix as `[rows, cols]`.
    pub fn shape(&self) -> [usize; 2] {
        self.layout.shape
    }

    /// Return the number of rows.
    pub fn nrows(&self) -> usize {
        self.layout.shape[0]
    }

    /// Return the number of columns.
    pub fn ncols(&self) -> usize {
        self.layout.shape[1]
    }

    /// Return the number of elements.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Return true if the matrix holds no element.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Return the element at the given row and column, if it exists.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        let index = [row, col];
        self.layout
            .contains(index)
            .then(|| self.buffer[self.layout.translate(index)])
    }

    /// Return the elements of the given row, if it exists.
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row >= self.nrows() {
            return None;
        }
        let cols = self.ncols();
        Some(&self.buffer[row * cols..(row + 1) * cols])
    }

    /// Create an iterator over the rows of the matrix.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        let cols = self.ncols();
        (0..self.nrows()).map(move |r| &self.buffer[r * cols..(r + 1) * cols])
    }

    /// Collect the elements of the given column, if it exists.
    pub fn col(&self, col: usize) -> Option<Vec<f64>> {
        if col >= self.ncols() {
            return None;
        }
        Some(
            (0..self.nrows())
                .map(|r| self.buffer[self.layout.translate([r, col])])
                .collect(),
        )
    }

    /// Create a row-major iterator over the matrix.
    pub fn iter(&self) -> slice::Iter<'_, f64> {
        self.into_iter()
    }

    /// Collect all elements of the matrix into a [`Vec`].
    #[must_use]
    pub fn ravel(&self) -> Vec<f64> {
        self.buffer.clone()
    }

    /// Apply `op` to each element.
    #[must_use]
    pub fn map<F>(&self, op: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self {
            buffer: self.buffer.iter().map(|&x| op(x)).collect(),
            layout: self.layout,
        }
    }

    /// Combine `self` and `other` element-wise with `op`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleShapes`] if the shapes differ.
    pub fn zip<F>(&self, other: &Self, op: F) -> Result<Self>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.shape() != other.shape() {
            return Err(self.incompatible(other));
        }
        let buffer = self
            .buffer
            .iter()
            .zip(other.buffer.iter())
            .map(|(&x, &y)| op(x, y))
            .collect();
        Ok(Self {
            buffer,
            layout: self.layout,
        })
    }

    /// Concatenate the columns of `other` to the right of the columns of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleShapes`] if the row counts differ.
    pub fn hstack(&self, other: &Self) -> Result<Self> {
        if self.nrows() != other.nrows() {
            return Err(self.incompatible(other));
        }
        let shape = [self.nrows(), self.ncols() + other.ncols()];
        let mut buffer = Vec::with_capacity(shape[0] * shape[1]);
        for (lhs, rhs) in self.rows().zip(other.rows()) {
            buffer.extend_from_slice(lhs);
            buffer.extend_from_slice(rhs);
        }
        Ok(Self {
            buffer,
            layout: Layout::contiguous(shape),
        })
    }

    /// Matrix product of `self` with shape `(m, k)` and `other` with shape `(k, n)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleShapes`] if the inner dimensions differ.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        let [m, k] = self.shape();
        let [rhs_k, n] = other.shape();
        if k != rhs_k {
            return Err(self.incompatible(other));
        }
        let mut buffer = vec![0.0; m * n];
        for (i, row) in self.rows().enumerate() {
            for (p, &x) in row.iter().enumerate() {
                for j in 0..n {
                    buffer[i * n + j] += x * other.buffer[other.layout.translate([p, j])];
                }
            }
        }
        Ok(Self {
            buffer,
            layout: Layout::contiguous([m, n]),
        })
    }

    /// Reshape the matrix to the given shape, keeping the number of elements unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleShapes`] if the new shape holds a different number of
    /// elements.
    pub fn reshape(&self, shape: [usize; 2]) -> Result<Self> {
        let layout = Layout::contiguous(shape);
        if layout.capacity() != self.layout.capacity() {
            return Err(Error::IncompatibleShapes(
                self.shape().to_vec(),
                shape.to_vec(),
            ));
        }
        Ok(Self {
            buffer: self.buffer.clone(),
            layout,
        })
    }

    fn incompatible(&self, other: &Self) -> Error {
        Error::IncompatibleShapes(self.shape().to_vec(), other.shape().to_vec())
    }
}

/// A layout describes how a matrix is laid out in its buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Layout {
    /// The number of elements in each axis.
    shape: [usize; 2],

    /// The number of elements in the buffer that need to be skipped to move to the next element
    /// in each axis.
    strides: [usize; 2],
}

impl Layout {
    /// Creates a contiguous row-major layout based on the given shape.
    fn contiguous(shape: [usize; 2]) -> Self {
        Self {
            shape,
            strides: [shape[1], 1],
        }
    }

    /// Returns the number of elements in a matrix having this layout.
    fn capacity(&self) -> usize {
        self.shape[0] * self.shape[1]
    }

    /// Returns true if the index addresses an element of the matrix.
    fn contains(&self, index: [usize; 2]) -> bool {
        index[0] < self.shape[0] && index[1] < self.shape[1]
    }

    /// Translates a matrix index into a position in the buffer.
    fn translate(&self, index: [usize; 2]) -> usize {
        index[0] * self.strides[0] + index[1] * self.strides[1]
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};
    use rand_distr::Uniform;

    use super::Matrix;
    use crate::error::Error;

    #[test]
    fn new_checks_element_count() {
        let m = Matrix::new([2, 3], vec![1., 2., 3., 4., 5., 6.]).unwrap();
        assert_eq!(m.shape(), [2, 3]);
        assert_eq!(m[[1, 0]], 4.);
        assert_eq!(m.get(0, 2), Some(3.));
        assert_eq!(m.get(2, 0), None);

        let err = Matrix::new([2, 3], vec![1., 2.]).unwrap_err();
        assert_eq!(err, Error::IncompatibleShapes(vec![2, 3], vec![2]));
    }

    #[test]
    fn empty_rows() {
        let m = Matrix::fill([0, 3], 1.);
        assert_eq!(m.shape(), [0, 3]);
        assert!(m.is_empty());
        assert_eq!(m.rows().count(), 0);
        assert_eq!(m.col(0), Some(vec![]));
        assert_eq!(m.row(0), None);
    }

    #[test]
    fn linspace() {
        assert!(Matrix::linspace(0., 1., 0).is_empty());
        assert_eq!(Matrix::linspace(-5., 5., 1).ravel(), vec![-5.]);
        assert_eq!(Matrix::linspace(-5., 5., 5).ravel(), vec![-5., -2.5, 0., 2.5, 5.]);

        let m = Matrix::linspace(-3.14, 3.14, 7);
        assert_eq!(m.shape(), [7, 1]);
        assert_eq!(m[[0, 0]], -3.14);
        assert_eq!(m[[6, 0]], 3.14);
    }

    #[test]
    fn random_is_reproducible() {
        let dist = Uniform::new(0.0, 1.0);
        let m1 = Matrix::random([4, 3], &mut StdRng::seed_from_u64(7), dist);
        let m2 = Matrix::random([4, 3], &mut StdRng::seed_from_u64(7), dist);
        assert_eq!(m1, m2);
        assert_eq!(m1.shape(), [4, 3]);
        assert!(m1.iter().all(|x| (0.0..1.0).contains(x)));
    }

    #[test]
    fn rows_and_columns() {
        let m = Matrix::new([3, 2], vec![1., 2., 3., 4., 5., 6.]).unwrap();
        let rows: Vec<_> = m.rows().collect();
        assert_eq!(rows, vec![&[1., 2.][..], &[3., 4.][..], &[5., 6.][..]]);
        assert_eq!(m.row(1), Some(&[3., 4.][..]));
        assert_eq!(m.col(1), Some(vec![2., 4., 6.]));
        assert_eq!(m.col(2), None);
    }

    #[test]
    fn map_and_zip() {
        let m = Matrix::new([2, 2], vec![1., 2., 3., 4.]).unwrap();
        assert_eq!(m.map(|x| x * x).ravel(), vec![1., 4., 9., 16.]);
        assert_eq!(m.zip(&m, |x, y| x + y).unwrap().ravel(), vec![2., 4., 6., 8.]);
        assert!(m.zip(&m.reshape([4, 1]).unwrap(), |x, _| x).is_err());
    }

    #[test]
    fn hstack() {
        let ones = Matrix::fill([2, 1], 1.);
        let xs = Matrix::new([2, 2], vec![3., 4., 5., 6.]).unwrap();
        let m = ones.hstack(&xs).unwrap();
        assert_eq!(m.shape(), [2, 3]);
        assert_eq!(m.ravel(), vec![1., 3., 4., 1., 5., 6.]);

        let err = ones.hstack(&Matrix::fill([3, 1], 0.)).unwrap_err();
        assert_eq!(err, Error::IncompatibleShapes(vec![2, 1], vec![3, 1]));
    }

    #[test]
    fn matmul() {
        let a = Matrix::new([2, 3], vec![1., 2., 3., 4., 5., 6.]).unwrap();
        let b = Matrix::column(vec![1., 0., -1.]);
        let c = a.matmul(&b).unwrap();
        assert_eq!(c.shape(), [2, 1]);
        assert_eq!(c.ravel(), vec![-2., -2.]);

        let at = Matrix::new([3, 2], vec![1., 4., 2., 5., 3., 6.]).unwrap();
        let c = a.matmul(&at).unwrap();
        assert_eq!(c.shape(), [2, 2]);
        assert_eq!(c.ravel(), vec![14., 32., 32., 77.]);

        assert!(a.matmul(&a).is_err());
    }

    #[test]
    fn reshape() {
        let a = Matrix::new([2, 3], vec![1., 2., 3., 4., 5., 6.]).unwrap();
        let r = a.reshape([3, 2]).unwrap();
        assert_eq!(r.row(2), Some(&[5., 6.][..]));
        assert_eq!(r.ravel(), a.ravel());
        assert_eq!(
            a.reshape([4, 2]).unwrap_err(),
            Error::IncompatibleShapes(vec![2, 3], vec![4, 2])
        );
    }
}
