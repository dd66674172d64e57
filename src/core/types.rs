//! Core type definitions: point sets and dense kernel matrices

use crate::core::{KernelError, Result};
use std::ops::Index;

/// Ordered set of points of equal dimension, stored row-major
///
/// Only the constructors below build a point set, so `data.len()` is always
/// `len() * dim()`.
#[derive(Clone, Debug, PartialEq)]
pub struct PointSet {
    data: Vec<f64>,
    n_points: usize,
    dim: usize,
}

impl PointSet {
    /// Build a point set from a list of rows
    ///
    /// Every row must have the same length as the first one.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let dim = rows.first().map_or(0, Vec::len);
        let n_points = rows.len();
        let mut data = Vec::with_capacity(n_points * dim);

        for row in rows {
            if row.len() != dim {
                return Err(KernelError::DimensionMismatch {
                    expected: dim,
                    actual: row.len(),
                });
            }
            data.extend(row);
        }

        Ok(Self {
            data,
            n_points,
            dim,
        })
    }

    /// Build a point set from a flat row-major buffer
    pub fn from_flat(data: Vec<f64>, dim: usize) -> Result<Self> {
        if dim == 0 {
            if data.is_empty() {
                return Ok(Self::empty());
            }
            return Err(KernelError::InvalidParameter(
                "Point dimension must be positive".to_string(),
            ));
        }
        if data.len() % dim != 0 {
            return Err(KernelError::InvalidParameter(format!(
                "Buffer of length {} is not a whole number of {dim}-dimensional points",
                data.len()
            )));
        }

        let n_points = data.len() / dim;
        Ok(Self {
            data,
            n_points,
            dim,
        })
    }

    /// Promote a single point to a one-row point set
    pub fn from_point(point: &[f64]) -> Self {
        Self {
            data: point.to_vec(),
            n_points: 1,
            dim: point.len(),
        }
    }

    /// Treat every value as a separate one-dimensional point
    pub fn from_column(values: &[f64]) -> Self {
        Self {
            data: values.to_vec(),
            n_points: values.len(),
            dim: 1,
        }
    }

    /// Point set without any points
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            n_points: 0,
            dim: 0,
        }
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.n_points
    }

    /// Check if the set holds no points
    pub fn is_empty(&self) -> bool {
        self.n_points == 0
    }

    /// Dimension of every point
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Coordinates of point `i`
    ///
    /// # Panics
    /// Panics if `i >= len()`
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.n_points, "Point index {i} out of range");
        &self.data[i * self.dim..(i + 1) * self.dim]
    }

    /// Iterate over the points in order
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.n_points).map(move |i| self.row(i))
    }

    /// Euclidean norm of every point
    pub fn norms(&self) -> Vec<f64> {
        self.rows()
            .map(|row| row.iter().map(|&v| v * v).sum::<f64>().sqrt())
            .collect()
    }

    /// Flat row-major coordinates
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

/// Dense row-major M×N matrix of pairwise values
#[derive(Clone, Debug, PartialEq)]
pub struct KernelMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl KernelMatrix {
    /// Fill a matrix entry by entry from `f(i, j)`
    pub fn from_fn<F>(rows: usize, cols: usize, f: F) -> Self
    where
        F: Fn(usize, usize) -> f64 + Sync,
    {
        let mut data = vec![0.0; rows * cols];

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            data.par_chunks_mut(cols.max(1))
                .enumerate()
                .for_each(|(i, row)| {
                    for (j, value) in row.iter_mut().enumerate() {
                        *value = f(i, j);
                    }
                });
        }

        #[cfg(not(feature = "parallel"))]
        for (i, row) in data.chunks_mut(cols.max(1)).enumerate() {
            for (j, value) in row.iter_mut().enumerate() {
                *value = f(i, j);
            }
        }

        Self { rows, cols, data }
    }

    /// Wrap an existing row-major buffer
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(KernelError::DimensionMismatch {
                expected: rows * cols,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Apply `f` to every entry
    pub fn map<F>(mut self, f: F) -> Self
    where
        F: Fn(f64) -> f64 + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            self.data.par_iter_mut().for_each(|v| *v = f(*v));
        }

        #[cfg(not(feature = "parallel"))]
        self.data.iter_mut().for_each(|v| *v = f(*v));

        self
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Entry at row `i`, column `j`
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(
            i < self.rows && j < self.cols,
            "Index ({i}, {j}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        self.data[i * self.cols + j]
    }

    /// Row `i` as a slice
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.rows, "Row {i} out of range");
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Main diagonal, of length min(rows, cols)
    pub fn diagonal(&self) -> Vec<f64> {
        (0..self.rows.min(self.cols))
            .map(|i| self.data[i * self.cols + i])
            .collect()
    }

    pub fn transpose(&self) -> Self {
        Self::from_fn(self.cols, self.rows, |i, j| self.get(j, i))
    }

    /// Check symmetry up to an absolute tolerance
    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        if self.rows != self.cols {
            return false;
        }
        (0..self.rows).all(|i| {
            (i + 1..self.cols).all(|j| (self.get(i, j) - self.get(j, i)).abs() <= tolerance)
        })
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }
}

impl Index<(usize, usize)> for KernelMatrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(
            i < self.rows && j < self.cols,
            "Index ({i}, {j}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[i * self.cols + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_set_from_rows() {
        let points = PointSet::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points.dim(), 2);
        assert_eq!(points.row(1), &[3.0, 4.0]);
        assert_eq!(points.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_point_set_ragged_rows() {
        let result = PointSet::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(
            result,
            Err(KernelError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_point_set_from_flat() {
        let points = PointSet::from_flat(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points.row(0), &[1.0, 2.0, 3.0]);

        assert!(PointSet::from_flat(vec![1.0], 0).is_err());
        assert!(PointSet::from_flat(Vec::new(), 0).unwrap().is_empty());
    }

    #[test]
    fn test_point_set_from_flat_partial_point() {
        let result = PointSet::from_flat(vec![1.0, 2.0, 3.0], 2);
        match result {
            Err(KernelError::InvalidParameter(message)) => {
                assert!(message.contains("length 3"));
                assert!(message.contains("2-dimensional"));
            }
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    #[test]
    fn test_point_set_length_invariant() {
        let sets = vec![
            PointSet::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap(),
            PointSet::from_flat(vec![1.0; 12], 4).unwrap(),
            PointSet::from_point(&[0.5, -0.5, 1.0]),
            PointSet::from_column(&[0.0, 1.0]),
            PointSet::from_rows(Vec::new()).unwrap(),
            PointSet::empty(),
        ];

        for points in &sets {
            assert_eq!(points.as_slice().len(), points.len() * points.dim());
            assert_eq!(points.rows().count(), points.len());
            assert_eq!(points.norms().len(), points.len());
        }
    }

    #[test]
    fn test_single_point_promotion() {
        let points = PointSet::from_point(&[0.5, -0.5]);
        assert_eq!(points.len(), 1);
        assert_eq!(points.dim(), 2);

        let column = PointSet::from_column(&[0.0, 1.0, 2.0]);
        assert_eq!(column.len(), 3);
        assert_eq!(column.dim(), 1);
        assert_eq!(column.row(2), &[2.0]);
    }

    #[test]
    fn test_point_set_norms() {
        let points = PointSet::from_rows(vec![vec![3.0, 4.0], vec![0.0, 0.0]]).unwrap();
        assert_eq!(points.norms(), vec![5.0, 0.0]);
    }

    #[test]
    fn test_empty_point_set() {
        let points = PointSet::from_rows(Vec::new()).unwrap();
        assert!(points.is_empty());
        assert_eq!(points.rows().count(), 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_point_set_row_out_of_range() {
        PointSet::from_point(&[1.0]).row(1);
    }

    #[test]
    fn test_matrix_from_fn_and_index() {
        let m = KernelMatrix::from_fn(2, 3, |i, j| (i * 10 + j) as f64);
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.get(1, 2), 12.0);
        assert_eq!(m[(0, 1)], 1.0);
        assert_eq!(m.row(1), &[10.0, 11.0, 12.0]);
        assert_eq!(m.diagonal(), vec![0.0, 11.0]);
    }

    #[test]
    fn test_matrix_transpose_and_symmetry() {
        let m = KernelMatrix::from_fn(2, 3, |i, j| (i + 2 * j) as f64);
        let t = m.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.get(2, 1), m.get(1, 2));
        assert!(!m.is_symmetric(0.0));

        let s = KernelMatrix::from_fn(3, 3, |i, j| (i + j) as f64);
        assert!(s.is_symmetric(0.0));
    }

    #[test]
    fn test_matrix_map_and_from_vec() {
        let m = KernelMatrix::from_vec(1, 2, vec![1.0, 4.0]).unwrap().map(f64::sqrt);
        assert_eq!(m.into_vec(), vec![1.0, 2.0]);
        assert!(KernelMatrix::from_vec(2, 2, vec![1.0]).is_err());
    }

    #[test]
    fn test_empty_matrix() {
        let m = KernelMatrix::from_fn(0, 4, |_, _| 1.0);
        assert_eq!(m.shape(), (0, 4));
        assert!(m.as_slice().is_empty());
        assert!(m.diagonal().is_empty());
    }
}
