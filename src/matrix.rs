use std::{
    fmt,
    ops::{Index, IndexMut},
};

use rand::{Rng, distr::StandardUniform};

use crate::error::RelationError;

/// A binary relation over the elements `0..dim`, stored as a dense square
/// matrix of booleans. `self[(i, j)]` is `true` if `i` is related to `j`.
///
/// Every constructor checks that the matrix is square, binary and has at least
/// one element, so operations taking a `&RelationMatrix` never have to.
#[derive(Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")
)]
pub struct RelationMatrix {
    dim: usize,
    // Row-major, `elements[i * dim + j]` is entry `(i, j)`
    elements: Vec<bool>,
}

impl Clone for RelationMatrix {
    fn clone(&self) -> Self {
        Self { dim: self.dim, elements: self.elements.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.dim = source.dim;
        self.elements.clone_from(&source.elements);
    }
}

impl RelationMatrix {
    // Number of entries in a `dim`x`dim` matrix
    fn cells(dim: usize) -> Result<usize, RelationError> {
        if dim == 0 {
            return Err(RelationError::Empty);
        }
        dim.checked_mul(dim).ok_or(RelationError::TooLarge { dim })
    }

    /// The empty relation on `dim` elements.
    pub fn empty(dim: usize) -> Result<Self, RelationError> {
        let cells = Self::cells(dim)?;
        Ok(Self { dim, elements: vec![false; cells] })
    }

    /// The identity relation, where every element is only related to itself.
    pub fn identity(dim: usize) -> Result<Self, RelationError> {
        Ok(Self::empty(dim)?.with_diagonal(true))
    }

    /// The universal relation, where every element is related to every other.
    pub fn full(dim: usize) -> Result<Self, RelationError> {
        let cells = Self::cells(dim)?;
        Ok(Self { dim, elements: vec![true; cells] })
    }

    pub fn from_vec(elements: Vec<bool>, dim: usize) -> Result<Self, RelationError> {
        if Self::cells(dim)? != elements.len() {
            return Err(RelationError::LengthMismatch { dim, len: elements.len() });
        }
        Ok(Self { dim, elements })
    }

    // `dim` is the dimension of an existing matrix, so it is non-zero and `dim * dim` fits
    pub(crate) fn from_fn<F>(dim: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> bool,
    {
        debug_assert!(dim > 0);
        let elements = (0..dim * dim).map(|k| f(k / dim, k % dim)).collect();
        Self { dim, elements }
    }

    /// Builds a relation from rows of `0` and `1`.
    ///
    /// Fails if there are no rows, if any row differs in length from the
    /// number of rows, or if an entry is neither `0` nor `1`.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, RelationError> {
        let dim = rows.len();
        let mut elements = Vec::with_capacity(Self::cells(dim)?);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != dim {
                return Err(RelationError::NotSquare { row, expected: dim, found: values.len() });
            }
            for (column, &value) in values.iter().enumerate() {
                match value {
                    0 => elements.push(false),
                    1 => elements.push(true),
                    _ => return Err(RelationError::NotBinary { row, column, value }),
                }
            }
        }
        Ok(Self { dim, elements })
    }

    /// Samples a relation where every pair is related with probability 1/2.
    pub fn random<R: Rng>(rng: &mut R, dim: usize) -> Result<Self, RelationError> {
        let cells = Self::cells(dim)?;
        let elements = rng.sample_iter(StandardUniform).take(cells).collect();
        Ok(Self { dim, elements })
    }

    /// Samples a relation where every pair is related with probability
    /// `density`, which is clamped to `[0, 1]`.
    pub fn random_with_density<R: Rng>(
        rng: &mut R,
        dim: usize,
        density: f64,
    ) -> Result<Self, RelationError> {
        let cells = Self::cells(dim)?;
        let p = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        let elements = (0..cells).map(|_| rng.random_bool(p)).collect();
        Ok(Self { dim, elements })
    }

    /// Number of elements in the underlying set.
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn get(&self, i: usize, j: usize) -> Option<bool> {
        if i < self.dim && j < self.dim { Some(self.elements[i * self.dim + j]) } else { None }
    }

    pub fn row(&self, i: usize) -> &[bool] {
        &self.elements[i * self.dim..(i + 1) * self.dim]
    }

    pub fn column(&self, j: usize) -> impl Iterator<Item = bool> + '_ {
        (0..self.dim).map(move |i| self[(i, j)])
    }

    pub fn diagonal(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.dim).map(move |i| self[(i, i)])
    }

    /// Every related pair `(i, j)`, in row-major order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let dim = self.dim;
        self.elements.iter().enumerate().filter(|(_, v)| **v).map(move |(k, _)| (k / dim, k % dim))
    }

    /// Number of related pairs.
    pub fn count(&self) -> usize {
        self.elements.iter().filter(|v| **v).count()
    }

    /// The converse relation.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.dim, |i, j| self[(j, i)])
    }

    /// Copy of `self` with every diagonal entry set to `value`.
    #[must_use]
    pub fn with_diagonal(&self, value: bool) -> Self {
        let mut out = self.clone();
        for i in 0..self.dim {
            out[(i, i)] = value;
        }
        out
    }

    pub fn union(&self, other: &Self) -> Result<Self, RelationError> {
        self.zip_with(other, |a, b| a || b)
    }

    pub fn intersection(&self, other: &Self) -> Result<Self, RelationError> {
        self.zip_with(other, |a, b| a && b)
    }

    fn zip_with<F>(&self, other: &Self, f: F) -> Result<Self, RelationError>
    where
        F: Fn(bool, bool) -> bool,
    {
        self.check_dim(other)?;
        let elements = self.elements.iter().zip(&other.elements).map(|(&a, &b)| f(a, b)).collect();
        Ok(Self { dim: self.dim, elements })
    }

    pub(crate) fn check_dim(&self, other: &Self) -> Result<(), RelationError> {
        if self.dim == other.dim {
            Ok(())
        } else {
            Err(RelationError::DimensionMismatch { left: self.dim, right: other.dim })
        }
    }

    /// Returns true if every pair related by `self` is also related by
    /// `other`. Relations of different sizes are never subsets of each other.
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.dim == other.dim && self.elements.iter().zip(&other.elements).all(|(&a, &b)| !a || b)
    }

    /// The relation restricted to the elements in `keep`, which are
    /// renumbered `0..keep.len()`.
    ///
    /// `keep` has to be sorted, without duplicates, and only contain elements
    /// of this relation.
    pub fn restrict(&self, keep: &[usize]) -> Result<Self, RelationError> {
        if keep.is_empty() {
            return Err(RelationError::Empty);
        }
        if let Some(&index) = keep.iter().find(|&&x| x >= self.dim) {
            return Err(RelationError::OutOfRange { index, dim: self.dim });
        }
        if let Some(w) = keep.windows(2).find(|w| w[0] >= w[1]) {
            return Err(RelationError::Unsorted { index: w[1] });
        }
        Ok(Self::from_fn(keep.len(), |i, j| self[(keep[i], keep[j])]))
    }

    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.elements.chunks(self.dim).map(|row| row.iter().map(|&v| u8::from(v)).collect()).collect()
    }
}

impl Index<(usize, usize)> for RelationMatrix {
    type Output = bool;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        assert!(i < self.dim && j < self.dim, "({i}, {j}) out of range for dimension {}", self.dim);
        &self.elements[i * self.dim + j]
    }
}

impl IndexMut<(usize, usize)> for RelationMatrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        assert!(i < self.dim && j < self.dim, "({i}, {j}) out of range for dimension {}", self.dim);
        &mut self.elements[i * self.dim + j]
    }
}

impl TryFrom<Vec<Vec<u8>>> for RelationMatrix {
    type Error = RelationError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<&RelationMatrix> for Vec<Vec<u8>> {
    fn from(m: &RelationMatrix) -> Self {
        m.to_rows()
    }
}

impl From<RelationMatrix> for Vec<Vec<u8>> {
    fn from(m: RelationMatrix) -> Self {
        m.to_rows()
    }
}

impl fmt::Display for RelationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.dim {
            for (j, &v) in self.row(i).iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                f.write_str(if v { "1" } else { "0" })?;
            }
            if i + 1 < self.dim {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
