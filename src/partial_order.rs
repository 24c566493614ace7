use std::cmp::Ordering;

use crate::{classify::is_partial_order, matrix::RelationMatrix};

/// A relation known to be a partial order, i.e. reflexive, antisymmetric and
/// transitive.
#[derive(Debug, PartialEq, Eq)]
pub struct PartialOrder {
    // `matrix[(a, b)]` is `true` if a ≤ b
    matrix: RelationMatrix,
}

impl Clone for PartialOrder {
    fn clone(&self) -> Self {
        Self { matrix: self.matrix.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.matrix.clone_from(&source.matrix);
    }
}

impl PartialOrder {
    /// Returns `None` if `matrix` is not a partial order.
    pub fn new(matrix: RelationMatrix) -> Option<Self> {
        if is_partial_order(&matrix) { Some(Self { matrix }) } else { None }
    }

    /// The partial order where every element is only comparable to itself.
    pub fn new_empty(n: usize) -> Option<Self> {
        RelationMatrix::identity(n).ok().map(|matrix| Self { matrix })
    }

    /// Number of elements in the ordered set.
    pub fn elements(&self) -> usize {
        self.matrix.dim()
    }

    pub fn as_matrix(&self) -> &RelationMatrix {
        &self.matrix
    }

    pub fn into_matrix(self) -> RelationMatrix {
        self.matrix
    }

    /// Returns true if and only if `a ≤ b`.
    #[must_use]
    pub fn le(&self, a: usize, b: usize) -> bool {
        assert!(a < self.elements() && b < self.elements());
        self.matrix[(a, b)]
    }

    /// Returns true if and only if `a < b`.
    #[must_use]
    pub fn lt(&self, a: usize, b: usize) -> bool {
        a != b && self.le(a, b)
    }

    pub fn ord(&self, a: usize, b: usize) -> Option<Ordering> {
        assert!(a < self.elements() && b < self.elements());
        // Antisymmetry means only `a == b` can be related both ways
        if a == b {
            Some(Ordering::Equal)
        } else if self.le(a, b) {
            Some(Ordering::Less)
        } else if self.le(b, a) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

impl TryFrom<RelationMatrix> for PartialOrder {
    type Error = RelationMatrix;

    /// Gives back the matrix if it is not a partial order.
    fn try_from(matrix: RelationMatrix) -> Result<Self, Self::Error> {
        if is_partial_order(&matrix) { Ok(Self { matrix }) } else { Err(matrix) }
    }
}
