//! Extremal elements of a partial order.
//!
//! A relation matrix is read as an order with `m[(i, j)]` meaning `i ≤ j`, so
//! the elements above `i` are found in row `i` and the elements below it in
//! column `i`. The free functions only answer for matrices that are partial
//! orders and return `None` for anything else, since maximal and minimal
//! elements aren't meaningful without the order structure.

use crate::{matrix::RelationMatrix, partial_order::PartialOrder};

/// Maximal and minimal elements, both in increasing order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Extremal {
    pub maximal: Vec<usize>,
    pub minimal: Vec<usize>,
}

/// The greatest and least element, if they exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub greatest: Option<usize>,
    pub least: Option<usize>,
}

impl PartialOrder {
    /// Elements with nothing strictly above them.
    pub fn maximal(&self) -> Vec<usize> {
        (0..self.elements()).filter(|&i| (0..self.elements()).all(|j| !self.lt(i, j))).collect()
    }

    /// Elements with nothing strictly below them.
    pub fn minimal(&self) -> Vec<usize> {
        (0..self.elements()).filter(|&i| (0..self.elements()).all(|j| !self.lt(j, i))).collect()
    }

    /// The element every element is below, i.e. with a column of only ones.
    pub fn greatest(&self) -> Option<usize> {
        (0..self.elements()).find(|&g| (0..self.elements()).all(|j| self.le(j, g)))
    }

    /// The element below every element, i.e. with a row of only ones.
    pub fn least(&self) -> Option<usize> {
        (0..self.elements()).find(|&l| (0..self.elements()).all(|j| self.le(l, j)))
    }
}

/// Maximal and minimal elements of `m`, or `None` if `m` is not a partial
/// order.
pub fn extremal_elements(m: &RelationMatrix) -> Option<Extremal> {
    let po = PartialOrder::new(m.clone())?;
    Some(Extremal { maximal: po.maximal(), minimal: po.minimal() })
}

/// Greatest and least element of `m`, or `None` if `m` is not a partial order.
/// A partial order need not have either, which is `Some` with the missing
/// bound left as `None`.
pub fn greatest_least(m: &RelationMatrix) -> Option<Bounds> {
    let po = PartialOrder::new(m.clone())?;
    Some(Bounds { greatest: po.greatest(), least: po.least() })
}
