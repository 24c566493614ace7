//! Checks for the basic properties of a relation. The properties that can be
//! repaired by adding pairs (reflexivity, symmetry and transitivity) also
//! return the closure when they don't hold.

use tracing::debug;

use crate::matrix::RelationMatrix;

/// Result of checking a property that has a closure.
///
/// The property holds exactly when there is no closure. Otherwise the closure
/// is the smallest relation containing the checked one which has the property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Closure {
    closure: Option<RelationMatrix>,
}

impl Closure {
    pub(crate) fn satisfied() -> Self {
        Self { closure: None }
    }

    pub(crate) fn repaired(closure: RelationMatrix) -> Self {
        Self { closure: Some(closure) }
    }

    pub fn holds(&self) -> bool {
        self.closure.is_none()
    }

    pub fn closure(&self) -> Option<&RelationMatrix> {
        self.closure.as_ref()
    }

    pub fn into_closure(self) -> Option<RelationMatrix> {
        self.closure
    }

    /// The relation with the property, which is `original` itself if the
    /// property already held.
    pub fn into_matrix(self, original: &RelationMatrix) -> RelationMatrix {
        self.closure.unwrap_or_else(|| original.clone())
    }
}

/// Every element is related to itself. The closure adds the missing diagonal.
pub fn reflexive(m: &RelationMatrix) -> Closure {
    if m.diagonal().all(|v| v) {
        Closure::satisfied()
    } else {
        let closure = m.with_diagonal(true);
        debug!(dim = m.dim(), added = closure.count() - m.count(), "computed reflexive closure");
        Closure::repaired(closure)
    }
}

/// The relation is its own converse. The closure adds the converse of every
/// pair.
pub fn symmetric(m: &RelationMatrix) -> Closure {
    let t = m.transpose();
    if *m == t {
        return Closure::satisfied();
    }
    let mut closure = t;
    for (i, j) in m.pairs() {
        closure[(i, j)] = true;
    }
    debug!(dim = m.dim(), added = closure.count() - m.count(), "computed symmetric closure");
    Closure::repaired(closure)
}

/// No pair is related in both directions, and no element is related to
/// itself.
///
/// There is no closure: asymmetry can only be gained by removing pairs.
pub fn asymmetric(m: &RelationMatrix) -> bool {
    m.pairs().all(|(i, j)| !m[(j, i)])
}

/// No two distinct elements are related in both directions. Unlike
/// [`asymmetric`], elements may be related to themselves.
pub fn antisymmetric(m: &RelationMatrix) -> bool {
    m.pairs().all(|(i, j)| i == j || !m[(j, i)])
}
