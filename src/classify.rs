use crate::{
    matrix::RelationMatrix,
    properties::{Closure, antisymmetric, asymmetric, reflexive, symmetric},
    transitive::{is_transitive, transitive},
};

/// Reflexive, symmetric and transitive.
pub fn is_equivalence(m: &RelationMatrix) -> bool {
    m.diagonal().all(|v| v) && *m == m.transpose() && is_transitive(m)
}

/// Reflexive, antisymmetric and transitive.
pub fn is_partial_order(m: &RelationMatrix) -> bool {
    m.diagonal().all(|v| v) && antisymmetric(m) && is_transitive(m)
}

/// The most specific kind of relation something is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RelationKind {
    Equivalence,
    PartialOrder,
    /// Asymmetric and transitive, like `<` on numbers.
    StrictOrder,
    Other,
}

/// Every basic property of a relation, checked once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Properties {
    pub reflexive: Closure,
    pub symmetric: Closure,
    pub transitive: Closure,
    pub asymmetric: bool,
    pub antisymmetric: bool,
}

pub fn properties(m: &RelationMatrix) -> Properties {
    Properties {
        reflexive: reflexive(m),
        symmetric: symmetric(m),
        transitive: transitive(m),
        asymmetric: asymmetric(m),
        antisymmetric: antisymmetric(m),
    }
}

impl Properties {
    pub fn is_equivalence(&self) -> bool {
        self.reflexive.holds() && self.symmetric.holds() && self.transitive.holds()
    }

    pub fn is_partial_order(&self) -> bool {
        self.reflexive.holds() && self.antisymmetric && self.transitive.holds()
    }

    pub fn is_strict_order(&self) -> bool {
        self.asymmetric && self.transitive.holds()
    }

    /// The identity is both an equivalence and a partial order, and is
    /// reported as an equivalence.
    pub fn kind(&self) -> RelationKind {
        if self.is_equivalence() {
            RelationKind::Equivalence
        } else if self.is_partial_order() {
            RelationKind::PartialOrder
        } else if self.is_strict_order() {
            RelationKind::StrictOrder
        } else {
            RelationKind::Other
        }
    }
}
