//! This is a crate for studying binary relations on small finite sets, such as
//! which stations of a transit network are directly connected.
//!
//! A relation on `n` elements is a square [`RelationMatrix`] of booleans. The
//! crate checks which of the classical properties a relation has (reflexive,
//! symmetric, asymmetric, antisymmetric, transitive), computes the closure when
//! a property that can be repaired doesn't hold, classifies the relation, finds
//! the extremal elements of partial orders and composes relations.
//!
//! Example usage:
//! ```
//! use relations::prelude::*;
//!
//! let metro = RelationMatrix::from_rows(&[[0, 1, 0], [1, 0, 0], [0, 0, 1]]).unwrap();
//!
//! assert!(!reflexive(&metro).holds());
//! assert!(symmetric(&metro).holds());
//!
//! let closure = transitive(&metro).into_closure().unwrap();
//! assert_eq!(closure.to_rows(), vec![vec![1, 1, 0], vec![1, 1, 0], vec![0, 0, 1]]);
//!
//! let order = RelationMatrix::from_rows(&[[1, 1], [0, 1]]).unwrap();
//! assert!(is_partial_order(&order));
//! assert_eq!(greatest_least(&order).unwrap().greatest, Some(1));
//! ```
//!
//! Matrices are read with `m[(i, j)] == true` meaning that `i` is related to
//! `j`. For partial orders that means `i ≤ j`.

#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod classify;
pub mod compose;
pub mod error;
pub mod extremal;
pub mod matrix;
pub mod partial_order;
pub mod properties;
pub mod transitive;

pub use classify::{Properties, RelationKind, is_equivalence, is_partial_order, properties};
pub use compose::{compose, compose_all, power};
pub use error::RelationError;
pub use extremal::{Bounds, Extremal, extremal_elements, greatest_least};
pub use matrix::RelationMatrix;
pub use partial_order::PartialOrder;
pub use properties::{Closure, antisymmetric, asymmetric, reflexive, symmetric};
pub use transitive::{equivalence_closure, reflexive_transitive_closure, transitive};

/// Commonly used types and functions
pub mod prelude {
    pub use super::{
        RelationError, RelationMatrix, antisymmetric, asymmetric, compose, extremal_elements,
        greatest_least, is_equivalence, is_partial_order, reflexive, symmetric, transitive,
    };
}
