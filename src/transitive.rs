//! Transitivity and the closures built on reachability.
//!
//! A relation is transitive when every pair reachable in two steps is already
//! related directly. Its transitive closure relates `i` to `j` exactly when
//! there is a path of positive length from `i` to `j` in the directed graph the
//! relation describes.

use tracing::{debug, trace};

use crate::{compose::product, matrix::RelationMatrix, properties::Closure};

/// Checks transitivity, and computes the transitive closure if it doesn't
/// hold.
pub fn transitive(m: &RelationMatrix) -> Closure {
    if is_transitive(m) {
        return Closure::satisfied();
    }
    let closure = warshall(m.clone());
    debug!(dim = m.dim(), added = closure.count() - m.count(), "computed transitive closure");
    Closure::repaired(closure)
}

// `m ∘ m ⊆ m`
pub(crate) fn is_transitive(m: &RelationMatrix) -> bool {
    product(m, m).is_subset_of(m)
}

// Adds `(i, j)` whenever both `(i, k)` and `(k, j)` are present, letting every
// element act as the intermediate `k` once. After pivot `k` the matrix relates
// every pair joined by a path whose inner elements are all below `k + 1`, so a
// single pass is enough.
fn warshall(mut closure: RelationMatrix) -> RelationMatrix {
    let n = closure.dim();
    for k in 0..n {
        let mut added = 0usize;
        for i in 0..n {
            if !closure[(i, k)] {
                continue;
            }
            for j in 0..n {
                if closure[(k, j)] && !closure[(i, j)] {
                    closure[(i, j)] = true;
                    added += 1;
                }
            }
        }
        trace!(pivot = k, added, "warshall pass");
    }
    closure
}

/// Smallest reflexive and transitive relation containing `m`, i.e. `i` is
/// related to `j` if `j` can be reached from `i` in zero or more steps.
pub fn reflexive_transitive_closure(m: &RelationMatrix) -> RelationMatrix {
    warshall(m.with_diagonal(true))
}

/// Smallest equivalence relation containing `m`. Its classes are the weakly
/// connected components of `m`.
pub fn equivalence_closure(m: &RelationMatrix) -> RelationMatrix {
    let mut sym = m.with_diagonal(true);
    for (i, j) in m.pairs() {
        sym[(j, i)] = true;
    }
    warshall(sym)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        compose::compose,
        properties::{reflexive, symmetric},
        tests::matrix,
    };

    // Reference closure: repeat `m ∪ m∘m` until nothing changes
    fn naive_closure(m: &RelationMatrix) -> RelationMatrix {
        let mut current = m.clone();
        loop {
            let next = current.union(&compose(&current, &current).unwrap()).unwrap();
            if next == current {
                return current;
            }
            current = next;
        }
    }

    // Path search from `from`, using at least one step
    fn reachable(m: &RelationMatrix, from: usize, to: usize) -> bool {
        let mut seen = vec![false; m.dim()];
        let mut stack: Vec<usize> = (0..m.dim()).filter(|&j| m[(from, j)]).collect();
        while let Some(x) = stack.pop() {
            if x == to {
                return true;
            }
            if seen[x] {
                continue;
            }
            seen[x] = true;
            stack.extend((0..m.dim()).filter(|&j| m[(x, j)] && !seen[j]));
        }
        false
    }

    #[test]
    fn scenario() {
        let m = matrix([[0, 1, 0], [1, 0, 0], [0, 0, 1]]);
        assert_eq!(compose(&m, &m).unwrap(), RelationMatrix::identity(3).unwrap());
        let t = transitive(&m);
        assert!(!t.holds());
        assert_eq!(t.closure(), Some(&matrix([[1, 1, 0], [1, 1, 0], [0, 0, 1]])));
    }

    #[test]
    fn identity_is_transitive() {
        let m = RelationMatrix::identity(3).unwrap();
        assert_eq!(transitive(&m), Closure::satisfied());
    }

    #[test]
    fn empty_and_full() {
        assert!(transitive(&RelationMatrix::empty(4).unwrap()).holds());
        assert!(transitive(&RelationMatrix::full(4).unwrap()).holds());
    }

    #[test]
    fn chain() {
        let m = matrix([[0, 1, 0, 0], [0, 0, 1, 0], [0, 0, 0, 1], [0, 0, 0, 0]]);
        let t = transitive(&m).into_matrix(&m);
        assert_eq!(t, matrix([[0, 1, 1, 1], [0, 0, 1, 1], [0, 0, 0, 1], [0, 0, 0, 0]]));
        assert_eq!(
            reflexive_transitive_closure(&m),
            matrix([[1, 1, 1, 1], [0, 1, 1, 1], [0, 0, 1, 1], [0, 0, 0, 1]])
        );
    }

    #[test]
    fn cycle_reaches_itself() {
        let m = matrix([[0, 1, 0], [0, 0, 1], [1, 0, 0]]);
        assert_eq!(transitive(&m).closure(), Some(&RelationMatrix::full(3).unwrap()));
    }

    #[test]
    fn equivalence_classes() {
        let m = matrix([[0, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 1, 0]]);
        assert_eq!(
            equivalence_closure(&m),
            matrix([[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 1, 1], [0, 0, 1, 1]])
        );
    }

    #[quickcheck]
    fn holds_iff_square_subset(m: RelationMatrix) -> bool {
        let squared = compose(&m, &m).unwrap();
        transitive(&m).holds() == squared.is_subset_of(&m)
    }

    #[quickcheck]
    fn closure_matches_naive(m: RelationMatrix) -> bool {
        transitive(&m).into_matrix(&m) == naive_closure(&m)
    }

    #[quickcheck]
    fn closure_is_reachability(m: RelationMatrix) -> bool {
        let c = transitive(&m).into_matrix(&m);
        (0..m.dim()).all(|i| (0..m.dim()).all(|j| c[(i, j)] == reachable(&m, i, j)))
    }

    #[quickcheck]
    fn closure_idempotent(m: RelationMatrix) -> bool {
        match transitive(&m).into_closure() {
            None => true,
            Some(c) => m.is_subset_of(&c) && transitive(&c) == Closure::satisfied(),
        }
    }

    #[quickcheck]
    fn equivalence_closure_is_equivalence(m: RelationMatrix) -> bool {
        let e = equivalence_closure(&m);
        m.is_subset_of(&e) && reflexive(&e).holds() && symmetric(&e).holds() && transitive(&e).holds()
    }
}
