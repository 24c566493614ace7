use tracing::debug;

use crate::{error::RelationError, matrix::RelationMatrix};

/// Composition of `a` followed by `b`: `i` is related to `j` if there is some
/// `k` where `a` relates `i` to `k` and `b` relates `k` to `j`.
///
/// For a metro network `a` and a bus network `b`, the result relates the
/// stations you can get between by taking the metro one stop and then the bus
/// one stop.
pub fn compose(a: &RelationMatrix, b: &RelationMatrix) -> Result<RelationMatrix, RelationError> {
    if let Err(e) = a.check_dim(b) {
        debug!(left = a.dim(), right = b.dim(), "cannot compose relations");
        return Err(e);
    }
    Ok(product(a, b))
}

// Boolean matrix product, `a` and `b` must have the same dimension
pub(crate) fn product(a: &RelationMatrix, b: &RelationMatrix) -> RelationMatrix {
    debug_assert!(a.dim() == b.dim());
    let n = a.dim();
    RelationMatrix::from_fn(n, |i, j| (0..n).any(|k| a[(i, k)] && b[(k, j)]))
}

/// Composes every relation in `chain`, left to right.
pub fn compose_all(chain: &[RelationMatrix]) -> Result<RelationMatrix, RelationError> {
    let (first, rest) = chain.split_first().ok_or(RelationError::EmptyChain)?;
    rest.iter().try_fold(first.clone(), |acc, m| compose(&acc, m))
}

/// `m` composed with itself `k` times. The zeroth power is the identity.
///
/// The powers of a relation are eventually periodic, so this stops as soon as
/// a power repeats and reads the answer off the cycle. Each step costs a cubic
/// product, and the cycle is short for most relations but can in principle be
/// as long as the number of relations on `m.dim()` elements.
pub fn power(m: &RelationMatrix, k: usize) -> RelationMatrix {
    // `seen[p]` is the `p`th power
    let mut seen = vec![RelationMatrix::from_fn(m.dim(), |i, j| i == j)];
    while seen.len() <= k {
        let next = product(&seen[seen.len() - 1], m);
        if let Some(start) = seen.iter().position(|p| *p == next) {
            let period = seen.len() - start;
            debug!(dim = m.dim(), start, period, "powers repeat");
            return seen.swap_remove(start + (k - start) % period);
        }
        seen.push(next);
    }
    seen.swap_remove(k)
}

#[cfg(test)]
mod tests {
    use quickcheck::{Arbitrary, Gen};

    use super::*;
    use crate::tests::{matrix, std_rng};

    // Two relations with the same dimension
    #[derive(Debug, Clone)]
    struct SamePair(RelationMatrix, RelationMatrix);

    impl Arbitrary for SamePair {
        fn arbitrary(g: &mut Gen) -> Self {
            let a = RelationMatrix::arbitrary(g);
            let b = RelationMatrix::random(&mut std_rng(g), a.dim()).unwrap();
            SamePair(a, b)
        }
    }

    #[test]
    fn scenario() {
        let a = matrix([[0, 1], [0, 0]]);
        let b = matrix([[0, 0], [1, 0]]);
        assert_eq!(compose(&a, &b).unwrap(), matrix([[1, 0], [0, 0]]));
        // Not commutative
        assert_eq!(compose(&b, &a).unwrap(), matrix([[0, 0], [0, 1]]));
    }

    #[test]
    fn not_a_union() {
        let a = matrix([[0, 1], [0, 0]]);
        let e = RelationMatrix::empty(2).unwrap();
        assert_eq!(compose(&a, &e).unwrap(), e);
    }

    #[test]
    fn mismatch() {
        let a = RelationMatrix::empty(2).unwrap();
        let b = RelationMatrix::empty(3).unwrap();
        assert_eq!(compose(&a, &b), Err(RelationError::DimensionMismatch { left: 2, right: 3 }));
        assert_eq!(
            compose_all(&[a.clone(), a, b]),
            Err(RelationError::DimensionMismatch { left: 2, right: 3 })
        );
    }

    #[test]
    fn empty_chain() {
        assert_eq!(compose_all(&[]), Err(RelationError::EmptyChain));
    }

    #[test]
    fn powers_of_a_cycle() {
        let m = matrix([[0, 1, 0], [0, 0, 1], [1, 0, 0]]);
        assert_eq!(power(&m, 0), RelationMatrix::identity(3).unwrap());
        assert_eq!(power(&m, 1), m);
        assert_eq!(power(&m, 2), matrix([[0, 0, 1], [1, 0, 0], [0, 1, 0]]));
        assert_eq!(power(&m, 3), RelationMatrix::identity(3).unwrap());
    }

    #[test]
    fn huge_power_finishes() {
        let cycle = matrix([[0, 1, 0], [0, 0, 1], [1, 0, 0]]);
        // usize::MAX = 3 * q, so this is a multiple of the cycle length
        assert_eq!(power(&cycle, usize::MAX), RelationMatrix::identity(3).unwrap());
        assert_eq!(power(&cycle, usize::MAX - 1), power(&cycle, 2));
        // Powers of a strict order reach the empty relation and stay there
        let lt = matrix([[0, 1, 1], [0, 0, 1], [0, 0, 0]]);
        assert_eq!(power(&lt, usize::MAX), RelationMatrix::empty(3).unwrap());
    }

    #[quickcheck]
    fn power_matches_repeated_product(m: RelationMatrix, k: u8) -> bool {
        let k = usize::from(k % 40);
        let mut expected = RelationMatrix::identity(m.dim()).unwrap();
        for _ in 0..k {
            expected = compose(&expected, &m).unwrap();
        }
        power(&m, k) == expected
    }

    #[quickcheck]
    fn matches_brute_force(pair: SamePair) -> bool {
        let SamePair(a, b) = pair;
        let c = compose(&a, &b).unwrap();
        let n = a.dim();
        for i in 0..n {
            for j in 0..n {
                let mut expected = false;
                for k in 0..n {
                    if a[(i, k)] && b[(k, j)] {
                        expected = true;
                    }
                }
                if c[(i, j)] != expected {
                    return false;
                }
            }
        }
        true
    }

    #[quickcheck]
    fn identity_is_neutral(m: RelationMatrix) -> bool {
        let id = RelationMatrix::identity(m.dim()).unwrap();
        compose(&id, &m).unwrap() == m && compose(&m, &id).unwrap() == m
    }

    #[quickcheck]
    fn converse_reverses(pair: SamePair) -> bool {
        let SamePair(a, b) = pair;
        compose(&a, &b).unwrap().transpose() == compose(&b.transpose(), &a.transpose()).unwrap()
    }

    #[quickcheck]
    fn chain_is_associative(pair: SamePair, c: RelationMatrix) -> bool {
        let SamePair(a, b) = pair;
        if c.dim() != a.dim() {
            return compose_all(&[a, b, c]).is_err();
        }
        let left = compose(&compose(&a, &b).unwrap(), &c).unwrap();
        let right = compose(&a, &compose(&b, &c).unwrap()).unwrap();
        left == right && compose_all(&[a, b, c]).unwrap() == left
    }
}
