//! Element-wise evaluation over scalars and equal-length series.
//!
//! Every scalar function in this crate is lifted to series through
//! [`broadcast`]: operands are scalars or slices, slices must share one
//! length (a length-1 slice acts as a scalar), and the output has that
//! length. All-scalar input yields a single value.
use crate::error::{WeirError, WeirResult};

/// One argument of a broadcast call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a> {
    Scalar(f64),
    Series(&'a [f64]),
}

impl<'a> Operand<'a> {
    /// Length of a series operand, `None` for a scalar.
    pub fn len(&self) -> Option<usize> {
        match self {
            Operand::Scalar(_) => None,
            Operand::Series(s) => Some(s.len()),
        }
    }

    /// True only for a zero-length series.
    pub fn is_empty(&self) -> bool {
        matches!(self, Operand::Series(s) if s.is_empty())
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Operand::Scalar(_))
    }

    /// Value at broadcast index `i`. Caller guarantees `i` is in range.
    #[inline]
    fn at(&self, i: usize) -> f64 {
        match self {
            Operand::Scalar(x) => *x,
            Operand::Series(s) if s.len() == 1 => s[0],
            Operand::Series(s) => s[i],
        }
    }
}

impl From<f64> for Operand<'_> {
    fn from(x: f64) -> Self {
        Operand::Scalar(x)
    }
}

impl<'a> From<&'a [f64]> for Operand<'a> {
    fn from(s: &'a [f64]) -> Self {
        Operand::Series(s)
    }
}

impl<'a> From<&'a Vec<f64>> for Operand<'a> {
    fn from(s: &'a Vec<f64>) -> Self {
        Operand::Series(s.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [f64; N]> for Operand<'a> {
    fn from(s: &'a [f64; N]) -> Self {
        Operand::Series(s.as_slice())
    }
}

/// True when no operand is a series.
pub fn all_scalar(ops: &[Operand<'_>]) -> bool {
    ops.iter().all(Operand::is_scalar)
}

/// Common output length of a set of operands.
pub fn broadcast_len(ops: &[Operand<'_>]) -> WeirResult<usize> {
    let mut target: Option<usize> = None;
    for len in ops.iter().filter_map(Operand::len) {
        if len == 1 {
            continue;
        }
        match target {
            None => target = Some(len),
            Some(t) if t == len => {}
            Some(t) => {
                return Err(WeirError::ShapeMismatch {
                    expected: t,
                    found: len,
                })
            }
        }
    }
    Ok(target.unwrap_or(1))
}

/// Apply `f` element-wise across broadcast operands.
pub fn broadcast<const N: usize, F>(ops: [Operand<'_>; N], f: F) -> WeirResult<Vec<f64>>
where
    F: Fn([f64; N]) -> f64,
{
    let n = broadcast_len(&ops)?;
    Ok((0..n)
        .map(|i| f(std::array::from_fn(|k| ops[k].at(i))))
        .collect())
}

/// Apply `f` to every element of a slice.
pub fn map<F: Fn(f64) -> f64>(xs: &[f64], f: F) -> Vec<f64> {
    xs.iter().map(|&x| f(x)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_give_single_value() {
        let out = broadcast([Operand::from(2.0), Operand::from(3.0)], |[a, b]| a * b).unwrap();
        assert_eq!(out, vec![6.0]);
    }

    #[test]
    fn series_with_scalar() {
        let xs = [1.0, 2.0, 3.0];
        let out = broadcast([Operand::from(&xs), Operand::from(10.0)], |[a, b]| a + b).unwrap();
        assert_eq!(out, vec![11.0, 12.0, 13.0]);
    }

    #[test]
    fn equal_length_series_pair_elementwise() {
        let xs = vec![1.0, 2.0];
        let ys = vec![3.0, 4.0];
        let out = broadcast([Operand::from(&xs), Operand::from(&ys)], |[a, b]| a * b).unwrap();
        assert_eq!(out, vec![3.0, 8.0]);
    }

    #[test]
    fn unit_series_broadcasts() {
        let xs = [1.0, 2.0, 3.0];
        let one = [5.0];
        let out = broadcast([Operand::from(&xs), Operand::from(&one)], |[a, b]| a - b).unwrap();
        assert_eq!(out, vec![-4.0, -3.0, -2.0]);
    }

    #[test]
    fn mismatched_lengths_rejected() {
        let xs = [1.0, 2.0, 3.0];
        let ys = [1.0, 2.0];
        let err = broadcast([Operand::from(&xs), Operand::from(&ys)], |[a, _]| a).unwrap_err();
        assert_eq!(
            err,
            WeirError::ShapeMismatch {
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn empty_series_gives_empty_output() {
        let empty: [f64; 0] = [];
        let out = broadcast([Operand::from(&empty), Operand::from(1.0)], |[a, _]| a).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn operand_len_and_emptiness() {
        let empty: [f64; 0] = [];
        let xs = [1.0, 2.0];
        assert_eq!(Operand::from(3.0).len(), None);
        assert!(!Operand::from(3.0).is_empty());
        assert_eq!(Operand::from(&xs).len(), Some(2));
        assert!(!Operand::from(&xs).is_empty());
        assert_eq!(Operand::from(&empty).len(), Some(0));
        assert!(Operand::from(&empty).is_empty());
    }

    #[test]
    fn all_scalar_detects_series() {
        let xs = [1.0];
        assert!(all_scalar(&[Operand::from(1.0), Operand::from(2.0)]));
        assert!(!all_scalar(&[Operand::from(1.0), Operand::from(&xs)]));
    }

    #[test]
    fn map_preserves_length_and_order() {
        assert_eq!(map(&[1.0, 4.0, 9.0], f64::sqrt), vec![1.0, 2.0, 3.0]);
    }
}
