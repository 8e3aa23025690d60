//! Fixed-coefficient univariate polynomials.

/// Polynomial with coefficients stored in ascending order of power,
/// so `coeffs[k]` multiplies `x^k`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polynomial {
    coeffs: &'static [f64],
}

impl Polynomial {
    pub const fn new(coeffs: &'static [f64]) -> Self {
        Self { coeffs }
    }

    /// Highest power with a stored coefficient.
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    pub fn coefficients(&self) -> &'static [f64] {
        self.coeffs
    }

    /// Evaluate at `x` using Horner's scheme.
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const QUADRATIC: Polynomial = Polynomial::new(&[1.0, -3.0, 2.0]);

    #[test]
    fn horner_matches_expanded_form() {
        let x = 1.7;
        assert_relative_eq!(QUADRATIC.eval(x), 1.0 - 3.0 * x + 2.0 * x * x, epsilon = 1e-14);
    }

    #[test]
    fn constant_term_at_zero() {
        assert_eq!(QUADRATIC.eval(0.0), 1.0);
    }

    #[test]
    fn degree_counts_from_zero() {
        assert_eq!(QUADRATIC.degree(), 2);
        assert_eq!(Polynomial::new(&[]).degree(), 0);
        assert_eq!(Polynomial::new(&[]).eval(3.0), 0.0);
    }

    #[test]
    fn nan_propagates() {
        assert!(QUADRATIC.eval(f64::NAN).is_nan());
    }
}
