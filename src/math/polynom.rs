/// A polynomial in one variable.
///
/// Coefficients are stored highest degree first, so `Polynom::new([1.0, 0.0, 0.0])`
/// is `x^2` and `Polynom::new([2.0, 3.0])` is `2x + 3`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynom {
    coefficients: Vec<f64>,
}

impl Polynom {
    /// Creates a polynom from its coefficients, highest degree first.
    /// An empty coefficient list is the zero polynom.
    #[must_use]
    pub fn new(coefficients: impl Into<Vec<f64>>) -> Self {
        let mut coefficients = coefficients.into();
        if coefficients.is_empty() {
            coefficients.push(0.0);
        }
        Self { coefficients }
    }

    /// Degree as declared by the coefficient count (`len - 1`).
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Coefficients, highest degree first.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Evaluates the polynom at `x` (Horner's scheme).
    #[must_use]
    pub fn value_at(&self, x: f64) -> f64 {
        self.coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
    }

    /// Coefficient of `x^power`, zero if the polynom has no such term.
    #[must_use]
    pub fn coefficient(&self, power: usize) -> f64 {
        let n = self.coefficients.len();
        if power >= n {
            0.0
        } else {
            self.coefficients[n - 1 - power]
        }
    }

    #[must_use]
    pub fn absolute_coefficient(&self) -> f64 {
        self.coefficient(0)
    }

    #[must_use]
    pub fn linear_coefficient(&self) -> f64 {
        self.coefficient(1)
    }

    #[must_use]
    pub fn quadratic_coefficient(&self) -> f64 {
        self.coefficient(2)
    }

    #[must_use]
    pub fn cubic_coefficient(&self) -> f64 {
        self.coefficient(3)
    }

    /// Discriminant `b^2 - 4ac` of the quadratic part.
    #[must_use]
    pub fn discriminant(&self) -> f64 {
        let a = self.quadratic_coefficient();
        let b = self.linear_coefficient();
        let c = self.absolute_coefficient();
        b * b - 4.0 * a * c
    }

    /// Real roots in ascending order, for polynoms of effective degree <= 2.
    ///
    /// Returns `None` when a term above `x^2` is non-zero. The zero polynom
    /// and non-zero constants have no isolated roots and yield an empty list.
    /// A double root is reported once.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn real_roots(&self) -> Option<Vec<f64>> {
        let n = self.coefficients.len();
        if n > 3 && self.coefficients[..n - 3].iter().any(|&c| c != 0.0) {
            return None;
        }
        let a = self.quadratic_coefficient();
        let b = self.linear_coefficient();
        let c = self.absolute_coefficient();

        if a == 0.0 {
            if b == 0.0 {
                return Some(Vec::new());
            }
            return Some(vec![-c / b]);
        }

        let disc = self.discriminant();
        if disc < 0.0 {
            return Some(Vec::new());
        }
        if disc == 0.0 {
            return Some(vec![-b / (2.0 * a)]);
        }
        // Numerically stable form: avoid cancellation between -b and sqrt(disc).
        let q = -0.5 * (b + b.signum() * disc.sqrt());
        let (r1, r2) = (q / a, c / q);
        Some(if r1 <= r2 { vec![r1, r2] } else { vec![r2, r1] })
    }
}
