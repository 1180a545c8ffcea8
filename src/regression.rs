use anyhow::{bail, Result};
use nalgebra::{DMatrix, DVector};

// ---------------------------------------------------------------------------
// Polynomial least squares
// ---------------------------------------------------------------------------

/// A polynomial fitted to (year, value) observations by least squares.
///
/// The design matrix uses raw powers of the year, so for a series spanning
/// decades the columns differ in scale by many orders of magnitude.  The SVD
/// solve below absorbs that instead of re-parameterizing the basis.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialModel {
    degree: usize,
    /// Coefficients in ascending power order: `c[0] + c[1]·x + … + c[d]·x^d`.
    coefficients: Vec<f64>,
}

impl PolynomialModel {
    /// Fit a degree-`degree` polynomial to the observations.
    ///
    /// Requires at least `degree + 1` rows.  The solve is deterministic:
    /// fitting the same data twice yields identical coefficients.
    pub fn fit(years: &[f64], values: &[f64], degree: usize) -> Result<Self> {
        if years.len() != values.len() {
            bail!(
                "years has {} values but series has {}",
                years.len(),
                values.len()
            );
        }
        let n = years.len();
        if n < degree + 1 {
            bail!("need at least {} rows to fit degree {degree}, got {n}", degree + 1);
        }

        let design = DMatrix::from_fn(n, degree + 1, |row, col| years[row].powi(col as i32));
        let rhs = DVector::from_column_slice(values);

        let svd = design.svd(true, true);

        // Try progressively looser singular-value tolerances before giving
        // up; the raw-power basis makes the matrix nearly rank-deficient.
        for &tol in &[1e-10, 1e-8, 1e-6] {
            if let Ok(beta) = svd.solve(&rhs, tol) {
                if beta.iter().all(|v| v.is_finite()) {
                    return Ok(PolynomialModel {
                        degree,
                        coefficients: beta.as_slice().to_vec(),
                    });
                }
            }
        }

        bail!("least-squares system is too ill-conditioned to solve");
    }

    /// Evaluate the polynomial at `year` (Horner's scheme).
    pub fn evaluate(&self, year: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * year + c)
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }
}
