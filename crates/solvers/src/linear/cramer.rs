use super::{Error, System, check_solution, determinant};

/// Determinants with a magnitude below this are treated as singular.
pub const SINGULAR_DETERMINANT: f64 = 1e-10;

/// The result of applying Cramer's rule.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CramerSolution {
    /// Determinant of the coefficient matrix.
    pub determinant: f64,
    /// Determinant of the matrix with column `i` replaced by the constants.
    pub determinants: Vec<f64>,
    /// `x_i = det(A_i) / det(A)`.
    pub solution: Vec<f64>,
}

/// Solves the system by Cramer's rule.
///
/// # Errors
///
/// Returns [`Error::SingularDeterminant`] if `|det(A)|` is below
/// [`SINGULAR_DETERMINANT`], [`Error::NonFiniteDeterminant`] if a determinant
/// overflows, and [`Error::NonFiniteResult`] if a quotient is not finite.
pub fn cramer(system: &System) -> Result<CramerSolution, Error> {
    let matrix = system.matrix();
    let det = determinant(matrix);
    if !det.is_finite() {
        return Err(Error::NonFiniteDeterminant { value: det });
    }
    if det.abs() < SINGULAR_DETERMINANT {
        return Err(Error::SingularDeterminant { determinant: det });
    }

    let determinants: Vec<f64> = (0..system.size())
        .map(|column| determinant(&matrix.with_column(column, system.constants())))
        .collect();
    if let Some(&value) = determinants.iter().find(|det_i| !det_i.is_finite()) {
        return Err(Error::NonFiniteDeterminant { value });
    }

    let solution: Vec<f64> = determinants.iter().map(|det_i| det_i / det).collect();
    check_solution(&solution)?;

    Ok(CramerSolution {
        determinant: det,
        determinants,
        solution,
    })
}
