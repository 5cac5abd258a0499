use super::{Error, Interpolation, Points, Term, check_target};

/// Interpolates at `x` with the Lagrange form
/// `P(x) = Σ y_i · Π_{j≠i} (x − x_j) / (x_i − x_j)`.
///
/// # Errors
///
/// Returns an error if `x` is not finite.
pub fn lagrange(points: &Points, x: f64) -> Result<Interpolation, Error> {
    check_target(x)?;
    let points = points.as_slice();

    let terms: Vec<Term> = points
        .iter()
        .enumerate()
        .map(|(index, p_i)| {
            let basis = points
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != index)
                .map(|(_, p_j)| (x - p_j.x) / (p_i.x - p_j.x))
                .product();
            Term::Lagrange {
                index,
                y: p_i.y,
                basis,
            }
        })
        .collect();

    Ok(Interpolation {
        value: terms.iter().map(Term::value).sum(),
        terms,
    })
}
