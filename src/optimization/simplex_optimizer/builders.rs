use crate::optimization::{
    errors::OptResult,
    simplex_optimizer::{
        bounds::Bounds,
        nelder_mead::BoundedNelderMead,
        traits::{SimplexOptions, Tolerances},
    },
};

/// Build a [`BoundedNelderMead`] for `bounds` configured from `opts`.
///
/// The tolerances are re-validated here so that options assembled by hand
/// (public fields) cannot reach the solver with a zero or NaN tolerance.
pub fn build_nelder_mead(bounds: &Bounds, opts: &SimplexOptions) -> OptResult<BoundedNelderMead> {
    let tols = opts.tols;
    Tolerances::new(tols.xtol, tols.ftol, tols.max_iter, tols.max_fev)?;
    Ok(BoundedNelderMead::new(bounds.clone(), &tols))
}
