//! Two-variable linear programming.
//!
//! The crate has two independent halves, consumed in sequence by a
//! presentation layer: [`Simplex`] solves a [`Problem`] with the tableau
//! simplex method, and [`FeasibleRegion`] turns the same constraints into a
//! drawable polygon plus per-constraint boundary segments.
//!
//! Both halves are synchronous pure functions over their inputs; every call
//! owns its working state and returns fresh values.

mod constraint;
mod error;
mod model;
mod region;
mod simplex;
mod solution;
mod tableau;

pub use constraint::{Comp, Constraint, ParseCompError, EQ_TOL};
pub use error::SolveError;
pub use model::{OptDir, Problem, N_VARS};
pub use region::{intersection, FeasibleRegion, Point, Region, MARGIN};
pub use simplex::Simplex;
pub use solution::{ConstraintActivity, Solution, VariableValue};
pub use tableau::{Tableau, TableauIx};

/// Lenient numeric intake for form fields: anything unparsable becomes 0,
/// matching what the input layer has always fed the solver.
pub fn parse_coeff(s: &str) -> f64 {
    s.trim().parse().unwrap_or(0.0_f64)
}
