use thiserror::Error;

/// Failure modes of a solve call.
///
/// The solver assumes the origin is a feasible start point, so constraints
/// that exclude it are rejected up front instead of producing a meaningless
/// tableau.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("problem is unbounded: no admissible pivot row")]
    Unbounded,

    #[error("constraint {index} excludes the origin; only origin-feasible systems are supported")]
    OriginInfeasible { index: usize },

    #[error("equality constraint {index} needs a two-phase method; restate it as a pair of inequalities")]
    UnsupportedEquality { index: usize },

    #[error("no optimum after {limit} pivots; tableau appears to be cycling")]
    IterationLimit { limit: usize },
}
