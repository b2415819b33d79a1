use ndarray::{s, Array2};

use crate::constraint::{Comp, Constraint};
use crate::error::SolveError;
use crate::model::{OptDir, Problem, N_VARS};
use crate::solution::{ConstraintActivity, Solution};
use crate::tableau::{Tableau, TableauIx};

/// Pivot budget per tableau dimension. Well-posed two-variable problems
/// terminate in a handful of pivots; the cap turns a degenerate cycle into a
/// diagnosed error instead of a hang.
const ITER_FACTOR: usize = 50;

/// Tableau simplex solver for [`Problem`]s with a feasible origin.
pub struct Simplex {}

impl Simplex {
    pub fn new() -> Self {
        Self {}
    }

    pub fn solve(&self, problem: &Problem) -> Result<Solution, SolveError> {
        // the tableau starts from the origin and has no second phase, so
        // equality rows and rows excluding the origin cannot be solved
        for (index, con) in problem.constraints().iter().enumerate() {
            if con.comp() == Comp::Eq {
                return Err(SolveError::UnsupportedEquality { index });
            }
            if !con.admits_origin() {
                return Err(SolveError::OriginInfeasible { index });
            }
        }

        let mut c = problem.objective();
        if problem.opt_dir() == OptDir::Min {
            c = [-c[0], -c[1]];
        }

        let mut tableau = initial_tableau(&c, problem.constraints());
        self.run(&mut tableau)?;

        let mut solution = extract(tableau, &c, problem.num_constraints());
        if problem.opt_dir() == OptDir::Min {
            solution.objective_value = -solution.objective_value;
        }
        Ok(solution)
    }

    /// Entering column and leaving row for the next pivot: the most negative
    /// objective-row entry (first occurrence on ties, RHS column excluded),
    /// then the ratio test over constraint rows with strictly positive entry
    /// in that column. `Ok(None)` once the objective row has no negative
    /// entry; no admissible ratio-test row means the objective is unbounded.
    #[inline(always)]
    fn pivot_ind(&self, tbl: &Tableau) -> Result<Option<TableauIx>, SolveError> {
        let j = match tbl
            .tbl()
            .slice(s![-1, ..-1])
            .iter()
            .enumerate()
            .filter(|(_j, v)| **v < 0.0_f64)
            .min_by(|(_j1, v1), (_j2, v2)| v1.partial_cmp(v2).expect("Nan encountered"))
            .map(|(j, _v)| j)
        {
            Some(j) => j,
            None => return Ok(None),
        };

        let i = tbl
            .tbl()
            .slice(s![..-1, j])
            .iter()
            .enumerate()
            .zip(tbl.tbl().slice(s![..-1, -1]))
            .filter(|((_i, a), _b)| **a > 0.0_f64)
            .min_by(|((_i1, a1), b1), ((_i2, a2), b2)| {
                (*b1 / *a1)
                    .partial_cmp(&(*b2 / *a2))
                    .expect("Nan encountered")
            })
            .map(|((i, _a), _b)| i)
            .ok_or(SolveError::Unbounded)?;

        Ok(Some(TableauIx::new(i, j)))
    }

    fn run(&self, tbl: &mut Tableau) -> Result<(), SolveError> {
        let limit = ITER_FACTOR * (tbl.nrows() - 1 + N_VARS);
        let mut pivots = 0;
        while let Some(ix) = self.pivot_ind(tbl)? {
            if pivots == limit {
                return Err(SolveError::IterationLimit { limit });
            }
            tbl.pivot(&ix);
            pivots += 1;
        }
        Ok(())
    }
}

impl Default for Simplex {
    fn default() -> Self {
        Self::new()
    }
}

/// Initial tableau: constraint rows with their slack columns, then the
/// objective row with negated coefficients. `>=` rows are negated into `<=`
/// form so every slack column starts basic with a non-negative RHS (which is
/// also what makes an unbounded `>=`-only system fail the ratio test instead
/// of pivoting to a bogus optimum). Equality rows never reach this point.
fn initial_tableau(c: &[f64; N_VARS], constraints: &[Constraint]) -> Tableau {
    let m = constraints.len();
    let mut tbl = Array2::<f64>::zeros((m + 1, m + N_VARS + 1));

    for (i, con) in constraints.iter().enumerate() {
        let flip = if con.comp() == Comp::Ge {
            -1.0_f64
        } else {
            1.0_f64
        };
        tbl[[i, 0]] = flip * con.a();
        tbl[[i, 1]] = flip * con.b();
        tbl[[i, N_VARS + i]] = 1.0_f64;
        tbl[[i, m + N_VARS]] = flip * con.rhs();
    }

    for j in 0..N_VARS {
        tbl[[m, j]] = -c[j];
    }

    //every slack variable starts basic in its own row
    let basic_vars = (0..m).map(|i| N_VARS + i).collect();

    Tableau::new(tbl, basic_vars)
}

/// Read the optimum off the final tableau. The basis tracked across pivots
/// says which variable owns each row, so a decision variable is nonzero only
/// when some row's basic variable is its column; slack values come from the
/// same mapping and dual values from the objective row's slack entries.
fn extract(tableau: Tableau, c: &[f64; N_VARS], m: usize) -> Solution {
    let rhs_col = m + N_VARS;

    let mut values = [0.0_f64; N_VARS];
    for (row, &col) in tableau.basic_vars().iter().enumerate() {
        if col < N_VARS {
            values[col] = tableau.tbl()[[row, rhs_col]];
        }
    }

    let objective_value = c[0] * values[0] + c[1] * values[1];

    let constraints = (0..m)
        .map(|i| {
            let col = N_VARS + i;
            let slack = tableau
                .basic_vars()
                .iter()
                .position(|&basic| basic == col)
                .map_or(0.0_f64, |row| tableau.tbl()[[row, rhs_col]]);
            let dual = tableau.tbl()[[m, col]];
            ConstraintActivity { slack, dual }
        })
        .collect();

    Solution::new(objective_value, values, constraints, tableau)
}
