use num::ToPrimitive;
use tabular::{Row, Table};

use std::fmt;

use crate::constraint::{Comp, Constraint};

/// Number of decision variables. The region geometry is inherently planar,
/// so the whole crate is scoped to two.
pub const N_VARS: usize = 2;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OptDir {
    Max,
    Min,
}

impl fmt::Display for OptDir {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OptDir::Max => write!(f, "Max"),
            OptDir::Min => write!(f, "Min"),
        }
    }
}

/// A two-variable linear program: objective direction and coefficients plus
/// the constraint rows. Non-negativity of both variables is implicit.
#[derive(Clone, Debug, PartialEq)]
pub struct Problem {
    pub(crate) opt_dir: OptDir,
    pub(crate) obj: [f64; N_VARS],
    pub(crate) constraints: Vec<Constraint>,
}

impl Problem {
    pub fn new(opt_dir: OptDir) -> Self {
        Self {
            opt_dir,
            obj: [0.0_f64; N_VARS],
            constraints: Vec::new(),
        }
    }

    /// Assemble a problem from the parallel arrays an input form produces:
    /// objective coefficients, constraint matrix, RHS vector and relational
    /// operators.
    pub fn from_parts(
        opt_dir: OptDir,
        c: [f64; N_VARS],
        a: &[[f64; N_VARS]],
        b: &[f64],
        ops: &[Comp],
    ) -> Self {
        assert!(
            a.len() == b.len() && b.len() == ops.len(),
            "constraint rows, rhs values and operators must have equal length"
        );

        let constraints = a
            .iter()
            .zip(b)
            .zip(ops)
            .map(|((row, &rhs), &comp)| Constraint::new(row[0], row[1], comp, rhs))
            .collect();

        Self {
            opt_dir,
            obj: c,
            constraints,
        }
    }

    //set objective function and optimization direction
    pub fn set_obj_fn<T: ToPrimitive, U: ToPrimitive>(&mut self, opt_dir: OptDir, c1: T, c2: U) {
        self.opt_dir = opt_dir;
        self.obj = [
            c1.to_f64().unwrap_or(0.0_f64),
            c2.to_f64().unwrap_or(0.0_f64),
        ];
    }

    //add a constraint to the problem
    pub fn add_constraint(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    pub fn set_constraints(&mut self, constraints: Vec<Constraint>) {
        self.constraints = constraints;
    }

    pub fn opt_dir(&self) -> OptDir {
        self.opt_dir
    }

    pub fn objective(&self) -> [f64; N_VARS] {
        self.obj
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut table = Table::new("{:<} {:<}");

        table.add_row(Row::new().with_cell(format!("{}:", self.opt_dir)).with_cell(
            format!("{}*x1 + {}*x2", self.obj[0], self.obj[1]),
        ));
        table.add_row(Row::new().with_cell("Subject to:").with_cell(""));
        for con in &self.constraints {
            table.add_row(Row::new().with_cell("").with_cell(format!("{}", con)));
        }

        write!(f, "{}", table)
    }
}
