use tabular::{Row, Table};

use std::fmt;

use crate::model::N_VARS;
use crate::tableau::Tableau;

/// Value of one decision variable at the optimum.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableValue {
    pub name: String,
    pub value: f64,
}

/// Per-constraint activity read off the final tableau: the slack variable's
/// value and the objective-row entry in the slack column (the dual value, in
/// the informal sensitivity-indicator sense).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstraintActivity {
    pub slack: f64,
    pub dual: f64,
}

/// Result of a successful solve. Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub(crate) objective_value: f64,
    variables: [VariableValue; N_VARS],
    constraints: Vec<ConstraintActivity>,
    tableau: Tableau,
}

impl Solution {
    pub(crate) fn new(
        objective_value: f64,
        values: [f64; N_VARS],
        constraints: Vec<ConstraintActivity>,
        tableau: Tableau,
    ) -> Self {
        let variables = [
            VariableValue {
                name: "X1".to_string(),
                value: values[0],
            },
            VariableValue {
                name: "X2".to_string(),
                value: values[1],
            },
        ];
        Self {
            objective_value,
            variables,
            constraints,
            tableau,
        }
    }

    pub fn objective_value(&self) -> f64 {
        self.objective_value
    }

    pub fn variables(&self) -> &[VariableValue; N_VARS] {
        &self.variables
    }

    /// Value of decision variable `j` (0-based).
    pub fn var_value(&self, j: usize) -> f64 {
        self.variables[j].value
    }

    pub fn constraints(&self) -> &[ConstraintActivity] {
        &self.constraints
    }

    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Objective value = {:.3}", self.objective_value)?;

        let mut table = Table::new("{:<}  {:>}");
        table.add_row(Row::new().with_cell("Variable").with_cell("Value"));
        for var in &self.variables {
            table.add_row(
                Row::new()
                    .with_cell(&var.name)
                    .with_cell(format!("{:.3}", var.value)),
            );
        }
        write!(f, "{}", table)
    }
}
