use std::fmt;
use std::str::FromStr;

use num::ToPrimitive;
use thiserror::Error;

use crate::region::Point;

/// Tolerance used when testing satisfaction of an equality constraint.
pub const EQ_TOL: f64 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comp {
    Le, // <=
    Ge, // >=
    Eq, // =
}

impl fmt::Display for Comp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Comp::Le => write!(f, "\u{2264}"),
            Comp::Eq => write!(f, "="),
            Comp::Ge => write!(f, "\u{2265}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown relational operator: {0:?}")]
pub struct ParseCompError(String);

impl FromStr for Comp {
    type Err = ParseCompError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "<=" => Ok(Comp::Le),
            ">=" => Ok(Comp::Ge),
            "=" => Ok(Comp::Eq),
            other => Err(ParseCompError(other.to_string())),
        }
    }
}

/// A single constraint row `a*x1 + b*x2 <comp> rhs`.
///
/// Non-negativity of the decision variables is implicit and never expressed
/// as a `Constraint`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraint {
    a: f64,
    b: f64,
    comp: Comp,
    rhs: f64,
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}*x1 + {}*x2 {} {}",
            self.a, self.b, self.comp, self.rhs
        )
    }
}

impl Constraint {
    pub fn new<T: ToPrimitive, U: ToPrimitive, V: ToPrimitive>(
        a: T,
        b: U,
        comp: Comp,
        rhs: V,
    ) -> Self {
        Self {
            a: a.to_f64().unwrap_or(0.0_f64),
            b: b.to_f64().unwrap_or(0.0_f64),
            comp,
            rhs: rhs.to_f64().unwrap_or(0.0_f64),
        }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn comp(&self) -> Comp {
        self.comp
    }

    pub fn rhs(&self) -> f64 {
        self.rhs
    }

    /// Value of the constraint's left-hand side at `point`.
    pub fn eval(&self, point: &Point) -> f64 {
        self.a * point.x + self.b * point.y
    }

    /// Whether `point` satisfies the constraint. Equality is checked within
    /// [`EQ_TOL`]; the inequalities are inclusive.
    pub fn is_satisfied(&self, point: &Point) -> bool {
        let value = self.eval(point);
        match self.comp {
            Comp::Le => value <= self.rhs,
            Comp::Ge => value >= self.rhs,
            Comp::Eq => (value - self.rhs).abs() < EQ_TOL,
        }
    }

    /// Whether the origin satisfies the constraint. The simplex tableau
    /// starts from the origin, so rows failing this test cannot be solved.
    pub fn admits_origin(&self) -> bool {
        self.is_satisfied(&Point::new(0.0_f64, 0.0_f64))
    }
}
