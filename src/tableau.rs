use ndarray::Array2;
use tabular::{Row, Table};

use std::fmt;

/// Row/column index of a pivot element.
#[derive(Debug, Clone, Copy)]
pub struct TableauIx {
    i: usize,
    j: usize,
}

impl TableauIx {
    pub fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }

    pub fn i(&self) -> usize {
        self.i
    }

    pub fn j(&self) -> usize {
        self.j
    }
}

/// The simplex tableau: one row per constraint plus the objective row, one
/// column per decision and slack variable plus the RHS column. Mutated in
/// place across pivots and owned by a single solve call.
///
/// `basic_vars[i]` is the column whose variable is basic in constraint row
/// `i`; each pivot swaps exactly one entry, so the mapping stays one-to-one
/// and never has to be reconstructed from the matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Tableau {
    pub(crate) tbl: Array2<f64>,
    basic_vars: Vec<usize>,
}

impl Tableau {
    pub fn new(tbl: Array2<f64>, basic_vars: Vec<usize>) -> Self {
        assert!(basic_vars.len() == tbl.shape()[0] - 1);
        Self { tbl, basic_vars }
    }

    pub fn tbl(&self) -> &Array2<f64> {
        &self.tbl
    }

    pub fn basic_vars(&self) -> &[usize] {
        &self.basic_vars
    }

    pub fn nrows(&self) -> usize {
        self.tbl.shape()[0]
    }

    pub fn ncols(&self) -> usize {
        self.tbl.shape()[1]
    }

    /// Gauss-Jordan pivot: normalize the pivot row by the pivot element,
    /// eliminate the pivot column from every other row (objective row
    /// included), and record the basis exchange.
    #[inline(always)]
    pub fn pivot(&mut self, pivot_ind: &TableauIx) {
        //pivot row must be a constraint row
        assert!(pivot_ind.i() < self.tbl.shape()[0] - 1);
        assert!(pivot_ind.j() < self.tbl.shape()[1]);

        //set coefficients in pivot row
        let div = self.tbl[[pivot_ind.i(), pivot_ind.j()]];
        for j in 0..self.tbl.shape()[1] {
            self.tbl[[pivot_ind.i(), j]] /= div;
        }

        //pivot
        for i in 0..self.tbl.shape()[0] {
            //skip pivot row
            if i == pivot_ind.i() {
                continue;
            }
            let ratio = self.tbl[[i, pivot_ind.j()]];
            for j in 0..self.tbl.shape()[1] {
                //calc new coefficients
                self.tbl[[i, j]] -= self.tbl[[pivot_ind.i(), j]] * ratio;
            }
        }

        //entering variable replaces the leaving one in the basis
        self.basic_vars[pivot_ind.i()] = pivot_ind.j();
    }
}

impl fmt::Display for Tableau {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let n_vars = 2;
        let m = self.nrows() - 1;

        let columns = "{:>}".repeat(self.ncols() + 1);
        let mut table = Table::new(columns.as_str());

        let mut header = Row::new();
        header.add_cell("");
        for j in 0..n_vars {
            header.add_cell(format!(" x{}", j + 1));
        }
        for i in 0..m {
            header.add_cell(format!(" s{}", i + 1));
        }
        header.add_cell(" rhs");
        table.add_row(header);

        for (i, row) in self.tbl.rows().into_iter().enumerate() {
            let mut cells = Row::new();
            if i < m {
                cells.add_cell(format!("r{}", i + 1));
            } else {
                cells.add_cell("z");
            }
            for v in row.iter() {
                cells.add_cell(format!(" {:.3}", v));
            }
            table.add_row(cells);
        }

        write!(f, "{}", table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn pivot_normalizes_row_and_clears_column() {
        let mut tbl = Tableau::new(
            array![
                [2.0, 1.0, 1.0, 0.0, 10.0],
                [1.0, 3.0, 0.0, 1.0, 15.0],
                [-2.0, -3.0, 0.0, 0.0, 0.0],
            ],
            vec![2, 3],
        );

        tbl.pivot(&TableauIx::new(0, 0));

        // pivot row normalized
        assert_relative_eq!(tbl.tbl()[[0, 0]], 1.0);
        assert_relative_eq!(tbl.tbl()[[0, 4]], 5.0);
        // pivot column eliminated elsewhere
        assert_relative_eq!(tbl.tbl()[[1, 0]], 0.0);
        assert_relative_eq!(tbl.tbl()[[2, 0]], 0.0);
        // other entries updated by row operations
        assert_relative_eq!(tbl.tbl()[[1, 1]], 2.5);
        assert_relative_eq!(tbl.tbl()[[1, 4]], 10.0);
        assert_relative_eq!(tbl.tbl()[[2, 1]], -2.0);
        assert_relative_eq!(tbl.tbl()[[2, 4]], 10.0);
    }

    #[test]
    fn pivot_records_the_basis_exchange() {
        let mut tbl = Tableau::new(
            array![
                [2.0, 1.0, 1.0, 0.0, 10.0],
                [1.0, 3.0, 0.0, 1.0, 15.0],
                [-2.0, -3.0, 0.0, 0.0, 0.0],
            ],
            vec![2, 3],
        );

        tbl.pivot(&TableauIx::new(0, 0));
        assert_eq!(tbl.basic_vars(), &[0, 3]);

        tbl.pivot(&TableauIx::new(1, 1));
        assert_eq!(tbl.basic_vars(), &[0, 1]);
    }
}
