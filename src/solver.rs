//! This module contains the logic for solving Sudoku.
//!
//! Most importantly, this module contains the definition of the [Solver]
//! trait and the [BacktrackingSolver] as a generally usable implementation.

use crate::{BLOCK_SIZE, GRID_SIZE, SudokuGrid};
use crate::error::{SudokuError, SudokuResult};

/// The default bound on the number of digit placements a
/// [BacktrackingSolver] attempts before it gives up. High enough that it is
/// never reached for ordinary 9x9 grids.
const DEFAULT_STEP_LIMIT: usize = 10_000_000;

/// An enumeration of the ways an attempt to solve a Sudoku can end. The
/// engine only ever tests for the existence of at least one completion; it
/// never enumerates multiple solutions.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Solution {

    /// Indicates that the grid cannot be completed to a valid solution.
    Impossible,

    /// Indicates that a completion was found, which is wrapped in this
    /// instance. It is the first completion in the solver's search order;
    /// grids admitting more than one completion yield the same variant.
    Solved(SudokuGrid)
}

impl Solution {

    /// Unwraps the completed grid from this solution.
    ///
    /// # Errors
    ///
    /// If this solution is `Solution::Impossible`. In that case,
    /// `SudokuError::Unsolvable` is returned.
    pub fn into_grid(self) -> SudokuResult<SudokuGrid> {
        match self {
            Solution::Solved(grid) => Ok(grid),
            Solution::Impossible => Err(SudokuError::Unsolvable)
        }
    }
}

/// A trait for structs which have the ability to solve Sudoku, i.e. decide
/// whether a partially filled grid can be completed to a valid solution.
/// This is the seam at which the [Reducer](crate::generator::Reducer) probes
/// whether blanking a cell would admit a second completion.
pub trait Solver {

    /// Solves, or attempts to solve, the provided grid. Implementations must
    /// not mutate the input; any scratch state lives in grids they own
    /// themselves.
    fn solve(&self, grid: &SudokuGrid) -> Solution;

    /// Indicates whether the provided grid can be completed to a valid
    /// solution. A full grid is solvable if and only if it is already valid.
    fn is_solvable(&self, grid: &SudokuGrid) -> bool {
        match self.solve(grid) {
            Solution::Solved(_) => true,
            Solution::Impossible => false
        }
    }
}

fn row_free(grid: &SudokuGrid, row: usize, number: usize) -> bool {
    for column in 0..GRID_SIZE {
        if grid.has_number(row, column, number).unwrap() {
            return false;
        }
    }

    true
}

fn column_free(grid: &SudokuGrid, column: usize, number: usize) -> bool {
    for row in 0..GRID_SIZE {
        if grid.has_number(row, column, number).unwrap() {
            return false;
        }
    }

    true
}

fn block_free(grid: &SudokuGrid, row: usize, column: usize, number: usize)
        -> bool {
    let block_row = row / BLOCK_SIZE * BLOCK_SIZE;
    let block_column = column / BLOCK_SIZE * BLOCK_SIZE;

    for row in block_row..(block_row + BLOCK_SIZE) {
        for column in block_column..(block_column + BLOCK_SIZE) {
            if grid.has_number(row, column, number).unwrap() {
                return false;
            }
        }
    }

    true
}

/// Indicates whether placing `number` in the blank cell at `(row, column)`
/// would leave that cell's row, column, and block free of duplicates. The
/// check only relates the new number to digits already present; it does not
/// detect duplicates that the grid contained beforehand.
fn number_fits(grid: &SudokuGrid, row: usize, column: usize, number: usize)
        -> bool {
    row_free(grid, row, number) && column_free(grid, column, number) &&
        block_free(grid, row, column, number)
}

/// A perfect [Solver] which finds a completion by recursively testing all
/// fitting numbers for each blank cell. This means two things:
///
/// * Its worst-case runtime is exponential, i.e. it may be very slow if the
/// grid has many missing digits.
/// * It finds a completion whenever one exists, as long as the step budget
/// is not exceeded.
///
/// The solver fills blank cells in row-major scan order and tries candidate
/// digits in ascending order, so its result is deterministic. The search
/// places and un-places digits on one owned scratch grid; the input grid is
/// never touched.
///
/// The step budget bounds the total number of attempted digit placements.
/// A search that exceeds it is abandoned and reported as
/// [Solution::Impossible]. The default budget of ten million placements is
/// never reached for ordinary 9x9 grids, so this only matters for solvers
/// configured with [BacktrackingSolver::with_step_limit].
pub struct BacktrackingSolver {
    step_limit: usize
}

impl BacktrackingSolver {

    /// Creates a new backtracking solver with the default step budget.
    pub fn new() -> BacktrackingSolver {
        BacktrackingSolver {
            step_limit: DEFAULT_STEP_LIMIT
        }
    }

    /// Creates a new backtracking solver whose search is abandoned after
    /// the given number of attempted digit placements. A search that runs
    /// out of budget yields [Solution::Impossible].
    pub fn with_step_limit(step_limit: usize) -> BacktrackingSolver {
        BacktrackingSolver {
            step_limit
        }
    }

    fn solve_rec(grid: &mut SudokuGrid, blanks: &[(usize, usize)],
            steps: &mut usize) -> bool {
        let (row, column) = match blanks.first() {
            Some(&coordinate) => coordinate,
            None => return grid.is_valid()
        };

        for number in 1..=GRID_SIZE {
            if *steps == 0 {
                return false;
            }

            *steps -= 1;

            if number_fits(grid, row, column, number) {
                grid.set_cell(row, column, number).unwrap();

                if BacktrackingSolver::solve_rec(grid, &blanks[1..], steps) {
                    return true;
                }

                grid.clear_cell(row, column).unwrap();
            }
        }

        false
    }
}

impl Default for BacktrackingSolver {
    fn default() -> BacktrackingSolver {
        BacktrackingSolver::new()
    }
}

impl Solver for BacktrackingSolver {
    fn solve(&self, grid: &SudokuGrid) -> Solution {
        let mut scratch = grid.clone();
        let blanks = scratch.blank_positions();
        let mut steps = self.step_limit;

        if BacktrackingSolver::solve_rec(&mut scratch, &blanks, &mut steps) {
            Solution::Solved(scratch)
        }
        else {
            Solution::Impossible
        }
    }
}
