//! This module contains the library of validity-preserving grid
//! transformations.
//!
//! Each [Transformation] is a permutation of cell contents that keeps a
//! valid grid valid: it changes which positions the digits occupy, but never
//! which digits appear in a row, column, or block set. Row and column swaps
//! are restricted to one band or stack, since swapping across a band
//! boundary would break the block constraint.

use crate::{BLOCK_SIZE, GRID_SIZE, SudokuGrid};
use crate::error::{SudokuError, SudokuResult};

use rand::Rng;

/// The number of different transformation kinds that
/// [Transformation::random] chooses from.
const TRANSFORMATION_KINDS: usize = 6;

/// A structure-preserving operation on a [SudokuGrid]. Applied to a valid
/// grid, every transformation yields a valid grid again.
///
/// Since transformations are involutions or restricted permutations, they
/// can be chained freely to scramble a grid, as the
/// [Generator](crate::generator::Generator) does.
///
/// ```
/// use sudoku_engine::SudokuGrid;
/// use sudoku_engine::transform::Transformation;
///
/// let mut grid = SudokuGrid::canonical();
/// Transformation::FlipHorizontal.apply(&mut grid).unwrap();
/// Transformation::FlipHorizontal.apply(&mut grid).unwrap();
/// assert_eq!(SudokuGrid::canonical(), grid);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Transformation {

    /// Exchanges the two rows `first` and `second`, which must lie within
    /// the same band.
    SwapRows {

        /// The index of the first swapped row.
        first: usize,

        /// The index of the second swapped row.
        second: usize
    },

    /// Exchanges the two columns `first` and `second`, which must lie within
    /// the same stack.
    SwapColumns {

        /// The index of the first swapped column.
        first: usize,

        /// The index of the second swapped column.
        second: usize
    },

    /// Mirrors the grid top-to-bottom by swapping symmetric row pairs about
    /// the center row.
    FlipHorizontal,

    /// Mirrors the grid left-to-right by swapping symmetric column pairs
    /// about the center column.
    FlipVertical,

    /// Transposes the grid about the main diagonal, which runs from the
    /// top-left to the bottom-right corner.
    FlipMainDiagonal,

    /// Transposes the grid about the anti-diagonal, which runs from the
    /// top-right to the bottom-left corner.
    FlipAntiDiagonal
}

/// Picks two indices that lie within the same, randomly selected band or
/// stack. The two indices may coincide, in which case the resulting swap is
/// a no-op.
fn random_band_indices(rng: &mut impl Rng) -> (usize, usize) {
    let band = rng.gen_range(0..BLOCK_SIZE);
    let first = band * BLOCK_SIZE + rng.gen_range(0..BLOCK_SIZE);
    let second = band * BLOCK_SIZE + rng.gen_range(0..BLOCK_SIZE);
    (first, second)
}

fn check_same_band(first: usize, second: usize) -> SudokuResult<()> {
    if first >= GRID_SIZE || second >= GRID_SIZE {
        Err(SudokuError::OutOfBounds)
    }
    else if first / BLOCK_SIZE != second / BLOCK_SIZE {
        Err(SudokuError::BandMismatch)
    }
    else {
        Ok(())
    }
}

fn swap_rows(grid: &mut SudokuGrid, first: usize, second: usize)
        -> SudokuResult<()> {
    check_same_band(first, second)?;

    for column in 0..GRID_SIZE {
        grid.swap_cells((first, column), (second, column));
    }

    Ok(())
}

fn swap_columns(grid: &mut SudokuGrid, first: usize, second: usize)
        -> SudokuResult<()> {
    check_same_band(first, second)?;

    for row in 0..GRID_SIZE {
        grid.swap_cells((row, first), (row, second));
    }

    Ok(())
}

fn flip_horizontal(grid: &mut SudokuGrid) {
    for row in 0..(GRID_SIZE / 2) {
        for column in 0..GRID_SIZE {
            grid.swap_cells((row, column), (GRID_SIZE - row - 1, column));
        }
    }
}

fn flip_vertical(grid: &mut SudokuGrid) {
    for column in 0..(GRID_SIZE / 2) {
        for row in 0..GRID_SIZE {
            grid.swap_cells((row, column), (row, GRID_SIZE - column - 1));
        }
    }
}

fn flip_main_diagonal(grid: &mut SudokuGrid) {
    for row in 0..GRID_SIZE {
        for column in (row + 1)..GRID_SIZE {
            grid.swap_cells((row, column), (column, row));
        }
    }
}

fn flip_anti_diagonal(grid: &mut SudokuGrid) {
    for row in 0..GRID_SIZE {
        for column in 0..(GRID_SIZE - 1 - row) {
            grid.swap_cells((row, column),
                (GRID_SIZE - 1 - column, GRID_SIZE - 1 - row));
        }
    }
}

impl Transformation {

    /// Chooses a random transformation, where each of the six kinds is
    /// selected with equal probability. For the swap kinds, a band or stack
    /// is drawn uniformly and both affected indices are drawn from within
    /// it, so the resulting transformation always respects band and stack
    /// boundaries.
    pub fn random(rng: &mut impl Rng) -> Transformation {
        match rng.gen_range(0..TRANSFORMATION_KINDS) {
            0 => {
                let (first, second) = random_band_indices(rng);
                Transformation::SwapRows {
                    first,
                    second
                }
            },
            1 => {
                let (first, second) = random_band_indices(rng);
                Transformation::SwapColumns {
                    first,
                    second
                }
            },
            2 => Transformation::FlipHorizontal,
            3 => Transformation::FlipVertical,
            4 => Transformation::FlipMainDiagonal,
            _ => Transformation::FlipAntiDiagonal
        }
    }

    /// Applies this transformation to the given grid, permuting its cell
    /// contents in place. The grid must be exclusively owned by the caller;
    /// no transformation ever touches more than one grid.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If a swapped index is greater than or
    /// equal to [GRID_SIZE](crate::GRID_SIZE).
    /// * `SudokuError::BandMismatch` If the two swapped indices do not lie
    /// within the same band or stack.
    pub fn apply(self, grid: &mut SudokuGrid) -> SudokuResult<()> {
        match self {
            Transformation::SwapRows { first, second } =>
                swap_rows(grid, first, second),
            Transformation::SwapColumns { first, second } =>
                swap_columns(grid, first, second),
            Transformation::FlipHorizontal => {
                flip_horizontal(grid);
                Ok(())
            },
            Transformation::FlipVertical => {
                flip_vertical(grid);
                Ok(())
            },
            Transformation::FlipMainDiagonal => {
                flip_main_diagonal(grid);
                Ok(())
            },
            Transformation::FlipAntiDiagonal => {
                flip_anti_diagonal(grid);
                Ok(())
            }
        }
    }
}
