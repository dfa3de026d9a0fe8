//! This module contains some error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// An enumeration of the errors that can occur in the engine. All of them
/// are local, recoverable conditions for the caller; none is expected to be
/// fatal to the hosting process. This does not include errors that occur
/// when parsing grids, see [SudokuParseError] for that.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that the specified coordinates (row and column) lie outside
    /// the grid. This is the case if either is greater than or equal to
    /// [GRID_SIZE](crate::GRID_SIZE).
    OutOfBounds,

    /// Indicates that some number is invalid for a cell. This is the case if
    /// it is less than 1 or greater than [GRID_SIZE](crate::GRID_SIZE).
    InvalidNumber,

    /// Indicates that a row or column swap was requested whose indices do
    /// not lie within the same band or stack. Such a swap would break block
    /// validity and is therefore refused.
    BandMismatch,

    /// Indicates that a grid fails the row, column, or block checks in a
    /// place where validity was required.
    InvalidGrid,

    /// Indicates that a solver exhausted all branches without finding a
    /// completion for a grid.
    Unsolvable,

    /// An error that is raised whenever a reducer cannot find a removable
    /// cell within a bounded number of attempts and therefore cannot reach
    /// the target number of blank cells. Callers should retry with a fresh
    /// randomized grid.
    GenerationExhausted
}

impl Display for SudokuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuError::OutOfBounds =>
                write!(f, "coordinates outside the grid"),
            SudokuError::InvalidNumber =>
                write!(f, "number outside the range of valid digits"),
            SudokuError::BandMismatch =>
                write!(f, "swapped indices not within one band or stack"),
            SudokuError::InvalidGrid =>
                write!(f, "grid violates the row, column, or block rules"),
            SudokuError::Unsolvable =>
                write!(f, "grid has no completion"),
            SudokuError::GenerationExhausted =>
                write!(f, "no removable cell found within the retry budget")
        }
    }
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a
/// [SudokuGrid](crate::SudokuGrid).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SudokuParseError {

    /// Indicates that the number of cells (which are separated by commas)
    /// does not equal [CELL_COUNT](crate::CELL_COUNT).
    WrongNumberOfCells,

    /// Indicates that one of the cell contents could not be parsed as a
    /// number.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid number (0 or more
    /// than [GRID_SIZE](crate::GRID_SIZE)).
    InvalidNumber
}

impl Display for SudokuParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuParseError::WrongNumberOfCells =>
                write!(f, "wrong number of cells"),
            SudokuParseError::NumberFormatError =>
                write!(f, "cell content is not a number"),
            SudokuParseError::InvalidNumber =>
                write!(f, "cell content outside the range of valid digits")
        }
    }
}

impl From<ParseIntError> for SudokuParseError {
    fn from(_: ParseIntError) -> Self {
        SudokuParseError::NumberFormatError
    }
}

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;
