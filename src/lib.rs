// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(missing_crate_level_docs)]
#![warn(invalid_codeblock_attributes)]

//! This crate implements an easy-to-understand engine for classic 9x9 Sudoku.
//! It supports the following key features:
//!
//! * Parsing and printing Sudoku grids
//! * Checking validity of fully filled grids according to standard rules
//! * Producing random solved grids by applying validity-preserving
//! transformations to a canonical solution
//! * Carving puzzles out of solved grids while defending solvability, along
//! with an answer key for grading submitted solutions
//! * Solving Sudoku using a backtracking algorithm
//!
//! # Parsing and printing Sudoku
//!
//! See [SudokuGrid::parse] for the exact format of a grid code. Codes can be
//! used to exchange grids, while pretty prints can be used to display a grid
//! in a clearer manner. An example of how to obtain and display a grid is
//! provided below.
//!
//! ```
//! use sudoku_engine::SudokuGrid;
//!
//! let grid = SudokuGrid::canonical();
//! println!("{}", grid);
//! ```
//!
//! # Checking validity
//!
//! A fully filled grid is valid if every row, every column, and every aligned
//! 3x3 block contains each of the digits 1 to 9 exactly once.
//! [SudokuGrid::is_valid] checks precisely that. It is intended for
//! candidate-complete grids; a grid that still contains blank cells fails the
//! check.
//!
//! ```
//! use sudoku_engine::SudokuGrid;
//!
//! let mut grid = SudokuGrid::canonical();
//! assert!(grid.is_valid());
//!
//! grid.clear_cell(0, 0).unwrap();
//! assert!(!grid.is_valid());
//! ```
//!
//! # Solving Sudoku
//!
//! This crate offers a [Solver](solver::Solver) trait for structs that can
//! decide whether a partially filled grid can be completed to a valid
//! solution. As the default implementation,
//! [BacktrackingSolver](solver::BacktrackingSolver) is provided, which finds
//! the first completion in a deterministic search order or proves that none
//! exists.
//!
//! ```
//! use sudoku_engine::SudokuGrid;
//! use sudoku_engine::solver::{BacktrackingSolver, Solution, Solver};
//!
//! let mut puzzle = SudokuGrid::canonical();
//! puzzle.clear_cell(4, 4).unwrap();
//!
//! match BacktrackingSolver::new().solve(&puzzle) {
//!     Solution::Solved(grid) => assert_eq!(SudokuGrid::canonical(), grid),
//!     Solution::Impossible => panic!("missing digit was not restored")
//! }
//! ```
//!
//! # Generating Sudoku
//!
//! Generation of a playable puzzle is done in two steps: producing a random
//! solved grid using a [Generator](generator::Generator) and then blanking
//! out cells using a [Reducer](generator::Reducer). The reducer refuses to
//! blank any cell at which a different digit would also lead to a solvable
//! grid, and records every removed digit in an
//! [AnswerKey](generator::AnswerKey).
//!
//! Both hold a random number generator, for which we use the `Rng` trait
//! from the [rand](https://rust-random.github.io/rand/rand/index.html)
//! crate, so seeded generation for reproducible results is possible.
//!
//! ```
//! use sudoku_engine::generator::{Generator, Reducer, TARGET_BLANKS};
//! use sudoku_engine::solver::{BacktrackingSolver, Solver};
//!
//! // new_default yields a generator/reducer based on rand::thread_rng()
//! let mut generator = Generator::new_default();
//! let mut reducer = Reducer::new_default();
//!
//! let solution = generator.generate().unwrap();
//! assert!(solution.is_valid());
//!
//! let puzzle = reducer.reduce(&solution).unwrap();
//! assert_eq!(TARGET_BLANKS, puzzle.answer_key().len());
//! assert!(BacktrackingSolver::new().is_solvable(puzzle.grid()));
//! ```
//!
//! # Note regarding performance
//!
//! Carving a puzzle probes the solver many times, so it is strongly
//! recommended to use at least `opt-level = 2`, even in tests that use
//! puzzle generation.

pub mod error;
pub mod generator;
pub mod solver;
pub mod transform;
pub mod util;


use error::{
    SudokuError,
    SudokuParseError,
    SudokuParseResult,
    SudokuResult
};
use util::DigitSet;

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The width and height of one block, i.e. one of the nine 3x3 sub-squares
/// of the grid.
pub const BLOCK_SIZE: usize = 3;

/// The number of rows and columns of the grid, which is also the highest
/// digit a cell can hold.
pub const GRID_SIZE: usize = BLOCK_SIZE * BLOCK_SIZE;

/// The total number of cells in a grid.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// The fixed, hard-coded valid solution from which all randomized grids are
/// derived. Row 0 holds the digits 1 to 9 in order; the rows below are
/// cyclic shifts aligned so that all blocks are valid.
const CANONICAL_CELLS: [[usize; GRID_SIZE]; GRID_SIZE] = [
    [1, 2, 3, 4, 5, 6, 7, 8, 9],
    [4, 5, 6, 7, 8, 9, 1, 2, 3],
    [7, 8, 9, 1, 2, 3, 4, 5, 6],
    [2, 3, 4, 5, 6, 7, 8, 9, 1],
    [5, 6, 7, 8, 9, 1, 2, 3, 4],
    [8, 9, 1, 2, 3, 4, 5, 6, 7],
    [3, 4, 5, 6, 7, 8, 9, 1, 2],
    [6, 7, 8, 9, 1, 2, 3, 4, 5],
    [9, 1, 2, 3, 4, 5, 6, 7, 8]
];

pub(crate) fn index(row: usize, column: usize) -> usize {
    row * GRID_SIZE + column
}

/// A 9x9 Sudoku grid. Each cell may or may not be occupied by a digit from 1
/// to 9. A grid counts as a *solution* if it is full and
/// [SudokuGrid::is_valid] holds, and as a *puzzle* if some cells of a
/// solution have been blanked.
///
/// Towards the web layer a grid is exchanged as a 9x9 array of integers from
/// 0 to 9, where 0 denotes a blank cell. [SudokuGrid::from_array] and
/// [SudokuGrid::to_array] convert between the two shapes, and serialization
/// via [serde](https://serde.rs/) uses the array shape as well.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "Vec<Vec<usize>>")]
#[serde(try_from = "Vec<Vec<usize>>")]
pub struct SudokuGrid {
    cells: Vec<Option<usize>>
}

fn to_char(cell: Option<usize>) -> char {
    if let Some(n) = cell {
        ('0' as u8 + n as u8) as char
    }
    else {
        ' '
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for x in 0..GRID_SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % BLOCK_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &SudokuGrid, row: usize) -> String {
    line('║', '║', '│', |column| to_char(grid.get_cell(row, column).unwrap()),
        ' ', '║', true)
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let top_row = top_row();
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();
        let bottom_row = bottom_row();

        for row in 0..GRID_SIZE {
            if row == 0 {
                f.write_str(top_row.as_str())?;
            }
            else if row % BLOCK_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, row).as_str())?;
        }

        f.write_str(bottom_row.as_str())?;
        Ok(())
    }
}

fn to_string(cell: &Option<usize>) -> String {
    if let Some(number) = cell {
        number.to_string()
    }
    else {
        String::from("")
    }
}

impl SudokuGrid {

    /// Creates a fresh, independently owned copy of the canonical solved
    /// grid. The canonical grid is read-only template data; every call
    /// returns a new grid that the caller exclusively owns, so it can be
    /// transformed freely without affecting other grids.
    pub fn canonical() -> SudokuGrid {
        let mut cells = Vec::with_capacity(CELL_COUNT);

        for row in CANONICAL_CELLS.iter() {
            for &number in row.iter() {
                cells.push(Some(number));
            }
        }

        SudokuGrid {
            cells
        }
    }

    /// Parses a code encoding a Sudoku grid. The code is a comma-separated
    /// list of 81 entries, which are either empty or a digit from 1 to 9.
    /// The entries are assigned left-to-right, top-to-bottom, where each row
    /// is completed before the next one is started. Whitespace in the
    /// entries is ignored to allow for more intuitive formatting.
    ///
    /// # Errors
    ///
    /// Any specialization of `SudokuParseError` (see that documentation).
    pub fn parse(code: &str) -> SudokuParseResult<SudokuGrid> {
        let entries: Vec<&str> = code.split(',').collect();

        if entries.len() != CELL_COUNT {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        let mut grid = SudokuGrid {
            cells: vec![None; CELL_COUNT]
        };

        for (i, entry) in entries.iter().enumerate() {
            let entry = entry.trim();

            if entry.is_empty() {
                continue;
            }

            let number = entry.parse::<usize>()?;

            if number == 0 || number > GRID_SIZE {
                return Err(SudokuParseError::InvalidNumber);
            }

            grid.cells[i] = Some(number);
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [SudokuGrid::parse]. That is, a grid that is converted to a string
    /// and parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_engine::SudokuGrid;
    ///
    /// let mut grid = SudokuGrid::canonical();
    /// grid.clear_cell(2, 7).unwrap();
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = SudokuGrid::parse(grid_str.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Creates a grid from a 9x9 array of integers from 0 to 9, where 0
    /// denotes a blank cell. This is the shape in which the web layer
    /// exchanges grids. The outer array contains the rows from top to
    /// bottom.
    ///
    /// # Errors
    ///
    /// If any entry is greater than 9. In that case,
    /// `SudokuError::InvalidNumber` is returned.
    pub fn from_array(rows: [[usize; GRID_SIZE]; GRID_SIZE])
            -> SudokuResult<SudokuGrid> {
        let mut cells = Vec::with_capacity(CELL_COUNT);

        for row in rows.iter() {
            for &entry in row.iter() {
                if entry > GRID_SIZE {
                    return Err(SudokuError::InvalidNumber);
                }

                if entry == 0 {
                    cells.push(None);
                }
                else {
                    cells.push(Some(entry));
                }
            }
        }

        Ok(SudokuGrid {
            cells
        })
    }

    /// Converts the grid into a 9x9 array of integers from 0 to 9, where 0
    /// denotes a blank cell. This is the inverse of [SudokuGrid::from_array].
    pub fn to_array(&self) -> [[usize; GRID_SIZE]; GRID_SIZE] {
        let mut rows = [[0usize; GRID_SIZE]; GRID_SIZE];

        for row in 0..GRID_SIZE {
            for column in 0..GRID_SIZE {
                if let Some(number) = self.cells[index(row, column)] {
                    rows[row][column] = number;
                }
            }
        }

        rows
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `row`: The row of the desired cell. Must be in the range
    /// `[0, GRID_SIZE[`.
    /// * `column`: The column of the desired cell. Must be in the range
    /// `[0, GRID_SIZE[`.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, row: usize, column: usize)
            -> SudokuResult<Option<usize>> {
        if row >= GRID_SIZE || column >= GRID_SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(row, column)])
        }
    }

    /// Indicates whether the cell at the specified position has the given
    /// number. This will return `false` if there is a different number in
    /// that cell or it is empty.
    ///
    /// # Arguments
    ///
    /// * `row`: The row of the checked cell. Must be in the range
    /// `[0, GRID_SIZE[`.
    /// * `column`: The column of the checked cell. Must be in the range
    /// `[0, GRID_SIZE[`.
    /// * `number`: The number to check whether it is in the specified cell.
    /// If it is *not* in the range `[1, GRID_SIZE]`, `false` will always be
    /// returned.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn has_number(&self, row: usize, column: usize, number: usize)
            -> SudokuResult<bool> {
        if let Some(content) = self.get_cell(row, column)? {
            Ok(number == content)
        }
        else {
            Ok(false)
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not empty, the old number will be
    /// overwritten.
    ///
    /// # Arguments
    ///
    /// * `row`: The row of the assigned cell. Must be in the range
    /// `[0, GRID_SIZE[`.
    /// * `column`: The column of the assigned cell. Must be in the range
    /// `[0, GRID_SIZE[`.
    /// * `number`: The number to assign to the specified cell. Must be in
    /// the range `[1, GRID_SIZE]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `row` or `column` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_cell(&mut self, row: usize, column: usize, number: usize)
            -> SudokuResult<()> {
        if row >= GRID_SIZE || column >= GRID_SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        if number == 0 || number > GRID_SIZE {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[index(row, column)] = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a number, that number is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `row`: The row of the cleared cell. Must be in the range
    /// `[0, GRID_SIZE[`.
    /// * `column`: The column of the cleared cell. Must be in the range
    /// `[0, GRID_SIZE[`.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, row: usize, column: usize)
            -> SudokuResult<()> {
        if row >= GRID_SIZE || column >= GRID_SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        self.cells[index(row, column)] = None;
        Ok(())
    }

    pub(crate) fn swap_cells(&mut self, first: (usize, usize),
            second: (usize, usize)) {
        let first_index = index(first.0, first.1);
        let second_index = index(second.0, second.1);
        self.cells.swap(first_index, second_index);
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells.
    pub fn count_clues(&self) -> usize {
        self.cells.iter()
            .filter(|c| c.is_some())
            .count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// number. In this case, [SudokuGrid::count_clues] returns [CELL_COUNT].
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// number. In this case, [SudokuGrid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c == &None)
    }

    /// Returns the positions of all blank cells as `(row, column)` pairs in
    /// row-major scan order, i.e. all cells of row 0 from left to right,
    /// then row 1, and so on. Solvers rely on this order being deterministic
    /// for reproducible results.
    pub fn blank_positions(&self) -> Vec<(usize, usize)> {
        let mut blanks = Vec::new();

        for row in 0..GRID_SIZE {
            for column in 0..GRID_SIZE {
                if self.cells[index(row, column)].is_none() {
                    blanks.push((row, column));
                }
            }
        }

        blanks
    }

    /// Indicates whether this grid configuration is a subset of another one.
    /// That is, all cells filled in this grid with some number must be
    /// filled in `other` with the same number. If this condition is met,
    /// `true` is returned, and `false` otherwise.
    pub fn is_subset(&self, other: &SudokuGrid) -> bool {
        self.cells.iter()
            .zip(other.cells.iter())
            .all(|(self_cell, other_cell)| {
                match self_cell {
                    Some(self_number) =>
                        match other_cell {
                            Some(other_number) => self_number == other_number,
                            None => false
                        },
                    None => true
                }
            })
    }

    /// Indicates whether this grid configuration is a superset of another
    /// one. That is, all cells filled in the `other` grid with some number
    /// must be filled in this one with the same number. If this condition is
    /// met, `true` is returned, and `false` otherwise.
    pub fn is_superset(&self, other: &SudokuGrid) -> bool {
        other.is_subset(self)
    }

    /// Indicates whether every row and every column of this grid contains
    /// nine distinct digits. A row or column that contains a blank cell or a
    /// duplicated digit fails the check.
    pub fn rows_and_columns_valid(&self) -> bool {
        let mut row_digits = DigitSet::new();
        let mut column_digits = DigitSet::new();

        for i in 0..GRID_SIZE {
            row_digits.clear();
            column_digits.clear();

            for j in 0..GRID_SIZE {
                match self.cells[index(i, j)] {
                    Some(number) =>
                        if !row_digits.insert(number).unwrap() {
                            return false;
                        },
                    None => return false
                }

                match self.cells[index(j, i)] {
                    Some(number) =>
                        if !column_digits.insert(number).unwrap() {
                            return false;
                        },
                    None => return false
                }
            }
        }

        true
    }

    /// Indicates whether every aligned 3x3 block of this grid contains nine
    /// distinct digits. A block that contains a blank cell or a duplicated
    /// digit fails the check.
    pub fn blocks_valid(&self) -> bool {
        let mut block_digits = DigitSet::new();

        for block_row in (0..GRID_SIZE).step_by(BLOCK_SIZE) {
            for block_column in (0..GRID_SIZE).step_by(BLOCK_SIZE) {
                block_digits.clear();

                for row in block_row..(block_row + BLOCK_SIZE) {
                    for column in block_column..(block_column + BLOCK_SIZE) {
                        match self.cells[index(row, column)] {
                            Some(number) =>
                                if !block_digits.insert(number).unwrap() {
                                    return false;
                                },
                            None => return false
                        }
                    }
                }
            }
        }

        true
    }

    /// Indicates whether this grid is a valid solution, i.e. it is full and
    /// every row, column, and aligned 3x3 block contains each digit from 1
    /// to 9 exactly once. Grids that contain blank cells fail this check.
    pub fn is_valid(&self) -> bool {
        self.rows_and_columns_valid() && self.blocks_valid()
    }
}

impl From<SudokuGrid> for Vec<Vec<usize>> {
    fn from(grid: SudokuGrid) -> Vec<Vec<usize>> {
        grid.to_array().iter()
            .map(|row| row.to_vec())
            .collect()
    }
}

impl TryFrom<Vec<Vec<usize>>> for SudokuGrid {
    type Error = SudokuParseError;

    fn try_from(rows: Vec<Vec<usize>>)
            -> Result<SudokuGrid, SudokuParseError> {
        if rows.len() != GRID_SIZE ||
                rows.iter().any(|row| row.len() != GRID_SIZE) {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        let mut cells = Vec::with_capacity(CELL_COUNT);

        for row in rows {
            for entry in row {
                if entry > GRID_SIZE {
                    return Err(SudokuParseError::InvalidNumber);
                }

                if entry == 0 {
                    cells.push(None);
                }
                else {
                    cells.push(Some(entry));
                }
            }
        }

        Ok(SudokuGrid {
            cells
        })
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn parse_ok() {
        let mut code = String::from("1, ,3");
        code.push_str(&",".repeat(CELL_COUNT - 3));
        let grid_res = SudokuGrid::parse(code.as_str());

        if let Ok(grid) = grid_res {
            assert_eq!(Some(1), grid.get_cell(0, 0).unwrap());
            assert_eq!(None, grid.get_cell(0, 1).unwrap());
            assert_eq!(Some(3), grid.get_cell(0, 2).unwrap());
            assert_eq!(None, grid.get_cell(8, 8).unwrap());
            assert_eq!(2, grid.count_clues());
        }
        else {
            panic!("Parsing valid grid failed.");
        }
    }

    #[test]
    fn parse_number_format_error() {
        let mut code = String::from("#");
        code.push_str(&",".repeat(CELL_COUNT - 1));
        assert_eq!(Err(SudokuParseError::NumberFormatError),
            SudokuGrid::parse(code.as_str()));
    }

    #[test]
    fn parse_invalid_number() {
        let mut code = String::from("10");
        code.push_str(&",".repeat(CELL_COUNT - 1));
        assert_eq!(Err(SudokuParseError::InvalidNumber),
            SudokuGrid::parse(code.as_str()));

        let mut code = String::from("0");
        code.push_str(&",".repeat(CELL_COUNT - 1));
        assert_eq!(Err(SudokuParseError::InvalidNumber),
            SudokuGrid::parse(code.as_str()));
    }

    #[test]
    fn parse_wrong_number_of_cells() {
        assert_eq!(Err(SudokuParseError::WrongNumberOfCells),
            SudokuGrid::parse(&",".repeat(CELL_COUNT - 2)));
        assert_eq!(Err(SudokuParseError::WrongNumberOfCells),
            SudokuGrid::parse(&",".repeat(CELL_COUNT)));
    }

    #[test]
    fn to_parseable_string_round_trip() {
        let mut grid = SudokuGrid::canonical();
        grid.clear_cell(0, 0).unwrap();
        grid.clear_cell(5, 3).unwrap();
        grid.clear_cell(8, 8).unwrap();

        let code = grid.to_parseable_string();
        assert_eq!(grid, SudokuGrid::parse(code.as_str()).unwrap());
    }

    #[test]
    fn count_clues_and_empty_and_full() {
        let empty = SudokuGrid::parse(&",".repeat(CELL_COUNT - 1)).unwrap();
        let full = SudokuGrid::canonical();
        let mut partial = SudokuGrid::canonical();

        for column in 0..GRID_SIZE {
            partial.clear_cell(4, column).unwrap();
        }

        assert_eq!(0, empty.count_clues());
        assert_eq!(CELL_COUNT - GRID_SIZE, partial.count_clues());
        assert_eq!(CELL_COUNT, full.count_clues());

        assert!(empty.is_empty());
        assert!(!partial.is_empty());
        assert!(!full.is_empty());

        assert!(!empty.is_full());
        assert!(!partial.is_full());
        assert!(full.is_full());
    }

    #[test]
    fn blank_positions_row_major() {
        let mut grid = SudokuGrid::canonical();
        grid.clear_cell(3, 7).unwrap();
        grid.clear_cell(0, 2).unwrap();
        grid.clear_cell(3, 1).unwrap();

        assert_eq!(vec![(0, 2), (3, 1), (3, 7)], grid.blank_positions());
    }

    fn assert_subset_relation(a: &SudokuGrid, b: &SudokuGrid,
            a_subset_b: bool, b_subset_a: bool) {
        assert!(a.is_subset(b) == a_subset_b);
        assert!(a.is_superset(b) == b_subset_a);
        assert!(b.is_subset(a) == b_subset_a);
        assert!(b.is_superset(a) == a_subset_b);
    }

    #[test]
    fn empty_is_subset() {
        let empty = SudokuGrid::parse(&",".repeat(CELL_COUNT - 1)).unwrap();
        let full = SudokuGrid::canonical();

        assert_subset_relation(&empty, &empty, true, true);
        assert_subset_relation(&empty, &full, true, false);
    }

    #[test]
    fn puzzle_is_subset_of_solution() {
        let solution = SudokuGrid::canonical();
        let mut puzzle = solution.clone();
        puzzle.clear_cell(1, 1).unwrap();
        puzzle.clear_cell(6, 0).unwrap();

        assert_subset_relation(&puzzle, &solution, true, false);
    }

    #[test]
    fn changed_grids_not_subsets() {
        let a = SudokuGrid::canonical();
        let mut b = SudokuGrid::canonical();
        b.set_cell(0, 0, 9).unwrap();
        b.clear_cell(4, 4).unwrap();

        assert_subset_relation(&a, &b, false, false);
    }

    #[test]
    fn cell_access_out_of_bounds() {
        let mut grid = SudokuGrid::canonical();

        assert_eq!(Err(SudokuError::OutOfBounds), grid.get_cell(9, 0));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.has_number(0, 9, 1));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.set_cell(9, 9, 1));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.clear_cell(10, 0));
    }

    #[test]
    fn set_cell_invalid_number() {
        let mut grid = SudokuGrid::canonical();

        assert_eq!(Err(SudokuError::InvalidNumber), grid.set_cell(0, 0, 0));
        assert_eq!(Err(SudokuError::InvalidNumber), grid.set_cell(0, 0, 10));
    }

    #[test]
    fn has_number_mismatch() {
        let grid = SudokuGrid::canonical();

        assert!(grid.has_number(0, 3, 4).unwrap());
        assert!(!grid.has_number(0, 3, 5).unwrap());
        assert!(!grid.has_number(0, 3, 0).unwrap());
    }

    #[test]
    fn canonical_grid_is_valid() {
        let grid = SudokuGrid::canonical();

        assert!(grid.rows_and_columns_valid());
        assert!(grid.blocks_valid());
        assert!(grid.is_valid());
    }

    #[test]
    fn grid_with_blank_is_invalid() {
        let mut grid = SudokuGrid::canonical();
        grid.clear_cell(4, 4).unwrap();

        assert!(!grid.is_valid());
    }

    #[test]
    fn duplicate_in_row_is_invalid() {
        let mut grid = SudokuGrid::canonical();

        // Row 0 already contains a 2 at (0, 1).
        grid.set_cell(0, 0, 2).unwrap();

        assert!(!grid.rows_and_columns_valid());
        assert!(!grid.is_valid());
    }

    #[test]
    fn shifted_latin_square_has_invalid_blocks() {
        let mut rows = [[0usize; GRID_SIZE]; GRID_SIZE];

        for row in 0..GRID_SIZE {
            for column in 0..GRID_SIZE {
                rows[row][column] = (row + column) % GRID_SIZE + 1;
            }
        }

        let grid = SudokuGrid::from_array(rows).unwrap();

        assert!(grid.rows_and_columns_valid());
        assert!(!grid.blocks_valid());
        assert!(!grid.is_valid());
    }

    #[test]
    fn array_round_trip() {
        let grid = SudokuGrid::canonical();
        let rows = grid.to_array();

        assert_eq!([1, 2, 3, 4, 5, 6, 7, 8, 9], rows[0]);
        assert_eq!(grid, SudokuGrid::from_array(rows).unwrap());
    }

    #[test]
    fn array_blank_is_zero() {
        let mut grid = SudokuGrid::canonical();
        grid.clear_cell(2, 5).unwrap();

        assert_eq!(0, grid.to_array()[2][5]);
    }

    #[test]
    fn array_rejects_invalid_entry() {
        let mut rows = SudokuGrid::canonical().to_array();
        rows[7][7] = 10;

        assert_eq!(Err(SudokuError::InvalidNumber),
            SudokuGrid::from_array(rows));
    }

    #[test]
    fn serde_wire_format() {
        let mut grid = SudokuGrid::canonical();
        grid.clear_cell(0, 1).unwrap();

        let json = serde_json::to_string(&grid).unwrap();
        assert!(json.starts_with("[[1,0,3,"));

        let deserialized: SudokuGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(grid, deserialized);
    }

    #[test]
    fn serde_rejects_malformed_grid() {
        let result = serde_json::from_str::<SudokuGrid>("[[1,2,3]]");
        assert!(result.is_err());
    }
}
