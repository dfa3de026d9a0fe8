//! This module contains logic for generating random Sudoku.
//!
//! Generation of Sudoku puzzles is done by first producing a random solved
//! grid with a [Generator] and then blanking out cells using a [Reducer],
//! which yields a [Puzzle] consisting of the puzzle grid and its
//! [AnswerKey].

use crate::{CELL_COUNT, GRID_SIZE, SudokuGrid};
use crate::error::{SudokuError, SudokuParseError, SudokuResult};
use crate::solver::{BacktrackingSolver, Solver};
use crate::transform::Transformation;

use rand::Rng;
use rand::rngs::ThreadRng;

use serde::{Deserialize, Serialize};

use std::collections::BTreeMap;
use std::convert::TryFrom;

/// The number of random transformations a [Generator] applies to the
/// canonical grid to scramble it.
const SHUFFLE_OPERATIONS: usize = 60;

/// The bound on additional transformations a [Generator] applies in case
/// the scrambled grid unexpectedly fails the validity check.
const MAX_REPAIR_OPERATIONS: usize = 81;

/// The number of cells a [Reducer] blanks out of a solved grid.
pub const TARGET_BLANKS: usize = 45;

/// The bound on draws that do not blank a cell before a [Reducer] gives up
/// and reports [SudokuError::GenerationExhausted].
const MAX_FAILED_DRAWS: usize = CELL_COUNT * CELL_COUNT;

/// A generator randomly produces a solved [SudokuGrid], that is, a grid
/// with no missing digits that satisfies the classic rules. It does so by
/// copying the canonical grid and applying a fixed number of random
/// validity-preserving [Transformation]s, so the result is valid by
/// construction. It uses a random number generator to pick the
/// transformations; given the same random stream, it produces the same
/// grid. For most cases, sensible defaults are provided by
/// [Generator::new_default].
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] to pick the applied
    /// transformations.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator
    /// to pick the applied transformations.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    /// Produces a fresh, randomly scrambled solved grid. Every call starts
    /// from a new copy of the canonical grid, so consecutive calls share no
    /// state besides the random number generator.
    ///
    /// It is guaranteed that [SudokuGrid::is_valid] on the result returns
    /// `true`: after the fixed number of transformations the grid is
    /// re-checked, and since every transformation preserves validity, the
    /// repair loop never has work to do.
    ///
    /// # Errors
    ///
    /// * `SudokuError::InvalidGrid` If the scrambled grid fails the validity
    /// check and cannot be repaired within a bounded number of further
    /// transformations. This cannot happen as long as the transformation
    /// library is correct.
    pub fn generate(&mut self) -> SudokuResult<SudokuGrid> {
        let mut grid = SudokuGrid::canonical();

        for _ in 0..SHUFFLE_OPERATIONS {
            Transformation::random(&mut self.rng).apply(&mut grid)?;
        }

        let mut repairs = 0;

        while !grid.is_valid() {
            if repairs == MAX_REPAIR_OPERATIONS {
                return Err(SudokuError::InvalidGrid);
            }

            Transformation::random(&mut self.rng).apply(&mut grid)?;
            repairs += 1;
        }

        Ok(grid)
    }
}

/// The record of which digits a [Reducer] blanked out of a solved grid. It
/// maps the coordinates of every blanked cell to the digit that was removed
/// there. It is built once while the puzzle is carved and immutable
/// afterwards, so a puzzle and its answer key always agree.
///
/// For the web layer, [AnswerKey::token_map] renders the key in its legacy
/// wire shape: a mapping from a two-character position token `"{row}{col}"`
/// to the removed digit as a string. Serialization via
/// [serde](https://serde.rs/) uses that shape as well.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "BTreeMap<String, String>")]
#[serde(try_from = "BTreeMap<String, String>")]
pub struct AnswerKey {
    digits: BTreeMap<(usize, usize), usize>
}

impl AnswerKey {

    pub(crate) fn new() -> AnswerKey {
        AnswerKey {
            digits: BTreeMap::new()
        }
    }

    pub(crate) fn record(&mut self, row: usize, column: usize,
            number: usize) {
        self.digits.insert((row, column), number);
    }

    /// Gets the digit that was removed at the given position, or `None` if
    /// the cell at that position was never blanked.
    pub fn get(&self, row: usize, column: usize) -> Option<usize> {
        self.digits.get(&(row, column)).copied()
    }

    /// Returns the number of blanked cells recorded in this answer key.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Indicates whether this answer key contains no entries.
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Returns an iterator over all entries of this answer key as
    /// `((row, column), digit)` pairs, in ascending coordinate order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), usize)> + '_ {
        self.digits.iter()
            .map(|(&coordinate, &number)| (coordinate, number))
    }

    /// Renders this answer key in the wire shape consumed by the web
    /// layer's form comparison: each entry becomes a mapping from the
    /// position token `"{row}{col}"` to the removed digit as a string.
    pub fn token_map(&self) -> BTreeMap<String, String> {
        self.digits.iter()
            .map(|(&(row, column), &number)|
                (format!("{}{}", row, column), number.to_string()))
            .collect()
    }

    /// Re-inserts every recorded digit into the given grid. Filling a
    /// puzzle with its own answer key reconstructs the solved grid the
    /// puzzle was carved from.
    ///
    /// # Errors
    ///
    /// If a recorded entry does not fit the grid. Since answer keys built
    /// by a [Reducer] only contain in-range coordinates and digits, this
    /// can only happen for keys deserialized from foreign data.
    pub fn fill_into(&self, grid: &mut SudokuGrid) -> SudokuResult<()> {
        for (&(row, column), &number) in self.digits.iter() {
            grid.set_cell(row, column, number)?;
        }

        Ok(())
    }
}

impl From<AnswerKey> for BTreeMap<String, String> {
    fn from(answer_key: AnswerKey) -> BTreeMap<String, String> {
        answer_key.token_map()
    }
}

fn parse_position_char(c: Option<char>) -> Result<usize, SudokuParseError> {
    match c.and_then(|c| c.to_digit(10)) {
        Some(digit) if (digit as usize) < GRID_SIZE => Ok(digit as usize),
        _ => Err(SudokuParseError::NumberFormatError)
    }
}

impl TryFrom<BTreeMap<String, String>> for AnswerKey {
    type Error = SudokuParseError;

    fn try_from(tokens: BTreeMap<String, String>)
            -> Result<AnswerKey, SudokuParseError> {
        let mut answer_key = AnswerKey::new();

        for (token, digit) in tokens {
            let mut chars = token.chars();
            let row = parse_position_char(chars.next())?;
            let column = parse_position_char(chars.next())?;

            if chars.next().is_some() {
                return Err(SudokuParseError::NumberFormatError);
            }

            let number = digit.parse::<usize>()?;

            if number == 0 || number > GRID_SIZE {
                return Err(SudokuParseError::InvalidNumber);
            }

            answer_key.record(row, column, number);
        }

        Ok(answer_key)
    }
}

/// A playable puzzle as produced by a [Reducer]: a grid with blanked cells
/// together with the [AnswerKey] recording the removed digits.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Puzzle {
    grid: SudokuGrid,
    answer_key: AnswerKey
}

impl Puzzle {

    /// Gets a reference to the puzzle grid, i.e. the solved grid with the
    /// blanked cells cleared.
    pub fn grid(&self) -> &SudokuGrid {
        &self.grid
    }

    /// Gets a reference to the answer key recording the digit that was
    /// removed at every blanked cell.
    pub fn answer_key(&self) -> &AnswerKey {
        &self.answer_key
    }

    /// Decomposes this puzzle into its grid and its answer key.
    pub fn into_parts(self) -> (SudokuGrid, AnswerKey) {
        (self.grid, self.answer_key)
    }
}

/// A reducer carves a playable [Puzzle] out of the solved grid produced by
/// a [Generator]. It repeatedly draws a random cell and blanks it if doing
/// so cannot admit a second completion at that cell, until [TARGET_BLANKS]
/// cells are blank. A cell qualifies for blanking only if no digit other
/// than its current one also yields a solvable grid when substituted at its
/// position, which the wrapped [Solver] is probed for.
///
/// Note that this is a local, single-cell criterion: it does not prove that
/// the puzzle as a whole has a unique solution once several removals
/// interact.
///
/// [Reducer::new_default] yields a reducer with a [BacktrackingSolver] and
/// a [ThreadRng].
pub struct Reducer<S: Solver, R: Rng> {
    solver: S,
    rng: R
}

impl Reducer<BacktrackingSolver, ThreadRng> {

    /// Creates a new reducer with a [BacktrackingSolver] to probe
    /// solvability and a [ThreadRng] to decide which cells are blanked.
    pub fn new_default() -> Reducer<BacktrackingSolver, ThreadRng> {
        Reducer::new(BacktrackingSolver::new(), rand::thread_rng())
    }
}

impl<S: Solver, R: Rng> Reducer<S, R> {

    /// Creates a new reducer with the given solver and random number
    /// generator.
    ///
    /// # Arguments
    ///
    /// * `solver`: A [Solver] to be probed with alternate digits to check
    /// whether a cell can be blanked without admitting a second completion
    /// at its position.
    /// * `rng`: A random number generator that decides which cells are
    /// blanked.
    pub fn new(solver: S, rng: R) -> Reducer<S, R> {
        Reducer {
            solver,
            rng
        }
    }

    /// Carves a puzzle out of the given solved grid by blanking
    /// [TARGET_BLANKS] cells. The input grid is not modified; the puzzle
    /// owns an independent grid. The original digit of every blanked cell
    /// is recorded in the returned [AnswerKey].
    ///
    /// Cells are drawn uniformly at random from a pool of eligible
    /// coordinates. A drawn cell is blanked only if it is removable, i.e.
    /// no other digit at its position leads to a solvable grid; its
    /// coordinate leaves the pool only in that case, so unsuccessful draws
    /// may be retried later.
    ///
    /// # Errors
    ///
    /// * `SudokuError::InvalidGrid` If the given grid is not a valid
    /// solution.
    /// * `SudokuError::GenerationExhausted` If no removable cell is found
    /// within a bounded number of draws. Callers should retry with a fresh
    /// grid from a [Generator] rather than treat this as fatal.
    pub fn reduce(&mut self, solution: &SudokuGrid) -> SudokuResult<Puzzle> {
        if !solution.is_valid() {
            return Err(SudokuError::InvalidGrid);
        }

        let mut grid = solution.clone();
        let mut answer_key = AnswerKey::new();
        let mut pool: Vec<(usize, usize)> = (0..GRID_SIZE)
            .flat_map(|row| (0..GRID_SIZE)
                .map(move |column| (row, column)))
            .collect();
        let mut remaining = TARGET_BLANKS;
        let mut failed_draws = 0;

        while remaining > 0 {
            if failed_draws == MAX_FAILED_DRAWS {
                return Err(SudokuError::GenerationExhausted);
            }

            let pool_index = self.rng.gen_range(0..pool.len());
            let (row, column) = pool[pool_index];
            let number = match grid.get_cell(row, column).unwrap() {
                Some(number) => number,
                None => {
                    // A cell that is already blank stays in the pool; only
                    // a successful blank removes its coordinate.
                    failed_draws += 1;
                    continue;
                }
            };

            if self.cell_removable(&grid, row, column, number) {
                grid.clear_cell(row, column).unwrap();
                answer_key.record(row, column, number);
                pool.swap_remove(pool_index);
                remaining -= 1;
            }
            else {
                failed_draws += 1;
            }
        }

        Ok(Puzzle {
            grid,
            answer_key
        })
    }

    /// Indicates whether the cell at `(row, column)` can be blanked without
    /// admitting a second completion at its position. For every digit other
    /// than the cell's current `number`, the digit is substituted into an
    /// isolated scratch copy of the grid; if any such grid is solvable, the
    /// cell is not removable.
    fn cell_removable(&self, grid: &SudokuGrid, row: usize, column: usize,
            number: usize) -> bool {
        for alternate in 1..=GRID_SIZE {
            if alternate == number {
                continue;
            }

            let mut scratch = grid.clone();
            scratch.set_cell(row, column, alternate).unwrap();

            if self.solver.is_solvable(&scratch) {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::solver::Solution;

    fn example_answer_key() -> AnswerKey {
        let mut answer_key = AnswerKey::new();
        answer_key.record(0, 4, 5);
        answer_key.record(3, 0, 2);
        answer_key.record(8, 8, 8);
        answer_key
    }

    #[test]
    fn answer_key_lookup() {
        let answer_key = example_answer_key();

        assert_eq!(3, answer_key.len());
        assert!(!answer_key.is_empty());
        assert_eq!(Some(5), answer_key.get(0, 4));
        assert_eq!(Some(2), answer_key.get(3, 0));
        assert_eq!(None, answer_key.get(1, 1));

        let entries: Vec<((usize, usize), usize)> = answer_key.iter()
            .collect();
        assert_eq!(vec![((0, 4), 5), ((3, 0), 2), ((8, 8), 8)], entries);
    }

    #[test]
    fn answer_key_token_format() {
        let tokens = example_answer_key().token_map();

        assert_eq!(3, tokens.len());
        assert_eq!(Some(&String::from("5")), tokens.get("04"));
        assert_eq!(Some(&String::from("2")), tokens.get("30"));
        assert_eq!(Some(&String::from("8")), tokens.get("88"));
    }

    #[test]
    fn answer_key_fill_into_restores_digits() {
        let mut grid = SudokuGrid::canonical();
        grid.clear_cell(0, 4).unwrap();
        grid.clear_cell(3, 0).unwrap();
        grid.clear_cell(8, 8).unwrap();

        example_answer_key().fill_into(&mut grid).unwrap();

        assert_eq!(SudokuGrid::canonical(), grid);
    }

    #[test]
    fn answer_key_serde_wire_shape() {
        let json = serde_json::to_string(&example_answer_key()).unwrap();

        assert_eq!("{\"04\":\"5\",\"30\":\"2\",\"88\":\"8\"}", json);

        let deserialized: AnswerKey = serde_json::from_str(&json).unwrap();
        assert_eq!(example_answer_key(), deserialized);
    }

    #[test]
    fn answer_key_serde_rejects_bad_token() {
        let result =
            serde_json::from_str::<AnswerKey>("{\"9x\":\"5\"}");
        assert!(result.is_err());

        let result =
            serde_json::from_str::<AnswerKey>("{\"00\":\"0\"}");
        assert!(result.is_err());
    }

    #[test]
    fn generated_grid_valid() {
        let mut generator = Generator::new_default();
        let grid = generator.generate().unwrap();

        assert!(grid.is_valid(), "Generated grid not valid.");
        assert!(grid.is_full(), "Generated grid not full.");
    }

    #[test]
    fn reduced_puzzle_consistent() {
        let mut generator = Generator::new_default();
        let mut reducer = Reducer::new_default();
        let solution = generator.generate().unwrap();
        let puzzle = reducer.reduce(&solution).unwrap();

        assert_eq!(TARGET_BLANKS, puzzle.grid().blank_positions().len(),
            "Reduced puzzle has wrong number of blanks.");
        assert_eq!(TARGET_BLANKS, puzzle.answer_key().len(),
            "Answer key has wrong number of entries.");
        assert!(puzzle.grid().is_subset(&solution),
            "Reduced puzzle contradicts its solution.");

        for (row, column) in puzzle.grid().blank_positions() {
            let expected = solution.get_cell(row, column).unwrap();
            assert_eq!(expected, puzzle.answer_key().get(row, column),
                "Answer key disagrees with the solution.");
        }

        let mut restored = puzzle.grid().clone();
        puzzle.answer_key().fill_into(&mut restored).unwrap();
        assert_eq!(solution, restored,
            "Answer key does not restore the solution.");
    }

    #[test]
    fn reduced_puzzle_solvable() {
        let mut generator = Generator::new_default();
        let mut reducer = Reducer::new_default();
        let solution = generator.generate().unwrap();
        let puzzle = reducer.reduce(&solution).unwrap();
        let solver = BacktrackingSolver::new();

        if let Solution::Solved(_) = solver.solve(puzzle.grid()) { }
        else {
            panic!("Reduced puzzle not solvable.");
        }
    }

    #[test]
    fn reduce_rejects_invalid_solution() {
        let mut reducer = Reducer::new_default();
        let mut broken = SudokuGrid::canonical();
        broken.set_cell(0, 0, 2).unwrap();

        assert_eq!(Err(SudokuError::InvalidGrid), reducer.reduce(&broken));
    }

    #[test]
    fn reduce_rejects_partial_grid() {
        let mut reducer = Reducer::new_default();
        let mut partial = SudokuGrid::canonical();
        partial.clear_cell(4, 4).unwrap();

        assert_eq!(Err(SudokuError::InvalidGrid), reducer.reduce(&partial));
    }

    /// A solver that reports every grid as solvable, so no cell is ever
    /// removable and the reducer must run into its draw bound.
    struct AlwaysSolvedSolver;

    impl Solver for AlwaysSolvedSolver {
        fn solve(&self, grid: &SudokuGrid) -> Solution {
            Solution::Solved(grid.clone())
        }
    }

    #[test]
    fn reduce_reports_exhaustion() {
        let mut reducer =
            Reducer::new(AlwaysSolvedSolver, rand::thread_rng());
        let solution = SudokuGrid::canonical();

        assert_eq!(Err(SudokuError::GenerationExhausted),
            reducer.reduce(&solution));
    }
}
