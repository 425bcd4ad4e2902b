use crate::Grid;
use thiserror::Error;

/// Terminal result of a search over a grid with no legal completion.
///
/// Not an error in the crash sense: callers handing the solver an
/// over-constrained grid get this back instead of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("grid has no legal completion")]
pub struct Unsolvable;

/// Depth-first backtracking Sudoku solver.
///
/// The search order is fixed: empty cells are visited in row-major order and
/// digits are tried in ascending order, so the same input always produces the
/// same completion. A partial grid admitting several completions yields the
/// first one found under that order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver;

impl Solver {
    pub fn new() -> Self {
        Self
    }

    /// Solve the puzzle, returning the completed grid.
    ///
    /// The input grid is left untouched; every branch of the search works on
    /// its own copy, so no caller ever observes a half-filled attempt.
    pub fn solve(&self, grid: &Grid) -> Result<Grid, Unsolvable> {
        let mut working = *grid;
        if self.solve_recursive(&mut working) {
            Ok(working)
        } else {
            Err(Unsolvable)
        }
    }

    /// Count completions of `grid`, stopping once `limit` is reached
    pub fn count_solutions(&self, grid: &Grid, limit: usize) -> usize {
        let mut working = *grid;
        let mut count = 0;
        self.count_recursive(&mut working, &mut count, limit);
        count
    }

    /// Whether the puzzle has exactly one completion
    pub fn has_unique_solution(&self, grid: &Grid) -> bool {
        self.count_solutions(grid, 2) == 1
    }

    fn solve_recursive(&self, grid: &mut Grid) -> bool {
        let pos = match grid.first_empty() {
            Some(pos) => pos,
            // No empty cell left: the grid is the solution.
            None => return true,
        };

        for digit in 1..=9 {
            let mut attempt = *grid;
            attempt.set(pos, Some(digit));
            if attempt.is_legal() && self.solve_recursive(&mut attempt) {
                *grid = attempt;
                return true;
            }
        }

        false
    }

    fn count_recursive(&self, grid: &mut Grid, count: &mut usize, limit: usize) {
        if *count >= limit {
            return;
        }

        let pos = match grid.first_empty() {
            Some(pos) => pos,
            None => {
                *count += 1;
                return;
            }
        };

        for digit in 1..=9 {
            if *count >= limit {
                return;
            }
            let mut attempt = *grid;
            attempt.set(pos, Some(digit));
            if attempt.is_legal() {
                self.count_recursive(&mut attempt, count, limit);
            }
        }
    }
}
