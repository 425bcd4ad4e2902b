use crate::{Grid, Position, Solver, SIZE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Difficulty level of a puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Number of cells blanked out of the 81-cell solution at this level
    pub fn blank_target(&self) -> usize {
        match self {
            Difficulty::Easy => 30,
            Difficulty::Medium => 40,
            Difficulty::Hard => 50,
        }
    }

    /// All difficulty levels, easiest first
    pub fn all_levels() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty {0:?}")]
pub struct ParseDifficultyError(String);

impl std::str::FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

/// Configuration for puzzle generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Difficulty recorded on the produced puzzle
    pub difficulty: Difficulty,
    /// Number of cells to blank out (clamped to the 81 cells available)
    pub blanks: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::medium()
    }
}

impl GeneratorConfig {
    pub fn easy() -> Self {
        Self::for_difficulty(Difficulty::Easy)
    }

    pub fn medium() -> Self {
        Self::for_difficulty(Difficulty::Medium)
    }

    pub fn hard() -> Self {
        Self::for_difficulty(Difficulty::Hard)
    }

    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            blanks: difficulty.blank_target(),
        }
    }
}

/// A generated puzzle together with the solution it was carved from.
///
/// The puzzle grid is a subset of the solution grid: every filled puzzle cell
/// matches the corresponding solution cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    /// The player-facing grid with cells blanked out
    pub puzzle: Grid,
    /// The full legal grid the puzzle was derived from
    pub solution: Grid,
    /// Difficulty the puzzle was generated at
    pub difficulty: Difficulty,
}

/// Sudoku puzzle generator
pub struct Generator {
    rng: SimpleRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a generator seeded from system entropy
    pub fn new() -> Self {
        Self {
            rng: SimpleRng::new(),
        }
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SimpleRng::with_seed(seed),
        }
    }

    /// Generate a puzzle at the given difficulty
    pub fn generate(&mut self, difficulty: Difficulty) -> Puzzle {
        self.generate_with_config(&GeneratorConfig::for_difficulty(difficulty))
    }

    /// Generate a puzzle with an explicit configuration
    pub fn generate_with_config(&mut self, config: &GeneratorConfig) -> Puzzle {
        let solution = self.generate_solution();
        let blanks = config.blanks.min(SIZE * SIZE);
        let puzzle = self.remove_cells(&solution, blanks);
        Puzzle {
            puzzle,
            solution,
            difficulty: config.difficulty,
        }
    }

    /// Produce a fully filled legal grid
    fn generate_solution(&mut self) -> Grid {
        let solver = Solver::new();
        loop {
            let seeded = self.seed_diagonal_boxes();
            // Diagonal seeding always leaves a completable grid; reseed on
            // the unreachable failure branch rather than panic.
            if let Ok(solution) = solver.solve(&seeded) {
                return solution;
            }
        }
    }

    /// Fill the three diagonal boxes with random digits, leaving the rest
    /// empty.
    ///
    /// The diagonal boxes share no row, column, or box, so each is filled
    /// independently: draw digits 1-9 uniformly, redrawing any digit already
    /// placed in the same box.
    fn seed_diagonal_boxes(&mut self) -> Grid {
        let mut grid = Grid::empty();
        for box_index in [0, 4, 8] {
            let mut used = [false; 10];
            for offset in 0..SIZE {
                let digit = loop {
                    let candidate = self.rng.next_digit();
                    if !used[candidate as usize] {
                        break candidate;
                    }
                };
                used[digit as usize] = true;
                grid.set(Position::from_box(box_index, offset), Some(digit));
            }
        }
        grid
    }

    /// Blank random cells of `solution` until exactly `blanks` cells are
    /// empty. Re-selecting an already blank cell is a no-op retry.
    fn remove_cells(&mut self, solution: &Grid, blanks: usize) -> Grid {
        let mut puzzle = *solution;
        while puzzle.empty_count() < blanks {
            let pos = Position::new(self.rng.next_index(SIZE), self.rng.next_index(SIZE));
            puzzle.set(pos, None);
        }
        puzzle
    }
}

/// Small PCG-style PRNG, wasm-friendly: seeded through `getrandom` rather
/// than a process-global source.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new() -> Self {
        let mut seed_bytes = [0u8; 8];
        getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
            // Fallback: a static counter if getrandom fails
            static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
            let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            seed_bytes = counter.to_le_bytes();
        });
        Self::with_seed(u64::from_le_bytes(seed_bytes))
    }

    fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Uniform index in 0..bound
    fn next_index(&mut self, bound: usize) -> usize {
        (self.next_u32() as usize) % bound
    }

    /// Uniform digit in 1..=9
    fn next_digit(&mut self) -> u8 {
        self.next_index(9) as u8 + 1
    }
}
