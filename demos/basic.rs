//! Basic example of using the Sudoku engine

use sudoku_engine::{CheckOutcome, Difficulty, Generator, Solver};

fn main() {
    // Generate a puzzle
    println!("Generating a Medium difficulty puzzle...\n");
    let mut generator = Generator::new();
    let generated = generator.generate(Difficulty::Medium);

    println!("Generated puzzle:");
    println!("{}", generated.puzzle);

    // Show some stats
    println!("Given cells: {}", generated.puzzle.filled_count());
    println!("Empty cells: {}", generated.puzzle.empty_count());

    // Solve it
    println!("\nSolving...\n");
    let solver = Solver::new();
    match solver.solve(&generated.puzzle) {
        Ok(completion) => {
            println!("Solver's completion:");
            println!("{}", completion);

            match sudoku_engine::classify(&completion, &generated.solution) {
                CheckOutcome::Correct => println!("Matches the stored solution."),
                CheckOutcome::IncorrectLegal => {
                    println!("A different, equally valid completion.")
                }
                outcome => println!("Unexpected outcome: {:?}", outcome),
            }
        }
        Err(err) => println!("No solution found: {} (this shouldn't happen!)", err),
    }
}
