//! The `wordgame score` command.

use anyhow::Result;

use wordgame_core::engine::final_score;

pub fn execute(correct: u32, max: u32) -> Result<()> {
    if correct > max {
        eprintln!("Warning: {correct} correct attempts exceeds the maximum of {max}.");
    }
    println!("{}%", final_score(correct, max));
    Ok(())
}
