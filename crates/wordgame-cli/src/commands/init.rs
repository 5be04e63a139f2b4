//! The `wordgame init` command.

use anyhow::Result;

use wordgame_core::store::EmbeddedStore;

pub fn execute() -> Result<()> {
    // Create wordgame.toml
    if std::path::Path::new("wordgame.toml").exists() {
        println!("wordgame.toml already exists, skipping.");
    } else {
        std::fs::write("wordgame.toml", SAMPLE_CONFIG)?;
        println!("Created wordgame.toml");
    }

    // Create the starter dataset
    std::fs::create_dir_all("datasets")?;
    let words_path = std::path::Path::new("datasets/words.json");
    if words_path.exists() {
        println!("datasets/words.json already exists, skipping.");
    } else {
        std::fs::write(words_path, EmbeddedStore::raw())?;
        println!("Created datasets/words.json");
    }

    println!("\nNext steps:");
    println!("  1. Add your own word pairs to datasets/words.json");
    println!("  2. Run: wordgame validate --dataset datasets/words.json");
    println!("  3. Run: wordgame play");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# wordgame configuration

data_dir = "datasets"
dataset = "words"

[round]
max_prompts = 15
max_wrong = 3
timeout_secs = 5

[engine]
# One prompt in this many shows a correct translation.
correct_prompt_odds = 4
# "independent" or "exclusive"
incorrect_strategy = "independent"
# seed = 42
"#;
