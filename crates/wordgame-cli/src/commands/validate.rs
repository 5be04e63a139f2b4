//! The `wordgame validate` command.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use wordgame_core::store::{parse_word_pairs_file, validate_word_pairs};

pub fn execute(dataset_path: PathBuf) -> Result<()> {
    let paths = if dataset_path.is_dir() {
        dataset_files(&dataset_path)?
    } else {
        vec![dataset_path]
    };

    let mut total_warnings = 0;

    for path in &paths {
        let pairs = parse_word_pairs_file(path)?;
        let unique: HashSet<_> = pairs.iter().collect();
        println!(
            "Dataset: {} ({} pairs, {} unique)",
            path.display(),
            pairs.len(),
            unique.len()
        );

        let warnings = validate_word_pairs(&pairs);
        for w in &warnings {
            let prefix = w
                .index
                .map(|i| format!("  [#{i}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All datasets valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}

/// All `.json` files directly inside `dir`, sorted by name.
fn dataset_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    anyhow::ensure!(!files.is_empty(), "no .json datasets in {}", dir.display());
    files.sort();
    Ok(files)
}
