//! The `wordgame play` command.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use comfy_table::{Cell, Table};
use tokio::sync::mpsc;
use tokio::time::Instant;

use wordgame_core::config::load_config_from;
use wordgame_core::engine::{GameEngine, IncorrectPairStrategy};
use wordgame_core::model::WordPair;
use wordgame_core::round::{EndReason, Round, RoundEvent, RoundSummary};
use wordgame_core::store::{EmbeddedStore, JsonFileStore, StoreChain};

/// Flags accepted by `play`; each one overrides the config file.
pub struct PlayOptions {
    pub dataset: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub seed: Option<u64>,
    pub timeout: Option<u64>,
    pub max_prompts: Option<u32>,
    pub max_wrong: Option<u32>,
    pub exclusive: bool,
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Answer {
    Correct,
    Wrong,
    Quit,
}

fn parse_answer(line: &str) -> Option<Answer> {
    match line.trim().to_lowercase().as_str() {
        "y" | "yes" | "c" | "correct" => Some(Answer::Correct),
        "n" | "no" | "w" | "wrong" => Some(Answer::Wrong),
        "q" | "quit" | "exit" => Some(Answer::Quit),
        _ => None,
    }
}

pub async fn execute(opts: PlayOptions) -> Result<()> {
    let mut config = load_config_from(opts.config.as_deref())?;

    if let Some(dataset) = opts.dataset {
        config.dataset = dataset;
    }
    if let Some(dir) = opts.data_dir {
        config.data_dir = dir;
    }
    if let Some(seed) = opts.seed {
        config.engine.seed = Some(seed);
    }
    if let Some(timeout) = opts.timeout {
        config.round.timeout_secs = timeout;
    }
    if let Some(max_prompts) = opts.max_prompts {
        config.round.max_prompts = max_prompts;
    }
    if let Some(max_wrong) = opts.max_wrong {
        config.round.max_wrong = max_wrong;
    }
    if opts.exclusive {
        config.engine.incorrect_strategy = IncorrectPairStrategy::Exclusive;
    }

    anyhow::ensure!(config.round.max_prompts >= 1, "max prompts must be at least 1");
    anyhow::ensure!(config.round.max_wrong >= 1, "max wrong must be at least 1");
    anyhow::ensure!(config.round.timeout_secs >= 1, "timeout must be at least 1 second");

    let store = StoreChain::new()
        .with(JsonFileStore::new(&config.data_dir))
        .with(EmbeddedStore);
    let engine = GameEngine::with_config(&config.dataset, &store, config.engine.clone());
    tracing::info!(
        "playing '{}' with {} word pairs",
        engine.source(),
        engine.len()
    );

    let timeout = Duration::from_secs(config.round.timeout_secs);
    let mut round = Round::new(engine, config.round.clone());
    let mut answers = spawn_line_reader();

    println!(
        "wordgame: {} prompts, {} wrong answers allowed, {}s per prompt",
        config.round.max_prompts, config.round.max_wrong, config.round.timeout_secs
    );
    println!("Answer 'y' if the translation is correct, 'n' if it isn't, 'q' to quit.\n");

    let mut event = round.start();
    loop {
        event = match event {
            RoundEvent::Prompt(pair) => {
                print_prompt(&pair, round.attempts() + 1, config.round.max_prompts, timeout);
                let deadline = Instant::now() + timeout;
                loop {
                    match tokio::time::timeout_at(deadline, answers.recv()).await {
                        Err(_) => {
                            println!("Time's up!");
                            let next = round.time_out().unwrap_or(RoundEvent::Quit);
                            print_counters(&round);
                            break next;
                        }
                        // stdin closed
                        Ok(None) => break round.quit(),
                        Ok(Some(line)) => match parse_answer(&line) {
                            Some(Answer::Correct) => break judge(&mut round, true),
                            Some(Answer::Wrong) => break judge(&mut round, false),
                            Some(Answer::Quit) => break round.quit(),
                            None => println!("Please answer y, n or q."),
                        },
                    }
                }
            }
            RoundEvent::GameOver(summary) => {
                print_summary(&summary, opts.json)?;
                println!("\n[r] play again  [q] quit");
                match answers.recv().await {
                    Some(line) if line.trim().eq_ignore_ascii_case("r") => round.restart(),
                    _ => round.quit(),
                }
            }
            RoundEvent::NoWordPairs => {
                anyhow::bail!(
                    "no word pairs available for dataset '{}' (data dir: {})",
                    config.dataset,
                    config.data_dir.display()
                );
            }
            RoundEvent::Quit => {
                println!("Bye!");
                return Ok(());
            }
        };
    }
}

/// Forward stdin lines over a channel so prompts can wait with a deadline.
///
/// A plain thread, not a tokio task: a blocking stdin read can't be
/// cancelled and must not hold up runtime shutdown.
fn spawn_line_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(16);
    std::thread::spawn(move || {
        for line in std::io::stdin().lines() {
            let Ok(line) = line else { break };
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn judge(round: &mut Round, user_selection: bool) -> RoundEvent {
    let Some(attempt) = round.answer(user_selection) else {
        return round.quit();
    };
    if attempt.judged_correct {
        println!("Right!");
    } else if round.engine().is_correct(&attempt.pair) {
        println!("Wrong! That was the correct translation.");
    } else {
        println!("Wrong! That was not the correct translation.");
    }
    print_counters(round);
    attempt.next
}

fn print_prompt(pair: &WordPair, number: u32, max_prompts: u32, timeout: Duration) {
    println!("[{number}/{max_prompts}] {}", pair.english_text);
    println!("        {}", pair.spanish_text);
    print!("Correct translation? (y/n, {}s) > ", timeout.as_secs());
    let _ = std::io::stdout().flush();
}

fn print_counters(round: &Round) {
    println!(
        "Correct attempts: {}  Wrong attempts: {}\n",
        round.correct(),
        round.wrong()
    );
}

fn print_summary(summary: &RoundSummary, json: bool) -> Result<()> {
    match summary.reason {
        Some(reason) => println!("\nGame over: {}", describe(reason)),
        None => println!("\nGame over"),
    }
    println!("Score: {}%", summary.score);

    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Correct", "Wrong", "Attempts", "Max prompts", "Score"]);
    table.add_row(vec![
        Cell::new(summary.correct),
        Cell::new(summary.wrong),
        Cell::new(summary.attempts),
        Cell::new(summary.max_prompts),
        Cell::new(format!("{}%", summary.score)),
    ]);
    println!("{table}");
    Ok(())
}

fn describe(reason: EndReason) -> &'static str {
    match reason {
        EndReason::TooManyWrong => "too many wrong answers",
        EndReason::PromptLimit => "all prompts answered",
    }
}
