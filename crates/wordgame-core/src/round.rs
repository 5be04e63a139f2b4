//! Round state: counters, termination rules and the events a front-end reacts to.
//!
//! A front-end calls [`Round::start`], shows each [`RoundEvent::Prompt`],
//! and feeds back either [`Round::answer`] or [`Round::time_out`] until a
//! [`RoundEvent::GameOver`] comes back. Nothing here keeps time; the
//! countdown belongs to the caller.

use serde::{Deserialize, Serialize};

use crate::engine::GameEngine;
use crate::model::WordPair;

/// Limits for a single round.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundConfig {
    /// Total prompts before the round ends.
    #[serde(default = "default_max_prompts")]
    pub max_prompts: u32,
    /// Wrong answers (including timeouts) before the round ends early.
    #[serde(default = "default_max_wrong")]
    pub max_wrong: u32,
    /// Seconds the player has for each prompt.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_max_prompts() -> u32 {
    15
}

fn default_max_wrong() -> u32 {
    3
}

fn default_timeout_secs() -> u64 {
    5
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            max_prompts: default_max_prompts(),
            max_wrong: default_max_wrong(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Why a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    TooManyWrong,
    PromptLimit,
}

/// Final tally of a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub correct: u32,
    pub wrong: u32,
    pub attempts: u32,
    pub max_prompts: u32,
    /// Percentage of `max_prompts` answered correctly.
    pub score: u32,
    /// `None` while the round is still running.
    pub reason: Option<EndReason>,
}

/// What the front-end should do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    /// Show this pair and wait for a judgment.
    Prompt(WordPair),
    /// The round is over.
    GameOver(RoundSummary),
    /// The engine has nothing to ask.
    NoWordPairs,
    /// The player asked to leave; the host decides what that means.
    Quit,
}

/// One judged attempt and the event that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub pair: WordPair,
    pub user_selection: bool,
    /// Whether the player judged the pair correctly.
    pub judged_correct: bool,
    pub next: RoundEvent,
}

/// A round driven against a [`GameEngine`].
#[derive(Debug)]
pub struct Round {
    engine: GameEngine,
    config: RoundConfig,
    correct: u32,
    wrong: u32,
    current: Option<WordPair>,
}

impl Round {
    /// Zero limits are raised to 1; a round always allows one prompt.
    pub fn new(engine: GameEngine, mut config: RoundConfig) -> Self {
        if config.max_prompts == 0 || config.max_wrong == 0 {
            tracing::warn!(
                "round limits must be at least 1 (max_prompts = {}, max_wrong = {}); clamping",
                config.max_prompts,
                config.max_wrong
            );
            config.max_prompts = config.max_prompts.max(1);
            config.max_wrong = config.max_wrong.max(1);
        }
        Self {
            engine,
            config,
            correct: 0,
            wrong: 0,
            current: None,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn wrong(&self) -> u32 {
        self.wrong
    }

    pub fn attempts(&self) -> u32 {
        self.correct + self.wrong
    }

    /// The prompt awaiting a judgment, if any.
    pub fn current(&self) -> Option<&WordPair> {
        self.current.as_ref()
    }

    /// Begin the round with the first prompt.
    pub fn start(&mut self) -> RoundEvent {
        self.current = None;
        self.advance()
    }

    /// Reset the counters and begin again.
    pub fn restart(&mut self) -> RoundEvent {
        self.correct = 0;
        self.wrong = 0;
        self.current = None;
        self.advance()
    }

    /// Judge the player's answer to the current prompt.
    ///
    /// `user_selection` is `true` when the player claims the pair is a
    /// correct translation. Returns `None` when no prompt is active.
    pub fn answer(&mut self, user_selection: bool) -> Option<Attempt> {
        let pair = self.current.take()?;
        let judged_correct = self.engine.evaluate(&pair, user_selection);
        if judged_correct {
            self.correct += 1;
        } else {
            self.wrong += 1;
        }
        tracing::debug!(
            "attempt {}: '{}' answered {} -> {}",
            self.attempts(),
            pair,
            user_selection,
            if judged_correct { "right" } else { "wrong" }
        );
        let next = self.advance();
        Some(Attempt {
            pair,
            user_selection,
            judged_correct,
            next,
        })
    }

    /// The countdown for the current prompt ran out; counts as wrong.
    ///
    /// Returns `None` when no prompt is active.
    pub fn time_out(&mut self) -> Option<RoundEvent> {
        let pair = self.current.take()?;
        self.wrong += 1;
        tracing::debug!("attempt {}: '{}' timed out", self.attempts(), pair);
        Some(self.advance())
    }

    /// Leave the round. The active prompt, if any, is dropped unanswered.
    pub fn quit(&mut self) -> RoundEvent {
        self.current = None;
        RoundEvent::Quit
    }

    pub fn should_end(&self) -> bool {
        self.end_reason().is_some()
    }

    /// The limit that ended the round, if one has been hit.
    pub fn end_reason(&self) -> Option<EndReason> {
        if self.wrong >= self.config.max_wrong {
            Some(EndReason::TooManyWrong)
        } else if self.attempts() >= self.config.max_prompts {
            Some(EndReason::PromptLimit)
        } else {
            None
        }
    }

    /// Current tally, scored against `max_prompts`.
    ///
    /// Can be taken mid-round; `reason` stays `None` until a limit is hit.
    pub fn summary(&self) -> RoundSummary {
        RoundSummary {
            correct: self.correct,
            wrong: self.wrong,
            attempts: self.attempts(),
            max_prompts: self.config.max_prompts,
            score: self
                .engine
                .calc_final_score(self.correct, self.config.max_prompts),
            reason: self.end_reason(),
        }
    }

    fn advance(&mut self) -> RoundEvent {
        if self.should_end() {
            let summary = self.summary();
            tracing::info!(
                "round over ({:?}): {} right, {} wrong, score {}%",
                summary.reason,
                summary.correct,
                summary.wrong,
                summary.score
            );
            RoundEvent::GameOver(summary)
        } else {
            self.next_prompt()
        }
    }

    fn next_prompt(&mut self) -> RoundEvent {
        match self.engine.fetch_next_word_pair() {
            Some(pair) => {
                self.current = Some(pair.clone());
                RoundEvent::Prompt(pair)
            }
            None => RoundEvent::NoWordPairs,
        }
    }
}
