// UI layer: the interactive `play`, `add` and `list` flows.
// Every flow writes to a caller-supplied `Write` and reads answers through
// a `Prompter`, so the same code serves the real terminal and the tests.

use crate::quiz::{answers_match, Game, Score};
use crate::store::{NewQuote, Quote, QuoteStore};
use anyhow::{bail, Context, Result};
use crossterm::style::{StyledContent, Stylize};
use dialoguer::Input;
use rand::Rng;
use std::io::{BufRead, Write};

/// Source of free-text answers.
pub trait Prompter {
    /// Show `label` and return the line the user typed (empty allowed).
    fn ask(&mut self, label: &str) -> Result<String>;
}

/// Prompts on the terminal with `dialoguer`.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, label: &str) -> Result<String> {
        // `allow_empty` lets the user press Enter to skip a field.
        let answer: String = Input::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }
}

/// Line-oriented prompter for piped stdin and for tests.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        LinePrompter { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line).context("Reading answer")? == 0 {
            bail!("unexpected end of input while waiting for '{}'", label);
        }
        Ok(line.trim_end_matches(&['\n', '\r'][..]).to_string())
    }
}

/// Run a quiz session over the stored quotes.
///
/// Returns `None` when there is nothing to play with; otherwise the final
/// score. `rounds <= 0` plays no rounds and reports `0/0`. Feedback is
/// coloured only when `styled` is set, i.e. when `out` is a terminal.
pub fn play<R: Rng>(
    store: &QuoteStore,
    game: &mut Game<R>,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
    rounds: i64,
    styled: bool,
) -> Result<Option<Score>> {
    let quotes = store.load()?;
    if quotes.is_empty() {
        writeln!(out, "❌ No quotes found in the database. Add some with the 'add' command first!")?;
        return Ok(None);
    }

    writeln!(out, "--- 🏛️ Welcome to the Latin Quote Quiz! ---")?;
    let session = game.plan(&quotes, rounds);
    let mut score = Score { correct: 0, total: session.len() };

    for (i, round) in session.iter().enumerate() {
        writeln!(out, "\n--- Round {} of {} ---", i + 1, score.total)?;
        writeln!(out, "{}\n", round.mode.question())?;
        writeln!(out, "> {}", round.quote.latin_text.as_deref().unwrap_or(""))?;
        writeln!(out)?;
        out.flush()?;

        let answer = prompter.ask("Your answer")?;
        let expected = round.expected();
        if answers_match(&answer, expected) {
            writeln!(
                out,
                "{} The answer is: {}",
                paint("✅ Correct!", styled, |t| t.green()),
                expected
            )?;
            score.correct += 1;
        } else {
            writeln!(
                out,
                "{} The correct answer was: {}",
                paint("❌ Incorrect.", styled, |t| t.red()),
                expected
            )?;
        }
    }

    writeln!(out, "\n--- 🏆 Game Over! ---")?;
    writeln!(out, "Your final score: {}", paint(&score.to_string(), styled, |t| t.bold()))?;
    Ok(Some(score))
}

fn paint(text: &str, styled: bool, style: impl FnOnce(&str) -> StyledContent<&str>) -> String {
    if styled {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

/// Collect the fields of a new quote and store it with the next id.
pub fn add(store: &QuoteStore, prompter: &mut dyn Prompter, out: &mut dyn Write) -> Result<Quote> {
    writeln!(out, "--- ✍️ Add a New Latin Quote ---")?;
    writeln!(out, "Please provide the following details (press Enter to skip a field).")?;
    out.flush()?;

    let new_quote = NewQuote {
        latin_text: prompter.ask("Latin Text")?,
        english_translation: prompter.ask("English Translation")?,
        author: prompter.ask("Author")?,
        work: prompter.ask("Work")?,
        notes: prompter.ask("Notes (optional)")?,
    };

    let quote = store.add(new_quote)?;
    writeln!(out, "\n✨ Quote added successfully with ID: {}", quote.id)?;
    Ok(quote)
}

/// Print every stored quote. Missing fields show as `N/A`; the notes line
/// only appears when there are notes.
pub fn list(store: &QuoteStore, out: &mut dyn Write) -> Result<()> {
    let quotes = store.load()?;
    if quotes.is_empty() {
        writeln!(out, "📚 The database is empty.")?;
        return Ok(());
    }

    writeln!(out, "--- 📖 All Quotes in Database ---")?;
    for quote in &quotes {
        let or_na = |field: &Option<String>| field.clone().unwrap_or_else(|| "N/A".into());
        writeln!(out, "\nID: {}", quote.id)?;
        writeln!(out, "  Latin: {}", or_na(&quote.latin_text))?;
        writeln!(out, "  English: {}", or_na(&quote.english_translation))?;
        writeln!(out, "  Author: {}", or_na(&quote.author))?;
        writeln!(out, "  Work: {}", or_na(&quote.work))?;
        if let Some(notes) = quote.notes.as_deref().filter(|n| !n.is_empty()) {
            writeln!(out, "  Notes: {}", notes)?;
        }
    }
    writeln!(out, "------------------------------")?;
    Ok(())
}
