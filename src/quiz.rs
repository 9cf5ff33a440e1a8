// Quiz engine: picks the quotes and question modes for a session and
// judges answers. It does no I/O; the `ui` module drives the prompts.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt;
use tracing::debug;

use crate::store::Quote;

/// Which field of a quote a round asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Translate,
    Author,
    Work,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Translate, Mode::Author, Mode::Work];

    pub fn question(self) -> &'static str {
        match self {
            Mode::Translate => "Translate this quote to English:",
            Mode::Author => "Who is the author of this quote?",
            Mode::Work => "What work is this quote from?",
        }
    }

    /// The expected answer for `quote`. A missing field expects an empty
    /// answer.
    pub fn expected(self, quote: &Quote) -> &str {
        let field = match self {
            Mode::Translate => &quote.english_translation,
            Mode::Author => &quote.author,
            Mode::Work => &quote.work,
        };
        field.as_deref().unwrap_or("")
    }
}

/// One planned question: the quote shown and the field asked for.
#[derive(Debug, Clone, Copy)]
pub struct Round<'a> {
    pub quote: &'a Quote,
    pub mode: Mode,
}

impl Round<'_> {
    pub fn expected(&self) -> &str {
        self.mode.expected(self.quote)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}

/// Number of rounds actually played: the request clamped to
/// `0..=available`.
pub fn round_count(requested: i64, available: usize) -> usize {
    usize::try_from(requested.max(0)).map_or(available, |r| r.min(available))
}

/// Trimmed, case-insensitive equality.
pub fn answers_match(given: &str, expected: &str) -> bool {
    given.trim().to_lowercase() == expected.trim().to_lowercase()
}

/// Holds the random source for a session so tests can inject a seeded one.
pub struct Game<R: Rng> {
    rng: R,
}

impl Game<StdRng> {
    /// Reproducible when `seed` is given, otherwise seeded from entropy.
    pub fn seeded(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Game::new(rng)
    }
}

impl<R: Rng> Game<R> {
    pub fn new(rng: R) -> Self {
        Game { rng }
    }

    /// Sample `round_count(rounds, quotes.len())` distinct quotes without
    /// replacement and give each a uniformly chosen mode.
    pub fn plan<'a>(&mut self, quotes: &'a [Quote], rounds: i64) -> Vec<Round<'a>> {
        let n = round_count(rounds, quotes.len());
        let picked: Vec<&Quote> = quotes.choose_multiple(&mut self.rng, n).collect();
        debug!(requested = rounds, rounds = n, "planned quiz session");
        picked
            .into_iter()
            .map(|quote| Round {
                quote,
                mode: Mode::ALL[self.rng.gen_range(0..Mode::ALL.len())],
            })
            .collect()
    }
}
