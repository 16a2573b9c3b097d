//! Command line arguments.

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use letterpool::LetterPool;

/// Inspect and edit which letters of a word game are shown to the player
#[derive(Parser, Debug, Clone)]
#[command(name = "letterpool")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Letters to hide, e.g. "CF"
    #[arg(long, value_name = "LETTERS")]
    pub hide: Option<String>,

    /// Letters to reveal again after hiding
    #[arg(long, value_name = "LETTERS")]
    pub reveal: Option<String>,

    /// Print whether a single letter is visible
    #[arg(long, value_name = "LETTER")]
    pub query: Option<char>,

    /// Print the visible and hidden letters instead of the JSON dump
    #[arg(short, long)]
    pub list: bool,

    /// Edit the pool interactively before printing it
    #[arg(long)]
    pub tui: bool,

    /// Verbosity level (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Letters to hide, upper cased
    pub fn to_hide(&self) -> impl Iterator<Item = char> + '_ {
        upper(self.hide.as_deref())
    }

    /// Letters to reveal, upper cased
    pub fn to_reveal(&self) -> impl Iterator<Item = char> + '_ {
        upper(self.reveal.as_deref())
    }

    /// Hide, then reveal, the requested letters
    pub fn apply(&self, pool: &mut LetterPool) {
        for c in self.to_hide() {
            pool.hide(c);
        }
        for c in self.to_reveal() {
            pool.reveal(c);
        }
    }

    /// The text to print for the pool: a single query, the listings or
    /// the dump
    pub fn render(&self, pool: &LetterPool) -> Result<String> {
        if let Some(c) = self.query {
            let c = c.to_ascii_uppercase();
            Ok(format!("{}: {}", c, pool.is_visible(c)?))
        } else if self.list {
            Ok(format!(
                "Visible : {}\nHidden  : {}",
                LetterPool::format_letters(pool.visible()),
                LetterPool::format_letters(pool.hidden())
            ))
        } else {
            Ok(pool.dump()?)
        }
    }
}

fn upper(letters: Option<&str>) -> impl Iterator<Item = char> + '_ {
    letters
        .unwrap_or_default()
        .chars()
        .map(|c| c.to_ascii_uppercase())
}
