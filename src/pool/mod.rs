pub mod letter;

use std::fmt;

use colored::Colorize;
use log::{debug, trace};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::ser::PrettyFormatter;

use crate::error::Result;
use letter::{Letter, NLETTER};

/// Keeps track of which letters are shown to the player.
///
/// Every pool owns its own flags, one per letter of the alphabet, and all of
/// them start out visible.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LetterPool {
    /// The visibility flag of each letter, indexed by its position
    /// in the alphabet
    visible: [bool; NLETTER],
}

impl Default for LetterPool {
    fn default() -> Self {
        Self::new()
    }
}

impl LetterPool {
    /// Create a pool with every letter visible
    pub fn new() -> Self {
        LetterPool {
            visible: [true; NLETTER],
        }
    }

    /// Make a letter visible to the player.
    ///
    /// Anything that is not an upper case letter of the alphabet is ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use letterpool::LetterPool;
    /// let mut pool = LetterPool::new();
    /// pool.hide('Z');
    /// pool.reveal('Z');
    /// assert!(pool.is_visible('Z').unwrap());
    /// ```
    pub fn reveal(&mut self, letter: char) {
        self.set(letter, true)
    }

    /// Hide a letter from the player.
    ///
    /// Anything that is not an upper case letter of the alphabet is ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use letterpool::LetterPool;
    /// let mut pool = LetterPool::new();
    /// pool.hide('C');
    /// pool.hide('F');
    /// assert!(!pool.is_visible('C').unwrap());
    /// assert!(!pool.is_visible('F').unwrap());
    /// assert!(pool.is_visible('A').unwrap());
    /// ```
    pub fn hide(&mut self, letter: char) {
        self.set(letter, false)
    }

    /// Whether the letter is currently shown to the player.
    ///
    /// Fails with [`PoolError::UnknownLetter`](crate::PoolError::UnknownLetter)
    /// for anything outside `A`..`Z`, lower case included.
    pub fn is_visible(&self, letter: char) -> Result<bool> {
        let letter = Letter::try_from(letter)?;
        Ok(self.get(letter))
    }

    /// Visibility of a letter already known to be in the alphabet
    pub fn get(&self, letter: Letter) -> bool {
        self.visible[letter.index()]
    }

    /// Flip the visibility of a letter and return the new state
    pub fn toggle(&mut self, letter: Letter) -> bool {
        let flag = &mut self.visible[letter.index()];
        *flag = !*flag;
        trace!("{letter} toggled to {}", *flag);
        *flag
    }

    fn set(&mut self, letter: char, visible: bool) {
        match Letter::try_from(letter) {
            Ok(letter) => {
                self.visible[letter.index()] = visible;
                trace!("{letter} set to {visible}");
            }
            Err(e) => debug!("Ignoring {letter:?}: {e}"),
        }
    }

    /// The letters currently shown, in alphabet order
    pub fn visible(&self) -> impl Iterator<Item = Letter> + '_ {
        Letter::iter().filter(|&l| self.get(l))
    }

    /// The letters currently hidden, in alphabet order
    pub fn hidden(&self) -> impl Iterator<Item = Letter> + '_ {
        Letter::iter().filter(|&l| !self.get(l))
    }

    /// Render the whole pool as a JSON object, one entry per letter in
    /// alphabet order, indented by four spaces.
    ///
    /// # Example
    ///
    /// ```
    /// use letterpool::LetterPool;
    /// let dump = LetterPool::new().dump().unwrap();
    /// assert!(dump.starts_with("{\n    \"A\": true,\n    \"B\": true,"));
    /// assert_eq!(dump.matches("true").count(), 26);
    /// ```
    pub fn dump(&self) -> Result<String> {
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut ser)?;
        Ok(String::from_utf8(buf)?)
    }

    /// Displays a list of letters on one line.
    ///
    /// An empty list gives `[]`, the letters A, B and C give `[ A ; B ; C ]`.
    ///
    /// # Example
    ///
    /// ```
    /// use letterpool::LetterPool;
    /// let mut pool = LetterPool::new();
    /// assert_eq!(LetterPool::format_letters(pool.hidden()), "[]");
    /// pool.hide('C');
    /// pool.hide('A');
    /// pool.hide('B');
    /// assert_eq!(LetterPool::format_letters(pool.hidden()), "[ A ; B ; C ]");
    /// ```
    pub fn format_letters(letters: impl IntoIterator<Item = Letter>) -> String {
        let letters: Vec<String> = letters.into_iter().map(|l| l.to_string()).collect();
        if letters.is_empty() {
            String::from("[]")
        } else {
            format!("[ {} ]", letters.join(" ; "))
        }
    }
}

impl Serialize for LetterPool {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(NLETTER))?;
        for letter in Letter::iter() {
            map.serialize_entry(&letter.as_char(), &self.get(letter))?;
        }
        map.end()
    }
}

impl fmt::Display for LetterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in Letter::iter() {
            let ch = letter.to_string();
            if self.get(letter) {
                write!(f, "{}", ch.bold().on_green())?;
            } else {
                write!(f, "{}", ch.dimmed().on_black())?;
            }
        }
        Ok(())
    }
}
