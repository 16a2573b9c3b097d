use std::fmt;

use crate::error::PoolError;

/// Number of symbols in the alphabet
pub const NLETTER: usize = 26;

/// One member of the `A`..`Z` alphabet.
///
/// Only upper case ASCII letters convert into a `Letter`, so a lower case
/// `'y'` is as foreign to the pool as a digit.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Letter(u8);

impl Letter {
    /// The whole alphabet, in order
    pub const ALL: [Letter; NLETTER] = {
        let mut letters = [Letter(0); NLETTER];
        let mut i = 0;
        while i < NLETTER {
            letters[i] = Letter(i as u8);
            i += 1;
        }
        letters
    };

    /// Iterate over the alphabet from `A` to `Z`
    ///
    /// # Example
    ///
    /// ```
    /// use letterpool::Letter;
    /// let letters: String = Letter::iter().map(|l| l.as_char()).collect();
    /// assert_eq!(letters, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    /// ```
    pub fn iter() -> impl Iterator<Item = Letter> {
        Self::ALL.into_iter()
    }

    /// The upper case character for this letter
    pub fn as_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// Position of the letter in the alphabet
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<char> for Letter {
    type Error = PoolError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_uppercase() {
            Ok(Letter(c as u8 - b'A'))
        } else {
            Err(PoolError::UnknownLetter(c))
        }
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.as_char()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
