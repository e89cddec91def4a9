//! Move record representation.

use crate::Square;
use std::fmt;

/// A move record: start and end square.
///
/// Encoded compactly: 6 bits start, 6 bits end = 12 bits of a u16. The
/// [`Display`](fmt::Display) form is the 4-character label pair (e.g.
/// `e2e4`) used for input parsing and diagnostics.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// Placeholder move (a1 to a1), used to back fixed-capacity lists.
    pub const NULL: Move = Move(0);

    /// Creates a new move record.
    #[inline]
    pub const fn new(start: Square, end: Square) -> Self {
        Move((start.index() as u16) | ((end.index() as u16) << 6))
    }

    /// Returns the start square.
    #[inline]
    pub const fn start(self) -> Square {
        // SAFETY: masked to 6 bits, always a valid square index
        unsafe { Square::from_index_unchecked((self.0 & 0x3F) as u8) }
    }

    /// Returns the end square.
    #[inline]
    pub const fn end(self) -> Square {
        // SAFETY: masked to 6 bits, always a valid square index
        unsafe { Square::from_index_unchecked(((self.0 >> 6) & 0x3F) as u8) }
    }

    /// Parses a move from a 4-character label pair (e.g. "e2e4").
    pub fn from_labels(s: &str) -> Option<Self> {
        // Labels are ASCII; byte slicing below must not split a character.
        if s.len() != 4 || !s.is_ascii() {
            return None;
        }
        let start = Square::from_label(&s[..2])?;
        let end = Square::from_label(&s[2..])?;
        Some(Move::new(start, end))
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start(), self.end())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start(), self.end())
    }
}
