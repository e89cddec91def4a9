//! Board square representation.

use std::fmt;

/// A square on the chess board, indexed 0-63.
///
/// Squares use little-endian rank-file mapping:
/// - a1 = 0, b1 = 1, ..., h1 = 7
/// - a2 = 8, ..., h8 = 63
///
/// The [`Display`](fmt::Display) form is the 2-character coordinate label
/// (e.g. `e4`) used by move records.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    /// The number of squares on the board.
    pub const COUNT: usize = 64;

    /// Creates a square from file and rank indices (each 0-7).
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Creates a square from index without bounds checking.
    ///
    /// # Safety
    /// The index must be in the range 0-63.
    #[inline]
    pub const unsafe fn from_index_unchecked(index: u8) -> Self {
        debug_assert!(index < 64);
        Square(index)
    }

    /// Parses a square from its 2-character label (e.g. "e4").
    pub const fn from_label(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        Square::new(file, rank)
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the file index of this square (0 = a, 7 = h).
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Returns the rank index of this square (0 = rank 1, 7 = rank 8).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Returns the square offset by the given file and rank deltas, or
    /// `None` if it falls off the board.
    #[inline]
    pub const fn offset(self, dfile: i8, drank: i8) -> Option<Self> {
        let file = self.file() as i8 + dfile;
        let rank = self.rank() as i8 + drank;
        if file < 0 || rank < 0 {
            return None;
        }
        Square::new(file as u8, rank as u8)
    }

    /// Returns an iterator over all 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file()) as char;
        let rank = (b'1' + self.rank()) as char;
        write!(f, "{}{}", file, rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn square_new() {
        let e4 = Square::new(4, 3).unwrap();
        assert_eq!(e4.file(), 4);
        assert_eq!(e4.rank(), 3);
        assert_eq!(e4.index(), 28);
        assert_eq!(Square::new(8, 0), None);
        assert_eq!(Square::new(0, 8), None);
    }

    #[test]
    fn square_from_label() {
        assert_eq!(Square::from_label("a1"), Square::from_index(0));
        assert_eq!(Square::from_label("e4"), Square::new(4, 3));
        assert_eq!(Square::from_label("h8"), Square::from_index(63));
        assert_eq!(Square::from_label("i1"), None);
        assert_eq!(Square::from_label("a9"), None);
        assert_eq!(Square::from_label(""), None);
    }

    #[test]
    fn square_label() {
        assert_eq!(Square::from_index(0).unwrap().to_string(), "a1");
        assert_eq!(Square::from_index(63).unwrap().to_string(), "h8");
        assert_eq!(Square::new(4, 3).unwrap().to_string(), "e4");
    }

    #[test]
    fn square_offset() {
        let e4 = Square::from_label("e4").unwrap();
        assert_eq!(e4.offset(0, 1), Square::from_label("e5"));
        assert_eq!(e4.offset(-1, -1), Square::from_label("d3"));
        let a1 = Square::from_label("a1").unwrap();
        assert_eq!(a1.offset(-1, 0), None);
        assert_eq!(a1.offset(0, -1), None);
        let h8 = Square::from_label("h8").unwrap();
        assert_eq!(h8.offset(1, 0), None);
        assert_eq!(h8.offset(0, 1), None);
    }

    proptest! {
        #[test]
        fn index_round_trip(index in 0u8..64) {
            let sq = Square::from_index(index).unwrap();
            prop_assert_eq!(sq.index(), index);
        }

        #[test]
        fn label_round_trip(index in 0u8..64) {
            let sq = Square::from_index(index).unwrap();
            prop_assert_eq!(Square::from_label(&sq.to_string()), Some(sq));
        }
    }
}
