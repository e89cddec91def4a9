//! King-safety classification.

/// The state of one side's king after a full move-enumeration pass.
///
/// `Checkmate` means the side has no legal moves left; following the
/// original library's classification this also covers stalemate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KingState {
    /// The king is attacked but the side still has legal moves.
    Check,
    /// The side has no legal moves to play.
    Checkmate,
    /// The king is not threatened.
    Safe,
}

impl std::fmt::Display for KingState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KingState::Check => write!(f, "check"),
            KingState::Checkmate => write!(f, "checkmate"),
            KingState::Safe => write!(f, "safe"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(KingState::Check.to_string(), "check");
        assert_eq!(KingState::Checkmate.to_string(), "checkmate");
        assert_eq!(KingState::Safe.to_string(), "safe");
    }
}
