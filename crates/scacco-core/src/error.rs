//! Error types for position setup validation.

use crate::square::Square;

/// Errors from validating a custom position before play.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: &'static str,
        /// Number of kings found.
        count: usize,
    },
    /// Pawns occupy the first or eighth rank.
    #[error("pawns found on a back rank")]
    PawnsOnBackRank,
    /// The en passant target does not sit on the capture row for the side to move.
    #[error("en passant target {square} is not reachable for the side to move")]
    InvalidEnPassant {
        /// The offending target square.
        square: Square,
    },
}

#[cfg(test)]
mod tests {
    use super::PositionError;
    use crate::square::Square;

    #[test]
    fn display_messages() {
        let err = PositionError::InvalidKingCount {
            color: "white",
            count: 2,
        };
        assert_eq!(format!("{err}"), "expected 1 king for white, found 2");

        assert_eq!(
            format!("{}", PositionError::PawnsOnBackRank),
            "pawns found on a back rank"
        );

        let err = PositionError::InvalidEnPassant { square: Square::E6 };
        assert_eq!(
            format!("{err}"),
            "en passant target e6 is not reachable for the side to move"
        );
    }
}
