//! The 8x8 mailbox board: piece placement and read access.

use std::fmt;

use crate::color::Color;
use crate::error::PositionError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Back-rank piece order, from file a to file h.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement for a chess position.
///
/// The board is owned by [`GameState`](crate::GameState) and mutated only
/// through move application and undo; everything else reads it.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// Return an empty board.
    pub fn empty() -> Board {
        Board {
            squares: [None; Square::COUNT],
        }
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            board.set(
                Square::new(Color::Black.home_row(), col),
                Some(Piece::new(kind, Color::Black)),
            );
            board.set(
                Square::new(Color::White.home_row(), col),
                Some(Piece::new(kind, Color::White)),
            );
            board.set(
                Square::new(Color::Black.pawn_start_row(), col),
                Some(Piece::BLACK_PAWN),
            );
            board.set(
                Square::new(Color::White.pawn_start_row(), col),
                Some(Piece::WHITE_PAWN),
            );
        }
        board
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Return `true` if the given square is occupied.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_some()
    }

    /// Place a piece on (or clear) the given square.
    ///
    /// This is the position-setup entry point, used on a board the caller
    /// still owns. Once a board is handed to a
    /// [`GameState`](crate::GameState) it is only reachable immutably;
    /// play mutates it through move application and undo alone.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index()] = piece;
    }

    /// Iterate over all occupied squares and their pieces, in index order
    /// (A8 across to H8, then down rank by rank to H1).
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.get(sq).map(|piece| (sq, piece)))
    }

    /// Return the square of the king of the given color, scanning the board.
    ///
    /// Used at position setup to seed the cached king locations; play-time
    /// code uses the cache instead.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|&(_, piece)| piece == Piece::new(PieceKind::King, color))
            .map(|(sq, _)| sq)
    }

    /// Validate the structural integrity of the placement.
    pub fn validate(&self) -> Result<(), PositionError> {
        // Exactly one king per side
        for color in Color::ALL {
            let king = Piece::new(PieceKind::King, color);
            let count = self.pieces().filter(|&(_, piece)| piece == king).count();
            if count != 1 {
                let color_name = match color {
                    Color::White => "white",
                    Color::Black => "black",
                };
                return Err(PositionError::InvalidKingCount {
                    color: color_name,
                    count,
                });
            }
        }

        // No pawns on either back rank (they would have promoted)
        let on_back_rank = self.pieces().any(|(sq, piece)| {
            piece.is(PieceKind::Pawn) && (sq.row() == 0 || sq.row() == 7)
        });
        if on_back_rank {
            return Err(PositionError::PawnsOnBackRank);
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board:")?;
        write!(f, "{}", self.pretty())
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0u8..8 {
            write!(f, "{}  ", 8 - row)?;
            for col in 0u8..8 {
                let c = match self.0.get(Square::new(row, col)) {
                    Some(piece) => piece.letter(),
                    None => '.',
                };
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
