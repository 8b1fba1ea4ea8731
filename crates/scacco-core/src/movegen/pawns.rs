//! Pawn move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::square::Square;

use super::attack::PinMap;

/// Append pseudo-legal moves for the pawn on `sq`.
///
/// Advances go into empty squares only (the double advance additionally
/// requires the intermediate square to be empty and the pawn to stand on
/// its starting row). Captures go diagonally forward onto enemy pieces, or
/// onto the en passant target square. A pinned pawn may only move along its
/// pin axis.
pub(super) fn gen_pawns(
    board: &Board,
    sq: Square,
    us: Color,
    pins: &PinMap,
    en_passant: Option<Square>,
    moves: &mut Vec<Move>,
) {
    let fwd = us.pawn_dir();

    // Single and double advance.
    if let Some(one) = sq.offset(fwd, 0)
        && !board.is_occupied(one)
        && pins.allows(sq, (fwd, 0))
    {
        moves.push(Move::new(sq, one, board));
        if sq.row() == us.pawn_start_row()
            && let Some(two) = sq.offset(2 * fwd, 0)
            && !board.is_occupied(two)
        {
            moves.push(Move::new(sq, two, board));
        }
    }

    // Diagonal captures, en passant included.
    for dc in [-1, 1] {
        let Some(target) = sq.offset(fwd, dc) else {
            continue;
        };
        if !pins.allows(sq, (fwd, dc)) {
            continue;
        }
        match board.get(target) {
            Some(piece) if piece.color() != us => moves.push(Move::new(sq, target, board)),
            None if en_passant == Some(target) => {
                moves.push(Move::new_en_passant(sq, target, board));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::gen_pawns;
    use crate::board::Board;
    use crate::color::Color;
    use crate::movegen::attack::scan_king;
    use crate::piece::Piece;
    use crate::square::Square;

    fn board_with(pieces: &[(Square, Piece)]) -> Board {
        let mut board = Board::empty();
        for &(sq, piece) in pieces {
            board.set(sq, Some(piece));
        }
        board
    }

    fn pawn_moves(board: &Board, sq: Square, us: Color, ep: Option<Square>) -> Vec<crate::Move> {
        let king_sq = board.find_king(us).unwrap();
        let pins = scan_king(board, king_sq, us).pins;
        let mut moves = Vec::new();
        gen_pawns(board, sq, us, &pins, ep, &mut moves);
        moves
    }

    #[test]
    fn initial_pawn_single_and_double() {
        let board = Board::starting_position();
        let moves = pawn_moves(&board, Square::E2, Color::White, None);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().any(|mv| mv.dest() == Square::E3));
        assert!(moves.iter().any(|mv| mv.dest() == Square::E4));
    }

    #[test]
    fn advanced_pawn_single_only() {
        let board = board_with(&[
            (Square::E1, Piece::WHITE_KING),
            (Square::A8, Piece::BLACK_KING),
            (Square::E4, Piece::WHITE_PAWN),
        ]);
        let moves = pawn_moves(&board, Square::E4, Color::White, None);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].dest(), Square::E5);
    }

    #[test]
    fn blocked_pawn_no_advance() {
        let board = board_with(&[
            (Square::E1, Piece::WHITE_KING),
            (Square::A8, Piece::BLACK_KING),
            (Square::E4, Piece::WHITE_PAWN),
            (Square::E5, Piece::BLACK_PAWN),
        ]);
        let moves = pawn_moves(&board, Square::E4, Color::White, None);
        assert!(moves.is_empty());
    }

    #[test]
    fn double_advance_needs_empty_intermediate() {
        let board = board_with(&[
            (Square::E1, Piece::WHITE_KING),
            (Square::A8, Piece::BLACK_KING),
            (Square::E2, Piece::WHITE_PAWN),
            (Square::E3, Piece::BLACK_KNIGHT),
        ]);
        let moves = pawn_moves(&board, Square::E2, Color::White, None);
        assert!(moves.is_empty(), "blocked intermediate square stops both advances");
    }

    #[test]
    fn diagonal_captures() {
        let board = board_with(&[
            (Square::E1, Piece::WHITE_KING),
            (Square::A8, Piece::BLACK_KING),
            (Square::E4, Piece::WHITE_PAWN),
            (Square::D5, Piece::BLACK_PAWN),
            (Square::F5, Piece::BLACK_KNIGHT),
            (Square::E5, Piece::BLACK_BISHOP),
        ]);
        let moves = pawn_moves(&board, Square::E4, Color::White, None);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|mv| mv.is_capture()));
    }

    #[test]
    fn no_capture_of_own_piece() {
        let board = board_with(&[
            (Square::E1, Piece::WHITE_KING),
            (Square::A8, Piece::BLACK_KING),
            (Square::E4, Piece::WHITE_PAWN),
            (Square::D5, Piece::WHITE_KNIGHT),
        ]);
        let moves = pawn_moves(&board, Square::E4, Color::White, None);
        assert_eq!(moves.len(), 1, "only the advance; no capture of an ally");
    }

    #[test]
    fn en_passant_onto_target_square() {
        let board = board_with(&[
            (Square::E1, Piece::WHITE_KING),
            (Square::A8, Piece::BLACK_KING),
            (Square::E5, Piece::WHITE_PAWN),
            (Square::D5, Piece::BLACK_PAWN),
        ]);
        let moves = pawn_moves(&board, Square::E5, Color::White, Some(Square::D6));
        let ep = moves.iter().find(|mv| mv.is_en_passant()).unwrap();
        assert_eq!(ep.dest(), Square::D6);
        assert_eq!(ep.captured(), Some(Piece::BLACK_PAWN));
    }

    #[test]
    fn black_pawn_moves_down_the_board() {
        let board = board_with(&[
            (Square::E1, Piece::WHITE_KING),
            (Square::A8, Piece::BLACK_KING),
            (Square::D7, Piece::BLACK_PAWN),
            (Square::C6, Piece::WHITE_KNIGHT),
        ]);
        let moves = pawn_moves(&board, Square::D7, Color::Black, None);
        assert_eq!(moves.len(), 3);
        assert!(moves.iter().any(|mv| mv.dest() == Square::D6));
        assert!(moves.iter().any(|mv| mv.dest() == Square::D5));
        assert!(moves.iter().any(|mv| mv.dest() == Square::C6 && mv.is_capture()));
    }

    #[test]
    fn pinned_pawn_advances_along_file_pin() {
        // Pinned along the e-file: advancing stays on the pin axis, the
        // capture toward d5 leaves it.
        let board = board_with(&[
            (Square::E1, Piece::WHITE_KING),
            (Square::A8, Piece::BLACK_KING),
            (Square::E4, Piece::WHITE_PAWN),
            (Square::E8, Piece::BLACK_ROOK),
            (Square::D5, Piece::BLACK_KNIGHT),
        ]);
        let moves = pawn_moves(&board, Square::E4, Color::White, None);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].dest(), Square::E5);
    }

    #[test]
    fn pinned_pawn_captures_along_diagonal_pin() {
        // Pinned by the bishop on g3: capturing the pinning bishop stays on
        // the axis; advancing leaves it.
        let board = board_with(&[
            (Square::F2, Piece::WHITE_PAWN),
            (Square::E1, Piece::WHITE_KING),
            (Square::A8, Piece::BLACK_KING),
            (Square::G3, Piece::BLACK_BISHOP),
        ]);
        let moves = pawn_moves(&board, Square::F2, Color::White, None);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].dest(), Square::G3);
        assert!(moves[0].is_capture());
    }
}
