//! Knight move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::square::Square;

use super::KNIGHT_JUMPS;
use super::attack::PinMap;

/// Append pseudo-legal moves for the knight on `sq`.
///
/// A pinned knight has no moves at all: every jump leaves the pin line.
pub(super) fn gen_knights(
    board: &Board,
    sq: Square,
    us: Color,
    pins: &PinMap,
    moves: &mut Vec<Move>,
) {
    if pins.is_pinned(sq) {
        return;
    }
    for &(dr, dc) in &KNIGHT_JUMPS {
        let Some(target) = sq.offset(dr, dc) else {
            continue;
        };
        if board.get(target).is_none_or(|piece| piece.color() != us) {
            moves.push(Move::new(sq, target, board));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::gen_knights;
    use crate::board::Board;
    use crate::color::Color;
    use crate::movegen::attack::scan_king;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn central_knight_eight_jumps() {
        let mut board = Board::empty();
        board.set(Square::E1, Some(Piece::WHITE_KING));
        board.set(Square::A8, Some(Piece::BLACK_KING));
        board.set(Square::D4, Some(Piece::WHITE_KNIGHT));
        let pins = scan_king(&board, Square::E1, Color::White).pins;

        let mut moves = Vec::new();
        gen_knights(&board, Square::D4, Color::White, &pins, &mut moves);
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn corner_knight_two_jumps() {
        let mut board = Board::empty();
        board.set(Square::E1, Some(Piece::WHITE_KING));
        board.set(Square::A8, Some(Piece::BLACK_KING));
        board.set(Square::H1, Some(Piece::WHITE_KNIGHT));
        let pins = scan_king(&board, Square::E1, Color::White).pins;

        let mut moves = Vec::new();
        gen_knights(&board, Square::H1, Color::White, &pins, &mut moves);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().any(|mv| mv.dest() == Square::F2));
        assert!(moves.iter().any(|mv| mv.dest() == Square::G3));
    }

    #[test]
    fn ally_blocks_enemy_is_captured() {
        let mut board = Board::empty();
        board.set(Square::E1, Some(Piece::WHITE_KING));
        board.set(Square::A8, Some(Piece::BLACK_KING));
        board.set(Square::D4, Some(Piece::WHITE_KNIGHT));
        board.set(Square::E6, Some(Piece::WHITE_PAWN));
        board.set(Square::C6, Some(Piece::BLACK_PAWN));
        let pins = scan_king(&board, Square::E1, Color::White).pins;

        let mut moves = Vec::new();
        gen_knights(&board, Square::D4, Color::White, &pins, &mut moves);
        assert_eq!(moves.len(), 7, "own pawn on e6 blocks one jump");
        let capture = moves.iter().find(|mv| mv.dest() == Square::C6).unwrap();
        assert_eq!(capture.captured(), Some(Piece::BLACK_PAWN));
    }

    #[test]
    fn pinned_knight_generates_nothing() {
        let mut board = Board::empty();
        board.set(Square::E1, Some(Piece::WHITE_KING));
        board.set(Square::A8, Some(Piece::BLACK_KING));
        board.set(Square::E4, Some(Piece::WHITE_KNIGHT));
        board.set(Square::E8, Some(Piece::BLACK_ROOK));
        let pins = scan_king(&board, Square::E1, Color::White).pins;
        assert!(pins.is_pinned(Square::E4));

        let mut moves = Vec::new();
        gen_knights(&board, Square::E4, Color::White, &pins, &mut moves);
        assert!(moves.is_empty());
    }
}
