//! King move and castling generation.

use crate::board::Board;
use crate::castle_rights::{CastleRights, CastleSide};
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::ALL_DIRS;
use super::attack::{is_square_attacked, scan_king};

/// Append legal king moves (single steps plus castling) for the king on `sq`.
///
/// Each candidate step is validated by re-running the pin/check scan from
/// the destination square; the scan treats our own king as transparent on
/// rays, so the square it vacates cannot shield the destination.
pub(super) fn gen_king(
    board: &Board,
    sq: Square,
    us: Color,
    castling: CastleRights,
    moves: &mut Vec<Move>,
) {
    for &(dr, dc) in &ALL_DIRS {
        let Some(target) = sq.offset(dr, dc) else {
            continue;
        };
        if board.get(target).is_some_and(|piece| piece.color() == us) {
            continue;
        }
        if !scan_king(board, target, us).in_check {
            moves.push(Move::new(sq, target, board));
        }
    }

    gen_castles(board, sq, us, castling, moves);
}

/// Append castling moves for the king on `sq`.
///
/// A castle requires the corresponding right, the rook on its home square,
/// a king not currently under attack, and empty, unattacked squares on the
/// king's path. On the queen side the square next to the rook must also be
/// empty, but may be attacked: only the rook passes over it.
fn gen_castles(
    board: &Board,
    sq: Square,
    us: Color,
    castling: CastleRights,
    moves: &mut Vec<Move>,
) {
    if is_square_attacked(board, sq, us) {
        return;
    }

    let rook = Piece::new(PieceKind::Rook, us);

    if castling.has(us, CastleSide::KingSide)
        && board.get(Square::new(us.home_row(), 7)) == Some(rook)
        && let (Some(f), Some(g)) = (sq.offset(0, 1), sq.offset(0, 2))
        && !board.is_occupied(f)
        && !board.is_occupied(g)
        && !is_square_attacked(board, f, us)
        && !is_square_attacked(board, g, us)
    {
        moves.push(Move::new_castle(sq, g, board));
    }

    if castling.has(us, CastleSide::QueenSide)
        && board.get(Square::new(us.home_row(), 0)) == Some(rook)
        && let (Some(d), Some(c), Some(b)) =
            (sq.offset(0, -1), sq.offset(0, -2), sq.offset(0, -3))
        && !board.is_occupied(d)
        && !board.is_occupied(c)
        && !board.is_occupied(b)
        && !is_square_attacked(board, d, us)
        && !is_square_attacked(board, c, us)
    {
        moves.push(Move::new_castle(sq, c, board));
    }
}
