//! Sliding piece move generation: bishops, rooks, and queens.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::square::Square;

use super::attack::PinMap;

/// Append pseudo-legal ray moves for the slider on `sq` along `dirs`.
///
/// Bishops pass the diagonal set, rooks the orthogonal set, and queens all
/// eight directions. Each ray runs until blocked: a capture of an enemy
/// piece is included and ends the ray; an allied piece ends it immediately.
/// A pinned slider is restricted to its pin axis.
pub(super) fn gen_sliders(
    board: &Board,
    sq: Square,
    us: Color,
    dirs: &[(i8, i8)],
    pins: &PinMap,
    moves: &mut Vec<Move>,
) {
    for &dir in dirs {
        if !pins.allows(sq, dir) {
            continue;
        }
        for step in 1..8i8 {
            let Some(target) = sq.offset(dir.0 * step, dir.1 * step) else {
                break;
            };
            match board.get(target) {
                None => moves.push(Move::new(sq, target, board)),
                Some(piece) if piece.color() != us => {
                    moves.push(Move::new(sq, target, board));
                    break;
                }
                Some(_) => break,
            }
        }
    }
}
