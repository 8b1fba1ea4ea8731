//! Legal move generation.

mod attack;
mod king;
mod knights;
mod pawns;
mod sliders;

pub(crate) use attack::is_square_attacked;

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use self::attack::PinMap;

/// Orthogonal ray directions as (row, column) deltas.
pub(crate) const ORTHOGONAL_DIRS: [(i8, i8); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// Diagonal ray directions as (row, column) deltas.
pub(crate) const DIAGONAL_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// All eight ray directions: orthogonals first, then diagonals.
pub(crate) const ALL_DIRS: [(i8, i8); 8] = [
    (-1, 0),
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// The eight knight jumps.
pub(crate) const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Generate all legal moves for `us`, and report whether `us` is in check.
///
/// The caller supplies the cached king square; the scan and every generator
/// read the board without mutating it.
pub(crate) fn generate_legal(
    board: &Board,
    us: Color,
    king_sq: Square,
    castling: CastleRights,
    en_passant: Option<Square>,
) -> (Vec<Move>, bool) {
    let scan = attack::scan_king(board, king_sq, us);
    let mut moves = Vec::new();

    match scan.checks.len() {
        0 => {
            // Not in check: pin-filtered piece moves are all legal.
            gen_all(board, us, castling, en_passant, &scan.pins, &mut moves);
        }
        1 => {
            // Single check: a non-king move must block the check ray or
            // capture the checker; king moves are validated square by square.
            gen_all(board, us, castling, en_passant, &scan.pins, &mut moves);
            let check = &scan.checks[0];
            let mask = block_mask(board, king_sq, check);
            moves.retain(|mv| {
                if mv.piece().is(PieceKind::King) {
                    return true;
                }
                if mask[mv.dest().index()] {
                    return true;
                }
                // En passant may capture a checking pawn even though the
                // destination differs from the attacker's square.
                mv.is_en_passant()
                    && Square::new(mv.source().row(), mv.dest().col()) == check.attacker
            });
        }
        _ => {
            // Double check cannot be blocked; only the king may move.
            king::gen_king(board, king_sq, us, castling, &mut moves);
        }
    }

    (moves, scan.in_check)
}

/// Append moves for every piece of `us`, dispatching by kind.
fn gen_all(
    board: &Board,
    us: Color,
    castling: CastleRights,
    en_passant: Option<Square>,
    pins: &PinMap,
    moves: &mut Vec<Move>,
) {
    for (sq, piece) in board.pieces() {
        if piece.color() != us {
            continue;
        }
        match piece.kind() {
            PieceKind::Pawn => pawns::gen_pawns(board, sq, us, pins, en_passant, moves),
            PieceKind::Knight => knights::gen_knights(board, sq, us, pins, moves),
            PieceKind::Bishop => {
                sliders::gen_sliders(board, sq, us, &DIAGONAL_DIRS, pins, moves);
            }
            PieceKind::Rook => {
                sliders::gen_sliders(board, sq, us, &ORTHOGONAL_DIRS, pins, moves);
            }
            PieceKind::Queen => sliders::gen_sliders(board, sq, us, &ALL_DIRS, pins, moves),
            PieceKind::King => king::gen_king(board, sq, us, castling, moves),
        }
    }
}

/// Squares a non-king move may target under a single check: everything
/// strictly between the king and a sliding checker, plus the checker's own
/// square. A knight's check can only be met by capturing the knight.
fn block_mask(
    board: &Board,
    king_sq: Square,
    check: &attack::Check,
) -> [bool; Square::COUNT] {
    let mut mask = [false; Square::COUNT];
    let checker = board
        .get(check.attacker)
        .expect("checker must be on the board");
    if checker.is(PieceKind::Knight) {
        mask[check.attacker.index()] = true;
        return mask;
    }
    for step in 1..8i8 {
        let Some(sq) = king_sq.offset(check.dir.0 * step, check.dir.1 * step) else {
            break;
        };
        mask[sq.index()] = true;
        if sq == check.attacker {
            break;
        }
    }
    mask
}
