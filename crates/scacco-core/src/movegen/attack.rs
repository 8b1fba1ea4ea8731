//! King-centred pin and check detection, and the general attack predicate.

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::{ALL_DIRS, KNIGHT_JUMPS};

/// One piece giving check: where it stands and the ray direction from the
/// king to it. Knight checks carry the knight-jump offset instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Check {
    pub attacker: Square,
    pub dir: (i8, i8),
}

/// Immutable pin lookup built once per generation pass: maps each pinned
/// square to the ray direction (king outward) it is pinned along.
pub(crate) struct PinMap {
    dirs: [Option<(i8, i8)>; Square::COUNT],
}

impl PinMap {
    fn new() -> PinMap {
        PinMap {
            dirs: [None; Square::COUNT],
        }
    }

    /// Return the pin direction for the piece on `sq`, if it is pinned.
    pub(crate) fn direction(&self, sq: Square) -> Option<(i8, i8)> {
        self.dirs[sq.index()]
    }

    /// Return `true` if the piece on `sq` is pinned.
    pub(crate) fn is_pinned(&self, sq: Square) -> bool {
        self.dirs[sq.index()].is_some()
    }

    /// Return `true` if the piece on `sq` may move along `dir`: it is not
    /// pinned, or `dir` lies on its pin axis (either way along it).
    pub(crate) fn allows(&self, sq: Square, dir: (i8, i8)) -> bool {
        match self.direction(sq) {
            None => true,
            Some(pin) => pin == dir || pin == (-dir.0, -dir.1),
        }
    }
}

/// Result of [`scan_king`].
pub(crate) struct KingScan {
    pub in_check: bool,
    pub checks: Vec<Check>,
    pub pins: PinMap,
}

/// Cast rays and knight jumps outward from `king_sq` for side `us`,
/// collecting every check against the king and every pinned friendly piece.
///
/// Along each ray the first friendly piece is a pin candidate; a second
/// friendly piece clears the ray. The first enemy piece either attacks
/// along this exact geometry (turning the candidate into a pin, or with no
/// candidate into a check) or blocks the ray outright.
///
/// A friendly *king* on a ray is skipped entirely: king-move validation
/// re-runs this scan from the candidate destination while the king still
/// stands on its origin square, and the vacated square must not shield the
/// destination.
pub(crate) fn scan_king(board: &Board, king_sq: Square, us: Color) -> KingScan {
    let mut checks = Vec::new();
    let mut pins = PinMap::new();

    for (j, &dir) in ALL_DIRS.iter().enumerate() {
        let orthogonal = j < 4;
        let mut shield: Option<Square> = None;
        for step in 1..8i8 {
            let Some(sq) = king_sq.offset(dir.0 * step, dir.1 * step) else {
                break;
            };
            let Some(piece) = board.get(sq) else {
                continue;
            };
            if piece.color() == us {
                if piece.is(PieceKind::King) {
                    continue;
                }
                if shield.is_none() {
                    shield = Some(sq);
                } else {
                    break;
                }
            } else {
                if attacks_along(piece, orthogonal, dir, step) {
                    match shield {
                        None => checks.push(Check { attacker: sq, dir }),
                        Some(pinned) => pins.dirs[pinned.index()] = Some(dir),
                    }
                }
                break;
            }
        }
    }

    for &jump in &KNIGHT_JUMPS {
        if let Some(sq) = king_sq.offset(jump.0, jump.1)
            && board.get(sq) == Some(Piece::new(PieceKind::Knight, us.flip()))
        {
            checks.push(Check {
                attacker: sq,
                dir: jump,
            });
        }
    }

    KingScan {
        in_check: !checks.is_empty(),
        checks,
        pins,
    }
}

/// Return `true` if `sq` is attacked by the opponent of `side`.
///
/// Unlike [`scan_king`], every piece of `side` (its king included) blocks a
/// ray: this is the plain attack predicate, used to validate castling
/// transit squares.
pub(crate) fn is_square_attacked(board: &Board, sq: Square, side: Color) -> bool {
    for (j, &dir) in ALL_DIRS.iter().enumerate() {
        let orthogonal = j < 4;
        for step in 1..8i8 {
            let Some(target) = sq.offset(dir.0 * step, dir.1 * step) else {
                break;
            };
            let Some(piece) = board.get(target) else {
                continue;
            };
            if piece.color() == side {
                break;
            }
            if attacks_along(piece, orthogonal, dir, step) {
                return true;
            }
            break;
        }
    }

    for &jump in &KNIGHT_JUMPS {
        if let Some(target) = sq.offset(jump.0, jump.1)
            && board.get(target) == Some(Piece::new(PieceKind::Knight, side.flip()))
        {
            return true;
        }
    }

    false
}

/// Can `piece` attack along `dir` from `step` squares away?
///
/// `dir` points from the scanned square toward the piece, so a pawn attacks
/// at distance one on the diagonals opposed to its own advance direction.
fn attacks_along(piece: Piece, orthogonal: bool, dir: (i8, i8), step: i8) -> bool {
    match piece.kind() {
        PieceKind::Rook => orthogonal,
        PieceKind::Bishop => !orthogonal,
        PieceKind::Queen => true,
        PieceKind::King => step == 1,
        PieceKind::Pawn => step == 1 && !orthogonal && dir.0 == -piece.color().pawn_dir(),
        PieceKind::Knight => false,
    }
}
