//! The game aggregate: board, metadata, history, and the legality entry point.

use tracing::{debug, trace};

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::chess_move::{Move, PromotionChoice};
use crate::color::Color;
use crate::error::PositionError;
use crate::movegen;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Maps each square to the castling rights revoked when any move starts or
/// ends there. Covers king moves, rook moves off their home squares, and
/// captures of a rook still standing on its home square.
const CASTLE_REVOKE: [CastleRights; Square::COUNT] = {
    let mut table = [CastleRights::NONE; Square::COUNT];
    table[Square::E1.index()] = CastleRights::WHITE_BOTH;
    table[Square::A1.index()] = CastleRights::WHITE_QUEEN;
    table[Square::H1.index()] = CastleRights::WHITE_KING;
    table[Square::E8.index()] = CastleRights::BLACK_BOTH;
    table[Square::A8.index()] = CastleRights::BLACK_QUEEN;
    table[Square::H8.index()] = CastleRights::BLACK_KING;
    table
};

/// Full state of one chess game.
///
/// Owns the board and all play metadata, mutated in place by [`apply`] and
/// [`undo`]. One logical thread of control drives one `GameState` at a time;
/// parallel consumers clone the whole aggregate.
///
/// [`apply`]: GameState::apply
/// [`undo`]: GameState::undo
#[derive(Clone)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    /// Cached king locations, indexed by [`Color::index`]. Kept in lockstep
    /// with the board by apply/undo.
    king_squares: [Square; Color::COUNT],
    castling: CastleRights,
    en_passant: Option<Square>,
    move_log: Vec<Move>,
    /// One snapshot per applied ply plus the initial state, so undo restores
    /// the prior value in O(1). Always `move_log.len() + 1` entries.
    castling_log: Vec<CastleRights>,
    /// Snapshot history for the en passant target, same shape as
    /// `castling_log`.
    en_passant_log: Vec<Option<Square>>,
    checkmate: bool,
    stalemate: bool,
    promotion_choice: PromotionChoice,
}

impl GameState {
    /// Create a game in the standard initial position.
    pub fn new() -> GameState {
        GameState {
            board: Board::starting_position(),
            side_to_move: Color::White,
            king_squares: [Square::E1, Square::E8],
            castling: CastleRights::ALL,
            en_passant: None,
            move_log: Vec::new(),
            castling_log: vec![CastleRights::ALL],
            en_passant_log: vec![None],
            checkmate: false,
            stalemate: false,
            promotion_choice: PromotionChoice::Queen,
        }
    }

    /// Create a game from an arbitrary position.
    ///
    /// The placement must hold exactly one king per side and no pawns on a
    /// back rank, and `en_passant` (if set) must sit on the capture row for
    /// `side_to_move`.
    pub fn from_setup(
        board: Board,
        side_to_move: Color,
        castling: CastleRights,
        en_passant: Option<Square>,
    ) -> Result<GameState, PositionError> {
        board.validate()?;

        if let Some(target) = en_passant {
            // White captures en passant onto row 2, Black onto row 5.
            let capture_row = match side_to_move {
                Color::White => 2,
                Color::Black => 5,
            };
            if target.row() != capture_row {
                return Err(PositionError::InvalidEnPassant { square: target });
            }
        }

        let king_squares = [
            board
                .find_king(Color::White)
                .expect("validate guarantees a white king"),
            board
                .find_king(Color::Black)
                .expect("validate guarantees a black king"),
        ];

        Ok(GameState {
            board,
            side_to_move,
            king_squares,
            castling,
            en_passant,
            move_log: Vec::new(),
            castling_log: vec![castling],
            en_passant_log: vec![en_passant],
            checkmate: false,
            stalemate: false,
            promotion_choice: PromotionChoice::Queen,
        })
    }

    /// Return the board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Return the current castling rights.
    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    /// Return the current en passant target square, if any.
    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    /// Return the cached square of the given side's king.
    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    /// Return every move applied so far, oldest first.
    #[inline]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    /// Return `true` if the last call to [`legal_moves`](GameState::legal_moves)
    /// found the side to move checkmated.
    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    /// Return `true` if the last call to [`legal_moves`](GameState::legal_moves)
    /// found the side to move stalemated.
    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    /// Return `true` if the side to move is currently in check.
    pub fn in_check(&self) -> bool {
        movegen::is_square_attacked(
            &self.board,
            self.king_square(self.side_to_move),
            self.side_to_move,
        )
    }

    /// Return the piece a promoting pawn will become on [`apply`](GameState::apply).
    #[inline]
    pub fn promotion_choice(&self) -> PromotionChoice {
        self.promotion_choice
    }

    /// Select the piece promoting pawns become. Takes effect for every
    /// subsequent [`apply`](GameState::apply) until changed again.
    #[inline]
    pub fn set_promotion_choice(&mut self, choice: PromotionChoice) {
        self.promotion_choice = choice;
    }

    /// Generate all legal moves for the side to move.
    ///
    /// Also maintains the checkmate/stalemate flags: both are cleared at
    /// the top of every call and one is set when no move is legal.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        self.checkmate = false;
        self.stalemate = false;

        let (moves, in_check) = movegen::generate_legal(
            &self.board,
            self.side_to_move,
            self.king_square(self.side_to_move),
            self.castling,
            self.en_passant,
        );

        if moves.is_empty() {
            if in_check {
                self.checkmate = true;
                debug!(side = %self.side_to_move, "checkmate");
            } else {
                self.stalemate = true;
                debug!(side = %self.side_to_move, "stalemate");
            }
        }
        moves
    }

    /// Apply a move.
    ///
    /// The move must come from the most recent
    /// [`legal_moves`](GameState::legal_moves) call; this is not re-checked
    /// here beyond a debug assertion, and applying any other move leaves the
    /// game in an unspecified state.
    pub fn apply(&mut self, mv: Move) {
        debug_assert_eq!(
            self.board.get(mv.source()),
            Some(mv.piece()),
            "applied move does not match the board"
        );
        trace!(mv = %mv, side = %self.side_to_move, "apply");

        let mover = mv.piece();
        self.board.set(mv.source(), None);
        let placed = if mv.is_promotion() {
            Piece::new(self.promotion_choice.piece_kind(), mover.color())
        } else {
            mover
        };
        self.board.set(mv.dest(), Some(placed));

        if mover.is(PieceKind::King) {
            self.king_squares[mover.color().index()] = mv.dest();
        }

        // A double pawn advance arms en passant on the midpoint square;
        // anything else disarms it.
        self.en_passant = if mover.is(PieceKind::Pawn)
            && mv.source().row().abs_diff(mv.dest().row()) == 2
        {
            Some(Square::new(
                (mv.source().row() + mv.dest().row()) / 2,
                mv.dest().col(),
            ))
        } else {
            None
        };

        // The en passant victim stands beside the destination, not on it.
        if mv.is_en_passant() {
            self.board
                .set(Square::new(mv.source().row(), mv.dest().col()), None);
        }

        self.castling = self
            .castling
            .remove(CASTLE_REVOKE[mv.source().index()])
            .remove(CASTLE_REVOKE[mv.dest().index()]);

        if mv.is_castle() {
            let row = mv.source().row();
            if mv.dest().col() > mv.source().col() {
                // King side: rook hops from the h-file to the king's left.
                self.board.set(Square::new(row, 5), self.board.get(Square::new(row, 7)));
                self.board.set(Square::new(row, 7), None);
            } else {
                // Queen side: rook hops from the a-file to the king's right.
                self.board.set(Square::new(row, 3), self.board.get(Square::new(row, 0)));
                self.board.set(Square::new(row, 0), None);
            }
        }

        self.move_log.push(mv);
        self.castling_log.push(self.castling);
        self.en_passant_log.push(self.en_passant);
        self.side_to_move = self.side_to_move.flip();
    }

    /// Undo the most recent move. A no-op if no move has been applied.
    pub fn undo(&mut self) {
        let Some(mv) = self.move_log.pop() else {
            return;
        };
        trace!(mv = %mv, "undo");

        self.board.set(mv.source(), Some(mv.piece()));
        if mv.is_en_passant() {
            // The destination was empty before the capture; the victim goes
            // back beside it.
            self.board.set(mv.dest(), None);
            self.board
                .set(Square::new(mv.source().row(), mv.dest().col()), mv.captured());
        } else {
            self.board.set(mv.dest(), mv.captured());
        }

        if mv.piece().is(PieceKind::King) {
            self.king_squares[mv.piece().color().index()] = mv.source();
        }

        if mv.is_castle() {
            let row = mv.source().row();
            if mv.dest().col() > mv.source().col() {
                self.board.set(Square::new(row, 7), self.board.get(Square::new(row, 5)));
                self.board.set(Square::new(row, 5), None);
            } else {
                self.board.set(Square::new(row, 0), self.board.get(Square::new(row, 3)));
                self.board.set(Square::new(row, 3), None);
            }
        }

        self.castling_log.pop();
        self.castling = *self
            .castling_log
            .last()
            .expect("snapshot logs always hold the initial entry");
        self.en_passant_log.pop();
        self.en_passant = *self
            .en_passant_log
            .last()
            .expect("snapshot logs always hold the initial entry");

        self.side_to_move = self.side_to_move.flip();

        // Undoing a legal game never lands on a finished position.
        self.checkmate = false;
        self.stalemate = false;
    }
}

impl Default for GameState {
    fn default() -> GameState {
        GameState::new()
    }
}
