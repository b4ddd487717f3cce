//! Game session with selection state and undoable move history.
//!
//! The [`Session`] struct owns everything that changes while a game is
//! played:
//! - The board and the side to move
//! - The current selection and its highlighted destinations
//! - The move history, which supports single-step undo
//!
//! Input arrives as square clicks through [`Session::select`] or as whole
//! moves through [`Session::make_move`]; both re-validate against the rules.

use crate::render::{self, Frame, Render};
use crate::rules::{GeometricRules, RuleSet};
use chess_core::{Board, Color, MoveRecord, Piece, PieceKind, PlacementError, Square};
use thiserror::Error;

/// Error type for session operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// There is no piece on the origin square.
    #[error("no piece on {0}")]
    EmptySquare(Square),
    /// The piece on the origin square belongs to the side not on move.
    #[error("{piece} on {square} cannot move: {turn} to move")]
    WrongTurn {
        square: Square,
        piece: Piece,
        turn: Color,
    },
    /// The rules reject the move.
    #[error("illegal move: {from}{to}")]
    IllegalMove { from: Square, to: Square },
    /// The move string could not be parsed.
    #[error("invalid move notation: {0}")]
    InvalidNotation(String),
    /// Undo was requested with an empty history.
    #[error("no moves to undo")]
    NothingToUndo,
}

/// A selected piece and the squares it may move to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub from: Square,
    pub piece: Piece,
    pub destinations: Vec<Square>,
}

/// What a click did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// A piece of the side to move was selected.
    Selected(Square),
    /// Nothing was selected (empty square or opponent's piece).
    Ignored,
    /// A piece of the same color was clicked; the selection was dropped.
    Deselected,
    /// The move was illegal; the selection was dropped.
    Rejected,
    /// The move was applied.
    Moved(MoveRecord),
}

/// A game in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    board: Board,
    turn: Color,
    selection: Option<Selection>,
    history: Vec<MoveRecord>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session at the initial position with White to move.
    pub fn new() -> Self {
        Self::with_board(GeometricRules.initial_board(), Color::White)
    }

    /// Creates a session from an arbitrary board.
    pub fn with_board(board: Board, turn: Color) -> Self {
        Session {
            board,
            turn,
            selection: None,
            history: Vec::new(),
        }
    }

    /// Creates a session from a FEN piece-placement field.
    pub fn from_placement(placement: &str, turn: Color) -> Result<Self, PlacementError> {
        Ok(Self::with_board(Board::from_placement(placement)?, turn))
    }

    /// Returns to the initial position, discarding history.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Returns the current selection, if any.
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Returns the applied moves, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Returns "White to move" or "Black to move".
    pub fn turn_indicator(&self) -> &'static str {
        self.turn.to_move_label()
    }

    /// Returns the numbered move list, newest first.
    pub fn move_list(&self) -> Vec<String> {
        render::move_list(&self.history)
    }

    /// Handles a click on `square`.
    ///
    /// With nothing selected, a piece of the side to move becomes selected.
    /// With a piece selected, the click is the destination: a same-color
    /// piece drops the selection, anything else is tried as a move.
    pub fn select(&mut self, square: Square) -> SelectOutcome {
        match self.selection.take() {
            None => self.begin_selection(square),
            Some(selection) => self.complete_selection(selection, square),
        }
    }

    fn begin_selection(&mut self, square: Square) -> SelectOutcome {
        let Some(piece) = self.board.get(square) else {
            tracing::debug!("Ignoring click on empty square {}", square);
            return SelectOutcome::Ignored;
        };
        if piece.color != self.turn {
            tracing::debug!("Ignoring {} on {}: {} to move", piece, square, self.turn);
            return SelectOutcome::Ignored;
        }

        let destinations = GeometricRules.legal_destinations(piece, square, &self.board);
        tracing::debug!(
            "Selected {} on {} with {} destinations",
            piece,
            square,
            destinations.len()
        );
        self.selection = Some(Selection {
            from: square,
            piece,
            destinations,
        });
        SelectOutcome::Selected(square)
    }

    fn complete_selection(&mut self, selection: Selection, target: Square) -> SelectOutcome {
        if self
            .board
            .get(target)
            .is_some_and(|p| p.color == selection.piece.color)
        {
            tracing::debug!("Selection cleared by click on own piece at {}", target);
            return SelectOutcome::Deselected;
        }

        match self.apply(selection.from, selection.piece, target) {
            Some(record) => SelectOutcome::Moved(record),
            None => SelectOutcome::Rejected,
        }
    }

    /// Moves the piece on `from` to `to`.
    ///
    /// Any selection is dropped whether or not the move succeeds.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<MoveRecord, SessionError> {
        self.selection = None;

        let piece = self
            .board
            .get(from)
            .ok_or(SessionError::EmptySquare(from))?;
        if piece.color != self.turn {
            return Err(SessionError::WrongTurn {
                square: from,
                piece,
                turn: self.turn,
            });
        }

        self.apply(from, piece, to)
            .ok_or(SessionError::IllegalMove { from, to })
    }

    /// Moves a piece given as two concatenated squares (e.g., "e2e4").
    pub fn make_move_uci(&mut self, uci: &str) -> Result<MoveRecord, SessionError> {
        let invalid = || SessionError::InvalidNotation(uci.to_string());
        if uci.len() != 4 {
            return Err(invalid());
        }
        let from = uci
            .get(0..2)
            .and_then(Square::from_algebraic)
            .ok_or_else(invalid)?;
        let to = uci
            .get(2..4)
            .and_then(Square::from_algebraic)
            .ok_or_else(invalid)?;
        self.make_move(from, to)
    }

    /// Validates and applies a move, returning its record.
    fn apply(&mut self, from: Square, piece: Piece, to: Square) -> Option<MoveRecord> {
        if !GeometricRules.is_legal_move(piece, from, to, &self.board) {
            tracing::debug!("Rejected illegal move {}{} by {}", from, to, piece);
            return None;
        }

        let captured = self.board.take(to);
        self.board.take(from);

        let promoted = piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row();
        let record = MoveRecord {
            from,
            to,
            moved: piece,
            captured,
            promoted,
        };
        self.board.set(to, Some(record.placed()));
        self.history.push(record);
        self.turn = self.turn.opposite();

        tracing::info!("{}. {}", self.history.len(), record);
        Some(record)
    }

    /// Takes back the last move.
    ///
    /// The moved piece returns to its origin as it was before the move (so a
    /// promoted queen becomes a pawn again) and any captured piece reappears.
    pub fn undo(&mut self) -> Result<MoveRecord, SessionError> {
        let Some(record) = self.history.pop() else {
            tracing::warn!("No moves to undo");
            return Err(SessionError::NothingToUndo);
        };

        self.board.set(record.from, Some(record.moved));
        self.board.set(record.to, record.captured);
        self.turn = self.turn.opposite();
        self.selection = None;

        tracing::info!("Undid {}", record);
        Ok(record)
    }

    /// Returns a borrowed view of the session for rendering.
    pub fn frame(&self) -> Frame<'_> {
        let (selected, highlights) = match &self.selection {
            Some(selection) => (Some(selection.from), selection.destinations.as_slice()),
            None => (None, &[][..]),
        };
        Frame {
            board: &self.board,
            turn: self.turn,
            selected,
            highlights,
            history: &self.history,
        }
    }

    /// Draws the session with `renderer`.
    pub fn render<R: Render + ?Sized>(&self, renderer: &mut R) {
        renderer.render(&self.frame());
    }
}
