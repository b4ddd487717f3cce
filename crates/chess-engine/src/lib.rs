//! Move-legality rules and game sessions.
//!
//! This crate provides:
//! - [`RuleSet`] and [`GeometricRules`] - per-piece geometric legality checks
//! - [`Session`] - board, turn, selection and move history with undo
//! - [`Render`] and [`Frame`] - the interface front ends draw through
//!
//! # Architecture
//!
//! Legality is a pure predicate over a [`Board`](chess_core::Board) snapshot.
//! The session is the only mutable state: it asks the rules before every
//! move, records an immutable [`MoveRecord`](chess_core::MoveRecord), and
//! replays records backwards on undo.
//!
//! # Example
//!
//! ```
//! use chess_core::{Color, Square};
//! use chess_engine::{SelectOutcome, Session};
//!
//! let mut session = Session::new();
//! let a2 = Square::from_algebraic("a2").unwrap();
//! let a4 = Square::from_algebraic("a4").unwrap();
//!
//! assert_eq!(session.select(a2), SelectOutcome::Selected(a2));
//! assert!(matches!(session.select(a4), SelectOutcome::Moved(_)));
//! assert_eq!(session.turn(), Color::Black);
//!
//! session.undo().unwrap();
//! assert_eq!(session.turn_indicator(), "White to move");
//! ```

pub mod render;
pub mod rules;
mod session;

pub use render::{Frame, Render};
pub use rules::{is_legal_move, legal_destinations, GeometricRules, RuleSet};
pub use session::{SelectOutcome, Selection, Session, SessionError};
