//! Wire contract crate for the snake arena.
//!
//! # Communication between host and agent
//! The arena host launches every agent as a child process and talks to it
//! over the agent's standard streams. Game state arrives on standard
//! input, the chosen action leaves on standard output, and anything the
//! agent prints to standard error is surfaced to humans only — the host
//! never parses it.
//!
//! Every message is one line of space-separated decimal integers.
//!
//! ## Initialization
//! Sent once, before the first turn:
//! ```text
//! <width> <height>
//! <my_id>
//! ```
//! `width` and `height` are the arena dimensions, `my_id` is the
//! identifier the host assigned to this agent's snake.
//!
//! ## One turn
//! Repeated until the host closes the stream:
//! ```text
//! <num_apples>
//! <x> <y>                  -- repeated num_apples times
//! <num_snakes>
//! <id> <coord>...          -- repeated num_snakes times
//! ```
//! A snake line carries the snake's identifier followed by its body as a
//! flat list of coordinate values; the line must hold at least two
//! fields.
//!
//! ## Answer
//! After reading a turn the agent writes exactly one line back:
//! ```text
//! <action>
//! ```
//! One integer in the `0..4` range. Which integer stands for which
//! movement direction is defined by the host, not by this crate.
//!
//! ## Failure
//! A line that cannot be parsed is fatal: the agent stops answering and
//! the host treats it as a disconnected player. The only benign way for
//! a game to end is the host closing the stream between two turns.

pub mod apple;
pub mod aux;
pub mod error;
pub mod reader;
pub mod snake;
pub mod writer;

/// Alias for the standard [`Result`](std::result::Result) type with a
/// boxed error, used all over this crate.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Common reexports in one place.
pub mod prelude {
	pub use crate::{
		apple::Apple,
		aux::{Action, Coordinates},
		reader::StateReader,
		snake::Snake,
		writer::write_action,
		GameInfo, TurnState,
	};
}

use apple::Apple;
use serde::{Deserialize, Serialize};
use snake::Snake;

/// Parameters the host announces once, before the first turn. They never
/// change for the lifetime of a game.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GameInfo {
	/// Arena width in cells.
	pub width: u32,

	/// Arena height in cells.
	pub height: u32,

	/// Identifier the host assigned to this agent's snake.
	pub my_id: i32,
}

/// Everything the host reports about one turn.
///
/// The state is transient: the reader builds a fresh value per turn and
/// nothing here survives into the next one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TurnState {
	/// Apples currently on the arena.
	pub apples: Vec<Apple>,

	/// Snakes currently on the arena, this agent's one included.
	pub snakes: Vec<Snake>,
}
