//! Errors returned by functions related to this crate.

use std::{error, fmt};

/// Error type returned when a line from the host cannot be understood.
///
/// Every variant is fatal to the game: the protocol defines no way to
/// resynchronize after a malformed line, so the caller is expected to
/// log the error and stop answering.
#[derive(Debug, Clone)]
pub enum ProtocolError {
	/// The host closed the stream in the middle of a record.
	///
	/// Closing the stream between two turn records is a normal game end
	/// and is not reported through this variant.
	UnexpectedEof,

	/// A line carried fewer fields than its record requires. The
	/// variant arguments hold the required minimum and the actual count.
	MissingTokens {
		/// How many fields the record requires at least.
		expected: usize,

		/// How many fields the line actually carried.
		found: usize,
	},

	/// A field which should have been an integer was not one. The
	/// offending token is kept in the variant argument.
	BadInteger(String),
}

impl fmt::Display for ProtocolError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::UnexpectedEof => {
				write!(f, "host closed the stream in the middle of a record")
			}
			Self::MissingTokens { expected, found } => write!(
				f,
				"line carries {} fields but the record requires at least {}",
				found, expected
			),
			Self::BadInteger(token) => {
				write!(f, "can't parse \"{}\" as an integer", token)
			}
		}
	}
}

impl error::Error for ProtocolError {}
