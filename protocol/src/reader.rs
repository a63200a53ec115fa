//! Reading side of the wire contract.
//!
//! [`StateReader`] wraps any [`BufRead`] and understands the two records
//! the host sends: the one-time initialization pair of lines and the
//! per-turn state block. Reading is strictly sequential and blocking;
//! the reader holds nothing beyond the wrapped stream, so each returned
//! [`TurnState`] is independent of the previous one.

use crate::{
	apple::Apple,
	aux::Coordinates,
	error::ProtocolError,
	snake::Snake,
	GameInfo, Result, TurnState,
};
use std::{io::BufRead, str::FromStr};

/// Reader for the host's side of the conversation.
pub struct StateReader<R> {
	input: R,
}

impl<R: BufRead> StateReader<R> {
	/// Return a new [`StateReader`] wrapping `input`.
	pub fn new(input: R) -> Self {
		Self { input }
	}

	/// Read the one-time initialization record: the arena size line,
	/// then the id the host assigned to this agent's snake.
	///
	/// The handshake is mandatory, so end of stream anywhere inside it
	/// is [`ProtocolError::UnexpectedEof`].
	pub fn read_info(&mut self) -> Result<GameInfo> {
		let size = self.require_line()?;
		let fields = split_fields(&size, 2)?;
		let (width, height) = (parse_token(fields[0])?, parse_token(fields[1])?);

		let id = self.require_line()?;
		let my_id = parse_token(id.trim())?;

		Ok(GameInfo {
			width,
			height,
			my_id,
		})
	}

	/// Read one turn's state block.
	///
	/// Return `Ok(None)` if the host closed the stream at the record
	/// boundary, which is how a finished game looks to an agent. End of
	/// stream anywhere later in the block means the host died mid-turn
	/// and is an error.
	pub fn next_turn(&mut self) -> Result<Option<TurnState>> {
		let num_apples: usize = match self.read_line()? {
			Some(line) => parse_token(line.trim())?,
			None => return Ok(None),
		};

		let mut apples = Vec::with_capacity(num_apples);
		for _ in 0..num_apples {
			let line = self.require_line()?;
			let fields = split_fields(&line, 2)?;
			apples.push(Apple::new(Coordinates::new(
				parse_token(fields[0])?,
				parse_token(fields[1])?,
			)));
		}

		let count = self.require_line()?;
		let num_snakes: usize = parse_token(count.trim())?;

		let mut snakes = Vec::with_capacity(num_snakes);
		for _ in 0..num_snakes {
			let line = self.require_line()?;
			let fields = split_fields(&line, 2)?;
			let body = fields[1..]
				.iter()
				.copied()
				.map(parse_token::<i32>)
				.collect::<Result<Vec<_>>>()?;
			snakes.push(Snake::new(parse_token(fields[0])?, body));
		}

		Ok(Some(TurnState { apples, snakes }))
	}

	/// Read one line, stripped of the trailing newline. Return `None` on
	/// end of stream.
	fn read_line(&mut self) -> Result<Option<String>> {
		let mut line = String::new();
		if self.input.read_line(&mut line)? == 0 {
			return Ok(None);
		}
		while line.ends_with('\n') || line.ends_with('\r') {
			line.pop();
		}
		Ok(Some(line))
	}

	/// Like [`read_line`](Self::read_line), but end of stream is a
	/// protocol error.
	fn require_line(&mut self) -> Result<String> {
		match self.read_line()? {
			Some(line) => Ok(line),
			None => Err(Box::new(ProtocolError::UnexpectedEof)),
		}
	}
}

/// Split a line into whitespace-separated fields, requiring at least
/// `expected` of them.
fn split_fields(line: &str, expected: usize) -> Result<Vec<&str>> {
	let fields: Vec<&str> = line.split_whitespace().collect();
	if fields.len() < expected {
		Err(Box::new(ProtocolError::MissingTokens {
			expected,
			found: fields.len(),
		}))
	} else {
		Ok(fields)
	}
}

/// Parse one field, reporting the offending token on failure.
fn parse_token<T: FromStr>(token: &str) -> Result<T> {
	match token.parse() {
		Ok(value) => Ok(value),
		Err(_) => Err(Box::new(ProtocolError::BadInteger(token.to_string()))),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn reader(input: &str) -> StateReader<&[u8]> {
		StateReader::new(input.as_bytes())
	}

	#[test]
	fn info() -> Result<()> {
		let info = reader("40 25\n3\n").read_info()?;
		assert_eq!(info.width, 40);
		assert_eq!(info.height, 25);
		assert_eq!(info.my_id, 3);
		Ok(())
	}

	#[test]
	fn info_with_missing_field() {
		assert!(reader("40\n3\n").read_info().is_err());
	}

	#[test]
	fn info_with_bad_integer() {
		assert!(reader("40 wide\n3\n").read_info().is_err());
	}

	#[test]
	fn info_on_closed_stream() {
		assert!(reader("").read_info().is_err());
	}

	#[test]
	fn full_turn() -> Result<()> {
		let mut reader = reader("2\n1 2\n3 4\n2\n7 0 0 0 1 1 1\n9 5 5\n");
		let state = reader.next_turn()?.unwrap();

		assert_eq!(state.apples.len(), 2);
		assert_eq!(state.apples[1].coords(), Coordinates::new(3, 4));

		assert_eq!(state.snakes.len(), 2);
		assert_eq!(state.snakes[0].id(), 7);
		assert_eq!(
			state.snakes[0].coords(),
			vec![(0, 0).into(), (0, 1).into(), (1, 1).into()]
		);
		assert_eq!(state.snakes[1].body(), &[5, 5]);

		Ok(())
	}

	#[test]
	fn closed_stream_between_turns_is_game_over() -> Result<()> {
		let mut reader = reader("1\n4 4\n1\n2 1 1\n");
		assert!(reader.next_turn()?.is_some());
		assert!(reader.next_turn()?.is_none());
		Ok(())
	}

	#[test]
	fn closed_stream_inside_a_turn() {
		// Two apples announced, one delivered.
		assert!(reader("2\n1 1\n").next_turn().is_err());
	}

	#[test]
	fn apple_line_with_one_field() {
		assert!(reader("1\n4\n0\n").next_turn().is_err());
	}

	#[test]
	fn snake_line_with_one_field() {
		assert!(reader("0\n1\n3\n").next_turn().is_err());
	}

	#[test]
	fn bad_count_token() {
		assert!(reader("three\n").next_turn().is_err());
	}

	#[test]
	fn count_line_with_extra_fields() {
		// A count line is one integer, nothing else.
		assert!(reader("1 0 0\n").next_turn().is_err());
	}
}
