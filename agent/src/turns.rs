//! The turn loop.
//!
//! One call to [`run`] drives a whole game: the initialization record,
//! then one read-decide-write cycle per turn until the host closes the
//! stream. The loop is strictly sequential and keeps no state between
//! turns besides the [`GameInfo`](protocol::GameInfo) read at startup.

use crate::policy::Policy;
use protocol::{reader::StateReader, writer::write_action, Result};
use std::io::{BufRead, Write};

/// Drive the read-decide-write cycle until the host closes the stream.
///
/// Diagnostics go through the log facade (standard error once the
/// logger is initialized); `output` receives nothing but answer lines.
/// Returns `Ok` when the host closes the stream between turns and an
/// error on the first malformed line, without answering that turn.
pub fn run<R, W, P>(input: R, output: &mut W, policy: &mut P) -> Result<()>
where
	R: BufRead,
	W: Write,
	P: Policy,
{
	let mut reader = StateReader::new(input);

	let info = reader.read_info()?;
	log::info!(
		"joined a {}x{} arena as snake {}",
		info.width,
		info.height,
		info.my_id
	);

	while let Some(state) = reader.next_turn()? {
		if log::log_enabled!(log::Level::Trace) {
			log::trace!("turn state: {}", serde_json::to_string(&state)?);
		}

		let action = policy.choose(&info, &state);
		log::info!("I am snake {} and I chose action {}", info.my_id, action);

		write_action(output, action)?;
	}

	log::info!("host closed the stream, game over");
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::policy::RandomPolicy;
	use rand::{rngs::StdRng, SeedableRng};

	fn run_over(input: &str) -> (bool, String) {
		let mut output = Vec::new();
		let mut policy = RandomPolicy::new(StdRng::seed_from_u64(7));
		let result = run(input.as_bytes(), &mut output, &mut policy);
		(result.is_ok(), String::from_utf8(output).unwrap())
	}

	#[test]
	fn one_turn_game() {
		// A 2x2 arena, id 1, one turn: no apples, one snake 0 at (0, 0),
		// then the host closes the stream.
		let (ok, output) = run_over("2 2\n1\n0\n1\n0 0 0\n");
		assert!(ok);

		let lines: Vec<&str> = output.lines().collect();
		assert_eq!(lines.len(), 1);
		assert!(lines[0].parse::<u8>().unwrap() < 4);
	}

	#[test]
	fn every_turn_answers_once() {
		let mut input = String::from("5 5\n0\n");
		for _ in 0..20 {
			input.push_str("1\n2 3\n2\n0 0 0 1 0\n1 4 4\n");
		}

		let (ok, output) = run_over(&input);
		assert!(ok);
		assert_eq!(output.lines().count(), 20);
		for line in output.lines() {
			assert!(line.parse::<u8>().unwrap() < 4);
		}
	}

	#[test]
	fn malformed_count_stops_before_answering() {
		let (ok, output) = run_over("2 2\n1\nmany\n");
		assert!(!ok);
		assert!(output.is_empty());
	}

	#[test]
	fn garbage_count_after_first_turn() {
		// One well-formed turn, then a count line holding three fields.
		// The first turn is answered, the second never is.
		let (ok, output) = run_over("2 2\n1\n0\n0\n1 0 0\n");
		assert!(!ok);

		let lines: Vec<&str> = output.lines().collect();
		assert_eq!(lines.len(), 1);
		assert!(lines[0].parse::<u8>().unwrap() < 4);
	}

	#[test]
	fn truncated_handshake() {
		let (ok, output) = run_over("2 2\n");
		assert!(!ok);
		assert!(output.is_empty());
	}

	#[test]
	fn protocol_stream_carries_nothing_but_actions() {
		let (ok, output) = run_over("3 3\n2\n1\n1 1\n1\n0 0 0\n");
		assert!(ok);
		for line in output.lines() {
			assert!(line.chars().all(|c| c.is_ascii_digit()));
		}
	}
}
