//! Writing side of the wire contract.

use crate::{aux::Action, Result};
use std::io::Write;

/// Write one answer line to the protocol stream: the decimal form of
/// `action`, newline-terminated, then an explicit flush so the host can
/// read the answer promptly.
pub fn write_action<W: Write>(output: &mut W, action: Action) -> Result<()> {
	writeln!(output, "{}", action)?;
	output.flush()?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn exact_wire_bytes() -> Result<()> {
		let mut output = Vec::new();
		write_action(&mut output, Action::new(3).unwrap())?;
		assert_eq!(output, b"3\n");
		Ok(())
	}
}
