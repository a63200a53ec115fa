//! Snake abstractions.

use crate::aux::Coordinates;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Snake reported by the host for a single turn.
///
/// The body arrives on the wire as a flat list of integers, alternating
/// x and y values. It is kept exactly as received;
/// [`coords`](Self::coords) pairs it up on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Snake {
	id: i32,
	body: Vec<i32>,
}

impl Snake {
	/// Return a new [`Snake`].
	pub fn new(id: i32, body: Vec<i32>) -> Self {
		Self { id, body }
	}

	/// Return snake's identifier.
	pub fn id(&self) -> i32 {
		self.id
	}

	/// Return the flat body list exactly as it appeared on the wire.
	pub fn body(&self) -> &[i32] {
		&self.body
	}

	/// Return the body paired into [`Coordinates`]. A trailing value
	/// without a partner carries no position and is dropped.
	pub fn coords(&self) -> Vec<Coordinates> {
		self.body
			.iter()
			.tuples()
			.map(|(&x, &y)| Coordinates::new(x, y))
			.collect()
	}

	/// Return snake's length (amount of body points).
	pub fn len(&self) -> usize {
		self.body.len() / 2
	}

	/// Return true if the host sent no body points.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
