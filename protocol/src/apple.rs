//! Apple abstractions.

use crate::aux::Coordinates;
use serde::{Deserialize, Serialize};

/// Apple reported by the host for a single turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Apple {
	coords: Coordinates,
}

impl Apple {
	/// Return a new [`Apple`].
	pub fn new(coords: Coordinates) -> Self {
		Self { coords }
	}

	/// Return apple's coordinates.
	pub fn coords(&self) -> Coordinates {
		self.coords
	}
}
