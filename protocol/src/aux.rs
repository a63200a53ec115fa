//! Auxiliary abstractions.

use rand::{
	distributions::{Distribution, Standard},
	Rng,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coordinates abstraction.
///
/// The host addresses arena cells with integer coordinates. Where the
/// origin sits and which way the axes grow is the host's business; an
/// agent only ever echoes coordinates back in its diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Coordinates {
	/// Coordinate relative to the abscissa axis.
	pub x: i32,

	/// Coordinate relative to the ordinate axis.
	pub y: i32,
}

impl Coordinates {
	/// Return a new [`Coordinates`].
	pub fn new(x: i32, y: i32) -> Self {
		Self { x, y }
	}
}

impl From<(i32, i32)> for Coordinates {
	fn from(t: (i32, i32)) -> Self {
		Self::new(t.0, t.1)
	}
}

impl From<Coordinates> for (i32, i32) {
	fn from(c: Coordinates) -> Self {
		(c.x, c.y)
	}
}

impl fmt::Display for Coordinates {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {})", self.x, self.y)
	}
}

/// One of the four movement actions an agent may answer a turn with.
///
/// The wire encodes an action as an integer in the `0..4` range. The
/// mapping from integers to movement directions is part of the host's
/// contract; this crate keeps the value opaque and never names
/// directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Action(u8);

impl Action {
	/// How many distinct actions the protocol defines.
	pub const COUNT: u8 = 4;

	/// Return a new [`Action`] if `value` is inside the `0..4` range.
	pub fn new(value: u8) -> Option<Self> {
		(value < Self::COUNT).then(|| Self(value))
	}

	/// Return the wire value of the action.
	pub fn value(self) -> u8 {
		self.0
	}
}

impl Distribution<Action> for Standard {
	fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Action {
		Action(rng.gen_range(0..Action::COUNT))
	}
}

impl fmt::Display for Action {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::{rngs::StdRng, SeedableRng};

	#[test]
	fn coords_display() {
		assert_eq!(Coordinates::new(3, -4).to_string(), "(3, -4)");
	}

	#[test]
	fn coords_tuple_conversions() {
		let coords: Coordinates = (7, 2).into();
		assert_eq!(coords, Coordinates::new(7, 2));
		assert_eq!(<(i32, i32)>::from(coords), (7, 2));
	}

	#[test]
	fn action_bounds() {
		assert!(Action::new(0).is_some());
		assert!(Action::new(3).is_some());
		assert!(Action::new(4).is_none());
	}

	#[test]
	fn action_displays_as_wire_integer() {
		assert_eq!(Action::new(2).unwrap().to_string(), "2");
	}

	#[test]
	fn sampled_actions_stay_in_range() {
		let mut rng = StdRng::seed_from_u64(0);
		for _ in 0..1000 {
			let action: Action = rng.gen();
			assert!(action.value() < Action::COUNT);
		}
	}
}
