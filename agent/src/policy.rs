//! Decision logic.

use protocol::{aux::Action, GameInfo, TurnState};
use rand::Rng;

/// Trait for agent decision logic.
///
/// The turn loop hands every parsed turn to the policy and answers the
/// host with whatever it returns. Implement this to replace the random
/// example with something that actually looks at the state.
pub trait Policy {
	/// Choose the action to answer the current turn with.
	fn choose(&mut self, info: &GameInfo, state: &TurnState) -> Action;
}

/// The example policy. It ignores the state entirely and draws a uniform
/// action from one generator created at startup and reused every turn.
#[derive(Debug)]
pub struct RandomPolicy<G> {
	rng: G,
}

impl<G: Rng> RandomPolicy<G> {
	/// Return a new [`RandomPolicy`] drawing from `rng`.
	pub fn new(rng: G) -> Self {
		Self { rng }
	}
}

impl<G: Rng> Policy for RandomPolicy<G> {
	fn choose(&mut self, _info: &GameInfo, _state: &TurnState) -> Action {
		self.rng.gen()
	}
}
