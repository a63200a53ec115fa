use agent::{policy::RandomPolicy, turns};
use rand::{rngs::StdRng, SeedableRng};
use std::io;

fn main() {
	logger::init_logger();
	let settings = init_settings(init_cli());

	let rng = match settings.seed {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_entropy(),
	};

	let stdin = io::stdin();
	let stdout = io::stdout();

	if let Err(e) = turns::run(
		stdin.lock(),
		&mut stdout.lock(),
		&mut RandomPolicy::new(rng),
	) {
		log::error!("agent stopped: {}", e);
		std::process::exit(1);
	}
}

fn init_cli() -> clap::ArgMatches<'static> {
	use clap::{App, Arg};

	App::new("Snake Arena Example Agent")
		.about("Answers every turn with a random action. Swap the policy for your own")
		.arg(
			Arg::with_name("seed")
				.short("s")
				.long("seed")
				.value_name("NUMBER")
				.help("Seeds the random generator for reproducible runs. Default is an entropy seed"),
		)
		.get_matches()
}

struct Settings {
	seed: Option<u64>,
}

fn init_settings(matches: clap::ArgMatches) -> Settings {
	Settings {
		seed: matches
			.value_of("seed")
			.map(|val| val.parse::<u64>().expect("Parsing seed argument")),
	}
}
