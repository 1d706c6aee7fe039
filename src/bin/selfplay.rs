//! Selfplay Binary
//!
//! Plays one hand from a stock situation with random legal range-actions
//! and prints its history.
//!
//! Options: --seed, --situation, --limit, --json

use clap::Parser;
use colored::Colorize;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rvr::history::Entry;
use rvr::history::Record;
use rvr::history::Transcript;
use rvr::play::*;
use rvr::ranges::Range;
use rvr::*;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Preset {
    HeadsUp,
    ThreeWay,
}

#[derive(Parser)]
#[command(author, version, about = "Play a range vs. range hand against yourself", long_about = None)]
struct Args {
    /// seed for both the dealer and the decisions
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, value_enum, default_value_t = Preset::HeadsUp)]
    situation: Preset,
    /// play fixed limit instead of no limit
    #[arg(long)]
    limit: bool,
    /// print history as JSON lines
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    log();
    let args = Args::parse();
    let situation = match args.situation {
        Preset::HeadsUp => Situation::heads_up(),
        Preset::ThreeWay => Situation::three_way()?,
    };
    let situation = if args.limit { situation.limit() } else { situation };
    let users = (1..=situation.seats.len() as UserId).collect::<Vec<_>>();
    let engine = Engine::new(Config::from_env());
    let mut dealer = RandomDealer::seeded(args.seed);
    let mut rng = SmallRng::seed_from_u64(args.seed.wrapping_add(1));
    let mut transcript = Transcript::new();
    let now = std::time::SystemTime::now();
    let mut state = engine
        .start(1, &situation, &users, &mut dealer, now)?
        .commit(&mut transcript)?;
    while let Some(seat) = state.current() {
        let options = engine.options(&state, seat)?;
        let action = decide(state.seats()[seat].range(), &options, &mut rng);
        state = engine
            .act(&state, seat, &action, &mut dealer, now)?
            .commit(&mut transcript)?;
    }
    for entry in transcript.entries() {
        match args.json {
            true => println!("{}", serde_json::to_string(entry)?),
            false => println!("{}", paint(entry)),
        }
    }
    if !args.json {
        println!("{}", state);
        println!("factor {:.6}", state.factor());
    }
    Ok(())
}

/// Sends each combo to a random legal branch.
fn decide(range: &Range, options: &CurrentOptions, rng: &mut SmallRng) -> RangeAction {
    let mut branches = [Vec::new(), Vec::new(), Vec::new()];
    for (hole, weight) in range.iter() {
        let i = match rng.random_range(0..10) {
            0..3 if !options.can_check => 0,
            7..10 if options.can_raise => 2,
            _ => 1,
        };
        branches[i].push((*hole, *weight));
    }
    let [fold, passive, aggressive] = branches.map(|combos| combos.into_iter().collect::<Range>());
    let raise_total = match aggressive.is_empty() {
        true => 0,
        false => rng.random_range(options.min_raise_total..=options.max_raise_total),
    };
    RangeAction::new(fold, passive, aggressive, raise_total)
}

fn paint(entry: &Entry) -> String {
    let line = entry.to_string();
    match &entry.record {
        Record::Board { .. } => line.white().bold().to_string(),
        Record::ActionResult(ActionResult::Fold) => line.red().to_string(),
        Record::ActionResult(ActionResult::Passive { .. }) => line.yellow().to_string(),
        Record::ActionResult(ActionResult::Aggressive { .. }) => line.green().to_string(),
        Record::ActionResult(ActionResult::Terminate) => line.magenta().to_string(),
        Record::Timeout => line.red().bold().to_string(),
        Record::UserRange(_) | Record::RangeAction { .. } => line.dimmed().to_string(),
    }
}
