use std::io::Write;
use std::str::FromStr;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use reversi_game::ai::greedy::GreedyBot;
use reversi_game::interface::console::{ConsoleGame, ConsoleSettings};

fn main() -> std::io::Result<()> {
    let mut seed = None;
    let mut log = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--log" => log = true,
            "--seed" => match args.next().as_deref().map(u64::from_str) {
                Some(Ok(value)) => seed = Some(value),
                _ => return usage(),
            },
            _ => return usage(),
        }
    }

    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let bot = GreedyBot::new(SmallRng::seed_from_u64(rng.gen()));
    let mut game = ConsoleGame::new(ConsoleSettings::default(), bot, rng);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    let log: Box<dyn Write> = if log {
        Box::new(std::io::stderr())
    } else {
        Box::new(std::io::sink())
    };

    game.run(stdin.lock(), stdout.lock(), log)
}

fn usage() -> std::io::Result<()> {
    eprintln!("Usage: reversi [--seed N] [--log]");
    std::process::exit(2)
}
