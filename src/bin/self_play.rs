use rand::rngs::SmallRng;
use rand::SeedableRng;

use reversi_game::ai::greedy::GreedyBot;
use reversi_game::ai::simple::RandomBot;
use reversi_game::util::bot_game;

fn main() {
    let result = bot_game::run(
        GreedyBot::new(SmallRng::seed_from_u64(0)),
        RandomBot::new(SmallRng::seed_from_u64(1)),
        500,
        true,
        |wdl, replay| {
            if wdl.sum() % 100 == 0 {
                println!("{:?} after {} moves, last score {}", wdl, replay.moves.len(), replay.score);
            }
        },
    );

    println!("{:?}", result);
}
