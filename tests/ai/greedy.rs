use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use reversi_game::ai::greedy::GreedyBot;
use reversi_game::ai::Bot;
use reversi_game::board::{NoLegalMoves, Player};
use reversi_game::reversi::{coord_from_str, ReversiBoard};
use reversi_game::util::board_gen::random_board_with_moves;
use reversi_game::util::coord::Coord8;
use reversi_game::util::tiny::consistent_rng;

use crate::util::test_sampler_uniform;

fn c(s: &str) -> Coord8 {
    coord_from_str(s).unwrap()
}

#[test]
fn corner_beats_more_captures() {
    // a1 captures a single chip, h4 captures six
    let board = ReversiBoard::from_rows(
        "
        .ox.....
        ........
        ........
        xoooooo.
        ........
        ........
        ........
        ........
        ",
    )
    .unwrap();

    assert_eq!(vec![c("a1"), c("h4")], board.legal_moves(Player::Black));
    assert_eq!(6, board.check_move(Player::Black, c("h4")).unwrap().len());

    for seed in 0..100 {
        let mut bot = GreedyBot::new(SmallRng::seed_from_u64(seed));
        assert_eq!(Ok(c("a1")), bot.select_move(&board, Player::Black));
    }
}

#[test]
fn most_captures_without_corners() {
    let board = ReversiBoard::from_rows(
        "
        ........
        ........
        ........
        xoooooo.
        ........
        ..o.....
        ..x.....
        ........
        ",
    )
    .unwrap();

    assert_eq!(vec![c("h4"), c("c5")], board.legal_moves(Player::Black));

    for seed in 0..100 {
        let mut bot = GreedyBot::new(SmallRng::seed_from_u64(seed));
        assert_eq!(Ok(c("h4")), bot.select_move(&board, Player::Black));
    }
}

#[test]
fn random_corners_uniform() {
    let board = ReversiBoard::from_rows(
        "
        .ox.....
        ........
        ........
        xoooooo.
        ........
        ........
        ........
        .....xo.
        ",
    )
    .unwrap();

    assert_eq!(vec![c("a1"), c("h4"), c("h8")], board.legal_moves(Player::Black));

    let mut bot = GreedyBot::new(consistent_rng());
    test_sampler_uniform(&[c("a1"), c("h8")], || bot.select_move(&board, Player::Black).unwrap());
}

#[test]
fn start_ties_uniform() {
    let board = ReversiBoard::default();

    for player in Player::BOTH {
        let mut bot = GreedyBot::new(consistent_rng());
        test_sampler_uniform(&board.legal_moves(player), || bot.select_move(&board, player).unwrap());
    }
}

/// The first move in `order` that leaves `player` with the most chips.
fn first_best(board: &ReversiBoard, player: Player, order: &[Coord8]) -> Coord8 {
    let count = |mv: Coord8| board.clone_and_apply(player, mv).unwrap().score()[player];
    let best = order.iter().map(|&mv| count(mv)).max().unwrap();
    *order.iter().find(|&&mv| count(mv) == best).unwrap()
}

#[test]
fn start_ties_keep_first_shuffled() {
    let board = ReversiBoard::default();

    for player in Player::BOTH {
        for seed in 0..50 {
            let mut order = board.legal_moves(player);
            order.shuffle(&mut SmallRng::seed_from_u64(seed));

            let mut bot = GreedyBot::new(SmallRng::seed_from_u64(seed));
            assert_eq!(Ok(order[0]), bot.select_move(&board, player), "order {:?}", order);
        }
    }
}

#[test]
fn partial_ties_keep_first_shuffled() {
    // d4 and d6 both capture two chips, g6 only one
    let board = ReversiBoard::from_rows(
        "
        ........
        ........
        ........
        xoo.....
        ........
        xoo.....
        ......o.
        ......x.
        ",
    )
    .unwrap();

    assert_eq!(vec![c("d4"), c("d6"), c("g6")], board.legal_moves(Player::Black));

    let mut picked = vec![];
    for seed in 0..50 {
        let mut order = board.legal_moves(Player::Black);
        order.shuffle(&mut SmallRng::seed_from_u64(seed));
        let expected = first_best(&board, Player::Black, &order);

        let mut bot = GreedyBot::new(SmallRng::seed_from_u64(seed));
        let selected = bot.select_move(&board, Player::Black).unwrap();
        assert_eq!(expected, selected, "order {:?}", order);
        picked.push(selected);
    }

    assert!(picked.contains(&c("d4")));
    assert!(picked.contains(&c("d6")));
    assert!(!picked.contains(&c("g6")));
}

#[test]
fn greedy_random_positions() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut bot = GreedyBot::new(SmallRng::seed_from_u64(1));

    for _ in 0..200 {
        let n = rng.gen_range(0..60);
        let (board, next) = random_board_with_moves(&ReversiBoard::default(), n, &mut rng);
        println!("{}", board);

        let moves = board.legal_moves(next);
        let selected = bot.select_move(&board, next);

        if moves.is_empty() {
            assert_eq!(Err(NoLegalMoves(next)), selected);
            continue;
        }

        let selected = selected.unwrap();
        assert!(moves.contains(&selected));

        if moves.iter().any(|mv| mv.is_corner()) {
            assert!(selected.is_corner(), "skipped a corner, played {}", selected);
        } else {
            let count = |mv: Coord8| board.clone_and_apply(next, mv).unwrap().score()[next];
            assert_eq!(
                count(first_best(&board, next, &moves)),
                count(selected),
                "played {} which is not the best move",
                selected
            );
        }
    }
}

#[test]
fn same_seed_same_moves() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut bot_a = GreedyBot::new(SmallRng::seed_from_u64(42));
    let mut bot_b = GreedyBot::new(SmallRng::seed_from_u64(42));

    for _ in 0..100 {
        let n = rng.gen_range(0..40);
        let (board, next) = random_board_with_moves(&ReversiBoard::default(), n, &mut rng);
        assert_eq!(bot_a.select_move(&board, next), bot_b.select_move(&board, next));
    }
}

#[test]
fn no_moves() {
    let mut bot = GreedyBot::new(consistent_rng());
    assert_eq!(
        Err(NoLegalMoves(Player::Black)),
        bot.select_move(&ReversiBoard::empty(), Player::Black)
    );

    let board = ReversiBoard::from_rows(
        "
        .oxxxxxx
        ........
        ........
        ........
        ........
        ........
        ........
        ........
        ",
    )
    .unwrap();
    assert_eq!(Err(NoLegalMoves(Player::White)), bot.select_move(&board, Player::White));
    assert_eq!(Ok(c("a1")), bot.select_move(&board, Player::Black));
}
