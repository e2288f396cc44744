use reversi_game::ai::greedy::GreedyBot;
use reversi_game::ai::Bot;
use reversi_game::board::Player;
use reversi_game::interface::console::{ConsoleGame, ConsoleSettings, Side};
use reversi_game::reversi::{coord_to_str, ReversiBoard};
use reversi_game::util::tiny::consistent_rng;

fn human_first() -> ConsoleSettings {
    ConsoleSettings {
        show_hints: false,
        first: Some(Side::Human),
    }
}

/// Run a console session on `input`, returns the output and the log.
fn run_session(settings: ConsoleSettings, input: &str) -> (String, String) {
    let mut game = ConsoleGame::new(settings, GreedyBot::new(consistent_rng()), consistent_rng());

    let mut output = vec![];
    let mut log = vec![];
    game.run(input.as_bytes(), &mut output, &mut log).unwrap();

    let output = String::from_utf8(output).unwrap();
    let log = String::from_utf8(log).unwrap();
    println!("{}", output);
    println!("{}", log);
    (output, log)
}

#[test]
fn quit_immediately() {
    let (output, log) = run_session(human_first(), "black\nquit\n");

    assert!(output.starts_with("Welcome to Reversi!\n"));
    assert!(output.contains("You play black and go first."));
    assert!(output.contains("Your move (a1-h8, hints to toggle hints, quit to exit): "));
    assert!(output.ends_with("Thanks for playing!\n"));

    assert!(log.contains("> black\n"));
    assert!(log.contains("> quit\n"));
    assert!(log.contains("# new game, human black, first Human\n"));
}

#[test]
fn end_of_input() {
    let (output, log) = run_session(human_first(), "");
    assert_eq!("Welcome to Reversi!\nDo you want to play black (x) or white (o)? ", output);
    assert!(log.contains("# end of input"));

    // running out during a game ends the session like quitting
    let (output, _) = run_session(human_first(), "white\n");
    assert!(output.ends_with("Thanks for playing!\n"));
}

#[test]
fn invalid_color_asks_again() {
    let (output, _) = run_session(human_first(), "red\n\nO\nquit\n");

    assert_eq!(3, output.matches("Do you want to play black (x) or white (o)? ").count());
    assert!(output.contains("You play white and go first."));
}

#[test]
fn toggle_hints() {
    let (output, _) = run_session(human_first(), "black\nhints\nh\nquit\n");

    let boards = output.split("Your move").collect::<Vec<_>>();
    assert_eq!(4, boards.len());

    assert!(!boards[0].contains('*'));
    assert_eq!(4, boards[1].matches('*').count());
    assert!(boards[1].contains("black moves: 4"));
    assert!(!boards[2].contains('*'));
}

#[test]
fn hints_setting_persists() {
    let mut game = ConsoleGame::new(human_first(), GreedyBot::new(consistent_rng()), consistent_rng());
    assert!(!game.settings().show_hints);

    let input = "black\nhints\nquit\n";
    game.run(input.as_bytes(), std::io::sink(), std::io::sink()).unwrap();
    assert!(game.settings().show_hints);
    assert_eq!(Some(Side::Human), game.settings().first);

    // the next session starts with hints still on
    let mut output = vec![];
    game.run("white\nquit\n".as_bytes(), &mut output, std::io::sink()).unwrap();
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("white moves: 4"));
}

#[test]
fn hints_from_settings() {
    let settings = ConsoleSettings {
        show_hints: true,
        first: Some(Side::Human),
    };
    let (output, _) = run_session(settings, "white\nquit\n");
    assert!(output.contains("white moves: 4"));
}

#[test]
fn bad_moves_are_rejected() {
    let (output, _) = run_session(human_first(), "black\na1\nzz\nd4\nc4\nquit\n");

    assert!(output.contains("You cannot play a1."));
    assert!(output.contains("Invalid input, could not understand \"zz\"."));
    assert!(output.contains("You cannot play d4."));
    assert!(!output.contains("You cannot play c4."));
    assert!(output.contains("The computer plays "));
}

#[test]
fn computer_first() {
    let settings = ConsoleSettings {
        show_hints: false,
        first: Some(Side::Computer),
    };
    let (output, log) = run_session(settings, "white\nquit\n");

    assert!(output.contains("You play white, the computer goes first."));
    let computer = output.find("The computer plays ").unwrap();
    let prompt = output.find("Your move").unwrap();
    assert!(computer < prompt);
    assert!(log.contains("\n< "));
}

/// Play a full game where the human always picks the first legal move,
/// predicting the computer by running an identical bot alongside.
fn scripted_game() -> (Vec<String>, ReversiBoard, usize) {
    let mut bot = GreedyBot::new(consistent_rng());
    let human = Player::Black;

    let mut board = ReversiBoard::default();
    let mut next = human;
    let mut inputs = vec![];
    let mut computer_moves = 0;

    while board.outcome().is_none() {
        if board.has_legal_move(next) {
            let mv = if next == human {
                let mv = board.legal_moves(next)[0];
                inputs.push(coord_to_str(mv));
                mv
            } else {
                computer_moves += 1;
                bot.select_move(&board, next).unwrap()
            };
            assert!(board.apply_move(next, mv));
        }
        next = next.other();
    }

    (inputs, board, computer_moves)
}

#[test]
fn full_game() {
    let (moves, board, computer_moves) = scripted_game();
    let score = board.score();

    let input = format!("black\n{}\nno\n", moves.join("\n"));
    let (output, log) = run_session(human_first(), &input);

    assert_eq!(computer_moves, output.matches("The computer plays ").count());
    assert_eq!(computer_moves, log.matches("\n< ").count());

    let expected = format!(
        "Black scored {} points, white scored {} points.",
        score[Player::Black],
        score[Player::White]
    );
    assert!(output.contains(&expected), "missing {:?}", expected);

    let result_line = match score[Player::Black].cmp(&score[Player::White]) {
        std::cmp::Ordering::Greater => format!("You beat the computer by {} points! Congratulations!", score.margin()),
        std::cmp::Ordering::Less => format!("You lost. The computer beat you by {} points.", score.margin()),
        std::cmp::Ordering::Equal => "The game was a tie!".to_owned(),
    };
    assert!(output.contains(&result_line), "missing {:?}", result_line);

    assert!(output.contains("Do you want to play again? (yes or no) "));
    assert!(output.ends_with("Thanks for playing!\n"));
    assert!(log.contains(&format!("# game over, {}", score)));
}

#[test]
fn play_again() {
    let (moves, _, _) = scripted_game();

    let input = format!("black\n{}\nmaybe\nyes\nwhite\nquit\n", moves.join("\n"));
    let (output, _) = run_session(human_first(), &input);

    assert_eq!(1, output.matches("Welcome to Reversi!").count());
    assert_eq!(2, output.matches("Do you want to play again? (yes or no) ").count());
    assert!(output.contains("You play white and go first."));
    assert!(output.ends_with("Thanks for playing!\n"));
}
