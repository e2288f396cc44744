#![warn(missing_debug_implementations)]
#![allow(clippy::new_without_default)]

//! A [Reversi](https://en.wikipedia.org/wiki/Reversi) engine with a simple computer opponent.
//!
//! # Features
//!
//! * The board and rules as [ReversiBoard](crate::reversi::ReversiBoard):
//!     move validation with the set of captured chips, legal move enumeration, applying moves and scoring.
//! * Game-playing bots, see [Bot](crate::ai::Bot):
//!     * [GreedyBot](crate::ai::greedy::GreedyBot),
//!         which takes corners when it can and otherwise maximizes its chip count one move ahead.
//!     * [RandomBot](crate::ai::simple::RandomBot),
//!         which simply picks a random move.
//! * A console game of a human against a bot, see [ConsoleGame](crate::interface::console::ConsoleGame).
//! * A bot vs bot game runner to compare playing strength, see [bot_game](crate::util::bot_game).
//!
//! # Examples
//!
//! ## List the legal moves on a board and play the first one.
//!
//! ```
//! # use reversi_game::board::Player;
//! # use reversi_game::reversi::ReversiBoard;
//! let mut board = ReversiBoard::default();
//! println!("{}", board);
//!
//! let moves = board.legal_moves(Player::Black);
//! assert_eq!(moves.len(), 4);
//!
//! let captures = board.check_move(Player::Black, moves[0]).unwrap();
//! println!("Playing {} captures {:?}", moves[0], captures);
//! assert!(board.apply_move(Player::Black, moves[0]));
//! println!("{}", board);
//! ```
//!
//! ## Ask the computer for a move
//!
//! ```
//! # use reversi_game::ai::Bot;
//! # use reversi_game::ai::greedy::GreedyBot;
//! # use reversi_game::board::Player;
//! # use reversi_game::reversi::ReversiBoard;
//! # use rand::thread_rng;
//! let board = ReversiBoard::default();
//! let mut bot = GreedyBot::new(thread_rng());
//! println!("{:?}", bot.select_move(&board, Player::White));
//! ```

pub mod board;
pub mod reversi;

pub mod wdl;

pub mod ai;

pub mod util;

pub mod interface;
