//! Interactive chess game against the tree-search engine.
//!
//! The human plays White by default; the engine answers with moves chosen
//! by its bounded-depth search. Moves are entered as 4-character label
//! pairs (`e2e4`); `quit` or `exit` ends the game.

use chesslib_core::{Color, KingState, Move};
use chesslib_engine::{refresh_moves, Board};
use chesslib_search::build_search_tree;
use std::io::{self, BufRead, Write};

/// Runtime options, parsed by hand from the command line.
struct Options {
    /// Search depth in plies for the engine.
    depth: u16,
    /// Which side the engine plays.
    engine_color: Color,
    /// Render the diagnostic move tree after each engine move.
    show_tree: bool,
}

impl Options {
    const USAGE: &'static str =
        "usage: chesslib-cli [--depth N] [--play-white] [--show-tree]";

    fn parse() -> Result<Self, String> {
        let mut options = Options {
            depth: 3,
            engine_color: Color::Black,
            show_tree: false,
        };

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--depth" => {
                    let value = args.next().ok_or("--depth requires a value")?;
                    options.depth = value
                        .parse()
                        .map_err(|_| format!("invalid depth '{}'", value))?;
                    if options.depth == 0 {
                        return Err("depth must be nonzero".to_string());
                    }
                }
                "--play-white" => options.engine_color = Color::White,
                "--show-tree" => options.show_tree = true,
                "--help" | "-h" => return Err(Self::USAGE.to_string()),
                other => return Err(format!("unknown argument '{}'\n{}", other, Self::USAGE)),
            }
        }

        Ok(options)
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let options = match Options::parse() {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(2);
        }
    };

    let mut board = Board::startpos();
    let mut side = Color::White;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let ctx = refresh_moves(&board, side);
        match ctx.king_safety(side) {
            KingState::Checkmate => {
                println!("{}", board);
                println!("{} wins!", side.opposite());
                return;
            }
            state @ KingState::Check => println!("{} is in {}", side, state),
            KingState::Safe => {}
        }

        if side == options.engine_color {
            let tree = match build_search_tree(&board, side, options.depth) {
                Ok(tree) => tree,
                Err(e) => {
                    tracing::error!(error = %e, "search failed");
                    return;
                }
            };
            let Some(chosen) = tree.best_move() else {
                println!("{} has no moves left", side);
                return;
            };
            tracing::info!(
                %chosen,
                nodes = tree.node_count(),
                depth = tree.depth(),
                "engine plays"
            );
            if options.show_tree {
                let mut stdout = io::stdout().lock();
                if let Err(e) = tree.render(&mut stdout) {
                    tracing::warn!(error = %e, "could not render move tree");
                }
            }
            println!("{} plays: {}", side, chosen);
            board.apply_move(chosen, side, false);
        } else {
            println!("{}", board);
            print!("{} plays: ", side);
            let _ = io::stdout().flush();

            let line = match lines.next() {
                Some(Ok(line)) => line,
                _ => return,
            };
            let input = line.trim();
            if input == "quit" || input == "exit" {
                return;
            }
            let Some(m) = Move::from_labels(input) else {
                println!("moves look like e2e4; try again");
                continue;
            };
            if !board.apply_move(m, side, true) {
                println!("illegal move {}; try again", m);
                continue;
            }
        }

        side = side.opposite();
    }
}
