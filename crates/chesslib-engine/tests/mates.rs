//! End-to-end mate scenarios played through validated move application.

use chesslib_core::{Color, KingState, Move};
use chesslib_engine::{refresh_moves, Board};

/// Plays a sequence of moves alternating from White, validating each one,
/// and returns the side to move afterwards.
fn play(board: &mut Board, moves: &[&str]) -> Color {
    let mut side = Color::White;
    for labels in moves {
        let m = Move::from_labels(labels).expect("well-formed move label");
        assert!(
            board.apply_move(m, side, true),
            "move {} for {} was rejected",
            labels,
            side
        );
        side = side.opposite();
    }
    side
}

#[test]
fn fools_mate() {
    let mut board = Board::startpos();
    let side = play(&mut board, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert_eq!(side, Color::White);

    let ctx = refresh_moves(&board, side);
    assert_eq!(ctx.king_safety(Color::White), KingState::Checkmate);
    assert_eq!(ctx.king_safety(Color::Black), KingState::Safe);
    assert!(ctx.moves.is_empty());
}

#[test]
fn scholars_mate() {
    let mut board = Board::startpos();
    let side = play(
        &mut board,
        &["e2e4", "e7e5", "f1c4", "g8f6", "d1h5", "b8c6", "h5f7"],
    );
    assert_eq!(side, Color::Black);

    let ctx = refresh_moves(&board, side);
    assert_eq!(ctx.king_safety(Color::Black), KingState::Checkmate);
    assert!(ctx.moves.is_empty());
}

#[test]
fn mate_threat_is_only_check_when_escapable() {
    let mut board = Board::startpos();
    // Premature queen raid: check that can be parried.
    let side = play(&mut board, &["e2e4", "f7f6", "d1h5"]);
    assert_eq!(side, Color::Black);

    let ctx = refresh_moves(&board, side);
    assert_eq!(ctx.king_safety(Color::Black), KingState::Check);
    assert!(ctx.moves.contains(Move::from_labels("g7g6").unwrap()));
}
