//! Check, checkmate and stalemate detection.

use super::play;
use crate::board::{Color, GameStatus, Position, PositionBuilder};

#[test]
fn test_fools_mate() {
    let mut position = Position::new();
    play(&mut position, &["f2f3", "e7e5", "g2g4", "d8h4"]);

    let status = position.status(Color::White);
    assert_eq!(status, GameStatus::Checkmate);
    assert_eq!(status.winner(Color::White), Some(Color::Black));
    assert!(position.legal_moves(Color::White).is_empty());
    assert_eq!(position.status(Color::Black), GameStatus::InProgress);
}

#[test]
fn test_scholars_mate() {
    let mut position = Position::new();
    play(
        &mut position,
        &["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"],
    );
    assert_eq!(position.status(Color::Black), GameStatus::Checkmate);
}

#[test]
fn test_reversed_fools_mate() {
    let mut position = Position::new();
    play(&mut position, &["e2e4", "f7f6", "d2d4", "g7g5", "d1h5"]);
    assert_eq!(position.status(Color::Black), GameStatus::Checkmate);
}

#[test]
fn test_check_status() {
    let mut position = Position::new();
    play(&mut position, &["e2e4", "f7f5", "d1h5"]);
    assert_eq!(position.status(Color::Black), GameStatus::Check);
    assert!(position.in_check(Color::Black));
    assert!(!position.status(Color::Black).is_over());
}

#[test]
fn test_stalemate() {
    let position = PositionBuilder::new()
        .placement("k7/8/1Q6/8/8/8/8/7K")
        .unwrap()
        .side_to_move(Color::Black)
        .build()
        .unwrap();

    let status = position.status(Color::Black);
    assert_eq!(status, GameStatus::Stalemate);
    assert!(status.is_over());
    assert_eq!(status.winner(Color::Black), None);
}

#[test]
fn test_back_rank_mate() {
    let position = PositionBuilder::new()
        .placement("3R2k1/5ppp/8/8/8/8/8/6K1")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(position.status(Color::Black), GameStatus::Checkmate);
}
