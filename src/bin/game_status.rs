use std::env;
use std::process::ExitCode;

use chess_rules::board::{Color, PieceKind, Position, Square};

fn parse_move(text: &str) -> Option<(Square, Square, Option<PieceKind>)> {
    let from: Square = text.get(0..2)?.parse().ok()?;
    let to: Square = text.get(2..4)?.parse().ok()?;
    let promotion = match text.get(4..)?.chars().next() {
        Some(c) => Some(PieceKind::from_char(c)?),
        None => None,
    };
    Some((from, to, promotion))
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: game_status <move1> <move2> ...");
        return ExitCode::FAILURE;
    }

    let mut position = Position::new();
    for text in args.iter().skip(1) {
        let Some((from, to, promotion)) = parse_move(text) else {
            eprintln!("malformed move '{text}'");
            return ExitCode::FAILURE;
        };
        if let Err(err) = position.apply_move(from, to, promotion) {
            eprintln!("{text}: {err}");
            return ExitCode::FAILURE;
        }
    }

    let side = position.next_to_move();
    let legal_moves = position.legal_moves(side);
    let status = position.status(side);
    println!(
        "side_to_move: {}",
        if side == Color::White { "white" } else { "black" }
    );
    println!("placement: {}", position.to_placement());
    println!("castling: {}", position.castling_rights());
    println!("legal_moves: {}", legal_moves.len());
    println!("status: {status}");
    if let Some(winner) = status.winner(side) {
        println!("winner: {winner}");
    }
    for mv in legal_moves.all() {
        println!("{mv}");
    }
    ExitCode::SUCCESS
}
