use serde::Deserialize;

use chess_rules::board::{Color, PieceKind, Position, Square};

#[derive(Deserialize)]
struct GameSet {
    games: Vec<Game>,
}

#[derive(Deserialize)]
struct Game {
    name: String,
    moves: String,
    to_move: String,
    status: String,
    #[serde(default)]
    placement: Option<String>,
}

fn parse_move(text: &str) -> (Square, Square, Option<PieceKind>) {
    let from: Square = text[0..2].parse().expect("bad origin square");
    let to: Square = text[2..4].parse().expect("bad destination square");
    let promotion = text[4..]
        .chars()
        .next()
        .map(|c| PieceKind::from_char(c).expect("bad promotion letter"));
    (from, to, promotion)
}

fn load() -> GameSet {
    let data = include_str!("data/games.json");
    serde_json::from_str(data).expect("invalid games.json")
}

#[test]
fn scripted_games_reach_expected_status() {
    for game in load().games {
        let mut position = Position::new();
        for text in game.moves.split_whitespace() {
            let (from, to, promotion) = parse_move(text);
            position
                .apply_move(from, to, promotion)
                .unwrap_or_else(|err| panic!("{}: move {} rejected: {}", game.name, text, err));
        }

        let to_move = match game.to_move.as_str() {
            "white" => Color::White,
            "black" => Color::Black,
            other => panic!("{}: unknown side '{}'", game.name, other),
        };
        assert_eq!(position.next_to_move(), to_move, "{}", game.name);
        assert_eq!(
            position.status(to_move).to_string(),
            game.status,
            "status mismatch for {}",
            game.name
        );

        if let Some(placement) = &game.placement {
            assert_eq!(&position.to_placement(), placement, "{}", game.name);
        }
    }
}

#[test]
fn scripted_games_never_mutate_on_rejection() {
    for game in load().games {
        let mut position = Position::new();
        for text in game.moves.split_whitespace() {
            let (from, to, promotion) = parse_move(text);

            // Replaying a move whose origin is now empty is rejected untouched
            let snapshot = position.clone();
            position.apply_move(from, to, promotion).unwrap();
            let after = position.clone();
            assert!(position.apply_move(from, to, promotion).is_err(), "{}", game.name);
            assert_eq!(position, after);
            assert_ne!(position, snapshot);
        }
    }
}
