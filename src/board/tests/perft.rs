//! Perft (performance test) for move generation correctness.

use crate::board::{CastleSide, Color, Position, PositionBuilder};
use std::time::Instant;

struct TestPosition {
    name: &'static str,
    placement: &'static str,
    to_move: Color,
    castling: &'static [(Color, CastleSide)],
    depths: &'static [(usize, u64)],
}

const ALL_CASTLING: &[(Color, CastleSide)] = &[
    (Color::White, CastleSide::Kingside),
    (Color::White, CastleSide::Queenside),
    (Color::Black, CastleSide::Kingside),
    (Color::Black, CastleSide::Queenside),
];

const TEST_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "Initial Position",
        placement: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        to_move: Color::White,
        castling: ALL_CASTLING,
        depths: &[(1, 20), (2, 400), (3, 8902)],
    },
    TestPosition {
        name: "Kiwipete",
        placement: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
        to_move: Color::White,
        castling: ALL_CASTLING,
        depths: &[(1, 48), (2, 2039)],
    },
    TestPosition {
        name: "Position 3",
        placement: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
        to_move: Color::White,
        castling: &[],
        depths: &[(1, 14), (2, 191), (3, 2812)],
    },
    TestPosition {
        name: "Position 4",
        placement: "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1",
        to_move: Color::White,
        castling: &[
            (Color::Black, CastleSide::Kingside),
            (Color::Black, CastleSide::Queenside),
        ],
        depths: &[(1, 6), (2, 264)],
    },
    TestPosition {
        name: "Position 5",
        placement: "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R",
        to_move: Color::White,
        castling: &[(Color::White, CastleSide::Kingside)],
        depths: &[(1, 44), (2, 1486)],
    },
    TestPosition {
        name: "Promotion",
        placement: "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N",
        to_move: Color::Black,
        castling: &[],
        depths: &[(1, 24), (2, 496)],
    },
    TestPosition {
        name: "Castling",
        placement: "r3k2r/8/8/8/8/8/8/R3K2R",
        to_move: Color::White,
        castling: ALL_CASTLING,
        depths: &[(1, 26), (2, 568)],
    },
];

fn setup(test: &TestPosition) -> Position {
    let mut builder = PositionBuilder::new()
        .placement(test.placement)
        .unwrap()
        .side_to_move(test.to_move);
    for &(color, side) in test.castling {
        builder = builder.castle(color, side);
    }
    builder.build().unwrap()
}

#[test]
fn test_all_perft_positions() {
    for test in TEST_POSITIONS {
        let position = setup(test);

        for &(depth, expected) in test.depths {
            let start = Instant::now();
            let nodes = position.perft(test.to_move, depth);
            let duration = start.elapsed();

            println!("  {} depth {}: {} nodes in {:?}", test.name, depth, nodes, duration);

            assert_eq!(
                nodes, expected,
                "Perft failed for position '{}' at depth {}. Expected: {}, Got: {}",
                test.name, depth, expected, nodes
            );
        }
    }
}

#[test]
fn test_perft_depth_zero_is_one() {
    assert_eq!(Position::new().perft(Color::White, 0), 1);
}

#[test]
#[ignore]
fn test_perft_deep() {
    let deep: &[(&str, usize, u64)] = &[
        ("Initial Position", 4, 197_281),
        ("Kiwipete", 3, 97_862),
        ("Position 3", 4, 43_238),
        ("Position 4", 3, 9_467),
        ("Position 5", 3, 62_379),
    ];

    for &(name, depth, expected) in deep {
        let test = TEST_POSITIONS
            .iter()
            .find(|t| t.name == name)
            .unwrap();
        assert_eq!(setup(test).perft(test.to_move, depth), expected, "{name}");
    }
}
