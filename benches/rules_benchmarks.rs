//! Benchmarks for rules queries.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::board::{Color, Position, PositionBuilder};

fn kiwipete() -> Position {
    PositionBuilder::new()
        .placement("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R")
        .and_then(|builder| builder.all_castling_rights().build())
        .expect("valid placement")
}

fn middlegame() -> Position {
    PositionBuilder::new()
        .placement("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R")
        .and_then(|builder| builder.all_castling_rights().build())
        .expect("valid placement")
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    // Starting position
    let start = Position::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| start.perft(Color::White, black_box(depth)))
        });
    }

    // Complex middlegame position (Kiwipete)
    let kiwipete = kiwipete();
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(Color::White, black_box(depth)))
        });
    }

    group.finish();
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");

    let startpos = Position::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.legal_moves(Color::White)))
    });

    let middlegame = middlegame();
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middlegame.legal_moves(Color::White)))
    });

    // Kiwipete (many moves available)
    let kiwipete = kiwipete();
    group.bench_function("kiwipete", |b| {
        b.iter(|| black_box(kiwipete.legal_moves(Color::White)))
    });

    group.finish();
}

fn bench_status(c: &mut Criterion) {
    let mut group = c.benchmark_group("status");

    let kiwipete = kiwipete();
    group.bench_function("kiwipete", |b| {
        b.iter(|| black_box(kiwipete.status(Color::White)))
    });

    let mate = PositionBuilder::new()
        .placement("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR")
        .and_then(|builder| builder.build())
        .expect("valid placement");
    group.bench_function("fools_mate", |b| {
        b.iter(|| black_box(mate.status(Color::White)))
    });

    group.finish();
}

criterion_group!(benches, bench_perft, bench_legal_moves, bench_status);
criterion_main!(benches);
