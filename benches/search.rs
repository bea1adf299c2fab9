use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rs_board_search::core::{Card, Hand, Rankable};
use rs_board_search::search::{
    rankings_equal, strength_triple, BoardSearch, Players, RankOracle, SearchConfig, StagePatterns,
};

fn players() -> Players {
    [
        Hand::new_from_str("6CAH").unwrap(),
        Hand::new_from_str("9H2C").unwrap(),
        Hand::new_from_str("KS8D").unwrap(),
    ]
}

fn search(config: SearchConfig) -> BoardSearch {
    let patterns = StagePatterns::new((3, 1, 2), (2, 1, 3), (1, 3, 2));
    BoardSearch::new(RankOracle, players(), patterns).with_config(config)
}

fn bench_flop_phase(c: &mut Criterion) {
    let mut group = c.benchmark_group("flop_phase");
    group.sample_size(10);

    for (name, config) in [
        ("sequential", SearchConfig::sequential()),
        ("default", SearchConfig::default()),
    ] {
        let search = search(config);
        let deck = search.remaining_deck().unwrap();
        group.bench_with_input(BenchmarkId::new("search_flops", name), &deck, |b, deck| {
            b.iter(|| search.search_flops(deck).unwrap())
        });
    }
    group.finish();
}

fn bench_strength_triple(c: &mut Criterion) {
    let players = players();
    let board: Vec<Card> = vec![
        "9D".parse().unwrap(),
        "8C".parse().unwrap(),
        "2D".parse().unwrap(),
        "5S".parse().unwrap(),
        "3H".parse().unwrap(),
    ];
    c.bench_function("strength_triple river", |b| {
        b.iter(|| strength_triple(&RankOracle, &players, &board).unwrap())
    });

    let seven = players[0].iter().chain(board.iter().copied()).collect::<Vec<_>>();
    c.bench_function("rank seven cards", |b| b.iter(|| seven.rank()));
}

fn bench_rankings_equal(c: &mut Criterion) {
    let a = [900u32, 12, 300];
    let b = [3i64, 1, 2];
    c.bench_function("rankings_equal", |bench| {
        bench.iter(|| rankings_equal(criterion::black_box(&a), criterion::black_box(&b)))
    });
}

criterion_group!(
    benches,
    bench_flop_phase,
    bench_strength_triple,
    bench_rankings_equal
);
criterion_main!(benches);
