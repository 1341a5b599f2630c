use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use yz_bench::gen_hand_samples;
use yz_core::{Category, Hand, ScoreCalculator};

fn bench_score_card(c: &mut Criterion) {
    let mut g = c.benchmark_group("yz_core_scoring");
    for &n in &[256usize, 4096usize] {
        let samples = gen_hand_samples(n);
        g.bench_with_input(BenchmarkId::new("score_card_batch", n), &samples, |b, s| {
            b.iter(|| {
                for &hand in s.iter() {
                    black_box(ScoreCalculator::new(black_box(hand)).score_card());
                }
            })
        });
    }
    g.finish();
}

fn bench_single_category(c: &mut Criterion) {
    let samples = gen_hand_samples(4096);
    let mut g = c.benchmark_group("yz_core_category");
    for cat in [
        Category::Pair,
        Category::TwoPair,
        Category::FullHouse,
        Category::SmallStraight,
    ] {
        g.bench_with_input(BenchmarkId::new("score", cat), &samples, |b, s| {
            b.iter(|| {
                for &hand in s.iter() {
                    black_box(ScoreCalculator::new(black_box(hand)).score(cat));
                }
            })
        });
    }
    g.finish();
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("hand_from_str", |b| {
        b.iter(|| black_box("6, 2, 2, 2, 6").parse::<Hand>())
    });
}

criterion_group!(benches, bench_score_card, bench_single_category, bench_parse);
criterion_main!(benches);
