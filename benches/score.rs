use criterion::{Criterion, black_box, criterion_group, criterion_main};
use nerdle_score::batch::{ScoreMatrix, score_pairs};
use nerdle_score::core::{Expression, score_packed};
use std::time::Duration;

fn expr(s: &str) -> Expression {
    Expression::new(s).unwrap()
}

pub fn bench_score(c: &mut Criterion) {
    let mut g = c.benchmark_group("score");
    g.measurement_time(Duration::from_secs(1));

    let answer = expr("12+34=56");
    let guesses = ["10-43=66", "10-84=46", "10-43=46", "40-84=77", "12+34=56"].map(expr);

    g.bench_function("score all correct", |b| {
        b.iter(|| score_packed(black_box(&answer), black_box(&answer)))
    });
    g.bench_function("score all incorrect", |b| {
        let disjoint = expr("abcdefgh");
        b.iter(|| score_packed(black_box(&disjoint), black_box(&answer)))
    });
    g.bench_function("score mixed", |b| {
        b.iter(|| {
            guesses
                .iter()
                .map(|guess| score_packed(black_box(guess), black_box(&answer)).map(|s| u32::from(s.value())))
                .sum::<Result<u32, _>>()
        })
    });

    let pairs: Vec<_> = (0..10_000)
        .map(|i| (guesses[i % guesses.len()], answer))
        .collect();
    g.bench_function("score_pairs 10k", |b| {
        b.iter(|| score_pairs(black_box(&pairs)))
    });

    let exprs: Vec<_> = (0..200u32)
        .map(|i| expr(&format!("{}+{}={}", i % 10, (i / 10) % 10, i % 10 + (i / 10) % 10)))
        .filter(|e| e.len() == 5)
        .collect();
    g.bench_function("matrix", |b| {
        b.iter(|| ScoreMatrix::build(black_box(&exprs), black_box(&exprs)))
    });
}

criterion_group!(score, bench_score);
criterion_main!(score);
