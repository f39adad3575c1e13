use criterion::{black_box, criterion_group, criterion_main, Criterion};

use signquest_core::answer::{is_match, normalize_answer, normalize_guess};
use signquest_core::catalog::DEFAULT_ASSETS;
use signquest_core::model::Profile;
use signquest_core::progression::apply;

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize_answer_catalog", |b| {
        b.iter(|| {
            for asset in DEFAULT_ASSETS {
                black_box(normalize_answer(black_box(asset)));
            }
        })
    });

    let long_guess = "You're   welcome!!! ".repeat(50);
    c.bench_function("normalize_guess_long", |b| {
        b.iter(|| normalize_guess(black_box(&long_guess)))
    });

    c.bench_function("is_match_decorated", |b| {
        b.iter(|| is_match(black_box("YoureWelcome.png"), black_box("You're welcome!")))
    });
}

fn bench_progression(c: &mut Criterion) {
    let outcomes: Vec<_> = (0..1000)
        .map(|i| {
            if i % 7 == 0 {
                signquest_core::model::Outcome::Incorrect
            } else {
                signquest_core::model::Outcome::Correct
            }
        })
        .collect();

    c.bench_function("progression_1000_outcomes", |b| {
        b.iter(|| {
            outcomes
                .iter()
                .fold(Profile::default(), |p, o| apply(p, black_box(*o)))
        })
    });
}

criterion_group!(benches, bench_normalize, bench_progression);
criterion_main!(benches);
