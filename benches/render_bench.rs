use criterion::{black_box, criterion_group, criterion_main, Criterion};

use wisdombadge::render::{wrap, BadgeRenderer};
use wisdombadge::RenderOptions;

const QUOTE: &str =
    "Quality is never an accident; it is always the result of intelligent effort.";

fn bench_wrap(c: &mut Criterion) {
    c.bench_function("wrap_60", |b| {
        b.iter(|| wrap::wrap(black_box(QUOTE), 60))
    });
}

fn bench_render_badge(c: &mut Criterion) {
    let renderer =
        wisdombadge::new_renderer(RenderOptions::default()).expect("failed to create renderer");

    c.bench_function("render_badge", |b| {
        b.iter(|| renderer.render_badge(black_box(QUOTE)).unwrap())
    });
}

criterion_group!(benches, bench_wrap, bench_render_badge);
criterion_main!(benches);
