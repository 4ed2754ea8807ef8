use criterion::{criterion_group, criterion_main, Criterion};
use petri::demos::{Conway, ForestFire};

const N: i64 = 128;
const SEED: u64 = 42;
const FILL_RATE: f64 = 0.3;

fn conway_step(c: &mut Criterion) {
    let mut life = Conway::new(N, N, true, Some(SEED)).unwrap();
    life.randomize(FILL_RATE);
    c.bench_function("conway_step_128", |b| b.iter(|| life.step()));
}

fn forest_fire_step(c: &mut Criterion) {
    let mut forest = ForestFire::new(N, N, true, Some(SEED)).unwrap();
    forest.randomize(FILL_RATE);
    c.bench_function("forest_fire_step_128", |b| b.iter(|| forest.step()));
}

criterion_group!(benches, conway_step, forest_fire_step);
criterion_main!(benches);
