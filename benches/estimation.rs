use covcor::data::Observations;
use covcor::ShrinkageEstimator;
use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

fn random_observations(samples: usize, variables: usize, seed: u64) -> Observations {
    let mut rng = SmallRng::seed_from_u64(seed);
    let values: Vec<f64> = (0..samples * variables)
        .map(|_| StandardNormal.sample(&mut rng))
        .collect();
    Observations::from_rows(samples, variables, &values).expect("validated random data")
}

fn bench_estimation(c: &mut Criterion) {
    // One trading year of daily returns for a 30-asset universe.
    let observations = random_observations(252, 30, 7);
    let estimator = ShrinkageEstimator::new();

    c.bench_function("shrinkage_estimate_252x30", |b| {
        b.iter(|| estimator.estimate(&observations).expect("estimate"))
    });

    let wide = random_observations(60, 100, 11);
    c.bench_function("shrinkage_estimate_60x100", |b| {
        b.iter(|| estimator.estimate(&wide).expect("estimate"))
    });
}

criterion_group!(benches, bench_estimation);
criterion_main!(benches);
