use ark_std::UniformRand;
use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use poseidon_bls12_377::{Fr, Native, Sponge, State};
use rand::{RngCore, SeedableRng, rngs::SmallRng};

fn create_random_state(rng: &mut SmallRng) -> State<Fr> {
    core::array::from_fn(|_| Fr::rand(rng))
}

fn bench_permutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Permutation");
    let mut rng = SmallRng::seed_from_u64(42);

    group.bench_function("Sponge::permute", |b| {
        let mut ops = Native::<Fr>::new();
        let mut sponge = Sponge::new(&mut ops).unwrap();
        let state = create_random_state(&mut rng);
        b.iter(|| black_box(sponge.permute(black_box(state))))
    });

    group.finish();
}

fn bench_sponge(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sponge Operations");
    let mut rng = SmallRng::seed_from_u64(42);
    let limb_counts = [3, 9, 90, 900];

    for len in limb_counts.iter() {
        let input: Vec<Fr> = (0..*len).map(|_| Fr::from(rng.next_u64())).collect();

        group.bench_with_input(BenchmarkId::new("hash_no_pad", len), &input, |b, data| {
            let mut ops = Native::<Fr>::new();
            let mut sponge = Sponge::new(&mut ops).unwrap();
            b.iter(|| black_box(sponge.hash_no_pad(black_box(data))))
        });

        group.bench_with_input(BenchmarkId::new("hash_or_noop", len), &input, |b, data| {
            let mut ops = Native::<Fr>::new();
            let mut sponge = Sponge::new(&mut ops).unwrap();
            b.iter(|| black_box(sponge.hash_or_noop(black_box(data))))
        });
    }

    let left = Fr::rand(&mut rng);
    let right = Fr::rand(&mut rng);
    group.bench_function("two_to_one", |b| {
        let mut ops = Native::<Fr>::new();
        let mut sponge = Sponge::new(&mut ops).unwrap();
        b.iter(|| black_box(sponge.two_to_one(black_box(left), black_box(right))))
    });

    group.bench_function("to_vec", |b| {
        let mut ops = Native::<Fr>::new();
        let mut sponge = Sponge::new(&mut ops).unwrap();
        b.iter_batched(
            || Fr::rand(&mut rng),
            |digest| black_box(sponge.to_vec(digest)),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_permutation, bench_sponge);
criterion_main!(benches);
