use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use livemask::LivenessMask;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_mask_codec(c: &mut Criterion) {
	let mut rng = StdRng::seed_from_u64(42);
	let mask = LivenessMask::random(1 << 16, 1 << 10, &mut rng).unwrap();
	let bits = mask.compress().unwrap();

	let mut group = c.benchmark_group("mask_codec");
	group.throughput(Throughput::Elements(mask.len() as u64));
	group.bench_function("compress_sparse", |b| {
		b.iter(|| mask.compress().unwrap());
	});
	group.bench_function("decompress_sparse", |b| {
		b.iter(|| LivenessMask::decompress(&bits).unwrap());
	});
	group.finish();
}

criterion_group!(benches, bench_mask_codec);
criterion_main!(benches);
