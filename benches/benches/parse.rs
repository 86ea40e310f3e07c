//! Benchmark suite for sprite sheet parsing
//!
//! Measures JSON deserialization and validation together, then validation of
//! an already deserialized description on its own.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml --bench parse

use cel_benches::{generate_atlas_json, sizes};
use cel_types::{Atlas, ParseConfig, aseprite, parse_with_config};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const SIZES: [(&str, (usize, usize)); 4] = [
	("tiny", sizes::TINY),
	("small", sizes::SMALL),
	("medium", sizes::MEDIUM),
	("large", sizes::LARGE),
];

/// Benchmark the whole load path from bytes
fn bench_from_bytes(c: &mut Criterion) {
	let mut group = c.benchmark_group("atlas_from_bytes");

	for (name, (tags, cels)) in SIZES {
		let json = generate_atlas_json(tags, cels);
		group.throughput(Throughput::Bytes(json.len() as u64));
		group.bench_with_input(BenchmarkId::new("from_bytes", name), json.as_bytes(), |b, data| {
			b.iter(|| black_box(Atlas::from_bytes(black_box(data))));
		});
	}

	group.finish();
}

/// Benchmark validation of a deserialized description
fn bench_parse(c: &mut Criterion) {
	let mut group = c.benchmark_group("atlas_parse");
	let config = ParseConfig::default();

	for (name, (tags, cels)) in SIZES {
		let file: aseprite::File = match serde_json::from_str(&generate_atlas_json(tags, cels)) {
			Ok(file) => file,
			Err(err) => {
				eprintln!("Warning: Could not deserialize {name} sheet: {err}");
				continue;
			}
		};

		group.throughput(Throughput::Elements((tags * cels) as u64));
		group.bench_with_input(BenchmarkId::new("parse", name), &file, |b, file| {
			b.iter(|| black_box(parse_with_config(black_box(file), &config)));
		});
	}

	group.finish();
}

criterion_group!(benches, bench_from_bytes, bench_parse);

criterion_main!(benches);
