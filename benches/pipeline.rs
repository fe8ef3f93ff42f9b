//! Benchmarks for the pal scoring pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pal::parser::parse_palette_str;
use pal::score::{contrast_ratio, pairwise_report};
use pal::sim::simulate_palette;
use pal::types::{Colour, Palette, VisionDeficiency};

/// Deterministic n-colour palette spread across channel space.
fn synthetic_palette(n: usize) -> Palette {
    let colours = (0..n)
        .map(|i| {
            Colour::new(
                (i * 37 % 256) as u8,
                (i * 101 % 256) as u8,
                (i * 197 % 256) as u8,
            )
        })
        .collect();
    Palette::from_colours("bench", colours)
}

/// Palette source with one labelled colour per line.
fn synthetic_source(n: usize) -> String {
    let mut source = String::from("---\nname: bench\n---\n");
    for colour in synthetic_palette(n).iter() {
        source.push_str(&format!("$c: {}\n", colour));
    }
    source
}

// -- Parsing benchmarks --

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let small = "---\nname: tiny\n---\n#2563EB\n#16A34A\n";
    let large = synthetic_source(64);

    group.bench_function("parse_palette_small", |b| {
        b.iter(|| parse_palette_str(black_box(small), "bench").unwrap())
    });

    group.bench_function("parse_palette_64", |b| {
        b.iter(|| parse_palette_str(black_box(&large), "bench").unwrap())
    });

    group.finish();
}

// -- Scoring benchmarks --

fn bench_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("scoring");

    let a = Colour::new(0x25, 0x63, 0xeb);
    let b_colour = Colour::new(0xf5, 0x9e, 0x0b);

    group.bench_function("contrast_ratio", |b| {
        b.iter(|| contrast_ratio(black_box(a), black_box(b_colour)))
    });

    let small = synthetic_palette(8);
    let large = synthetic_palette(32);

    group.bench_function("pairwise_report_8", |b| {
        b.iter(|| pairwise_report(black_box(&small)))
    });

    group.bench_function("pairwise_report_32", |b| {
        b.iter(|| pairwise_report(black_box(&large)))
    });

    group.finish();
}

// -- Simulation benchmarks --

fn bench_simulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation");

    let palette = synthetic_palette(32);

    for kind in [
        VisionDeficiency::Protanopia,
        VisionDeficiency::Deuteranopia,
        VisionDeficiency::Tritanopia,
        VisionDeficiency::Achromatopsia,
    ] {
        group.bench_function(format!("simulate_32_{}", kind), |b| {
            b.iter(|| simulate_palette(black_box(&palette), black_box(kind)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_scoring, bench_simulation);
criterion_main!(benches);
