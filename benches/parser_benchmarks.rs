#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use zmarkup::{
    formatter::{FormatConfig, Formatter, MarkupFormatter, TreeFormatter},
    parser::MarkupParser,
};

fn bench_markup_parser(c: &mut Criterion) {
    let small = include_bytes!("../tests/input/small.xml");
    let medium = include_bytes!("../tests/input/file.xml");
    let large = include_bytes!("../tests/input/large.xml");

    let mut group = c.benchmark_group("parse_markup");
    for (name, input) in [
        ("small", &small[..]),
        ("medium", &medium[..]),
        ("large", &large[..]),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| MarkupParser::new(black_box(input)).unwrap().parse().unwrap())
        });
    }
    group.finish();
}

fn bench_formatters(c: &mut Criterion) {
    let input = include_bytes!("../tests/input/large.xml");
    let document = MarkupParser::new(input).unwrap().parse().unwrap();
    let config = FormatConfig::default();

    c.bench_function("format_markup", |b| {
        b.iter(|| MarkupFormatter.format(black_box(&document), &config).unwrap())
    });
    c.bench_function("format_tree", |b| {
        b.iter(|| TreeFormatter.format(black_box(&document), &config).unwrap())
    });
}

criterion_group!(benches, bench_markup_parser, bench_formatters);
criterion_main!(benches);
