use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use groundops_workorders::WorkOrderParser;

// Benchmark for parsing the canonical examples, as done on every keystroke
fn example_parsing_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_examples");

    for example in WorkOrderParser::get_command_examples() {
        group.bench_with_input(BenchmarkId::from_parameter(example), example, |b, input| {
            b.iter(|| WorkOrderParser::parse_command(black_box(input)));
        });
    }

    group.finish();
}

// Benchmark for long strings full of invalid and duplicate segments
fn malformed_input_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_malformed");

    for size in [4, 16, 64].iter() {
        let input = (0..*size)
            .map(|i| match i % 4 {
                0 => format!("CHK{}", i),
                1 => "PBB45".to_string(),
                2 => format!("FOO{}", i),
                _ => "  ".to_string(),
            })
            .collect::<Vec<_>>()
            .join("|");

        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| WorkOrderParser::parse_command(black_box(input)));
        });
    }

    group.finish();
}

fn validation_benchmark(c: &mut Criterion) {
    c.bench_function("validate_command_string", |b| {
        b.iter(|| WorkOrderParser::validate_command_string(black_box("CHK15|BAG25|CLEAN10|PBB90")))
    });
}

criterion_group!(
    benches,
    example_parsing_benchmark,
    malformed_input_benchmark,
    validation_benchmark
);
criterion_main!(benches);
