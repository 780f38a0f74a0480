use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ocular::{
    format_template, inspect, inspect_with_options, value, InspectOptions, Value,
};

fn user_record(i: i32) -> Value {
    value!({
        "id": i,
        "name": "Alice",
        "email": "alice@example.com",
        "active": true
    })
}

fn nested_value(depth: usize) -> Value {
    let mut v = value!({ "leaf": true, "count": 3 });
    for _ in 0..depth {
        v = Value::object([("inner", v), ("tag", Value::from("node"))]);
    }
    v
}

fn benchmark_inspect_simple(c: &mut Criterion) {
    let user = user_record(123);

    c.bench_function("inspect_simple_object", |b| {
        b.iter(|| inspect(black_box(&user)))
    });
}

fn benchmark_inspect_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("inspect_array");

    for size in [10, 50, 100, 500].iter() {
        let records = Value::array((0..*size).map(user_record).collect());

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| inspect(black_box(&records)))
        });
    }
    group.finish();
}

fn benchmark_inspect_numeric_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("inspect_numeric_array");

    let numbers = Value::array((0..100).map(Value::from).collect());
    let floats = Value::array((0..100).map(|i| Value::from(f64::from(i) * 1.5)).collect());

    group.bench_function("integers", |b| b.iter(|| inspect(black_box(&numbers))));
    group.bench_function("floats", |b| b.iter(|| inspect(black_box(&floats))));

    group.finish();
}

fn benchmark_inspect_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("inspect_nested");

    for depth in [2, 8, 32].iter() {
        let v = nested_value(*depth);
        let unlimited = InspectOptions::new().with_depth(None);

        group.bench_with_input(BenchmarkId::from_parameter(depth), depth, |b, _| {
            b.iter(|| inspect_with_options(black_box(&v), &unlimited))
        });
    }
    group.finish();
}

fn benchmark_inspect_colored(c: &mut Criterion) {
    let user = user_record(123);
    let colored = InspectOptions::new().with_colors(true);

    c.bench_function("inspect_colored", |b| {
        b.iter(|| inspect_with_options(black_box(&user), &colored))
    });
}

fn benchmark_inspect_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("inspect_strings");

    let short = Value::from("short");
    let medium = Value::from("This is a medium length string with some content");
    let long = Value::from(
        "line one of a long multi-line payload\n\
         line two of a long multi-line payload\n\
         line three of a long multi-line payload",
    );

    group.bench_function("short_string", |b| b.iter(|| inspect(black_box(&short))));
    group.bench_function("medium_string", |b| b.iter(|| inspect(black_box(&medium))));
    group.bench_function("long_string", |b| b.iter(|| inspect(black_box(&long))));

    group.finish();
}

fn benchmark_format_template(c: &mut Criterion) {
    let args = vec![
        Value::from("request %s took %dms (%j)"),
        Value::from("/api/users"),
        Value::from(42),
        user_record(7),
    ];

    c.bench_function("format_template", |b| {
        b.iter(|| format_template(black_box(&args)))
    });
}

criterion_group!(
    benches,
    benchmark_inspect_simple,
    benchmark_inspect_array,
    benchmark_inspect_numeric_array,
    benchmark_inspect_nested,
    benchmark_inspect_colored,
    benchmark_inspect_strings,
    benchmark_format_template
);
criterion_main!(benches);
