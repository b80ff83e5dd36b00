use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use cron_describe::{CronExpression, Field, FieldType};

const EXPRESSIONS: &[&str] = &[
    "* * * * * /usr/bin/find",
    "0 0 1 1 * /usr/bin/find",
    "*/15 0 1,15 * 1-5 /usr/bin/find",
    "20-30/2 7,19 1/15 5/2 */2 /usr/bin/find",
    "0 0 1 MAR,JUL,DEC MON,FRI,SUN /usr/bin/find",
    "0,5,10,15,20,25,30,35,40,45,50,55 */2 1-10,20-31 JAN-JUN 0 /usr/bin/find",
];

const FIELDS: &[(FieldType, &str)] = &[
    (FieldType::Minute, "*"),
    (FieldType::Minute, "0-59/7,3,9,27"),
    (FieldType::Month, "jan-mar,JUL,oct/1"),
    (FieldType::DayOfWeek, "FRI-SUN,MON"),
];

pub fn new_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("new");
    for expression in EXPRESSIONS {
        group.bench_with_input(BenchmarkId::from_parameter(expression), expression, |b, e| {
            b.iter(|| CronExpression::new(*e).unwrap())
        });
    }
    group.finish();
}

pub fn field_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("field");
    for (type_, input) in FIELDS {
        group.bench_with_input(
            BenchmarkId::new(type_.identifier(), input),
            &(*type_, *input),
            |b, (t, i)| b.iter(|| Field::parse(*t, i).unwrap()),
        );
    }
    group.finish();
}

pub fn describe_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("describe");
    for expression in EXPRESSIONS {
        let parsed = CronExpression::new(*expression).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(expression), &parsed, |b, e| {
            b.iter(|| e.describe())
        });
    }
    group.finish();
}

criterion_group!(benches, new_benchmark, field_benchmark, describe_benchmark);
criterion_main!(benches);
