use std::{
    fs::File,
    io::{BufRead, BufReader},
    time::Duration,
};

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use heapmedian::RunningMedian;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut data = Vec::with_capacity(2000);
    let f = BufReader::new(File::open("./test_data/2000_values.txt").unwrap());

    for line in f.lines() {
        let v: f64 = line.unwrap().parse().unwrap();
        data.push(v);
    }

    let mut group = c.benchmark_group("benches");
    group
        .measurement_time(Duration::from_secs_f32(10.))
        .sample_size(1000);

    group.bench_function("add all", |b| {
        b.iter(|| {
            let mut median = RunningMedian::new();

            for v in data.iter() {
                median.add(*v).unwrap();
            }

            black_box(median.compute_or(0.))
        })
    });

    group.bench_function("add all preallocated", |b| {
        b.iter(|| {
            let mut median = RunningMedian::with_capacity(data.len());

            for v in data.iter() {
                median.add(*v).unwrap();
            }

            black_box(median.compute_or(0.))
        })
    });

    group.bench_function("add and compute each", |b| {
        b.iter(|| {
            let mut median = RunningMedian::new();

            for v in data.iter() {
                median.add(*v).unwrap();
                black_box(median.compute().unwrap());
            }
        })
    });

    group.bench_function("compute", |b| {
        let mut median = RunningMedian::new();
        median.try_extend(data.iter().copied()).unwrap();

        b.iter(|| black_box(median.compute().unwrap()))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
