//! Benchmark for the currying engine and point-free dispatch.
//!
//! Measures saturation in one call versus one argument at a time, acceptor
//! reuse, and pipelines built from point-free wrappers.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fph::compose::pipe;
use fph::pointfree::{filter, map, reduce};
use fph::{Function, Value};
use std::hint::black_box;

fn sum(arity: usize) -> Function {
    Function::new(arity, |arguments| {
        arguments
            .iter()
            .try_fold(0.0, |total, argument| Ok(total + argument.as_number()?))
            .map(Value::from)
    })
    .curried()
}

fn stage(result: fph::Result<Value>) -> Function {
    result
        .and_then(|value| value.as_function().cloned())
        .expect("Failed to build pipeline stage")
}

// =============================================================================
// 1. Curry Saturation
// =============================================================================

fn benchmark_curry_saturation(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("curry_saturation");

    for arity in [1, 4, 8] {
        let curried = sum(arity);
        let arguments: Vec<Value> = (0..arity).map(Value::from).collect();

        group.bench_with_input(BenchmarkId::new("all_at_once", arity), &arguments, |bencher, arguments| {
            bencher.iter(|| black_box(curried.call(black_box(arguments))));
        });

        group.bench_with_input(BenchmarkId::new("one_by_one", arity), &arguments, |bencher, arguments| {
            bencher.iter(|| {
                let mut current = Value::from(curried.clone());
                for argument in arguments {
                    current = current
                        .call(std::slice::from_ref(argument))
                        .expect("Failed to apply argument");
                }
                black_box(current)
            });
        });
    }

    group.finish();
}

fn benchmark_acceptor_reuse(criterion: &mut Criterion) {
    let partial = sum(3)
        .call(&[Value::from(1)])
        .expect("Failed to partially apply");
    let rest = [Value::from(2), Value::from(3)];

    criterion.bench_function("acceptor_reuse", |bencher| {
        bencher.iter(|| black_box(partial.call(black_box(&rest))));
    });
}

// =============================================================================
// 2. Point-Free Pipelines
// =============================================================================

fn benchmark_point_free_pipeline(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("point_free_pipeline");

    let is_even = Function::new(1, |arguments| {
        Ok(Value::from(Function::argument(arguments, 0).as_number()? % 2.0 == 0.0))
    });
    let square = Function::new(1, |arguments| {
        let number = Function::argument(arguments, 0).as_number()?;
        Ok(Value::from(number * number))
    });
    let add = Function::new(2, |arguments| {
        Ok(Value::from(
            Function::argument(arguments, 0).as_number()?
                + Function::argument(arguments, 1).as_number()?,
        ))
    });

    let pipeline = pipe([
        stage(filter().call(&[Value::from(is_even)])),
        stage(map().call(&[Value::from(square)])),
        stage(reduce().call(&[Value::from(add), Value::from(0)])),
    ])
    .expect("Failed to build pipeline");

    for length in [10usize, 100, 1000] {
        let input = Value::array((0..length).map(Value::from));
        group.bench_with_input(BenchmarkId::from_parameter(length), &input, |bencher, input| {
            bencher.iter(|| black_box(pipeline.call(std::slice::from_ref(black_box(input)))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_curry_saturation,
    benchmark_acceptor_reuse,
    benchmark_point_free_pipeline
);
criterion_main!(benches);
