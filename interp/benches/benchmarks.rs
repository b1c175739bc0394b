use criterion::{Criterion, black_box, criterion_group, criterion_main};
use interp::{eval, top_env};
use zhrl::{parse_str, read};

// ============================================================================
// Parsing Benchmarks
// ============================================================================

fn bench_parse_small(c: &mut Criterion) {
    c.bench_function("parse small expr", |b| {
        b.iter(|| black_box(parse_str("{+ 1 2}").unwrap()))
    });
}

fn bench_parse_var(c: &mut Criterion) {
    let expr = "{var {a = 1} {b = 2} {c = 3} {f = {lam {x y} {+ x y}}} {f {f a b} c}}";
    c.bench_function("parse var desugaring", |b| {
        b.iter(|| black_box(parse_str(expr).unwrap()))
    });
}

fn bench_read_deep_nesting(c: &mut Criterion) {
    let mut expr = String::from("1");
    for _ in 0..100 {
        expr = format!("{{+ {expr} 1}}");
    }

    c.bench_function("read deep nesting (100 levels)", |b| {
        b.iter(|| black_box(read(&expr).unwrap()))
    });
}

// ============================================================================
// Evaluation Benchmarks
// ============================================================================

fn bench_eval_arithmetic(c: &mut Criterion) {
    let expr = parse_str("{+ {* 2 3} {- 10 {/ 8 2}}}").unwrap();
    let env = top_env();
    c.bench_function("eval arithmetic", |b| {
        b.iter(|| black_box(eval(&expr, &env).unwrap()))
    });
}

fn bench_eval_fib(c: &mut Criterion) {
    let expr = parse_str(
        "{var {fib = {lam {self n}
                       {if {<= n 1} n {+ {self self {- n 1}} {self self {- n 2}}}}}}
           {fib fib 15}}",
    )
    .unwrap();
    let env = top_env();
    c.bench_function("eval fib 15", |b| {
        b.iter(|| black_box(eval(&expr, &env).unwrap()))
    });
}

criterion_group! {
    name = parsing;
    config = Criterion::default();
    targets = bench_parse_small, bench_parse_var, bench_read_deep_nesting
}

criterion_group! {
    name = evaluation;
    config = Criterion::default();
    targets = bench_eval_arithmetic, bench_eval_fib
}

criterion_main!(parsing, evaluation);
