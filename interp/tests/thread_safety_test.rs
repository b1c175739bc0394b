use interp::{eval, top_env};
use std::sync::Arc;
use std::thread;
use zhrl::{Environment, ExprC, Value, parse_str};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_core_types_are_send_sync() {
    assert_send_sync::<Value>();
    assert_send_sync::<ExprC>();
    assert_send_sync::<Environment>();
}

#[test]
fn test_shared_program_evaluates_on_many_threads() {
    let program = Arc::new(
        parse_str(
            "{var {fib = {lam {self n}
                           {if {<= n 1} n {+ {self self {- n 1}} {self self {- n 2}}}}}}
               {fib fib 12}}",
        )
        .unwrap(),
    );
    let env = top_env();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let program = Arc::clone(&program);
            let env = env.clone();
            thread::spawn(move || eval(&program, &env))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ok(Value::Num(144.0)));
    }
}

#[test]
fn test_closure_can_move_across_threads() {
    let adder = eval(&parse_str("{lam {n} {+ n 100}}").unwrap(), &top_env()).unwrap();

    let handle = thread::spawn(move || interp::apply(&adder, &[Value::Num(1.0)]));

    assert_eq!(handle.join().unwrap(), Ok(Value::Num(101.0)));
}
