use crate::eval::EvalErr;
use crate::procedure::{Fp, Procedure};
use crate::value::Value;
use std::collections::HashMap;
use std::f64::consts;
use std::ops;
use std::rc::Rc;

// no identity element: at least one argument is required
fn foldop<T>(op: T, args: &[Value]) -> Result<Value, EvalErr>
        where T: Fn(f64, f64) -> f64 {
    let (base, rest) = match args.split_first() {
        Some((first, rest)) => (first.as_number()?, rest),
        None => return Err(EvalErr::WrongNumberOfArgs{expected: 1, got: 0}),
    };
    let mut acc = base;
    for arg in rest.iter() {
        acc = op(acc, arg.as_number()?);
    }
    Ok(Value::Number(acc))
}

fn cmpop<T>(op: T, args: &[Value]) -> Result<Value, EvalErr>
        where T: Fn(f64, f64) -> bool {
    match args {
        [l, r] => Ok(Value::Bool(op(l.as_number()?, r.as_number()?))),
        _ => Err(EvalErr::WrongNumberOfArgs{expected: 2, got: args.len()}),
    }
}

fn register(procs: &mut HashMap<String, Value>, name: &'static str, fp: Fp) {
    procs.insert(name.to_string(), Value::Proc(Rc::new(Procedure::builtin(name, fp))));
}

pub fn builtins() -> HashMap<String, Value> {
    let mut procs = HashMap::new();

    register(&mut procs, "+", Rc::new(|args: &[Value]| foldop(ops::Add::add, args)));
    register(&mut procs, "-", Rc::new(|args: &[Value]| -> Result<Value, EvalErr> {
        match args {
            [x] => Ok(Value::Number(-x.as_number()?)), // special handling of negation op
            _ => foldop(ops::Sub::sub, args)
        }
    }));
    register(&mut procs, "*", Rc::new(|args: &[Value]| foldop(ops::Mul::mul, args)));
    register(&mut procs, "/", Rc::new(|args: &[Value]| foldop(ops::Div::div, args)));
    register(&mut procs, "<", Rc::new(|args: &[Value]| cmpop(|l, r| l < r, args)));
    register(&mut procs, "<=", Rc::new(|args: &[Value]| cmpop(|l, r| l <= r, args)));
    register(&mut procs, ">", Rc::new(|args: &[Value]| cmpop(|l, r| l > r, args)));
    register(&mut procs, ">=", Rc::new(|args: &[Value]| cmpop(|l, r| l >= r, args)));

    procs.insert("pi".to_string(), Value::Number(consts::PI));
    procs
}

///////////////////////////////////////////////////////////////////////////////
