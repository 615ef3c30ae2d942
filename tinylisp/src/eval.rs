use crate::builtin::builtins;
use crate::parser::{LispExpr, ParseError, Parser};
use crate::procedure::Procedure;
use crate::value::Value;

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

#[derive(PartialEq, Debug)]
pub enum EvalErr {
    ParseError(ParseError),
    UnboundSymbol(String),
    NotCallable(String),
    InvalidExpr(Form),
    WrongNumberOfArgs { expected: usize, got: usize },
    NotANumber(String),
}

impl fmt::Display for EvalErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EvalErr::ParseError(e) => write!(f, "{}", e),
            EvalErr::UnboundSymbol(sym) => write!(f, "unbound symbol: {}", sym),
            EvalErr::NotCallable(v) => write!(f, "not a procedure: {}", v),
            EvalErr::InvalidExpr(form) =>
                write!(f, "malformed {}, expected {}", form, form.shape()),
            EvalErr::WrongNumberOfArgs { expected, got } =>
                write!(f, "wrong number of arguments: expected {}, got {}", expected, got),
            EvalErr::NotANumber(v) => write!(f, "not a number: {}", v),
        }
    }
}

impl std::error::Error for EvalErr {}

impl From<ParseError> for EvalErr {
    fn from(err: ParseError) -> EvalErr {
        EvalErr::ParseError(err)
    }
}

/// Lists headed by one of these keywords are evaluated structurally
/// instead of as a procedure call.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Form {
    Begin,
    Define,
    Lambda,
    If,
}

impl Form {
    pub fn from_symbol(sym: &str) -> Option<Form> {
        match sym {
            "begin" => Some(Form::Begin),
            "define" => Some(Form::Define),
            "lambda" => Some(Form::Lambda),
            "if" => Some(Form::If),
            _ => None,
        }
    }

    fn shape(&self) -> &'static str {
        match self {
            Form::Begin => "(begin <expr>*)",
            Form::Define => "(define <symbol> <expr>)",
            Form::Lambda => "(lambda (<symbol>*) <expr>)",
            Form::If => "(if <test> <consequent> <alternate>)",
        }
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Form::Begin => write!(f, "begin"),
            Form::Define => write!(f, "define"),
            Form::Lambda => write!(f, "lambda"),
            Form::If => write!(f, "if"),
        }
    }
}

thread_local! {
    static GLOBAL: Rc<LispContext> = Rc::new(LispContext::new());
}

pub struct LispContext {
    syms: RefCell<HashMap<String, Value>>,
    outer: Option<Rc<LispContext>>,
}

impl LispContext {
    /// A root environment holding the builtins.
    pub fn new() -> LispContext {
        LispContext{syms: RefCell::new(builtins()), outer: None}
    }

    /// A root environment with no bindings at all.
    pub fn empty() -> LispContext {
        LispContext{syms: RefCell::new(HashMap::new()), outer: None}
    }

    /// This thread's shared global bindings, `define` at the top level
    /// persists here across calls.
    pub fn global() -> Rc<LispContext> {
        GLOBAL.with(Rc::clone)
    }

    pub fn nested(params: Vec<String>, args: Vec<Value>,
                  outer: Rc<LispContext>) -> LispContext {
        LispContext{
            syms: RefCell::new(params.into_iter().zip(args).collect()),
            outer: Some(outer)
        }
    }

    pub fn child(self: &Rc<Self>) -> Rc<LispContext> {
        Rc::new(LispContext{syms: RefCell::new(HashMap::new()), outer: Some(self.clone())})
    }

    pub fn lookup(&self, sym: &str) -> Result<Value, EvalErr> {
        let local = self.syms.borrow().get(sym).cloned();
        match (local, &self.outer) {
            (Some(value), _) => Ok(value),
            (None, Some(otx)) => otx.lookup(sym),
            (None, None) => Err(EvalErr::UnboundSymbol(sym.to_string())),
        }
    }

    // always binds in this environment, never in an outer one
    pub fn define(&self, sym: &str, value: Value) {
        self.syms.borrow_mut().insert(sym.to_string(), value);
    }

    pub fn eval_str(expr: &str) -> Result<Value, EvalErr> {
        let expr = Parser::parse_str(expr)?;
        evaluate(&expr, &Rc::new(LispContext::new()))
    }
}

impl Default for LispContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn evaluate(expr: &LispExpr, ctx: &Rc<LispContext>) -> Result<Value, EvalErr> {
    match expr {
        LispExpr::Number(num) => Ok(Value::Number(*num)),
        LispExpr::Symbol(sym) => ctx.lookup(sym),
        LispExpr::List(list) => {
            let form = match list.first() {
                Some(LispExpr::Symbol(head)) => Form::from_symbol(head),
                _ => None,
            };
            match form {
                Some(form) => eval_form(form, &list[1..], ctx),
                None => apply(list, ctx),
            }
        }
    }
}

/// Evaluate against this thread's global bindings.
pub fn evaluate_global(expr: &LispExpr) -> Result<Value, EvalErr> {
    evaluate(expr, &LispContext::global())
}

fn eval_form(form: Form, args: &[LispExpr], ctx: &Rc<LispContext>) -> Result<Value, EvalErr> {
    match (form, args) {
        (Form::Begin, exprs) => {
            let mut last = Value::Unit;
            for expr in exprs {
                last = evaluate(expr, ctx)?;
            }
            Ok(last)
        },
        (Form::Define, [LispExpr::Symbol(var), expr]) => {
            let value = evaluate(expr, ctx)?;
            debug!("define {} = {}", var, value);
            ctx.define(var, value);
            Ok(Value::Unit)
        },
        (Form::Lambda, [LispExpr::List(params), body]) => {
            let mut vars: Vec<String> = Vec::new();
            for param in params.iter() {
                match param {
                    LispExpr::Symbol(v) if !vars.contains(v) => vars.push(v.clone()),
                    _ => return Err(EvalErr::InvalidExpr(form))
                }
            }
            Ok(Value::Proc(Rc::new(Procedure::new(vars, body.clone(), ctx.clone()))))
        },
        (Form::If, [test, conseq, alt]) => {
            let test = evaluate(test, ctx)?;
            debug!("if {} -> {}", test, test.is_truthy());
            if test.is_truthy() {
                evaluate(conseq, ctx)
            } else {
                evaluate(alt, ctx)
            }
        },
        _ => Err(EvalErr::InvalidExpr(form)),
    }
}

// operator first, then arguments left to right
fn apply(list: &[LispExpr], ctx: &Rc<LispContext>) -> Result<Value, EvalErr> {
    let (head, rest) = match list.split_first() {
        Some(split) => split,
        None => return Err(EvalErr::NotCallable(LispExpr::List(Vec::new()).to_string())),
    };
    let op = evaluate(head, ctx)?;
    let mut args = Vec::with_capacity(rest.len());
    for arg in rest.iter() {
        args.push(evaluate(arg, ctx)?);
    }
    match op {
        Value::Proc(p) => {
            debug!("call {:?} with {:?}", p, args);
            p.call(args)
        },
        other => Err(EvalErr::NotCallable(other.to_string())),
    }
}

///////////////////////////////////////////////////////////////////////////////
