use crate::eval::{evaluate, EvalErr, LispContext};
use crate::parser::LispExpr;
use crate::value::Value;
use std::fmt;
use std::rc::Rc;

pub type Fp = Rc<dyn Fn(&[Value]) -> Result<Value, EvalErr>>;

enum Body {
    Lisp(LispExpr, Rc<LispContext>),
    Builtin(&'static str, Fp),
}

pub struct Procedure {
    params: Vec<String>,
    body: Body,
}

impl fmt::Debug for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.body {
            Body::Lisp(ref expr, _) => write!(f, "(lambda ({}) {})", self.params.join(" "), expr),
            Body::Builtin(name, _) => write!(f, "#<builtin {}>", name),
        }
    }
}

impl fmt::Display for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.body {
            Body::Lisp(..) => write!(f, "#<lambda ({})>", self.params.join(" ")),
            Body::Builtin(name, _) => write!(f, "#<builtin {}>", name),
        }
    }
}

impl Procedure {
    /// A closure over `env`, the environment it was defined in.
    pub fn new(params: Vec<String>, body: LispExpr, env: Rc<LispContext>) -> Procedure {
        Procedure{params, body: Body::Lisp(body, env)}
    }

    pub fn builtin(name: &'static str, fp: Fp) -> Procedure {
        Procedure{params: Vec::new(), body: Body::Builtin(name, fp)}
    }

    pub fn call(&self, args: Vec<Value>) -> Result<Value, EvalErr> {
        match self.body {
            Body::Builtin(_, ref fp) => fp(&args[..]),
            Body::Lisp(ref expr, ref env) => {
                if args.len() != self.params.len() {
                    return Err(EvalErr::WrongNumberOfArgs{
                        expected: self.params.len(), got: args.len()});
                }
                let env = LispContext::nested(self.params.clone(), args, env.clone());
                evaluate(expr, &Rc::new(env))
            }
        }
    }
}
