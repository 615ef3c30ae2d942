macro_rules! debug {
    ($($args:tt)*) => (if cfg!(feature="debug") { eprintln!($($args)*); })
}

mod parser;
mod value;
mod procedure;
mod eval;
mod builtin;

pub use parser::{Parser, LispExpr, ParseError, parse, tokenize, classify};
pub use value::Value;
pub use eval::{LispContext, EvalErr, Form, evaluate, evaluate_global};
pub use procedure::{Procedure, Fp};
pub use builtin::builtins;
