use crate::eval::EvalErr;
use crate::procedure::Procedure;
use std::fmt;
use std::rc::Rc;

/// What evaluating an expression produces.
#[derive(Clone, Debug)]
pub enum Value {
    Number(f64),
    Bool(bool),
    Proc(Rc<Procedure>),
    Unit,
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Proc(a), Value::Proc(b)) => Rc::ptr_eq(a, b),
            (Value::Unit, Value::Unit) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Bool(true) => write!(f, "#t"),
            Value::Bool(false) => write!(f, "#f"),
            Value::Proc(p) => write!(f, "{}", p),
            Value::Unit => write!(f, "#<void>"),
        }
    }
}

impl Value {
    // false, zero, NaN and void are falsy
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Bool(b) => *b,
            Value::Proc(_) => true,
            Value::Unit => false,
        }
    }

    pub fn as_number(&self) -> Result<f64, EvalErr> {
        match self {
            Value::Number(n) => Ok(*n),
            other => Err(EvalErr::NotANumber(other.to_string())),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Value;
    use crate::eval::EvalErr;

    #[test]
    fn truthiness() {
        assert!(Value::Number(1.0).is_truthy());
        assert!(Value::Number(-0.5).is_truthy());
        assert!(Value::Bool(true).is_truthy());
        assert!(!Value::Number(0.0).is_truthy());
        assert!(!Value::Number(-0.0).is_truthy());
        assert!(!Value::Number(f64::NAN).is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(!Value::Unit.is_truthy());
    }

    #[test]
    fn display() {
        assert_eq!(Value::Number(3.0).to_string(), "3");
        assert_eq!(Value::Number(0.25).to_string(), "0.25");
        assert_eq!(Value::Bool(false).to_string(), "#f");
        assert_eq!(Value::Unit.to_string(), "#<void>");
    }

    #[test]
    fn numbers_only() {
        assert_eq!(Value::Number(2.0).as_number(), Ok(2.0));
        assert_eq!(Value::Bool(true).as_number(), Err(EvalErr::NotANumber("#t".to_string())));
    }
}
