use std::process::ExitCode;

mod repl {
    use std::rc::Rc;
    use tinylisp::{evaluate, EvalErr, LispContext, Parser, Value};

    /// Evaluate every form in `input`, returning the last value.
    pub fn run(cx: &Rc<LispContext>, input: &str) -> Result<Value, String> {
        let exprs = Parser::parse_all(input).map_err(|e| format!("Parse error: {}", e))?;
        let mut last = Value::Unit;
        for expr in exprs.iter() {
            last = evaluate(expr, cx).map_err(|e: EvalErr| format!("Eval error: {}", e))?;
        }
        Ok(last)
    }

    // what a line prints, void results print nothing
    pub fn eval_line(cx: &Rc<LispContext>, input: &str) -> Option<String> {
        match run(cx, input) {
            Err(e) => Some(e),
            Ok(Value::Unit) => None,
            Ok(result) => Some(result.to_string()),
        }
    }

    pub fn interactive(cx: &Rc<LispContext>) -> Result<(), String> {
        use rustyline::error::ReadlineError;
        let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
        loop {
            match rl.readline("~> ") {
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
                Err(e) => return Err(format!("Readline err: {:?}", e)),
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = rl.add_history_entry(&line);
                    }
                    if let Some(out) = eval_line(cx, &line) {
                        println!("{}", out);
                    }
                }
            }
        }
    }
}

fn main() -> ExitCode {
    let cx = tinylisp::LispContext::global();

    let outcome = if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        repl::run(&cx, &input).map(|result| match result {
            tinylisp::Value::Unit => (),
            result => println!("{}", result),
        })
    } else {
        repl::interactive(&cx)
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::repl::{eval_line, run};
    use std::rc::Rc;
    use tinylisp::{LispContext, Value};

    #[test]
    fn run_evaluates_every_form() {
        let cx = Rc::new(LispContext::new());
        assert_eq!(run(&cx, "(define x 4) (define y 5) (* x y)"), Ok(Value::Number(20.0)));
        assert_eq!(run(&cx, "(+ x y) (define z 1)"), Ok(Value::Unit));
        assert_eq!(run(&cx, "z"), Ok(Value::Number(1.0)));
        assert_eq!(run(&cx, ""), Ok(Value::Unit));
    }

    #[test]
    fn run_reports_errors() {
        let cx = Rc::new(LispContext::new());
        assert_eq!(run(&cx, "(+ 1 2"), Err("Parse error: unexpected end of input".to_string()));
        assert_eq!(run(&cx, "(define a 1) b"), Err("Eval error: unbound symbol: b".to_string()));
        // forms before the failing one still ran
        assert_eq!(run(&cx, "a"), Ok(Value::Number(1.0)));
    }

    #[test]
    fn eval_line_output() {
        let cx = Rc::new(LispContext::new());
        assert_eq!(eval_line(&cx, "(define sq (lambda (x) (* x x)))"), None);
        assert_eq!(eval_line(&cx, "(sq 3)"), Some("9".to_string()));
        assert_eq!(eval_line(&cx, "(< 1 2)"), Some("#t".to_string()));
        assert_eq!(eval_line(&cx, ")"),
                   Some("Parse error: unexpected closing parenthesis".to_string()));
    }
}
