use lexers::{LispToken, LispTokenizer, Scanner};
use std::fmt;
use std::str::FromStr;

#[derive(PartialEq, Debug)]
pub enum ParseError {
    UnexpectedCParen,
    UnexpectedEOF,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::UnexpectedCParen => write!(f, "unexpected closing parenthesis"),
            ParseError::UnexpectedEOF => write!(f, "unexpected end of input"),
        }
    }
}

impl std::error::Error for ParseError {}

#[derive(Clone, PartialEq, Debug)]
pub enum LispExpr {
    List(Vec<LispExpr>),
    Symbol(String),
    Number(f64),
}

impl fmt::Display for LispExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LispExpr::Symbol(s) => write!(f, "{}", s),
            LispExpr::Number(n) => write!(f, "{}", n),
            LispExpr::List(v) => {
                let items = v.iter().map(|e| e.to_string()).collect::<Vec<_>>();
                write!(f, "({})", items.join(" "))
            }
        }
    }
}

/// Source text as plain tokens, parens always standalone.
pub fn tokenize(source: &str) -> Vec<String> {
    LispTokenizer::scanner(source).map(|t| t.to_string()).collect()
}

/// Numbers are anything `f64` parses that starts like a number, so words
/// such as `nan` or `inf` stay symbols.
pub fn classify(token: &str) -> LispExpr {
    let unsigned = token.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(token);
    let numeric = unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.');
    match f64::from_str(token) {
        Ok(n) if numeric => LispExpr::Number(n),
        _ => LispExpr::Symbol(token.to_string()),
    }
}

pub struct Parser;

impl Parser {
    /// Parses the first expression in `source`, anything after it is left
    /// unread. Wrap several forms in `(begin ...)` or use `parse_all`.
    pub fn parse_str(source: &str) -> Result<LispExpr, ParseError> {
        Self::parse(&mut LispTokenizer::scanner(source))
    }

    pub fn parse_all(source: &str) -> Result<Vec<LispExpr>, ParseError> {
        let mut lex = LispTokenizer::scanner(source);
        let mut exprs = Vec::new();
        while lex.peek().is_some() {
            exprs.push(Self::parse(&mut lex)?);
        }
        Ok(exprs)
    }

    pub fn parse<I>(lex: &mut Scanner<I>) -> Result<LispExpr, ParseError>
            where I: Iterator<Item=LispToken> {
        match lex.next() {
            None                    => Err(ParseError::UnexpectedEOF),
            Some(LispToken::CParen) => Err(ParseError::UnexpectedCParen),
            Some(LispToken::Atom(a)) => Ok(classify(&a)),
            Some(LispToken::OParen) => {
                let mut list = Vec::new();
                while lex.peek() != Some(LispToken::CParen) { // even when != None
                    list.push(Parser::parse(lex)?);
                }
                lex.next(); // get over that CParen
                Ok(LispExpr::List(list))
            },
        }
    }
}

pub fn parse(source: &str) -> Result<LispExpr, ParseError> {
    Parser::parse_str(source)
}
