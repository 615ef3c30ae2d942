use crate::scanner::Scanner;
use std::fmt;
use std::str::Chars;

#[derive(Clone, PartialEq, Debug)]
pub enum LispToken {
    OParen, CParen,
    Atom(String),
}

impl fmt::Display for LispToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LispToken::OParen => write!(f, "("),
            LispToken::CParen => write!(f, ")"),
            LispToken::Atom(a) => write!(f, "{}", a),
        }
    }
}

fn is_delim(c: &char) -> bool {
    c.is_whitespace() || *c == '(' || *c == ')'
}

/// Splits source into parens and whitespace separated atoms. Parens are
/// always their own token no matter what surrounds them.
pub struct LispTokenizer<I: Iterator<Item=char>>(Scanner<I>);

impl<I: Iterator<Item=char>> LispTokenizer<I> {
    pub fn new(source: I) -> Self {
        LispTokenizer(Scanner::new(source))
    }
}

impl<'a> LispTokenizer<Chars<'a>> {
    pub fn scanner(source: &'a str) -> Scanner<Self> {
        Scanner::new(LispTokenizer::new(source.chars()))
    }
}

impl<I: Iterator<Item=char>> Iterator for LispTokenizer<I> {
    type Item = LispToken;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.ignore_ws();
        if let Some(t) = self.0.accept_any(&['(', ')']) {
            self.0.ignore();
            match t {
                '(' => Some(LispToken::OParen),
                _ => Some(LispToken::CParen),
            }
        } else if self.0.until(is_delim) { // or til EOF
            Some(LispToken::Atom(self.0.extract_string()))
        } else {
            None
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
