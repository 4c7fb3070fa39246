//! Lexical units of a calculator expression.

use super::evaluation::EvalError;
use std::iter::Peekable;
use std::str::Chars;

/// One of the four binary arithmetic operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Map an operator character to its operator.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Binding strength. Multiplicative operators bind tighter than additive ones.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide => 2,
        }
    }

    /// Compute `a OP b`.
    pub fn apply(self, a: f64, b: f64) -> Result<f64, EvalError> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide if b == 0.0 => Err(EvalError::DivisionByZero),
            Self::Divide => Ok(a / b),
        }
    }
}

/// Whether `c` is one of `+ - * /`.
pub fn is_operator(c: char) -> bool {
    Operator::from_char(c).is_some()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
    LParen,
    RParen,
}

/// Scans an expression string into tokens, skipping spaces.
pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input: input.chars().peekable(),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(&ch) = self.input.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.input.next();
        }
    }

    /// Consume the maximal run of digits and dots starting with `first`.
    fn read_number(&mut self, first: char) -> Result<Token, EvalError> {
        let mut literal = String::from(first);
        while let Some(&ch) = self.input.peek() {
            if !(ch.is_ascii_digit() || ch == '.') {
                break;
            }
            literal.push(ch);
            self.input.next();
        }

        if literal.matches('.').count() > 1 {
            return Err(EvalError::malformed(format!(
                "invalid number literal '{}'",
                literal
            )));
        }

        literal
            .parse::<f64>()
            .map(Token::Number)
            .map_err(|_| EvalError::malformed(format!("invalid number literal '{}'", literal)))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, EvalError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();

        let ch = self.input.next()?;
        let token = match ch {
            '(' => Ok(Token::LParen),
            ')' => Ok(Token::RParen),
            c if c.is_ascii_digit() || c == '.' => self.read_number(c),
            c => match Operator::from_char(c) {
                Some(op) => Ok(Token::Operator(op)),
                None => Err(EvalError::malformed(format!("unexpected character '{}'", c))),
            },
        };
        Some(token)
    }
}
