//! Arithmetic expression evaluator behind `basic_calculator`
//!
//! Accepts only `0123456789+-*/.() ` and evaluates with integer/float
//! semantics: `+ - *` on integers stay integral, `/` always yields a float,
//! `//` floors, `**` is right-associative and binds tighter than unary minus.
//!
//! Grammar:
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := unary (('*' | '/' | '//') unary)*
//! unary  := ('+' | '-') unary | power
//! power  := atom ('**' unary)?
//! atom   := number | '(' expr ')'
//! ```

use reasoner_domain::ToolValue;
use thiserror::Error;

const ALLOWED_CHARS: &str = "0123456789+-*/.() ";
const MAX_DEPTH: usize = 256;

/// Errors produced while evaluating an expression
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("Invalid characters in expression")]
    InvalidCharacters,

    #[error("Cannot evaluate expression: {0}")]
    Syntax(String),

    #[error("Cannot evaluate expression: division by zero")]
    DivisionByZero,

    #[error("Cannot evaluate expression: numeric overflow")]
    Overflow,

    #[error("Cannot evaluate expression: result is not a real number")]
    NotReal,
}

/// An intermediate value: integers stay exact until an operation needs a float
#[derive(Debug, Clone, Copy, PartialEq)]
enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(f) => f,
        }
    }

    fn is_zero(self) -> bool {
        match self {
            Number::Int(n) => n == 0,
            Number::Float(f) => f == 0.0,
        }
    }
}

impl From<Number> for ToolValue {
    fn from(number: Number) -> Self {
        match number {
            Number::Int(n) => ToolValue::Integer(n),
            Number::Float(f) => ToolValue::Float(f),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(Number),
    Plus,
    Minus,
    Star,
    Slash,
    DoubleSlash,
    DoubleStar,
    LParen,
    RParen,
}

/// Evaluate `expression` to an integer or float
pub fn evaluate(expression: &str) -> Result<ToolValue, ExpressionError> {
    if !expression.chars().all(|c| ALLOWED_CHARS.contains(c)) {
        return Err(ExpressionError::InvalidCharacters);
    }

    let tokens = tokenize(expression)?;
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let value = parser.expr()?;

    if let Some(token) = parser.peek() {
        return Err(ExpressionError::Syntax(format!(
            "unexpected token {:?}",
            token
        )));
    }

    Ok(value.into())
}

fn tokenize(expression: &str) -> Result<Vec<Token>, ExpressionError> {
    let chars: Vec<char> = expression.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            ' ' => {
                i += 1;
            }
            '0'..='9' | '.' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                let literal: String = chars[start..i].iter().collect();
                tokens.push(Token::Number(parse_literal(&literal)?));
            }
            '+' => {
                tokens.push(Token::Plus);
                i += 1;
            }
            '-' => {
                tokens.push(Token::Minus);
                i += 1;
            }
            '*' => {
                if chars.get(i + 1) == Some(&'*') {
                    tokens.push(Token::DoubleStar);
                    i += 2;
                } else {
                    tokens.push(Token::Star);
                    i += 1;
                }
            }
            '/' => {
                if chars.get(i + 1) == Some(&'/') {
                    tokens.push(Token::DoubleSlash);
                    i += 2;
                } else {
                    tokens.push(Token::Slash);
                    i += 1;
                }
            }
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            _ => return Err(ExpressionError::InvalidCharacters),
        }
    }

    Ok(tokens)
}

fn parse_literal(literal: &str) -> Result<Number, ExpressionError> {
    let invalid = || ExpressionError::Syntax(format!("invalid number '{}'", literal));

    if literal.contains('.') {
        if literal == "." || literal.matches('.').count() > 1 {
            return Err(invalid());
        }
        literal
            .parse::<f64>()
            .map_err(|_| invalid())
            .and_then(finite)
    } else {
        literal
            .parse::<i64>()
            .map(Number::Int)
            .map_err(|_| ExpressionError::Overflow)
    }
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expr(&mut self) -> Result<Number, ExpressionError> {
        let mut value = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.pos += 1;
                    value = add(value, self.term()?)?;
                }
                Some(Token::Minus) => {
                    self.pos += 1;
                    value = subtract(value, self.term()?)?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> Result<Number, ExpressionError> {
        let mut value = self.unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.pos += 1;
                    value = multiply(value, self.unary()?)?;
                }
                Some(Token::Slash) => {
                    self.pos += 1;
                    value = divide(value, self.unary()?)?;
                }
                Some(Token::DoubleSlash) => {
                    self.pos += 1;
                    value = floor_divide(value, self.unary()?)?;
                }
                _ => return Ok(value),
            }
        }
    }

    /// All recursion passes through here; nesting is bounded at `MAX_DEPTH`.
    fn unary(&mut self) -> Result<Number, ExpressionError> {
        if self.depth >= MAX_DEPTH {
            return Err(ExpressionError::Syntax(
                "expression nested too deeply".to_string(),
            ));
        }
        self.depth += 1;
        let value = self.signed();
        self.depth -= 1;
        value
    }

    fn signed(&mut self) -> Result<Number, ExpressionError> {
        match self.peek() {
            Some(Token::Plus) => {
                self.pos += 1;
                self.unary()
            }
            Some(Token::Minus) => {
                self.pos += 1;
                negate(self.unary()?)
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<Number, ExpressionError> {
        let base = self.atom()?;
        if self.peek() == Some(&Token::DoubleStar) {
            self.pos += 1;
            let exponent = self.unary()?;
            return pow(base, exponent);
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<Number, ExpressionError> {
        match self.next() {
            Some(Token::Number(n)) => Ok(n),
            Some(Token::LParen) => {
                let value = self.expr()?;
                match self.next() {
                    Some(Token::RParen) => Ok(value),
                    _ => Err(ExpressionError::Syntax("unbalanced parentheses".to_string())),
                }
            }
            Some(token) => Err(ExpressionError::Syntax(format!(
                "unexpected token {:?}",
                token
            ))),
            None => Err(ExpressionError::Syntax(
                "unexpected end of expression".to_string(),
            )),
        }
    }
}

fn add(a: Number, b: Number) -> Result<Number, ExpressionError> {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => x.checked_add(y).map(Number::Int).ok_or(ExpressionError::Overflow),
        _ => finite(a.as_f64() + b.as_f64()),
    }
}

fn subtract(a: Number, b: Number) -> Result<Number, ExpressionError> {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => x.checked_sub(y).map(Number::Int).ok_or(ExpressionError::Overflow),
        _ => finite(a.as_f64() - b.as_f64()),
    }
}

fn multiply(a: Number, b: Number) -> Result<Number, ExpressionError> {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => x.checked_mul(y).map(Number::Int).ok_or(ExpressionError::Overflow),
        _ => finite(a.as_f64() * b.as_f64()),
    }
}

fn divide(a: Number, b: Number) -> Result<Number, ExpressionError> {
    if b.is_zero() {
        return Err(ExpressionError::DivisionByZero);
    }
    finite(a.as_f64() / b.as_f64())
}

fn floor_divide(a: Number, b: Number) -> Result<Number, ExpressionError> {
    if b.is_zero() {
        return Err(ExpressionError::DivisionByZero);
    }
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => {
            let quotient = x.checked_div(y).ok_or(ExpressionError::Overflow)?;
            if x % y != 0 && ((x < 0) != (y < 0)) {
                Ok(Number::Int(quotient - 1))
            } else {
                Ok(Number::Int(quotient))
            }
        }
        _ => finite((a.as_f64() / b.as_f64()).floor()),
    }
}

fn negate(a: Number) -> Result<Number, ExpressionError> {
    match a {
        Number::Int(x) => x.checked_neg().map(Number::Int).ok_or(ExpressionError::Overflow),
        Number::Float(f) => Ok(Number::Float(-f)),
    }
}

fn pow(base: Number, exponent: Number) -> Result<Number, ExpressionError> {
    if base.is_zero() && exponent.as_f64() < 0.0 {
        return Err(ExpressionError::DivisionByZero);
    }

    if let (Number::Int(b), Number::Int(e)) = (base, exponent) {
        if e >= 0 {
            let e = u32::try_from(e).map_err(|_| ExpressionError::Overflow)?;
            return b.checked_pow(e).map(Number::Int).ok_or(ExpressionError::Overflow);
        }
    }

    let result = base.as_f64().powf(exponent.as_f64());
    if result.is_nan() {
        return Err(ExpressionError::NotReal);
    }
    finite(result)
}

fn finite(value: f64) -> Result<Number, ExpressionError> {
    if value.is_infinite() {
        return Err(ExpressionError::Overflow);
    }
    Ok(Number::Float(value))
}
