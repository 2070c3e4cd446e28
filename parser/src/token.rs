//! FILENAME: parser/src/token.rs
//! PURPOSE: Token definitions for the expression lexer.
//! CONTEXT: Tokens are the atomic units produced by the lexer and consumed by
//! the shunting-yard translator. Operators and functions are closed enums, so
//! no raw text survives past tokenization.

/// Binary operators recognized by the engine.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Operator {
    Add,      // +
    Subtract, // -
    Multiply, // *
    Divide,   // /
    Power,    // ^
}

/// Unary math functions recognized by the engine.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    /// Base-10 logarithm.
    Log,
    /// Natural logarithm.
    Ln,
    Sqrt,
}

impl Function {
    /// Resolves a lowercase name to a function, if one matches.
    pub fn from_name(name: &str) -> Option<Function> {
        match name {
            "sin" => Some(Function::Sin),
            "cos" => Some(Function::Cos),
            "tan" => Some(Function::Tan),
            "log" => Some(Function::Log),
            "ln" => Some(Function::Ln),
            "sqrt" => Some(Function::Sqrt),
            _ => None,
        }
    }
}

/// Tokens recognized by the expression lexer.
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal, or a named constant (pi, e) resolved during scanning.
    Number(f64),
    Operator(Operator),
    Function(Function),
    LParen,
    RParen,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operator::Add => write!(f, "+"),
            Operator::Subtract => write!(f, "-"),
            Operator::Multiply => write!(f, "*"),
            Operator::Divide => write!(f, "/"),
            Operator::Power => write!(f, "^"),
        }
    }
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Function::Sin => write!(f, "sin"),
            Function::Cos => write!(f, "cos"),
            Function::Tan => write!(f, "tan"),
            Function::Log => write!(f, "log"),
            Function::Ln => write!(f, "ln"),
            Function::Sqrt => write!(f, "sqrt"),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Operator(op) => write!(f, "{}", op),
            Token::Function(func) => write!(f, "{}", func),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}
