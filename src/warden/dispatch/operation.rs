use std::fmt;
use std::str::FromStr;

/// `<num> <op> <num>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            BinaryOp::Add => a + b,
            BinaryOp::Subtract => a - b,
            BinaryOp::Multiply => a * b,
            BinaryOp::Divide => a / b,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
        }
    }
}

/// `<op> <num>`. Trigonometric operations take their argument in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Sin,
    Cos,
    Tan,
    Sqrt,
}

impl UnaryOp {
    /// Negative `Sqrt` input yields NaN; it is a result, not an error.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            UnaryOp::Sin => x.to_radians().sin(),
            UnaryOp::Cos => x.to_radians().cos(),
            UnaryOp::Tan => x.to_radians().tan(),
            UnaryOp::Sqrt => x.sqrt(),
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            UnaryOp::Sin => "sin",
            UnaryOp::Cos => "cos",
            UnaryOp::Tan => "tan",
            UnaryOp::Sqrt => "sqrt",
        }
    }
}

/// Every numeric action the calculator knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Binary(BinaryOp),
    Unary(UnaryOp),
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::Binary(BinaryOp::Add),
        Operation::Binary(BinaryOp::Subtract),
        Operation::Binary(BinaryOp::Divide),
        Operation::Binary(BinaryOp::Multiply),
        Operation::Unary(UnaryOp::Sin),
        Operation::Unary(UnaryOp::Cos),
        Operation::Unary(UnaryOp::Tan),
        Operation::Unary(UnaryOp::Sqrt),
    ];

    pub fn token(self) -> &'static str {
        match self {
            Operation::Binary(op) => op.token(),
            Operation::Unary(op) => op.token(),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Operation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Operation::ALL
            .into_iter()
            .find(|op| op.token() == lowered)
            .ok_or(())
    }
}
