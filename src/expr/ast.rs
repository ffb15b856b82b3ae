//! Expression tree and the whitelisted math namespace.

use std::f64::consts;
use std::ops::RangeInclusive;

/// Qualifier accepted in front of any function or constant (`math.sin`).
pub const NAMESPACE: &str = "math";

/// The bound variable.
pub const VARIABLE: &str = "x";

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Literal or resolved constant.
    Number(f64),
    /// The variable `x`.
    Var,
    Neg(Box<Node>),
    Binary {
        op: BinaryOp,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },
    Call {
        func: Function,
        args: Vec<Node>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    /// Floored modulo, result takes the sign of the divisor.
    Rem,
    Pow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Sqrt,
    Exp,
    /// `log(v)` is the natural log, `log(v, base)` takes a base.
    Log,
    Log10,
    Log2,
    Abs,
    Floor,
    Ceil,
    Pow,
    Atan2,
    Hypot,
}

impl Function {
    pub const ALL: [Function; 20] = [
        Function::Sin,
        Function::Cos,
        Function::Tan,
        Function::Asin,
        Function::Acos,
        Function::Atan,
        Function::Sinh,
        Function::Cosh,
        Function::Tanh,
        Function::Sqrt,
        Function::Exp,
        Function::Log,
        Function::Log10,
        Function::Log2,
        Function::Abs,
        Function::Floor,
        Function::Ceil,
        Function::Pow,
        Function::Atan2,
        Function::Hypot,
    ];

    /// Resolve an unqualified name. `ln` and `fabs` are aliases.
    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "ln" => return Some(Function::Log),
            "fabs" => return Some(Function::Abs),
            _ => {}
        }
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Asin => "asin",
            Function::Acos => "acos",
            Function::Atan => "atan",
            Function::Sinh => "sinh",
            Function::Cosh => "cosh",
            Function::Tanh => "tanh",
            Function::Sqrt => "sqrt",
            Function::Exp => "exp",
            Function::Log => "log",
            Function::Log10 => "log10",
            Function::Log2 => "log2",
            Function::Abs => "abs",
            Function::Floor => "floor",
            Function::Ceil => "ceil",
            Function::Pow => "pow",
            Function::Atan2 => "atan2",
            Function::Hypot => "hypot",
        }
    }

    pub fn arity(self) -> RangeInclusive<usize> {
        match self {
            Function::Log => 1..=2,
            Function::Pow | Function::Atan2 | Function::Hypot => 2..=2,
            _ => 1..=1,
        }
    }

    /// Arity as shown in error messages.
    pub fn arity_text(self) -> &'static str {
        match self {
            Function::Log => "1 or 2",
            Function::Pow | Function::Atan2 | Function::Hypot => "2",
            _ => "1",
        }
    }
}

/// Resolve an unqualified constant name.
pub fn constant(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(consts::PI),
        "e" => Some(consts::E),
        "tau" => Some(consts::TAU),
        _ => None,
    }
}

/// Strip the optional `math.` qualifier from a name as written.
pub fn unqualified(name: &str) -> &str {
    name.strip_prefix(NAMESPACE)
        .and_then(|rest| rest.strip_prefix('.'))
        .unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_names_round_trip() {
        for f in Function::ALL {
            assert_eq!(Function::lookup(f.name()), Some(f));
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!(Function::lookup("ln"), Some(Function::Log));
        assert_eq!(Function::lookup("fabs"), Some(Function::Abs));
        assert_eq!(Function::lookup("eval"), None);
        assert_eq!(Function::lookup("__import__"), None);
    }

    #[test]
    fn test_unqualified() {
        assert_eq!(unqualified("math.sin"), "sin");
        assert_eq!(unqualified("sin"), "sin");
        assert_eq!(unqualified("mathsin"), "mathsin");
    }
}
