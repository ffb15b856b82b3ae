//! Per-sample evaluation of a compiled expression tree.
//!
//! Any non-finite intermediate value is reported as an error, so a failed
//! sample never reaches the plot.

use crate::expr::ast::{BinaryOp, Function, Node};
use crate::expr::error::{EvalError, EvalResult};

/// Recursion follows the tree, whose height the parser caps at
/// [`MAX_DEPTH`](crate::expr::MAX_DEPTH).
pub fn eval_node(node: &Node, x: f64) -> EvalResult<f64> {
    match node {
        Node::Number(value) => Ok(*value),
        Node::Var => Ok(x),
        Node::Neg(inner) => eval_node(inner, x).map(|v| -v),
        Node::Binary { op, lhs, rhs } => {
            let a = eval_node(lhs, x)?;
            let b = eval_node(rhs, x)?;
            apply_binary(*op, a, b)
        }
        Node::Call { func, args } => {
            let a = match args.first() {
                Some(arg) => eval_node(arg, x)?,
                None => return Err(EvalError::Domain(func.name())),
            };
            let b = args.get(1).map(|arg| eval_node(arg, x)).transpose()?;
            apply_function(*func, a, b)
        }
    }
}

fn apply_binary(op: BinaryOp, a: f64, b: f64) -> EvalResult<f64> {
    let value = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            a / b
        }
        BinaryOp::Rem => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            floored_rem(a, b)
        }
        BinaryOp::Pow => return finite("pow", power(a, b)?),
    };
    finite("operator", value)
}

fn apply_function(func: Function, a: f64, b: Option<f64>) -> EvalResult<f64> {
    let name = func.name();
    let value = match func {
        Function::Sin => a.sin(),
        Function::Cos => a.cos(),
        Function::Tan => a.tan(),
        Function::Asin => a.asin(),
        Function::Acos => a.acos(),
        Function::Atan => a.atan(),
        Function::Sinh => a.sinh(),
        Function::Cosh => a.cosh(),
        Function::Tanh => a.tanh(),
        Function::Sqrt => a.sqrt(),
        Function::Exp => a.exp(),
        Function::Log => match b {
            None => positive_log(name, a)?.ln(),
            Some(base) => {
                let numerator = positive_log(name, a)?.ln();
                let denominator = positive_log(name, base)?.ln();
                if denominator == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                numerator / denominator
            }
        },
        Function::Log10 => positive_log(name, a)?.log10(),
        Function::Log2 => positive_log(name, a)?.log2(),
        Function::Abs => a.abs(),
        Function::Floor => a.floor(),
        Function::Ceil => a.ceil(),
        Function::Pow => power(a, second(func, b)?)?,
        Function::Atan2 => a.atan2(second(func, b)?),
        Function::Hypot => a.hypot(second(func, b)?),
    };
    finite(name, value)
}

fn second(func: Function, b: Option<f64>) -> EvalResult<f64> {
    b.ok_or(EvalError::Domain(func.name()))
}

fn positive_log(name: &'static str, v: f64) -> EvalResult<f64> {
    if v > 0.0 {
        Ok(v)
    } else {
        Err(EvalError::Domain(name))
    }
}

fn power(base: f64, exponent: f64) -> EvalResult<f64> {
    if base == 0.0 && exponent < 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    Ok(base.powf(exponent))
}

fn floored_rem(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        r + b
    } else {
        r
    }
}

fn finite(name: &'static str, value: f64) -> EvalResult<f64> {
    if value.is_nan() {
        Err(EvalError::Domain(name))
    } else if value.is_infinite() {
        Err(EvalError::Overflow)
    } else {
        Ok(value)
    }
}
