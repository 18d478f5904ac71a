use crate::{
    ast::{BinaryOperator, UnaryOperator},
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, apply_binary, apply_unary},
};

/// An operator recognized in postfix text.
#[derive(Debug, Clone, Copy)]
enum RpnOperator {
    Binary(BinaryOperator),
    Unary(UnaryOperator),
}

fn rpn_operator(token: &str) -> Option<RpnOperator> {
    let operator = match token {
        "+" => RpnOperator::Binary(BinaryOperator::Add),
        "-" => RpnOperator::Binary(BinaryOperator::Sub),
        "*" => RpnOperator::Binary(BinaryOperator::Mul),
        "/" => RpnOperator::Binary(BinaryOperator::Div),
        "pos" => RpnOperator::Unary(UnaryOperator::Plus),
        "neg" => RpnOperator::Unary(UnaryOperator::Minus),
        _ => return None,
    };
    Some(operator)
}

/// Evaluates a whitespace-separated postfix sequence.
///
/// Accepts the vocabulary produced by
/// [`PostfixPrinter`](crate::interpreter::evaluator::postfix::PostfixPrinter):
/// numbers, `+ - * /`, and `pos` / `neg` for the sign operators. Numbers may
/// use any syntax `f64` parses, including `inf` and `NaN`, so rendered
/// results can be fed back in.
///
/// # Errors
/// - [`RuntimeError::UnknownRpnToken`] for anything that is neither a number
///   nor an operator.
/// - [`RuntimeError::StackUnderflow`] if an operator lacks operands.
/// - [`RuntimeError::StackImbalance`] if the sequence does not reduce to a
///   single value.
///
/// # Example
/// ```
/// use rdcalc::interpreter::evaluator::rpn::evaluate_rpn;
///
/// assert_eq!(evaluate_rpn("1 2 3 - -").unwrap(), 2.0);
/// assert_eq!(evaluate_rpn("6 neg").unwrap(), -6.0);
/// assert!(evaluate_rpn("1 +").is_err());
/// ```
pub fn evaluate_rpn(source: &str) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::new();

    for (index, token) in source.split_whitespace().enumerate() {
        match rpn_operator(token) {
            Some(RpnOperator::Binary(op)) => {
                let [left, right] = pop_operands::<2>(&mut stack, token)?;
                stack.push(apply_binary(op, left, right));
            },
            Some(RpnOperator::Unary(op)) => {
                let [operand] = pop_operands::<1>(&mut stack, token)?;
                stack.push(apply_unary(op, operand));
            },
            None => {
                let value = token.parse::<f64>()
                                 .map_err(|_| RuntimeError::UnknownRpnToken { token:
                                                                                  token.to_string(),
                                                                              index })?;
                stack.push(value);
            },
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        values => Err(RuntimeError::StackImbalance { depth: values.len() }),
    }
}

/// Removes the top `N` values, deepest first.
fn pop_operands<const N: usize>(stack: &mut Vec<f64>, token: &str) -> EvalResult<[f64; N]> {
    let available = stack.len();
    if available < N {
        return Err(RuntimeError::StackUnderflow { operator: token.to_string(),
                                                  needed: N,
                                                  available });
    }

    let mut operands = [0.0; N];
    operands.copy_from_slice(&stack[available - N..]);
    stack.truncate(available - N);
    Ok(operands)
}
