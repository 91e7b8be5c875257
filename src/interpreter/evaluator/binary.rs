use crate::{ast::BinaryOperator, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Evaluates a binary arithmetic operation on two integers.
///
/// Division by zero is checked explicitly before dividing; division otherwise
/// truncates toward zero, per native `i64` division. Overflow is not checked
/// and behaves per the host's native integer arithmetic.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `column`: Column of the operator, for error reporting.
///
/// # Returns
/// An `EvalResult<i64>` containing the computed value.
///
/// # Example
/// ```
/// use intcalc::{ast::BinaryOperator, interpreter::evaluator::binary::eval_binary};
///
/// let result = eval_binary(BinaryOperator::Div, 7, 2, 1).unwrap();
/// assert_eq!(result, 3);
///
/// assert!(eval_binary(BinaryOperator::Div, 7, 0, 1).is_err());
/// ```
pub const fn eval_binary(op: BinaryOperator, left: i64, right: i64, column: usize) -> EvalResult<i64> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    match op {
        Add => Ok(left + right),
        Sub => Ok(left - right),
        Mul => Ok(left * right),
        Div => {
            if right == 0 {
                Err(RuntimeError::DivisionByZero { column })
            } else {
                Ok(left / right)
            }
        },
    }
}
