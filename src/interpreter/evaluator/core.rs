use crate::{ast::Expr, error::RuntimeError, interpreter::evaluator::binary::eval_binary};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree down to a single integer.
///
/// The reduction is a pure fold: the tree is never mutated and no state is
/// shared between calls. Operands evaluate left to right, and division checks
/// its right operand for zero before dividing.
///
/// The left spine of the tree is folded iteratively with a pending-operation
/// stack; recursion happens only into right-hand subtrees. Left-associative
/// operator chains nest along the left spine, so arbitrarily long chains
/// evaluate in constant call-stack depth, while right-hand recursion depth is
/// bounded by the parser's grouping limit.
///
/// # Parameters
/// - `expr`: The expression tree to reduce.
///
/// # Returns
/// The computed integer, or a [`RuntimeError`] if a division by zero occurs.
///
/// # Example
/// ```
/// use intcalc::{
///     ast::{BinaryOperator, Expr},
///     interpreter::evaluator::core::eval,
/// };
///
/// // 2 * 3
/// let expr = Expr::BinaryOp { left:   Box::new(Expr::Literal { value:  2,
///                                                              column: 1, }),
///                             op:     BinaryOperator::Mul,
///                             right:  Box::new(Expr::Literal { value:  3,
///                                                              column: 5, }),
///                             column: 3, };
///
/// assert_eq!(eval(&expr).unwrap(), 6);
/// ```
pub fn eval(expr: &Expr) -> EvalResult<i64> {
    let mut pending = Vec::new();
    let mut node = expr;

    loop {
        match node {
            Expr::BinaryOp { left,
                             op,
                             right,
                             column, } => {
                pending.push((*op, right.as_ref(), *column));
                node = left;
            },
            Expr::Literal { value, .. } => {
                // The deepest pending operation applies first, rebuilding the
                // left-to-right order of the source.
                let mut accumulated = *value;
                while let Some((op, right, column)) = pending.pop() {
                    let right = eval(right)?;
                    accumulated = eval_binary(op, accumulated, right, column)?;
                }
                return Ok(accumulated);
            },
        }
    }
}
