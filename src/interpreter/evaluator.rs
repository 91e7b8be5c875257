/// Binary operator evaluation logic.
///
/// Applies one arithmetic operation to two already-evaluated operands,
/// including the division-by-zero check.
pub mod binary;

/// Core evaluation logic.
///
/// Contains the tree reduction that folds an expression down to a single
/// integer.
pub mod core;
