/// Core evaluation loop and evaluator state.
///
/// Holds the operator and value stacks and drives the single left-to-right
/// pass over the tokens.
pub mod core;

/// Operator application.
///
/// Pops a pending operator and folds the top two values into one.
pub mod apply;
