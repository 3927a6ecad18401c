/// The evaluator module computes the value of a token sequence.
///
/// It implements the shunting-yard algorithm directly over two stacks,
/// without building a syntax tree.
///
/// # Responsibilities
/// - Defers operators until precedence and parentheses allow them to apply.
/// - Combines operands in double precision.
/// - Reports unbalanced parentheses, missing operands and leftover values.
pub mod evaluator;
/// The lexer module turns an expression string into tokens.
///
/// Words are separated by whitespace and classified one at a time as a
/// parenthesis, an operator or a number.
pub mod lexer;
/// The fixed set of binary operators with their precedence and semantics.
pub mod operator;
