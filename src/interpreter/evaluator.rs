/// Statement-level evaluation and shared evaluator types.
///
/// Dispatches between declarations and plain expressions, and defines the
/// result type used by every grammar level.
pub mod core;

/// Left-associative binary levels.
///
/// Evaluates sums and differences, then products, quotients and remainders.
pub mod binary;

/// Postfix, power and primary levels.
///
/// Evaluates factorials, exponentiation, literals, variable references,
/// bracketed groups and unary signs.
pub mod unary;
