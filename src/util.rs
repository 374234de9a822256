/// Numeric conversion helpers.
///
/// This module provides checked functions for narrowing `f64` values to
/// integers. The evaluator computes with `f64` throughout and only narrows
/// for the operators that are defined on integers (`%` and `!`).
///
/// All functions return a `Result`, which is `Ok` if the conversion is valid,
/// or an error if the value is out of range or otherwise unsuitable.
pub mod num;
