/// Numeric helpers.
///
/// This module checks that digit runs were converted to `f64` without
/// rounding and compares evaluation results with a tolerance suitable for
/// comparing strategies against each other.
pub mod num;
