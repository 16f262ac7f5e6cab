//! Math tools: calculate_average, square_root, basic_calculator, compare_numbers

use super::expression;
use reasoner_domain::ToolValue;

/// Arithmetic mean
pub fn calculate_average(numbers: &[f64]) -> Result<f64, String> {
    if numbers.is_empty() {
        return Err("Cannot calculate average of empty list".to_string());
    }
    Ok(numbers.iter().sum::<f64>() / numbers.len() as f64)
}

pub fn square_root(number: f64) -> Result<f64, String> {
    if number < 0.0 {
        return Err("Cannot calculate square root of negative number".to_string());
    }
    Ok(number.sqrt())
}

/// Evaluate an arithmetic expression, see [`expression`]
pub fn basic_calculator(expr: &str) -> Result<ToolValue, String> {
    expression::evaluate(expr).map_err(|e| e.to_string())
}

/// Compare `a` and `b` with one of `> < >= <= == !=`
pub fn compare_numbers(a: f64, b: f64, operator: &str) -> Result<bool, String> {
    match operator.trim() {
        ">" => Ok(a > b),
        "<" => Ok(a < b),
        ">=" => Ok(a >= b),
        "<=" => Ok(a <= b),
        "==" => Ok(a == b),
        "!=" => Ok(a != b),
        other => Err(format!("Invalid operator: {}", other)),
    }
}
