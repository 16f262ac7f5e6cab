//! Tool Registry
//!
//! The [`ToolRegistry`] is the fixed table from [`ToolName`] to a typed
//! handler. Each handler coerces the parsed [`ToolArgument`]s to the tool's
//! parameter types and calls the pure function in [`math`](super::math) or
//! [`text`](super::text).
//!
//! # Usage
//!
//! ```ignore
//! use reasoner_infrastructure::tools::ToolRegistry;
//!
//! let registry = ToolRegistry::new();
//! let entry = registry.resolve("square_root").unwrap();
//! let value = entry.invoke(&[ToolArgument::Number(16.0)])?;
//! assert_eq!(value.to_string(), "4.0");
//! ```
//!
//! The registry is built once and never mutated, so it can be shared across
//! threads without locking.

use super::{math, text};
use reasoner_domain::tool::{
    entities::{ToolArgument, ToolDefinition, ToolName},
    value_objects::ToolValue,
};

/// Typed entry point of one tool
pub type ToolHandler = fn(&[ToolArgument]) -> Result<ToolValue, String>;

/// One registered tool
pub struct ToolEntry {
    definition: ToolDefinition,
    handler: ToolHandler,
    /// Accepts any number of arguments from `min_arity` up
    variadic: bool,
}

impl ToolEntry {
    fn new(tool: ToolName, handler: ToolHandler) -> Self {
        Self {
            definition: tool.definition(),
            handler,
            variadic: false,
        }
    }

    fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    pub fn name(&self) -> ToolName {
        self.definition.name
    }

    pub fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    /// Check arity, then run the handler
    pub fn invoke(&self, args: &[ToolArgument]) -> Result<ToolValue, String> {
        self.check_arity(args.len())?;
        (self.handler)(args)
    }

    fn check_arity(&self, given: usize) -> Result<(), String> {
        let min = self.definition.min_arity();
        let max = self.definition.max_arity();

        if self.variadic {
            if given < min {
                return Err(format!(
                    "{}() takes at least {} argument(s) but {} were given",
                    self.name(),
                    min,
                    given
                ));
            }
            return Ok(());
        }

        if given < min || given > max {
            let expected = if min == max {
                min.to_string()
            } else {
                format!("{} to {}", min, max)
            };
            return Err(format!(
                "{}() takes {} argument(s) but {} were given",
                self.name(),
                expected,
                given
            ));
        }
        Ok(())
    }
}

/// Fixed registry of the reasoning tools
pub struct ToolRegistry {
    entries: Vec<ToolEntry>,
}

impl ToolRegistry {
    /// Build the registry with every [`ToolName`], in catalogue order
    pub fn new() -> Self {
        let entries = ToolName::ALL
            .into_iter()
            .map(|tool| match tool {
                ToolName::CalculateAverage => {
                    ToolEntry::new(tool, handle_calculate_average).variadic()
                }
                ToolName::SquareRoot => ToolEntry::new(tool, handle_square_root),
                ToolName::BasicCalculator => ToolEntry::new(tool, handle_basic_calculator),
                ToolName::CompareNumbers => ToolEntry::new(tool, handle_compare_numbers),
                ToolName::CountVowels => ToolEntry::new(tool, handle_count_vowels),
                ToolName::CountLetters => ToolEntry::new(tool, handle_count_letters),
                ToolName::CountConsonants => ToolEntry::new(tool, handle_count_consonants),
                ToolName::AnalyzeString => ToolEntry::new(tool, handle_analyze_string),
            })
            .collect();

        Self { entries }
    }

    pub fn get(&self, tool: ToolName) -> Option<&ToolEntry> {
        self.entries.iter().find(|entry| entry.name() == tool)
    }

    /// Exact-name lookup
    pub fn resolve(&self, name: &str) -> Option<&ToolEntry> {
        ToolName::from_name(name).and_then(|tool| self.get(tool))
    }

    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.entries
            .iter()
            .map(|entry| entry.definition.clone())
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name().as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ==================== Argument Coercion ====================

fn number(args: &[ToolArgument], index: usize, param: &str) -> Result<f64, String> {
    match args.get(index) {
        Some(ToolArgument::Number(n)) => Ok(*n),
        Some(other) => Err(format!(
            "Parameter '{}' must be a number, got {} {}",
            param,
            other.type_name(),
            other
        )),
        None => Err(format!("Missing parameter '{}'", param)),
    }
}

fn string<'a>(args: &'a [ToolArgument], index: usize, param: &str) -> Result<&'a str, String> {
    match args.get(index) {
        Some(ToolArgument::Text(s)) => Ok(s),
        Some(other) => Err(format!(
            "Parameter '{}' must be a string, got {} {}",
            param,
            other.type_name(),
            other
        )),
        None => Err(format!("Missing parameter '{}'", param)),
    }
}

/// Truthy: non-zero number or `true`/`yes`/`1`; absent means `default`
fn flag(args: &[ToolArgument], index: usize, param: &str, default: bool) -> Result<bool, String> {
    match args.get(index) {
        None => Ok(default),
        Some(ToolArgument::Number(n)) => Ok(*n != 0.0),
        Some(ToolArgument::Text(s)) => Ok(matches!(
            s.trim().to_lowercase().as_str(),
            "true" | "yes" | "1"
        )),
        Some(other) => Err(format!(
            "Parameter '{}' must be a flag, got {} {}",
            param,
            other.type_name(),
            other
        )),
    }
}

fn count(n: usize) -> ToolValue {
    ToolValue::Integer(i64::try_from(n).unwrap_or(i64::MAX))
}

// ==================== Handlers ====================

/// One list argument, or any number of plain numbers
fn handle_calculate_average(args: &[ToolArgument]) -> Result<ToolValue, String> {
    let numbers: Vec<f64> = match args {
        [ToolArgument::NumberList(items)] => items.clone(),
        _ => args
            .iter()
            .enumerate()
            .map(|(i, _)| number(args, i, "numbers"))
            .collect::<Result<_, _>>()?,
    };
    math::calculate_average(&numbers).map(ToolValue::Float)
}

fn handle_square_root(args: &[ToolArgument]) -> Result<ToolValue, String> {
    math::square_root(number(args, 0, "number")?).map(ToolValue::Float)
}

fn handle_basic_calculator(args: &[ToolArgument]) -> Result<ToolValue, String> {
    math::basic_calculator(string(args, 0, "expression")?)
}

fn handle_compare_numbers(args: &[ToolArgument]) -> Result<ToolValue, String> {
    let a = number(args, 0, "a")?;
    let b = number(args, 1, "b")?;
    let operator = string(args, 2, "operator")?;
    math::compare_numbers(a, b, operator).map(ToolValue::Boolean)
}

fn handle_count_vowels(args: &[ToolArgument]) -> Result<ToolValue, String> {
    let input = string(args, 0, "text")?;
    let include_y = flag(args, 1, "include_y", false)?;
    Ok(count(text::count_vowels(input, include_y)))
}

fn handle_count_letters(args: &[ToolArgument]) -> Result<ToolValue, String> {
    Ok(count(text::count_letters(string(args, 0, "text")?)))
}

fn handle_count_consonants(args: &[ToolArgument]) -> Result<ToolValue, String> {
    let input = string(args, 0, "text")?;
    let include_y = flag(args, 1, "include_y", true)?;
    Ok(count(text::count_consonants(input, include_y)))
}

fn handle_analyze_string(args: &[ToolArgument]) -> Result<ToolValue, String> {
    Ok(ToolValue::Analysis(text::analyze_string(string(args, 0, "text")?)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: f64) -> ToolArgument {
        ToolArgument::Number(n)
    }

    fn txt(s: &str) -> ToolArgument {
        ToolArgument::Text(s.to_string())
    }

    fn invoke(name: &str, args: &[ToolArgument]) -> Result<ToolValue, String> {
        ToolRegistry::new().resolve(name).unwrap().invoke(args)
    }

    #[test]
    fn test_registry_has_all_tools_in_order() {
        let registry = ToolRegistry::new();
        assert_eq!(registry.len(), 8);
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(
            names,
            vec![
                "calculate_average",
                "square_root",
                "basic_calculator",
                "compare_numbers",
                "count_vowels",
                "count_letters",
                "count_consonants",
                "analyze_string",
            ]
        );
    }

    #[test]
    fn test_resolve_is_exact() {
        let registry = ToolRegistry::new();
        assert!(registry.resolve("square_root").is_some());
        assert!(registry.resolve("sqrt").is_none());
        assert!(registry.resolve("SQUARE_ROOT").is_none());
    }

    #[test]
    fn test_calculate_average_list_and_variadic() {
        assert_eq!(
            invoke("calculate_average", &[ToolArgument::NumberList(vec![18.0, 50.0])]),
            Ok(ToolValue::Float(34.0))
        );
        assert_eq!(
            invoke("calculate_average", &[num(18.0), num(50.0)]),
            Ok(ToolValue::Float(34.0))
        );
        assert_eq!(
            invoke("calculate_average", &[ToolArgument::NumberList(vec![])]),
            Err("Cannot calculate average of empty list".to_string())
        );
        assert!(invoke("calculate_average", &[]).unwrap_err().contains("at least 1"));
        assert!(invoke("calculate_average", &[num(1.0), txt("x")]).is_err());
    }

    #[test]
    fn test_arity_errors() {
        assert_eq!(
            invoke("square_root", &[num(1.0), num(2.0)]),
            Err("square_root() takes 1 argument(s) but 2 were given".to_string())
        );
        assert_eq!(
            invoke("count_vowels", &[]),
            Err("count_vowels() takes 1 to 2 argument(s) but 0 were given".to_string())
        );
    }

    #[test]
    fn test_type_mismatch() {
        let err = invoke("square_root", &[txt("abc")]).unwrap_err();
        assert_eq!(err, "Parameter 'number' must be a number, got string 'abc'");

        let err = invoke("count_letters", &[num(12345.0)]).unwrap_err();
        assert!(err.contains("must be a string"));
    }

    #[test]
    fn test_compare_numbers() {
        assert_eq!(
            invoke("compare_numbers", &[num(7.0), num(4.0), txt(">")]),
            Ok(ToolValue::Boolean(true))
        );
        assert!(invoke("compare_numbers", &[num(7.0), num(4.0), txt("=>")]).is_err());
    }

    #[test]
    fn test_include_y_flag() {
        assert_eq!(
            invoke("count_vowels", &[txt("Multimodality")]),
            Ok(ToolValue::Integer(5))
        );
        assert_eq!(
            invoke("count_vowels", &[txt("Multimodality"), txt("True")]),
            Ok(ToolValue::Integer(6))
        );
        assert_eq!(
            invoke("count_vowels", &[txt("Multimodality"), num(1.0)]),
            Ok(ToolValue::Integer(6))
        );
        assert_eq!(
            invoke("count_consonants", &[txt("Multimodality")]),
            Ok(ToolValue::Integer(8))
        );
        assert_eq!(
            invoke("count_consonants", &[txt("Multimodality"), txt("false")]),
            Ok(ToolValue::Integer(7))
        );
        assert_eq!(
            invoke("count_consonants", &[txt("Multimodality"), num(0.0)]),
            Ok(ToolValue::Integer(7))
        );
    }

    #[test]
    fn test_basic_calculator_and_analysis() {
        assert_eq!(
            invoke("basic_calculator", &[txt("18 + 50")]),
            Ok(ToolValue::Integer(68))
        );
        match invoke("analyze_string", &[txt("Hi there")]).unwrap() {
            ToolValue::Analysis(a) => {
                assert_eq!(a.words, 2);
                assert_eq!(a.letters, 7);
            }
            other => panic!("expected analysis, got {:?}", other),
        }
    }
}
