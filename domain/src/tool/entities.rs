//! Tool domain entities

use crate::util::format_float;
use serde::{Deserialize, Serialize};

/// The closed set of tools the reasoning model may request.
///
/// Dispatch is keyed on this enum rather than on raw strings, so the
/// registry cannot drift from the catalogue shown to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolName {
    CalculateAverage,
    SquareRoot,
    BasicCalculator,
    CompareNumbers,
    CountVowels,
    CountLetters,
    CountConsonants,
    AnalyzeString,
}

impl ToolName {
    /// All tools, in catalogue order
    pub const ALL: [ToolName; 8] = [
        ToolName::CalculateAverage,
        ToolName::SquareRoot,
        ToolName::BasicCalculator,
        ToolName::CompareNumbers,
        ToolName::CountVowels,
        ToolName::CountLetters,
        ToolName::CountConsonants,
        ToolName::AnalyzeString,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::CalculateAverage => "calculate_average",
            ToolName::SquareRoot => "square_root",
            ToolName::BasicCalculator => "basic_calculator",
            ToolName::CompareNumbers => "compare_numbers",
            ToolName::CountVowels => "count_vowels",
            ToolName::CountLetters => "count_letters",
            ToolName::CountConsonants => "count_consonants",
            ToolName::AnalyzeString => "analyze_string",
        }
    }

    /// Exact-name lookup. No aliasing, no case folding.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.as_str() == name)
    }

    /// The catalogue entry for this tool
    pub fn definition(&self) -> ToolDefinition {
        match self {
            ToolName::CalculateAverage => {
                ToolDefinition::new(*self, "Calculate average of a list of numbers")
                    .with_parameter(ToolParameter::new("numbers", ParamType::NumberList, true))
            }
            ToolName::SquareRoot => {
                ToolDefinition::new(*self, "Calculate square root of a number")
                    .with_parameter(ToolParameter::new("number", ParamType::Number, true))
            }
            ToolName::BasicCalculator => {
                ToolDefinition::new(*self, "Evaluate mathematical expressions")
                    .with_parameter(ToolParameter::new("expression", ParamType::Text, true))
            }
            ToolName::CompareNumbers => {
                ToolDefinition::new(*self, "Compare two numbers (>, <, >=, <=, ==, !=)")
                    .with_parameter(ToolParameter::new("a", ParamType::Number, true))
                    .with_parameter(ToolParameter::new("b", ParamType::Number, true))
                    .with_parameter(ToolParameter::new("operator", ParamType::Text, true))
            }
            ToolName::CountVowels => ToolDefinition::new(*self, "Count vowels in text")
                .with_parameter(ToolParameter::new("text", ParamType::Text, true))
                .with_parameter(ToolParameter::new("include_y", ParamType::Flag, false)),
            ToolName::CountLetters => ToolDefinition::new(*self, "Count letters in text")
                .with_parameter(ToolParameter::new("text", ParamType::Text, true)),
            ToolName::CountConsonants => ToolDefinition::new(*self, "Count consonants in text")
                .with_parameter(ToolParameter::new("text", ParamType::Text, true))
                .with_parameter(ToolParameter::new("include_y", ParamType::Flag, false)),
            ToolName::AnalyzeString => {
                ToolDefinition::new(*self, "Get comprehensive text analysis")
                    .with_parameter(ToolParameter::new("text", ParamType::Text, true))
            }
        }
    }

    /// Catalogue entries for every tool, in catalogue order
    pub fn catalogue() -> Vec<ToolDefinition> {
        Self::ALL.iter().map(|tool| tool.definition()).collect()
    }
}

impl std::fmt::Display for ToolName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Declared type of a tool parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamType {
    Number,
    NumberList,
    Text,
    /// Truthy value: non-zero number or `true`/`yes`/`1`
    Flag,
}

impl ParamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::Number => "number",
            ParamType::NumberList => "list of numbers",
            ParamType::Text => "string",
            ParamType::Flag => "flag",
        }
    }
}

/// Parameter specification for a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolParameter {
    pub name: String,
    pub param_type: ParamType,
    pub required: bool,
}

impl ToolParameter {
    pub fn new(name: impl Into<String>, param_type: ParamType, required: bool) -> Self {
        Self {
            name: name.into(),
            param_type,
            required,
        }
    }
}

/// Catalogue entry describing a tool to the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: ToolName,
    /// One-line description shown in the prompt
    pub description: String,
    pub parameters: Vec<ToolParameter>,
}

impl ToolDefinition {
    pub fn new(name: ToolName, description: impl Into<String>) -> Self {
        Self {
            name,
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }

    /// Call signature listing the required parameters, e.g. `compare_numbers(a, b, operator)`
    pub fn signature(&self) -> String {
        let params: Vec<&str> = self
            .parameters
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name.as_str())
            .collect();
        format!("{}({})", self.name, params.join(", "))
    }

    /// `signature: description`, as listed in the prompt catalogue
    pub fn catalogue_line(&self) -> String {
        format!("{}: {}", self.signature(), self.description)
    }

    /// Number of required parameters
    pub fn min_arity(&self) -> usize {
        self.parameters.iter().filter(|p| p.required).count()
    }

    /// Total number of declared parameters
    pub fn max_arity(&self) -> usize {
        self.parameters.len()
    }
}

/// A literal argument parsed from model output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolArgument {
    Number(f64),
    Text(String),
    NumberList(Vec<f64>),
}

impl ToolArgument {
    pub fn type_name(&self) -> &'static str {
        match self {
            ToolArgument::Number(_) => "number",
            ToolArgument::Text(_) => "string",
            ToolArgument::NumberList(_) => "list",
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            ToolArgument::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ToolArgument::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number_list(&self) -> Option<&[f64]> {
        match self {
            ToolArgument::NumberList(items) => Some(items),
            _ => None,
        }
    }
}

impl std::fmt::Display for ToolArgument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolArgument::Number(n) => write!(f, "{}", format_float(*n)),
            ToolArgument::Text(s) => write!(f, "'{}'", s),
            ToolArgument::NumberList(items) => {
                let rendered: Vec<String> = items.iter().map(|n| format_float(*n)).collect();
                write!(f, "[{}]", rendered.join(", "))
            }
        }
    }
}

/// A tool invocation extracted from model output
///
/// An empty name marks a candidate that could not be parsed; such calls are
/// dropped before execution and never reach the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    name: String,
    arguments: Vec<ToolArgument>,
    /// The matched substring, kept for diagnostics
    raw: String,
}

impl ToolCall {
    pub fn new(
        name: impl Into<String>,
        arguments: Vec<ToolArgument>,
        raw: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            arguments,
            raw: raw.into(),
        }
    }

    /// Sentinel for a candidate that failed to parse
    pub fn unparsed(raw: impl Into<String>) -> Self {
        Self::new(String::new(), Vec::new(), raw)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arguments(&self) -> &[ToolArgument] {
        &self.arguments
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_parsed(&self) -> bool {
        !self.name.is_empty()
    }

    /// Resolve the name against the closed tool set
    pub fn tool(&self) -> Option<ToolName> {
        ToolName::from_name(&self.name)
    }
}

impl std::fmt::Display for ToolCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let args: Vec<String> = self.arguments.iter().map(|a| a.to_string()).collect();
        write!(f, "{}({})", self.name, args.join(", "))
    }
}
