//! Tool-call parsing from model output
//!
//! The model lists the tools it needs as flat function calls embedded in
//! prose, e.g. `calculate_average([18, 50])` or `count_vowels("Multimodality")`.
//! Everything here is total: unparseable candidates become
//! [`ToolCall::unparsed`] sentinels and are filtered out by
//! [`parse_tool_calls`] before anything is executed.
//!
//! Only single-level calls are recognised. A `)` inside a quoted argument ends
//! the call early; nested calls and expressions are not supported.

use super::entities::{ToolArgument, ToolCall};
use crate::reasoning::sections::ReasoningSections;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// A candidate call anywhere in the text
static CALL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z_][A-Za-z0-9_]*\s*\([^)]*\)").expect("Failed to compile call regex")
});

/// Name and raw argument text of a single candidate
static SPLIT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^([A-Za-z_][A-Za-z0-9_]*)\s*\((.*)\)").expect("Failed to compile split regex")
});

/// Return every call-shaped substring of `text`, in order of appearance
pub fn extract_tool_calls(text: &str) -> Vec<&str> {
    CALL_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Parse one call string into a [`ToolCall`].
///
/// Returns an unparsed sentinel (empty name) when the string is not
/// call-shaped or a bracketed list contains a non-numeric element.
pub fn parse_function_call(call_str: &str) -> ToolCall {
    let trimmed = call_str.trim();

    let Some(caps) = SPLIT_PATTERN.captures(trimmed) else {
        debug!("Not a function call: {}", trimmed);
        return ToolCall::unparsed(trimmed);
    };

    let name = &caps[1];
    let args_text = caps[2].trim();

    match parse_arguments(args_text) {
        Some(arguments) => ToolCall::new(name, arguments, trimmed),
        None => {
            warn!("Could not parse arguments of {}: {}", name, args_text);
            ToolCall::unparsed(trimmed)
        }
    }
}

/// Parse a `TOOLS_NEEDED` section into executable calls.
///
/// `none` (any case) and empty text yield no calls. Sentinels are dropped.
pub fn parse_tool_calls(tools_needed: &str) -> Vec<ToolCall> {
    let trimmed = tools_needed.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        return Vec::new();
    }

    let calls: Vec<ToolCall> = extract_tool_calls(trimmed)
        .into_iter()
        .map(parse_function_call)
        .filter(|call| {
            if !call.is_parsed() {
                warn!("Dropping unparseable tool call: {}", call.raw());
            }
            call.is_parsed()
        })
        .collect();

    if calls.is_empty() {
        warn!("No tool calls found in TOOLS_NEEDED: {}", trimmed);
    } else {
        debug!("Parsed {} tool call(s)", calls.len());
    }

    calls
}

/// Parse a full model response and extract the calls from its
/// `TOOLS_NEEDED` section
pub fn parse_tools_from_response(response: &str) -> Vec<ToolCall> {
    let sections = ReasoningSections::parse(response);
    parse_tool_calls(&sections.tools_needed)
}

/// `None` only when a bracketed list has a non-numeric element
fn parse_arguments(args_text: &str) -> Option<Vec<ToolArgument>> {
    if args_text.is_empty() {
        return Some(Vec::new());
    }

    if let Some(inner) = args_text
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        return parse_number_list(inner).map(|items| vec![ToolArgument::NumberList(items)]);
    }

    Some(args_text.split(',').map(parse_scalar).collect())
}

fn parse_number_list(inner: &str) -> Option<Vec<f64>> {
    let inner = inner.trim();
    if inner.is_empty() {
        return Some(Vec::new());
    }
    inner
        .split(',')
        .map(|item| item.trim().parse::<f64>().ok())
        .collect()
}

/// Quoted text, then number, then the raw trimmed text
fn parse_scalar(part: &str) -> ToolArgument {
    let part = part.trim();

    if let Some(unquoted) = strip_matching_quotes(part) {
        return ToolArgument::Text(unquoted.to_string());
    }

    match part.parse::<f64>() {
        Ok(n) => ToolArgument::Number(n),
        Err(_) => ToolArgument::Text(part.to_string()),
    }
}

fn strip_matching_quotes(s: &str) -> Option<&str> {
    if s.len() < 2 {
        return None;
    }
    ['"', '\''].into_iter().find_map(|quote| {
        s.strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
    })
}
