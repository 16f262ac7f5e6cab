//! Prompt templates for the two-round reasoning flow

use crate::tool::entities::ToolDefinition;

/// Templates for generating prompts at each round
pub struct ReasoningPromptTemplate;

impl ReasoningPromptTemplate {
    /// Round-1 prompt: tool catalogue, the query, and the three-section schema
    pub fn initial_prompt(query: &str, tools: &[ToolDefinition]) -> String {
        let catalogue: Vec<String> = tools
            .iter()
            .map(|tool| format!("- {}", tool.catalogue_line()))
            .collect();

        format!(
            r#"You are an expert problem solver that uses systematic reasoning and external tools when needed.

AVAILABLE TOOLS:
{}

TASK: "{}"

Solve this step by step using exactly the following format:

REASONING:
1. Break the problem down into logical steps
2. Identify what information or calculations are needed
3. Decide whether any tools are required and why
4. Plan the sequence of operations

TOOLS_NEEDED:
List one tool call per line as function_name(parameters).
If no tool is required, write exactly: none

FINAL_ANSWER:
Give the final answer, or state that tools need to be executed first.

Guidelines:
- Think step by step before concluding
- Use tools for any calculation or text analysis
- Pass literal arguments only: numbers, quoted strings, or [number, ...] lists
- Do not nest tool calls"#,
            catalogue.join("\n"),
            query
        )
    }

    /// Round-2 prompt: round-1 reasoning plus keyed tool output.
    ///
    /// `results` holds `(key, value)` pairs where a failed call's value is
    /// already rendered as `Error: <message>`.
    pub fn follow_up_prompt(query: &str, reasoning: &str, results: &[(String, String)]) -> String {
        let mut prompt = format!(
            r#"Original query: {}

Previous reasoning:
{}

Tool execution results:
"#,
            query, reasoning
        );

        for (key, value) in results {
            prompt.push_str(&format!("- {}: {}\n", key, value));
        }

        prompt.push_str(
            r#"
Now provide the final answer based on your reasoning and the tool results.
Respond with only this section:

FINAL_ANSWER:
[Combine your reasoning with the tool results into the complete answer]"#,
        );

        prompt
    }
}
