//! Batch result keys
//!
//! Results of one batch are substituted into the follow-up prompt as
//! `- <key>: <value>` lines, so every key in a batch must be unique. A tool
//! requested once keeps its bare name; a tool requested several times gets
//! its batch position appended to every occurrence (`square_root_0`,
//! `square_root_2`). A suffixed key that clashes with another key of the
//! batch (`[x, x, x_1]`) gets a further `_<n>` until it is free.

use super::entities::ToolCall;
use super::value_objects::ToolResult;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Compute the result key for each call of a batch, in input order
pub fn result_keys(calls: &[ToolCall]) -> Vec<String> {
    let mut occurrences: HashMap<&str, usize> = HashMap::new();
    for call in calls {
        *occurrences.entry(call.name()).or_insert(0) += 1;
    }

    let is_repeated = |call: &ToolCall| occurrences.get(call.name()).copied().unwrap_or(0) > 1;

    let mut taken: HashSet<String> = calls
        .iter()
        .filter(|&call| !is_repeated(call))
        .map(|call| call.name().to_string())
        .collect();

    calls
        .iter()
        .enumerate()
        .map(|(index, call)| {
            if !is_repeated(call) {
                return call.name().to_string();
            }

            let base = format!("{}_{}", call.name(), index);
            let mut key = base.clone();
            let mut bump = 1;
            while taken.contains(&key) {
                key = format!("{}_{}", base, bump);
                bump += 1;
            }
            taken.insert(key.clone());
            key
        })
        .collect()
}

/// A tool result with its batch key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyedToolResult {
    pub key: String,
    pub result: ToolResult,
}

/// Ordered results of one executed batch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolBatchResults {
    entries: Vec<KeyedToolResult>,
}

impl ToolBatchResults {
    /// Pair each result with its key. `results` must be in the same order as `calls`.
    pub fn from_batch(calls: &[ToolCall], results: Vec<ToolResult>) -> Self {
        let entries = result_keys(calls)
            .into_iter()
            .zip(results)
            .map(|(key, result)| KeyedToolResult { key, result })
            .collect();
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeyedToolResult> {
        self.entries.iter()
    }

    pub fn get(&self, key: &str) -> Option<&ToolResult> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.result)
    }

    pub fn any_success(&self) -> bool {
        self.entries.iter().any(|entry| entry.result.is_success())
    }

    pub fn success_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.result.is_success())
            .count()
    }

    /// `(key, value-or-"Error: <message>")` pairs, in batch order
    pub fn display_pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|entry| (entry.key.clone(), entry.result.display_value()))
            .collect()
    }
}
