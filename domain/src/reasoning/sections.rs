//! Section parsing for chain-of-thought responses.
//!
//! The model is asked to answer in three labelled sections:
//!
//! ```text
//! REASONING:
//! ...
//! TOOLS_NEEDED:
//! ...
//! FINAL_ANSWER:
//! ...
//! ```
//!
//! Model output is untrusted free text, so [`ReasoningSections::parse`] is
//! total: missing markers leave empty strings, stray text before the first
//! marker is dropped, and nothing here can fail.

use serde::{Deserialize, Serialize};

pub const REASONING_MARKER: &str = "REASONING:";
pub const TOOLS_NEEDED_MARKER: &str = "TOOLS_NEEDED:";
pub const FINAL_ANSWER_MARKER: &str = "FINAL_ANSWER:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Reasoning,
    ToolsNeeded,
    FinalAnswer,
}

impl Section {
    const ALL: [Section; 3] = [Section::Reasoning, Section::ToolsNeeded, Section::FinalAnswer];

    fn marker(&self) -> &'static str {
        match self {
            Section::Reasoning => REASONING_MARKER,
            Section::ToolsNeeded => TOOLS_NEEDED_MARKER,
            Section::FinalAnswer => FINAL_ANSWER_MARKER,
        }
    }

    /// If `line` opens a section, return it together with the rest of the line
    fn open(line: &str) -> Option<(Section, &str)> {
        Self::ALL
            .into_iter()
            .find_map(|section| line.strip_prefix(section.marker()).map(|rest| (section, rest)))
    }
}

/// The three sections of a structured model response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasoningSections {
    pub reasoning: String,
    pub tools_needed: String,
    pub final_answer: String,
}

impl ReasoningSections {
    /// Split raw model text into sections.
    ///
    /// A trimmed line starting with a marker opens that section and seeds it
    /// with the remainder of the line; every later non-empty line is appended
    /// with a single space until the next marker.
    pub fn parse(text: &str) -> Self {
        let mut sections = Self::default();
        let mut current: Option<Section> = None;

        for line in text.lines() {
            let line = line.trim();

            if let Some((section, rest)) = Section::open(line) {
                current = Some(section);
                *sections.slot(section) = rest.trim().to_string();
                continue;
            }

            if line.is_empty() {
                continue;
            }

            if let Some(section) = current {
                let slot = sections.slot(section);
                if !slot.is_empty() {
                    slot.push(' ');
                }
                slot.push_str(line);
            }
        }

        sections
    }

    fn slot(&mut self, section: Section) -> &mut String {
        match section {
            Section::Reasoning => &mut self.reasoning,
            Section::ToolsNeeded => &mut self.tools_needed,
            Section::FinalAnswer => &mut self.final_answer,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.reasoning.is_empty() && self.tools_needed.is_empty() && self.final_answer.is_empty()
    }
}

/// True iff all three section markers occur somewhere in `text`.
///
/// A structural sanity check only; [`ReasoningSections::parse`] does not use it.
pub fn has_reasoning_structure(text: &str) -> bool {
    Section::ALL
        .iter()
        .all(|section| text.contains(section.marker()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_response() {
        let text = "REASONING:\n1. Average 18 and 50.\n2. Take the square root.\n\nTOOLS_NEEDED:\ncalculate_average([18, 50])\nsquare_root(34)\n\nFINAL_ANSWER:\nTools need to be executed first.";
        let sections = ReasoningSections::parse(text);

        assert_eq!(
            sections.reasoning,
            "1. Average 18 and 50. 2. Take the square root."
        );
        assert_eq!(
            sections.tools_needed,
            "calculate_average([18, 50]) square_root(34)"
        );
        assert_eq!(sections.final_answer, "Tools need to be executed first.");
    }

    #[test]
    fn test_inline_content_after_marker() {
        let text = "REASONING: count the vowels\nTOOLS_NEEDED: count_vowels(\"Multimodality\")\nFINAL_ANSWER: 6";
        let sections = ReasoningSections::parse(text);

        assert_eq!(sections.reasoning, "count the vowels");
        assert_eq!(sections.tools_needed, "count_vowels(\"Multimodality\")");
        assert_eq!(sections.final_answer, "6");
    }

    #[test]
    fn test_inline_and_continuation_joined_by_single_space() {
        let text = "FINAL_ANSWER: The answer\n   is 42.  \n";
        let sections = ReasoningSections::parse(text);
        assert_eq!(sections.final_answer, "The answer is 42.");
    }

    #[test]
    fn test_text_before_first_marker_is_discarded() {
        let text = "Sure! Here is my answer.\n\nFINAL_ANSWER: 7";
        let sections = ReasoningSections::parse(text);

        assert_eq!(sections.reasoning, "");
        assert_eq!(sections.tools_needed, "");
        assert_eq!(sections.final_answer, "7");
    }

    #[test]
    fn test_no_markers_yields_empty_sections() {
        for text in ["", "just prose", "reasoning: lowercase does not count", "\n\n\n"] {
            let sections = ReasoningSections::parse(text);
            assert!(sections.is_empty(), "expected empty sections for {:?}", text);
        }
    }

    #[test]
    fn test_indented_markers_are_recognized() {
        let text = "   REASONING: indented\n\tTOOLS_NEEDED: none";
        let sections = ReasoningSections::parse(text);
        assert_eq!(sections.reasoning, "indented");
        assert_eq!(sections.tools_needed, "none");
    }

    #[test]
    fn test_marker_mid_line_does_not_open_section() {
        let text = "REASONING: mention of FINAL_ANSWER: inline";
        let sections = ReasoningSections::parse(text);
        assert_eq!(sections.reasoning, "mention of FINAL_ANSWER: inline");
        assert_eq!(sections.final_answer, "");
    }

    #[test]
    fn test_repeated_marker_restarts_section() {
        let text = "FINAL_ANSWER: first\nFINAL_ANSWER: second";
        let sections = ReasoningSections::parse(text);
        assert_eq!(sections.final_answer, "second");
    }

    #[test]
    fn test_structure_validator() {
        assert!(has_reasoning_structure(
            "REASONING: a\nTOOLS_NEEDED: none\nFINAL_ANSWER: b"
        ));
        assert!(has_reasoning_structure(
            "inline REASONING: TOOLS_NEEDED: FINAL_ANSWER:"
        ));
        assert!(!has_reasoning_structure("REASONING: a\nFINAL_ANSWER: b"));
        assert!(!has_reasoning_structure(""));
    }
}
