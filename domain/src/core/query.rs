//! Query value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A natural-language query to reason about (Value Object)
///
/// The query is embedded verbatim in both the initial and the follow-up
/// prompt, so it is kept exactly as the user typed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    content: String,
}

impl Query {
    /// Create a query, rejecting empty or whitespace-only content
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::InvalidQuery(
                "query cannot be empty".to_string(),
            ));
        }
        Ok(Self { content })
    }

    /// Get the query content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<&str> for Query {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Query::try_new(s)
    }
}

impl TryFrom<String> for Query {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Query::try_new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_creation() {
        let q = Query::try_new("How many vowels are in 'Multimodality'?").unwrap();
        assert_eq!(q.content(), "How many vowels are in 'Multimodality'?");
    }

    #[test]
    fn test_query_try_from_str() {
        let q: Query = "What is 18 + 50?".try_into().unwrap();
        assert_eq!(q.to_string(), "What is 18 + 50?");
    }

    #[test]
    fn test_empty_query_rejected() {
        assert!(Query::try_new("").is_err());
        assert!(Query::try_new("   \n").is_err());
    }

    #[test]
    fn test_query_content_not_trimmed() {
        let q = Query::try_new("  spaced  ").unwrap();
        assert_eq!(q.into_content(), "  spaced  ");
    }
}
