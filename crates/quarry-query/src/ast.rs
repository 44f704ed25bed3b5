//! Parsed query representation.

use std::{collections::BTreeSet, fmt};

/// A parsed query: required and excluded terms.
///
/// Terms borrow from the raw query text. Both sets are ordered
/// lexicographically, which fixes the iteration order seen by callers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query<'a> {
    /// Terms that add relevance to the documents containing them.
    pub plus: BTreeSet<&'a str>,
    /// Terms that disqualify the documents containing them.
    pub minus: BTreeSet<&'a str>,
}

impl Query<'_> {
    /// Returns true when the query has neither plus nor minus terms.
    pub fn is_empty(&self) -> bool {
        self.plus.is_empty() && self.minus.is_empty()
    }

    /// Formats the query back into query syntax, plus terms first.
    pub fn to_query_string(&self) -> String {
        self.plus
            .iter()
            .map(|term| (*term).to_string())
            .chain(self.minus.iter().map(|term| format!("-{term}")))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Query<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Plus")?;
        for term in &self.plus {
            writeln!(f, "  Term({term:?})")?;
        }
        writeln!(f, "Minus")?;
        for term in &self.minus {
            writeln!(f, "  Term({term:?})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(Query::default().is_empty());
    }

    #[test]
    fn query_string_orders_plus_before_minus() {
        let query = Query {
            plus: ["dog", "cat"].into(),
            minus: ["collar"].into(),
        };
        assert_eq!(query.to_query_string(), "cat dog -collar");
    }

    #[test]
    fn display_lists_both_sets() {
        let query = Query {
            plus: ["cat"].into(),
            minus: ["collar"].into(),
        };
        let shown = query.to_string();
        assert!(shown.contains("Plus\n  Term(\"cat\")"));
        assert!(shown.contains("Minus\n  Term(\"collar\")"));
    }
}
