//! Renders filter conditions into a parameterized WHERE clause.
//!
//! Only column expressions end up in the SQL text. Every user-supplied value
//! is returned separately and bound as a positional parameter.

use roofquote_core::quote::Condition;

/// A rendered WHERE clause and the values to bind, in placeholder order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhereClause {
    pub sql: String,
    pub values: Vec<String>,
}

/// SQL predicate for a single condition.
fn predicate(condition: &Condition) -> &'static str {
    match condition {
        Condition::State(_) => "state = ?",
        Condition::RoofType(_) => "roof_type = ?",
        // strftime yields NULL for malformed dates, so they never match
        Condition::Year(_) => "strftime('%Y', project_date) = ?",
    }
}

/// Combines conditions with AND. No conditions renders an empty clause.
pub fn build_where_clause(conditions: &[Condition]) -> WhereClause {
    if conditions.is_empty() {
        return WhereClause::default();
    }

    let predicates: Vec<&str> = conditions.iter().map(predicate).collect();

    WhereClause {
        sql: format!("WHERE {}", predicates.join(" AND ")),
        values: conditions.iter().map(|c| c.value().to_string()).collect(),
    }
}
