//! Optional filters narrowing which quotes a query sees.
//!
//! Filters arrive as raw query parameters. Normalization turns them into an
//! ordered list of [`Condition`]s; empty values are dropped so that
//! `?state=` behaves like no `state` parameter at all. Rendering conditions to
//! SQL is the storage backend's job.

use serde::{Deserialize, Serialize};

/// A single equality constraint. All conditions of a filter are ANDed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// `state` equals the value exactly (case-sensitive).
    State(String),
    /// `roofType` equals the value exactly.
    RoofType(String),
    /// The calendar year of `projectDate` equals the value.
    Year(String),
}

impl Condition {
    /// The value to bind for this condition.
    pub fn value(&self) -> &str {
        match self {
            Condition::State(v) | Condition::RoofType(v) | Condition::Year(v) => v,
        }
    }
}

/// Filters accepted by `GET /api/quotes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roof_type: Option<String>,
}

impl QuoteFilter {
    pub fn conditions(&self) -> Vec<Condition> {
        let mut conditions = Vec::new();
        if let Some(state) = non_empty(&self.state) {
            conditions.push(Condition::State(state.to_string()));
        }
        if let Some(roof_type) = non_empty(&self.roof_type) {
            conditions.push(Condition::RoofType(roof_type.to_string()));
        }
        conditions
    }
}

/// Filters shared by every `/api/stats/*` endpoint.
///
/// Note the snake_case `roof_type` parameter, unlike [`QuoteFilter`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roof_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

impl StatsFilter {
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_roof_type(mut self, roof_type: impl Into<String>) -> Self {
        self.roof_type = Some(roof_type.into());
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    /// Conditions in a fixed order: state, roof type, year.
    pub fn conditions(&self) -> Vec<Condition> {
        let mut conditions = Vec::new();
        if let Some(state) = non_empty(&self.state) {
            conditions.push(Condition::State(state.to_string()));
        }
        if let Some(roof_type) = non_empty(&self.roof_type) {
            conditions.push(Condition::RoofType(roof_type.to_string()));
        }
        if let Some(year) = non_empty(&self.year) {
            conditions.push(Condition::Year(year.to_string()));
        }
        conditions
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
