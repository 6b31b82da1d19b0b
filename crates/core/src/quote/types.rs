use std::fmt;

use serde::{Deserialize, Serialize};

/// Roof area as submitted by the client.
///
/// The storage column is untyped, so the value is kept exactly as it arrived:
/// forms usually send a string, API callers usually send a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoofSize {
    Number(serde_json::Number),
    Text(String),
}

impl RoofSize {
    /// Creates a roof size from a float. Returns `None` for NaN or infinity.
    pub fn from_f64(value: f64) -> Option<Self> {
        serde_json::Number::from_f64(value).map(Self::Number)
    }
}

impl From<i64> for RoofSize {
    fn from(value: i64) -> Self {
        RoofSize::Number(value.into())
    }
}

impl From<&str> for RoofSize {
    fn from(value: &str) -> Self {
        RoofSize::Text(value.to_string())
    }
}

impl fmt::Display for RoofSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoofSize::Number(n) => write!(f, "{n}"),
            RoofSize::Text(s) => f.write_str(s),
        }
    }
}

/// A quote submission. Every field is optional; absent keys and `null` are
/// both "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuote {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contractor_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roof_size: Option<RoofSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roof_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Expected as `YYYY-MM-DD`, but stored without validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_date: Option<String>,
}

impl NewQuote {
    pub fn with_contractor_name(mut self, name: impl Into<String>) -> Self {
        self.contractor_name = Some(name.into());
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_roof_size(mut self, size: impl Into<RoofSize>) -> Self {
        self.roof_size = Some(size.into());
        self
    }

    pub fn with_roof_type(mut self, roof_type: impl Into<String>) -> Self {
        self.roof_type = Some(roof_type.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_project_date(mut self, date: impl Into<String>) -> Self {
        self.project_date = Some(date.into());
        self
    }
}

/// A persisted quote. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: i64,
    pub contractor_name: Option<String>,
    pub company: Option<String>,
    pub roof_size: Option<RoofSize>,
    pub roof_type: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub project_date: Option<String>,
}

impl Quote {
    /// Attaches a store-assigned id to a submission.
    pub fn from_new(id: i64, quote: NewQuote) -> Self {
        Self {
            id,
            contractor_name: quote.contractor_name,
            company: quote.company,
            roof_size: quote.roof_size,
            roof_type: quote.roof_type,
            city: quote.city,
            state: quote.state,
            project_date: quote.project_date,
        }
    }
}
